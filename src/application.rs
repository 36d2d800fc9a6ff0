// アプリケーション層モジュール
pub mod book_count_handler;

// 再エクスポート
pub use book_count_handler::BookCountHandler;
