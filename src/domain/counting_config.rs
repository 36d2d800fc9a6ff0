// 書籍数計測の設定
//
// booksの長さをどこまで許容して計測するかを保持し、
// 環境変数からの読み込みとデフォルト値を提供するドメイン層コンポーネント。

use tracing::info;

// ===========================================
// デフォルト値定義
// ===========================================

/// 配列以外のbooksもエラーにせず長さを計測する
pub const DEFAULT_STRICT_BOOKS: bool = false;

// ===========================================
// 環境変数名定義
// ===========================================

/// 環境変数名: strict_books
pub const ENV_STRICT_BOOKS: &str = "BOOK_COUNTER_STRICT_BOOKS";

// ===========================================
// CountingConfig構造体
// ===========================================

/// 書籍数計測の設定（ドメイン層）
///
/// 呼び出しごとに環境変数から読み込まれる不変データ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingConfig {
    /// trueの場合、配列のbooksのみを計測する
    ///
    /// falseの場合は文字列（文字数）やオブジェクト（キー数）も計測する。
    pub strict_books: bool,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            strict_books: DEFAULT_STRICT_BOOKS,
        }
    }
}

impl CountingConfig {
    /// 厳格モードの設定を作成
    pub fn strict() -> Self {
        Self { strict_books: true }
    }

    /// 環境変数から設定を読み込み
    ///
    /// 環境変数が未設定、またはパースエラーの場合はデフォルト値を使用する。
    ///
    /// # 環境変数
    /// - BOOK_COUNTER_STRICT_BOOKS: 配列のbooksのみを計測するか（true/false/1/0）
    pub fn from_env() -> Self {
        let strict_books = parse_env_bool(ENV_STRICT_BOOKS, DEFAULT_STRICT_BOOKS);

        info!(strict_books, "CountingConfig loaded");

        Self { strict_books }
    }
}

/// 環境変数からbool値を読み込む
///
/// 大文字小文字を区別せず`true`/`false`/`1`/`0`を受け付ける。
/// 未設定またはパースエラーの場合はデフォルト値を返す。
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => match parse_bool(&value) {
            Some(parsed) => {
                info!(key, value = parsed, "Environment variable loaded");
                parsed
            }
            None => {
                info!(
                    key,
                    value = %value,
                    default,
                    "Invalid environment variable value, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
