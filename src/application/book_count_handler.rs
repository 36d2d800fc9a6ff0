/// 書籍数計測ハンドラー
///
/// 入力イベントをパースして`books`の長さを計測し、
/// 結果をレスポンスに変換する。
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{BookCountResponse, CountingConfig, Event, JsonShape, Payload, ProcessingError};

/// 書籍数計測ハンドラー
///
/// 状態を持たないため、同一入力に対して常に同じレスポンスを返す。
pub struct BookCountHandler {
    /// 計測設定
    config: CountingConfig,
}

impl BookCountHandler {
    /// 新しいBookCountHandlerを作成
    pub fn new(config: CountingConfig) -> Self {
        Self { config }
    }

    /// 計測設定を取得
    pub fn config(&self) -> &CountingConfig {
        &self.config
    }

    /// イベントを処理してレスポンスを生成
    ///
    /// エラーは全てこの境界で失敗レスポンスに変換され、呼び出し元には伝播しない。
    ///
    /// # 例
    /// ```
    /// use book_counter::application::BookCountHandler;
    /// use book_counter::domain::{CountingConfig, Event};
    ///
    /// let handler = BookCountHandler::new(CountingConfig::default());
    /// let response = handler.handle(Event::from(r#"{"data": {"books": [1, 2]}}"#));
    /// assert!(response.is_ok());
    /// ```
    pub fn handle(&self, event: Event) -> BookCountResponse {
        match self.count_books(event) {
            Ok(book_count) => BookCountResponse::success(book_count),
            Err(err) => {
                warn!(error = %err, "書籍数の計測に失敗");
                BookCountResponse::failure(err.to_string())
            }
        }
    }

    /// イベントから書籍数を計測
    ///
    /// # 処理フロー
    /// 1. イベントをペイロードにデコード・パース
    /// 2. `data`（またはペイロード自体）から`books`を取得
    /// 3. `books`がなければ0、あれば長さを計測
    ///
    /// # 戻り値
    /// * `Ok(usize)` - 書籍数
    /// * `Err(ProcessingError)` - パース失敗、または計測できない値
    pub fn count_books(&self, event: Event) -> Result<usize, ProcessingError> {
        let payload = Payload::from_event(event)?;

        let book_count = match payload.books()? {
            Some(books) => self.measure(books)?,
            None => 0,
        };

        debug!(
            book_count,
            strict_books = self.config.strict_books,
            "書籍数を計測"
        );

        Ok(book_count)
    }

    /// booksの長さを計測
    ///
    /// 厳格モードでは配列のみ。それ以外は配列の要素数、
    /// オブジェクトのキー数、文字列の文字数を長さとする。
    fn measure(&self, books: &Value) -> Result<usize, ProcessingError> {
        let found = JsonShape::of(books);

        if self.config.strict_books {
            return match books {
                Value::Array(items) => Ok(items.len()),
                _ => Err(ProcessingError::NotASequence { found }),
            };
        }

        match books {
            Value::Array(items) => Ok(items.len()),
            Value::Object(fields) => Ok(fields.len()),
            Value::String(text) => Ok(text.chars().count()),
            Value::Number(_) | Value::Bool(_) | Value::Null => {
                Err(ProcessingError::Unmeasurable { found })
            }
        }
    }
}

impl Default for BookCountHandler {
    fn default() -> Self {
        Self::new(CountingConfig::default())
    }
}
