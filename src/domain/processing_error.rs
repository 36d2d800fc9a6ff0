/// イベント処理エラー
///
/// ハンドラー内で発生しうる全ての失敗を表す単一のエラー型。
/// エラーメッセージはそのままレスポンスの`error`フィールドに使われる。
use thiserror::Error;

use super::JsonShape;

/// イベント処理エラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProcessingError {
    /// JSONパースに失敗
    #[error("failed to parse JSON: {0}")]
    InvalidJson(String),

    /// ペイロードがJSONオブジェクトでない
    #[error("payload must be a JSON object, found {found}")]
    NotAMapping { found: JsonShape },

    /// booksが長さを持たない値（数値・真偽値・null）
    #[error("books has no length: found {found}")]
    Unmeasurable { found: JsonShape },

    /// 厳格モードでbooksが配列でない
    #[error("books must be a JSON array, found {found}")]
    NotASequence { found: JsonShape },
}

impl From<serde_json::Error> for ProcessingError {
    fn from(err: serde_json::Error) -> Self {
        ProcessingError::InvalidJson(err.to_string())
    }
}
