/// ハンドラーのレスポンス
///
/// 成功時は書籍数、失敗時はエラーメッセージを持つ。
/// JSON文字列に変換して呼び出し元に返す。
///
/// - 成功: `{"ok": true, "bookCount": <integer>}`
/// - 失敗: `{"ok": false, "error": "<message>"}`
use serde::Serialize;

/// ハンドラーのレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookCountResponse {
    /// 書籍数の計測に成功
    Success { book_count: usize },

    /// 処理に失敗
    Failure { error: String },
}

impl BookCountResponse {
    /// 成功レスポンスを作成
    pub fn success(book_count: usize) -> Self {
        BookCountResponse::Success { book_count }
    }

    /// 失敗レスポンスを作成
    pub fn failure(error: impl Into<String>) -> Self {
        BookCountResponse::Failure {
            error: error.into(),
        }
    }

    /// `ok`フィールドの値
    pub fn is_ok(&self) -> bool {
        matches!(self, BookCountResponse::Success { .. })
    }

    /// シリアライズ用のボディを構築
    fn body(&self) -> ResponseBody<'_> {
        match self {
            BookCountResponse::Success { book_count } => ResponseBody {
                ok: true,
                book_count: Some(*book_count),
                error: None,
            },
            BookCountResponse::Failure { error } => ResponseBody {
                ok: false,
                book_count: None,
                error: Some(error.as_str()),
            },
        }
    }

    /// JSON文字列に変換
    ///
    /// キー順は`ok`が先頭。非ASCII文字はエスケープせずそのまま出力する。
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.body()).expect("BookCountResponseのシリアライズに失敗")
    }
}

/// レスポンスのJSON表現
#[derive(Serialize)]
struct ResponseBody<'a> {
    ok: bool,

    #[serde(rename = "bookCount", skip_serializing_if = "Option::is_none")]
    book_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}
