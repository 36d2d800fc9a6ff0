/// 入力イベント
///
/// 1回の呼び出しで受け取る生の入力。バイナリ、テキスト、
/// またはホスト側で既にパース済みのJSON値のいずれか。
use serde_json::Value;

/// 入力イベント
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// UTF-8でエンコードされたJSONのバイト列
    Binary(Vec<u8>),

    /// JSONテキスト
    Text(String),

    /// ホストがパース済みの値（そのままペイロードとして扱う）
    Value(Value),
}

impl Event {
    /// ログ出力用のイベント種別
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Binary(_) => "binary",
            Event::Text(_) => "text",
            Event::Value(_) => "value",
        }
    }

    /// バイト列をUTF-8テキストとしてデコード
    ///
    /// 不正なバイト列は置換文字にせず読み飛ばす。
    /// デコード自体は失敗しない。
    pub fn decode_text(bytes: &[u8]) -> String {
        bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
    }
}

impl From<Vec<u8>> for Event {
    fn from(bytes: Vec<u8>) -> Self {
        Event::Binary(bytes)
    }
}

impl From<&[u8]> for Event {
    fn from(bytes: &[u8]) -> Self {
        Event::Binary(bytes.to_vec())
    }
}

impl From<String> for Event {
    fn from(text: String) -> Self {
        Event::Text(text)
    }
}

impl From<&str> for Event {
    fn from(text: &str) -> Self {
        Event::Text(text.to_string())
    }
}

impl From<Value> for Event {
    /// Lambdaペイロードからの変換
    ///
    /// JSON文字列はテキストイベント、それ以外はパース済みの値として扱う。
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Event::Text(text),
            other => Event::Value(other),
        }
    }
}
