/// イベントペイロード
///
/// 入力イベントをデコード・パースしたJSON値と、そこから
/// `data`・`books`を安全に取り出すアクセサを提供する。
///
/// 対応する形:
/// - `{"books": [...]}`
/// - `{"data": {"books": [...]}}`
use serde_json::{Map, Value};

use super::{Event, JsonShape, ProcessingError};

/// `data`ラッパーのキー
pub const DATA_KEY: &str = "data";

/// 書籍リストのキー
pub const BOOKS_KEY: &str = "books";

/// パース済みのイベントペイロード
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    value: Value,
}

impl Payload {
    /// イベントからペイロードを構築
    ///
    /// # 処理フロー
    /// 1. バイナリはUTF-8テキストにデコード（不正なバイトは読み飛ばす）
    /// 2. 空白のみ・空のテキストは空オブジェクトとして扱う
    /// 3. それ以外のテキストはJSONとしてパース
    /// 4. パース済みの値はそのまま使う（nullは空オブジェクト扱い）
    ///
    /// パース済みのオブジェクトを空オブジェクトに置き換えず計測対象とする点は、
    /// 文字列・バイト列以外を一律`{}`とみなすホスト実装とは意図的に異なる。
    ///
    /// # 戻り値
    /// * `Ok(Payload)` - 構築成功時
    /// * `Err(ProcessingError::InvalidJson)` - JSONパース失敗時
    pub fn from_event(event: Event) -> Result<Self, ProcessingError> {
        let value = match event {
            Event::Binary(bytes) => Self::parse_text(&Event::decode_text(&bytes))?,
            Event::Text(text) => Self::parse_text(&text)?,
            Event::Value(Value::Null) => Value::Object(Map::new()),
            Event::Value(value) => value,
        };

        Ok(Self { value })
    }

    fn parse_text(text: &str) -> Result<Value, ProcessingError> {
        if text.trim_matches(is_blank).is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        Ok(serde_json::from_str(text)?)
    }

    /// パース済みのJSON値
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// `books`を読み出す対象のオブジェクトを取得
    ///
    /// `data`キーの値がオブジェクトならそれを、そうでなければ
    /// ペイロード自体を返す。ペイロードがオブジェクトでない場合はエラー。
    pub fn data(&self) -> Result<&Map<String, Value>, ProcessingError> {
        let payload = self
            .value
            .as_object()
            .ok_or(ProcessingError::NotAMapping {
                found: JsonShape::of(&self.value),
            })?;

        match payload.get(DATA_KEY) {
            Some(Value::Object(data)) => Ok(data),
            _ => Ok(payload),
        }
    }

    /// `books`の値を取得
    ///
    /// キーが存在しない場合は`None`（空のリストとして扱う）。
    pub fn books(&self) -> Result<Option<&Value>, ProcessingError> {
        Ok(self.data()?.get(BOOKS_KEY))
    }
}

/// 空白とみなす文字
///
/// Unicodeの空白に加え、区切り制御文字（U+001C〜U+001F）も空白として扱う。
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
