/// JSON値の形状分類
///
/// serde_json::Valueを「マッピング・シーケンス・テキスト・スカラー・null」の
/// いずれかに分類する。エラーメッセージと長さ計測の分岐に使用する。
use std::fmt;

use serde_json::Value;

/// JSON値の形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    /// JSONオブジェクト
    Mapping,
    /// JSON配列
    Sequence,
    /// JSON文字列
    Text,
    /// 数値または真偽値
    Scalar,
    /// null
    Null,
}

impl JsonShape {
    /// 値の形状を判定
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonShape::Mapping,
            Value::Array(_) => JsonShape::Sequence,
            Value::String(_) => JsonShape::Text,
            Value::Number(_) | Value::Bool(_) => JsonShape::Scalar,
            Value::Null => JsonShape::Null,
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonShape::Mapping => "mapping",
            JsonShape::Sequence => "sequence",
            JsonShape::Text => "text",
            JsonShape::Scalar => "scalar",
            JsonShape::Null => "null",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_of_each_variant() {
        assert_eq!(JsonShape::of(&json!({"a": 1})), JsonShape::Mapping);
        assert_eq!(JsonShape::of(&json!([1, 2])), JsonShape::Sequence);
        assert_eq!(JsonShape::of(&json!("abc")), JsonShape::Text);
        assert_eq!(JsonShape::of(&json!(42)), JsonShape::Scalar);
        assert_eq!(JsonShape::of(&json!(1.5)), JsonShape::Scalar);
        assert_eq!(JsonShape::of(&json!(true)), JsonShape::Scalar);
        assert_eq!(JsonShape::of(&Value::Null), JsonShape::Null);
    }

    /// 空のコンテナも形状は変わらない
    #[test]
    fn test_shape_of_empty_containers() {
        assert_eq!(JsonShape::of(&json!({})), JsonShape::Mapping);
        assert_eq!(JsonShape::of(&json!([])), JsonShape::Sequence);
        assert_eq!(JsonShape::of(&json!("")), JsonShape::Text);
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(JsonShape::Mapping.to_string(), "mapping");
        assert_eq!(JsonShape::Sequence.to_string(), "sequence");
        assert_eq!(JsonShape::Text.to_string(), "text");
        assert_eq!(JsonShape::Scalar.to_string(), "scalar");
        assert_eq!(JsonShape::Null.to_string(), "null");
    }
}
