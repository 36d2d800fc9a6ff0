/// Lambda Function URLとの変換
///
/// HTTPリクエストボディを入力イベントに、ハンドラーのレスポンスを
/// HTTPレスポンスに変換する。
use lambda_http::http::header::{HeaderValue, CONTENT_TYPE};
use lambda_http::http::{self, StatusCode};
use lambda_http::{Body, Response};

use crate::domain::{BookCountResponse, Event};

/// レスポンスのContent-Type
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTPリクエストボディを入力イベントに変換
///
/// - `Body::Binary` → `Event::Binary`（base64デコード済みのバイト列）
/// - `Body::Text` → `Event::Text`
/// - `Body::Empty` → 空の`Event::Text`
pub fn event_from_body(body: Body) -> Event {
    match body {
        Body::Empty => Event::Text(String::new()),
        Body::Text(text) => Event::Text(text),
        Body::Binary(bytes) => Event::Binary(bytes),
        other => Event::Binary(other.to_vec()),
    }
}

/// ハンドラーのレスポンスをHTTPレスポンスに変換
///
/// `ok`がtrueなら200、falseなら400を返す。ボディは常にレスポンスJSON。
pub fn http_response(response: &BookCountResponse) -> Result<Response<Body>, http::Error> {
    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
        .body(Body::Text(response.to_json()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn body_text(response: &Response<Body>) -> String {
        match response.body() {
            Body::Text(text) => text.clone(),
            Body::Binary(bytes) => String::from_utf8(bytes.clone()).unwrap(),
            Body::Empty => String::new(),
            _ => panic!("予期しないBody型"),
        }
    }

    // ==================== event_from_bodyのテスト ====================

    #[test]
    fn test_empty_body_is_empty_text() {
        assert_eq!(event_from_body(Body::Empty), Event::Text(String::new()));
    }

    #[test]
    fn test_text_body_is_text_event() {
        let event = event_from_body(Body::Text(r#"{"books":[]}"#.to_string()));
        assert_eq!(event, Event::Text(r#"{"books":[]}"#.to_string()));
    }

    #[test]
    fn test_binary_body_is_binary_event() {
        let bytes = br#"{"books":[1]}"#.to_vec();
        let event = event_from_body(Body::Binary(bytes.clone()));
        assert_eq!(event, Event::Binary(bytes));
    }

    // ==================== http_responseのテスト ====================

    #[test]
    fn test_success_is_200_with_json_body() {
        let response = http_response(&BookCountResponse::success(2)).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );

        let parsed: Value = serde_json::from_str(&body_text(&response)).unwrap();
        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed["bookCount"], 2);
    }

    #[test]
    fn test_failure_is_400_with_json_body() {
        let response = http_response(&BookCountResponse::failure("failed to parse JSON")).unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let parsed: Value = serde_json::from_str(&body_text(&response)).unwrap();
        assert_eq!(parsed["ok"], false);
        assert_eq!(parsed["error"], "failed to parse JSON");
    }
}
