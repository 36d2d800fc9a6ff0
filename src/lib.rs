use lambda_runtime::Context;
use tracing::{info, info_span};

use crate::application::BookCountHandler;
use crate::domain::{BookCountResponse, CountingConfig, Event};

// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

/// イベントを処理してレスポンスJSONを返す
///
/// `context`は呼び出し規約に合わせて受け取るのみで、ログ出力以外には使わない。
/// 失敗時もエラーは返さず、`{"ok": false, "error": ...}`を返す。
pub fn handle(event: impl Into<Event>, context: &Context) -> String {
    respond(event, context).to_json()
}

/// イベントを処理してレスポンスを返す
///
/// 計測設定は呼び出しごとに環境変数から読み込む。
/// 処理中のログは`request_id`を持つ`invocation`スパンに紐づく。
pub fn respond(event: impl Into<Event>, context: &Context) -> BookCountResponse {
    let event = event.into();

    let span = info_span!("invocation", request_id = %context.request_id);
    let _guard = span.enter();

    info!(event_kind = event.kind(), "イベント受信");

    let handler = BookCountHandler::new(CountingConfig::from_env());
    let response = handler.handle(event);

    // 失敗時はハンドラー側でwarnを出力済み
    if let BookCountResponse::Success { book_count } = &response {
        info!(book_count = *book_count, "書籍数の計測完了");
    }

    response
}
