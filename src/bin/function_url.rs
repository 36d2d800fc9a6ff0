/// 書籍数計測 HTTP Lambdaエントリポイント
///
/// Lambda Function URL経由のHTTPリクエストのボディを処理し、
/// レスポンスJSONを返却する。
use book_counter::infrastructure::{event_from_body, http_response, init_logging};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("Function URL Lambda関数を初期化");

    // Lambda関数を実行
    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// # Arguments
/// * `request` - HTTPリクエスト（ボディのみ使用）
///
/// # Returns
/// 成功時は200、処理失敗時は400のJSONレスポンス
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let context = request.lambda_context_ref().cloned().unwrap_or_default();
    let event = event_from_body(request.into_body());

    let response = book_counter::respond(event, &context);

    Ok(http_response(&response)?)
}
