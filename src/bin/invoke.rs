/// 書籍数計測 Lambdaエントリポイント（直接呼び出し）
///
/// Lambdaのinvokeで受け取ったペイロードを処理し、
/// レスポンスJSONを文字列として返却する。
use book_counter::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// JSON文字列のペイロードはテキストとしてパースし、
/// それ以外のJSON値はパース済みのペイロードとしてそのまま扱う。
/// 処理の失敗はエラーではなく`{"ok": false, ...}`として返す。
async fn handler(event: LambdaEvent<Value>) -> Result<String, Error> {
    let (payload, context) = event.into_parts();
    Ok(book_counter::handle(payload, &context))
}
