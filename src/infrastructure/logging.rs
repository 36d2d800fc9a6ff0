/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式での出力をサポートする。
use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// Lambda環境向けのログサブスクライバーを初期化する
///
/// JSON形式での構造化ログ出力を設定し、環境変数`RUST_LOG`または
/// デフォルトのログレベル（info）でフィルタリングを行う。
///
/// この関数は複数回呼び出しても安全で、最初の呼び出しのみ初期化を実行する。
/// 他のサブスクライバーが既に登録されている場合は何もしない。
///
/// # 使用例
/// ```ignore
/// use book_counter::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging() {
    INIT.call_once(|| {
        // 環境変数からログレベルを取得、デフォルトはinfo
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer(std::io::stdout))
            .try_init();
    });
}

/// JSON形式のログレイヤー（Lambda/CloudWatch向け）
///
/// イベントのフィールドはトップレベルに展開し、現在のスパン
/// （`invocation`スパンの`request_id`など）を`span`キーに出力する。
pub(crate) fn json_layer<S, W>(make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_writer(make_writer)
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
