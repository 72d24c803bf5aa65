//! Platform entrypoint.
//!
//! Pure composition: plugs the default [`HelloWorld`] handler into the
//! translation pipeline and hands the whole thing to the execution platform
//! as the single function it calls per event.

use lambda_runtime::{service_fn, LambdaEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lambda_bridge::{proxy, HelloWorld, InvocationContext, ProxyRequest, ProxyResponse};

/// One platform invocation: payload in, response out. A fatal translation
/// error (non-UTF-8 captured body) propagates and fails the invocation.
async fn invocation(event: LambdaEvent<ProxyRequest>) -> Result<ProxyResponse, lambda_runtime::Error> {
    let (payload, context) = event.into_parts();
    let ctx = InvocationContext::from(context);
    let response = proxy(ctx, &HelloWorld, payload)?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize tracing subscriber; the platform's log sink adds its own
    // timestamps.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lambda_bridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    tracing::info!("lambda-bridge starting");

    lambda_runtime::run(service_fn(invocation)).await
}
