use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use postgen::clients::openai;
use postgen::config::Config;
use postgen::handler::{InvocationStatus, Pipeline};
use postgen::storage::s3::S3Store;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .init();

    let config = Config::from_env()?;

    // Clients live for the whole process and are reused across invocations.
    let client = openai::Client::from_config(&config.completion);
    let store = S3Store::from_config(&config.storage)?;
    let pipeline = Pipeline::new(Box::new(client), Box::new(store), &config.completion.model)
        .with_max_tokens(config.completion.max_tokens);

    tracing::info!(
        model = %config.completion.model,
        bucket = %config.storage.bucket,
        "postgen ready"
    );

    run(service_fn(|event: LambdaEvent<Value>| {
        handler(event, &pipeline)
    }))
    .await
}

async fn handler(event: LambdaEvent<Value>, pipeline: &Pipeline) -> Result<InvocationStatus, Error> {
    tracing::info!(request_id = %event.context.request_id, "invocation started");
    Ok(pipeline.invoke().await?)
}
