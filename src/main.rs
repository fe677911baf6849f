use anyhow::Context;
use clap::Parser;
use lambda_layer_demo::utils::{logger, validation::Validate};
use lambda_layer_demo::{CliConfig, InvocationContext, MainHandler, RequestHandler};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting invoke-local");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let payload = config.load_payload().context("failed to load payload")?;
    tracing::debug!("Payload carries {} keys", payload.len());

    let handler = MainHandler::stdout();
    let mut result = None;

    for attempt in 1..=config.times {
        let context = InvocationContext::local();
        tracing::info!(
            request_id = %context.request_id,
            deadline = ?context.deadline(),
            attempt,
            "Invoking handler"
        );

        result = handler
            .handle_request(payload.clone(), &context)
            .with_context(|| format!("invocation {} failed", attempt))?;
    }

    let rendered = serde_json::to_string(&result)?;
    tracing::info!(result = %rendered, "Handler returned");
    Ok(())
}
