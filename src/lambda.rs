#[cfg(feature = "lambda")]
use lambda_layer_demo::utils::logger;
#[cfg(feature = "lambda")]
use lambda_layer_demo::{HandlerResult, InvocationContext, MainHandler, Payload, RequestHandler, StdoutConsole};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &MainHandler<StdoutConsole>,
    event: LambdaEvent<Payload>,
) -> Result<HandlerResult, Error> {
    let LambdaEvent { payload, context } = event;
    let context = InvocationContext::from(&context);

    tracing::info!(
        request_id = %context.request_id,
        deadline = ?context.deadline(),
        "Handling invocation"
    );

    let result = handler
        .handle_request(payload, &context)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(result)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let handler = MainHandler::stdout();
    let handler = &handler;

    run(service_fn(move |event| async move {
        function_handler(handler, event).await
    }))
    .await
}
