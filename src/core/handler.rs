use crate::adapters::StdoutConsole;
use crate::core::{Console, HandlerResult, InvocationContext, Payload, RequestHandler, Result};
use crate::layer;

pub const INVOCATION_BANNER: &str = "Lambda invoked, using layer function";

/// Text handed to the layer on every invocation.
pub const LAYER_TEXT: &str = "test";

/// Smoke-test handler: announces itself, calls the layer, returns `null`.
///
/// The payload and context are accepted to satisfy the platform contract and are never read.
#[derive(Debug, Default)]
pub struct MainHandler<C: Console> {
    console: C,
}

impl<C: Console> MainHandler<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}

impl MainHandler<StdoutConsole> {
    pub fn stdout() -> Self {
        Self::new(StdoutConsole)
    }
}

impl<C: Console> RequestHandler for MainHandler<C> {
    type Input = Payload;
    type Output = HandlerResult;

    fn handle_request(&self, _input: Payload, _context: &InvocationContext) -> Result<HandlerResult> {
        self.console.write_line(INVOCATION_BANNER)?;
        layer::write_message(&self.console, LAYER_TEXT)?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;

    #[test]
    fn test_handler_output() {
        let handler = MainHandler::new(MemoryConsole::new());
        let result = handler
            .handle_request(Payload::new(), &InvocationContext::default())
            .unwrap();

        assert!(result.is_none());
        assert_eq!(
            handler.console().lines(),
            vec![
                "Lambda invoked, using layer function",
                "This is a message from a layer!",
                "The message is: [test]",
            ]
        );
    }

    #[test]
    fn test_handler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MainHandler<StdoutConsole>>();
        assert_send_sync::<MainHandler<MemoryConsole>>();
    }
}
