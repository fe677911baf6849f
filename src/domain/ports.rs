use crate::domain::model::InvocationContext;
use crate::utils::error::Result;

/// Line-oriented text sink standing in for standard output.
pub trait Console: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;
}

/// Single-method request/response contract expected by the hosting platform.
pub trait RequestHandler: Send + Sync {
    type Input;
    type Output;

    fn handle_request(&self, input: Self::Input, context: &InvocationContext)
        -> Result<Self::Output>;
}
