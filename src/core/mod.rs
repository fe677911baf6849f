pub mod handler;

pub use crate::domain::model::{HandlerResult, InvocationContext, Payload};
pub use crate::domain::ports::{Console, RequestHandler};
pub use crate::utils::error::Result;
