pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod layer;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemoryConsole, StdoutConsole};
pub use crate::core::handler::MainHandler;
pub use domain::model::{HandlerResult, InvocationContext, Payload};
pub use domain::ports::{Console, RequestHandler};
pub use layer::print_message;
pub use utils::error::{LayerError, Result};
