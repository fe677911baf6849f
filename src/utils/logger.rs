use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Log targets of the library and of each binary crate.
const LOG_TARGETS: [&str; 3] = ["lambda_layer_demo", "invoke_local", "lambda"];

/// Default filter directives when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let mut directives: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect();
    if verbose {
        directives.push("info".to_string());
    }
    directives.join(",")
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

// Logs go to stderr so stdout carries only the handler's output lines.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .json(), // CloudWatch indexes JSON fields
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_binaries() {
        assert_eq!(
            default_directives(false),
            "lambda_layer_demo=info,invoke_local=info,lambda=info"
        );
    }

    #[test]
    fn test_verbose_directives() {
        let directives = default_directives(true);
        assert!(directives.contains("invoke_local=debug"));
        assert!(directives.contains("lambda_layer_demo=debug"));
        assert!(directives.ends_with(",info"));
    }
}
