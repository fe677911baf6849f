//! Shared message utility, packaged apart from any handler.
//!
//! Nothing here depends on `core`; handlers call into the layer, never the reverse.

use crate::adapters::StdoutConsole;
use crate::domain::ports::Console;
use crate::utils::error::Result;

pub const LAYER_BANNER: &str = "This is a message from a layer!";

/// Textual form of an absent message.
pub const NULL_TEXT: &str = "null";

pub fn format_message_line(text: &str) -> String {
    format!("The message is: [{}]", text)
}

/// Writes the layer banner followed by the bracketed `text`.
pub fn write_message<C: Console + ?Sized>(console: &C, text: &str) -> Result<()> {
    console.write_line(LAYER_BANNER)?;
    console.write_line(&format_message_line(text))?;
    Ok(())
}

/// Same as [`write_message`], rendering `None` as `null`.
pub fn write_optional_message<C: Console + ?Sized>(console: &C, text: Option<&str>) -> Result<()> {
    write_message(console, text.unwrap_or(NULL_TEXT))
}

/// Prints the two layer lines to standard output.
///
/// A broken stdout is the host's problem: it is logged, not returned.
pub fn print_message(text: &str) {
    if let Err(e) = write_message(&StdoutConsole, text) {
        tracing::error!("Failed to print layer message: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;

    #[test]
    fn test_message_lines() {
        let console = MemoryConsole::new();
        write_message(&console, "hello").unwrap();

        assert_eq!(
            console.lines(),
            vec!["This is a message from a layer!", "The message is: [hello]"]
        );
    }

    #[test]
    fn test_empty_message() {
        let console = MemoryConsole::new();
        write_message(&console, "").unwrap();

        assert_eq!(console.lines()[1], "The message is: []");
    }

    #[test]
    fn test_missing_message_renders_null() {
        let console = MemoryConsole::new();
        write_optional_message(&console, None).unwrap();

        assert_eq!(console.lines()[1], "The message is: [null]");
    }

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(
            format_message_line("a]b [c]\tü"),
            "The message is: [a]b [c]\tü]"
        );
    }
}
