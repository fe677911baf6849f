use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

/// Collects lines in memory; used for local inspection and tests.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Returns everything written so far and clears the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        // Pushes are atomic, so a poisoned buffer is still consistent.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) -> Result<()> {
        self.guard().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_keeps_order() {
        let console = MemoryConsole::new();
        console.write_line("first").unwrap();
        console.write_line("").unwrap();
        console.write_line("third").unwrap();

        assert_eq!(console.lines(), vec!["first", "", "third"]);
    }

    #[test]
    fn test_memory_console_take_clears() {
        let console = MemoryConsole::new();
        console.write_line("one").unwrap();

        assert_eq!(console.take(), vec!["one"]);
        assert!(console.lines().is_empty());
    }
}
