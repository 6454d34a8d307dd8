//! Line-oriented operator console over any reader/writer pair

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::application::ports::OperatorConsole;
use crate::domain::{DomainError, DomainResult};

struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

/// [`OperatorConsole`] reading one answer per line.
pub struct TerminalConsole<R, W> {
    io: Mutex<ConsoleIo<R, W>>,
    closed: AtomicBool,
}

impl TerminalConsole<BufReader<Stdin>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> TerminalConsole<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new(ConsoleIo { reader, writer }),
            closed: AtomicBool::new(false),
        }
    }

    /// Next input line without its line terminator, `None` at end of input.
    fn read_line(&self) -> Option<String> {
        let mut io = self.io.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = io.writer.flush();

        let mut line = String::new();
        match io.reader.read_line(&mut line) {
            Ok(0) => {
                debug!("Console input closed");
                self.closed.store(true, Ordering::SeqCst);
                None
            }
            Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to read console input");
                self.closed.store(true, Ordering::SeqCst);
                None
            }
        }
    }
}

impl<R, W> TerminalConsole<R, W>
where
    W: AsRef<[u8]>,
{
    /// Everything written so far, for writers that keep their output
    pub fn transcript(&self) -> String {
        let io = self.io.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(io.writer.as_ref()).into_owned()
    }
}

impl<R, W> OperatorConsole for TerminalConsole<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn read_selection(&self) -> Option<u32> {
        let line = self.read_line()?;
        match line.trim().parse::<u32>() {
            Ok(selection) => Some(selection),
            Err(e) => {
                warn!(input = %line, error = %e, "Error while reading user input from shell");
                self.display("Error reading input. Please enter valid number for proceeding further");
                None
            }
        }
    }

    fn read_vehicle_registration_number(&self) -> DomainResult<String> {
        let line = self
            .read_line()
            .ok_or_else(|| DomainError::Validation("Console input closed".to_string()))?;

        let reg_number = line.trim();
        if reg_number.is_empty() {
            warn!("Empty vehicle registration number entered");
            self.display("Error reading input. Please enter a valid string for vehicle registration number");
            return Err(DomainError::Validation("Invalid input provided".to_string()));
        }
        Ok(reg_number.to_string())
    }

    fn display(&self, message: &str) {
        let mut io = self.io.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(io.writer, "{}", message) {
            warn!(error = %e, "Failed to write to console");
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(script: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_numeric_selection() {
        let console = console("1\n 2 \r\n");
        assert_eq!(console.read_selection(), Some(1));
        assert_eq!(console.read_selection(), Some(2));
        assert!(!console.is_closed());
    }

    #[test]
    fn non_numeric_selection_is_none() {
        let console = console("car\n-1\n");
        assert_eq!(console.read_selection(), None);
        assert_eq!(console.read_selection(), None);
        assert!(!console.is_closed());
        assert!(console.transcript().contains("Please enter valid number"));
    }

    #[test]
    fn end_of_input_closes_console() {
        let console = console("");
        assert_eq!(console.read_selection(), None);
        assert!(console.is_closed());
        assert!(console.read_vehicle_registration_number().is_err());
    }

    #[test]
    fn registration_number_is_trimmed() {
        let console = console("  AB-123-CD \n");
        assert_eq!(console.read_vehicle_registration_number().unwrap(), "AB-123-CD");
    }

    #[test]
    fn blank_registration_number_is_rejected() {
        let console = console("   \n");
        assert!(matches!(
            console.read_vehicle_registration_number(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn display_writes_one_line() {
        let console = console("");
        console.display("hello");
        console.display("world");
        assert_eq!(console.transcript(), "hello\nworld\n");
    }
}
