//! Operator console port
//!
//! [`OperatorConsole`] is the contract between the parking workflow and the
//! person at the terminal. The production implementation is
//! [`TerminalConsole`](crate::infrastructure::console::TerminalConsole).

use crate::domain::DomainResult;

pub trait OperatorConsole: Send + Sync {
    /// Next numeric selection, or `None` if the input was not a number.
    fn read_selection(&self) -> Option<u32>;

    /// Next non-blank registration number, trimmed.
    fn read_vehicle_registration_number(&self) -> DomainResult<String>;

    /// Show one line to the operator.
    fn display(&self, message: &str);

    /// True once the input stream has ended.
    fn is_closed(&self) -> bool {
        false
    }
}
