//! Operator-facing interfaces

pub mod shell;

pub use shell::{InteractiveShell, MenuAction};
