pub mod console;

pub use console::OperatorConsole;
