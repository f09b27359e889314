/// Errors that can occur in the TUI layer.
///
/// Validation problems never appear here: they are form state, rendered
/// inline next to the inputs, not faults.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
