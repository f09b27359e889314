//! Contact/appointment form core: field state, validation, and the
//! submission lifecycle with its auto-reset deadline.

mod state;
mod submission;
mod validation;

pub use state::{ContactForm, Field, RESET_DELAY, Tab};
pub use submission::Submission;
pub use validation::{ErrorKind, FieldError, is_valid_email};
