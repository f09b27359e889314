use chrono::{DateTime, Utc};
use serde::Serialize;

use super::state::{ContactForm, Field, Tab};

/// The payload a real backend call would receive for a valid submit.
///
/// There is no backend: the caller is expected to drop this after a valid
/// submit. It still carries the full record so the simulated path matches
/// what a real one would send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub intent: Tab,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Snapshots the form's current values. Callers validate first; this
    /// does not.
    pub fn compose(form: &ContactForm) -> Self {
        Self {
            intent: form.active_tab(),
            name: form.value(Field::Name).to_string(),
            email: form.value(Field::Email).to_string(),
            phone: form.value(Field::Phone).to_string(),
            message: form.value(Field::Message).to_string(),
            date: form.value(Field::Date).to_string(),
            time: form.value(Field::Time).to_string(),
            reason: form.value(Field::Reason).to_string(),
            submitted_at: Utc::now(),
        }
    }
}
