use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::submission::Submission;
use super::validation::{FieldError, is_valid_email};

/// How long the confirmation view stays up after a valid submit before the
/// form resets to defaults.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Which intent the form is collecting. Gates required fields and which
/// inputs are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Contact,
    Appointment,
}

/// The seven inputs collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
    Date,
    Time,
    Reason,
}

impl Field {
    /// Display label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Message => "Your Message",
            Self::Date => "Preferred Date",
            Self::Time => "Preferred Time",
            Self::Reason => "Reason for Visit",
        }
    }

    /// Whether the field must be filled for the given tab.
    pub fn required(self, tab: Tab) -> bool {
        match self {
            Self::Name | Self::Email => true,
            Self::Date | Self::Time => tab == Tab::Appointment,
            Self::Phone | Self::Message | Self::Reason => false,
        }
    }
}

/// Owned state of the contact/appointment form.
///
/// Lifecycle: `Editing --submit(valid)--> Submitted --deadline--> Editing`
/// (with the fields reset), and `Editing --submit(invalid)--> Editing` with
/// `errors` populated. There are no other transitions. While submitted, field
/// mutation is refused so the confirmation window cannot be corrupted by
/// queued input events.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
    date: String,
    time: String,
    reason: String,
    active_tab: Tab,
    errors: BTreeMap<Field, FieldError>,
    submitted: bool,
    reset_at: Option<Instant>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Creates an empty form on the Contact tab.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            date: String::new(),
            time: String::new(),
            reason: String::new(),
            active_tab: Tab::Contact,
            errors: BTreeMap::new(),
            submitted: false,
            reset_at: None,
        }
    }

    /// Current value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Reason => &self.reason,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Reason => &mut self.reason,
        }
    }

    /// Overwrites a field value and drops any stale error on it. Refused
    /// while the confirmation view is up.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.submitted {
            return;
        }
        *self.value_mut(field) = value.into();
        self.errors.remove(&field);
    }

    /// Appends one character to a field, clearing its error like any edit.
    pub fn insert_char(&mut self, field: Field, ch: char) {
        if self.submitted {
            return;
        }
        self.value_mut(field).push(ch);
        self.errors.remove(&field);
    }

    /// Deletes the last character of a field, clearing its error like any edit.
    pub fn delete_char(&mut self, field: Field) {
        if self.submitted {
            return;
        }
        self.value_mut(field).pop();
        self.errors.remove(&field);
    }

    /// Switches the active tab. Field values and errors are kept; only the
    /// required/visible set changes. The tab selector sits outside the form
    /// proper, so this is allowed even while submitted.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Errors from the most recent validation pass, minus any cleared by
    /// later edits.
    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    /// Error on a single field, if any.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// `true` while the confirmation view is shown.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// When the confirmation window ends, if one is running.
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Runs every applicable rule against the current values. Pure; the
    /// stored error map is untouched.
    ///
    /// Phone, message, and reason are collected but never validated — they
    /// are optional free text on both tabs.
    pub fn validate(&self) -> BTreeMap<Field, FieldError> {
        let mut errors = BTreeMap::new();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, FieldError::NameRequired);
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, FieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.insert(Field::Email, FieldError::EmailInvalid);
        }
        if self.active_tab == Tab::Appointment {
            if self.date.is_empty() {
                errors.insert(Field::Date, FieldError::DateRequired);
            }
            if self.time.is_empty() {
                errors.insert(Field::Time, FieldError::TimeRequired);
            }
        }
        errors
    }

    /// Attempts a submit at `now`.
    ///
    /// On success the composed [`Submission`] is returned — the payload a
    /// real backend call would receive; no transmission happens — and the
    /// reset deadline is armed. On validation failure the errors are stored
    /// and the form stays editable. A submit while the confirmation view is
    /// up is a no-op.
    pub fn submit(&mut self, now: Instant) -> Option<Submission> {
        if self.submitted {
            return None;
        }
        let errors = self.validate();
        if errors.is_empty() {
            self.errors.clear();
            self.submitted = true;
            self.reset_at = Some(now + RESET_DELAY);
            Some(Submission::compose(self))
        } else {
            self.errors = errors;
            None
        }
    }

    /// Advances the confirmation window. Returns `true` if the deadline
    /// elapsed and the form was reset to defaults (the active tab is kept,
    /// matching the page where the tab selector outlives the form).
    ///
    /// The deadline is plain data owned by the form, so dropping the form
    /// cancels it; nothing can fire after teardown.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(at) if now >= at => {
                let tab = self.active_tab;
                *self = Self::new();
                self.active_tab = tab;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn filled_contact_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Priya");
        form.set_field(Field::Email, "priya@example.com");
        form
    }

    fn now() -> Instant {
        Instant::now()
    }

    mod set_field {
        use super::*;

        #[test]
        fn overwrites_value() {
            let mut form = ContactForm::new();
            form.set_field(Field::Phone, "123");
            assert_eq!(form.value(Field::Phone), "123");
        }

        #[test]
        fn clears_only_that_fields_error() {
            let mut form = ContactForm::new();
            form.submit(now());
            assert!(form.error(Field::Name).is_some());
            assert!(form.error(Field::Email).is_some());

            form.set_field(Field::Name, "P");
            assert!(form.error(Field::Name).is_none());
            assert!(form.error(Field::Email).is_some());
        }

        #[test]
        fn insert_and_delete_char_edit_in_place() {
            let mut form = ContactForm::new();
            form.insert_char(Field::Name, 'P');
            form.insert_char(Field::Name, 'r');
            form.delete_char(Field::Name);
            assert_eq!(form.value(Field::Name), "P");
        }

        #[test]
        fn delete_char_on_empty_is_noop() {
            let mut form = ContactForm::new();
            form.delete_char(Field::Name);
            assert_eq!(form.value(Field::Name), "");
        }

        #[quickcheck]
        fn setting_same_value_twice_is_idempotent(value: String) -> bool {
            let mut once = ContactForm::new();
            once.set_field(Field::Phone, value.clone());

            let mut twice = ContactForm::new();
            twice.set_field(Field::Phone, value.clone());
            twice.set_field(Field::Phone, value);

            once == twice
        }
    }

    mod validate {
        use super::*;

        #[test]
        fn empty_name_is_required() {
            let form = ContactForm::new();
            assert_eq!(form.validate().get(&Field::Name), Some(&FieldError::NameRequired));
        }

        #[test]
        fn whitespace_only_name_is_required() {
            let mut form = ContactForm::new();
            form.set_field(Field::Name, "   \t ");
            assert_eq!(form.validate().get(&Field::Name), Some(&FieldError::NameRequired));
        }

        #[test]
        fn empty_email_is_required_not_invalid() {
            let form = ContactForm::new();
            assert_eq!(
                form.validate().get(&Field::Email),
                Some(&FieldError::EmailRequired)
            );
        }

        #[test]
        fn malformed_email_is_invalid() {
            let mut form = ContactForm::new();
            form.set_field(Field::Email, "bad");
            assert_eq!(
                form.validate().get(&Field::Email),
                Some(&FieldError::EmailInvalid)
            );
        }

        #[test]
        fn contact_tab_never_flags_date_or_time() {
            let mut form = ContactForm::new();
            form.set_field(Field::Date, "");
            form.set_field(Field::Time, "whenever");
            let errors = form.validate();
            assert!(!errors.contains_key(&Field::Date));
            assert!(!errors.contains_key(&Field::Time));
        }

        #[test]
        fn appointment_tab_requires_date_and_time() {
            let mut form = ContactForm::new();
            form.set_active_tab(Tab::Appointment);
            let errors = form.validate();
            assert_eq!(errors.get(&Field::Date), Some(&FieldError::DateRequired));
            assert_eq!(errors.get(&Field::Time), Some(&FieldError::TimeRequired));
        }

        #[test]
        fn optional_fields_are_never_validated() {
            let mut form = filled_contact_form();
            form.set_active_tab(Tab::Appointment);
            form.set_field(Field::Date, "2026-09-01");
            form.set_field(Field::Time, "10:00");
            // Arbitrary junk in the optional fields must not fail.
            form.set_field(Field::Phone, "not a phone");
            form.set_field(Field::Reason, "@@@");
            assert!(form.validate().is_empty());
        }

        #[test]
        fn validate_has_no_side_effects() {
            let form = ContactForm::new();
            let before = form.clone();
            let _ = form.validate();
            assert_eq!(form, before);
        }

        #[quickcheck]
        fn whitespace_only_name_always_rejected(n: u8) -> bool {
            let mut form = ContactForm::new();
            form.set_field(Field::Name, " ".repeat(usize::from(n % 6)));
            form.validate().get(&Field::Name) == Some(&FieldError::NameRequired)
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn valid_contact_submit_succeeds() {
            // Scenario: name + email on the Contact tab.
            let mut form = filled_contact_form();
            let submission = form.submit(now());
            assert!(submission.is_some());
            assert!(form.errors().is_empty());
            assert!(form.submitted());
        }

        #[test]
        fn invalid_submit_stores_errors_and_stays_editing() {
            let mut form = ContactForm::new();
            form.set_field(Field::Email, "bad");
            let submission = form.submit(now());
            assert!(submission.is_none());
            assert!(!form.submitted());
            assert_eq!(form.error(Field::Name), Some(FieldError::NameRequired));
            assert_eq!(form.error(Field::Email), Some(FieldError::EmailInvalid));
        }

        #[test]
        fn appointment_missing_date_only_flags_date() {
            let mut form = ContactForm::new();
            form.set_active_tab(Tab::Appointment);
            form.set_field(Field::Name, "Rahul");
            form.set_field(Field::Email, "r@x.com");
            form.set_field(Field::Time, "10:00");
            let submission = form.submit(now());
            assert!(submission.is_none());
            assert_eq!(form.errors().len(), 1);
            assert_eq!(form.error(Field::Date), Some(FieldError::DateRequired));
        }

        #[test]
        fn submit_while_submitted_is_noop() {
            let mut form = filled_contact_form();
            let t = now();
            assert!(form.submit(t).is_some());
            let after_first = form.clone();
            assert!(form.submit(t).is_none());
            assert_eq!(form, after_first);
        }

        #[test]
        fn field_mutation_refused_while_submitted() {
            let mut form = filled_contact_form();
            form.submit(now());
            form.set_field(Field::Name, "Someone Else");
            form.insert_char(Field::Phone, '9');
            assert_eq!(form.value(Field::Name), "Priya");
            assert_eq!(form.value(Field::Phone), "");
        }

        #[test]
        fn valid_submit_arms_reset_deadline() {
            let mut form = filled_contact_form();
            let t = now();
            form.submit(t);
            assert_eq!(form.reset_deadline(), Some(t + RESET_DELAY));
        }

        #[test]
        fn invalid_submit_does_not_arm_deadline() {
            let mut form = ContactForm::new();
            form.submit(now());
            assert_eq!(form.reset_deadline(), None);
        }
    }

    mod tab_switch {
        use super::*;

        #[test]
        fn keeps_values_and_errors() {
            let mut form = ContactForm::new();
            form.set_field(Field::Message, "hello");
            form.submit(now());
            assert!(!form.errors().is_empty());

            form.set_active_tab(Tab::Appointment);
            assert_eq!(form.value(Field::Message), "hello");
            assert!(form.error(Field::Name).is_some());

            form.set_active_tab(Tab::Contact);
            assert_eq!(form.value(Field::Message), "hello");
        }

        #[test]
        fn allowed_while_submitted() {
            let mut form = filled_contact_form();
            form.submit(now());
            form.set_active_tab(Tab::Appointment);
            assert_eq!(form.active_tab(), Tab::Appointment);
        }
    }

    mod reset_timer {
        use super::*;

        #[test]
        fn elapsed_deadline_resets_to_defaults() {
            let mut form = filled_contact_form();
            form.set_field(Field::Phone, "12345");
            let t = now();
            form.submit(t);

            assert!(form.tick(t + RESET_DELAY));
            assert!(!form.submitted());
            assert_eq!(form.value(Field::Name), "");
            assert_eq!(form.value(Field::Email), "");
            assert_eq!(form.value(Field::Phone), "");
            assert!(form.errors().is_empty());
            assert_eq!(form.reset_deadline(), None);
        }

        #[test]
        fn tick_before_deadline_changes_nothing() {
            let mut form = filled_contact_form();
            let t = now();
            form.submit(t);
            let before = form.clone();
            assert!(!form.tick(t + RESET_DELAY / 2));
            assert_eq!(form, before);
        }

        #[test]
        fn tick_without_pending_submit_is_noop() {
            let mut form = filled_contact_form();
            let before = form.clone();
            assert!(!form.tick(now()));
            assert_eq!(form, before);
        }

        #[test]
        fn reset_keeps_active_tab() {
            let mut form = ContactForm::new();
            form.set_active_tab(Tab::Appointment);
            form.set_field(Field::Name, "Rahul");
            form.set_field(Field::Email, "r@x.com");
            form.set_field(Field::Date, "2026-09-01");
            form.set_field(Field::Time, "10:00");
            let t = now();
            form.submit(t);
            form.tick(t + RESET_DELAY);
            assert_eq!(form.active_tab(), Tab::Appointment);
            assert_eq!(form.value(Field::Date), "");
        }

        #[test]
        fn form_is_editable_again_after_reset() {
            let mut form = filled_contact_form();
            let t = now();
            form.submit(t);
            form.tick(t + RESET_DELAY);
            form.set_field(Field::Name, "Ananya");
            assert_eq!(form.value(Field::Name), "Ananya");
        }
    }

    mod field_metadata {
        use super::*;

        #[test]
        fn required_set_depends_on_tab() {
            assert!(Field::Name.required(Tab::Contact));
            assert!(Field::Email.required(Tab::Appointment));
            assert!(!Field::Date.required(Tab::Contact));
            assert!(Field::Date.required(Tab::Appointment));
            assert!(Field::Time.required(Tab::Appointment));
            for f in [Field::Phone, Field::Message, Field::Reason] {
                assert!(!f.required(Tab::Contact));
                assert!(!f.required(Tab::Appointment));
            }
        }

        #[test]
        fn labels_are_nonempty() {
            for f in [
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::Message,
                Field::Date,
                Field::Time,
                Field::Reason,
            ] {
                assert!(!f.label().is_empty());
            }
        }
    }
}
