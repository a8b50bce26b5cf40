//! Contact form: field editing, validation and the simulated send.
//!
//! Nothing leaves the machine. A valid submission only waits out the
//! configured delay and reports success.

use std::fmt;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use regex::Regex;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    InvalidEmail,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => f.write_str("Please fill in all required fields"),
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
        }
    }
}

/// Form inputs in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    FullName,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone (optional)",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Button disabled until the simulated send completes at `until`.
    Sending { until: Instant },
}

/// What a submit press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(FormError),
    Sending,
    /// A send is already in flight.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub focused: Field,
    pub submit_state: SubmitState,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.submit_state, SubmitState::Sending { .. })
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Inputs are locked while a send is in flight.
    pub fn insert_char(&mut self, ch: char) {
        if self.is_sending() || ch.is_control() {
            return;
        }
        let field = self.focused;
        self.value_mut(field).push(ch);
    }

    pub fn backspace(&mut self) {
        if self.is_sending() {
            return;
        }
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Check required fields first, then the email shape.
    ///
    /// Values are checked as typed: whitespace counts as content, and
    /// surrounding spaces make the email invalid.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [&self.full_name, &self.email, &self.subject, &self.message];
        if required.iter().any(|value| value.is_empty()) {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn submit(&mut self, now: Instant, delay: Duration) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Ignored;
        }
        if let Err(err) = self.validate() {
            tracing::debug!(error = %err, "contact form rejected");
            return SubmitOutcome::Rejected(err);
        }
        tracing::info!(subject = %self.subject.trim(), "contact form sending");
        self.submit_state = SubmitState::Sending { until: now + delay };
        SubmitOutcome::Sending
    }

    /// Finish a due send: clears every field and restores the button.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.submit_state {
            SubmitState::Sending { until } if until <= now => {
                *self = Self::default();
                tracing::info!("contact form sent");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    fn filled() -> ContactForm {
        ContactForm {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Loved the engine notes.".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn missing_fields_are_reported_before_bad_email() {
        let form = ContactForm {
            email: "nope".into(),
            subject: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingFields));
        assert_eq!(
            FormError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn whitespace_only_fields_are_not_missing() {
        let form = ContactForm {
            full_name: "   ".into(),
            message: " ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn padded_email_is_invalid() {
        let form = ContactForm {
            email: " ada@example.com ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn phone_is_optional_but_email_must_match() {
        assert_eq!(filled().validate(), Ok(()));
        let form = ContactForm {
            email: "ada.example.com".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn rejected_submit_keeps_input() {
        let now = Instant::now();
        let mut form = ContactForm {
            email: "bad".into(),
            ..filled()
        };
        assert_eq!(
            form.submit(now, DELAY),
            SubmitOutcome::Rejected(FormError::InvalidEmail)
        );
        assert_eq!(form.email, "bad");
        assert_eq!(form.submit_state, SubmitState::Idle);
    }

    #[test]
    fn sending_disables_button_until_delay_elapses() {
        let now = Instant::now();
        let mut form = filled();
        assert_eq!(form.submit(now, DELAY), SubmitOutcome::Sending);
        assert_eq!(form.button_label(), SENDING_LABEL);
        assert_eq!(form.submit(now, DELAY), SubmitOutcome::Ignored);

        assert!(!form.tick(now + Duration::from_millis(1999)));
        assert!(form.tick(now + DELAY));
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut form = ContactForm::default();
        form.insert_char('A');
        form.focus_next();
        form.insert_char('b');
        form.insert_char('\n');
        form.focus_prev();
        form.backspace();
        assert_eq!(form.full_name, "");
        assert_eq!(form.email, "b");
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        assert_eq!(Field::Message.next(), Field::FullName);
        assert_eq!(Field::FullName.prev(), Field::Message);
    }

    #[test]
    fn inputs_are_locked_while_sending() {
        let now = Instant::now();
        let mut form = filled();
        form.submit(now, DELAY);
        form.insert_char('!');
        form.backspace();
        assert_eq!(form.full_name, "Ada Lovelace");
    }
}
