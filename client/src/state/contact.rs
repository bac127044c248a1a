//! Contact form state: field values, inline errors, and the simulated
//! send cycle.
//!
//! Nothing leaves the page. [`ContactForm::submit`] validates and enters the
//! busy state; the component arms a timer and calls
//! [`ContactForm::finish_submission`], which resets the form and raises a
//! success notice. The notice carries a ticket so a dismiss timer from an
//! earlier submission cannot hide a newer notice.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Form fields in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const EVERY: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// `name`/`id` attribute of the input element.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Email => "Email is required",
            Self::Subject => "Subject is required",
            Self::Message => "Message is required",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }
}

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// `local@domain.tld`: something before the `@`, something between it and
/// the last `.`, something after, and no whitespace anywhere.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, host)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || host.contains('@') {
        return false;
    }
    let Some((domain, tld)) = host.rsplit_once('.') else {
        return false;
    };
    !domain.is_empty() && !tld.is_empty()
}

/// Check one trimmed field value.
fn check(field: Field, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(field.required_message());
    }
    if field == Field::Email && !is_valid_email(value) {
        return Some(INVALID_EMAIL_MESSAGE);
    }
    None
}

/// Result of [`ContactForm::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; errors are now set.
    Invalid,
    /// Validation passed and the form is now busy.
    Started,
    /// A send is already in flight; nothing changed.
    AlreadyBusy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: [String; 4],
    errors: [Option<&'static str>; 4],
    busy: bool,
    notice: Option<u64>,
    notice_seq: u64,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[field.index()]
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Ticket of the visible success notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<u64> {
        self.notice
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.busy { "Sending..." } else { "Send Message" }
    }

    /// Store an edit and clear that field's inline error.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.values[field.index()] = value;
        self.errors[field.index()] = None;
    }

    /// Validate every field, replacing all inline errors. Returns whether the
    /// form is valid.
    pub fn validate(&mut self) -> bool {
        for field in Field::EVERY {
            self.errors[field.index()] = check(field, self.value(field));
        }
        self.errors.iter().all(Option::is_none)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.busy {
            return SubmitOutcome::AlreadyBusy;
        }
        if !self.validate() {
            return SubmitOutcome::Invalid;
        }
        self.busy = true;
        self.notice = None;
        SubmitOutcome::Started
    }

    /// End the simulated send: clear the form and raise a fresh notice.
    ///
    /// Returns the notice ticket to hand to [`Self::dismiss_notice`], or
    /// `None` when no send was in flight.
    pub fn finish_submission(&mut self) -> Option<u64> {
        if !self.busy {
            return None;
        }
        self.values = Default::default();
        self.errors = [None; 4];
        self.busy = false;
        self.notice_seq += 1;
        self.notice = Some(self.notice_seq);
        self.notice
    }

    /// Hide the notice raised under `ticket`; newer notices stay up.
    pub fn dismiss_notice(&mut self, ticket: u64) -> bool {
        if self.notice != Some(ticket) {
            return false;
        }
        self.notice = None;
        true
    }
}
