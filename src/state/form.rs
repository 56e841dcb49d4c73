#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::future::Future;

/// Current values of the four contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Per-field validation outcome. `None` means the field passed.
///
/// Recomputed in full on every submit attempt; there is no incremental
/// validation while typing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_valid(self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }

    pub fn invalid_count(self) -> usize {
        [self.name, self.email, self.subject, self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Lifecycle of one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

pub const NAME_ERROR: &str = "Please enter a valid name";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const SUBJECT_ERROR: &str = "Please enter a subject";
pub const MESSAGE_ERROR: &str = "Please enter a message (at least 10 characters)";

/// Headless submit lifecycle. The form component holds one behind a signal;
/// tests drive it directly with stub capabilities.
///
/// Every attempt gets a generation token from [`FormController::begin`].
/// `settle` and `dismiss` ignore stale tokens, so a notice timer or verdict
/// left over from a superseded attempt cannot disturb the current one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormController {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    generation: u64,
}

impl FormController {
    /// Validate and, when every field passes, mark a new attempt in flight.
    /// Returns the field snapshot to submit and the attempt's token.
    pub fn begin(&mut self) -> Option<(ContactFields, u64)> {
        self.errors = validate(&self.fields);
        if !self.errors.is_valid() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        self.generation += 1;
        Some((self.fields.clone(), self.generation))
    }

    /// Fold the capability's verdict for attempt `token` into the form.
    /// Success clears the entered values; failure keeps them for retry.
    pub fn settle(&mut self, token: u64, verdict: Result<(), String>) {
        if token != self.generation {
            return;
        }
        match verdict {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.fields = ContactFields::default();
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    /// Clear the result notice for attempt `token`.
    pub fn dismiss(&mut self, token: u64) {
        if token == self.generation {
            self.status = SubmitStatus::Idle;
        }
    }

    /// One attempt end to end against an arbitrary submission capability.
    /// Returns `false` when validation rejected the attempt. The browser
    /// form runs the same begin/settle sequence through its signal instead,
    /// with the notice dismissal on a timer.
    pub async fn submit_with<C, Fut>(&mut self, capability: C) -> bool
    where
        C: FnOnce(ContactFields) -> Fut,
        Fut: Future<Output = Result<(), String>>,
    {
        let Some((snapshot, token)) = self.begin() else {
            return false;
        };
        let verdict = capability(snapshot).await;
        self.settle(token, verdict);
        true
    }
}

/// Validate all four fields unconditionally — no short-circuit, so every
/// invalid field gets marked in one pass.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    FieldErrors {
        name: (fields.name.trim().chars().count() < 2).then_some(NAME_ERROR),
        email: (!is_valid_email(&fields.email)).then_some(EMAIL_ERROR),
        subject: (fields.subject.trim().chars().count() < 3).then_some(SUBJECT_ERROR),
        message: (fields.message.trim().chars().count() < 10).then_some(MESSAGE_ERROR),
    }
}

/// `local@domain.tld` with non-empty, whitespace-free parts on both sides of
/// the `@` and a dot somewhere in the domain with characters around it.
pub fn is_valid_email(raw: &str) -> bool {
    let mut parts = raw.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) || local.contains('@') {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    // The domain needs a dot with at least one character on each side.
    let Some(dot) = domain.rfind('.') else {
        return false;
    };
    dot > 0 && dot + 1 < domain.len()
}
