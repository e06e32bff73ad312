use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const FOUNDER_MODAL_SHOWN_KEY: &str = "founderModalShown";
pub const FOUNDER_MODAL_DELAY: Duration = Duration::from_secs(10);
/// Gap between mounting an overlay and starting its enter transition.
pub const ENTER_DELAY: Duration = Duration::from_millis(10);
pub const TRANSITION: Duration = Duration::from_millis(300);
pub const VOLUNTEER_SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const VOLUNTEER_CLOSE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Overlay lifecycle: `Closed -> Opening -> Open -> Closing -> Closed`.
/// `Opening` and `Closing` end when the view reports its transition done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    phase: ModalPhase,
}

impl Modal {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Whether the overlay is in the document at all.
    pub fn is_mounted(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Whether the "visible" transition class applies.
    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn open(&mut self) -> bool {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => {
                self.phase = ModalPhase::Opening;
                true
            }
            _ => false,
        }
    }

    pub fn close(&mut self) -> bool {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                true
            }
            _ => false,
        }
    }

    pub fn transition_end(&mut self) {
        self.phase = match self.phase {
            ModalPhase::Opening => ModalPhase::Open,
            ModalPhase::Closing => ModalPhase::Closed,
            other => other,
        };
    }
}

/// Per-browser-session key/value store (`sessionStorage` in the browser).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Once-per-session gate for the founder message.
pub struct FounderGate;

impl FounderGate {
    pub fn already_shown(store: &impl SessionStore) -> bool {
        store.get(FOUNDER_MODAL_SHOWN_KEY).is_some()
    }

    /// Delay before auto-opening, or `None` when it was shown this session.
    pub fn auto_open_delay(store: &impl SessionStore) -> Option<Duration> {
        if Self::already_shown(store) {
            None
        } else {
            Some(FOUNDER_MODAL_DELAY)
        }
    }

    pub fn mark_shown(store: &mut impl SessionStore) {
        store.set(FOUNDER_MODAL_SHOWN_KEY, "true");
    }

    /// Timer fired: open and remember it for the session.
    pub fn auto_open(modal: &mut Modal, store: &mut impl SessionStore) -> bool {
        if Self::already_shown(store) {
            return false;
        }
        Self::mark_shown(store);
        modal.open()
    }

    pub fn close(modal: &mut Modal, store: &mut impl SessionStore) {
        modal.close();
        Self::mark_shown(store);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    #[default]
    Unselected,
    Education,
    Health,
    Social,
    Digital,
    Other,
}

impl Interest {
    pub const CHOICES: [Interest; 5] =
        [Interest::Education, Interest::Health, Interest::Social, Interest::Digital, Interest::Other];

    pub fn id(self) -> &'static str {
        match self {
            Interest::Unselected => "",
            Interest::Education => "education",
            Interest::Health => "health",
            Interest::Social => "social",
            Interest::Digital => "digital",
            Interest::Other => "other",
        }
    }

    pub fn from_id(id: &str) -> Interest {
        Interest::CHOICES.into_iter().find(|i| i.id() == id).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Weekdays,
    Weekends,
    Flexible,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: Interest,
    pub availability: Availability,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Interest,
    Message,
}

impl VolunteerForm {
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(FormField::Name);
        }
        if !looks_like_email(&self.email) {
            missing.push(FormField::Email);
        }
        if self.phone.trim().is_empty() {
            missing.push(FormField::Phone);
        }
        if self.interest == Interest::Unselected {
            missing.push(FormField::Interest);
        }
        missing
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(FormField::Name);
        }
        if !looks_like_email(&self.email) {
            missing.push(FormField::Email);
        }
        if self.message.trim().is_empty() {
            missing.push(FormField::Message);
        }
        missing
    }
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

/// Mock submission: nothing leaves the browser, it always succeeds after
/// [`VOLUNTEER_SUBMIT_DELAY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockSubmission {
    status: SubmitStatus,
    attempt: u32,
}

impl MockSubmission {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Increments on every accepted submit, so a timer can tell whether it
    /// still belongs to the current attempt.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn submit(&mut self) -> Option<Duration> {
        if self.status == SubmitStatus::Idle {
            self.status = SubmitStatus::Submitting;
            self.attempt = self.attempt.wrapping_add(1);
            Some(VOLUNTEER_SUBMIT_DELAY)
        } else {
            None
        }
    }

    /// Submit timer fired. Returns the auto-close delay.
    pub fn complete(&mut self) -> Option<Duration> {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Success;
            Some(VOLUNTEER_CLOSE_DELAY)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.status = SubmitStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_walks_every_phase() {
        let mut modal = Modal::default();
        assert!(!modal.is_mounted());
        assert!(modal.open());
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert!(modal.is_mounted() && !modal.is_visible());
        modal.transition_end();
        assert!(modal.is_visible());
        assert!(!modal.open());
        assert!(modal.close());
        assert_eq!(modal.phase(), ModalPhase::Closing);
        modal.transition_end();
        assert_eq!(modal.phase(), ModalPhase::Closed);
        modal.transition_end();
        assert_eq!(modal.phase(), ModalPhase::Closed);
    }

    #[test]
    fn reopen_while_closing() {
        let mut modal = Modal::default();
        modal.open();
        modal.transition_end();
        modal.close();
        assert!(modal.open());
        assert_eq!(modal.phase(), ModalPhase::Opening);
    }

    #[test]
    fn founder_auto_opens_once_per_session() {
        let mut session = MemorySession::default();
        let mut modal = Modal::default();
        assert_eq!(FounderGate::auto_open_delay(&session), Some(FOUNDER_MODAL_DELAY));
        assert!(FounderGate::auto_open(&mut modal, &mut session));
        assert_eq!(FounderGate::auto_open_delay(&session), None);

        let mut remounted = Modal::default();
        assert!(!FounderGate::auto_open(&mut remounted, &mut session));
        assert!(!remounted.is_mounted());
    }

    #[test]
    fn manual_open_still_works_after_gate() {
        let mut session = MemorySession::default();
        FounderGate::mark_shown(&mut session);
        let mut modal = Modal::default();
        assert!(modal.open());
    }

    #[test]
    fn mock_submission_flow() {
        let mut submission = MockSubmission::default();
        assert_eq!(submission.complete(), None);
        assert_eq!(submission.submit(), Some(VOLUNTEER_SUBMIT_DELAY));
        assert_eq!(submission.submit(), None);
        assert_eq!(submission.attempt(), 1);
        assert_eq!(submission.complete(), Some(VOLUNTEER_CLOSE_DELAY));
        assert_eq!(submission.status(), SubmitStatus::Success);
        submission.reset();
        assert_eq!(submission.status(), SubmitStatus::Idle);
    }

    #[test]
    fn volunteer_form_requires_contact_details() {
        let mut form = VolunteerForm::default();
        assert_eq!(
            form.missing_fields(),
            vec![FormField::Name, FormField::Email, FormField::Phone, FormField::Interest]
        );
        form.name = "Rahima".into();
        form.email = "rahima@example.org".into();
        form.phone = "+8801700000000".into();
        form.interest = Interest::from_id("digital");
        assert!(form.missing_fields().is_empty());
        assert_eq!(Interest::from_id("knitting"), Interest::Unselected);
    }

    #[test]
    fn contact_form_email_check() {
        let form = ContactForm { name: "A".into(), email: "a@b".into(), message: "hi".into() };
        assert_eq!(form.missing_fields(), vec![FormField::Email]);
    }
}
