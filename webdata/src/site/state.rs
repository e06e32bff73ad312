use crate::site::i18n::Lang;
use crate::site::modal::{FounderGate, Modal, MockSubmission, SessionStore, SubmitStatus};

/// Application-wide UI state: current language and the two overlays.
/// The web app wraps each field in a signal; tests drive it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteState {
    pub lang: Lang,
    pub founder: Modal,
    pub volunteer: Modal,
    pub submission: MockSubmission,
    pub menu_open: bool,
}

impl SiteState {
    pub fn new(lang: Lang) -> Self {
        Self { lang, ..Default::default() }
    }

    /// Switches language only. Overlays, menu and submission keep their state.
    pub fn toggle_lang(&mut self) -> Lang {
        self.lang = self.lang.toggled();
        self.lang
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any in-app navigation closes the mobile menu.
    pub fn navigated(&mut self) {
        self.menu_open = false;
    }

    pub fn open_volunteer(&mut self) -> bool {
        self.submission.reset();
        self.volunteer.open()
    }

    pub fn close_volunteer(&mut self) -> bool {
        self.volunteer.close()
    }

    /// Auto-close after a successful submit. Does nothing once the dialog
    /// was closed by hand or reopened since `attempt` was submitted.
    pub fn finish_volunteer(&mut self, attempt: u32) -> bool {
        if self.submission.status() != SubmitStatus::Success || self.submission.attempt() != attempt {
            return false;
        }
        self.volunteer.close()
    }

    pub fn auto_open_founder(&mut self, store: &mut impl SessionStore) -> bool {
        FounderGate::auto_open(&mut self.founder, store)
    }

    pub fn open_founder(&mut self) -> bool {
        self.founder.open()
    }

    pub fn close_founder(&mut self, store: &mut impl SessionStore) {
        FounderGate::close(&mut self.founder, store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::modal::{MemorySession, ModalPhase};

    #[test]
    fn reopening_volunteer_resets_submission() {
        let mut state = SiteState::default();
        state.open_volunteer();
        state.submission.submit();
        state.submission.complete();
        assert_eq!(state.submission.status(), SubmitStatus::Success);
        state.close_volunteer();
        state.volunteer.transition_end();
        assert!(state.open_volunteer());
        assert_eq!(state.submission.status(), SubmitStatus::Idle);
    }

    #[test]
    fn stale_auto_close_leaves_reopened_dialog_alone() {
        let mut state = SiteState::default();
        state.open_volunteer();
        state.volunteer.transition_end();
        state.submission.submit();
        state.submission.complete();
        let attempt = state.submission.attempt();

        // closed by hand and reopened before the auto-close fires
        state.close_volunteer();
        state.volunteer.transition_end();
        state.open_volunteer();
        state.volunteer.transition_end();
        assert!(!state.finish_volunteer(attempt));
        assert_eq!(state.volunteer.phase(), ModalPhase::Open);

        // a second success in the reopened dialog is not closed by the old timer
        state.submission.submit();
        state.submission.complete();
        assert!(!state.finish_volunteer(attempt));
        assert!(state.finish_volunteer(state.submission.attempt()));
        assert_eq!(state.volunteer.phase(), ModalPhase::Closing);
    }

    #[test]
    fn navigation_closes_menu() {
        let mut state = SiteState::new(Lang::Bn);
        state.toggle_menu();
        assert!(state.menu_open);
        state.navigated();
        assert!(!state.menu_open);
    }

    #[test]
    fn founder_close_marks_session() {
        let mut session = MemorySession::default();
        let mut state = SiteState::default();
        state.open_founder();
        state.close_founder(&mut session);
        assert_eq!(state.founder.phase(), ModalPhase::Closing);
        assert!(FounderGate::already_shown(&session));
    }
}
