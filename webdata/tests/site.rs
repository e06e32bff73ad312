use webdata::sheets::charts::progress_series;
use webdata::sheets::ingest::{aggregate, mock_data};
use webdata::site::carousel::Carousel;
use webdata::site::content::{HERO_SLIDES, PROGRAMS};
use webdata::site::modal::{FounderGate, MemorySession, SessionStore, FOUNDER_MODAL_SHOWN_KEY};
use webdata::site::{Lang, SiteState};

#[test]
fn language_toggle_only_changes_text() {
    let points = mock_data();
    let mut state = SiteState::default();
    state.open_volunteer();
    state.toggle_menu();
    let mut hero = Carousel::new(HERO_SLIDES.len());
    hero.advance();
    hero.advance();

    let before = state.clone();
    let stats_before = aggregate(&points);
    let index_before = hero.index();
    let chart_before = progress_series(&points, state.lang);
    let en_title = PROGRAMS[0].title.get(state.lang);

    assert_eq!(state.toggle_lang(), Lang::Bn);

    assert_ne!(PROGRAMS[0].title.get(state.lang), en_title);
    assert_eq!(aggregate(&points), stats_before);
    assert_eq!(hero.index(), index_before);
    assert_eq!(state.volunteer, before.volunteer);
    assert_eq!(state.founder, before.founder);
    assert_eq!(state.submission, before.submission);
    assert_eq!(state.menu_open, before.menu_open);

    let chart_after = progress_series(&points, state.lang);
    assert_eq!(chart_after.datasets, chart_before.datasets);
    assert_ne!(chart_after.labels, chart_before.labels);

    state.toggle_lang();
    assert_eq!(state, before);
}

#[test]
fn closed_founder_modal_never_auto_opens_again() {
    let mut session = MemorySession::default();

    let mut first = SiteState::default();
    first.open_founder();
    first.close_founder(&mut session);
    assert_eq!(session.get(FOUNDER_MODAL_SHOWN_KEY).as_deref(), Some("true"));

    let mut remounted = SiteState::default();
    assert_eq!(FounderGate::auto_open_delay(&session), None);
    assert!(!remounted.auto_open_founder(&mut session));
    assert!(!remounted.founder.is_mounted());

    let mut new_session = MemorySession::default();
    assert!(remounted.auto_open_founder(&mut new_session));
}
