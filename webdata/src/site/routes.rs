#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Analytics,
    Gallery,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/analytics" => Route::Analytics,
            "/gallery" => Route::Gallery,
            _ => Route::NotFound,
        }
    }
}

/// What to do with a `#fragment` after navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentAction {
    None,
    ScrollTo(String),
    Redirect(String),
}

/// On the home page a fragment scrolls to the matching element; anywhere
/// else it sends the browser back to `/#fragment`.
pub fn fragment_target(path: &str, hash: &str) -> FragmentAction {
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        return FragmentAction::None;
    }
    match Route::parse(path) {
        Route::Home => FragmentAction::ScrollTo(id.to_string()),
        _ => FragmentAction::Redirect(format!("/#{id}")),
    }
}

/// Header link for a section, usable from any route.
pub fn section_href(id: &str) -> String {
    format!("/#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/analytics/"), Route::Analytics);
        assert_eq!(Route::parse("/gallery"), Route::Gallery);
        assert_eq!(Route::parse("/donate"), Route::NotFound);
    }

    #[test]
    fn fragments_scroll_on_home_and_redirect_elsewhere() {
        assert_eq!(fragment_target("/", "#programs"), FragmentAction::ScrollTo("programs".into()));
        assert_eq!(fragment_target("/gallery", "#contact"), FragmentAction::Redirect("/#contact".into()));
        assert_eq!(fragment_target("/analytics", ""), FragmentAction::None);
        assert_eq!(fragment_target("/", "#"), FragmentAction::None);
    }

    #[test]
    fn section_links_point_home() {
        assert_eq!(section_href("contact"), "/#contact");
    }
}
