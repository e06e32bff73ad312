use crate::site::content::{Category, MediaItem, MEDIA};

/// Gallery filter: everything, or one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryFilter {
    #[default]
    All,
    Only(Category),
}

impl GalleryFilter {
    pub fn from_id(id: &str) -> GalleryFilter {
        Category::from_id(id).map(GalleryFilter::Only).unwrap_or(GalleryFilter::All)
    }

    pub fn id(self) -> &'static str {
        match self {
            GalleryFilter::All => "all",
            GalleryFilter::Only(c) => c.id(),
        }
    }

    pub fn matches(self, item: &MediaItem) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Only(c) => item.category == c,
        }
    }

    pub fn apply<'a>(self, items: &'a [MediaItem]) -> Vec<&'a MediaItem> {
        items.iter().filter(|m| self.matches(m)).collect()
    }
}

pub fn filtered(filter: GalleryFilter) -> Vec<&'static MediaItem> {
    filter.apply(&MEDIA)
}

/// Lightbox over the currently filtered list. Navigation wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<usize>,
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self, len: usize) {
        if let Some(i) = self.selected {
            if len > 0 {
                self.selected = Some((i + 1) % len);
            }
        }
    }

    pub fn prev(&mut self, len: usize) {
        if let Some(i) = self.selected {
            if len > 0 {
                self.selected = Some((i + len - 1) % len);
            }
        }
    }

    pub fn current<'a>(&self, items: &[&'a MediaItem]) -> Option<&'a MediaItem> {
        self.selected.and_then(|i| items.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_category() {
        assert_eq!(filtered(GalleryFilter::All).len(), 6);
        let social = filtered(GalleryFilter::from_id("social"));
        assert_eq!(social.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2, 3, 5]);
        assert_eq!(filtered(GalleryFilter::from_id("unknown")).len(), 6);
        assert_eq!(GalleryFilter::from_id("health").id(), "health");
    }

    #[test]
    fn lightbox_wraps_within_filtered_list() {
        let items = filtered(GalleryFilter::Only(Category::Social));
        let mut lb = Lightbox::default();
        lb.next(items.len());
        assert!(!lb.is_open());
        lb.open(2, items.len());
        lb.next(items.len());
        assert_eq!(lb.current(&items).map(|m| m.id), Some(2));
        lb.prev(items.len());
        assert_eq!(lb.current(&items).map(|m| m.id), Some(5));
        lb.close();
        assert!(lb.current(&items).is_none());
    }

    #[test]
    fn open_out_of_range_is_ignored() {
        let mut lb = Lightbox::default();
        lb.open(3, 3);
        assert!(!lb.is_open());
    }
}
