use std::time::Duration;

pub const HERO_ADVANCE: Duration = Duration::from_secs(4);

/// Auto-advancing index over a fixed number of slides. Manual navigation
/// moves the index but leaves the advance timer alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Timer tick.
    pub fn advance(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Dot indicator click. Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
        c.advance();
        assert_eq!(c.index(), 0);
        c.go_to(2);
        c.next();
        assert_eq!(c.index(), 3);
        c.go_to(9);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        c.advance();
        c.prev();
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
    }
}
