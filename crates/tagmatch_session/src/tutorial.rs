//! Tutorial paging

/// Pager over a fixed number of tutorial panels.
///
/// Advancing past the last panel wraps back to the first one.
#[derive(Debug, Clone, Default)]
pub struct TutorialPager {
    pages: usize,
    index: usize,
}

impl TutorialPager {
    /// Create a pager starting on the first panel
    pub fn new(pages: usize) -> Self {
        Self { pages, index: 0 }
    }

    /// Get the current panel index (0-based)
    pub fn current(&self) -> usize {
        self.index
    }

    /// Get the panel count
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Check if the current panel is the last one
    pub fn is_last(&self) -> bool {
        self.pages != 0 && self.index == self.pages - 1
    }

    /// Advance to the next panel, wrapping to the first after the last
    pub fn advance(&mut self) {
        if self.pages == 0 {
            return;
        }
        self.index = (self.index + 1) % self.pages;
    }

    /// Counter text in the `"current/total"` form shown to the user
    pub fn counter_text(&self) -> String {
        if self.pages == 0 {
            return "0/0".to_string();
        }
        format!("{}/{}", self.index + 1, self.pages)
    }
}
