/// The four top-level views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Practice,
    Sensei,
    Collection,
}

impl Page {
    /// Menu order
    pub const ALL: [Page; 4] = [Page::Home, Page::Practice, Page::Sensei, Page::Collection];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "HOME",
            Page::Practice => "PRACTICE",
            Page::Sensei => "SENSEI",
            Page::Collection => "COLLECTION",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Practice => 1,
            Page::Sensei => 2,
            Page::Collection => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Page::ALL.get(index).copied()
    }
}

/// Holds the selected page. Only changes on explicit selection.
#[derive(Debug, Default)]
pub struct Router {
    current: Page,
}

impl Router {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn select(&mut self, page: Page) {
        if self.current != page {
            tracing::debug!("Page {} -> {}", self.current.label(), page.label());
        }
        self.current = page;
    }
}
