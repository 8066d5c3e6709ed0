use nihongo_types::VocabularyRecord;

use crate::flashcard::{FlashcardSlot, FlashcardView};

pub const EMPTY_MESSAGE: &str = "No words found.";

/// Steps through the word list one card at a time, wrapping at both ends
#[derive(Debug, Default)]
pub struct PracticeBrowser {
    index: usize,
    len: usize,
    slot: FlashcardSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PracticeView {
    Empty,
    Card {
        card: FlashcardView,
        /// 1-based
        position: usize,
        total: usize,
    },
}

impl PracticeBrowser {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            slot: FlashcardSlot::default(),
        }
    }

    /// Start over for a freshly loaded list
    pub fn reset(&mut self, len: usize) {
        self.index = 0;
        self.len = len;
        self.slot.clear();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn flip(&mut self) {
        if self.len == 0 {
            return;
        }
        self.slot.card_for(self.index).flip();
    }

    pub fn view(&self, records: &[VocabularyRecord]) -> PracticeView {
        if records.is_empty() {
            return PracticeView::Empty;
        }

        match records.get(self.index) {
            Some(record) => PracticeView::Card {
                card: self.slot.peek(self.index).view(record),
                position: self.index + 1,
                total: records.len(),
            },
            None => PracticeView::Empty,
        }
    }
}
