use nihongo_types::VocabularyRecord;

/// Reveal state of a single card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flashcard {
    revealed: bool,
}

impl Flashcard {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn view(&self, record: &VocabularyRecord) -> FlashcardView {
        FlashcardView {
            front: record.headword.clone(),
            reading: record.reading.clone(),
            meaning: record.meaning.clone(),
            tags: record.tags.clone(),
            revealed: self.revealed,
        }
    }
}

/// Front face is `front`, back face is reading, meaning and tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardView {
    pub front: String,
    pub reading: String,
    pub meaning: String,
    pub tags: Option<String>,
    pub revealed: bool,
}

/// Card state bound to one record position.
///
/// Moving the slot to another position throws the old card away, so a
/// revealed card never carries over to a different record.
#[derive(Debug, Default)]
pub struct FlashcardSlot {
    position: Option<usize>,
    card: Flashcard,
}

impl FlashcardSlot {
    /// Card for `position`, fresh if the slot held another position
    pub fn card_for(&mut self, position: usize) -> &mut Flashcard {
        if self.position != Some(position) {
            self.position = Some(position);
            self.card = Flashcard::default();
        }
        &mut self.card
    }

    /// Read-only lookup, unrevealed when the slot belongs elsewhere
    pub fn peek(&self, position: usize) -> Flashcard {
        if self.position == Some(position) {
            self.card
        } else {
            Flashcard::default()
        }
    }

    pub fn clear(&mut self) {
        self.position = None;
        self.card = Flashcard::default();
    }
}
