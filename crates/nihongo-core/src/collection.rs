use nihongo_types::VocabularyRecord;

pub const HEADERS: [&str; 3] = ["Word", "Reading", "Meaning"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRow {
    pub headword: String,
    pub reading: String,
    pub meaning: String,
}

/// One row per record, in load order. Tags stay on the flashcard.
pub fn collection_rows(records: &[VocabularyRecord]) -> Vec<CollectionRow> {
    records
        .iter()
        .map(|r| CollectionRow {
            headword: r.headword.clone(),
            reading: r.reading.clone(),
            meaning: r.meaning.clone(),
        })
        .collect()
}
