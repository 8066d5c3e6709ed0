use chrono::{Datelike, Local};
use nihongo_types::VocabularyRecord;

use crate::flashcard::{FlashcardSlot, FlashcardView};

pub const HEADING: &str = "DAILY REMINDER / 今日の言葉";
pub const SUBTITLE: &str = "Keep consistency in your learning journey.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub daily: Option<FlashcardView>,
    pub total_words: usize,
}

/// Local calendar day, 1..=31
pub fn day_of_month() -> u32 {
    Local::now().day()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Position of the word of the day: `day % len`
pub fn daily_position(day: u32, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(day as usize % len)
    }
}

pub fn home_view(records: &[VocabularyRecord], daily: &FlashcardSlot, day: u32) -> HomeView {
    let daily = daily_position(day, records.len())
        .and_then(|pos| records.get(pos).map(|record| daily.peek(pos).view(record)));

    HomeView {
        daily,
        total_words: records.len(),
    }
}
