use nihongo_types::{
    AppEvent, ChatMessage, RequestId, SenseiOutcome, SenseiRequest, VocabularyRecord,
};

use crate::chat::ChatLog;
use crate::collection::{CollectionRow, collection_rows};
use crate::flashcard::FlashcardSlot;
use crate::home::{HomeView, daily_position, home_view};
use crate::practice::{PracticeBrowser, PracticeView};
use crate::router::{Page, Router};

pub const LOADING_MESSAGE: &str = "Loading your notes...";

/// Everything one running session knows.
///
/// Built once at startup, changed only through the methods below, and
/// dropped when the window closes.
#[derive(Debug)]
pub struct Session {
    router: Router,
    records: Vec<VocabularyRecord>,
    loading: bool,
    practice: PracticeBrowser,
    daily: FlashcardSlot,
    chat: ChatLog,
}

/// What the active page should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Home(HomeView),
    Practice(PracticeView),
    Sensei(ChatView),
    Collection(Vec<CollectionRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub pending: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts on Home, waiting for the word list
    pub fn new() -> Self {
        Self {
            router: Router::default(),
            records: Vec::new(),
            loading: true,
            practice: PracticeBrowser::default(),
            daily: FlashcardSlot::default(),
            chat: ChatLog::default(),
        }
    }

    pub fn page(&self) -> Page {
        self.router.current()
    }

    pub fn select_page(&mut self, page: Page) {
        self.router.select(page);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[VocabularyRecord] {
        &self.records
    }

    /// Take the word list of this session. It is fetched once, so a list
    /// arriving after the first is ignored.
    pub fn set_records(&mut self, records: Vec<VocabularyRecord>) {
        if !self.loading {
            tracing::debug!("Ignoring {} words, list already loaded", records.len());
            return;
        }

        tracing::debug!("Session now holds {} words", records.len());
        self.practice.reset(records.len());
        self.daily.clear();
        self.records = records;
        self.loading = false;
    }

    pub fn next_card(&mut self) {
        self.practice.next();
    }

    pub fn previous_card(&mut self) {
        self.practice.previous();
    }

    pub fn flip_card(&mut self) {
        self.practice.flip();
    }

    pub fn flip_daily(&mut self, day: u32) {
        if let Some(pos) = daily_position(day, self.records.len()) {
            self.daily.card_for(pos).flip();
        }
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn set_chat_input(&mut self, text: impl Into<String>) {
        self.chat.set_input(text);
    }

    pub fn submit_chat(&mut self) -> Option<SenseiRequest> {
        self.chat.begin_submit()
    }

    pub fn resolve_chat(&mut self, id: RequestId, outcome: SenseiOutcome) {
        self.chat.resolve(id, outcome);
    }

    /// Fold a backend event into the session.
    /// Requests travelling the other way are ignored.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::RecordsLoaded(records) => self.set_records(records),
            AppEvent::SenseiAnswered { id, outcome } => self.resolve_chat(id, outcome),
            AppEvent::AskSensei(_) => {}
        }
    }

    /// View for the selected page; `day` picks the word of the day
    pub fn view(&self, day: u32) -> View {
        if self.loading {
            return View::Loading;
        }

        match self.router.current() {
            Page::Home => View::Home(home_view(&self.records, &self.daily, day)),
            Page::Practice => View::Practice(self.practice.view(&self.records)),
            Page::Sensei => View::Sensei(ChatView {
                messages: self.chat.messages().to_vec(),
                input: self.chat.input().to_string(),
                pending: self.chat.pending(),
            }),
            Page::Collection => View::Collection(collection_rows(&self.records)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(heads: &[&str]) -> Vec<VocabularyRecord> {
        heads
            .iter()
            .map(|h| VocabularyRecord {
                headword: h.to_string(),
                reading: format!("{h}-reading"),
                meaning: format!("{h}-meaning"),
                tags: None,
            })
            .collect()
    }

    fn practice_card(session: &Session) -> (String, bool) {
        match session.view(1) {
            View::Practice(PracticeView::Card { card, .. }) => (card.front, card.revealed),
            other => panic!("expected a practice card, got {other:?}"),
        }
    }

    #[test]
    fn loading_until_records_arrive() {
        let mut session = Session::new();
        assert_eq!(session.page(), Page::Home);
        assert_eq!(session.view(1), View::Loading);

        session.select_page(Page::Collection);
        assert_eq!(session.view(1), View::Loading);

        session.apply(AppEvent::RecordsLoaded(words(&["a", "b"])));
        assert!(!session.is_loading());
        match session.view(1) {
            View::Collection(rows) => assert_eq!(rows.len(), 2),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn empty_load_shows_empty_practice() {
        let mut session = Session::new();
        session.apply(AppEvent::RecordsLoaded(Vec::new()));
        session.select_page(Page::Practice);
        session.next_card();
        session.flip_card();
        assert_eq!(session.view(1), View::Practice(PracticeView::Empty));
    }

    #[test]
    fn next_after_reveal_shows_unrevealed_card() {
        let mut session = Session::new();
        session.set_records(words(&["a", "b", "c"]));
        session.select_page(Page::Practice);

        session.flip_card();
        assert_eq!(practice_card(&session), ("a".to_string(), true));

        session.next_card();
        assert_eq!(practice_card(&session), ("b".to_string(), false));
    }

    #[test]
    fn practice_position_survives_page_switches() {
        let mut session = Session::new();
        session.set_records(words(&["a", "b", "c"]));
        session.select_page(Page::Practice);
        session.next_card();
        session.select_page(Page::Home);
        session.select_page(Page::Practice);
        assert_eq!(practice_card(&session).0, "b");
    }

    #[test]
    fn word_list_is_loaded_once() {
        let mut session = Session::new();
        session.apply(AppEvent::RecordsLoaded(words(&["a", "b", "c"])));
        session.select_page(Page::Practice);
        session.next_card();
        session.flip_card();

        session.apply(AppEvent::RecordsLoaded(words(&["x", "y"])));
        assert!(!session.is_loading());
        assert_eq!(session.records().len(), 3);
        assert_eq!(practice_card(&session), ("b".to_string(), true));
    }

    #[test]
    fn daily_card_flips_independently() {
        let mut session = Session::new();
        session.set_records(words(&["a", "b", "c"]));

        session.flip_daily(4);
        match session.view(4) {
            View::Home(home) => {
                let card = home.daily.unwrap();
                assert_eq!(card.front, "b");
                assert!(card.revealed);
                assert_eq!(home.total_words, 3);
            }
            other => panic!("unexpected view {other:?}"),
        }

        // next day, different word, front face again
        match session.view(5) {
            View::Home(home) => assert!(!home.daily.unwrap().revealed),
            other => panic!("unexpected view {other:?}"),
        }

        session.select_page(Page::Practice);
        assert!(!practice_card(&session).1);
    }

    #[test]
    fn chat_round_trip_through_events() {
        let mut session = Session::new();
        session.set_records(Vec::new());
        session.select_page(Page::Sensei);

        session.set_chat_input("   ");
        assert!(session.submit_chat().is_none());

        session.set_chat_input("hello");
        let request = session.submit_chat().unwrap();
        match session.view(1) {
            View::Sensei(chat) => {
                assert!(chat.pending);
                assert_eq!(chat.input, "");
                assert_eq!(chat.messages, vec![ChatMessage::user("hello")]);
            }
            other => panic!("unexpected view {other:?}"),
        }

        session.apply(AppEvent::SenseiAnswered {
            id: request.id,
            outcome: SenseiOutcome::Unavailable,
        });
        match session.view(1) {
            View::Sensei(chat) => {
                assert!(!chat.pending);
                assert_eq!(chat.messages.len(), 2);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn chat_is_independent_of_records() {
        let mut session = Session::new();
        session.set_chat_input("question");
        let request = session.submit_chat().unwrap();
        session.set_records(words(&["a"]));
        session.resolve_chat(request.id, SenseiOutcome::Reply(Some("answer".to_string())));
        assert_eq!(session.chat().messages().len(), 2);
    }
}
