use std::rc::Rc;

use nihongo_core::chat;
use nihongo_core::collection::{self, CollectionRow};
use nihongo_core::flashcard::FlashcardView;
use nihongo_core::home::{self, HomeView};
use nihongo_core::practice::{self, PracticeView};
use nihongo_core::session::{self, ChatView};
use nihongo_core::{Page, Session, View};
use nihongo_types::{ChatMessage, Role};
use slint::{ModelRc, SharedString, VecModel};

use crate::{CardData, MainWindow, MessageData, RowData};

/// Texts that never change during a session
pub fn init_static(window: &MainWindow) {
    let menu: Vec<SharedString> = Page::ALL.iter().map(|p| p.label().into()).collect();
    window.set_menu(model(menu));

    let headers: Vec<SharedString> = collection::HEADERS.iter().map(|h| (*h).into()).collect();
    window.set_collection_headers(model(headers));

    window.set_loading_text(session::LOADING_MESSAGE.into());
    window.set_home_heading(home::HEADING.into());
    window.set_home_subtitle(home::SUBTITLE.into());
    window.set_practice_empty_text(practice::EMPTY_MESSAGE.into());
    window.set_chat_empty_text(chat::EMPTY_MESSAGE.into());
    window.set_thinking_text(chat::THINKING_MESSAGE.into());
    window.set_footer(footer_text(home::current_year()).into());
}

/// Push the active view of `session` into the window
pub fn render(window: &MainWindow, session: &Session) {
    window.set_page(session.page().index() as i32);

    match session.view(home::day_of_month()) {
        View::Loading => window.set_loading(true),
        View::Home(view) => {
            window.set_loading(false);
            render_home(window, view);
        }
        View::Practice(view) => {
            window.set_loading(false);
            render_practice(window, view);
        }
        View::Sensei(view) => {
            window.set_loading(false);
            render_chat(window, view);
        }
        View::Collection(rows) => {
            window.set_loading(false);
            window.set_rows(model(rows.into_iter().map(row_data).collect()));
        }
    }
}

fn render_home(window: &MainWindow, view: HomeView) {
    window.set_total_text(total_text(view.total_words).into());
    match view.daily {
        Some(card) => {
            window.set_has_daily(true);
            window.set_daily_card(card_data(card));
        }
        None => window.set_has_daily(false),
    }
}

fn render_practice(window: &MainWindow, view: PracticeView) {
    match view {
        PracticeView::Empty => window.set_practice_empty(true),
        PracticeView::Card {
            card,
            position,
            total,
        } => {
            window.set_practice_empty(false);
            window.set_practice_card(card_data(card));
            window.set_practice_position(format!("{position} / {total}").into());
        }
    }
}

fn render_chat(window: &MainWindow, view: ChatView) {
    window.set_messages(model(view.messages.iter().map(message_data).collect()));
    window.set_chat_pending(view.pending);
    window.set_chat_input(view.input.into());
}

fn model<T: Clone + 'static>(items: Vec<T>) -> ModelRc<T> {
    Rc::new(VecModel::from(items)).into()
}

fn card_data(card: FlashcardView) -> CardData {
    CardData {
        front: card.front.into(),
        reading: card.reading.into(),
        meaning: card.meaning.into(),
        tags: card.tags.unwrap_or_default().into(),
        revealed: card.revealed,
    }
}

fn row_data(row: CollectionRow) -> RowData {
    RowData {
        headword: row.headword.into(),
        reading: row.reading.into(),
        meaning: row.meaning.into(),
    }
}

fn message_data(message: &ChatMessage) -> MessageData {
    MessageData {
        from_user: message.role == Role::User,
        text: message.text.as_str().into(),
    }
}

fn total_text(total: usize) -> String {
    format!("Total words tracked: {total}")
}

fn footer_text(year: i32) -> String {
    format!("NIHONGO NOTES © {year} — BUILT WITH SENSEI AESTHETICS")
}
