use std::cell::RefCell;
use std::rc::Rc;

use kanal::AsyncSender;
use nihongo_core::home;
use nihongo_core::{Page, Session};
use nihongo_types::AppEvent;
use slint::{ComponentHandle, Weak};

use crate::MainWindow;
use crate::render::render;

/// Apply an event coming back from the backend
pub fn handle_events(event: AppEvent, window: &MainWindow, session: &RefCell<Session>) {
    match &event {
        AppEvent::RecordsLoaded(records) => {
            tracing::debug!("[SLINT] {} words loaded", records.len());
        }
        AppEvent::SenseiAnswered { id, .. } => {
            tracing::debug!("[SLINT] Sensei answered request {}", id);
        }
        _ => {}
    }

    session.borrow_mut().apply(event);
    render(window, &session.borrow());
}

/// Hook window callbacks up to session operations
pub fn wire_callbacks(
    window: &MainWindow,
    session: &Rc<RefCell<Session>>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
) {
    {
        let session = session.clone();
        let weak = window.as_weak();
        window.on_select_page(move |index| {
            let Some(page) = usize::try_from(index).ok().and_then(Page::from_index) else {
                tracing::warn!("[SLINT] Unknown page index {}", index);
                return;
            };
            session.borrow_mut().select_page(page);
            refresh(&weak, &session);
        });
    }

    {
        let session = session.clone();
        let weak = window.as_weak();
        window.on_flip_daily(move || {
            session.borrow_mut().flip_daily(home::day_of_month());
            refresh(&weak, &session);
        });
    }

    {
        let session = session.clone();
        let weak = window.as_weak();
        window.on_flip_card(move || {
            session.borrow_mut().flip_card();
            refresh(&weak, &session);
        });
    }

    {
        let session = session.clone();
        let weak = window.as_weak();
        window.on_next_card(move || {
            session.borrow_mut().next_card();
            refresh(&weak, &session);
        });
    }

    {
        let session = session.clone();
        let weak = window.as_weak();
        window.on_previous_card(move || {
            session.borrow_mut().previous_card();
            refresh(&weak, &session);
        });
    }

    // No refresh here, the line edit already shows the text
    {
        let session = session.clone();
        window.on_chat_edited(move |text| {
            session.borrow_mut().set_chat_input(text.as_str());
        });
    }

    {
        let session = session.clone();
        let weak = window.as_weak();
        let tx = ui_to_app_tx.clone();
        window.on_send_message(move || {
            let request = session.borrow_mut().submit_chat();
            refresh(&weak, &session);
            if let Some(request) = request {
                send_to_backend(&tx, AppEvent::AskSensei(request));
            }
        });
    }
}

fn refresh(weak: &Weak<MainWindow>, session: &RefCell<Session>) {
    if let Some(window) = weak.upgrade() {
        render(&window, &session.borrow());
    }
}

fn send_to_backend(tx: &AsyncSender<AppEvent>, event: AppEvent) {
    let tx = tx.clone();
    let spawned = slint::spawn_local(async move {
        if let Err(e) = tx.send(event).await {
            tracing::error!("[SLINT] Failed to send event to backend: {}", e);
        }
    });

    if let Err(e) = spawned {
        tracing::error!("[SLINT] Failed to schedule backend send: {}", e);
    }
}
