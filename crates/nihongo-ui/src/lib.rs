use std::cell::RefCell;
use std::rc::Rc;

use kanal::{AsyncReceiver, AsyncSender};
use nihongo_config::Config;
use nihongo_core::Session;
use nihongo_types::AppEvent;
use slint::ComponentHandle;

mod events;
mod render;

slint::include_modules!();

/// Build the window and run the Slint event loop on the calling thread.
///
/// The session lives here and is only touched from this thread; backend
/// results arrive on `app_to_ui_rx` and requests leave through
/// `ui_to_app_tx`. Returns when the window is closed.
pub fn run(
    config: &Config,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let window = MainWindow::new()?;
    let session = Rc::new(RefCell::new(Session::new()));

    window.set_window_title(config.ui.window_title.as_str().into());
    render::init_static(&window);
    render::render(&window, &session.borrow());
    events::wire_callbacks(&window, &session, &ui_to_app_tx);

    // Spawn a task to receive events from the app
    {
        let window_weak = window.as_weak();
        let session = session.clone();
        slint::spawn_local(async move {
            while let Ok(event) = app_to_ui_rx.recv().await {
                // Window gone: late answers are dropped
                let Some(window) = window_weak.upgrade() else {
                    break;
                };
                events::handle_events(event, &window, &session);
            }
            tracing::debug!("[SLINT] Backend channel closed");
        })?;
    }

    tracing::info!("[SLINT] Window ready");
    window.run()?;
    tracing::info!("[SLINT] Window closed");

    Ok(())
}

/// Ask the event loop to stop, safe from any thread
pub fn request_quit() {
    if let Err(e) = slint::quit_event_loop() {
        tracing::warn!("[SLINT] Failed to quit event loop: {}", e);
    }
}
