use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use nihongo_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod ask_sensei;
pub mod load_records;

use ask_sensei::handle_ask_sensei;
use load_records::handle_load_records;

/// App's main loop. Loads the word list once at startup, then serves UI
/// requests until cancelled. There is no second load.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!(
        "[EVENT_LOOP] Starting, word list source: {}",
        state.source.describe()
    );
    tokio::spawn(handle_load_records(state.clone(), app_to_ui_tx.clone()));

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(&state, &app_to_ui_tx, event);
    }

    Ok(())
}

/// Each request runs as its own task, so answers may come back in any order
fn handle_events(state: &Arc<AppState>, app_to_ui_tx: &AsyncSender<AppEvent>, event: AppEvent) {
    match event {
        AppEvent::AskSensei(request) => {
            tokio::spawn(handle_ask_sensei(
                state.clone(),
                request,
                app_to_ui_tx.clone(),
            ));
        }
        AppEvent::RecordsLoaded(_) | AppEvent::SenseiAnswered { .. } => {
            // UI-only events, ignore in backend
        }
    }
}
