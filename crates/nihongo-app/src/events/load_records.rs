use std::sync::Arc;

use kanal::AsyncSender;
use nihongo_types::AppEvent;

use crate::state::AppState;

pub async fn handle_load_records(state: Arc<AppState>, app_to_ui_tx: AsyncSender<AppEvent>) {
    let records = state.source.load().await;

    if records.is_empty() {
        tracing::warn!("Word list is empty");
    }

    if let Err(e) = app_to_ui_tx.send(AppEvent::RecordsLoaded(records)).await {
        tracing::debug!("UI gone, dropping loaded words: {}", e);
    }
}
