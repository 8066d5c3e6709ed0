use std::sync::Arc;

use kanal::AsyncSender;
use nihongo_types::{AppEvent, SenseiOutcome, SenseiRequest};

use crate::state::AppState;

pub async fn handle_ask_sensei(
    state: Arc<AppState>,
    request: SenseiRequest,
    app_to_ui_tx: AsyncSender<AppEvent>,
) {
    let outcome = match &state.sensei {
        Some(sensei) => {
            tracing::debug!(
                "Asking {} ({}) for request {}",
                sensei.metadata().name,
                sensei.metadata().model,
                request.id
            );
            nihongo_core::chat::ask(sensei.as_ref(), &request.text).await
        }
        None => {
            tracing::warn!("Sensei disabled, request {} unanswered", request.id);
            SenseiOutcome::Unavailable
        }
    };

    let event = AppEvent::SenseiAnswered {
        id: request.id,
        outcome,
    };
    if let Err(e) = app_to_ui_tx.send(event).await {
        tracing::debug!("UI gone, dropping answer for request {}: {}", request.id, e);
    }
}
