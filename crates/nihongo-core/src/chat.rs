use std::collections::HashSet;

use nihongo_sensei::{Sensei, SenseiError, SenseiReply};
use nihongo_types::{ChatMessage, RequestId, SenseiOutcome, SenseiRequest};

pub const EMPTY_MESSAGE: &str = "Ask your Sensei about grammar or words.";
pub const THINKING_MESSAGE: &str = "Sensei is thinking...";
pub const NO_TEXT_FALLBACK: &str = "Sorry, I couldn't process that.";
pub const UNAVAILABLE_FALLBACK: &str = "The Sensei is currently unavailable.";

/// Append-only chat log plus the input box and in-flight requests
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    input: String,
    in_flight: HashSet<RequestId>,
    next_id: RequestId,
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// True while any request has not been resolved
    pub fn pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Move the input into the log and hand back the request to send.
    /// Blank input does nothing.
    pub fn begin_submit(&mut self) -> Option<SenseiRequest> {
        if self.input.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight.insert(id);

        tracing::debug!("Chat request {} submitted", id);
        Some(SenseiRequest { id, text })
    }

    /// Append the answer for `id`. Unknown ids are ignored.
    pub fn resolve(&mut self, id: RequestId, outcome: SenseiOutcome) {
        if !self.in_flight.remove(&id) {
            tracing::debug!("Dropping answer for unknown chat request {}", id);
            return;
        }

        let text = match outcome {
            SenseiOutcome::Reply(Some(text)) => text,
            SenseiOutcome::Reply(None) => NO_TEXT_FALLBACK.to_string(),
            SenseiOutcome::Unavailable => UNAVAILABLE_FALLBACK.to_string(),
        };
        self.messages.push(ChatMessage::assistant(text));
    }

    /// Submit the current input and wait for the answer in place
    pub async fn submit(&mut self, sensei: &dyn Sensei) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };

        let outcome = ask(sensei, &request.text).await;
        self.resolve(request.id, outcome);
        true
    }
}

/// Run one question against the Sensei, logging and swallowing failures
pub async fn ask(sensei: &dyn Sensei, text: &str) -> SenseiOutcome {
    into_outcome(sensei.ask(text).await)
}

pub fn into_outcome(result: Result<SenseiReply, SenseiError>) -> SenseiOutcome {
    match result {
        Ok(reply) => SenseiOutcome::Reply(reply.text),
        Err(e) => {
            tracing::warn!("Sensei request failed: {}", e);
            SenseiOutcome::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use nihongo_sensei::ProviderMetadata;
    use nihongo_types::Role;

    use super::*;

    enum Behaviour {
        Answer(&'static str),
        NoText,
        Fail,
    }

    struct ScriptedSensei {
        behaviour: Behaviour,
        calls: AtomicUsize,
    }

    impl ScriptedSensei {
        fn new(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Sensei for ScriptedSensei {
        async fn ask(&self, _text: &str) -> Result<SenseiReply, SenseiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behaviour {
                Behaviour::Answer(text) => Ok(SenseiReply {
                    text: Some(text.to_string()),
                }),
                Behaviour::NoText => Ok(SenseiReply { text: None }),
                Behaviour::Fail => Err(SenseiError::ApiError("HTTP 500".to_string())),
            }
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "scripted".to_string(),
                model: "test".to_string(),
                requires_api_key: false,
            }
        }
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let sensei = ScriptedSensei::new(Behaviour::Answer("unused"));
        let mut chat = ChatLog::default();

        for input in ["", "   ", "\n\t"] {
            chat.set_input(input);
            assert!(!chat.submit(&sensei).await);
        }

        assert!(chat.messages().is_empty());
        assert!(!chat.pending());
        assert_eq!(sensei.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failure_appends_fallback_once() {
        let sensei = ScriptedSensei::new(Behaviour::Fail);
        let mut chat = ChatLog::default();
        chat.set_input("hello");

        assert!(chat.submit(&sensei).await);

        assert_eq!(
            chat.messages(),
            &[
                ChatMessage::user("hello"),
                ChatMessage::assistant(UNAVAILABLE_FALLBACK),
            ]
        );
        assert!(!chat.pending());
        assert_eq!(chat.input(), "");
    }

    #[tokio::test]
    async fn answer_is_appended() {
        let sensei = ScriptedSensei::new(Behaviour::Answer("「は」marks the topic."));
        let mut chat = ChatLog::default();
        chat.set_input("は vs が?");
        chat.submit(&sensei).await;

        let messages = chat.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].text, "「は」marks the topic.");
    }

    #[tokio::test]
    async fn reply_without_text_uses_fallback() {
        let sensei = ScriptedSensei::new(Behaviour::NoText);
        let mut chat = ChatLog::default();
        chat.set_input("hello");
        chat.submit(&sensei).await;

        assert_eq!(chat.messages()[1], ChatMessage::assistant(NO_TEXT_FALLBACK));
    }

    #[test]
    fn begin_submit_clears_input_and_sets_pending() {
        let mut chat = ChatLog::default();
        chat.set_input("  おはよう ");

        let request = chat.begin_submit().unwrap();
        assert_eq!(request.text, "  おはよう ");
        assert_eq!(chat.input(), "");
        assert!(chat.pending());
        assert_eq!(chat.messages(), &[ChatMessage::user("  おはよう ")]);
    }

    #[test]
    fn out_of_order_answers_are_appended_as_they_arrive() {
        let mut chat = ChatLog::default();
        chat.set_input("first");
        let first = chat.begin_submit().unwrap();
        chat.set_input("second");
        let second = chat.begin_submit().unwrap();
        assert_ne!(first.id, second.id);

        chat.resolve(second.id, SenseiOutcome::Reply(Some("to second".to_string())));
        assert!(chat.pending());
        chat.resolve(first.id, SenseiOutcome::Unavailable);
        assert!(!chat.pending());

        let texts: Vec<_> = chat.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "to second", UNAVAILABLE_FALLBACK]);
    }

    #[test]
    fn unknown_or_repeated_answers_are_ignored() {
        let mut chat = ChatLog::default();
        chat.resolve(42, SenseiOutcome::Unavailable);
        assert!(chat.messages().is_empty());

        chat.set_input("q");
        let request = chat.begin_submit().unwrap();
        chat.resolve(request.id, SenseiOutcome::Unavailable);
        chat.resolve(request.id, SenseiOutcome::Unavailable);
        assert_eq!(chat.messages().len(), 2);
    }
}
