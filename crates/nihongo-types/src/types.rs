use serde::{Deserialize, Serialize};

/// Events exchanged between the UI thread and the backend tasks
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The one word list of this session
    RecordsLoaded(Vec<VocabularyRecord>),
    AskSensei(SenseiRequest),
    SenseiAnswered {
        id: RequestId,
        outcome: SenseiOutcome,
    },
}

/// One row of the word list. Identity is its position in the loaded sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub headword: String,
    pub reading: String,
    pub meaning: String,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

pub type RequestId = u64;

/// A chat question waiting to be sent to the Sensei
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenseiRequest {
    pub id: RequestId,
    pub text: String,
}

/// What came back from the Sensei, with the failure cause already logged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenseiOutcome {
    /// The service answered; `None` when the answer carried no text
    Reply(Option<String>),
    Unavailable,
}
