pub mod types;

pub use types::{
    AppEvent, ChatMessage, RequestId, Role, SenseiOutcome, SenseiRequest, VocabularyRecord,
};
