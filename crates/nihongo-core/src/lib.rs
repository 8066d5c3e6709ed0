pub mod chat;
pub mod collection;
pub mod flashcard;
pub mod home;
pub mod practice;
pub mod router;
pub mod session;

pub use router::Page;
pub use session::{Session, View};
