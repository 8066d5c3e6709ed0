pub mod sensei;

pub use sensei::{JapaneseSensei, SYSTEM_INSTRUCTION};
