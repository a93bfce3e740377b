//! mdns-pub Application Layer
pub mod use_cases;

pub use use_cases::AnswerQueryUseCase;
