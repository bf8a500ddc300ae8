//! studentgen-core: Profile extraction, question answering, and batch generation.
//!
//! This crate defines the student record model, the free-text profile
//! extractor, the analytic question answerer, and the traits that the
//! provider and storage crates implement.

pub mod answer;
pub mod engine;
pub mod error;
pub mod extract;
pub mod model;
pub mod statistics;
pub mod traits;

pub use answer::{answer, Answer, Query, NOT_UNDERSTOOD};
pub use error::{AnswerError, ProviderError};
pub use extract::extract;
pub use model::{NewStudent, StudentRecord};
