//! Rule evaluation and file discovery

pub mod evaluator;
pub mod walker;

pub use evaluator::{EvaluationEngine, EvaluationResult, Evaluator};
pub use walker::{FileWalker, FileWalkerError};
