pub mod aggregate;

pub use aggregate::{rank, score_alternatives, AlternativeScore};
