pub mod matrix;
pub mod source;
pub mod validation;

pub use matrix::JudgmentMatrix;
pub use source::{collect_judgments, GroupContext, InputSource, LabelRequest};
pub use validation::{
    evaluate_matrix, AcceptedJudgments, MatrixOutcome, RejectReason,
    DEFAULT_CONSISTENCY_THRESHOLD,
};
