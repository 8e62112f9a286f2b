use anyhow::Result;

use super::matrix::JudgmentMatrix;
use super::validation::{evaluate_matrix, AcceptedJudgments, MatrixOutcome, RejectReason};

/// What a label request is for, so the collaborator can word its prompt.
#[derive(Debug, Clone, Copy)]
pub enum LabelRequest<'a> {
    Alternatives,
    TopCriteria,
    SubCriteria { parent: &'a str },
}

/// Which sibling group a judgment matrix is being collected for.
#[derive(Debug, Clone, Copy)]
pub enum GroupContext<'a> {
    /// Criteria compared under their parent node.
    Criteria { parent: &'a str },
    /// Alternatives compared from one leaf criterion's perspective.
    Alternatives { leaf: &'a str },
}

/// Boundary to whatever supplies labels and judgments: the interactive
/// console in the binary, a scripted source in tests.
pub trait InputSource {
    /// Ask for a list of names. May legitimately return an empty list
    /// (a criterion with no sub-criteria).
    fn request_labels(&mut self, request: LabelRequest<'_>) -> Result<Vec<String>>;

    /// Called once before each attempt at collecting a group's matrix.
    fn announce_group(&mut self, context: GroupContext<'_>, members: &[String]);

    /// Ask for one matrix row: how `label` compares against every group
    /// member, `expected` values. The returned row may have the wrong
    /// length; the collection loop checks and re-requests.
    fn request_judgment_row(&mut self, label: &str, expected: usize) -> Result<Vec<f64>>;

    /// Tell the collaborator its last unit of input was not usable and will
    /// be requested again.
    fn report_rejection(&mut self, reason: RejectReason);
}

/// Collect one sibling group's full judgment matrix.
///
/// Rows with the wrong entry count are re-requested individually. A matrix
/// that fails the consistency check is thrown away and the whole group is
/// re-collected; nothing accepted earlier is touched. Loops until the
/// source produces an acceptable matrix.
pub fn collect_judgments(
    source: &mut dyn InputSource,
    context: GroupContext<'_>,
    members: &[String],
    threshold: f64,
) -> Result<AcceptedJudgments> {
    let n = members.len();
    loop {
        source.announce_group(context, members);

        let mut rows = Vec::with_capacity(n);
        for member in members {
            let row = loop {
                let row = source.request_judgment_row(member, n)?;
                if row.len() == n {
                    break row;
                }
                source.report_rejection(RejectReason::MalformedRow);
            };
            rows.push(row);
        }

        let matrix = JudgmentMatrix::new(rows)?;
        match evaluate_matrix(&matrix, threshold)? {
            MatrixOutcome::Accepted(accepted) => return Ok(accepted),
            MatrixOutcome::Rejected(reason) => source.report_rejection(reason),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned replies in order; panics when the script runs dry so
    /// a looping test fails instead of hanging.
    pub struct ScriptedSource {
        labels: VecDeque<Vec<String>>,
        rows: VecDeque<Vec<f64>>,
        pub rejections: Vec<RejectReason>,
    }

    impl ScriptedSource {
        pub fn new() -> Self {
            ScriptedSource {
                labels: VecDeque::new(),
                rows: VecDeque::new(),
                rejections: Vec::new(),
            }
        }

        pub fn push_labels(&mut self, labels: &[&str]) {
            self.labels
                .push_back(labels.iter().map(|l| l.to_string()).collect());
        }

        pub fn push_row(&mut self, row: &[f64]) {
            self.rows.push_back(row.to_vec());
        }

        /// Queue every row of a consistent "all members equal" matrix.
        pub fn push_uniform_matrix(&mut self, n: usize) {
            for _ in 0..n {
                self.push_row(&vec![1.0; n]);
            }
        }
    }

    impl InputSource for ScriptedSource {
        fn request_labels(&mut self, _request: LabelRequest<'_>) -> Result<Vec<String>> {
            Ok(self
                .labels
                .pop_front()
                .expect("script ran out of label replies"))
        }

        fn announce_group(&mut self, _context: GroupContext<'_>, _members: &[String]) {}

        fn request_judgment_row(&mut self, _label: &str, _expected: usize) -> Result<Vec<f64>> {
            Ok(self.rows.pop_front().expect("script ran out of rows"))
        }

        fn report_rejection(&mut self, reason: RejectReason) {
            self.rejections.push(reason);
        }
    }
}
