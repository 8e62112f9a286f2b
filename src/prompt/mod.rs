pub mod parse;

pub use parse::{parse_judgment_row, parse_labels, parse_ratio};

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::judgment::{GroupContext, InputSource, LabelRequest, RejectReason};

/// Interactive console collaborator: prompts on stdout, reads stdin.
///
/// Parse problems (a judgment that is not a positive number or fraction)
/// are handled here with an immediate re-prompt; structural problems (row
/// length, group size, consistency) are the core's call and come back
/// through `report_rejection`.
pub struct ConsolePrompt {
    min_group: usize,
    max_group: usize,
}

impl ConsolePrompt {
    pub fn new(config: &Config) -> Self {
        let (min_group, max_group) = config.group_bounds();
        ConsolePrompt {
            min_group,
            max_group,
        }
    }

    fn read_line(&self) -> Result<String> {
        let mut input = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read input")?;
        Ok(input)
    }
}

impl InputSource for ConsolePrompt {
    fn request_labels(&mut self, request: LabelRequest<'_>) -> Result<Vec<String>> {
        match request {
            LabelRequest::Alternatives => {
                println!();
                println!(
                    "Which alternatives are you deciding between ({} to {})?",
                    self.min_group, self.max_group
                );
                println!("List them, separated by commas:");
            }
            LabelRequest::TopCriteria => {
                println!();
                println!(
                    "Which top-level criteria matter for this decision ({} to {})?",
                    self.min_group, self.max_group
                );
                println!("List them, separated by commas:");
            }
            LabelRequest::SubCriteria { parent } => {
                println!();
                println!(
                    "Does {} break down into sub-criteria ({} to {})?",
                    parent, self.min_group, self.max_group
                );
                println!("List them separated by commas, or press Enter to keep it as-is:");
            }
        }

        let line = self.read_line()?;
        Ok(parse_labels(&line))
    }

    fn announce_group(&mut self, context: GroupContext<'_>, members: &[String]) {
        println!();
        match context {
            GroupContext::Criteria { parent } => {
                println!("Fill in the judgments for the criteria under {}:", parent);
            }
            GroupContext::Alternatives { leaf } => {
                println!(
                    "Fill in the judgments of the alternatives regarding {}:",
                    leaf
                );
            }
        }
        println!("Each row is one member compared against every member, left to right.");
        println!("Use whole numbers, decimals, or fractions like 1/3.");

        let glossary = members.iter().fold("\t".to_string(), |glossary, member| {
            format!("{}{}\t", glossary, member)
        });
        println!("{}", glossary);
    }

    fn request_judgment_row(&mut self, label: &str, expected: usize) -> Result<Vec<f64>> {
        loop {
            print!("{}\t", label);
            std::io::stdout().flush().context("Failed to flush stdout")?;
            let line = self.read_line()?;
            match parse_judgment_row(&line) {
                Ok(row) => return Ok(row),
                Err(e) => {
                    println!("  {}. Enter {} values for this row.", e, expected);
                }
            }
        }
    }

    fn report_rejection(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::InvalidGroupSize => {
                println!(
                    "A group needs at least {} members and no more than {}.",
                    self.min_group, self.max_group
                );
            }
            RejectReason::MalformedRow => {
                println!("The number of entries ought to match that of the group.");
            }
            RejectReason::InconsistentJudgments => {
                println!(
                    "The coherence of your reasoning is flawed. Try reconsidering the judgments."
                );
            }
        }
    }
}
