use std::io::IsTerminal;

use anyhow::Result;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::hierarchy::{Hierarchy, NodeId};
use crate::scoring::AlternativeScore;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Render the criteria tree below the goal, one node per line, indented one
/// tab per level.
pub fn format_hierarchy(hierarchy: &Hierarchy, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for &child in hierarchy.node(hierarchy.root()).children() {
        format_subtree(hierarchy, child, 0, use_colors, &mut lines, &|node| {
            node.name().to_string()
        });
    }
    lines.join("\n")
}

/// Render the tree with each node's global weight: `name ( 0.532 )`.
pub fn format_weighted_hierarchy(hierarchy: &Hierarchy, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for &child in hierarchy.node(hierarchy.root()).children() {
        format_subtree(hierarchy, child, 0, use_colors, &mut lines, &|node| {
            format!("{} ( {:.3} )", node.name(), node.global_weight())
        });
    }
    lines.join("\n")
}

fn format_subtree(
    hierarchy: &Hierarchy,
    id: NodeId,
    level: usize,
    use_colors: bool,
    lines: &mut Vec<String>,
    message: &dyn Fn(&crate::hierarchy::Node) -> String,
) {
    let node = hierarchy.node(id);
    let indent = "\t".repeat(level);
    let text = message(node);
    if use_colors && node.is_leaf() {
        lines.push(format!("{}{}", indent, text.cyan()));
    } else {
        lines.push(format!("{}{}", indent, text));
    }
    for &child in node.children() {
        format_subtree(hierarchy, child, level + 1, use_colors, lines, message);
    }
}

/// Format the final ranking as an indexed table, best alternative first.
pub fn format_ranking(ranking: &[AlternativeScore], use_colors: bool) -> String {
    if ranking.is_empty() {
        return "No alternatives scored.".to_string();
    }

    let term_width = terminal_size().map(|(Width(w), _)| w as usize);
    // Index column: 3 chars. Score column: 7 chars ("0.532"-style plus
    // padding). The name gets whatever is left.
    let score_width = 7;
    let separator = "  ";

    ranking
        .iter()
        .enumerate()
        .map(|(idx, alternative)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded =
                format!("{:>width$.3}", alternative.score, width = score_width);

            let fixed_width = 3 + 1 + score_width + separator.len();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&alternative.name, width - fixed_width)
                }
                Some(_) => truncate_name(&alternative.name, 20),
                // No terminal (pipe), don't truncate
                None => alternative.name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    name
                )
            } else {
                format!("{} {}{}{}", index_str, score_padded, separator, name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize the ranking for scripting, order preserved.
pub fn format_ranking_json(ranking: &[AlternativeScore]) -> Result<String> {
    Ok(serde_json::to_string_pretty(ranking)?)
}

fn truncate_name(name: &str, max_width: usize) -> String {
    if name.chars().count() <= max_width {
        return name.to_string();
    }
    if max_width <= 3 {
        return name.chars().take(max_width).collect();
    }
    let truncated: String = name.chars().take(max_width - 3).collect();
    format!("{}...", truncated)
}
