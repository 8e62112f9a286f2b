pub mod formatter;

pub use formatter::{
    format_hierarchy, format_ranking, format_ranking_json, format_weighted_hierarchy,
    should_use_colors,
};
