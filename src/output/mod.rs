pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_match_detail, format_score, format_scored_table,
    format_tsv, should_use_colors,
};
