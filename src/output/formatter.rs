use std::io::IsTerminal;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::{ScoreBreakdown, ScoredMatch};

const NO_MATCHES: &str = "No creators found.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals ("73.50")
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

fn primary_vertical(scored: &ScoredMatch) -> &str {
    scored.creator.primary_vertical().unwrap_or("-")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked matches as a table with columns: Index, Score, Handle, Vertical, Reasons
/// No headers. Disqualified creators are dimmed when colors are on.
/// Index column: 3 chars (fits "99."), right-aligned
/// Score column is right-aligned, 6 chars wide (fits "100.00")
pub fn format_scored_table(matches: &[ScoredMatch], use_colors: bool) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 6;
    let separator = "  ";
    let handle_width = matches
        .iter()
        .map(|m| m.creator.handle.chars().count())
        .max()
        .unwrap_or(0);
    let vertical_width = matches
        .iter()
        .map(|m| primary_vertical(m).chars().count())
        .max()
        .unwrap_or(0);

    matches
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_score(scored.score), width = score_width);
            let handle = format!("{:<width$}", scored.creator.handle, width = handle_width);
            let vertical = format!("{:<width$}", primary_vertical(scored), width = vertical_width);

            let reasons = scored.reasons.join("; ");
            let fixed_width = index_width
                + 1
                + score_width
                + handle_width
                + vertical_width
                + separator.len() * 3;
            let reasons = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_text(&reasons, width - fixed_width),
                Some(_) => truncate_text(&reasons, 20),
                // No terminal (pipe), don't truncate
                None => reasons,
            };

            let line = if use_colors && !scored.is_qualified() {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.dimmed(),
                    separator,
                    handle.dimmed(),
                    separator,
                    vertical.dimmed(),
                    separator,
                    reasons.red()
                )
            } else if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    handle.cyan(),
                    separator,
                    vertical.yellow(),
                    separator,
                    reasons
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_padded, separator, handle, separator, vertical, separator, reasons
                )
            };
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format matches as tab-separated values for scripting
/// Columns: score, handle, primary vertical, reasons (no headers, no colors)
pub fn format_tsv(matches: &[ScoredMatch]) -> String {
    matches
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}",
                format_score(scored.score),
                scored.creator.handle,
                primary_vertical(scored),
                scored.reasons.join("; ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format matches as a JSON array of `{creator, score, reasons}` objects
pub fn format_json(matches: &[ScoredMatch]) -> Result<String> {
    serde_json::to_string_pretty(matches).context("Failed to serialize matches")
}

/// Format a single match with detailed multi-line output (for verbose mode)
pub fn format_match_detail(scored: &ScoredMatch, use_colors: bool) -> String {
    let creator = &scored.creator;
    let verticals = if creator.verticals.is_empty() {
        "-".to_string()
    } else {
        creator.verticals.join(", ")
    };
    let header = format!("{} ({})", creator.handle, format_score(scored.score));

    let mut lines = vec![
        if use_colors {
            header.bold().to_string()
        } else {
            header
        },
        format!("  Verticals: {}", verticals),
        format!("  Platforms: {}", creator.platforms.join(", ")),
        format!(
            "  Price: INR {} | Avg views: {} | ER: {:.1}%",
            creator.base_price_inr,
            creator.avg_views,
            creator.engagement_rate * 100.0
        ),
    ];
    lines.extend(scored.reasons.iter().map(|r| format!("  - {}", r)));
    lines.join("\n")
}

/// Format a per-factor score breakdown for one creator
pub fn format_breakdown(handle: &str, breakdown: &ScoreBreakdown, use_colors: bool) -> String {
    let header = format!("{}: {}", handle, format_score(breakdown.score));
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    if let Some(ref reason) = breakdown.disqualified {
        let line = format!("  Disqualified: {}", reason);
        lines.push(if use_colors { line.red().to_string() } else { line });
        return lines.join("\n");
    }

    for factor in &breakdown.factors {
        lines.push(format!(
            "  {:<12} {:>6.2} x {:.2} = {:>6.2}",
            factor.label, factor.raw, factor.weight, factor.weighted
        ));
        for reason in &factor.reasons {
            lines.push(format!("      {}", reason));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::{creator_in, sample_brief, sample_creator};
    use crate::scoring::{aggregate, explain, ScoringWeights};

    fn sample_match(handle: &str, vertical: &str, score: f64) -> ScoredMatch {
        ScoredMatch {
            creator: creator_in(handle, vertical),
            score,
            reasons: vec!["Primary Vertical Match".to_string(), "Within Budget".to_string()],
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(73.5), "73.50");
        assert_eq!(format_score(0.0), "0.00");
        assert_eq!(format_score(100.0), "100.00");
    }

    #[test]
    fn test_truncate_text_short() {
        assert_eq!(truncate_text("Short", 20), "Short");
    }

    #[test]
    fn test_truncate_text_long() {
        assert_eq!(truncate_text("Within Budget; Excellent Value", 15), "Within Budge...");
    }

    #[test]
    fn test_truncate_text_very_narrow() {
        assert_eq!(truncate_text("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_scored_table_empty() {
        assert_eq!(format_scored_table(&[], false), NO_MATCHES);
    }

    #[test]
    fn test_format_scored_table_multiple() {
        let matches = vec![
            sample_match("@styleguru", "Fashion", 88.25),
            sample_match("@gadgets", "Tech", 0.0),
        ];
        let result = format_scored_table(&matches, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains(" 88.25"));
        assert!(lines[0].contains("@styleguru"));
        assert!(lines[0].contains("Fashion"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("  0.00"));
        assert!(lines[1].contains("Tech"));
    }

    #[test]
    fn test_format_tsv() {
        let matches = vec![sample_match("@styleguru", "Fashion", 88.25)];
        assert_eq!(
            format_tsv(&matches),
            "88.25\t@styleguru\tFashion\tPrimary Vertical Match; Within Budget"
        );
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_tsv_without_verticals() {
        let mut scored = sample_match("@blank", "Fashion", 10.0);
        scored.creator.verticals.clear();
        assert!(format_tsv(&[scored]).contains("\t-\t"));
    }

    #[test]
    fn test_format_json_shape() {
        let matches = vec![sample_match("@styleguru", "Fashion", 88.25)];
        let json = format_json(&matches).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["score"], 88.25);
        assert_eq!(value[0]["creator"]["handle"], "@styleguru");
        assert_eq!(value[0]["creator"]["basePriceINR"], 30000);
        assert_eq!(value[0]["reasons"][1], "Within Budget");
    }

    #[test]
    fn test_format_match_detail() {
        let scored = aggregate(&sample_brief(), &sample_creator("@a"), &ScoringWeights::default());
        let result = format_match_detail(&scored, false);
        assert!(result.starts_with("@a (73.50)"));
        assert!(result.contains("Verticals: Fashion"));
        assert!(result.contains("ER: 4.0%"));
        assert!(result.contains("  - Tone Fit (1/2)"));
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown = explain(&sample_brief(), &sample_creator("@a"), &ScoringWeights::default());
        let result = format_breakdown("@a", &breakdown, false);
        assert!(result.starts_with("@a: 73.50"));
        assert!(result.contains("Relevance     85.00 x 0.40 =  34.00"));
        assert!(result.contains("Constraints  100.00 x 0.10 =  10.00"));
    }

    #[test]
    fn test_format_breakdown_disqualified() {
        let mut creator = sample_creator("@pricey");
        creator.base_price_inr = 1_000_000;
        let breakdown = explain(&sample_brief(), &creator, &ScoringWeights::default());
        let result = format_breakdown("@pricey", &breakdown, false);
        assert!(result.contains("Disqualified: Price over budget"));
    }
}
