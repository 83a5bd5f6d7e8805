//! Terminal layouts for results, history and reviews.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use chrono::DateTime;
use genora_core::{GenerationResult, HistoryItem, Review, Reveal, ToolId, TrendingTopics, TOOLS};

/// The tool catalog, one tool per block.
pub fn tools() -> String {
    let mut out = String::new();
    for tool in TOOLS.iter() {
        let _ = writeln!(out, "{:<20} {}", tool.id.as_str(), tool.title);
        let _ = writeln!(out, "{:<20} {}", "", tool.description);
    }
    out
}

/// A result in its tool's layout.
pub fn result(result: &GenerationResult) -> String {
    let mut out = String::new();
    match result {
        GenerationResult::Titles(items)
        | GenerationResult::Usernames(items)
        | GenerationResult::Slogans(items) => {
            for (n, item) in items.iter().enumerate() {
                let _ = writeln!(out, "{:>2}. {}", n + 1, item);
            }
        }
        GenerationResult::Description(text) => {
            let _ = writeln!(out, "{}", text);
        }
        GenerationResult::Hashtags(tags) => {
            for (label, list) in [
                ("High competition", &tags.high),
                ("Medium competition", &tags.medium),
                ("Low competition", &tags.low),
            ] {
                let _ = writeln!(out, "{}:", label);
                let _ = writeln!(out, "  {}", list.join(" "));
            }
        }
        GenerationResult::Optimization(seo) => {
            let _ = writeln!(out, "Title:\n  {}\n", seo.title);
            let _ = writeln!(out, "Description:\n  {}\n", seo.description);
            let _ = writeln!(out, "Tags:\n  {}", seo.tags.join(", "));
        }
        GenerationResult::Score(score) => {
            let _ = writeln!(out, "SEO score: {}/100 ({})", score.score, score_band(score.score));
            let _ = writeln!(out, "Tips:");
            for tip in &score.tips {
                let _ = writeln!(out, "  - {}", tip);
            }
        }
    }
    out
}

/// Rating band for an SEO score.
pub fn score_band(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "good",
        50..=79 => "fair",
        _ => "poor",
    }
}

/// Print text one character at a time. A zero delay prints it at once.
pub async fn reveal(text: &str, delay: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();
    if delay.is_zero() {
        writeln!(stdout, "{}", text)?;
        return Ok(());
    }

    let mut printed = 0;
    for prefix in Reveal::new(text) {
        stdout.write_all(&prefix.as_bytes()[printed..])?;
        stdout.flush()?;
        printed = prefix.len();
        tokio::time::sleep(delay).await;
    }
    writeln!(stdout)?;
    Ok(())
}

/// One line per history item, with the time and the primary input.
pub fn history_item(item: &HistoryItem) -> String {
    let when = DateTime::from_timestamp_millis(item.timestamp)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| item.timestamp.to_string());
    format!("{}  {}  \"{}\"", item.id, when, truncate(&item.inputs.input1, 48))
}

/// History grouped by tool.
pub fn history(groups: &[(ToolId, Vec<HistoryItem>)]) -> String {
    if groups.is_empty() {
        return "No history yet.\n".to_string();
    }

    let mut out = String::new();
    for (tool, items) in groups {
        let _ = writeln!(out, "{} ({})", tool.tool().title, items.len());
        for item in items {
            let _ = writeln!(out, "  {}", history_item(item));
        }
    }
    out
}

pub fn review(review: &Review) -> String {
    let filled = review.rating.min(5) as usize;
    let stars = "★".repeat(filled) + &"☆".repeat(5 - filled);
    format!("{} {}\n  {}\n", stars, review.username, review.text)
}

pub fn trending(topics: &TrendingTopics) -> String {
    let mut out = String::new();
    for (platform, list) in [("YouTube", &topics.youtube), ("Instagram", &topics.instagram)] {
        let _ = writeln!(out, "{}:", platform);
        for topic in list {
            let _ = writeln!(out, "  - {}", topic);
        }
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}
