//! Plain-text rendering for the command-line front end.
//!
//! Consumes only what the search session exposes: comments, counts, teams
//! and suggestions. Every function returns a `String` without a trailing
//! newline so callers control spacing.

pub mod styles;

pub use styles::{ColorConfig, Palette};

use crate::model::{Comment, Sentiment, SentimentCounts};
use crate::state::SearchSession;
use crate::view_state::PanelVisibility;
use unicode_width::UnicodeWidthStr;

/// Shown when a search matches nothing. Zero matches is a normal outcome.
pub const EMPTY_STATE: &str = "No comments match the current filters.";

/// Indent for comment bodies inside a card.
const BODY_INDENT: &str = "  ";

/// Layout settings shared by all renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Total columns available for a card, indentation included.
    pub width: usize,
    /// Sentiment colors.
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 80,
            palette: Palette::plain(),
        }
    }
}

// ===== Screen =====

/// Everything the front end shows for the session's current state.
///
/// Idle sessions show the suggestion list. Searched sessions show the
/// results, followed by statistics when that panel is open.
pub fn render_screen(
    session: &mut SearchSession,
    panels: PanelVisibility,
    options: &RenderOptions,
) -> String {
    if !session.has_searched() {
        return render_suggestions(session.suggestions());
    }

    let query = session.criteria().query.clone();
    let counts = session.sentiment_counts();
    let comments = session.filtered_comments();
    let mut screen = render_results(&comments, &query, options);
    if panels.stats {
        screen.push_str("\n\n");
        screen.push_str(&render_stats(&counts, options.palette));
    }
    screen
}

// ===== Comment Cards =====

/// Render one comment as a card.
///
/// ```text
/// [Negative 92%] Robert Brown | Real Madrid
/// 2026-02-18 14:10 | Twitter
///   The referee made a completely wrong penalty call!
///   keywords: referee, penalty, wrong
/// ```
pub fn render_comment(comment: &Comment, options: &RenderOptions) -> String {
    let sentiment = comment.sentiment();
    let badge = format!("[{} {}%]", sentiment.label(), comment.confidence().percent());

    let mut heading = format!(
        "{} {}",
        options.palette.paint(sentiment, &badge),
        comment.author()
    );
    if let Some(team) = comment.team() {
        heading.push_str(" | ");
        heading.push_str(team);
    }

    let mut meta = comment.timestamp().to_string();
    if let Some(source) = comment.source() {
        meta.push_str(" | ");
        meta.push_str(source);
    }

    let mut lines = vec![heading, meta];
    let body_width = options.width.saturating_sub(BODY_INDENT.len()).max(1);
    lines.extend(
        wrap_text(comment.content(), body_width)
            .into_iter()
            .map(|line| format!("{}{}", BODY_INDENT, line)),
    );
    if !comment.keywords().is_empty() {
        lines.push(format!(
            "{}keywords: {}",
            BODY_INDENT,
            comment.keywords().join(", ")
        ));
    }

    lines.join("\n")
}

/// Render a result list with its heading, or the empty state.
pub fn render_results(comments: &[&Comment], query: &str, options: &RenderOptions) -> String {
    let mut heading = format!("Search Results ({})", comments.len());
    if !query.is_empty() {
        heading.push_str(&format!(" for \"{}\"", query));
    }

    if comments.is_empty() {
        return format!("{}\n\n{}", heading, EMPTY_STATE);
    }

    let cards: Vec<String> = comments
        .iter()
        .map(|comment| render_comment(comment, options))
        .collect();
    format!("{}\n\n{}", heading, cards.join("\n\n"))
}

// ===== Statistics =====

/// Render sentiment counts with percentages.
pub fn render_stats(counts: &SentimentCounts, palette: Palette) -> String {
    let mut lines = vec![
        "Sentiment Statistics".to_string(),
        format!("  {:<10}{:>4}", "Total", counts.total()),
    ];
    for sentiment in Sentiment::ALL {
        let label = format!("{:<10}", sentiment.label());
        lines.push(format!(
            "  {}{:>4}  {:>5.1}%",
            palette.paint(sentiment, &label),
            counts.get(sentiment),
            counts.percentage(sentiment)
        ));
    }
    lines.join("\n")
}

// ===== Pickers =====

/// Numbered suggestion list.
pub fn render_suggestions(suggestions: &[&str]) -> String {
    let mut lines = vec!["Try:".to_string()];
    lines.extend(
        suggestions
            .iter()
            .enumerate()
            .map(|(index, text)| format!("  {}. {}", index + 1, text)),
    );
    lines.join("\n")
}

/// Team list, one per line.
pub fn render_teams(teams: &[String]) -> String {
    let mut lines = vec!["Teams:".to_string()];
    lines.extend(teams.iter().map(|team| format!("  {}", team)));
    lines.join("\n")
}

// ===== Text Wrapping =====

/// Greedy word wrap by display width.
///
/// Words wider than `width` sit alone on their line rather than being split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
