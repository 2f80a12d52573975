//! Tests for plain-text rendering.

use super::*;
use crate::corpus::Corpus;
use crate::model::{CommentId, Timestamp};

fn seed_comment(corpus: &Corpus, id: &str) -> Comment {
    corpus
        .find(&CommentId::new(id).expect("valid id"))
        .cloned()
        .expect("seed comment exists")
}

// ===== Comment Cards =====

#[test]
fn comment_card_wraps_content_to_width() {
    let corpus = Corpus::seed();
    let comment = seed_comment(&corpus, "5");
    let options = RenderOptions {
        width: 40,
        ..RenderOptions::default()
    };

    insta::assert_snapshot!(render_comment(&comment, &options), @r"
    [Negative 92%] Robert Brown | Real Madrid
    2026-02-18 14:10 | Twitter
      The referee made a completely wrong
      penalty call! This is a terrible
      decision that affected the match
      result.
      keywords: referee, penalty, wrong
    ");
}

#[test]
fn comment_card_omits_missing_team_source_and_keywords() {
    let comment = Comment::new(
        CommentId::new("x").expect("valid id"),
        "Anon",
        "Short note",
        Sentiment::Neutral,
        Timestamp::parse("2026-03-01 09:00").expect("valid timestamp"),
    )
    .expect("valid comment");

    let output = render_comment(&comment, &RenderOptions::default());

    assert_eq!(output, "[Neutral 0%] Anon\n2026-03-01 09:00\n  Short note");
}

#[test]
fn comment_card_colors_badge_only() {
    let corpus = Corpus::seed();
    let comment = seed_comment(&corpus, "12");
    let options = RenderOptions {
        width: 80,
        palette: Palette::new(ColorConfig::new(false, None), false),
    };

    let output = render_comment(&comment, &options);

    assert!(output.starts_with("\x1b[90m[Neutral 75%]\x1b[0m Rachel Garcia | PSG"));
}

// ===== Result Lists =====

#[test]
fn empty_results_render_neutral_empty_state() {
    let output = render_results(&[], "Liverpool defense", &RenderOptions::default());

    assert_eq!(
        output,
        "Search Results (0) for \"Liverpool defense\"\n\nNo comments match the current filters."
    );
    assert!(!output.to_lowercase().contains("fail"));
    assert!(!output.to_lowercase().contains("error"));
}

#[test]
fn results_separate_cards_with_blank_line() {
    let corpus = Corpus::seed();
    let a = seed_comment(&corpus, "5");
    let b = seed_comment(&corpus, "12");

    let output = render_results(&[&a, &b], "", &RenderOptions::default());

    assert!(output.starts_with("Search Results (2)\n\n[Negative 92%]"));
    assert!(output.contains("wrong\n\n[Neutral 75%] Rachel Garcia"));
}

// ===== Statistics =====

#[test]
fn stats_for_balanced_counts() {
    let counts = SentimentCounts {
        positive: 4,
        negative: 4,
        neutral: 4,
    };

    insta::assert_snapshot!(render_stats(&counts, Palette::plain()), @r"
    Sentiment Statistics
      Total       12
      Positive     4   33.3%
      Negative     4   33.3%
      Neutral      4   33.3%
    ");
}

#[test]
fn stats_for_no_comments_show_zero_percent() {
    let output = render_stats(&SentimentCounts::default(), Palette::plain());

    assert!(output.contains("  Total        0"));
    assert!(output.contains("  Positive     0    0.0%"));
}

// ===== Pickers =====

#[test]
fn suggestions_are_numbered_from_one() {
    let output = render_suggestions(&["Ronaldo performance", "Liverpool defense"]);

    assert_eq!(
        output,
        "Try:\n  1. Ronaldo performance\n  2. Liverpool defense"
    );
}

#[test]
fn teams_are_listed_one_per_line() {
    let teams = vec!["Arsenal".to_string(), "Chelsea".to_string()];

    assert_eq!(render_teams(&teams), "Teams:\n  Arsenal\n  Chelsea");
}

// ===== Wrapping =====

#[test]
fn wrap_keeps_short_text_on_one_line() {
    assert_eq!(wrap_text("a b c", 10), vec!["a b c"]);
}

#[test]
fn wrap_breaks_at_word_boundaries() {
    assert_eq!(wrap_text("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
}

#[test]
fn wrap_does_not_split_long_words() {
    assert_eq!(wrap_text("tiny enormousword", 5), vec!["tiny", "enormousword"]);
}

#[test]
fn wrap_collapses_whitespace_and_handles_empty() {
    assert_eq!(wrap_text("  a   b  ", 10), vec!["a b"]);
    assert!(wrap_text("   ", 10).is_empty());
}

#[test]
fn wrap_measures_display_width() {
    // Each CJK character is two columns wide.
    assert_eq!(wrap_text("球迷 球迷", 4), vec!["球迷", "球迷"]);
}

// ===== Screen =====

#[test]
fn idle_screen_lists_suggestions() {
    let mut session = SearchSession::new(Corpus::seed());

    let screen = render_screen(&mut session, PanelVisibility::new(), &RenderOptions::default());

    assert!(screen.starts_with("Try:\n  1. Ronaldo performance\n"));
    assert!(screen.ends_with("  5. Premier League"));
}

#[test]
fn searched_screen_appends_stats_when_panel_open() {
    let mut session = SearchSession::new(Corpus::seed());
    session.set_criteria_field(crate::model::CriteriaField::Query, "referee");
    session.execute_search();
    let mut panels = PanelVisibility::new();
    panels.toggle_stats();

    let screen = render_screen(&mut session, panels, &RenderOptions::default());

    assert!(screen.starts_with("Search Results (2) for \"referee\"\n\n"));
    assert!(screen.contains("\n\nSentiment Statistics\n  Total        2"));
    assert!(!screen.contains("Try:"));
}

#[test]
fn searched_screen_hides_stats_by_default() {
    let mut session = SearchSession::new(Corpus::seed());
    session.execute_search();

    let screen = render_screen(&mut session, PanelVisibility::new(), &RenderOptions::default());

    assert!(screen.starts_with("Search Results (12)\n\n"));
    assert!(!screen.contains("Sentiment Statistics"));
}
