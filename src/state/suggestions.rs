//! Example queries offered before the first search.

/// Fixed suggestion list, in display order.
pub const SUGGESTIONS: [&str; 5] = [
    "Ronaldo performance",
    "Liverpool defense",
    "Champions League",
    "transfer news",
    "Premier League",
];

/// All suggestions in display order.
pub fn suggestions() -> &'static [&'static str] {
    &SUGGESTIONS
}

/// Suggestion at a 1-based position, as shown to the user.
pub fn suggestion(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|index| SUGGESTIONS.get(index).copied())
}
