//! Football Sentiment Analysis search core (fsa)
//!
//! Filters a corpus of fan comments by text and structured criteria,
//! aggregates sentiment over the matches, and gates results behind an
//! explicit search step.
//!
//! The core (`corpus`, `model`, `state`) is pure and synchronous. Parsing,
//! configuration, logging and text rendering sit around it.

pub mod config;
pub mod corpus;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

// Line-level parsing pipeline shared by file and built-in sources
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
