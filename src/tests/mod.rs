//! Internal test modules - whitebox tests with crate access
//!
//! Harness-driven acceptance tests exercising whole search flows from user
//! interaction to rendered screen.
