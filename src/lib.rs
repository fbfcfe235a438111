//! Agreement Engine — grammatical agreement resolution for games.
//!
//! Picks the correctly inflected surface form of a word given a lexical
//! root and the active grammatical context (tense, case, person, number,
//! gender), with scoped overrides so a nested production can narrate in
//! a different tense without leaking the change to sibling calls.

pub mod core;
pub mod schema;
