//! Mad Libs: a themed story game for the terminal.
//!
//! Loads a catalog of story templates containing `___` blanks, prompts the
//! player for a word per blank, then prints the filled-in story wrapped to a
//! fixed width with every player word highlighted.

pub mod config;
pub mod core;
pub mod schema;
