//! Story generation, single-word translation, and text-to-speech.

pub mod generator;
pub mod handlers;
pub mod prompts;
