//! Client-side core of the Lingua Reader: the screen/interaction state
//! machine, tokenizer, translation cache, playback toggle, and quiz flow.
//!
//! This crate performs no I/O. State transitions are pure: the host feeds
//! [`session::Event`]s in and executes the [`session::Command`]s that come
//! back (network fetches, audio control, tooltip display), then reports the
//! outcomes as further events. The whole session state is serializable.

pub mod language;
pub mod playback;
pub mod quiz_flow;
pub mod session;
pub mod tokenizer;
pub mod translation_cache;

pub use language::{clean_word, Language};
pub use playback::{Playback, PlaybackCommand, PlaybackState};
pub use quiz_flow::{
    AnswerSlot, GradeOutcome, GradedQuestion, QuestionKind, QuizFlow, QuizPhase, QuizQuestion,
    RetakeCommand, RetakePolicy, ScoreBanner,
};
pub use session::{Command, Event, ReaderSession, Screen};
pub use tokenizer::{tokenize, Token};
pub use translation_cache::{CacheLookup, TranslationCache};
