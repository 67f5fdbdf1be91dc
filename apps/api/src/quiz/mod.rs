//! Reading-comprehension quiz generation and grading.

pub mod generator;
pub mod grader;
pub mod handlers;
pub mod prompts;

/// Points awarded per correctly answered question for signed-in users.
pub const POINTS_PER_CORRECT: i64 = 10;
