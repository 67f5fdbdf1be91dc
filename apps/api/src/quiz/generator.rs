//! Quiz generation: one structured LLM call per story.

use reader_core::{Language, QuestionKind, QuizQuestion};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::quiz::prompts::{QUIZ_PROMPT_TEMPLATE, QUIZ_SYSTEM};

#[derive(Debug, Deserialize)]
pub struct QuizPayload {
    pub questions: Vec<QuizQuestion>,
}

/// Asks the model for 2 true/false + 1 short-answer question about `story`.
/// Malformed JSON from the model surfaces as a generic LLM error (500).
pub async fn generate_quiz(
    llm: &LlmClient,
    story: &str,
    language: Language,
) -> Result<Vec<QuizQuestion>, AppError> {
    let prompt = QUIZ_PROMPT_TEMPLATE
        .replace("{language}", language.display_name())
        .replace("{story}", story);

    let payload = llm
        .chat_json::<QuizPayload>(QUIZ_SYSTEM, &prompt, 0.7, 600)
        .await
        .map_err(|e| AppError::Llm(format!("Quiz generation failed: {e}")))?;

    if payload.questions.is_empty() {
        return Err(AppError::Llm(
            "Quiz generation returned no questions".to_string(),
        ));
    }
    if !has_expected_shape(&payload.questions) {
        // Tolerated: the quiz is still gradeable, the model just ignored
        // the 2+1 layout.
        warn!(
            "Quiz payload deviates from the 2 true-false + 1 short-answer contract ({} questions)",
            payload.questions.len()
        );
    }

    Ok(payload.questions)
}

/// True when the payload matches the contract the prompt demands.
pub fn has_expected_shape(questions: &[QuizQuestion]) -> bool {
    questions.len() == 3
        && questions[..2]
            .iter()
            .all(|q| matches!(q.kind, QuestionKind::TrueFalse { .. }))
        && matches!(questions[2].kind, QuestionKind::ShortAnswer { .. })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_the_demanded_wire_shape() {
        let raw = r#"{
            "questions": [
                {"question": "The cat sleeps.", "type": "true-false", "correctAnswer": "true"},
                {"question": "It rains.", "type": "true-false", "correctAnswer": "false"},
                {"question": "Who helps Ana?", "type": "short-answer", "correctAnswer": "her brother"}
            ]
        }"#;
        let payload: QuizPayload = serde_json::from_str(raw).unwrap();
        assert!(has_expected_shape(&payload.questions));
        assert_eq!(payload.questions[0].question, "The cat sleeps.");
        match &payload.questions[2].kind {
            QuestionKind::ShortAnswer { correct_answer } => {
                assert_eq!(correct_answer, "her brother");
            }
            other => panic!("expected short-answer, got {other:?}"),
        }
    }

    #[test]
    fn unknown_question_type_fails_to_parse() {
        let raw = r#"{
            "questions": [
                {"question": "Pick one.", "type": "multiple-choice", "correctAnswer": "a"}
            ]
        }"#;
        assert!(serde_json::from_str::<QuizPayload>(raw).is_err());
    }
}
