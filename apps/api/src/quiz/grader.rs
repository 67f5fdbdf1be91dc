//! Quiz grading. True/false answers are graded by exact case-insensitive
//! comparison; short answers are delegated to a lenient LLM call, so their
//! grading is non-deterministic and provider-dependent by design.

use reader_core::{GradedQuestion, Language, QuestionKind, QuizQuestion};
use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::quiz::prompts::{GRADE_PROMPT_TEMPLATE, GRADE_SYSTEM};

#[derive(Debug, Deserialize)]
pub struct ShortAnswerVerdict {
    pub correct: bool,
    pub feedback: Option<String>,
}

/// Case-insensitive, trimmed comparison for true/false answers.
pub fn grade_true_false(correct_answer: &str, user_answer: &str) -> bool {
    correct_answer.trim().to_lowercase() == user_answer.trim().to_lowercase()
}

/// Grades one short answer through the LLM.
pub async fn grade_short_answer(
    llm: &LlmClient,
    question: &str,
    expected: &str,
    answer: &str,
) -> Result<ShortAnswerVerdict, AppError> {
    let prompt = GRADE_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{expected}", expected)
        .replace("{answer}", answer);

    llm.chat_json::<ShortAnswerVerdict>(GRADE_SYSTEM, &prompt, 0.3, 150)
        .await
        .map_err(|e| AppError::Llm(format!("Short-answer grading failed: {e}")))
}

/// Grades a full submission, returning the score and per-question results.
/// `language` only decorates the LLM conversation context today, but stays
/// in the signature because it is part of the wire contract.
pub async fn grade_quiz(
    llm: &LlmClient,
    questions: &[QuizQuestion],
    answers: &[String],
    _language: Language,
) -> Result<(u32, Vec<GradedQuestion>), AppError> {
    if questions.len() != answers.len() {
        return Err(AppError::Validation(
            "Each question needs exactly one answer".to_string(),
        ));
    }

    let mut score = 0;
    let mut results = Vec::with_capacity(questions.len());

    for (question, answer) in questions.iter().zip(answers) {
        let graded = match &question.kind {
            QuestionKind::TrueFalse { correct_answer } => {
                let correct = grade_true_false(correct_answer, answer);
                GradedQuestion {
                    correct,
                    user_answer: answer.clone(),
                    feedback: None,
                }
            }
            QuestionKind::ShortAnswer { correct_answer } => {
                let verdict =
                    grade_short_answer(llm, &question.question, correct_answer, answer).await?;
                GradedQuestion {
                    correct: verdict.correct,
                    user_answer: answer.clone(),
                    feedback: verdict.feedback,
                }
            }
        };
        if graded.correct {
            score += 1;
        }
        results.push(graded);
    }

    Ok((score, results))
}
