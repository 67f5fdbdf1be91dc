//! Reading-comprehension quiz flow:
//! `Idle → Generating → Ready → Grading → Results`, with an explicit retake
//! policy instead of the ad-hoc reuse-vs-regenerate behavior the flow grew
//! out of.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A quiz question as it appears on the wire:
/// `{"question": "...", "type": "true-false", "correctAnswer": "true"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    #[serde(rename = "true-false")]
    TrueFalse {
        #[serde(rename = "correctAnswer")]
        correct_answer: String,
    },
    #[serde(rename = "short-answer")]
    ShortAnswer {
        #[serde(rename = "correctAnswer")]
        correct_answer: String,
    },
}

/// The student's in-progress answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerSlot {
    /// Exactly one of the two toggle options, once selected.
    TrueFalse(Option<bool>),
    ShortAnswer(String),
}

impl AnswerSlot {
    fn for_question(question: &QuizQuestion) -> AnswerSlot {
        match question.kind {
            QuestionKind::TrueFalse { .. } => AnswerSlot::TrueFalse(None),
            QuestionKind::ShortAnswer { .. } => AnswerSlot::ShortAnswer(String::new()),
        }
    }

    /// The wire form submitted for grading. `None` while unanswered.
    fn wire_value(&self) -> Option<String> {
        match self {
            AnswerSlot::TrueFalse(Some(v)) => Some(v.to_string()),
            AnswerSlot::TrueFalse(None) => None,
            AnswerSlot::ShortAnswer(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

/// Per-question grading result from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedQuestion {
    pub correct: bool,
    pub user_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeOutcome {
    pub score: u32,
    pub total: u32,
    pub results: Vec<GradedQuestion>,
    /// New cumulative point total; absent when grading unauthenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i64>,
}

/// Banner shown with the results, picked by score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBanner {
    Perfect,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl ScoreBanner {
    pub fn for_score(score: u32, total: u32) -> ScoreBanner {
        if total > 0 && score == total {
            return ScoreBanner::Perfect;
        }
        let percent = if total == 0 { 0 } else { score * 100 / total };
        if percent >= 66 {
            ScoreBanner::GreatJob
        } else if percent >= 33 {
            ScoreBanner::GoodEffort
        } else {
            ScoreBanner::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBanner::Perfect => "Perfect score! Outstanding work!",
            ScoreBanner::GreatJob => "Great job! You really understood the story.",
            ScoreBanner::GoodEffort => "Good effort! Read the story once more and try again.",
            ScoreBanner::KeepPracticing => "Keep practicing! It gets easier every time.",
        }
    }
}

/// What pressing "retake" does once results are showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetakePolicy {
    /// Discard the quiz and request a fresh one.
    #[default]
    Regenerate,
    /// Keep the generated questions, clear the answers.
    ReuseQuestions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetakeCommand {
    RequestNewQuiz,
    Reopened,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    Idle,
    Generating,
    Ready,
    Grading,
    Results,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Please answer question {} before submitting.", .index + 1)]
    Unanswered { index: usize },
    #[error("The quiz is not ready to submit.")]
    NotReady,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizFlow {
    phase: QuizPhase,
    questions: Vec<QuizQuestion>,
    answers: Vec<AnswerSlot>,
    outcome: Option<GradeOutcome>,
    retake_policy: RetakePolicy,
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new(RetakePolicy::default())
    }
}

impl QuizFlow {
    pub fn new(retake_policy: RetakePolicy) -> Self {
        Self {
            phase: QuizPhase::Idle,
            questions: Vec::new(),
            answers: Vec::new(),
            outcome: None,
            retake_policy,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerSlot] {
        &self.answers
    }

    pub fn outcome(&self) -> Option<&GradeOutcome> {
        self.outcome.as_ref()
    }

    /// Whether "show quiz" needs a generation request, or can reopen the
    /// quiz that is already loaded.
    pub fn request(&mut self) -> bool {
        match self.phase {
            QuizPhase::Idle => {
                self.phase = QuizPhase::Generating;
                true
            }
            _ => false,
        }
    }

    pub fn questions_ready(&mut self, questions: Vec<QuizQuestion>) {
        self.answers = questions.iter().map(AnswerSlot::for_question).collect();
        self.questions = questions;
        self.outcome = None;
        self.phase = QuizPhase::Ready;
    }

    pub fn generation_failed(&mut self) {
        if self.phase == QuizPhase::Generating {
            self.phase = QuizPhase::Idle;
        }
    }

    pub fn select_true_false(&mut self, index: usize, value: bool) {
        if self.phase != QuizPhase::Ready {
            return;
        }
        if let Some(slot @ AnswerSlot::TrueFalse(_)) = self.answers.get_mut(index) {
            *slot = AnswerSlot::TrueFalse(Some(value));
        }
    }

    pub fn edit_short_answer(&mut self, index: usize, text: String) {
        if self.phase != QuizPhase::Ready {
            return;
        }
        if let Some(slot @ AnswerSlot::ShortAnswer(_)) = self.answers.get_mut(index) {
            *slot = AnswerSlot::ShortAnswer(text);
        }
    }

    /// Validates completeness and moves to `Grading`, returning the answer
    /// strings to submit. On the first unanswered question the state is
    /// left untouched and no request may be sent.
    pub fn submit(&mut self) -> Result<Vec<String>, QuizError> {
        if self.phase != QuizPhase::Ready {
            return Err(QuizError::NotReady);
        }
        let mut wire = Vec::with_capacity(self.answers.len());
        for (index, slot) in self.answers.iter().enumerate() {
            match slot.wire_value() {
                Some(value) => wire.push(value),
                None => return Err(QuizError::Unanswered { index }),
            }
        }
        self.phase = QuizPhase::Grading;
        Ok(wire)
    }

    pub fn graded(&mut self, outcome: GradeOutcome) {
        self.outcome = Some(outcome);
        self.phase = QuizPhase::Results;
    }

    pub fn grading_failed(&mut self) {
        if self.phase == QuizPhase::Grading {
            self.phase = QuizPhase::Ready;
        }
    }

    pub fn banner(&self) -> Option<ScoreBanner> {
        self.outcome
            .as_ref()
            .map(|o| ScoreBanner::for_score(o.score, o.total))
    }

    /// Applies the retake policy from the results screen.
    pub fn retake(&mut self) -> Option<RetakeCommand> {
        if self.phase != QuizPhase::Results {
            return None;
        }
        match self.retake_policy {
            RetakePolicy::Regenerate => {
                self.questions.clear();
                self.answers.clear();
                self.outcome = None;
                self.phase = QuizPhase::Generating;
                Some(RetakeCommand::RequestNewQuiz)
            }
            RetakePolicy::ReuseQuestions => {
                self.answers = self.questions.iter().map(AnswerSlot::for_question).collect();
                self.outcome = None;
                self.phase = QuizPhase::Ready;
                Some(RetakeCommand::Reopened)
            }
        }
    }

    /// Full reset when a new story replaces the current one.
    pub fn reset(&mut self) {
        let policy = self.retake_policy;
        *self = QuizFlow::new(policy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn true_false(question: &str, answer: bool) -> QuizQuestion {
        QuizQuestion {
            question: question.to_string(),
            kind: QuestionKind::TrueFalse {
                correct_answer: answer.to_string(),
            },
        }
    }

    fn short_answer(question: &str, answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: question.to_string(),
            kind: QuestionKind::ShortAnswer {
                correct_answer: answer.to_string(),
            },
        }
    }

    fn ready_flow() -> QuizFlow {
        let mut flow = QuizFlow::default();
        flow.request();
        flow.questions_ready(vec![
            true_false("The cat is black.", true),
            true_false("The story happens at sea.", false),
            short_answer("Where does Ana live?", "in a small village"),
        ]);
        flow
    }

    #[test]
    fn question_wire_format_round_trips() {
        let q = true_false("¿Es verdad?", true);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "true-false");
        assert_eq!(json["correctAnswer"], "true");
        let back: QuizQuestion = serde_json::from_value(json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn submit_rejects_first_unanswered_question_without_state_change() {
        let mut flow = ready_flow();
        flow.select_true_false(0, true);
        // Question 2 untouched, question 3 whitespace only.
        flow.edit_short_answer(2, "   ".to_string());
        assert_eq!(flow.submit(), Err(QuizError::Unanswered { index: 1 }));
        assert_eq!(flow.phase(), QuizPhase::Ready);
    }

    #[test]
    fn submit_with_all_answers_moves_to_grading() {
        let mut flow = ready_flow();
        flow.select_true_false(0, true);
        flow.select_true_false(1, false);
        flow.edit_short_answer(2, "  in a village  ".to_string());
        let wire = flow.submit().unwrap();
        assert_eq!(wire, ["true", "false", "in a village"]);
        assert_eq!(flow.phase(), QuizPhase::Grading);
    }

    #[test]
    fn true_false_reselection_replaces_previous_choice() {
        let mut flow = ready_flow();
        flow.select_true_false(0, true);
        flow.select_true_false(0, false);
        assert_eq!(flow.answers()[0], AnswerSlot::TrueFalse(Some(false)));
    }

    #[test]
    fn banner_thresholds() {
        assert_eq!(ScoreBanner::for_score(3, 3), ScoreBanner::Perfect);
        assert_eq!(ScoreBanner::for_score(2, 3), ScoreBanner::GreatJob);
        assert_eq!(ScoreBanner::for_score(1, 3), ScoreBanner::GoodEffort);
        assert_eq!(ScoreBanner::for_score(0, 3), ScoreBanner::KeepPracticing);
    }

    #[test]
    fn banner_messages_match_thresholds() {
        assert!(ScoreBanner::for_score(3, 3).message().contains("Perfect"));
        assert!(ScoreBanner::for_score(2, 3).message().contains("Great job"));
        assert!(ScoreBanner::for_score(1, 3).message().contains("Good effort"));
        assert!(ScoreBanner::for_score(0, 3)
            .message()
            .contains("Keep practicing"));
    }

    #[test]
    fn retake_regenerate_discards_questions() {
        let mut flow = ready_flow();
        flow.select_true_false(0, true);
        flow.select_true_false(1, false);
        flow.edit_short_answer(2, "village".to_string());
        flow.submit().unwrap();
        flow.graded(GradeOutcome {
            score: 2,
            total: 3,
            results: vec![],
            total_points: None,
        });
        assert_eq!(flow.retake(), Some(RetakeCommand::RequestNewQuiz));
        assert_eq!(flow.phase(), QuizPhase::Generating);
        assert!(flow.questions().is_empty());
    }

    #[test]
    fn retake_reuse_keeps_questions_and_clears_answers() {
        let mut flow = QuizFlow::new(RetakePolicy::ReuseQuestions);
        flow.request();
        flow.questions_ready(vec![true_false("q", true), short_answer("r", "a")]);
        flow.select_true_false(0, true);
        flow.edit_short_answer(1, "answer".to_string());
        flow.submit().unwrap();
        flow.graded(GradeOutcome {
            score: 2,
            total: 2,
            results: vec![],
            total_points: None,
        });
        assert_eq!(flow.retake(), Some(RetakeCommand::Reopened));
        assert_eq!(flow.phase(), QuizPhase::Ready);
        assert_eq!(flow.questions().len(), 2);
        assert_eq!(flow.answers()[0], AnswerSlot::TrueFalse(None));
        assert_eq!(flow.answers()[1], AnswerSlot::ShortAnswer(String::new()));
    }

    #[test]
    fn show_quiz_reopens_without_regenerating_once_loaded() {
        let mut flow = ready_flow();
        assert!(!flow.request());
        assert_eq!(flow.phase(), QuizPhase::Ready);
    }

    #[test]
    fn grading_failure_returns_to_ready() {
        let mut flow = ready_flow();
        flow.select_true_false(0, true);
        flow.select_true_false(1, true);
        flow.edit_short_answer(2, "x".to_string());
        flow.submit().unwrap();
        flow.grading_failed();
        assert_eq!(flow.phase(), QuizPhase::Ready);
    }
}
