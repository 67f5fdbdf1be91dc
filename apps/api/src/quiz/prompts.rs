//! LLM prompt constants for quiz generation and short-answer grading.

/// System prompt for quiz generation — enforces JSON-only output.
pub const QUIZ_SYSTEM: &str = "You are a language teacher writing reading-comprehension \
    questions about a story. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Quiz generation prompt. Replace `{language}` and `{story}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Read this {language} story and write a short
comprehension quiz about it in English.

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {"question": "The story takes place in a school.", "type": "true-false", "correctAnswer": "true"},
    {"question": "The main character stays home all day.", "type": "true-false", "correctAnswer": "false"},
    {"question": "What did the main character find?", "type": "short-answer", "correctAnswer": "a lost dog"}
  ]
}

Rules:
- EXACTLY 2 "true-false" questions followed by 1 "short-answer" question
- For "true-false", correctAnswer is the string "true" or "false"
- For "short-answer", correctAnswer is a brief model answer in English
- Questions must be answerable from the story alone

STORY:
{story}"#;

/// System prompt for short-answer grading — lenient by design.
pub const GRADE_SYSTEM: &str = "You are a kind language teacher grading a student's answer. \
    Be lenient: accept minor spelling mistakes, synonyms, and partial answers that show \
    the student understood the story. \
    You MUST respond with valid JSON only. \
    Do NOT use markdown code fences.";

/// Short-answer grading prompt. Replace `{question}`, `{expected}`,
/// `{answer}` before sending.
pub const GRADE_PROMPT_TEMPLATE: &str = r#"Question: {question}
Expected answer: {expected}
Student's answer: {answer}

Decide whether the student's answer should be accepted. Return a JSON object:
{"correct": true, "feedback": "One short, encouraging sentence for the student."}"#;
