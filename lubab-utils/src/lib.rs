pub mod report;

use chrono::{DateTime, Utc};

/// Index recorded for a question the student left blank.
pub const UNANSWERED: i32 = -1;

#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum UserRole {
    Student,
    Parent,
}

/// A demo account. Credentials are plaintext on purpose: the account list is
/// a fixed in-memory catalog, not a real user database.
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
    /// Links a parent account to the student it supervises.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct Grade {
    pub id: String,
    pub name: String,
    pub level: u32,
    /// Gates whether the grade can be picked during onboarding.
    pub available: bool,
}

#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A subject owns its lessons outright; everything else references lessons
/// by id.
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub grade_id: String,
    pub lessons: Vec<Lesson>,
}

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub subject_id: String,
    pub order: u32,
    pub difficulty: Difficulty,
    pub quiz_id: String,
}

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub lesson_id: String,
    pub questions: Vec<Question>,
    /// Minutes. The UI treats absence as "untimed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// Must be a valid index into `options`.
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    /// Index into the question's options, or [`UNANSWERED`].
    pub selected_answer: i32,
    pub is_correct: bool,
}

/// One graded attempt. Append-only: results are never edited after the fact,
/// so `correctAnswers + wrongAnswers == totalQuestions` holds for the
/// lifetime of the record.
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: String,
    pub lesson_id: String,
    /// 0–100, rounded half up.
    pub score: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub answers: Vec<AnswerRecord>,
    pub completed_at: DateTime<Utc>,
    /// Texts of the questions answered incorrectly in this attempt.
    /// Deduplicated only when merged into [`StudentProgress::weak_points`].
    pub weak_points: Vec<String>,
}

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct SubjectProgress {
    pub subject_id: String,
    pub lessons_completed: u32,
    pub total_lessons: u32,
    pub average_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,
}

#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
    parse_display::Display,
    parse_display::FromStr,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
#[display(style = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One day's suggested lesson visit in the weekly study plan.
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanItem {
    pub id: String,
    pub date: DateTime<Utc>,
    pub lesson_id: String,
    pub subject_id: String,
    pub completed: bool,
    pub priority: Priority,
    pub recommended: bool,
}

/// The durable per-student aggregate: the single mutable source of truth for
/// every derived view (dashboard stats, parent report, study plan).
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgress {
    pub student_id: String,
    /// Set semantics: a lesson id appears at most once.
    pub lessons_completed: Vec<String>,
    /// Append-only attempt log.
    pub quizzes_completed: Vec<QuizResult>,
    pub subjects_progress: Vec<SubjectProgress>,
    pub study_plan: Vec<StudyPlanItem>,
    /// Set semantics, unioned from attempt weak points.
    pub weak_points: Vec<String>,
    pub strengths: Vec<String>,
}

impl StudentProgress {
    /// A zeroed record for a student who has not done anything yet.
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            lessons_completed: Vec::new(),
            quizzes_completed: Vec::new(),
            subjects_progress: Vec::new(),
            study_plan: Vec::new(),
            weak_points: Vec::new(),
            strengths: Vec::new(),
        }
    }
}

/// Onboarding choices, written once at the end of setup.
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct StudentSetup {
    pub name: String,
    pub grade_id: String,
    pub subject_ids: Vec<String>,
}

#[derive(
    Clone,
    Copy,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Ai,
    User,
}

#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
}

/// Derived view over recent quiz scores. Recomputed on every read, never
/// persisted.
#[derive(
    Clone,
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    Eq,
    PartialEq,
    tsify::Tsify,
    schemars::JsonSchema,
)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAnalysis {
    pub weak_points: Vec<String>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}
