#![deny(clippy::string_slice)]

pub mod analysis;
pub mod assessment;
pub mod catalog;
pub mod session;
pub mod stats;
pub mod study_plan;
pub mod tutor;
mod utils;

use chrono::Utc;
use lubab_utils::{StudentProgress, StudentSetup, StudyPlanItem, Subject};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;
use wasm_bindgen::prelude::*;

use crate::catalog::{Catalog, EmbeddedCatalog};
use crate::session::{BrowserStorage, SessionStore};

// putting this inside LOGGER prevents us from accidentally initializing the logger more than once
#[allow(clippy::declare_interior_mutable_const)]
const LOGGER: LazyLock<()> = LazyLock::new(|| {
    utils::set_panic_hook();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Logging initialized");
});

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e:?}")))
}

/// The app's session object: the storage repository plus the embedded
/// catalog, created once at startup and torn down with the page. Wraps the
/// plain-Rust core because wasm-bindgen types can't be generic over the
/// storage backend.
#[wasm_bindgen]
pub struct Session {
    store: SessionStore,
    catalog: EmbeddedCatalog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl Session {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        // used to only initialize the logger once
        #[allow(clippy::borrow_interior_mutable_const)]
        *LOGGER;

        Self {
            store: SessionStore::new(Box::new(BrowserStorage)),
            catalog: EmbeddedCatalog::new(),
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn login(&self, email: &str, password: &str) -> Result<JsValue, JsValue> {
        let user = self
            .store
            .login(&self.catalog, email, password)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&user)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn logout(&self) {
        self.store.logout();
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn current_user(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.current_user())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn initialize_progress(&self, student_id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.store.initialize_progress(student_id))
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn progress(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.progress())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn save_student_setup(
        &self,
        name: String,
        grade_id: String,
        subject_ids: Vec<String>,
    ) {
        self.store.save_student_setup(&StudentSetup {
            name,
            grade_id,
            subject_ids,
        });
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn student_setup(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.student_setup())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn grades(&self) -> Result<JsValue, JsValue> {
        to_js(&self.catalog.grades())
    }

    /// All offered subjects, or only the ones picked during onboarding once
    /// a setup record exists.
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn selected_subjects(&self) -> Result<JsValue, JsValue> {
        to_js(&self.chosen_subjects())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn subject(&self, subject_id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.catalog.subject(subject_id))
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn lesson(&self, lesson_id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.catalog.lesson(lesson_id))
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn quiz(&self, quiz_id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.catalog.quiz(quiz_id))
    }

    /// Grades a submission (`answers` is a question-id → option-index map),
    /// folds it into the stored progress, and returns the result.
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn submit_quiz(&self, quiz_id: &str, answers: JsValue) -> Result<JsValue, JsValue> {
        let answers: FxHashMap<String, i32> = serde_wasm_bindgen::from_value(answers)
            .map_err(|e| JsValue::from_str(&format!("Answer parsing error: {e:?}")))?;
        let quiz = self
            .catalog
            .quiz(quiz_id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown quiz: {quiz_id}")))?;

        let result = assessment::grade_quiz(quiz, &answers, Utc::now());
        if let Some(mut progress) = self.store.progress() {
            assessment::record_quiz_result(&mut progress, result.clone());
            self.store.save_progress(&progress);
        }
        to_js(&result)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn complete_lesson(&self, lesson_id: &str) {
        if let Some(mut progress) = self.store.progress() {
            stats::mark_lesson_completed(&mut progress, lesson_id);
            self.store.save_progress(&progress);
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn is_lesson_unlocked(&self, lesson_id: &str) -> bool {
        let Some(subject) = self.catalog.subject_of_lesson(lesson_id) else {
            return false;
        };
        let Some(lesson) = self.catalog.lesson(lesson_id) else {
            return false;
        };
        let progress = self
            .store
            .progress()
            .unwrap_or_else(|| StudentProgress::new(""));
        stats::is_lesson_unlocked(subject, &progress, lesson)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn performance(&self) -> Result<JsValue, JsValue> {
        let results = self
            .store
            .progress()
            .map(|p| p.quizzes_completed)
            .unwrap_or_default();
        to_js(&analysis::analyze_performance(&results))
    }

    /// Regenerates the weekly plan from the incomplete lessons of the chosen
    /// subjects, persists it on the progress record, and returns it.
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn study_plan(&self) -> Result<JsValue, JsValue> {
        let Some(mut progress) = self.store.progress() else {
            return to_js(&Vec::<StudyPlanItem>::new());
        };

        let subjects = self.chosen_subjects();
        let remaining = study_plan::incomplete_lessons(&subjects, &progress);
        let plan = study_plan::generate_study_plan(&progress.weak_points, &remaining, Utc::now());

        progress.study_plan = plan.clone();
        self.store.save_progress(&progress);
        to_js(&plan)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn parent_report(&self) -> Result<JsValue, JsValue> {
        let progress = self.store.progress().unwrap_or_else(|| {
            let student_id = self
                .store
                .effective_student_id()
                .unwrap_or_else(|| "student-1".to_string());
            StudentProgress::new(student_id)
        });
        to_js(&stats::build_parent_report(
            &self.catalog,
            &progress,
            Utc::now(),
        ))
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn explain_lesson(&self, lesson_id: &str) -> Result<String, JsValue> {
        let lesson = self
            .catalog
            .lesson(lesson_id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown lesson: {lesson_id}")))?;
        Ok(tutor::generate_explanation(lesson))
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn ask_tutor(&self, lesson_id: &str, question: &str) -> Result<String, JsValue> {
        let lesson = self
            .catalog
            .lesson(lesson_id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown lesson: {lesson_id}")))?;
        Ok(tutor::answer_question(question, lesson))
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn ai_message(&self, content: String, lesson_id: Option<String>) -> Result<JsValue, JsValue> {
        to_js(&tutor::ai_message(content, lesson_id, Utc::now()))
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
    pub fn user_message(
        &self,
        content: String,
        lesson_id: Option<String>,
    ) -> Result<JsValue, JsValue> {
        to_js(&tutor::user_message(content, lesson_id, Utc::now()))
    }
}

impl Session {
    fn chosen_subjects(&self) -> Vec<&Subject> {
        match self.store.student_setup() {
            Some(setup) => self
                .catalog
                .all_subjects()
                .iter()
                .filter(|s| setup.subject_ids.contains(&s.id) && !s.lessons.is_empty())
                .collect(),
            None => self.catalog.subjects(),
        }
    }
}

/// Cosmetic delay before a tutor reply is shown, 1–2 seconds.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn reply_delay_ms() -> u32 {
    tutor::reply_delay_ms()
}

#[cfg(test)]
mod tests {
    //! End-to-end flow over the plain-Rust core with an in-memory backend:
    //! login, onboarding, quiz submission, and the derived views.

    use super::*;
    use crate::session::MemoryStore;

    fn logged_in_store(catalog: &EmbeddedCatalog) -> SessionStore {
        let store = SessionStore::new(Box::new(MemoryStore::default()));
        store
            .login(catalog, "student@lubab.com", "123456")
            .unwrap();
        store
    }

    #[test]
    fn full_student_flow() {
        let catalog = EmbeddedCatalog::new();
        let store = logged_in_store(&catalog);

        store.save_student_setup(&StudentSetup {
            name: "أحمد".to_string(),
            grade_id: "grade-5".to_string(),
            subject_ids: vec!["math".to_string(), "science".to_string()],
        });
        let mut progress = store.initialize_progress("student-1");

        // pass the first math quiz with 4/5
        let quiz = catalog.quiz("math-quiz-1").unwrap();
        let answers: FxHashMap<String, i32> = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let pick = if i == 0 {
                    (q.correct_answer as i32 + 1) % q.options.len() as i32
                } else {
                    q.correct_answer as i32
                };
                (q.id.clone(), pick)
            })
            .collect();
        let result = assessment::grade_quiz(quiz, &answers, Utc::now());
        assert_eq!(result.score, 80);
        assessment::record_quiz_result(&mut progress, result);
        store.save_progress(&progress);

        // the lesson shows as completed and unlocks the next one
        let progress = store.progress().unwrap();
        assert!(progress.lessons_completed.contains(&"math-lesson-1".to_string()));
        let math = catalog.subject("math").unwrap();
        let second = catalog.lesson("math-lesson-2").unwrap();
        assert!(stats::is_lesson_unlocked(math, &progress, second));

        // the study plan skips the completed lesson; math and science only
        let subjects: Vec<&Subject> = catalog
            .all_subjects()
            .iter()
            .filter(|s| ["math", "science"].contains(&s.id.as_str()))
            .collect();
        let remaining = study_plan::incomplete_lessons(&subjects, &progress);
        let plan = study_plan::generate_study_plan(&progress.weak_points, &remaining, Utc::now());
        assert_eq!(plan.len(), 5);
        assert_eq!(plan[0].lesson_id, "math-lesson-2");
        // one wrong answer recorded a weak point, so the first two days are
        // recommended
        assert!(plan[0].recommended && plan[1].recommended && !plan[2].recommended);

        // the parent sees the same aggregate
        let report = stats::build_parent_report(&catalog, &progress, Utc::now());
        assert_eq!(report.average_score, 80);
        assert!(report.recent_activity.iter().any(|a| a.id == "quiz-math-quiz-1"));
    }
}
