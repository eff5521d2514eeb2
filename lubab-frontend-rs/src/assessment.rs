//! Grades a quiz attempt and folds the result into the progress record.

use chrono::{DateTime, Utc};
use lubab_utils::{AnswerRecord, Quiz, QuizResult, StudentProgress, UNANSWERED};
use rustc_hash::FxHashMap;

/// Minimum score that marks the lesson as completed.
pub const PASS_THRESHOLD: u32 = 60;

/// Scores a submission against the quiz's answer key. `answers` maps question
/// id to the selected option index; questions missing from the map are
/// recorded as [`UNANSWERED`] and scored incorrect.
pub fn grade_quiz(
    quiz: &Quiz,
    answers: &FxHashMap<String, i32>,
    completed_at: DateTime<Utc>,
) -> QuizResult {
    let records: Vec<AnswerRecord> = quiz
        .questions
        .iter()
        .map(|q| {
            let selected_answer = answers.get(&q.id).copied().unwrap_or(UNANSWERED);
            let is_correct = selected_answer == q.correct_answer as i32;
            AnswerRecord {
                question_id: q.id.clone(),
                selected_answer,
                is_correct,
            }
        })
        .collect();

    let total_questions = quiz.questions.len() as u32;
    let correct_answers = records.iter().filter(|r| r.is_correct).count() as u32;
    let wrong_answers = total_questions - correct_answers;

    let score = if total_questions == 0 {
        0
    } else {
        (f64::from(correct_answers) / f64::from(total_questions) * 100.0).round() as u32
    };

    // The text of each missed question doubles as its weak-point label.
    let weak_points = quiz
        .questions
        .iter()
        .zip(&records)
        .filter(|(_, r)| !r.is_correct)
        .map(|(q, _)| q.text.clone())
        .collect();

    QuizResult {
        quiz_id: quiz.id.clone(),
        lesson_id: quiz.lesson_id.clone(),
        score,
        total_questions,
        correct_answers,
        wrong_answers,
        answers: records,
        completed_at,
        weak_points,
    }
}

/// Appends the result to the attempt log, unions its weak points into the
/// progress set, and marks the lesson completed when the score passes.
/// Resubmitting never duplicates a `lessons_completed` entry.
pub fn record_quiz_result(progress: &mut StudentProgress, result: QuizResult) {
    for weak_point in &result.weak_points {
        if !progress.weak_points.contains(weak_point) {
            progress.weak_points.push(weak_point.clone());
        }
    }

    if result.score >= PASS_THRESHOLD && !progress.lessons_completed.contains(&result.lesson_id) {
        progress.lessons_completed.push(result.lesson_id.clone());
    }

    progress.quizzes_completed.push(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lubab_utils::Question;

    fn quiz(num_questions: usize) -> Quiz {
        Quiz {
            id: "quiz-1".to_string(),
            lesson_id: "lesson-1".to_string(),
            time_limit: None,
            questions: (0..num_questions)
                .map(|i| Question {
                    id: format!("q{i}"),
                    text: format!("السؤال رقم {i}"),
                    options: vec!["أ".into(), "ب".into(), "ج".into(), "د".into()],
                    correct_answer: 0,
                    explanation: None,
                })
                .collect(),
        }
    }

    fn answers(pairs: &[(&str, i32)]) -> FxHashMap<String, i32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn three_of_five_scores_sixty_and_completes_the_lesson() {
        let quiz = quiz(5);
        let submitted = answers(&[("q0", 0), ("q1", 0), ("q2", 0), ("q3", 1), ("q4", 1)]);

        let result = grade_quiz(&quiz, &submitted, Utc::now());
        assert_eq!(result.score, 60);
        assert_eq!(result.correct_answers, 3);
        assert_eq!(result.wrong_answers, 2);

        let mut progress = StudentProgress::new("student-1");
        record_quiz_result(&mut progress, result);
        assert_eq!(progress.lessons_completed, vec!["lesson-1".to_string()]);
    }

    #[test]
    fn two_of_five_fails_and_collects_weak_points() {
        let quiz = quiz(5);
        let submitted = answers(&[("q0", 0), ("q1", 0), ("q2", 3), ("q3", 3), ("q4", 3)]);

        let result = grade_quiz(&quiz, &submitted, Utc::now());
        assert_eq!(result.score, 40);
        assert_eq!(
            result.weak_points,
            vec!["السؤال رقم 2", "السؤال رقم 3", "السؤال رقم 4"]
        );

        let mut progress = StudentProgress::new("student-1");
        record_quiz_result(&mut progress, result);
        assert!(progress.lessons_completed.is_empty());
        assert_eq!(progress.weak_points.len(), 3);
    }

    #[test]
    fn unanswered_questions_score_incorrect_with_sentinel_index() {
        let quiz = quiz(4);
        let submitted = answers(&[("q0", 0)]);

        let result = grade_quiz(&quiz, &submitted, Utc::now());
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.answers[1].selected_answer, UNANSWERED);
        assert!(!result.answers[1].is_correct);
    }

    #[test]
    fn counts_always_balance_and_score_rounds_half_up() {
        for num_questions in 1..=7 {
            let quiz = quiz(num_questions);
            for correct in 0..=num_questions {
                let submitted: FxHashMap<String, i32> = (0..num_questions)
                    .map(|i| (format!("q{i}"), if i < correct { 0 } else { 1 }))
                    .collect();
                let result = grade_quiz(&quiz, &submitted, Utc::now());
                assert_eq!(
                    result.correct_answers + result.wrong_answers,
                    result.total_questions
                );
                let expected =
                    (correct as f64 / num_questions as f64 * 100.0).round() as u32;
                assert_eq!(result.score, expected);
            }
        }
        // 1/3 rounds down, 2/3 rounds up
        let quiz3 = quiz(3);
        let one = grade_quiz(&quiz3, &answers(&[("q0", 0)]), Utc::now());
        assert_eq!(one.score, 33);
        let two = grade_quiz(&quiz3, &answers(&[("q0", 0), ("q1", 0)]), Utc::now());
        assert_eq!(two.score, 67);
    }

    #[test]
    fn perfect_resubmission_does_not_duplicate_completion() {
        let quiz = quiz(5);
        let perfect = answers(&[("q0", 0), ("q1", 0), ("q2", 0), ("q3", 0), ("q4", 0)]);

        let mut progress = StudentProgress::new("student-1");
        record_quiz_result(&mut progress, grade_quiz(&quiz, &perfect, Utc::now()));
        record_quiz_result(&mut progress, grade_quiz(&quiz, &perfect, Utc::now()));

        assert_eq!(progress.lessons_completed, vec!["lesson-1".to_string()]);
        assert_eq!(progress.quizzes_completed.len(), 2);
    }

    #[test]
    fn repeated_misses_union_into_one_weak_point() {
        let quiz = quiz(2);
        let wrong = answers(&[("q0", 1), ("q1", 1)]);

        let mut progress = StudentProgress::new("student-1");
        record_quiz_result(&mut progress, grade_quiz(&quiz, &wrong, Utc::now()));
        record_quiz_result(&mut progress, grade_quiz(&quiz, &wrong, Utc::now()));

        // two attempts, but each question text appears once
        assert_eq!(progress.weak_points.len(), 2);
        // while the per-attempt records keep their own copies
        assert_eq!(progress.quizzes_completed[0].weak_points.len(), 2);
        assert_eq!(progress.quizzes_completed[1].weak_points.len(), 2);
    }
}
