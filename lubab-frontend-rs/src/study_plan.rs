//! Builds the weekly study plan from incomplete lessons and known weak
//! points.

use chrono::{DateTime, Duration, Utc};
use lubab_utils::{Lesson, Priority, StudentProgress, StudyPlanItem, Subject};

/// The plan covers at most one week.
pub const PLAN_DAYS: usize = 7;

/// One entry per day starting at `today`, consuming `lessons` in catalog
/// order. The first three days get high priority; the first two are flagged
/// as recommended when weak points exist. Shorter input means a shorter plan,
/// never padding or repeats.
///
/// `today` is an explicit parameter so callers are deterministic about their
/// time choice.
pub fn generate_study_plan(
    weak_points: &[String],
    lessons: &[&Lesson],
    today: DateTime<Utc>,
) -> Vec<StudyPlanItem> {
    lessons
        .iter()
        .take(PLAN_DAYS)
        .enumerate()
        .map(|(i, lesson)| StudyPlanItem {
            id: format!("plan-{i}"),
            date: today + Duration::days(i as i64),
            lesson_id: lesson.id.clone(),
            subject_id: lesson.subject_id.clone(),
            completed: false,
            priority: if i < 3 { Priority::High } else { Priority::Medium },
            recommended: !weak_points.is_empty() && i < 2,
        })
        .collect()
}

/// The not-yet-completed lessons across `subjects`, in catalog order.
pub fn incomplete_lessons<'a>(
    subjects: &[&'a Subject],
    progress: &StudentProgress,
) -> Vec<&'a Lesson> {
    subjects
        .iter()
        .flat_map(|s| s.lessons.iter())
        .filter(|l| !progress.lessons_completed.contains(&l.id))
        .collect()
}
