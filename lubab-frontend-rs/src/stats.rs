//! Derived views over the progress record: dashboard completion numbers,
//! lesson unlock gating, and the parent report. Everything here is computed
//! fresh from [`StudentProgress`] on each read.

use chrono::{DateTime, Utc};
use lubab_utils::report::{
    ActivityItem, ActivityKind, Alert, AlertKind, ParentReport, SubjectSummary,
};
use lubab_utils::{Lesson, QuizResult, StudentProgress, Subject};

use crate::analysis::analyze_performance;
use crate::catalog::Catalog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Completion {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

fn percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        (f64::from(completed) / f64::from(total) * 100.0).round() as u32
    }
}

/// How much of one subject's lessons the student has completed.
pub fn subject_completion(subject: &Subject, progress: &StudentProgress) -> Completion {
    let completed = progress
        .lessons_completed
        .iter()
        .filter(|lid| subject.lessons.iter().any(|l| l.id == **lid))
        .count() as u32;
    let total = subject.lessons.len() as u32;
    Completion {
        completed,
        total,
        percentage: percentage(completed, total),
    }
}

/// Completion across all offered subjects.
pub fn overall_completion(subjects: &[&Subject], progress: &StudentProgress) -> Completion {
    let total = subjects.iter().map(|s| s.lessons.len() as u32).sum();
    let completed = progress.lessons_completed.len() as u32;
    Completion {
        completed,
        total,
        percentage: percentage(completed, total),
    }
}

/// Mean score over all recorded attempts, 0 when there are none.
pub fn average_score(results: &[QuizResult]) -> u32 {
    if results.is_empty() {
        return 0;
    }
    let sum: u32 = results.iter().map(|r| r.score).sum();
    (f64::from(sum) / results.len() as f64).round() as u32
}

/// Lessons unlock in `order`: a lesson is available once its predecessor in
/// the subject is completed. The first lesson is always available.
pub fn is_lesson_unlocked(subject: &Subject, progress: &StudentProgress, lesson: &Lesson) -> bool {
    let mut ordered: Vec<&Lesson> = subject.lessons.iter().collect();
    ordered.sort_by_key(|l| l.order);
    let Some(position) = ordered.iter().position(|l| l.id == lesson.id) else {
        return false;
    };
    match position.checked_sub(1) {
        None => true,
        Some(prev) => progress.lessons_completed.contains(&ordered[prev].id),
    }
}

/// Adds the lesson to the completed set. Idempotent.
pub fn mark_lesson_completed(progress: &mut StudentProgress, lesson_id: &str) {
    if !progress.lessons_completed.iter().any(|l| l == lesson_id) {
        progress.lessons_completed.push(lesson_id.to_string());
    }
}

/// The aggregate view a parent sees: overall numbers, per-subject summaries,
/// the five most recent activities, analyzer recommendations, and alerts.
pub fn build_parent_report(
    catalog: &dyn Catalog,
    progress: &StudentProgress,
    now: DateTime<Utc>,
) -> ParentReport {
    let subjects = catalog.subjects();
    let overall = overall_completion(&subjects, progress);
    let results = &progress.quizzes_completed;
    let avg = average_score(results);

    // With an empty attempt log, fall back to the labels already stored on
    // the progress record.
    let analysis = if results.is_empty() {
        lubab_utils::PerformanceAnalysis {
            weak_points: progress.weak_points.clone(),
            strengths: progress.strengths.clone(),
            recommendations: Vec::new(),
        }
    } else {
        analyze_performance(results)
    };

    let subjects_summary = subjects
        .iter()
        .map(|subject| {
            let completion = subject_completion(subject, progress);
            let subject_results: Vec<QuizResult> = results
                .iter()
                .filter(|r| subject.lessons.iter().any(|l| l.id == r.lesson_id))
                .cloned()
                .collect();
            SubjectSummary {
                subject_id: subject.id.clone(),
                subject_name: subject.name.clone(),
                icon: subject.icon.clone(),
                progress: completion.percentage,
                average_score: average_score(&subject_results),
                lessons_completed: completion.completed,
                total_lessons: completion.total,
            }
        })
        .collect();

    let recent_activity = recent_activity(catalog, progress, now);

    let mut alerts = Vec::new();
    if avg < 60 && !results.is_empty() {
        alerts.push(Alert {
            id: "low-score".to_string(),
            kind: AlertKind::Warning,
            title: "انخفاض في الأداء".to_string(),
            message: "متوسط الدرجات أقل من 60%. يوصى بمراجعة الدروس السابقة.".to_string(),
            timestamp: now,
            action_required: true,
        });
    }
    if overall.percentage < 30 && overall.completed > 0 {
        alerts.push(Alert {
            id: "slow-progress".to_string(),
            kind: AlertKind::Info,
            title: "تقدم بطيء".to_string(),
            message: "التقدم الإجمالي أقل من 30%. شجع الطالب على المزيد من المذاكرة.".to_string(),
            timestamp: now,
            action_required: false,
        });
    }
    if analysis.weak_points.len() > 3 {
        alerts.push(Alert {
            id: "many-weak-points".to_string(),
            kind: AlertKind::Warning,
            title: "نقاط ضعف متعددة".to_string(),
            message: "تم اكتشاف عدة نقاط ضعف. يوصى بمراجعة شاملة.".to_string(),
            timestamp: now,
            action_required: true,
        });
    }

    ParentReport {
        student_id: progress.student_id.clone(),
        overall_progress: overall.percentage,
        average_score: avg,
        subjects_summary,
        recent_activity,
        recommendations: analysis.recommendations,
        alerts,
    }
}

/// The five newest activity items, drawn from the tails of the completed
/// lesson list and the attempt log.
fn recent_activity(
    catalog: &dyn Catalog,
    progress: &StudentProgress,
    now: DateTime<Utc>,
) -> Vec<ActivityItem> {
    let mut items = Vec::new();

    let recent_lessons = progress
        .lessons_completed
        .iter()
        .rev()
        .take(5)
        .filter_map(|lid| {
            let subject = catalog.subject_of_lesson(lid)?;
            let lesson = catalog.lesson(lid)?;
            Some(ActivityItem {
                id: format!("lesson-{lid}"),
                kind: ActivityKind::LessonCompleted,
                title: format!("إكمال درس: {}", lesson.title),
                description: format!("تم إكمال الدرس في مادة {}", subject.name),
                timestamp: now,
                subject_id: Some(subject.id.clone()),
            })
        });
    items.extend(recent_lessons);

    let recent_quizzes = progress
        .quizzes_completed
        .iter()
        .rev()
        .take(5)
        .filter_map(|result| {
            let subject = catalog.subject_of_lesson(&result.lesson_id)?;
            let lesson = catalog.lesson(&result.lesson_id)?;
            Some(ActivityItem {
                id: format!("quiz-{}", result.quiz_id),
                kind: ActivityKind::QuizCompleted,
                title: format!("إكمال اختبار: {}", lesson.title),
                description: format!("النتيجة: {}% - {}", result.score, subject.name),
                timestamp: result.completed_at,
                subject_id: Some(subject.id.clone()),
            })
        });
    items.extend(recent_quizzes);

    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items.truncate(5);
    items
}
