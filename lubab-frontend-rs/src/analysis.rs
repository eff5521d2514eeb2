//! Derives weak/strong labels and recommendations from recent quiz scores.

use lubab_utils::{PerformanceAnalysis, QuizResult};

/// How many of the most recent results the analysis looks at.
const RECENT_WINDOW: usize = 3;

/// Pure derived view over the attempt log: the mean of the last
/// [`RECENT_WINDOW`] scores is bucketed into three bands. An empty log yields
/// the empty analysis.
pub fn analyze_performance(results: &[QuizResult]) -> PerformanceAnalysis {
    let recent = &results[results.len().saturating_sub(RECENT_WINDOW)..];
    if recent.is_empty() {
        return PerformanceAnalysis::default();
    }

    let mean =
        recent.iter().map(|r| f64::from(r.score)).sum::<f64>() / recent.len() as f64;

    let mut analysis = PerformanceAnalysis::default();
    if mean < 60.0 {
        analysis
            .weak_points
            .push("تحتاج إلى مزيد من الممارسة".to_string());
        analysis
            .recommendations
            .push("راجع الدروس السابقة قبل المتابعة".to_string());
    } else if mean < 80.0 {
        analysis
            .weak_points
            .push("أداؤك جيد لكن يمكن تحسينه".to_string());
        analysis
            .recommendations
            .push("تدرب على المزيد من الأمثلة".to_string());
    } else {
        analysis.strengths.push("أداؤك ممتاز!".to_string());
        analysis
            .recommendations
            .push("يمكنك المتابعة للدروس التالية".to_string());
    }
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn result(score: u32) -> QuizResult {
        QuizResult {
            quiz_id: "quiz-1".to_string(),
            lesson_id: "lesson-1".to_string(),
            score,
            total_questions: 5,
            correct_answers: score / 20,
            wrong_answers: 5 - score / 20,
            answers: vec![],
            completed_at: Utc::now(),
            weak_points: vec![],
        }
    }

    #[test]
    fn low_mean_always_yields_review_recommendation() {
        for scores in [[0, 0, 0], [40, 50, 59], [59, 59, 59]] {
            let results: Vec<_> = scores.into_iter().map(result).collect();
            let analysis = analyze_performance(&results);
            assert!(!analysis.weak_points.is_empty());
            assert!(analysis.strengths.is_empty());
            assert_eq!(
                analysis.recommendations,
                vec!["راجع الدروس السابقة قبل المتابعة"]
            );
        }
    }

    #[test]
    fn middle_band_asks_for_more_practice() {
        let results: Vec<_> = [60, 70, 79].into_iter().map(result).collect();
        let analysis = analyze_performance(&results);
        assert_eq!(analysis.weak_points, vec!["أداؤك جيد لكن يمكن تحسينه"]);
        assert_eq!(analysis.recommendations, vec!["تدرب على المزيد من الأمثلة"]);
    }

    #[test]
    fn high_mean_always_yields_proceed_recommendation() {
        for scores in [[80, 80, 80], [90, 100, 85]] {
            let results: Vec<_> = scores.into_iter().map(result).collect();
            let analysis = analyze_performance(&results);
            assert!(!analysis.strengths.is_empty());
            assert!(analysis.weak_points.is_empty());
            assert_eq!(
                analysis.recommendations,
                vec!["يمكنك المتابعة للدروس التالية"]
            );
        }
    }

    #[test]
    fn only_the_last_three_results_count() {
        // three early failures, then three perfect scores
        let results: Vec<_> = [0, 0, 0, 100, 100, 100].into_iter().map(result).collect();
        let analysis = analyze_performance(&results);
        assert!(!analysis.strengths.is_empty());
    }

    #[test]
    fn fewer_than_three_results_still_analyze() {
        let analysis = analyze_performance(&[result(100)]);
        assert!(!analysis.strengths.is_empty());
    }

    #[test]
    fn empty_history_yields_empty_analysis() {
        let analysis = analyze_performance(&[]);
        assert_eq!(analysis, PerformanceAnalysis::default());
    }
}
