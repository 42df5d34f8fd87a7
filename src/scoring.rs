use crate::models::{AnswerRecord, Category, Question, QuizResult};

pub fn is_correct(question: &Question, option: usize) -> bool {
    option == question.correct_option
}

/// `round(correct / total * 100)`. Zero when there is nothing to score.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

/// One record per question, in question order. Questions without a record
/// get an unanswered one charged the full time limit.
pub fn finalize_records(category: &Category, records: &[AnswerRecord]) -> Vec<AnswerRecord> {
    category
        .questions
        .iter()
        .map(|question| {
            records
                .iter()
                .rev()
                .find(|r| r.question_id == question.id)
                .cloned()
                .unwrap_or_else(|| {
                    AnswerRecord::unanswered(question.id, category.time_per_question)
                })
        })
        .collect()
}

pub fn compute_result(category: &Category, records: &[AnswerRecord]) -> QuizResult {
    let answers = finalize_records(category, records);
    let total_questions = answers.len();
    let correct = answers.iter().filter(|a| a.is_correct).count();
    let unanswered = answers.iter().filter(|a| a.selected_option.is_none()).count();
    let incorrect = answers
        .iter()
        .filter(|a| a.selected_option.is_some() && !a.is_correct)
        .count();
    let percentage = percentage(correct, total_questions);

    QuizResult {
        total_questions,
        correct,
        incorrect,
        unanswered,
        score: correct,
        percentage,
        passed: percentage >= category.passing_score,
        time_spent_secs: answers
            .iter()
            .fold(0u32, |total, a| total.saturating_add(a.time_taken_secs)),
        answers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(correct: &[usize], passing_score: u32) -> Category {
        Category {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            time_per_question: 30,
            passing_score,
            questions: correct
                .iter()
                .enumerate()
                .map(|(i, &c)| Question {
                    id: i as u32 + 1,
                    prompt: format!("Q{}", i + 1),
                    options: ["a".into(), "b".into(), "c".into(), "d".into()],
                    correct_option: c,
                })
                .collect(),
        }
    }

    fn answered(question_id: u32, option: usize, is_correct: bool) -> AnswerRecord {
        AnswerRecord {
            question_id,
            selected_option: Some(option),
            is_correct,
            time_taken_secs: 3,
        }
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_percentage_bounds() {
        for total in 1..=40usize {
            assert_eq!(percentage(0, total), 0);
            assert_eq!(percentage(total, total), 100);
            for correct in 1..total {
                let pct = percentage(correct, total);
                assert!(pct <= 100);
                assert!(pct >= percentage(correct - 1, total));
            }
        }
    }

    #[test]
    fn test_finalize_fills_missing_in_question_order() {
        let cat = category(&[0, 1, 2], 60);
        let records = vec![answered(3, 2, true), answered(1, 1, false)];
        let finalized = finalize_records(&cat, &records);

        let ids: Vec<u32> = finalized.iter().map(|r| r.question_id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(finalized[1], AnswerRecord::unanswered(2, 30));
    }

    #[test]
    fn test_passed_is_inclusive() {
        let cat = category(&[1, 2], 50);
        let result = compute_result(&cat, &[answered(1, 0, false), answered(2, 2, true)]);
        assert_eq!(result.percentage, 50);
        assert!(result.passed);

        let cat = category(&[1, 2], 60);
        let result = compute_result(&cat, &[answered(1, 0, false), answered(2, 2, true)]);
        assert!(!result.passed);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let cat = category(&[0, 0, 0, 0, 0], 60);
        let records = vec![
            answered(1, 0, true),
            answered(2, 1, false),
            answered(4, 0, true),
        ];
        let result = compute_result(&cat, &records);
        assert_eq!(result.total_questions, 5);
        assert_eq!(result.correct, 2);
        assert_eq!(result.incorrect, 1);
        assert_eq!(result.unanswered, 2);
        assert_eq!(result.score, 2);
        assert_eq!(result.percentage, 40);
        assert_eq!(result.time_spent_secs, 3 + 3 + 3 + 30 + 30);
    }

    #[test]
    fn test_time_spent_saturates() {
        let mut cat = category(&[0, 0], 60);
        cat.time_per_question = u32::MAX;
        let result = compute_result(&cat, &[]);
        assert_eq!(result.unanswered, 2);
        assert_eq!(result.time_spent_secs, u32::MAX);
    }

    #[test]
    fn test_result_independent_of_answer_order() {
        let cat = category(&[0, 1, 2, 3], 60);
        let forward = vec![
            answered(1, 0, true),
            answered(2, 0, false),
            answered(3, 2, true),
        ];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(compute_result(&cat, &forward), compute_result(&cat, &backward));
    }
}
