//! Exact-match comparison of a student's answer sheet against the key.


use tracing::trace;

use crate::value::{Map, same_value_zero};

/// Returns `true` iff `student` answered exactly the questions in
/// `correct`, each with an equal answer.
///
/// - Both sheets must have identical key sets: an unanswered question and an
///   extra answer both fail the check.
/// - Answers compare without coercion: `null`, `undefined`, `"42"` and `42`
///   are all distinct. `NaN` equals `NaN`, so every sheet matches itself.
/// - Insertion order is irrelevant. Two empty sheets match.
pub fn check_student_knowledge(student: &Map, correct: &Map) -> bool {
    if student.len() != correct.len() {
        trace!(
            answered = student.len(),
            expected = correct.len(),
            "check_student_knowledge: question count differs"
        );
        return false;
    }

    let mismatch = correct.iter().find(|(question, expected)| {
        !student
            .get(*question)
            .is_some_and(|answer| same_value_zero(answer, expected))
    });

    match mismatch {
        Some((question, _)) => {
            trace!(%question, "check_student_knowledge: mismatch");
            false
        }
        None => true,
    }
}
