use serde::{Deserialize, Serialize};

/// A multiple-choice question. Choice positions are 0-based internally and
/// shown to users as 1-based numbers.
///
/// `correct` holds the 0-based positions that make up a fully correct
/// answer. Entries are stored as typed in (minus one) and are not validated
/// against the choice list, so editing choices afterwards can leave stale
/// entries behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub choices: Vec<String>,
    pub correct: Vec<i64>,
}

impl Question {
    pub fn new(text: String, choices: Vec<String>, correct: Vec<i64>) -> Self {
        Self {
            text,
            choices,
            correct,
        }
    }

    /// An answer is correct when it lists exactly the correct choices: the
    /// same count, and every submitted entry present in the stored set.
    /// Submission order is irrelevant. Duplicates are not collapsed, so a
    /// repeated entry fails the count comparison.
    pub fn grade(&self, submitted: &[i64]) -> bool {
        if submitted.len() != self.correct.len() {
            return false;
        }

        submitted.iter().all(|entry| self.correct.contains(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: Vec<i64>) -> Question {
        Question::new(
            "Pick the right ones".to_string(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct,
        )
    }

    #[test]
    fn test_exact_match_single() {
        let q = question(vec![1]);
        assert!(q.grade(&[1]));
    }

    #[test]
    fn test_cardinality_mismatch() {
        let q = question(vec![1]);
        assert!(!q.grade(&[0, 1]));
    }

    #[test]
    fn test_wrong_choice() {
        let q = question(vec![1]);
        assert!(!q.grade(&[2]));
    }

    #[test]
    fn test_order_is_irrelevant() {
        let q = question(vec![0, 2]);
        assert!(q.grade(&[2, 0]));
        assert!(q.grade(&[0, 2]));
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let q = question(vec![0, 2]);
        assert!(!q.grade(&[0, 0]));
    }

    #[test]
    fn test_empty_correct_set_needs_empty_answer() {
        let q = question(vec![]);
        assert!(q.grade(&[]));
        assert!(!q.grade(&[0]));
    }

    #[test]
    fn test_negative_entry_matches_only_a_stored_negative() {
        // A typed "0" becomes -1 on both the authoring and the answering
        // side, so the two still agree with each other.
        let q = question(vec![-1]);
        assert!(q.grade(&[-1]));
        assert!(!q.grade(&[0]));
    }
}
