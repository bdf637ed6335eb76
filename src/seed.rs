use crate::models::Quiz;

const DEMO_QUIZZES: &str = include_str!("demo_quizzes.json");

/// The quizzes registered at startup so a fresh run has something to take
/// before anyone has authored a quiz of their own.
pub fn demo_quizzes() -> Result<Vec<Quiz>, String> {
    serde_json::from_str(DEMO_QUIZZES)
        .map_err(|e| format!("Failed to parse the built-in quizzes: {}", e))
}
