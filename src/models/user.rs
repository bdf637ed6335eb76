use chrono::NaiveDate;

/// A registered account. Passwords are kept and compared as plain text.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
    pub results: Vec<QuizResult>,
}

impl User {
    pub fn new(username: String, password: String, date_of_birth: NaiveDate) -> Self {
        Self {
            username,
            password,
            date_of_birth,
            results: Vec::new(),
        }
    }
}

/// Outcome of one completed quiz session. Holds the quiz name rather than a
/// handle to the quiz itself: the quiz can be edited or removed later
/// without touching recorded results, and display resolves the name against
/// the live registry.
#[derive(Debug, Clone)]
pub struct QuizResult {
    pub quiz_name: String,
    pub correct_answers: usize,
    pub total_questions: usize,
}

impl QuizResult {
    pub fn new(quiz_name: String, correct_answers: usize, total_questions: usize) -> Self {
        Self {
            quiz_name,
            correct_answers,
            total_questions,
        }
    }
}
