use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

use crate::models::{Quiz, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a user named '{0}' already exists")]
    DuplicateUser(String),

    #[error("a quiz named '{0}' already exists")]
    DuplicateQuiz(String),
}

/// Holds every user and quiz for the lifetime of the process. Created in
/// `cli::run` and passed down; nothing here is global or persisted.
///
/// Lookups are linear scans with exact string matching. Usernames and quiz
/// names are unique, enforced at the registration seams.
#[derive(Debug, Default)]
pub struct Registry {
    pub users: Vec<User>,
    pub quizzes: Vec<Quiz>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_user(
        &mut self,
        username: &str,
        password: &str,
        date_of_birth: NaiveDate,
    ) -> Result<(), RegistryError> {
        if self.user_exists(username) {
            return Err(RegistryError::DuplicateUser(username.to_string()));
        }

        self.users.push(User::new(
            username.to_string(),
            password.to_string(),
            date_of_birth,
        ));
        debug!("registered user '{}'", username);
        Ok(())
    }

    pub fn user_exists(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    /// Index of the user matching both username and password. An index
    /// rather than a reference, so the caller can keep re-borrowing the
    /// registry mutably for the rest of the authenticated session.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<usize> {
        self.users
            .iter()
            .position(|u| u.username == username && u.password == password)
    }

    pub fn quiz_exists(&self, name: &str) -> bool {
        self.quizzes.iter().any(|q| q.name == name)
    }

    pub fn quiz_by_name(&self, name: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.name == name)
    }

    pub fn quiz_position(&self, name: &str) -> Option<usize> {
        self.quizzes.iter().position(|q| q.name == name)
    }

    pub fn add_quiz(&mut self, quiz: Quiz) -> Result<(), RegistryError> {
        if self.quiz_exists(&quiz.name) {
            return Err(RegistryError::DuplicateQuiz(quiz.name));
        }

        debug!(
            "registered quiz '{}' with {} question(s)",
            quiz.name,
            quiz.questions.len()
        );
        self.quizzes.push(quiz);
        Ok(())
    }
}
