use serde::{Deserialize, Serialize};

use super::question::Question;

/// A named, ordered list of questions. The name is the quiz's unique key in
/// the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(name: String, questions: Vec<Question>) -> Self {
        Self { name, questions }
    }
}
