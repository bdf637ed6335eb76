use std::io::{self, BufRead, Write};

use log::info;

use crate::input;
use crate::models::Quiz;

/// Tally of one pass through a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTally {
    pub correct: usize,
    pub total: usize,
}

/// Walks the quiz's questions in order, reading one answer line per
/// question and grading it. A malformed line just produces an empty or
/// partial answer, which is graded like any other.
///
/// The tally is returned to the caller; recording a result against a user
/// happens there.
pub fn run<R: BufRead, W: Write>(
    quiz: &Quiz,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<SessionTally> {
    let total = quiz.questions.len();
    let mut correct = 0;

    writeln!(
        writer,
        "Answer the questions (enter the numbers of the correct choices, separated by commas):"
    )?;
    for (i, question) in quiz.questions.iter().enumerate() {
        writeln!(writer, "Question {}: {}", i + 1, question.text)?;
        for (j, choice) in question.choices.iter().enumerate() {
            writeln!(writer, "{}. {}", j + 1, choice)?;
        }

        let line = input::read_line(reader)?;
        let submitted = input::parse_choice_numbers(&line);
        if question.grade(&submitted) {
            correct += 1;
        }
    }

    info!("finished '{}': {}/{} correct", quiz.name, correct, total);
    Ok(SessionTally { correct, total })
}
