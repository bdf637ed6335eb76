use std::io::{self, BufRead, Write};

use crate::input;
use crate::models::QuizResult;
use crate::registry::Registry;
use crate::session;

/// Lists the registered quizzes, reads a name, runs the session, and
/// records the tally in the user's history.
pub fn start_quiz<R: BufRead, W: Write>(
    registry: &mut Registry,
    user: usize,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "Choose a quiz:")?;
    for quiz in &registry.quizzes {
        writeln!(writer, "{}", quiz.name)?;
    }
    let name = input::read_line(reader)?;

    let quiz_ix = match registry.quiz_position(&name) {
        Some(ix) => ix,
        None => {
            writeln!(writer, "Quiz not found.")?;
            return Ok(());
        }
    };

    let tally = session::run(&registry.quizzes[quiz_ix], reader, writer)?;

    let quiz_name = registry.quizzes[quiz_ix].name.clone();
    registry.users[user]
        .results
        .push(QuizResult::new(quiz_name, tally.correct, tally.total));

    writeln!(
        writer,
        "You answered {} of {} questions correctly.",
        tally.correct, tally.total
    )?;
    Ok(())
}
