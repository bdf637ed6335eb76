use std::io::{self, BufRead, Write};

use crate::input;
use crate::registry::Registry;

/// One line per recorded result. The stored quiz name is resolved against
/// the live registry; a name that no longer resolves is still shown, with a
/// marker instead of a lookup failure.
pub fn show_history<W: Write>(
    registry: &Registry,
    user: usize,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "Past quiz results:")?;
    for result in &registry.users[user].results {
        if registry.quiz_exists(&result.quiz_name) {
            writeln!(
                writer,
                "{}: {}/{}",
                result.quiz_name, result.correct_answers, result.total_questions
            )?;
        } else {
            writeln!(
                writer,
                "{} (quiz deleted): {}/{}",
                result.quiz_name, result.correct_answers, result.total_questions
            )?;
        }
    }
    Ok(())
}

pub fn show_top_twenty<R: BufRead, W: Write>(
    registry: &Registry,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "Enter the quiz name:")?;
    let name = input::read_line(reader)?;

    match registry.quiz_by_name(&name) {
        Some(quiz) => {
            // No per-quiz rankings are kept anywhere, so the header is all
            // there is to show.
            writeln!(writer, "Top 20 for quiz {}:", quiz.name)?;
        }
        None => writeln!(writer, "Quiz not found.")?,
    }
    Ok(())
}
