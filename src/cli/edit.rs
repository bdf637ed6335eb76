use std::io::{self, BufRead, Write};

use crate::editor;
use crate::input;
use crate::registry::Registry;

pub fn edit_quiz<R: BufRead, W: Write>(
    registry: &mut Registry,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    let name = input::prompt(reader, writer, "Name of the quiz to edit: ")?;
    match registry.quiz_position(&name) {
        Some(ix) => editor::edit_quiz(&mut registry.quizzes[ix], reader, writer),
        None => {
            writeln!(writer, "Quiz not found.")?;
            Ok(())
        }
    }
}
