use std::io::{self, BufRead, Write};

use crate::editor;
use crate::input;
use crate::registry::Registry;

pub fn create_quiz<R: BufRead, W: Write>(
    registry: &mut Registry,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    let name = input::prompt(reader, writer, "Name of the new quiz: ")?;
    editor::create_quiz(registry, &name, reader, writer)
}
