use std::io::{self, BufRead, Write};

/// Terminates open-ended entry loops across authoring and editing.
pub const EXIT: &str = "exit";
/// Removes the current item in the edit flows.
pub const DELETE: &str = "delete";

/// Reads one line, stripping the trailing newline. A zero-byte read means
/// the console is gone; surfacing it as an error keeps the menu loops from
/// spinning on a closed stdin.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    let n = reader.read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        ));
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Writes `text` without a newline, flushes, and reads the reply line.
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    text: &str,
) -> io::Result<String> {
    write!(writer, "{}", text)?;
    writer.flush()?;
    read_line(reader)
}

/// Splits a comma-separated list of 1-based choice numbers and converts
/// them to 0-based entries. Tokens that do not parse as integers are
/// dropped without comment. A typed `0` becomes `-1`: it still counts
/// toward the answer's size but can never name a real choice position.
pub fn parse_choice_numbers(line: &str) -> Vec<i64> {
    line.split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .map(|n| n - 1)
        .collect()
}

/// One line of input while editing a correct-choice entry: a 1-based
/// number, one of the loop sentinels, or junk. Parsed from a single read,
/// so a sentinel is recognized on the same line that failed the numeric
/// parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEntry {
    Number(i64),
    Delete,
    Exit,
    Invalid,
}

pub fn parse_edit_entry(line: &str) -> EditEntry {
    let token = line.trim();
    if let Ok(n) = token.parse::<i64>() {
        return EditEntry::Number(n);
    }

    match token {
        DELETE => EditEntry::Delete,
        EXIT => EditEntry::Exit,
        _ => EditEntry::Invalid,
    }
}
