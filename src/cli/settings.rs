use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::input;
use crate::registry::Registry;

pub fn change_settings<R: BufRead, W: Write>(
    registry: &mut Registry,
    user: usize,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "User settings:")?;
    writeln!(writer, "1. Change password")?;
    writeln!(writer, "2. Change date of birth")?;
    let choice = input::read_line(reader)?;

    match choice.as_str() {
        "1" => {
            let new_password = input::prompt(reader, writer, "New password: ")?;
            registry.users[user].password = new_password;
            writeln!(writer, "Password changed.")?;
        }
        "2" => {
            let line = input::prompt(reader, writer, "New date of birth (yyyy-mm-dd): ")?;
            match NaiveDate::parse_from_str(line.trim(), "%Y-%m-%d") {
                Ok(date) => {
                    registry.users[user].date_of_birth = date;
                    writeln!(writer, "Date of birth changed.")?;
                }
                Err(_) => writeln!(writer, "Invalid date of birth format.")?,
            }
        }
        _ => writeln!(writer, "Invalid choice.")?,
    }
    Ok(())
}
