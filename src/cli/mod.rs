mod create;
mod edit;
mod results;
mod settings;
mod take;

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::Parser;

use crate::input;
use crate::registry::Registry;
use crate::seed;

#[derive(Parser)]
#[command(name = "quizdom")]
#[command(about = "Interactive console quizzes", long_about = None)]
pub struct Cli {
    /// Start without the built-in demo quizzes
    #[arg(long)]
    pub no_demo: bool,
}

pub fn run(cli: Cli) {
    let mut registry = Registry::new();

    if !cli.no_demo {
        let quizzes = match seed::demo_quizzes() {
            Ok(quizzes) => quizzes,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
        for quiz in quizzes {
            if let Err(e) = registry.add_quiz(quiz) {
                eprintln!("Skipping a built-in quiz: {}", e);
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();

    if let Err(e) = main_menu(&mut registry, &mut reader, &mut writer) {
        // A closed stdin ends the program like the exit menu entry would.
        if e.kind() != io::ErrorKind::UnexpectedEof {
            eprintln!("Console error: {}", e);
            std::process::exit(1);
        }
    }
}

fn main_menu<R: BufRead, W: Write>(
    registry: &mut Registry,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "Welcome to Quizdom!")?;

    loop {
        writeln!(writer, "Choose an action:")?;
        writeln!(writer, "1. Register")?;
        writeln!(writer, "2. Log in")?;
        writeln!(writer, "3. Exit")?;
        let choice = input::read_line(reader)?;

        match choice.as_str() {
            "1" => register(registry, reader, writer)?,
            "2" => log_in(registry, reader, writer)?,
            "3" => break,
            _ => writeln!(writer, "Invalid choice.")?,
        }
    }

    writeln!(writer, "Thanks for playing. Goodbye!")?;
    Ok(())
}

fn register<R: BufRead, W: Write>(
    registry: &mut Registry,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    let username = input::prompt(reader, writer, "Username: ")?;
    let password = input::prompt(reader, writer, "Password: ")?;
    let line = input::prompt(reader, writer, "Date of birth (yyyy-mm-dd): ")?;

    let date_of_birth = match NaiveDate::parse_from_str(line.trim(), "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            writeln!(writer, "Invalid date of birth format.")?;
            return Ok(());
        }
    };

    match registry.register_user(&username, &password, date_of_birth) {
        Ok(()) => writeln!(writer, "Registration complete.")?,
        Err(e) => writeln!(writer, "Registration failed: {}.", e)?,
    }
    Ok(())
}

fn log_in<R: BufRead, W: Write>(
    registry: &mut Registry,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    let username = input::prompt(reader, writer, "Username: ")?;
    let password = input::prompt(reader, writer, "Password: ")?;

    match registry.authenticate(&username, &password) {
        Some(user) => {
            writeln!(writer, "Welcome, {}!", registry.users[user].username)?;
            user_menu(registry, user, reader, writer)
        }
        None => writeln!(writer, "Unknown username or password."),
    }
}

fn user_menu<R: BufRead, W: Write>(
    registry: &mut Registry,
    user: usize,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(writer, "Choose an action:")?;
        writeln!(writer, "1. Start a quiz")?;
        writeln!(writer, "2. View past results")?;
        writeln!(writer, "3. View the top 20 for a quiz")?;
        writeln!(writer, "4. Change settings")?;
        writeln!(writer, "5. Create a quiz")?;
        writeln!(writer, "6. Edit a quiz")?;
        writeln!(writer, "7. Log out")?;
        let choice = input::read_line(reader)?;

        match choice.as_str() {
            "1" => take::start_quiz(registry, user, reader, writer)?,
            "2" => results::show_history(registry, user, writer)?,
            "3" => results::show_top_twenty(registry, reader, writer)?,
            "4" => settings::change_settings(registry, user, reader, writer)?,
            "5" => create::create_quiz(registry, reader, writer)?,
            "6" => edit::edit_quiz(registry, reader, writer)?,
            "7" => break,
            _ => writeln!(writer, "Invalid choice.")?,
        }
    }
    Ok(())
}
