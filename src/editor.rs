use std::io::{self, BufRead, Write};

use crate::input::{self, EditEntry, DELETE, EXIT};
use crate::models::{Question, Quiz};
use crate::registry::Registry;

/// Interactively builds a new quiz and registers it. Refuses up front when
/// the name is already taken, before any prompting, leaving the registry
/// untouched.
pub fn create_quiz<R: BufRead, W: Write>(
    registry: &mut Registry,
    name: &str,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    if registry.quiz_exists(name) {
        writeln!(writer, "A quiz named '{}' already exists.", name)?;
        return Ok(());
    }

    let mut questions = Vec::new();
    loop {
        writeln!(writer, "Creating a question (enter '{}' to finish):", EXIT)?;
        let text = input::prompt(reader, writer, "Question text: ")?;
        if text == EXIT {
            break;
        }

        questions.push(collect_question_body(text, reader, writer)?);
    }

    match registry.add_quiz(Quiz::new(name.to_string(), questions)) {
        Ok(()) => writeln!(writer, "Quiz '{}' created.", name)?,
        Err(e) => writeln!(writer, "Could not create the quiz: {}.", e)?,
    }
    Ok(())
}

/// Collects the choices and correct-choice numbers for a question whose
/// text has already been read. An empty choice list is allowed. The correct
/// numbers are taken as typed and not checked against the choice list.
fn collect_question_body<R: BufRead, W: Write>(
    text: String,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Question> {
    let mut choices = Vec::new();
    loop {
        writeln!(writer, "Enter a choice (enter '{}' to finish):", EXIT)?;
        let choice = input::read_line(reader)?;
        if choice == EXIT {
            break;
        }
        choices.push(choice);
    }

    let line = input::prompt(
        reader,
        writer,
        "Enter the numbers of the correct choices, separated by commas: ",
    )?;
    let correct = input::parse_choice_numbers(&line);

    Ok(Question::new(text, choices, correct))
}

/// The quiz editing menu. Re-entrant until the user enters the exit
/// sentinel; a failed action reports and falls back to this menu.
pub fn edit_quiz<R: BufRead, W: Write>(
    quiz: &mut Quiz,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(
            writer,
            "Editing quiz '{}' (enter '{}' to leave):",
            quiz.name, EXIT
        )?;
        writeln!(writer, "Choose an action:")?;
        writeln!(writer, "1. Add a question")?;
        writeln!(writer, "2. Remove a question")?;
        writeln!(writer, "3. Edit a question")?;
        let action = input::read_line(reader)?;

        match action.as_str() {
            "1" => add_question(quiz, reader, writer)?,
            "2" => remove_question(quiz, reader, writer)?,
            "3" => edit_question(quiz, reader, writer)?,
            EXIT => break,
            _ => writeln!(writer, "Invalid choice.")?,
        }
    }
    Ok(())
}

fn add_question<R: BufRead, W: Write>(
    quiz: &mut Quiz,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "Creating a new question:")?;
    let text = input::prompt(reader, writer, "Question text: ")?;
    let question = collect_question_body(text, reader, writer)?;
    quiz.questions.push(question);

    writeln!(writer, "Question added.")?;
    Ok(())
}

fn remove_question<R: BufRead, W: Write>(
    quiz: &mut Quiz,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    let line = input::prompt(reader, writer, "Number of the question to remove: ")?;
    match line.trim().parse::<i64>() {
        Ok(n) if n >= 1 && (n as usize) <= quiz.questions.len() => {
            quiz.questions.remove(n as usize - 1);
            writeln!(writer, "Question removed.")?;
        }
        Ok(_) => writeln!(writer, "Invalid question number.")?,
        Err(_) => writeln!(writer, "Invalid input.")?,
    }
    Ok(())
}

fn edit_question<R: BufRead, W: Write>(
    quiz: &mut Quiz,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    let line = input::prompt(reader, writer, "Number of the question to edit: ")?;
    let number = match line.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            writeln!(writer, "Invalid input.")?;
            return Ok(());
        }
    };
    if number < 1 || number as usize > quiz.questions.len() {
        writeln!(writer, "Invalid question number.")?;
        return Ok(());
    }
    let question = &mut quiz.questions[number as usize - 1];

    writeln!(writer, "Editing the question:")?;
    writeln!(writer, "Current text: {}", question.text)?;
    let new_text = input::prompt(reader, writer, "New question text: ")?;
    question.text = new_text;

    writeln!(writer, "Current choices:")?;
    for (i, choice) in question.choices.iter().enumerate() {
        writeln!(writer, "{}. {}", i + 1, choice)?;
    }

    writeln!(
        writer,
        "Editing choices (enter '{}' to remove one, '{}' to stop):",
        DELETE, EXIT
    )?;
    let mut i = 0;
    while i < question.choices.len() {
        let reply = input::prompt(
            reader,
            writer,
            &format!("New text for choice {}: ", i + 1),
        )?;
        if reply == DELETE {
            // Later choices shift down one; the same position is prompted
            // again with the choice that moved into it.
            question.choices.remove(i);
        } else if reply == EXIT {
            break;
        } else {
            question.choices[i] = reply;
            i += 1;
        }
    }

    writeln!(writer, "Current correct choices:")?;
    for (i, entry) in question.correct.iter().enumerate() {
        let resolved = usize::try_from(*entry)
            .ok()
            .and_then(|ix| question.choices.get(ix));
        match resolved {
            Some(choice) => writeln!(writer, "{}. {}", i + 1, choice)?,
            None => writeln!(writer, "{}. (invalid)", i + 1)?,
        }
    }

    writeln!(
        writer,
        "Editing correct choices (enter '{}' to remove one, '{}' to stop):",
        DELETE, EXIT
    )?;
    let mut i = 0;
    while i < question.correct.len() {
        let reply = input::prompt(
            reader,
            writer,
            &format!("New number for correct choice {}: ", i + 1),
        )?;
        match input::parse_edit_entry(&reply) {
            EditEntry::Number(n) if n >= 1 && (n as usize) <= question.choices.len() => {
                question.correct[i] = n - 1;
                i += 1;
            }
            EditEntry::Number(0) => {
                writeln!(writer, "The choice number must be positive.")?;
            }
            EditEntry::Number(_) => {
                writeln!(writer, "Invalid choice number.")?;
            }
            EditEntry::Delete => {
                question.correct.remove(i);
            }
            EditEntry::Exit => break,
            EditEntry::Invalid => {
                writeln!(writer, "Invalid input.")?;
            }
        }
    }

    writeln!(writer, "Question updated.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn three_question_quiz() -> Quiz {
        Quiz::new(
            "Trivia".to_string(),
            vec![
                Question::new("Q1".to_string(), vec!["a".to_string()], vec![0]),
                Question::new("Q2".to_string(), vec!["b".to_string()], vec![0]),
                Question::new("Q3".to_string(), vec!["c".to_string()], vec![0]),
            ],
        )
    }

    fn edit_scripted(quiz: &mut Quiz, script: &str) -> String {
        let mut reader = Cursor::new(script.to_string());
        let mut output = Vec::new();
        edit_quiz(quiz, &mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_create_quiz_registers_questions() {
        let mut registry = Registry::new();
        let script = "What color is the sky?\n\
                      Blue\n\
                      Green\n\
                      exit\n\
                      1\n\
                      exit\n";
        let mut reader = Cursor::new(script.to_string());
        let mut output = Vec::new();
        create_quiz(&mut registry, "Colors", &mut reader, &mut output).unwrap();

        let quiz = registry.quiz_by_name("Colors").unwrap();
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].text, "What color is the sky?");
        assert_eq!(quiz.questions[0].choices, vec!["Blue", "Green"]);
        assert_eq!(quiz.questions[0].correct, vec![0]);
    }

    #[test]
    fn test_create_quiz_allows_empty_choice_list() {
        let mut registry = Registry::new();
        let script = "Open question\n\
                      exit\n\
                      \n\
                      exit\n";
        let mut reader = Cursor::new(script.to_string());
        let mut output = Vec::new();
        create_quiz(&mut registry, "Odd", &mut reader, &mut output).unwrap();

        let quiz = registry.quiz_by_name("Odd").unwrap();
        assert!(quiz.questions[0].choices.is_empty());
        assert!(quiz.questions[0].correct.is_empty());
    }

    #[test]
    fn test_create_quiz_rejects_duplicate_name_without_reading_input() {
        let mut registry = Registry::new();
        registry
            .add_quiz(Quiz::new(
                "History".to_string(),
                vec![Question::new("Q1".to_string(), vec!["a".to_string()], vec![0])],
            ))
            .unwrap();

        let mut reader = Cursor::new(String::new());
        let mut output = Vec::new();
        create_quiz(&mut registry, "History", &mut reader, &mut output).unwrap();

        assert!(String::from_utf8(output)
            .unwrap()
            .contains("already exists"));
        assert_eq!(registry.quizzes.len(), 1);
        assert_eq!(registry.quiz_by_name("History").unwrap().questions.len(), 1);
    }

    #[test]
    fn test_add_question_through_edit_menu() {
        let mut quiz = Quiz::new("Trivia".to_string(), Vec::new());
        let script = "1\n\
                      New question\n\
                      Choice one\n\
                      exit\n\
                      1\n\
                      exit\n";
        edit_scripted(&mut quiz, script);

        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].text, "New question");
        assert_eq!(quiz.questions[0].correct, vec![0]);
    }

    #[test]
    fn test_remove_middle_question_keeps_order() {
        let mut quiz = three_question_quiz();
        edit_scripted(&mut quiz, "2\n2\nexit\n");

        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].text, "Q1");
        assert_eq!(quiz.questions[1].text, "Q3");
    }

    #[test]
    fn test_remove_rejects_out_of_range_number() {
        let mut quiz = three_question_quiz();
        let output = edit_scripted(&mut quiz, "2\n4\nexit\n");

        assert!(output.contains("Invalid question number."));
        assert_eq!(quiz.questions.len(), 3);
    }

    #[test]
    fn test_remove_rejects_non_numeric_input() {
        let mut quiz = three_question_quiz();
        let output = edit_scripted(&mut quiz, "2\nfirst\nexit\n");

        assert!(output.contains("Invalid input."));
        assert_eq!(quiz.questions.len(), 3);
    }

    #[test]
    fn test_edit_menu_rejects_unknown_action() {
        let mut quiz = three_question_quiz();
        let output = edit_scripted(&mut quiz, "9\nexit\n");

        assert!(output.contains("Invalid choice."));
    }

    #[test]
    fn test_edit_replaces_text_and_choices_in_place() {
        let mut quiz = Quiz::new(
            "Trivia".to_string(),
            vec![Question::new(
                "Old text".to_string(),
                vec!["one".to_string(), "two".to_string()],
                vec![1],
            )],
        );
        // Edit question 1: new text, replace both choices, keep the correct
        // entry pointing at choice 2.
        let script = "3\n\
                      1\n\
                      New text\n\
                      uno\n\
                      dos\n\
                      2\n\
                      exit\n";
        edit_scripted(&mut quiz, script);

        let q = &quiz.questions[0];
        assert_eq!(q.text, "New text");
        assert_eq!(q.choices, vec!["uno", "dos"]);
        assert_eq!(q.correct, vec![1]);
    }

    #[test]
    fn test_choice_delete_shifts_but_correct_entries_stay() {
        let mut quiz = Quiz::new(
            "Trivia".to_string(),
            vec![Question::new(
                "Q".to_string(),
                vec!["a".to_string(), "b".to_string(), "c".to_string()],
                vec![2],
            )],
        );
        // Delete choice 1, then stop editing choices. The stored correct
        // entry still says position 2 even though "c" now sits at 1; the
        // criteria are not re-pointed when choices shift.
        let script = "3\n\
                      1\n\
                      Q\n\
                      delete\n\
                      exit\n\
                      exit\n\
                      exit\n";
        edit_scripted(&mut quiz, script);

        let q = &quiz.questions[0];
        assert_eq!(q.choices, vec!["b", "c"]);
        assert_eq!(q.correct, vec![2]);
    }

    #[test]
    fn test_choice_delete_reprompts_the_same_position() {
        let mut quiz = Quiz::new(
            "Trivia".to_string(),
            vec![Question::new(
                "Q".to_string(),
                vec!["a".to_string(), "b".to_string()],
                vec![],
            )],
        );
        // After deleting choice 1, "b" moves into position 1 and the next
        // reply replaces it there.
        let script = "3\n\
                      1\n\
                      Q\n\
                      delete\n\
                      beta\n\
                      exit\n";
        edit_scripted(&mut quiz, script);

        assert_eq!(quiz.questions[0].choices, vec!["beta"]);
    }

    #[test]
    fn test_correct_entry_delete_consumes_one_line() {
        let mut quiz = Quiz::new(
            "Trivia".to_string(),
            vec![Question::new(
                "Q".to_string(),
                vec!["a".to_string(), "b".to_string()],
                vec![0, 1],
            )],
        );
        // The delete sentinel is honored on the very line that failed the
        // numeric parse; the following line ("1") is the reply for the
        // entry that shifted into this position.
        let script = "3\n\
                      1\n\
                      Q\n\
                      exit\n\
                      delete\n\
                      1\n\
                      exit\n";
        edit_scripted(&mut quiz, script);

        assert_eq!(quiz.questions[0].correct, vec![0]);
    }

    #[test]
    fn test_correct_entry_zero_reprompts_same_entry() {
        let mut quiz = Quiz::new(
            "Trivia".to_string(),
            vec![Question::new(
                "Q".to_string(),
                vec!["a".to_string(), "b".to_string()],
                vec![0],
            )],
        );
        let script = "3\n\
                      1\n\
                      Q\n\
                      exit\n\
                      0\n\
                      2\n\
                      exit\n";
        let output = edit_scripted(&mut quiz, script);

        assert!(output.contains("must be positive"));
        assert_eq!(quiz.questions[0].correct, vec![1]);
    }

    #[test]
    fn test_correct_entry_out_of_range_reprompts_same_entry() {
        let mut quiz = Quiz::new(
            "Trivia".to_string(),
            vec![Question::new(
                "Q".to_string(),
                vec!["a".to_string(), "b".to_string()],
                vec![0],
            )],
        );
        let script = "3\n\
                      1\n\
                      Q\n\
                      exit\n\
                      5\n\
                      1\n\
                      exit\n";
        let output = edit_scripted(&mut quiz, script);

        assert!(output.contains("Invalid choice number."));
        assert_eq!(quiz.questions[0].correct, vec![0]);
    }

    #[test]
    fn test_correct_entry_exit_keeps_remaining_entries() {
        let mut quiz = Quiz::new(
            "Trivia".to_string(),
            vec![Question::new(
                "Q".to_string(),
                vec!["a".to_string(), "b".to_string()],
                vec![0, 1],
            )],
        );
        let script = "3\n\
                      1\n\
                      Q\n\
                      exit\n\
                      2\n\
                      exit\n\
                      exit\n";
        edit_scripted(&mut quiz, script);

        assert_eq!(quiz.questions[0].correct, vec![1, 1]);
    }

    #[test]
    fn test_stale_correct_entry_renders_placeholder() {
        let mut quiz = Quiz::new(
            "Trivia".to_string(),
            vec![Question::new(
                "Q".to_string(),
                vec!["a".to_string()],
                vec![5],
            )],
        );
        let script = "3\n\
                      1\n\
                      Q\n\
                      exit\n\
                      1\n\
                      exit\n";
        let output = edit_scripted(&mut quiz, script);

        assert!(output.contains("1. (invalid)"));
        assert_eq!(quiz.questions[0].correct, vec![0]);
    }
}
