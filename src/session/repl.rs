//! Interactive line-editing front end
//!
//! Plain input is taken as a question and sent straight to the model.
//! Backslash meta-commands drive the rest of the page.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::AppError;
use crate::model::Generator;
use crate::output::{render_page, samples_table};
use crate::prompt::Accuracy;
use crate::question::SAMPLES;
use crate::sql::Database;

use super::{Page, Session};

const PROMPT: &str = "llmsql> ";

const HELP: &str = "\
  <question>          generate SQL for an English question
  \\generate, \\g      generate SQL for the current question again
  \\samples            list the sample questions
  \\sample <n>         load sample question n
  \\accuracy <level>   precise, balanced or creative
  \\explain, \\e       show or hide the explanation
  \\run, \\r           execute the generated SQL
  \\about              show the about page
  \\home               back to the home page
  \\clear              forget the question, SQL and result
  \\help, \\?          this help
  \\quit, \\q          leave";

/// Parsed REPL input
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ReplCommand {
    Question(String),
    Generate,
    Help,
    Quit,
    Samples,
    Sample(usize),
    Accuracy(Accuracy),
    Explain,
    Run,
    About,
    Home,
    Clear,
    Unknown(String),
}

pub(crate) fn parse_line(line: &str) -> Result<ReplCommand, AppError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidCommand("Empty command".into()));
    }
    if trimmed.starts_with('\\') {
        return parse_meta_command(trimmed);
    }
    Ok(ReplCommand::Question(trimmed.to_string()))
}

fn parse_meta_command(line: &str) -> Result<ReplCommand, AppError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let command = parts[0];
    let args = parts.get(1..).unwrap_or(&[]);

    match command {
        "\\quit" | "\\q" => Ok(ReplCommand::Quit),
        "\\help" | "\\?" => Ok(ReplCommand::Help),
        "\\generate" | "\\g" => Ok(ReplCommand::Generate),
        "\\samples" => Ok(ReplCommand::Samples),
        "\\sample" | "\\s" => {
            let Some(arg) = args.first() else {
                return Err(AppError::InvalidCommand(format!(
                    "\\sample requires a number (1-{})",
                    SAMPLES.len()
                )));
            };
            arg.parse::<usize>().map(ReplCommand::Sample).map_err(|_| {
                AppError::InvalidCommand(format!("Not a sample number: {arg}"))
            })
        }
        "\\accuracy" | "\\a" => {
            if args.is_empty() {
                return Err(AppError::InvalidCommand(
                    "\\accuracy requires: precise, balanced or creative".into(),
                ));
            }
            let level = args.join(" ");
            Accuracy::parse_level(&level)
                .map(ReplCommand::Accuracy)
                .ok_or_else(|| AppError::InvalidCommand(format!("Unknown accuracy level: {level}")))
        }
        "\\explain" | "\\e" => Ok(ReplCommand::Explain),
        "\\run" | "\\r" => Ok(ReplCommand::Run),
        "\\about" => Ok(ReplCommand::About),
        "\\home" => Ok(ReplCommand::Home),
        "\\clear" => Ok(ReplCommand::Clear),
        _ => Ok(ReplCommand::Unknown(command.to_string())),
    }
}

/// Apply one command to the session and return what to print
pub(crate) fn apply(
    command: ReplCommand,
    session: &mut Session,
    generator: &dyn Generator,
    database: &Database,
    use_color: bool,
) -> Result<String, AppError> {
    match command {
        ReplCommand::Question(text) => {
            session.navigate(Page::Home);
            session.set_question(&text);
            session.generate(generator);
        }
        ReplCommand::Generate => {
            session.navigate(Page::Home);
            session.generate(generator);
        }
        ReplCommand::Help => return Ok(HELP.to_string()),
        ReplCommand::Quit => return Ok(String::new()),
        ReplCommand::Samples => return Ok(samples_table(use_color)),
        ReplCommand::Sample(number) => {
            session.select_sample(number)?;
            session.navigate(Page::Home);
        }
        ReplCommand::Accuracy(accuracy) => session.set_accuracy(accuracy),
        ReplCommand::Explain => {
            if !session.has_sql() {
                return Ok("No SQL has been generated yet.".to_string());
            }
            session.toggle_explanation();
            session.navigate(Page::Home);
        }
        ReplCommand::Run => {
            if !session.execute(database) {
                return Ok("No SQL has been generated yet.".to_string());
            }
            session.navigate(Page::Home);
        }
        ReplCommand::About => session.navigate(Page::About),
        ReplCommand::Home => session.navigate(Page::Home),
        ReplCommand::Clear => session.clear(),
        ReplCommand::Unknown(name) => {
            return Err(AppError::InvalidCommand(format!(
                "Unknown command: {name} (type \\help for a list)"
            )));
        }
    }
    Ok(render_page(session, use_color))
}

/// Run the interactive loop until `\quit` or end of input
pub(crate) fn run(
    session: &mut Session,
    generator: &dyn Generator,
    database: &Database,
    use_color: bool,
) -> Result<(), AppError> {
    let mut editor = DefaultEditor::new()?;
    tracing::debug!(
        model = generator.name(),
        database = %database.path().display(),
        "starting interactive session"
    );

    println!("{}", render_page(session, use_color));
    println!("  Type a question, or \\help for commands.\n");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.trim());
                let output = parse_line(&line).and_then(|command| {
                    if command == ReplCommand::Quit {
                        return Ok(None);
                    }
                    apply(command, session, generator, database, use_color).map(Some)
                });
                match output {
                    Ok(Some(text)) => println!("{text}"),
                    Ok(None) => break,
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use \\quit or \\q to exit");
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::StubGenerator;

    fn demo_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("placement.db"));
        db.initialize(true).unwrap();
        (dir, db)
    }

    #[test]
    fn plain_text_is_a_question() {
        assert_eq!(
            parse_line("  Find companies in the Finance sector.  ").unwrap(),
            ReplCommand::Question("Find companies in the Finance sector.".to_string())
        );
    }

    #[test]
    fn meta_commands_and_aliases() {
        assert_eq!(parse_line("\\q").unwrap(), ReplCommand::Quit);
        assert_eq!(parse_line("\\help").unwrap(), ReplCommand::Help);
        assert_eq!(parse_line("\\run").unwrap(), ReplCommand::Run);
        assert_eq!(parse_line("\\e").unwrap(), ReplCommand::Explain);
        assert_eq!(parse_line("\\sample 3").unwrap(), ReplCommand::Sample(3));
        assert_eq!(
            parse_line("\\accuracy creative").unwrap(),
            ReplCommand::Accuracy(Accuracy::Creative)
        );
        assert_eq!(
            parse_line("\\bogus").unwrap(),
            ReplCommand::Unknown("\\bogus".to_string())
        );
    }

    #[test]
    fn meta_command_argument_errors() {
        assert!(parse_line("\\sample").is_err());
        assert!(parse_line("\\sample two").is_err());
        assert!(parse_line("\\accuracy").is_err());
        assert!(parse_line("\\accuracy wild").is_err());
        assert!(parse_line("   ").is_err());
    }

    #[test]
    fn question_then_run_renders_results() {
        let (_dir, db) = demo_db();
        let generator =
            StubGenerator::replying("SELECT name FROM companies WHERE sector = 'Finance';");
        let mut session = Session::new(Accuracy::Balanced, true);

        let page = apply(
            ReplCommand::Question("Find companies in the Finance sector.".to_string()),
            &mut session,
            &generator,
            &db,
            false,
        )
        .unwrap();
        assert!(page.contains("Generated SQL Query"));

        let page = apply(ReplCommand::Run, &mut session, &generator, &db, false).unwrap();
        assert!(page.contains("Goldman Sachs"));
    }

    #[test]
    fn run_without_sql_explains_why() {
        let (_dir, db) = demo_db();
        let generator = StubGenerator::replying("SELECT 1;");
        let mut session = Session::new(Accuracy::Balanced, true);
        let text = apply(ReplCommand::Run, &mut session, &generator, &db, false).unwrap();
        assert_eq!(text, "No SQL has been generated yet.");
        assert!(session.result().is_none());
    }

    #[test]
    fn sample_then_generate_uses_sample_question() {
        let (_dir, db) = demo_db();
        let generator = StubGenerator::replying("SELECT COUNT(*) FROM student;");
        let mut session = Session::new(Accuracy::Balanced, true);

        let page = apply(ReplCommand::Sample(1), &mut session, &generator, &db, false).unwrap();
        assert!(page.contains("Simple → Count students"));
        assert_eq!(generator.calls(), 0);

        apply(ReplCommand::Generate, &mut session, &generator, &db, false).unwrap();
        let prompts = generator.prompts.borrow();
        assert!(prompts[0].request.starts_with("How many students are in the database?"));
    }

    #[test]
    fn invalid_sample_is_an_error() {
        let (_dir, db) = demo_db();
        let generator = StubGenerator::replying("SELECT 1;");
        let mut session = Session::new(Accuracy::Balanced, true);
        let err = apply(ReplCommand::Sample(0), &mut session, &generator, &db, false).unwrap_err();
        assert!(matches!(err, AppError::InvalidSample { index: 0, .. }));
    }

    #[test]
    fn about_and_home_navigation() {
        let (_dir, db) = demo_db();
        let generator = StubGenerator::replying("SELECT 1;");
        let mut session = Session::new(Accuracy::Balanced, true);

        let page = apply(ReplCommand::About, &mut session, &generator, &db, false).unwrap();
        assert!(page.contains("Database Schema"));
        assert_eq!(session.page(), Page::About);

        apply(ReplCommand::Home, &mut session, &generator, &db, false).unwrap();
        assert_eq!(session.page(), Page::Home);
    }

    #[test]
    fn unknown_command_is_reported() {
        let (_dir, db) = demo_db();
        let generator = StubGenerator::replying("SELECT 1;");
        let mut session = Session::new(Accuracy::Balanced, true);
        let err = apply(
            ReplCommand::Unknown("\\nope".to_string()),
            &mut session,
            &generator,
            &db,
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("\\nope"));
    }
}
