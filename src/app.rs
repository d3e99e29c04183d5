use std::fs;

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::model::{GeminiClient, Generator};
use crate::output::{
    exec_json, render_about, render_outcome, render_page, result_csv, samples_csv, samples_json,
    samples_table, session_json,
};
use crate::session::{Session, repl};
use crate::sql::{Database, QueryOutcome};

/// Whether the page a command displayed carries an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageStatus {
    Clean,
    Error,
}

impl PageStatus {
    fn from_error(has_error: bool) -> Self {
        if has_error {
            PageStatus::Error
        } else {
            PageStatus::Clean
        }
    }
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) generator: &'a dyn Generator,
    pub(crate) database: &'a Database,
    pub(crate) use_color: bool,
}

fn new_session(ctx: &CommandContext<'_>) -> Session {
    Session::new(ctx.cli.default_accuracy(), ctx.cli.normalize_salary())
}

fn handle_ask(question: &str, execute: bool, ctx: &CommandContext<'_>) -> PageStatus {
    let mut session = new_session(ctx);
    session.set_question(question);
    session.generate(ctx.generator);
    if execute {
        session.execute(ctx.database);
    }

    if ctx.cli.json {
        println!("{}", session_json(&session));
    } else if ctx.cli.csv
        && let Some(QueryOutcome::Rows(result)) = session.result()
    {
        print!("{}", result_csv(result));
    } else {
        println!("{}", render_page(&session, ctx.use_color));
    }
    PageStatus::from_error(session.has_error())
}

fn handle_exec(sql: &str, ctx: &CommandContext<'_>) -> PageStatus {
    let outcome = ctx.database.execute_to_outcome(sql);
    if ctx.cli.json {
        println!("{}", exec_json(sql, &outcome));
    } else if ctx.cli.csv
        && let QueryOutcome::Rows(result) = &outcome
    {
        print!("{}", result_csv(result));
    } else {
        println!("{}", render_outcome(&outcome, ctx.use_color));
    }
    PageStatus::from_error(outcome.is_failure())
}

fn handle_samples(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", samples_json());
    } else if ctx.cli.csv {
        print!("{}", samples_csv());
    } else {
        println!("{}", samples_table(ctx.use_color));
    }
}

fn handle_init_db(force: bool, empty: bool, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let path = ctx.database.path();
    if path.exists() {
        if !force {
            return Err(AppError::DatabaseExists {
                path: path.to_path_buf(),
            });
        }
        fs::remove_file(path).map_err(|source| AppError::RemoveDatabase {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(database = %path.display(), "removed existing database");
    }

    ctx.database.initialize(!empty)?;
    let contents = if empty { "empty tables" } else { "sample data" };
    println!("Created {} with {contents}.", path.display());
    Ok(())
}

pub(crate) fn handle_command(
    command: Option<&Commands>,
    ctx: &CommandContext<'_>,
) -> Result<PageStatus, AppError> {
    match command {
        None => {
            let mut session = new_session(ctx);
            repl::run(&mut session, ctx.generator, ctx.database, ctx.use_color)?;
            Ok(PageStatus::Clean)
        }
        Some(Commands::Ask { question, execute }) => Ok(handle_ask(question, *execute, ctx)),
        Some(Commands::Exec { sql }) => Ok(handle_exec(sql, ctx)),
        Some(Commands::Samples) => {
            handle_samples(ctx);
            Ok(PageStatus::Clean)
        }
        Some(Commands::About) => {
            println!("{}", render_about(ctx.use_color));
            Ok(PageStatus::Clean)
        }
        Some(Commands::InitDb { force, empty }) => {
            handle_init_db(*force, *empty, ctx)?;
            Ok(PageStatus::Clean)
        }
    }
}

/// Build the model client and database from the merged options and run
pub(crate) fn run(cli: &Cli) -> Result<PageStatus, AppError> {
    let generator = GeminiClient::new(
        cli.api_base_url(),
        cli.model_name(),
        cli.api_key.clone(),
        cli.timeout(),
    );
    let database = Database::new(cli.database_path());
    tracing::debug!(
        model = cli.model_name(),
        database = %database.path().display(),
        "resolved options"
    );

    let ctx = CommandContext {
        cli,
        generator: &generator,
        database: &database,
        use_color: cli.use_color(),
    };
    handle_command(cli.command.as_ref(), &ctx)
}
