mod wizard;

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use referral_flow::{FieldValues, Screen, Session};
use wizard::{Verbosity, WizardPresenter, prompts_for};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Field values per screen, keyed by `Screen::key()`.
type ScreenAnswers = BTreeMap<String, FieldValues>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "IME priority referral intake wizard",
    long_about = "Walks a referral through the branching intake screens and renders the plain-text summary"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the referral wizard interactively in a text shell.
    Wizard {
        /// Optional JSON file of pre-seeded field values per screen.
        #[arg(long, value_name = "ANSWERS")]
        answers: Option<PathBuf>,
        /// Show verbose output (percentages, recorded answers, field ids).
        #[arg(long, alias = "debug")]
        verbose: bool,
        /// Copy the final summary to the clipboard.
        #[arg(long)]
        copy: bool,
        /// Also write the final summary to a file.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Drive the whole flow from a JSON answer file and print the summary.
    Replay {
        /// JSON file of field values per screen (keys: start, cancellation, ...).
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
        /// Also write the summary to a file.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Wizard {
            answers,
            verbose,
            copy,
            out,
        } => run_wizard(answers, verbose, copy, out),
        Command::Replay { answers, out } => run_replay(answers, out),
    }
}

enum ScreenAction {
    Submit,
    Back,
    Exit,
}

fn run_wizard(
    answers_path: Option<PathBuf>,
    verbose: bool,
    copy: bool,
    out: Option<PathBuf>,
) -> CliResult<()> {
    let seeded = match answers_path {
        Some(path) => load_screen_answers(&path)?,
        None => ScreenAnswers::new(),
    };

    let mut presenter = WizardPresenter::new(Verbosity::from_verbose(verbose));
    let mut session = Session::new();
    let mut focus: Option<&'static str> = None;
    presenter.show_header();

    loop {
        if session.current() == Screen::Summary {
            let summary = session.summary_text();
            println!();
            println!("{}", summary);
            if copy {
                copy_to_clipboard(&summary);
            }
            if let Some(path) = &out {
                fs::write(path, &summary)?;
                println!("Summary written to {}", path.display());
            }
            return Ok(());
        }

        presenter.show_screen(session.current(), &session.progress());
        let mut fields = seeded
            .get(session.current().key())
            .cloned()
            .unwrap_or_default();
        // A field that just failed validation must be asked again, even when
        // its value came from the seed file.
        if let Some(field_id) = focus.take() {
            fields.remove(field_id);
        }

        match prompt_screen(session.current(), &mut fields, &presenter)? {
            ScreenAction::Exit => return Err("wizard aborted by user".into()),
            ScreenAction::Back => {
                if session.back().is_none() {
                    presenter.show_no_back();
                }
            }
            ScreenAction::Submit => match session.advance(&fields) {
                Ok(_) => presenter.show_recorded(session.answers()),
                Err(err) => {
                    presenter.show_validation_error(&err);
                    focus = Some(err.field);
                }
            },
        }
    }
}

fn prompt_screen(
    screen: Screen,
    fields: &mut FieldValues,
    presenter: &WizardPresenter,
) -> CliResult<ScreenAction> {
    let prompts = prompts_for(screen);
    if prompts.is_empty() {
        println!("Press Enter to complete ('back' to return).");
        return match read_command()? {
            Some(command) => Ok(command),
            None => Ok(ScreenAction::Submit),
        };
    }

    for prompt in &prompts {
        if !prompt.applies(fields) {
            continue;
        }
        // Seeded values answer their prompt silently.
        if fields.trimmed(prompt.id).is_some() {
            continue;
        }
        loop {
            presenter.show_prompt(prompt);
            let input = match read_line()? {
                Some(line) => line,
                None => return Ok(ScreenAction::Exit),
            };
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("exit") {
                return Ok(ScreenAction::Exit);
            }
            if trimmed.eq_ignore_ascii_case("back") {
                return Ok(ScreenAction::Back);
            }
            if trimmed.is_empty() {
                if prompt.required {
                    presenter.show_required_error();
                    continue;
                }
                break;
            }
            if !prompt.choices.is_empty()
                && !prompt.choices.iter().any(|choice| *choice == trimmed)
            {
                presenter.show_choice_error(&prompt.choices);
                continue;
            }
            fields.set(prompt.id, trimmed);
            break;
        }
    }
    Ok(ScreenAction::Submit)
}

fn read_command() -> CliResult<Option<ScreenAction>> {
    let line = match read_line()? {
        Some(line) => line,
        None => return Ok(Some(ScreenAction::Exit)),
    };
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("exit") {
        Ok(Some(ScreenAction::Exit))
    } else if trimmed.eq_ignore_ascii_case("back") {
        Ok(Some(ScreenAction::Back))
    } else {
        Ok(None)
    }
}

/// Reads one line from stdin; `None` means the stream is closed.
fn read_line() -> CliResult<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

fn run_replay(answers_path: PathBuf, out: Option<PathBuf>) -> CliResult<()> {
    let sections = load_screen_answers(&answers_path)?;
    let mut session = Session::new();

    while session.current() != Screen::Summary {
        let key = session.current().key();
        let fields = sections.get(key).cloned().unwrap_or_default();
        session
            .advance(&fields)
            .map_err(|err| format!("{} screen: {}", key, err))?;
    }

    let summary = session.summary_text();
    println!("{}", summary);
    if let Some(path) = &out {
        fs::write(path, &summary)?;
    }
    Ok(())
}

fn load_screen_answers(path: &Path) -> CliResult<ScreenAnswers> {
    let contents = fs::read_to_string(path)?;
    let sections: ScreenAnswers = serde_json::from_str(&contents)?;
    Ok(sections)
}

fn copy_to_clipboard(text: &str) {
    // Clipboard failures are reported, never fatal.
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => println!("Summary copied to clipboard."),
        Err(err) => eprintln!("Clipboard unavailable: {}", err),
    }
}
