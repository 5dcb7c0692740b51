// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::{history_path, Config};
use crate::fmt::{error_string, to_ansi_string};
use crate::session::Session;
use crate::KeycalcHelper;
use eyre::{Result, WrapErr};
use rustyline::{config::Configurer, error::ReadlineError, CompletionType, Editor};
use std::io::{BufRead, ErrorKind};
use std::path::Path;

pub const HELP_TEXT: &str = "Type keys separated by spaces, e.g. `2 + 3 * 4 =`.
Numbers are typed digit by digit; `back` deletes a digit, `neg` flips the sign.
Operators: + - * / ^ root sq cube sqrt cbrt sin cos tan pi e =, or their symbols.
`C` clears. `program` shows the key log, `save FILE` and `load FILE` store and
replay it. To quit, type `quit` or press Ctrl+D.";

/// Words that are handled by the REPL instead of the calculator.
pub const COMMANDS: &[&str] = &["help", "quit", "exit", ":q", "program", "save", "load"];

pub enum Outcome {
    Print(String),
    Quit,
}

/// Runs one line of input against the session.
pub fn execute(session: &mut Session, config: &Config, line: &str) -> Result<Outcome> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match command {
        "help" => Ok(Outcome::Print(HELP_TEXT.to_owned())),
        "quit" | "exit" | ":q" => Ok(Outcome::Quit),
        "program" => session.program_json().map(Outcome::Print),
        "save" | "load" if argument.is_empty() => {
            Err(eyre::eyre!("Usage: {} FILE", command))
        }
        "save" => {
            session.save(Path::new(argument))?;
            Ok(Outcome::Print(format!("Saved to {}", argument)))
        }
        "load" => {
            session.load(Path::new(argument))?;
            Ok(Outcome::Print(to_ansi_string(config, session)))
        }
        _ => {
            session.run_line(line);
            Ok(Outcome::Print(to_ansi_string(config, session)))
        }
    }
}

/// Runs every line of `f` through one session. A last line without a
/// trailing newline still runs.
pub fn noninteractive<T: BufRead>(mut f: T, config: &Config) -> Result<()> {
    let mut session = Session::new();
    let mut line = String::new();
    loop {
        if f.read_line(&mut line).wrap_err("Failed to read input")? == 0 {
            return Ok(());
        }
        match execute(&mut session, config, &line) {
            Ok(Outcome::Print(text)) => println!("{}", text),
            Ok(Outcome::Quit) => return Ok(()),
            Err(err) => println!("{}", error_string(config, &err)),
        }
        line.clear();
    }
}

pub fn interactive(config: Config) -> Result<()> {
    let mut session = Session::new();
    let mut rl = Editor::<KeycalcHelper>::new();
    let helper = KeycalcHelper::new(session.calculator().table());
    rl.set_helper(Some(helper));
    rl.set_completion_type(CompletionType::List);

    let hpath = if config.keycalc.history {
        history_path()
    } else {
        None
    };
    if let Some(ref path) = hpath {
        match rl.load_history(path) {
            // Ignore file not found errors.
            Err(ReadlineError::Io(ref err)) if err.kind() == ErrorKind::NotFound => (),
            Err(err) => eprintln!("Loading history failed: {}", err),
            Ok(()) => (),
        };
    }

    let save_history = |rl: &mut Editor<KeycalcHelper>| {
        if let Some(ref path) = hpath {
            if let Some(parent) = path.parent() {
                // ignore error - if this fails, the next line will as well.
                let _ = std::fs::create_dir_all(parent);
            }
            rl.save_history(path).unwrap_or_else(|e| {
                eprintln!("Saving history failed: {}", e);
            });
        }
    };

    loop {
        let readline = rl.readline(&config.keycalc.prompt);
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                match execute(&mut session, &config, &line) {
                    Ok(Outcome::Print(text)) => println!("{}", text),
                    Ok(Outcome::Quit) => {
                        save_history(&mut rl);
                        break;
                    }
                    Err(err) => println!("{}", error_string(&config, &err)),
                }
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => {
                save_history(&mut rl);
                break;
            }
            Err(err) => {
                println!("{:?}", eyre::eyre!(err).wrap_err("Readline"));
                break;
            }
        }
    }

    Ok(())
}
