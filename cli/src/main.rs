// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Arg, ArgAction, Command};
use eyre::{Result, WrapErr};
use std::fs::File;
use std::io::{stdin, BufReader};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use keycalc::fmt::error_string;
use keycalc::repl::{self, Outcome};
use keycalc::{config, session::Session};

fn main() -> Result<ExitCode> {
    let matches = Command::new("keycalc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Keycalc Contributors")
        .about("Button-press calculator that shows what it computes")
        .arg(
            Arg::new("KEYS")
                .help("Lines of key presses, such as \"2 + 3 * 4 =\". If no arguments are provided, an interactive session will start.")
                .num_args(..)
                .required(false),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Reads key presses from a file, or from stdin if given `-`"),
        )
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .help("Prints a path to the config file, then exits")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("config")
                .short('c')
                .num_args(1)
                .long("config").action(ArgAction::Set).help("Set path to config.toml")
        )
        .get_matches();

    color_eyre::install()?;
    // KEYCALC_LOG controls engine events; warnings only by default.
    let filter = EnvFilter::try_from_env("KEYCALC_LOG").or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let config = config::read_config(matches.get_one::<String>("config").map(|s| &**s))?;

    if matches.get_flag("config-path") {
        println!("{}", config::config_path("config.toml")?.display());
        Ok(ExitCode::SUCCESS)
    } else if let Some(filename) = matches.get_one::<String>("file") {
        match &filename[..] {
            "-" => {
                let stdin_handle = stdin();
                repl::noninteractive(stdin_handle.lock(), &config).map(|_| ExitCode::SUCCESS)
            }
            _ => {
                let file = File::open(filename)
                    .wrap_err(format!("Failed to open input file `{filename}`"))?;
                repl::noninteractive(BufReader::new(file), &config)
                    .map(|_| ExitCode::SUCCESS)
            }
        }
    } else if let Some(lines) = matches.get_many::<String>("KEYS") {
        let mut session = Session::new();
        let mut exit_code = ExitCode::SUCCESS;
        for line in lines {
            println!("> {}", line);
            match repl::execute(&mut session, &config, line) {
                Ok(Outcome::Print(text)) => println!("{}", text),
                Ok(Outcome::Quit) => break,
                Err(err) => {
                    println!("{}", error_string(&config, &err));
                    exit_code = ExitCode::FAILURE;
                }
            }
        }
        Ok(exit_code)
    } else {
        repl::interactive(config).map(|_| ExitCode::SUCCESS)
    }
}
