// This file is part of Correct Horse.
//
// Copyright (c) 2026  The Correct Horse contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use correct_horse::{Report, StrengthLevel, Wordlist};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "correct-horse",
    version,
    about = "Memorable passphrases with entropy and crack-time estimates"
)]
struct Cli {
    /// Word list file, one word per line
    #[arg(value_name = "WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Separate words using CamelCase
    #[arg(short, long)]
    camelcase: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Never style the table
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = match cli.wordlist {
        Some(path) if path.exists() => path,
        _ => anyhow::bail!(
            "Password list file as argument. Consider using /usr/share/dict/words."
        ),
    };

    let wordlist = Wordlist::load(&path)?;

    let mut rng = rand::rng();
    let report = Report::build(&wordlist, &StrengthLevel::ALL, cli.camelcase, &mut rng)
        .with_context(|| format!("Cannot generate passphrases from {}", path.display()))?;

    ui::display_report(&report, &ui::DisplayOptions::detect(cli.no_color))
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
