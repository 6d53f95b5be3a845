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

use anyhow::{Context, Result};
use console::{Style, Term};
use correct_horse::report::Report;

pub struct DisplayOptions {
    pub color_support: bool,
}

impl DisplayOptions {
    pub fn detect(no_color: bool) -> Self {
        Self {
            color_support: !no_color && detect_color_support(),
        }
    }
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

fn header_style(options: &DisplayOptions) -> Style {
    if options.color_support {
        Style::new().bold()
    } else {
        Style::new()
    }
}

fn separator_style(options: &DisplayOptions) -> Style {
    if options.color_support {
        Style::new().dim()
    } else {
        Style::new()
    }
}

/// Writes `report` to stdout. Styling never changes the plain text layout.
pub fn display_report(report: &Report, options: &DisplayOptions) -> Result<()> {
    let term = Term::stdout();
    let mut lines = report.lines().into_iter();

    term.write_line("").context("Failed to write report")?;

    if let Some(header) = lines.next() {
        term.write_line(&header_style(options).apply_to(header.as_str()).to_string())
            .context("Failed to write report header")?;
    }
    if let Some(separator) = lines.next() {
        term.write_line(&separator_style(options).apply_to(separator.as_str()).to_string())
            .context("Failed to write report separator")?;
    }
    for line in lines {
        term.write_line(&line).context("Failed to write report")?;
    }

    Ok(())
}
