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

use crate::crack::{AttackerModel, estimate};
use crate::entropy::StrengthLevel;
use crate::error::Result;
use crate::generator::{Passphrase, generate};
use crate::wordlist::Wordlist;
use rand::Rng;
use std::iter;
use zeroize::Zeroizing;

const COLUMNS: usize = 5;

pub const HEADER: [&str; COLUMNS] = [
    "Entropy",
    AttackerModel::Online.label(),
    AttackerModel::Offline.label(),
    AttackerModel::OfflineNsa.label(),
    "Password",
];

/// Spaces written after each column but the last.
const GAPS: [usize; COLUMNS - 1] = [1, 2, 2, 3];

/// Extra separator length on top of the column widths; the total of `GAPS`.
pub const SEPARATOR_PADDING: usize = 8;

/// One passphrase per requested strength level with its crack times.
pub struct Report {
    rows: Vec<ReportRow>,
}

struct ReportRow {
    passphrase: Passphrase,
    cells: [String; COLUMNS - 1],
}

impl ReportRow {
    fn cell(&self, column: usize) -> &str {
        if column == COLUMNS - 1 {
            self.passphrase.as_str()
        } else {
            &self.cells[column]
        }
    }
}

impl Report {
    /// Generates every row up front so a failure leaves nothing half printed.
    pub fn build<R: Rng + ?Sized>(
        wordlist: &Wordlist,
        levels: &[StrengthLevel],
        camel_case: bool,
        rng: &mut R,
    ) -> Result<Self> {
        let rows = levels
            .iter()
            .map(|&strength| -> Result<ReportRow> {
                let passphrase = generate(wordlist, strength, camel_case, &mut *rng)?;
                let crack = estimate(passphrase.entropy_bits());

                let mut cells: [String; COLUMNS - 1] = Default::default();
                cells[0] = passphrase.entropy_bits().to_string();
                for (cell, model) in cells[1..].iter_mut().zip(AttackerModel::ALL) {
                    *cell = crack.get(model).to_owned();
                }

                Ok(ReportRow { passphrase, cells })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// Widest value per column, header included, in characters.
    pub fn column_widths(&self) -> [usize; COLUMNS] {
        let mut widths = HEADER.map(|title| title.chars().count());
        for row in &self.rows {
            for (column, width) in widths.iter_mut().enumerate() {
                *width = (*width).max(row.cell(column).chars().count());
            }
        }
        widths
    }

    pub fn separator_len(&self) -> usize {
        self.column_widths().iter().sum::<usize>() + SEPARATOR_PADDING
    }

    /// Header, separator, then one line per strength level, without newlines.
    ///
    /// Row lines contain passphrases and are wiped on drop.
    pub fn lines(&self) -> Vec<Zeroizing<String>> {
        let widths = self.column_widths();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(render_line(&HEADER, &widths));
        lines.push(Zeroizing::new("-".repeat(self.separator_len())));
        for row in &self.rows {
            let cells: [&str; COLUMNS] = std::array::from_fn(|column| row.cell(column));
            lines.push(render_line(&cells, &widths));
        }
        lines
    }
}

fn render_line(cells: &[&str; COLUMNS], widths: &[usize; COLUMNS]) -> Zeroizing<String> {
    let capacity = cells.iter().map(|cell| cell.len()).sum::<usize>()
        + widths.iter().sum::<usize>()
        + SEPARATOR_PADDING;
    let mut line = Zeroizing::new(String::with_capacity(capacity));

    for (column, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let padding = width.saturating_sub(cell.chars().count()) + GAPS.get(column).unwrap_or(&0);
        line.push_str(cell);
        line.extend(iter::repeat_n(' ', padding));
    }
    line
}

/// Builds the report for `levels` in the given order, leading blank line
/// included.
pub fn format_report<R: Rng + ?Sized>(
    wordlist: &Wordlist,
    levels: &[StrengthLevel],
    camel_case: bool,
    rng: &mut R,
) -> Result<Zeroizing<String>> {
    let report = Report::build(wordlist, levels, camel_case, rng)?;
    let lines = report.lines();

    let capacity = 1 + lines.iter().map(|line| line.len() + 1).sum::<usize>();
    let mut text = Zeroizing::new(String::with_capacity(capacity));
    text.push('\n');
    for line in &lines {
        text.push_str(line);
        text.push('\n');
    }
    Ok(text)
}
