use std::fmt::Write;

use anyhow::{bail, Result};
use pad::PadStr;

pub struct Table {
    ncol: usize,
    rows: Vec<Vec<String>>,
    headless: bool,
}

impl Table {
    pub fn with_capacity(size: usize, headless: bool) -> Table {
        Table {
            ncol: 0,
            rows: Vec::with_capacity(size),
            headless,
        }
    }

    /// The first row added is the title row, dropped when headless.
    pub fn add(&mut self, row: Vec<String>) -> Result<()> {
        if self.ncol == 0 {
            self.ncol = row.len();
            if self.headless {
                return Ok(());
            }
        } else if row.len() != self.ncol {
            bail!("unexpected row len {}, expect {}", row.len(), self.ncol);
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn render(self) -> String {
        let mut pads = vec![0; self.ncol];
        for row in self.rows.iter() {
            for (coli, cell) in row.iter().enumerate() {
                let size = console::measure_text_width(cell);
                if size > pads[coli] {
                    pads[coli] = size;
                }
            }
        }

        let mut split = String::from("+");
        for pad in pads.iter() {
            for _ in 0..*pad + 2 {
                split.push('-');
            }
            split.push('+');
        }

        let mut out = String::new();
        for (rowi, row) in self.rows.into_iter().enumerate() {
            if rowi == 0 {
                let _ = writeln!(out, "{split}");
            }
            out.push('|');
            for (coli, cell) in row.into_iter().enumerate() {
                let pad = pads[coli];
                let text = cell.pad_to_width_with_alignment(pad, pad::Alignment::Left);
                let _ = write!(out, " {text} |");
            }
            out.push('\n');

            if !self.headless && rowi == 0 {
                let _ = writeln!(out, "{split}");
            }
        }

        let _ = writeln!(out, "{split}");
        out
    }

    pub fn show(self) {
        print!("{}", self.render());
    }
}
