//! Text rendering of the pan table as source literals.
//!
//! Each line reads `(left, right), // x`. Values use the shortest decimal
//! that round-trips to the same `f64`, always with a fractional part, so
//! every value is a valid float literal as-is.

use std::fmt;
use std::io::{self, Write};

use crate::pan::{PanGains, PanLaw, PanPosition};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableLine {
    pub position: PanPosition,
    pub gains: PanGains,
}

impl fmt::Display for TableLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}, {:?}), // {}",
            self.gains.left,
            self.gains.right,
            self.position.value()
        )
    }
}

/// One line per position, hard left first.
pub fn lines() -> impl Iterator<Item = TableLine> {
    let law = PanLaw::TRACKER;
    PanPosition::iter().map(move |position| TableLine {
        position,
        gains: law.gains(position),
    })
}

/// Writes the full table and returns the number of lines written.
pub fn write_table<W: Write>(mut out: W) -> io::Result<usize> {
    let mut count = 0;
    for line in lines() {
        writeln!(out, "{line}")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

pub fn render() -> String {
    let mut text = String::new();
    for line in lines() {
        text.push_str(&line.to_string());
        text.push('\n');
    }
    text
}
