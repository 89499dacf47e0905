use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use super::app::{GameView, MoveSource};
use crate::game::{Board, COLS};

/// Reads one column choice per line.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        LineSource { reader }
    }
}

impl<R: BufRead> MoveSource for LineSource<R> {
    fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Plain-text board printer.
pub struct TextView<W> {
    out: W,
    clear_screen: bool,
    show_column_numbers: bool,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        TextView {
            out,
            clear_screen: false,
            show_column_numbers: true,
        }
    }

    /// Clear the terminal before every board.
    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Print `1 2 ... 7` under the board.
    pub fn show_column_numbers(mut self, enabled: bool) -> Self {
        self.show_column_numbers = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn column_footer() -> String {
    let mut footer: String = (1..=COLS).map(|col| format!("  {col} ")).collect();
    footer.push(' ');
    footer
}

impl<W: Write> GameView for TextView<W> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.out)?;
        writeln!(self.out)?;
        write!(self.out, "{board}")?;
        if self.show_column_numbers {
            writeln!(self.out, "{}", column_footer())?;
        }
        self.out.flush()
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }
}
