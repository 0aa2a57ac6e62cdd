use crate::board::{Board, Cell};
use crate::error::Result;
use crate::{Coords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

/// Upper half filled with the foreground colour, lower half shows the background.
const HALF_BLOCK: char = '▀';

const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };
const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const DEAD_SNAKE_COLOR: Color = Color::Rgb { r: 110, g: 110, b: 110 };
const EMPTY_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const TEXT_FG: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const TEXT_BG: Color = Color::Rgb { r: 20, g: 20, b: 20 };

/// Owns the terminal for the length of a game. Dropping it puts the
/// terminal back the way it was found.
pub struct TermManager {
    cols: TermInt,
    rows: TermInt,
    stdout: Stdout,
    // Top-left character of the board
    origin: Coords,
    current_banner: Option<Banner>,
}

struct Banner {
    top: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn setup() -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        let mut term = TermManager { cols, rows, stdout: stdout(), origin: (0, 0), current_banner: None };

        execute!(term.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(term.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;

        Ok(term)
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.cols, self.rows)
    }

    /// Centers a board of the given size on screen.
    pub fn fit_board(&mut self, width: TermInt, height: TermInt) {
        let board_rows = height / 2 + height % 2;
        self.origin = (self.cols.saturating_sub(width) / 2, self.rows.saturating_sub(board_rows) / 2);
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO)? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn draw_board(&mut self, board: &Board) -> Result<()> {
        for y in (0..board.height()).step_by(2) {
            self.draw_board_row(board, y)?;
        }

        Ok(())
    }

    /// Redraws the character holding `pos`, which also holds its vertical
    /// neighbour.
    pub fn draw_cell(&mut self, board: &Board, pos: Coords) -> Result<()> {
        self.draw_cell_with(board, pos, |_, cell| cell_color(cell))
    }

    /// Paints the body of a crashed snake grey.
    pub fn draw_dead_snake(&mut self, board: &Board, body: &[Coords]) -> Result<()> {
        let paint = |pos: Coords, cell: Cell| {
            if body.contains(&pos) { DEAD_SNAKE_COLOR } else { cell_color(cell) }
        };

        for pos in body {
            self.draw_cell_with(board, *pos, paint)?;
        }

        Ok(())
    }

    pub fn draw_score(&mut self, score: usize) -> Result<()> {
        let text = format!(" Score: {} ", score);
        self.print_text((0, 0), &text)
    }

    /// Shows `lines` centered in a full-width band across the middle of the
    /// screen. Replaces any banner already shown.
    pub fn show_banner(&mut self, board: &Board, lines: &[&str]) -> Result<()> {
        if self.current_banner.is_some() {
            self.hide_banner(board)?;
        }

        let height = lines.len() as TermInt;
        let top = self.rows.saturating_sub(height) / 2;
        let width = self.cols as usize;

        for (i, line) in lines.iter().enumerate() {
            let y = top + i as TermInt;
            if y >= self.rows {
                break;
            }

            let line: String = line.chars().take(width).collect();
            let padded_line = format!("{line: ^width$}", line = line, width = width);
            self.print_text((0, y), &padded_line)?;
        }

        self.current_banner = Some(Banner { top, height });
        self.flush()
    }

    pub fn hide_banner(&mut self, board: &Board) -> Result<()> {
        let banner = match self.current_banner.take() {
            Some(banner) => banner,
            None => return Ok(()),
        };

        for row in banner.top..(banner.top + banner.height).min(self.rows) {
            queue!(self.stdout, style::ResetColor, cursor::MoveTo(0, row), terminal::Clear(ClearType::CurrentLine))?;

            if let Some(board_row) = row.checked_sub(self.origin.1) {
                let y = board_row * 2;
                if y < board.height() {
                    self.draw_board_row(board, y)?;
                }
            }
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_cell_with<F>(&mut self, board: &Board, pos: Coords, paint: F) -> Result<()>
    where
        F: Fn(Coords, Cell) -> Color,
    {
        let (x, y) = pos;
        let top_y = y - y % 2;
        let upper = paint((x, top_y), board.get((x, top_y)));
        let lower = if top_y + 1 < board.height() {
            paint((x, top_y + 1), board.get((x, top_y + 1)))
        } else {
            Color::Reset
        };

        let (ox, oy) = self.origin;
        queue!(
            self.stdout,
            cursor::MoveTo(ox + x, oy + top_y / 2),
            style::SetForegroundColor(upper),
            style::SetBackgroundColor(lower),
            style::Print(HALF_BLOCK)
        )?;

        Ok(())
    }

    fn draw_board_row(&mut self, board: &Board, y: TermInt) -> Result<()> {
        for x in 0..board.width() {
            self.draw_cell(board, (x, y))?;
        }

        Ok(())
    }

    fn print_text(&mut self, pos: Coords, text: &str) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(TEXT_FG),
            style::SetBackgroundColor(TEXT_BG),
            style::Print(text),
            style::ResetColor
        )?;

        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking)?;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => EMPTY_COLOR,
        Cell::Snake => SNAKE_COLOR,
        Cell::Food => FOOD_COLOR,
    }
}
