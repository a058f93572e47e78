//! Presents a palette frame buffer on the terminal
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use spin3d_core::{ColorIndex, FrameBuffer, Surface};
use std::io::Write;

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '▀';

/// Map a palette index to one of the terminal's 16 standard colors
pub fn palette_color(color: ColorIndex) -> Color {
    Color::AnsiValue(color.index())
}

/// Scales a frame buffer onto a grid of terminal cells, two pixel rows per
/// cell, using nearest-neighbour sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPresenter {
    cols: u16,
    rows: u16,
}

impl TerminalPresenter {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Top and bottom pixel colors shown in the cell at (`col`, `row`).
    pub fn cell(&self, frame: &FrameBuffer, col: u16, row: u16) -> (ColorIndex, ColorIndex) {
        let sub_rows = u64::from(self.rows) * 2;
        let x = u64::from(col) * u64::from(frame.width()) / u64::from(self.cols.max(1));
        let sample = |sub_row: u64| {
            let y = sub_row * u64::from(frame.height()) / sub_rows.max(1);
            frame
                .get(x as i32, y as i32)
                .unwrap_or_else(|| frame.background())
        };
        let top = u64::from(row) * 2;
        (sample(top), sample(top + 1))
    }

    pub fn draw<W: Write>(&self, frame: &FrameBuffer, writer: &mut W) -> std::io::Result<()> {
        let mut current: Option<(ColorIndex, ColorIndex)> = None;

        for row in 0..self.rows {
            writer.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let (top, bottom) = self.cell(frame, col, row);
                if current != Some((top, bottom)) {
                    writer.queue(SetForegroundColor(palette_color(top)))?;
                    writer.queue(SetBackgroundColor(palette_color(bottom)))?;
                    current = Some((top, bottom));
                }
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
