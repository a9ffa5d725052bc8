use std::fmt;

use crate::direction::{DIRECTIONS, ray};
use crate::types::Color;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// 8x8 Othello board, one optional disk per cell in row-major order.
///
/// Indices outside `0..64` are a caller bug and panic on the slice access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Color>; NUM_SQUARES],
}

impl Board {
    /// Creates the starting position:
    /// 27=black, 28=white, 35=white, 36=black.
    pub fn new() -> Self {
        let mut cells = [None; NUM_SQUARES];
        cells[27] = Some(Color::Black);
        cells[28] = Some(Color::White);
        cells[35] = Some(Color::White);
        cells[36] = Some(Color::Black);
        Self { cells }
    }

    pub fn from_cells(cells: [Option<Color>; NUM_SQUARES]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Option<Color> {
        self.cells[index]
    }

    /// A move is valid when the cell is empty and at least one direction
    /// brackets a run of opponent disks with a disk of `color`.
    pub fn is_valid_move(&self, index: usize, color: Color) -> bool {
        if self.cells[index].is_some() {
            return false;
        }
        (0..DIRECTIONS.len()).any(|dir| !self.bracketed(index, dir, color).is_empty())
    }

    /// Disks that playing `color` at `index` would flip, grouped by direction.
    /// Empty for an occupied cell or an illegal move.
    pub fn flips_for(&self, index: usize, color: Color) -> Vec<usize> {
        if self.cells[index].is_some() {
            return Vec::new();
        }
        (0..DIRECTIONS.len())
            .flat_map(|dir| self.bracketed(index, dir, color))
            .map(|&cell| cell as usize)
            .collect()
    }

    /// Places a disk and flips every bracketed run.
    /// Returns the flipped cells.
    ///
    /// Callers must have checked `is_valid_move(index, color)` first.
    pub fn apply_move(&mut self, index: usize, color: Color) -> Vec<usize> {
        debug_assert!(self.cells[index].is_none(), "cell {index} is occupied");

        let flips = self.flips_for(index, color);
        self.cells[index] = Some(color);
        for &cell in &flips {
            self.cells[cell] = Some(color);
        }
        flips
    }

    pub fn valid_moves(&self, color: Color) -> Vec<usize> {
        (0..NUM_SQUARES)
            .filter(|&index| self.is_valid_move(index, color))
            .collect()
    }

    pub fn has_valid_moves(&self, color: Color) -> bool {
        (0..NUM_SQUARES).any(|index| self.is_valid_move(index, color))
    }

    /// Returns `(black_count, white_count)`.
    pub fn tally(&self) -> (u8, u8) {
        self.cells
            .iter()
            .fold((0, 0), |(black, white), cell| match cell {
                Some(Color::Black) => (black + 1, white),
                Some(Color::White) => (black, white + 1),
                None => (black, white),
            })
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        self.cells.map(|cell| cell.map_or(0, Color::code))
    }

    /// Leading run of opponent disks along one direction that is closed by a
    /// disk of `color`. Empty when the run is missing, hits a gap or the edge.
    fn bracketed(&self, index: usize, dir: usize, color: Color) -> &'static [u8] {
        let line = ray(index, dir);
        let opponent = color.opponent();
        let run = line
            .iter()
            .take_while(|&&cell| self.cells[cell as usize] == Some(opponent))
            .count();

        match line.get(run) {
            Some(&end) if run > 0 && self.cells[end as usize] == Some(color) => &line[..run],
            _ => &[],
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for cell in row {
                let glyph = match cell {
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                    None => '.',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
