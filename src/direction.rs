use once_cell::sync::Lazy;

use crate::board::{BOARD_SIZE, NUM_SQUARES};

/// One of the 8 compass directions a line can be scanned along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

pub const DIRECTIONS: [Direction; 8] = [
    Direction { dx: -1, dy: -1 },
    Direction { dx: 0, dy: -1 },
    Direction { dx: 1, dy: -1 },
    Direction { dx: -1, dy: 0 },
    Direction { dx: 1, dy: 0 },
    Direction { dx: -1, dy: 1 },
    Direction { dx: 0, dy: 1 },
    Direction { dx: 1, dy: 1 },
];

/// `RAYS[cell][dir]` lists the cells walked from `cell` along `DIRECTIONS[dir]`,
/// nearest first, stopping at the board edge. The origin cell is excluded.
static RAYS: Lazy<Vec<[Vec<u8>; 8]>> = Lazy::new(|| (0..NUM_SQUARES).map(build_rays).collect());

/// Cells along `direction` from `index`, nearest first.
pub fn ray(index: usize, direction: usize) -> &'static [u8] {
    &RAYS[index][direction]
}

fn build_rays(index: usize) -> [Vec<u8>; 8] {
    let row = (index / BOARD_SIZE) as i32;
    let col = (index % BOARD_SIZE) as i32;

    DIRECTIONS.map(|Direction { dx, dy }| {
        let mut cells = Vec::new();
        let mut x = col + dx as i32;
        let mut y = row + dy as i32;
        while in_bounds(y, x) {
            cells.push((y as usize * BOARD_SIZE + x as usize) as u8);
            x += dx as i32;
            y += dy as i32;
        }
        cells
    })
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
