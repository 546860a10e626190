use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four orthogonal movement directions on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Steps one cell from (x, y), returning `None` when the step would leave
    /// a grid of the given dimensions.
    pub fn offset(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.delta();
        let x = x as i64 + dx;
        let y = y as i64 + dy;
        if x < 0 || x >= width as i64 || y < 0 || y >= height as i64 {
            return None;
        }

        Some((x as usize, y as usize))
    }
}

/// One maze cell. A slope may be entered from any side but can only be left
/// along its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Open,
    Slope(Direction),
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(tile: char) -> Result<Tile, char> {
        match tile {
            '#' => Ok(Tile::Wall),
            '.' => Ok(Tile::Open),
            '^' => Ok(Tile::Slope(Direction::Up)),
            'v' => Ok(Tile::Slope(Direction::Down)),
            '<' => Ok(Tile::Slope(Direction::Left)),
            '>' => Ok(Tile::Slope(Direction::Right)),
            _ => Err(tile),
        }
    }
}

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("maze text contains no rows")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized tile '{tile}' at row {row}, column {column}")]
    UnknownTile {
        tile: char,
        row: usize,
        column: usize,
    },

    #[error("reading maze file: {0}")]
    Io(#[from] std::io::Error),
}

/// A rectangular maze of wall, open and slope tiles, stored row-major.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Maze {
    pub fn from_file(path: &Path) -> Result<Maze, MazeError> {
        fs::read_to_string(path)?.parse()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile(&self, x: usize, y: usize) -> Tile {
        self.tiles[y * self.width + x]
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(input: &str) -> Result<Maze, MazeError> {
        let mut width = 0;
        let mut height = 0;
        let mut tiles = Vec::new();

        for (row, line) in input.trim().lines().enumerate() {
            let mut found = 0;
            for (column, tile) in line.chars().enumerate() {
                let tile = Tile::try_from(tile)
                    .map_err(|tile| MazeError::UnknownTile { tile, row, column })?;
                tiles.push(tile);
                found += 1;
            }

            if row == 0 {
                width = found;
            } else if found != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if width == 0 {
            return Err(MazeError::Empty);
        }

        Ok(Maze {
            width,
            height,
            tiles,
        })
    }
}
