//! Tile symbols and the normalized, floor-bordered tile grid.

use crate::error::RenderError;

/// One cell of the input map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    /// `' '` open floor (also the fallback for unknown symbols)
    #[default]
    Floor,
    /// `'#'` solid block
    Block,
    /// `'\'` diagonal face, solid lower-left unless flipped
    Backslash,
    /// `'/'` diagonal face, solid lower-right unless flipped
    Slash,
    /// `'>'` wedge pointing right
    WedgeRight,
    /// `'<'` wedge pointing left
    WedgeLeft,
    /// `'v'` wedge pointing down
    WedgeDown,
    /// `'^'` wedge pointing up
    WedgeUp,
}

impl Tile {
    pub fn from_symbol(symbol: char) -> Option<Tile> {
        match symbol {
            ' ' => Some(Tile::Floor),
            '#' => Some(Tile::Block),
            '\\' => Some(Tile::Backslash),
            '/' => Some(Tile::Slash),
            '>' => Some(Tile::WedgeRight),
            '<' => Some(Tile::WedgeLeft),
            'v' => Some(Tile::WedgeDown),
            '^' => Some(Tile::WedgeUp),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Floor => ' ',
            Tile::Block => '#',
            Tile::Backslash => '\\',
            Tile::Slash => '/',
            Tile::WedgeRight => '>',
            Tile::WedgeLeft => '<',
            Tile::WedgeDown => 'v',
            Tile::WedgeUp => '^',
        }
    }

    pub fn is_floor(self) -> bool {
        self == Tile::Floor
    }

    pub fn is_block(self) -> bool {
        self == Tile::Block
    }
}

/// The four cardinal neighbours of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub left: Tile,
    pub right: Tile,
    pub above: Tile,
    pub below: Tile,
}

/// Rectangular grid of tiles surrounded by a one-tile ring of floor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileGrid {
    rows: Vec<Vec<Tile>>,
}

impl TileGrid {
    /// Wrap already-normalized rows, checking the shape the renderer relies on.
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Self, RenderError> {
        let width = rows.first().map_or(0, Vec::len);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != width {
                return Err(RenderError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
        }

        let last_row = rows.len().saturating_sub(1);
        let last_col = width.saturating_sub(1);
        for (row, line) in rows.iter().enumerate() {
            for (col, &tile) in line.iter().enumerate() {
                let on_border = row == 0 || row == last_row || col == 0 || col == last_col;
                if on_border && !tile.is_floor() {
                    return Err(RenderError::MissingBorder {
                        row,
                        col,
                        symbol: tile.symbol(),
                    });
                }
            }
        }

        Ok(Self { rows })
    }

    /// Normalize raw map text lines into a bordered grid.
    ///
    /// Blank lines around the map are dropped, the common indentation and
    /// trailing whitespace are stripped, short lines are padded with floor,
    /// and a ring of floor is added on every side. Unknown symbols become
    /// floor with a warning.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let lines: Vec<&str> = lines.iter().map(|l| l.as_ref().trim_end()).collect();

        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let body = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Self::default(),
        };

        let indent = body
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);

        let trimmed: Vec<Vec<char>> = body
            .iter()
            .map(|l| l.chars().skip(indent).collect())
            .collect();
        let width = trimmed.iter().map(Vec::len).max().unwrap_or(0) + 2;

        let mut rows = Vec::with_capacity(trimmed.len() + 2);
        rows.push(vec![Tile::Floor; width]);
        for (line_no, symbols) in trimmed.iter().enumerate() {
            let mut row = vec![Tile::Floor; width];
            for (col, &symbol) in symbols.iter().enumerate() {
                row[col + 1] = match Tile::from_symbol(symbol) {
                    Some(tile) => tile,
                    None => {
                        log::warn!(
                            "unrecognized tile symbol {:?} at line {}, column {}; treating it as floor",
                            symbol,
                            line_no + 1,
                            col + 1
                        );
                        Tile::Floor
                    }
                };
            }
            rows.push(row);
        }
        rows.push(vec![Tile::Floor; width]);

        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Tile at a position, floor outside the grid.
    pub fn tile(&self, col: usize, row: usize) -> Tile {
        self.rows
            .get(row)
            .and_then(|line| line.get(col))
            .copied()
            .unwrap_or(Tile::Floor)
    }

    pub fn neighbors(&self, col: usize, row: usize) -> Neighbors {
        let before = |v: usize| v.checked_sub(1);
        Neighbors {
            left: before(col).map_or(Tile::Floor, |c| self.tile(c, row)),
            right: self.tile(col + 1, row),
            above: before(row).map_or(Tile::Floor, |r| self.tile(col, r)),
            below: self.tile(col, row + 1),
        }
    }

    /// Iterate over every tile with its (col, row) position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().map(move |(col, &tile)| (col, row, tile))
        })
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.rows {
            text.extend(line.iter().map(|t| t.symbol()));
            text.push('\n');
        }
        text
    }
}
