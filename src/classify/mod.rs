//! Stage 1: expand every tile into a block of solid/floor pixels and seed
//! surface angles along the solid/floor boundary.

pub mod faces;

pub use faces::{Cell, DiagonalShape, Orientation, Side, WedgeShape, half_turn};

use crate::grid::{AngleField, PixelGrid, PixelMask, UNSET_ANGLE};
use crate::tiles::{Neighbors, Tile, TileGrid};

/// Output of the classifier: full-resolution occupancy and angles.
#[derive(Debug, Clone)]
pub struct Classified {
    pub mask: PixelMask,
    pub angles: AngleField,
}

/// How an angle write treats a cell that already holds an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Write {
    Overwrite,
    FillUnset,
}

/// Classify every tile of the grid at `tile_size` pixels per tile.
pub fn classify(grid: &TileGrid, tile_size: usize) -> Classified {
    let width = grid.cols() * tile_size;
    let height = grid.rows() * tile_size;
    let mut out = Classified {
        mask: PixelGrid::new(width, height),
        angles: PixelGrid::new(width, height),
    };
    if tile_size == 0 {
        return out;
    }

    for (col, row, tile) in grid.iter() {
        let neighbors = grid.neighbors(col, row);
        let mut canvas = TileCanvas {
            mask: &mut out.mask,
            angles: &mut out.angles,
            x0: col * tile_size,
            y0: row * tile_size,
            size: tile_size,
        };
        match tile {
            Tile::Floor => {}
            Tile::Block => canvas.block(&neighbors),
            Tile::Backslash | Tile::Slash => {
                if let Some(shape) = DiagonalShape::for_tile(tile) {
                    canvas.diagonal(shape, &neighbors);
                }
            }
            Tile::WedgeRight | Tile::WedgeLeft | Tile::WedgeDown | Tile::WedgeUp => {
                if let Some(shape) = WedgeShape::for_tile(tile) {
                    canvas.wedge(shape, &neighbors);
                }
            }
        }
    }

    out
}

/// Every pixel offset of a tile, row by row.
fn cells(size: usize) -> impl Iterator<Item = Cell> {
    (0..size).flat_map(move |dy| (0..size).map(move |dx| Cell { dx, dy, size }))
}

/// Mutable view of one tile's pixel block (plus the ring of pixels around
/// it, which edge painting bleeds into).
struct TileCanvas<'a> {
    mask: &'a mut PixelMask,
    angles: &'a mut AngleField,
    x0: usize,
    y0: usize,
    size: usize,
}

impl TileCanvas<'_> {
    fn set_solid(&mut self, cell: Cell, solid: bool) {
        let landed = self.mask.set(self.x0 + cell.dx, self.y0 + cell.dy, solid);
        debug_assert!(landed, "tile pixel outside the mask");
    }

    fn set_cell_angle(&mut self, cell: Cell, angle: u16) {
        self.put_angle(Some(self.x0 + cell.dx), Some(self.y0 + cell.dy), angle, Write::Overwrite);
    }

    fn put_angle(&mut self, x: Option<usize>, y: Option<usize>, angle: u16, write: Write) {
        let target = match (x, y) {
            (Some(x), Some(y)) => self.angles.get_mut(x, y),
            _ => None,
        };
        let Some(cell) = target else {
            debug_assert!(false, "angle write outside the field at {x:?},{y:?}");
            return;
        };
        if write == Write::Overwrite || *cell == UNSET_ANGLE {
            *cell = angle;
        }
    }

    /// Paint the two pixel lines straddling one tile edge: the tile's own
    /// boundary line and the adjacent line of the neighbouring tile.
    fn paint_edge(&mut self, side: Side, write: Write) {
        let angle = side.facing();
        let (x0, y0, last) = (self.x0, self.y0, self.size - 1);
        for step in 0..self.size {
            let (inner, outer) = match side {
                Side::Left => ((Some(x0), Some(y0 + step)), (x0.checked_sub(1), Some(y0 + step))),
                Side::Right => ((Some(x0 + last), Some(y0 + step)), (Some(x0 + last + 1), Some(y0 + step))),
                Side::Above => ((Some(x0 + step), Some(y0)), (Some(x0 + step), y0.checked_sub(1))),
                Side::Below => ((Some(x0 + step), Some(y0 + last)), (Some(x0 + step), Some(y0 + last + 1))),
            };
            self.put_angle(inner.0, inner.1, angle, write);
            self.put_angle(outer.0, outer.1, angle, write);
        }
    }

    /// A horizontal edge's end pixels take its angle when the vertical edge
    /// they also belong to is closed.
    fn pin_corners(&mut self, side: Side, neighbors: &Neighbors) {
        let y = match side {
            Side::Above => self.y0,
            Side::Below => self.y0 + self.size - 1,
            Side::Left | Side::Right => return,
        };
        let angle = side.facing();
        if !neighbors.is_open(Side::Right) {
            self.put_angle(Some(self.x0 + self.size - 1), Some(y), angle, Write::Overwrite);
        }
        if !neighbors.is_open(Side::Left) {
            self.put_angle(Some(self.x0), Some(y), angle, Write::Overwrite);
        }
    }

    fn paint_open_edges(&mut self, sides: &[Side], neighbors: &Neighbors, write: Write) {
        for &side in sides {
            if neighbors.is_open(side) {
                self.paint_edge(side, write);
                self.pin_corners(side, neighbors);
            }
        }
    }

    fn block(&mut self, neighbors: &Neighbors) {
        for cell in cells(self.size) {
            self.set_solid(cell, true);
        }
        self.paint_open_edges(
            &[Side::Left, Side::Right, Side::Above, Side::Below],
            neighbors,
            Write::Overwrite,
        );
    }

    fn diagonal(&mut self, shape: &DiagonalShape, neighbors: &Neighbors) {
        let orientation = shape.orientation(neighbors);
        let face = shape.face(orientation);
        log::trace!(
            "diagonal at pixel ({}, {}) resolved as {:?}",
            self.x0,
            self.y0,
            orientation
        );

        for cell in cells(self.size) {
            self.set_solid(cell, face.is_solid(cell));
            if shape.on_line(cell) {
                self.set_cell_angle(cell, face.angle);
            }
        }
        // the sloped face keeps its angle where the edges cross it
        self.paint_open_edges(&face.solid_sides, neighbors, Write::FillUnset);
    }

    fn wedge(&mut self, shape: &WedgeShape, neighbors: &Neighbors) {
        let face = shape.resolve(neighbors);
        for cell in cells(self.size) {
            self.set_solid(cell, face.is_solid(cell));
            self.set_cell_angle(cell, face.angle(cell));
        }
    }
}
