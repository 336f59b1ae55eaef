//! Orientation tables for the sloped tiles.
//!
//! Each diagonal and wedge symbol has a fixed pair of candidate faces. The
//! neighbour predicates are evaluated once per tile to pick one, and the
//! chosen face answers "is this pixel solid" and "which angle does it carry".

use crate::tiles::{Neighbors, Tile};

/// A pixel offset inside a `size` x `size` tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub dx: usize,
    pub dy: usize,
    pub size: usize,
}

impl Cell {
    /// Column counted from the right edge of the tile.
    fn mirrored_dx(self) -> usize {
        self.size - self.dx - 1
    }
}

/// Tile edge, named by the neighbour it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Above,
    Below,
}

impl Side {
    /// Angle given to a solid edge that faces an open neighbour on this side.
    pub fn facing(self) -> u16 {
        match self {
            Side::Left => 90,
            Side::Right => 270,
            Side::Above => 180,
            Side::Below => 360,
        }
    }
}

impl Neighbors {
    pub fn on(&self, side: Side) -> Tile {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Above => self.above,
            Side::Below => self.below,
        }
    }

    pub fn is_open(&self, side: Side) -> bool {
        self.on(side).is_floor()
    }
}

/// Turn an angle in (0, 360] around by 180 degrees, staying in (0, 360].
pub fn half_turn(angle: u16) -> u16 {
    (angle + 179) % 360 + 1
}

/// Why a diagonal ended up in its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Nominal,
    /// a solid block touches the side the flipped face would fill
    StrongFlip,
    /// sloped or solid tiles on the flipped side and no block on the nominal side
    WeakFlip,
}

/// One resolved half of a diagonal tile.
#[derive(Debug, Clone, Copy)]
pub struct DiagonalFace {
    solid: fn(Cell) -> bool,
    pub angle: u16,
    /// Outward edges of the solid half, painted like a block's edges.
    pub solid_sides: [Side; 2],
}

impl DiagonalFace {
    pub fn is_solid(&self, cell: Cell) -> bool {
        (self.solid)(cell)
    }
}

pub struct DiagonalShape {
    on_line: fn(Cell) -> bool,
    nominal: DiagonalFace,
    flipped: DiagonalFace,
    strong: fn(&Neighbors) -> bool,
    weak: fn(&Neighbors) -> bool,
}

impl DiagonalShape {
    pub fn for_tile(tile: Tile) -> Option<&'static DiagonalShape> {
        match tile {
            Tile::Backslash => Some(&BACKSLASH),
            Tile::Slash => Some(&SLASH),
            _ => None,
        }
    }

    pub fn orientation(&self, neighbors: &Neighbors) -> Orientation {
        if (self.strong)(neighbors) {
            Orientation::StrongFlip
        } else if (self.weak)(neighbors) {
            Orientation::WeakFlip
        } else {
            Orientation::Nominal
        }
    }

    pub fn face(&self, orientation: Orientation) -> &DiagonalFace {
        match orientation {
            Orientation::Nominal => &self.nominal,
            Orientation::StrongFlip | Orientation::WeakFlip => &self.flipped,
        }
    }

    /// Pixels within one step of the dividing line carry the face angle.
    pub fn on_line(&self, cell: Cell) -> bool {
        (self.on_line)(cell)
    }
}

fn lower_left(c: Cell) -> bool {
    c.dx <= c.dy
}

fn upper_right(c: Cell) -> bool {
    !lower_left(c)
}

fn lower_right(c: Cell) -> bool {
    c.mirrored_dx() <= c.dy
}

fn upper_left(c: Cell) -> bool {
    !lower_right(c)
}

fn near_main_diagonal(c: Cell) -> bool {
    c.dx.abs_diff(c.dy) <= 1
}

fn near_anti_diagonal(c: Cell) -> bool {
    c.mirrored_dx().abs_diff(c.dy) <= 1
}

fn backslash_strong(n: &Neighbors) -> bool {
    n.right.is_block() || n.above.is_block()
}

fn backslash_weak(n: &Neighbors) -> bool {
    (!n.right.is_floor() || !n.above.is_floor()) && !n.left.is_block() && !n.below.is_block()
}

fn slash_strong(n: &Neighbors) -> bool {
    n.left.is_block() || n.above.is_block()
}

fn slash_weak(n: &Neighbors) -> bool {
    (!n.left.is_floor() || !n.above.is_floor()) && !n.right.is_block() && !n.below.is_block()
}

const BACKSLASH: DiagonalShape = DiagonalShape {
    on_line: near_main_diagonal,
    nominal: DiagonalFace {
        solid: lower_left,
        angle: 225,
        solid_sides: [Side::Left, Side::Below],
    },
    flipped: DiagonalFace {
        solid: upper_right,
        angle: 45,
        solid_sides: [Side::Right, Side::Above],
    },
    strong: backslash_strong,
    weak: backslash_weak,
};

const SLASH: DiagonalShape = DiagonalShape {
    on_line: near_anti_diagonal,
    nominal: DiagonalFace {
        solid: lower_right,
        angle: 135,
        solid_sides: [Side::Right, Side::Below],
    },
    flipped: DiagonalFace {
        solid: upper_left,
        angle: 315,
        solid_sides: [Side::Left, Side::Above],
    },
    strong: slash_strong,
    weak: slash_weak,
};

/// A wedge symbol: a triangular solid half plus two planar faces.
pub struct WedgeShape {
    solid: fn(Cell) -> bool,
    /// Pixels on the lower (or right) side of the tile's midline.
    second_half: fn(Cell) -> bool,
    first: u16,
    second: u16,
    /// The neighbour the wedge points at.
    points: Side,
}

/// A wedge after checking whether it points into a solid block.
#[derive(Debug, Clone, Copy)]
pub struct WedgeFace {
    solid: fn(Cell) -> bool,
    second_half: fn(Cell) -> bool,
    inverted: bool,
    pub first: u16,
    pub second: u16,
}

impl WedgeShape {
    pub fn for_tile(tile: Tile) -> Option<&'static WedgeShape> {
        match tile {
            Tile::WedgeRight => Some(&WEDGE_RIGHT),
            Tile::WedgeLeft => Some(&WEDGE_LEFT),
            Tile::WedgeDown => Some(&WEDGE_DOWN),
            Tile::WedgeUp => Some(&WEDGE_UP),
            _ => None,
        }
    }

    pub fn resolve(&self, neighbors: &Neighbors) -> WedgeFace {
        let inverted = neighbors.on(self.points).is_block();
        let (first, second) = if inverted {
            (half_turn(self.second), half_turn(self.first))
        } else {
            (self.first, self.second)
        };
        WedgeFace {
            solid: self.solid,
            second_half: self.second_half,
            inverted,
            first,
            second,
        }
    }
}

impl WedgeFace {
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_solid(&self, cell: Cell) -> bool {
        (self.solid)(cell) != self.inverted
    }

    pub fn angle(&self, cell: Cell) -> u16 {
        if (self.second_half)(cell) {
            self.second
        } else {
            self.first
        }
    }
}

fn below_midline(c: Cell) -> bool {
    c.dy * 2 > c.size
}

fn right_of_midline(c: Cell) -> bool {
    c.dx * 2 > c.size
}

fn left_triangle(c: Cell) -> bool {
    c.dx <= c.dy && c.mirrored_dx() > c.dy
}

fn right_triangle(c: Cell) -> bool {
    c.dx > c.dy && c.mirrored_dx() <= c.dy
}

fn top_triangle(c: Cell) -> bool {
    c.dx > c.dy && c.mirrored_dx() > c.dy
}

fn bottom_triangle(c: Cell) -> bool {
    c.dx <= c.dy && c.mirrored_dx() <= c.dy
}

const WEDGE_RIGHT: WedgeShape = WedgeShape {
    solid: left_triangle,
    second_half: below_midline,
    first: 315,
    second: 225,
    points: Side::Right,
};

const WEDGE_LEFT: WedgeShape = WedgeShape {
    solid: right_triangle,
    second_half: below_midline,
    first: 45,
    second: 135,
    points: Side::Left,
};

const WEDGE_DOWN: WedgeShape = WedgeShape {
    solid: top_triangle,
    second_half: right_of_midline,
    first: 45,
    second: 315,
    points: Side::Below,
};

const WEDGE_UP: WedgeShape = WedgeShape {
    solid: bottom_triangle,
    second_half: right_of_midline,
    first: 225,
    second: 135,
    points: Side::Above,
};
