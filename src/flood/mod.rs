//! Stage 3: saturating distance floods across the pixel grid.
//!
//! Two fields are computed, one per side of the solid/floor boundary. Every
//! reached pixel records how many 4-connected steps separate it from the
//! nearest pixel of the other class, and the surface angle carried along
//! that path. All algorithms implement the `FloodAlgorithm` trait.

pub mod queue;

pub use queue::QueueFlood;

use crate::grid::{AngleField, PixelGrid, PixelMask, UNSET_ANGLE};

/// Largest distance a flood ever writes.
pub const MAX_DISTANCE: u8 = 254;

/// Distance of a pixel no flood has reached.
pub const UNREACHED: u8 = 255;

/// Distance to the nearest source plus the angle inherited from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reach {
    pub dist: u8,
    pub angle: u16,
}

impl Default for Reach {
    fn default() -> Self {
        Reach {
            dist: UNREACHED,
            angle: UNSET_ANGLE,
        }
    }
}

/// Which occupancy class seeds a flood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sources {
    Solid,
    Floor,
}

impl Sources {
    fn contains(self, solid: bool) -> bool {
        match self {
            Sources::Solid => solid,
            Sources::Floor => !solid,
        }
    }
}

pub type DistanceField = PixelGrid<Reach>;

impl DistanceField {
    /// Source pixels start at distance 0, everything else is unreached.
    /// Every pixel starts out holding its own angle.
    pub fn seeded(mask: &PixelMask, angles: &AngleField, sources: Sources) -> Self {
        let mut field = DistanceField::new(mask.width, mask.height);
        for ((reach, &solid), &angle) in field
            .as_mut_slice()
            .iter_mut()
            .zip(mask.as_slice())
            .zip(angles.as_slice())
        {
            reach.angle = angle;
            if sources.contains(solid) {
                reach.dist = 0;
            }
        }
        field
    }

    /// Format distances as text for debugging.
    pub fn to_debug_string(&self) -> String {
        let mut result = String::new();
        for row in self.rows() {
            for reach in row {
                result.push_str(&format!("{:4}", reach.dist));
            }
            result.push('\n');
        }
        result
    }
}

/// Trait for distance flood algorithms.
///
/// Implementations relax a seeded field in place until every reachable pixel
/// holds its distance to the nearest source (capped at `MAX_DISTANCE`) and
/// the angle carried from that source.
pub trait FloodAlgorithm {
    fn flood(&self, field: &mut DistanceField);
}

/// Both flood results for one render.
#[derive(Debug, Clone)]
pub struct FloodPair {
    /// Seeded at floor pixels: how deep each solid pixel sits inside its wall.
    pub wall_depth: DistanceField,
    /// Seeded at solid pixels: how far each floor pixel is from a wall.
    pub floor_depth: DistanceField,
}

/// Run both floods in parallel, each worker owning its own field.
pub fn flood_pair<F>(mask: &PixelMask, angles: &AngleField, algorithm: &F) -> FloodPair
where
    F: FloodAlgorithm + Sync,
{
    let (wall_depth, floor_depth) = rayon::join(
        || {
            let mut field = DistanceField::seeded(mask, angles, Sources::Floor);
            algorithm.flood(&mut field);
            field
        },
        || {
            let mut field = DistanceField::seeded(mask, angles, Sources::Solid);
            algorithm.flood(&mut field);
            field
        },
    );

    FloodPair {
        wall_depth,
        floor_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeding() {
        let mut mask: PixelMask = PixelGrid::new(2, 1);
        mask.set(1, 0, true);
        let mut angles: AngleField = PixelGrid::new(2, 1);
        angles.set(0, 0, 90);

        let from_solid = DistanceField::seeded(&mask, &angles, Sources::Solid);
        assert_eq!(from_solid.get(0, 0), Some(&Reach { dist: UNREACHED, angle: 90 }));
        assert_eq!(from_solid.get(1, 0), Some(&Reach { dist: 0, angle: UNSET_ANGLE }));

        let from_floor = DistanceField::seeded(&mask, &angles, Sources::Floor);
        assert_eq!(from_floor.get(0, 0).map(|r| r.dist), Some(0));
        assert_eq!(from_floor.get(1, 0).map(|r| r.dist), Some(UNREACHED));
    }

    #[test]
    fn test_debug_string() {
        let mask: PixelMask = PixelGrid::new(2, 2);
        let angles: AngleField = PixelGrid::new(2, 2);
        let field = DistanceField::seeded(&mask, &angles, Sources::Floor);
        assert_eq!(field.to_debug_string(), "   0   0\n   0   0\n");
    }
}
