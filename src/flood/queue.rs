//! Breadth-first flood over an explicit work queue.
//!
//! Sources inside the guard inset are queued in row-major order and relaxed
//! first-in first-out, so every pixel is settled by the first source wave
//! that reaches it and inherits that source's angle. Distances stop growing
//! at `MAX_DISTANCE`. Pixels inside the guard band along the grid edges can
//! be written but never propagate.

use std::collections::VecDeque;

use super::{DistanceField, FloodAlgorithm, MAX_DISTANCE};

/// Queue-driven multi-source flood.
#[derive(Debug, Clone)]
pub struct QueueFlood {
    /// Width of the non-propagating band along every edge, in pixels.
    pub guard: usize,
}

impl Default for QueueFlood {
    fn default() -> Self {
        QueueFlood { guard: 3 }
    }
}

impl QueueFlood {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guard(guard: usize) -> Self {
        QueueFlood { guard }
    }

    /// Whether a pixel lies inside the guard inset and may propagate.
    #[inline]
    fn propagates(&self, field: &DistanceField, x: usize, y: usize) -> bool {
        x >= self.guard
            && y >= self.guard
            && x + self.guard < field.width
            && y + self.guard < field.height
    }
}

impl FloodAlgorithm for QueueFlood {
    fn flood(&self, field: &mut DistanceField) {
        let mut queue = VecDeque::new();
        for y in 0..field.height {
            for x in 0..field.width {
                if field.get(x, y).is_some_and(|r| r.dist == 0) && self.propagates(field, x, y) {
                    queue.push_back((x, y));
                }
            }
        }

        while let Some((x, y)) = queue.pop_front() {
            let Some(&here) = field.get(x, y) else {
                continue;
            };
            // past the cap the wave keeps spreading at MAX_DISTANCE
            let dist = here.dist.saturating_add(1).min(MAX_DISTANCE);

            let neighbors = [
                x.checked_sub(1).map(|nx| (nx, y)),
                y.checked_sub(1).map(|ny| (x, ny)),
                Some((x, y + 1)),
                Some((x + 1, y)),
            ];
            for (nx, ny) in neighbors.into_iter().flatten() {
                let Some(next) = field.get_mut(nx, ny) else {
                    continue;
                };
                if next.dist > dist {
                    next.dist = dist;
                    next.angle = here.angle;
                    if self.propagates(field, nx, ny) {
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flood::{Reach, Sources, UNREACHED};
    use crate::grid::{AngleField, PixelGrid, PixelMask};

    fn flood_from_solid(mask: &PixelMask, angles: &AngleField, guard: usize) -> DistanceField {
        let mut field = DistanceField::seeded(mask, angles, Sources::Solid);
        QueueFlood::with_guard(guard).flood(&mut field);
        field
    }

    fn dist(field: &DistanceField, x: usize, y: usize) -> u8 {
        field.get(x, y).map_or(UNREACHED, |r| r.dist)
    }

    #[test]
    fn test_manhattan_distances_from_single_source() {
        let mut mask: PixelMask = PixelGrid::new(11, 11);
        mask.set(5, 5, true);
        let mut angles: AngleField = PixelGrid::new(11, 11);
        angles.set(5, 5, 270);

        let field = flood_from_solid(&mask, &angles, 0);
        println!("{}", field.to_debug_string());

        for y in 0..11 {
            for x in 0..11 {
                let expected = (x as i32 - 5).unsigned_abs() + (y as i32 - 5).unsigned_abs();
                assert_eq!(u32::from(dist(&field, x, y)), expected, "pixel {x},{y}");
                assert_eq!(field.get(x, y).map(|r| r.angle), Some(270));
            }
        }
    }

    #[test]
    fn test_nearest_source_wins_angle() {
        let mut mask: PixelMask = PixelGrid::new(9, 1);
        let mut angles: AngleField = PixelGrid::new(9, 1);
        mask.set(0, 0, true);
        angles.set(0, 0, 90);
        mask.set(8, 0, true);
        angles.set(8, 0, 270);

        let field = flood_from_solid(&mask, &angles, 0);
        assert_eq!(field.get(2, 0), Some(&Reach { dist: 2, angle: 90 }));
        assert_eq!(field.get(6, 0), Some(&Reach { dist: 2, angle: 270 }));
    }

    #[test]
    fn test_guard_band_stops_propagation() {
        let mut mask: PixelMask = PixelGrid::new(12, 12);
        mask.set(5, 5, true);
        let angles: AngleField = PixelGrid::new(12, 12);
        let field = flood_from_solid(&mask, &angles, 3);

        // inset pixels are reached normally
        assert_eq!(dist(&field, 8, 5), 3);
        // the first band pixel is written by its inset neighbour but goes no further
        assert_eq!(dist(&field, 9, 5), 4);
        assert_eq!(dist(&field, 10, 5), UNREACHED);
        assert_eq!(dist(&field, 2, 5), 3);
        assert_eq!(dist(&field, 1, 5), UNREACHED);
    }

    #[test]
    fn test_sources_in_guard_band_do_not_seed() {
        let mut mask: PixelMask = PixelGrid::new(10, 10);
        mask.set(0, 0, true);
        let angles: AngleField = PixelGrid::new(10, 10);
        let field = flood_from_solid(&mask, &angles, 3);
        assert_eq!(dist(&field, 0, 0), 0);
        assert!(field.as_slice().iter().filter(|r| r.dist != UNREACHED).count() == 1);
    }

    #[test]
    fn test_distance_saturates() {
        let width = 300;
        let mut mask: PixelMask = PixelGrid::new(width, 1);
        mask.set(0, 0, true);
        let angles: AngleField = PixelGrid::new(width, 1);
        let field = flood_from_solid(&mask, &angles, 0);

        assert_eq!(dist(&field, 253, 0), 253);
        assert_eq!(dist(&field, 254, 0), 254);
        // everything further away reads as the cap, never wrapping around
        assert_eq!(dist(&field, 255, 0), 254);
        assert_eq!(dist(&field, 299, 0), 254);
        assert!(field.as_slice().iter().all(|r| r.dist <= MAX_DISTANCE));
    }

    #[test]
    fn test_empty_field() {
        let mask: PixelMask = PixelGrid::new(0, 0);
        let angles: AngleField = PixelGrid::new(0, 0);
        let field = flood_from_solid(&mask, &angles, 3);
        assert!(field.is_empty());
    }
}
