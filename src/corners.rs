//! Stage 2: fill angle gaps where four tiles meet.

use crate::grid::{AngleField, UNSET_ANGLE};

/// Patch the 2x2 pixel cluster around every interior tile corner.
///
/// Unset members of a cluster take the integer mean of its set members.
/// Angles are averaged modulo 360 with no wrap correction, so a cluster
/// holding 350 and 10 averages to 180.
pub fn fill_corners(angles: &mut AngleField, cols: usize, rows: usize, tile_size: usize) {
    if tile_size == 0 {
        return;
    }
    for row in 1..rows {
        for col in 1..cols {
            let (x, y) = (col * tile_size, row * tile_size);
            let cluster = [(x - 1, y - 1), (x, y - 1), (x - 1, y), (x, y)];

            let known: Vec<u32> = cluster
                .iter()
                .filter_map(|&(cx, cy)| angles.get(cx, cy).copied())
                .filter(|&a| a != UNSET_ANGLE)
                .map(|a| u32::from(a % 360))
                .collect();
            if known.is_empty() {
                continue;
            }
            let mean = known.iter().sum::<u32>() / known.len() as u32;
            // mean of values below 360 always fits
            let mean = mean as u16;

            for &(cx, cy) in &cluster {
                if let Some(cell) = angles.get_mut(cx, cy) {
                    if *cell == UNSET_ANGLE {
                        *cell = mean;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelGrid;

    #[test]
    fn test_fills_unset_members_with_mean() {
        // 2x2 tiles of 2 pixels: the only interior corner sits at pixel (2,2)
        let mut angles: AngleField = PixelGrid::new(4, 4);
        angles.set(1, 1, 90);
        angles.set(2, 1, 180);
        fill_corners(&mut angles, 2, 2, 2);
        assert_eq!(angles.get(1, 1), Some(&90));
        assert_eq!(angles.get(2, 1), Some(&180));
        assert_eq!(angles.get(1, 2), Some(&135));
        assert_eq!(angles.get(2, 2), Some(&135));
        // pixels outside the cluster are untouched
        assert_eq!(angles.get(0, 0), Some(&UNSET_ANGLE));
        assert_eq!(angles.get(3, 3), Some(&UNSET_ANGLE));
    }

    #[test]
    fn test_north_counts_as_zero() {
        let mut angles: AngleField = PixelGrid::new(4, 4);
        angles.set(1, 1, 360);
        angles.set(2, 2, 90);
        fill_corners(&mut angles, 2, 2, 2);
        assert_eq!(angles.get(2, 1), Some(&45));
        assert_eq!(angles.get(1, 2), Some(&45));
        assert_eq!(angles.get(1, 1), Some(&360));
    }

    #[test]
    fn test_empty_cluster_left_alone() {
        let mut angles: AngleField = PixelGrid::new(6, 6);
        fill_corners(&mut angles, 3, 3, 2);
        assert!(angles.as_slice().iter().all(|&a| a == UNSET_ANGLE));
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut angles: AngleField = PixelGrid::new(0, 0);
        fill_corners(&mut angles, 0, 0, 4);
        fill_corners(&mut angles, 3, 3, 0);
        assert!(angles.is_empty());
    }
}
