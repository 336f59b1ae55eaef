/// A row-major 2D grid of per-pixel values.
///
/// Unlike a world map this grid never wraps: every accessor is bounds-checked
/// and reports out-of-range coordinates instead of folding them back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

/// Solid (`true`) or floor (`false`) for every pixel.
pub type PixelMask = PixelGrid<bool>;

/// Surface angle in degrees for every pixel, `UNSET_ANGLE` where none applies.
pub type AngleField = PixelGrid<u16>;

/// Sentinel for "no directional angle". Due north is stored as 360, never 0.
pub const UNSET_ANGLE: u16 = 0;

impl<T: Clone + Default> PixelGrid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self::new_with(width, height, T::default())
    }
}

impl<T: Clone> PixelGrid<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }
}

impl<T> PixelGrid<T> {
    /// Index into the backing storage, `None` when outside the grid.
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        let idx = self.index(x, y)?;
        self.data.get(idx)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        let idx = self.index(x, y)?;
        self.data.get_mut(idx)
    }

    /// Write a value, returning whether the coordinate was inside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, an empty grid simply has no rows
        self.data.chunks(self.width.max(1))
    }
}

impl<T: Copy> PixelGrid<T> {
    /// Read a value, falling back to `default` outside the grid.
    pub fn get_or(&self, x: usize, y: usize, default: T) -> T {
        self.get(x, y).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_access() {
        let mut grid: PixelGrid<u16> = PixelGrid::new(3, 2);
        assert!(grid.set(2, 1, 90));
        assert!(!grid.set(3, 0, 90));
        assert!(!grid.set(0, 2, 90));
        assert_eq!(grid.get(2, 1), Some(&90));
        assert_eq!(grid.get(3, 1), None);
        assert_eq!(grid.get_or(5, 5, 7), 7);
        assert_eq!(grid.index(1, 1), Some(4));
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut grid = PixelGrid::new_with(2, 3, false);
        grid.set(1, 2, true);
        let rows: Vec<&[bool]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[false, true]);
    }

    #[test]
    fn test_empty_grid() {
        let grid: PixelMask = PixelGrid::new(0, 0);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.get(0, 0), None);
    }
}
