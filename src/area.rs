//! Search area geometry.

use alloc::vec::Vec;

/// Rectangle of chart pixels covered by one search area. Each pixel is one
/// searchable cell; local cell `(0, 0)` sits at the upper-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaBounds {
    pub ul_x: usize,
    pub ul_y: usize,
    pub lr_x: usize,
    pub lr_y: usize,
}

impl AreaBounds {
    pub const fn new(ul_x: usize, ul_y: usize, lr_x: usize, lr_y: usize) -> Self {
        Self {
            ul_x,
            ul_y,
            lr_x,
            lr_y,
        }
    }

    /// Rectangle with its corner at the origin, for callers with no chart.
    pub const fn grid(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn width(&self) -> usize {
        self.lr_x.saturating_sub(self.ul_x)
    }

    pub fn height(&self) -> usize {
        self.lr_y.saturating_sub(self.ul_y)
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Whether a local `(x, y)` cell falls inside this area's grid.
    pub fn contains(&self, cell: (usize, usize)) -> bool {
        cell.0 < self.width() && cell.1 < self.height()
    }

    /// Every local cell, column by column.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (w, h) = (self.width(), self.height());
        let mut cells = Vec::with_capacity(w * h);
        for x in 0..w {
            for y in 0..h {
                cells.push((x, y));
            }
        }
        cells
    }

    /// Translate a local cell to chart coordinates.
    pub fn to_chart(&self, cell: (usize, usize)) -> (usize, usize) {
        (self.ul_x + cell.0, self.ul_y + cell.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_areas_are_fifty_cells_square() {
        for area in crate::config::SEARCH_AREAS {
            assert_eq!(area.width(), 50);
            assert_eq!(area.height(), 50);
            assert_eq!(area.cell_count(), 2500);
        }
    }

    #[test]
    fn cells_cover_the_grid_once() {
        let area = AreaBounds::grid(3, 2);
        let cells = area.cells();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|&c| area.contains(c)));
        assert!(!area.contains((3, 0)));
        assert!(!area.contains((0, 2)));
    }

    #[test]
    fn inverted_corners_give_an_empty_area() {
        let area = AreaBounds::new(10, 10, 5, 20);
        assert_eq!(area.width(), 0);
        assert!(area.is_empty());
        assert!(area.cells().is_empty());
    }

    #[test]
    fn chart_offset_uses_upper_left_corner() {
        let area = AreaBounds::new(130, 265, 180, 315);
        assert_eq!(area.to_chart((4, 7)), (134, 272));
    }
}
