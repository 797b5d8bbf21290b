//! Grid snapping helpers
//!
//! The canvas snaps every placement and resize to the active grid, so
//! element geometry is always a multiple of the configured grid size.

use crate::models::{Position, Size};

/// Round `value` to the nearest multiple of `grid_size`
///
/// Half-way values round away from zero. `grid_size` is guaranteed
/// positive by the store configuration.
pub fn snap_to_grid(value: f64, grid_size: i32) -> i32 {
    (value / grid_size as f64).round() as i32 * grid_size
}

/// Snap a position componentwise to the grid
pub fn snap_position_to_grid(x: f64, y: f64, grid_size: i32) -> Position {
    Position {
        x: snap_to_grid(x, grid_size),
        y: snap_to_grid(y, grid_size),
    }
}

/// Snap a size componentwise to the grid
///
/// Each dimension is clamped to at least one grid unit; a zero- or
/// negative-size element is never permitted.
pub fn snap_size_to_grid(width: f64, height: f64, grid_size: i32) -> Size {
    Size {
        width: snap_to_grid(width, grid_size).max(grid_size),
        height: snap_to_grid(height, grid_size).max(grid_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_nearest_multiple() {
        assert_eq!(snap_to_grid(0.0, 20), 0);
        assert_eq!(snap_to_grid(9.0, 20), 0);
        assert_eq!(snap_to_grid(11.0, 20), 20);
        assert_eq!(snap_to_grid(105.0, 20), 100);
        assert_eq!(snap_to_grid(187.0, 20), 180);
        assert_eq!(snap_to_grid(25.0, 50), 50);
    }

    #[test]
    fn test_snap_half_rounds_away_from_zero() {
        assert_eq!(snap_to_grid(10.0, 20), 20);
        assert_eq!(snap_to_grid(-10.0, 20), -20);
        assert_eq!(snap_to_grid(15.0, 10), 20);
    }

    #[test]
    fn test_snap_result_is_always_a_multiple() {
        for grid in [10, 20, 30, 50] {
            for value in [-123.4, -7.0, 0.0, 3.9, 42.0, 99.5, 1057.3] {
                assert_eq!(snap_to_grid(value, grid) % grid, 0);
            }
        }
    }

    #[test]
    fn test_snap_position_componentwise() {
        let position = snap_position_to_grid(105.0, 187.0, 20);
        assert_eq!(position, Position::new(100, 180));
    }

    #[test]
    fn test_snap_size_clamps_to_one_grid_unit() {
        let size = snap_size_to_grid(3.0, -40.0, 20);
        assert_eq!(size, Size::new(20, 20));

        let size = snap_size_to_grid(200.0, 100.0, 30);
        assert_eq!(size, Size::new(210, 90));
        assert!(size.width >= 30 && size.height >= 30);
    }
}
