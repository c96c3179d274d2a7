//! Table sizing bands
//!
//! Derived width/height for a table given its shape and seat count. Sizes
//! are fixed lookup bands keyed by seat-count thresholds, with a linear
//! step every +2 seats beyond 10. Purely cosmetic (canvas rendering), never
//! stored.

use shared::models::TableShape;

/// Derived table footprint in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSize {
    pub width: u32,
    pub height: u32,
}

impl TableSize {
    const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Compute the rendered size of a table.
///
/// Bands at ≤2, ≤4, ≤6, ≤8, ≤10 seats per shape; beyond 10 seats the ≤10
/// band grows by a fixed step per two extra seats.
pub fn calculate_table_size(shape: TableShape, seat_count: u32) -> TableSize {
    match shape {
        TableShape::Rectangle => match seat_count {
            0..=2 => TableSize::new(80, 60),
            3..=4 => TableSize::new(120, 80),
            5..=6 => TableSize::new(160, 90),
            7..=8 => TableSize::new(200, 100),
            9..=10 => TableSize::new(240, 110),
            n => {
                let steps = (n - 10) / 2;
                TableSize::new(240 + steps * 30, 110)
            }
        },
        TableShape::Circle => match seat_count {
            0..=2 => TableSize::new(70, 70),
            3..=4 => TableSize::new(100, 100),
            5..=6 => TableSize::new(130, 130),
            7..=8 => TableSize::new(160, 160),
            9..=10 => TableSize::new(200, 200),
            n => {
                let steps = (n - 10) / 2;
                let d = 200 + steps * 20;
                TableSize::new(d, d)
            }
        },
        TableShape::Oval => match seat_count {
            0..=2 => TableSize::new(90, 70),
            3..=4 => TableSize::new(120, 90),
            5..=6 => TableSize::new(150, 100),
            7..=8 => TableSize::new(180, 110),
            9..=10 => TableSize::new(210, 120),
            n => {
                let steps = (n - 10) / 2;
                TableSize::new(210 + steps * 25, 120 + steps * 10)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_band() {
        assert_eq!(
            calculate_table_size(TableShape::Rectangle, 4),
            TableSize::new(120, 80)
        );
        assert_eq!(
            calculate_table_size(TableShape::Rectangle, 2),
            TableSize::new(80, 60)
        );
    }

    #[test]
    fn test_circle_extrapolation() {
        // 11 seats: one extra seat, step = floor(1/2) = 0
        assert_eq!(
            calculate_table_size(TableShape::Circle, 11),
            TableSize::new(200, 200)
        );
        // 12 seats: step = 1
        assert_eq!(
            calculate_table_size(TableShape::Circle, 12),
            TableSize::new(220, 220)
        );
        assert_eq!(
            calculate_table_size(TableShape::Circle, 14),
            TableSize::new(240, 240)
        );
    }

    #[test]
    fn test_oval_band() {
        assert_eq!(
            calculate_table_size(TableShape::Oval, 2),
            TableSize::new(90, 70)
        );
        assert_eq!(
            calculate_table_size(TableShape::Oval, 12),
            TableSize::new(235, 130)
        );
    }

    #[test]
    fn test_band_edges() {
        // thresholds are inclusive upper bounds
        assert_eq!(
            calculate_table_size(TableShape::Rectangle, 10),
            TableSize::new(240, 110)
        );
        assert_eq!(
            calculate_table_size(TableShape::Rectangle, 11),
            TableSize::new(240, 110)
        );
        assert_eq!(
            calculate_table_size(TableShape::Rectangle, 12),
            TableSize::new(270, 110)
        );
    }
}
