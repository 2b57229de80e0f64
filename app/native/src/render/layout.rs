//! Two-column text layout.
//!
//! Lines flow top to bottom in the left column and continue in the right
//! column once the left one is full. Both columns start at the same body Y.
//! When the right column is full the remaining lines are dropped; truncation
//! is silent and deterministic.
//!
//! The engine only computes coordinates, so it can be tested without drawing.

use super::lines::DisplayLine;
use super::spec::CanvasSpec;

/// Text column of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    /// Zero-based column index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Position assigned to a non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the line in the input sequence.
    pub line: usize,
    pub column: Column,
    pub x: i32,
    pub y: i32,
}

/// Column positions derived from a [`CanvasSpec`].
#[derive(Debug, Clone, Copy)]
struct Geometry {
    left_x: i32,
    right_x: i32,
    top: i32,
    limit: i32,
    pitch: i32,
}

impl Geometry {
    #[allow(clippy::cast_possible_wrap)]
    const fn from_spec(spec: &CanvasSpec) -> Self {
        Self {
            left_x: spec.margin_left,
            right_x: spec.right_column_x(),
            top: spec.body_top,
            limit: spec.text_limit(),
            pitch: spec.line_pitch as i32,
        }
    }

    const fn column_x(&self, column: Column) -> i32 {
        match column {
            Column::Left => self.left_x,
            Column::Right => self.right_x,
        }
    }
}

/// Layout state between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    column: Column,
    y: i32,
}

impl Cursor {
    const fn start(geometry: &Geometry) -> Self {
        Self {
            column: Column::Left,
            y: geometry.top,
        }
    }

    const fn place(self, line: usize, geometry: &Geometry) -> Placement {
        Placement {
            line,
            column: self.column,
            x: geometry.column_x(self.column),
            y: self.y,
        }
    }

    /// Moves one row down, switching to the right column when the left one
    /// overflows. Returns `None` once both columns are exhausted.
    const fn advance(self, geometry: &Geometry) -> Option<Self> {
        if let Some(y) = self.y.checked_add(geometry.pitch)
            && y <= geometry.limit
        {
            return Some(Self { column: self.column, y });
        }

        match self.column {
            Column::Left => Some(Self {
                column: Column::Right,
                y: geometry.top,
            }),
            Column::Right => None,
        }
    }
}

/// Computes placements for `lines` on the canvas described by `spec`.
///
/// Blank lines get no placement but still consume one row. At most
/// `spec.max_lines` input lines are considered when a cap is set.
#[must_use]
pub fn layout(lines: &[DisplayLine], spec: &CanvasSpec) -> Vec<Placement> {
    let geometry = Geometry::from_spec(spec);
    let mut placements = Vec::new();

    let mut cursor = Cursor::start(&geometry);
    if cursor.y > geometry.limit || geometry.pitch <= 0 {
        return placements;
    }

    let budget = spec.max_lines.unwrap_or(usize::MAX);
    for (index, line) in lines.iter().enumerate().take(budget) {
        if !line.is_blank() {
            placements.push(cursor.place(index, &geometry));
        }

        match cursor.advance(&geometry) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    placements
}

/// Number of rows one column holds on the given canvas.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
pub const fn column_capacity(spec: &CanvasSpec) -> usize {
    let geometry = Geometry::from_spec(spec);
    if geometry.top > geometry.limit || geometry.pitch <= 0 {
        return 0;
    }
    let rows = (geometry.limit as i64 - geometry.top as i64) / geometry.pitch as i64;
    rows as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::lines::format_lines;

    /// Spec whose columns hold exactly three rows (y = 100, 118, 136; limit 150).
    fn three_row_spec() -> CanvasSpec {
        CanvasSpec {
            height: 250,
            bottom_margin: 100,
            ..CanvasSpec::default()
        }
    }

    fn numbered(count: usize) -> Vec<DisplayLine> {
        (0..count).map(|i| DisplayLine::new(format!("line {i}"))).collect()
    }

    #[test]
    fn test_column_capacity() {
        assert_eq!(column_capacity(&three_row_spec()), 3);
        // (980 - 100) / 18 + 1
        assert_eq!(column_capacity(&CanvasSpec::default()), 49);
    }

    #[test]
    fn test_short_input_fills_left_column_in_order() {
        let spec = CanvasSpec::default();
        let lines = numbered(10);
        let placements = layout(&lines, &spec);

        assert_eq!(placements.len(), 10);
        for (i, placement) in placements.iter().enumerate() {
            assert_eq!(placement.line, i);
            assert_eq!(placement.column, Column::Left);
            assert_eq!(placement.x, 50);
            assert_eq!(placement.y, 100 + 18 * i as i32);
        }
    }

    #[test]
    fn test_overflow_restarts_at_body_top_in_right_column() {
        let spec = CanvasSpec::default();
        let capacity = column_capacity(&spec);
        let lines = numbered(capacity + 2);
        let placements = layout(&lines, &spec);

        let first_right = placements.iter().find(|p| p.column == Column::Right).unwrap();
        assert_eq!(first_right.line, capacity);
        assert_eq!(first_right.y, spec.body_top);
        assert_eq!(first_right.x, 980);
    }

    #[test]
    fn test_overflowing_both_columns_stays_in_bounds() {
        let spec = CanvasSpec::default();
        let capacity = column_capacity(&spec);
        let lines = numbered(capacity * 2 + 25);
        let placements = layout(&lines, &spec);

        assert_eq!(placements.len(), capacity * 2);
        assert!(placements.iter().all(|p| p.y <= spec.text_limit()));
        assert_eq!(placements.last().unwrap().line, capacity * 2 - 1);
    }

    #[test]
    fn test_columns_never_go_back() {
        let spec = three_row_spec();
        let lines = format_lines("a\n\nb\nc\n\n\nd\ne\nf\ng");
        let placements = layout(&lines, &spec);

        let columns: Vec<usize> = placements.iter().map(|p| p.column.index()).collect();
        assert!(columns.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_blank_lines_advance_without_placement() {
        let spec = CanvasSpec::default();
        let lines = format_lines("first\n\n   \nfourth");
        let placements = layout(&lines, &spec);

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].y, 100);
        assert_eq!(placements[1].line, 3);
        assert_eq!(placements[1].y, 100 + 3 * 18);
    }

    #[test]
    fn test_entirely_blank_input_places_nothing() {
        let lines = format_lines("\n\n  \n\t\n");
        assert!(layout(&lines, &CanvasSpec::default()).is_empty());
        assert!(layout(&[], &CanvasSpec::default()).is_empty());
    }

    #[test]
    fn test_adapter_example() {
        let spec = three_row_spec();
        let lines: Vec<DisplayLine> = [
            "Adapter: Eth0",
            "  IP Addresses: 10.0.0.5",
            "",
            "Adapter: WiFi",
            "  IP Addresses: 10.0.0.9",
        ]
        .into_iter()
        .map(DisplayLine::from)
        .collect();

        let placements = layout(&lines, &spec);
        let got: Vec<(&str, usize, i32)> = placements
            .iter()
            .map(|p| (lines[p.line].as_str(), p.column.index(), p.y))
            .collect();

        assert_eq!(
            got,
            vec![
                ("Adapter: Eth0", 0, 100),
                ("  IP Addresses: 10.0.0.5", 0, 118),
                ("Adapter: WiFi", 1, 100),
                ("  IP Addresses: 10.0.0.9", 1, 118),
            ]
        );
    }

    #[test]
    fn test_max_lines_cap_stops_early() {
        let spec = CanvasSpec {
            max_lines: Some(5),
            ..CanvasSpec::default()
        };
        let placements = layout(&numbered(20), &spec);
        assert_eq!(placements.len(), 5);
        assert_eq!(placements.last().unwrap().line, 4);
    }

    #[test]
    fn test_max_lines_counts_blank_lines() {
        let spec = CanvasSpec {
            max_lines: Some(3),
            ..CanvasSpec::default()
        };
        let placements = layout(&format_lines("a\n\nb\nc"), &spec);
        assert_eq!(placements.len(), 2);
    }

    #[test]
    fn test_placements_never_exceed_non_blank_count() {
        let spec = three_row_spec();
        let lines = format_lines("a\n\nb\n\nc\nd\ne\nf\ng\nh\ni");
        let non_blank = lines.iter().filter(|l| !l.is_blank()).count();
        assert!(layout(&lines, &spec).len() <= non_blank);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let spec = three_row_spec();
        let lines = numbered(12);
        assert_eq!(layout(&lines, &spec), layout(&lines, &spec));
    }

    #[test]
    fn test_huge_pitch_ends_the_column_instead_of_overflowing() {
        let spec = CanvasSpec {
            height: i32::MAX as u32,
            line_pitch: i32::MAX as u32,
            ..CanvasSpec::default()
        };
        let placements = layout(&numbered(3), &spec);

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].column, Column::Left);
        assert_eq!(placements[1].column, Column::Right);
        assert!(placements.iter().all(|p| p.y == spec.body_top));
        assert_eq!(column_capacity(&spec), 1);
    }

    #[test]
    fn test_extreme_body_top_does_not_overflow_capacity() {
        let spec = CanvasSpec {
            body_top: i32::MIN,
            line_pitch: 1,
            ..CanvasSpec::default()
        };
        assert!(column_capacity(&spec) > 1);
    }

    #[test]
    fn test_body_below_limit_places_nothing() {
        let spec = CanvasSpec {
            height: 150,
            bottom_margin: 100,
            ..CanvasSpec::default()
        };
        assert!(layout(&numbered(3), &spec).is_empty());
        assert_eq!(column_capacity(&spec), 0);
    }
}
