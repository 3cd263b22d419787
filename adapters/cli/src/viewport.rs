//! Scrollable window onto the dungeon field, entirely adapter-side state.

/// Rectangular window over the field that scrolling moves around.
///
/// The window never leaves the field: scroll requests that would push any
/// visible cell out of bounds are ignored, mirroring how invalid gameplay
/// inputs are ignored by the engine.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Viewport {
    origin_column: u32,
    origin_row: u32,
    view_columns: u32,
    view_rows: u32,
    field_columns: u32,
    field_rows: u32,
}

impl Viewport {
    /// Creates a window anchored at the field origin, shrunk to fit small
    /// fields.
    pub(crate) fn fitted(
        field_columns: u32,
        field_rows: u32,
        max_view_columns: u32,
        max_view_rows: u32,
    ) -> Self {
        Self {
            origin_column: 0,
            origin_row: 0,
            view_columns: max_view_columns.min(field_columns),
            view_rows: max_view_rows.min(field_rows),
            field_columns,
            field_rows,
        }
    }

    /// Shifts the window by one step per axis, rejecting out-of-range moves.
    pub(crate) fn scroll(&mut self, delta_columns: i64, delta_rows: i64) {
        let Ok(column) = u32::try_from(i64::from(self.origin_column) + delta_columns) else {
            return;
        };
        let Ok(row) = u32::try_from(i64::from(self.origin_row) + delta_rows) else {
            return;
        };

        if column.saturating_add(self.view_columns) > self.field_columns {
            return;
        }
        if row.saturating_add(self.view_rows) > self.field_rows {
            return;
        }

        self.origin_column = column;
        self.origin_row = row;
    }

    /// Upper-left field cell currently visible.
    pub(crate) const fn origin(&self) -> (u32, u32) {
        (self.origin_column, self.origin_row)
    }

    /// Width and height of the visible window in cells.
    pub(crate) const fn size(&self) -> (u32, u32) {
        (self.view_columns, self.view_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn window_shrinks_to_small_fields() {
        let viewport = Viewport::fitted(5, 3, 30, 16);
        assert_eq!(viewport.size(), (5, 3));
    }

    #[test]
    fn scrolling_before_the_origin_is_rejected() {
        let mut viewport = Viewport::fitted(40, 24, 10, 10);
        viewport.scroll(-1, 0);
        viewport.scroll(0, -1);
        assert_eq!(viewport.origin(), (0, 0));
    }

    #[test]
    fn scrolling_stops_at_the_far_edge() {
        let mut viewport = Viewport::fitted(12, 10, 10, 10);
        viewport.scroll(1, 0);
        viewport.scroll(1, 0);
        viewport.scroll(1, 0);
        assert_eq!(viewport.origin(), (2, 0));
    }

    #[test]
    fn full_field_window_never_scrolls() {
        let mut viewport = Viewport::fitted(8, 8, 30, 16);
        viewport.scroll(1, 1);
        assert_eq!(viewport.origin(), (0, 0));
    }
}
