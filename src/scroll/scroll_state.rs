/// Window of rows shown by a fixed-height list
///
/// Moves only as far as needed to keep the highlighted row on screen, so
/// hovering a visible row never shifts the list under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_rows: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        self.max_offset = content_rows.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    /// Scroll so `index` is inside the window
    pub fn ensure_visible(&mut self, index: usize) {
        if self.viewport_height == 0 {
            return;
        }

        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.viewport_height {
            self.offset = index + 1 - self.viewport_height;
        }
        self.offset = self.offset.min(self.max_offset);
    }

    /// Content index shown at `row` of the window, if any
    pub fn index_at_row(&self, row: usize, content_rows: usize) -> Option<usize> {
        if row >= self.viewport_height {
            return None;
        }
        let index = self.offset + row;
        (index < content_rows).then_some(index)
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.max_offset = 0;
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
