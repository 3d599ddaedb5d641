//! Rendering configuration.

/// Soft-wrap width used when none is configured.
pub const DEFAULT_WIDTH: usize = 65;

/// How ordered list items are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemMarkers {
    /// Every ordered item is written as `1.`; readers renumber on display.
    #[default]
    Fixed,
    /// Items are written with their ordinal, counting from the list start.
    Ordinal,
}

/// Options controlling a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target line width; `0` disables wrapping.
    pub width: usize,
    /// How ordered list items are numbered.
    pub item_markers: ItemMarkers,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            item_markers: ItemMarkers::default(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_item_markers(mut self, item_markers: ItemMarkers) -> Self {
        self.item_markers = item_markers;
        self
    }
}
