use serde::{Deserialize, Serialize};

/// A navigable page region, measured live from its element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// The hash the owning nav link points at, e.g. `#about`.
    pub id: String,
    /// Index of the owning `.nav-link` in document order.
    pub link: usize,
    /// Offset of the section's top from the document top.
    pub top: f64,
    pub height: f64,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, link: usize, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            link,
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.bottom()
    }
}

/// Everything one scroll derivation reads. Built fresh per event and never
/// kept around, so layout changes need no invalidation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Sections in document order of their nav links.
    #[serde(default)]
    pub sections: Vec<SectionDescriptor>,
}

impl ScrollSnapshot {
    pub fn new(scroll_y: f64, viewport_height: f64, sections: Vec<SectionDescriptor>) -> Self {
        Self {
            scroll_y,
            viewport_height,
            sections,
        }
    }
}

/// A static description of a page's sections, for replaying scroll offsets
/// outside a browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport_height: f64,
    pub sections: Vec<SectionDescriptor>,
}

impl PageLayout {
    pub fn snapshot(&self, scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot::new(scroll_y, self.viewport_height, self.sections.clone())
    }

    /// Largest meaningful scroll offset: the bottom of the last section
    /// minus one viewport.
    pub fn max_scroll(&self) -> f64 {
        let bottom = self
            .sections
            .iter()
            .map(SectionDescriptor::bottom)
            .fold(0.0, f64::max);
        (bottom - self.viewport_height).max(0.0)
    }
}
