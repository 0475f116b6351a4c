use serde::{Deserialize, Serialize};

use crate::highlight::HighlightInstructions;

/// Rectangle in a page's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Region {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn top_left(&self) -> (f32, f32) {
        (self.x0, self.y0)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// One occurrence of the search term. All records of a result set carry the
/// same variant, fixed by which source variant produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchRecord {
    /// Byte range into a flat text buffer, start < end.
    Text { start: usize, end: usize },
    /// Occurrence on a page of a paginated source, page index 0-based.
    Page { page: usize, region: Region },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found {
        count: usize,
        highlights: HighlightInstructions,
    },
    NotFound,
}
