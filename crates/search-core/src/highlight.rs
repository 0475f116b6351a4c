use serde::{Deserialize, Serialize};

use crate::nav::Navigator;
use crate::types::MatchRecord;

/// Where the presentation layer should scroll to bring the current match
/// into view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrollTarget {
    /// Start offset into the flat buffer.
    Offset(usize),
    /// Page plus the top-left corner of the match region.
    PagePoint { page: usize, x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentMatch {
    pub record: MatchRecord,
    pub scroll: ScrollTarget,
}

/// Draw instructions for the presentation layer: one uniform pass over every
/// match plus a distinguished pass for the current one. Pure projection of
/// the navigator state; nothing here renders or mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightInstructions {
    pub all: Vec<MatchRecord>,
    pub current: Option<CurrentMatch>,
}

pub fn emit(nav: &Navigator) -> HighlightInstructions {
    let current = nav.current().map(|record| CurrentMatch {
        record: *record,
        scroll: scroll_target(record),
    });
    HighlightInstructions {
        all: nav.records().to_vec(),
        current,
    }
}

fn scroll_target(record: &MatchRecord) -> ScrollTarget {
    match record {
        MatchRecord::Text { start, .. } => ScrollTarget::Offset(*start),
        MatchRecord::Page { page, region } => {
            let (x, y) = region.top_left();
            ScrollTarget::PagePoint { page: *page, x, y }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Region;

    #[test]
    fn empty_navigator_emits_nothing() {
        let nav = Navigator::new();
        let instructions = emit(&nav);
        assert!(instructions.all.is_empty());
        assert!(instructions.current.is_none());
    }

    #[test]
    fn text_match_scrolls_to_start_offset() {
        let mut nav = Navigator::new();
        nav.start_new(vec![
            MatchRecord::Text { start: 4, end: 9 },
            MatchRecord::Text { start: 20, end: 25 },
        ]);
        let instructions = emit(&nav);
        assert_eq!(instructions.all.len(), 2);
        let current = instructions.current.unwrap();
        assert_eq!(current.record, MatchRecord::Text { start: 4, end: 9 });
        assert_eq!(current.scroll, ScrollTarget::Offset(4));
    }

    #[test]
    fn page_match_scrolls_to_region_top_left() {
        let mut nav = Navigator::new();
        nav.start_new(vec![MatchRecord::Page {
            page: 2,
            region: Region::new(72.0, 144.0, 128.0, 156.0),
        }]);
        let current = emit(&nav).current.unwrap();
        assert_eq!(
            current.scroll,
            ScrollTarget::PagePoint {
                page: 2,
                x: 72.0,
                y: 144.0
            }
        );
    }

    #[test]
    fn follows_the_navigator_cursor() {
        let mut nav = Navigator::new();
        nav.start_new(vec![
            MatchRecord::Text { start: 0, end: 1 },
            MatchRecord::Text { start: 5, end: 6 },
        ]);
        nav.next().unwrap();
        let current = emit(&nav).current.unwrap();
        assert_eq!(current.scroll, ScrollTarget::Offset(5));
    }
}
