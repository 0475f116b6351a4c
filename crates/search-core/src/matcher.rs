use std::collections::VecDeque;

use crate::error::SearchError;
use crate::pattern::CompiledPattern;
use crate::source::{DocumentSource, Page, PaginatedSource};
use crate::types::{MatchRecord, Region};

/// Scan the whole source for every non-overlapping occurrence of the
/// pattern, in document order. A source failure on any page aborts the scan;
/// no partial result set escapes.
pub fn find_all(
    pattern: &CompiledPattern,
    source: &DocumentSource,
) -> Result<Vec<MatchRecord>, SearchError> {
    match source {
        DocumentSource::Flat(flat) => Ok(find_in_buffer(pattern, flat.text())),
        DocumentSource::Paginated(paged) => find_in_pages(pattern, paged),
    }
}

fn find_in_buffer(pattern: &CompiledPattern, text: &str) -> Vec<MatchRecord> {
    pattern
        .find_in(text)
        .into_iter()
        .map(|(start, end)| MatchRecord::Text { start, end })
        .collect()
}

fn find_in_pages(
    pattern: &CompiledPattern,
    paged: &PaginatedSource,
) -> Result<Vec<MatchRecord>, SearchError> {
    let mut records = Vec::new();
    for (index, page) in paged.pages().enumerate() {
        let text = page.text()?;
        let matches = pattern.find_in(&text);
        // Textual matches identify the exact literal substrings present on
        // the page; geometry is then looked up by that literal, since text
        // extraction and geometry are independent page queries. Each
        // distinct literal is located once, and its hits are consumed one
        // per textual occurrence so records come out in the page's own
        // match order even when folding mixes literals.
        let mut located: Vec<(&str, VecDeque<Region>)> = Vec::new();
        for &(start, end) in &matches {
            let literal = &text[start..end];
            if !located.iter().any(|(known, _)| *known == literal) {
                let regions = page.locate(literal)?;
                located.push((literal, regions.into_iter().collect()));
            }
        }
        for (start, end) in matches {
            let literal = &text[start..end];
            let queue = located
                .iter_mut()
                .find(|(known, _)| *known == literal)
                .map(|(_, queue)| queue);
            if let Some(region) = queue.and_then(|queue| queue.pop_front()) {
                records.push(MatchRecord::Page {
                    page: index,
                    region,
                });
            }
        }
    }
    Ok(records)
}
