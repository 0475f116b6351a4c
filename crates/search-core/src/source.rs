use thiserror::Error;

use crate::types::Region;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("document content is no longer available")]
    Closed,
    #[error("page content unreadable: {0}")]
    Unreadable(String),
}

/// One page of a paginated document. Text extraction and geometry lookup
/// are independent queries: `locate` is keyed by an exact substring of the
/// page text and returns every occurrence in the geometry engine's native
/// order.
pub trait Page {
    fn text(&self) -> Result<String, SourceError>;
    fn locate(&self, needle: &str) -> Result<Vec<Region>, SourceError>;
}

/// Document held as one contiguous text buffer.
#[derive(Debug)]
pub struct FlatTextSource {
    text: String,
}

impl FlatTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Document held as an ordered sequence of pages. Zero pages is valid.
pub struct PaginatedSource {
    pages: Vec<Box<dyn Page>>,
}

impl PaginatedSource {
    pub fn new(pages: Vec<Box<dyn Page>>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> impl Iterator<Item = &dyn Page> {
        self.pages.iter().map(|p| &**p)
    }
}

pub enum DocumentSource {
    Flat(FlatTextSource),
    Paginated(PaginatedSource),
}

impl From<FlatTextSource> for DocumentSource {
    fn from(source: FlatTextSource) -> Self {
        DocumentSource::Flat(source)
    }
}

impl From<PaginatedSource> for DocumentSource {
    fn from(source: PaginatedSource) -> Self {
        DocumentSource::Paginated(source)
    }
}
