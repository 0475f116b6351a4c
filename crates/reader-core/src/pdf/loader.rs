use std::{cell::RefCell, num::NonZeroUsize, path::Path, rc::Rc};

use lopdf::Document as LoDocument;
use lru::LruCache;

use search_core::{Page, PaginatedSource, Region, SourceError};

use super::error::PdfError;
use super::layer::PageLayer;
use super::PdfSummary;

const CACHE_PAGES: usize = 8;

fn cache_capacity() -> NonZeroUsize {
    NonZeroUsize::new(CACHE_PAGES).unwrap_or(NonZeroUsize::MIN)
}

struct Shared {
    doc: LoDocument,
    pages: Vec<(u32, u16)>,
    cache: RefCell<LruCache<usize, Rc<PageLayer>>>,
}

impl Shared {
    fn layer(&self, index: usize) -> Result<Rc<PageLayer>, PdfError> {
        if let Some(layer) = self.cache.borrow_mut().get(&index) {
            return Ok(Rc::clone(layer));
        }
        let page_id = *self.pages.get(index).ok_or(PdfError::InvalidPage(index))?;
        let layer = Rc::new(PageLayer::build(&self.doc, page_id)?);
        self.cache.borrow_mut().put(index, Rc::clone(&layer));
        Ok(layer)
    }
}

/// A PDF opened read-only for the session. Page layers are decoded lazily
/// and kept in a bounded cache shared with the pages handed to the search
/// session.
pub struct PdfDocument {
    shared: Rc<Shared>,
    summary: PdfSummary,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        let doc = LoDocument::load(path)?;
        if doc.is_encrypted() {
            return Err(PdfError::Encrypted);
        }
        let pages_map = doc.get_pages();
        if pages_map.is_empty() {
            return Err(PdfError::Empty);
        }
        let pages: Vec<(u32, u16)> = pages_map.into_values().collect();
        let (title, author) = pdf_metadata(&doc);
        let summary = PdfSummary {
            title,
            author,
            page_count: pages.len(),
        };
        Ok(Self {
            shared: Rc::new(Shared {
                doc,
                pages,
                cache: RefCell::new(LruCache::new(cache_capacity())),
            }),
            summary,
        })
    }

    pub fn summary(&self) -> &PdfSummary {
        &self.summary
    }

    pub fn page_count(&self) -> usize {
        self.shared.pages.len()
    }

    pub fn into_source(self) -> PaginatedSource {
        let pages = (0..self.page_count())
            .map(|index| {
                Box::new(PdfPage {
                    shared: Rc::clone(&self.shared),
                    index,
                }) as Box<dyn Page>
            })
            .collect();
        PaginatedSource::new(pages)
    }
}

struct PdfPage {
    shared: Rc<Shared>,
    index: usize,
}

impl Page for PdfPage {
    fn text(&self) -> Result<String, SourceError> {
        let layer = self.shared.layer(self.index).map_err(source_err)?;
        Ok(layer.text().to_string())
    }

    fn locate(&self, needle: &str) -> Result<Vec<Region>, SourceError> {
        let layer = self.shared.layer(self.index).map_err(source_err)?;
        Ok(layer.locate(needle))
    }
}

fn source_err(err: PdfError) -> SourceError {
    match err {
        PdfError::Io(e) => SourceError::Io(e),
        other => SourceError::Unreadable(other.to_string()),
    }
}

fn pdf_metadata(doc: &LoDocument) -> (Option<String>, Option<String>) {
    let mut title: Option<String> = None;
    let mut author: Option<String> = None;
    if let Ok(info_obj) = doc.trailer.get(b"Info") {
        let dict_opt: Option<lopdf::Dictionary> = if let Ok(info_ref) = info_obj.as_reference() {
            doc.get_dictionary(info_ref).ok().cloned()
        } else if let Ok(dict) = info_obj.as_dict() {
            Some(dict.clone())
        } else {
            None
        };
        if let Some(dict) = dict_opt {
            if let Ok(val) = dict.get(b"Title") {
                title = object_to_string(val);
            }
            if let Ok(val) = dict.get(b"Author") {
                author = object_to_string(val);
            }
        }
    }
    (title, author)
}

fn object_to_string(obj: &lopdf::Object) -> Option<String> {
    match obj {
        lopdf::Object::String(s, _) => Some(String::from_utf8_lossy(&s[..]).to_string()),
        lopdf::Object::Name(n) => Some(String::from_utf8_lossy(n).to_string()),
        _ => None,
    }
}
