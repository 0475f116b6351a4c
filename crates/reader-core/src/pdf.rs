mod error;
mod layer;
mod loader;

pub use error::PdfError;
pub use layer::{PageLayer, TextSpan};
pub use loader::PdfDocument;

#[derive(Clone)]
pub struct PdfSummary {
    pub title: Option<String>,
    pub author: Option<String>,
    pub page_count: usize,
}
