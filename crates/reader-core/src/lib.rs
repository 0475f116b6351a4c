pub mod config;
pub mod pdf;
pub mod state;
pub mod text;
pub mod types;

pub use pdf::PdfDocument;
pub use text::load_text;
