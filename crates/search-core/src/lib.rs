pub mod error;
pub mod highlight;
pub mod history;
pub mod matcher;
pub mod nav;
pub mod pattern;
pub mod session;
pub mod source;
pub mod types;

pub use error::SearchError;
pub use session::SearchSession;
pub use source::{DocumentSource, FlatTextSource, Page, PaginatedSource, SourceError};
pub use types::{Direction, MatchRecord, Region, SearchOutcome};
