use crate::error::SearchError;
use crate::highlight::{self, HighlightInstructions};
use crate::history::SearchHistory;
use crate::matcher;
use crate::nav::Navigator;
use crate::pattern::{CompiledPattern, SearchConfig};
use crate::source::DocumentSource;
use crate::types::{Direction, SearchOutcome};

/// Search state for one open document: the source, the current result set,
/// and the session's term history. One session per document; reusable across
/// any number of searches.
pub struct SearchSession {
    source: DocumentSource,
    nav: Navigator,
    history: SearchHistory,
}

impl SearchSession {
    pub fn new(source: impl Into<DocumentSource>) -> Self {
        Self::with_history(source, SearchHistory::new())
    }

    pub fn with_history(source: impl Into<DocumentSource>, history: SearchHistory) -> Self {
        Self {
            source: source.into(),
            nav: Navigator::new(),
            history,
        }
    }

    /// Run a full search: normalize, scan, replace the result set, record
    /// the term. On a source failure the previous result set is left
    /// untouched.
    pub fn search(
        &mut self,
        term: &str,
        case_sensitive: bool,
        whole_word: bool,
    ) -> Result<SearchOutcome, SearchError> {
        let config = SearchConfig::new(term, case_sensitive, whole_word);
        let pattern = CompiledPattern::compile(config)?;
        let records = matcher::find_all(&pattern, &self.source)?;
        self.history.record(term);
        self.nav.start_new(records);
        if self.nav.is_empty() {
            Ok(SearchOutcome::NotFound)
        } else {
            Ok(SearchOutcome::Found {
                count: self.nav.len(),
                highlights: highlight::emit(&self.nav),
            })
        }
    }

    pub fn advance(&mut self, direction: Direction) -> Result<HighlightInstructions, SearchError> {
        self.nav.advance(direction)?;
        Ok(highlight::emit(&self.nav))
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.terms()
    }

    pub fn position_display(&self) -> String {
        self.nav.position_display()
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }
}
