use std::collections::VecDeque;

const CAPACITY: usize = 10;

/// Recency-bounded ring of past search terms, most recent first. Duplicate
/// terms (exact, case-sensitive comparison of the term as typed) are moved
/// to the front rather than re-inserted.
#[derive(Debug, Default, Clone)]
pub struct SearchHistory {
    entries: VecDeque<String>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms(terms: impl IntoIterator<Item = String>) -> Self {
        let mut history = Self::new();
        // Incoming order is most-recent-first; replay oldest first so the
        // ring ends up in the same order.
        let terms: Vec<String> = terms.into_iter().collect();
        for term in terms.into_iter().rev() {
            history.record(&term);
        }
        history
    }

    pub fn record(&mut self, term: &str) {
        if let Some(pos) = self.entries.iter().position(|t| t == term) {
            self.entries.remove(pos);
        }
        self.entries.push_front(term.to_string());
        self.entries.truncate(CAPACITY);
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first() {
        let mut history = SearchHistory::new();
        history.record("one");
        history.record("two");
        history.record("three");
        let terms: Vec<&str> = history.terms().collect();
        assert_eq!(terms, vec!["three", "two", "one"]);
    }

    #[test]
    fn repeat_moves_to_front_without_growing() {
        let mut history = SearchHistory::new();
        history.record("alpha");
        history.record("beta");
        history.record("alpha");
        let terms: Vec<&str> = history.terms().collect();
        assert_eq!(terms, vec!["alpha", "beta"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut history = SearchHistory::new();
        history.record("Term");
        history.record("term");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn capacity_evicts_the_oldest() {
        let mut history = SearchHistory::new();
        for i in 0..12 {
            history.record(&format!("term{i}"));
        }
        assert_eq!(history.len(), 10);
        let terms: Vec<&str> = history.terms().collect();
        assert_eq!(terms.first(), Some(&"term11"));
        assert_eq!(terms.last(), Some(&"term2"));
    }

    #[test]
    fn from_terms_round_trips_order() {
        let saved = vec!["newest".to_string(), "middle".to_string(), "oldest".to_string()];
        let history = SearchHistory::from_terms(saved.clone());
        let terms: Vec<String> = history.terms().map(str::to_string).collect();
        assert_eq!(terms, saved);
    }
}
