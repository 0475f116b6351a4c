use crate::error::SearchError;
use crate::types::{Direction, MatchRecord};

/// Owns the ordered result set and the cursor into it. Empty or
/// Active(index); reusable across searches, navigation wraps both ways.
#[derive(Default)]
pub struct Navigator {
    records: Vec<MatchRecord>,
    current: Option<usize>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the result set wholesale. Jumps to the first match when the
    /// new set is non-empty.
    pub fn start_new(&mut self, records: Vec<MatchRecord>) {
        self.current = if records.is_empty() { None } else { Some(0) };
        self.records = records;
    }

    pub fn advance(&mut self, direction: Direction) -> Result<MatchRecord, SearchError> {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    pub fn next(&mut self) -> Result<MatchRecord, SearchError> {
        let index = self.current.ok_or(SearchError::EmptyResultSet)?;
        let index = (index + 1) % self.records.len();
        self.current = Some(index);
        Ok(self.records[index])
    }

    pub fn previous(&mut self) -> Result<MatchRecord, SearchError> {
        let index = self.current.ok_or(SearchError::EmptyResultSet)?;
        let index = (index + self.records.len() - 1) % self.records.len();
        self.current = Some(index);
        Ok(self.records[index])
    }

    pub fn current(&self) -> Option<&MatchRecord> {
        self.current.map(|i| &self.records[i])
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 1-based "position/total" for the status line, "0/0" when empty.
    pub fn position_display(&self) -> String {
        match self.current {
            Some(index) => format!("{}/{}", index + 1, self.records.len()),
            None => "0/0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<MatchRecord> {
        (0..n)
            .map(|i| MatchRecord::Text {
                start: i * 10,
                end: i * 10 + 5,
            })
            .collect()
    }

    #[test]
    fn new_search_jumps_to_first() {
        let mut nav = Navigator::new();
        nav.start_new(records(3));
        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.position_display(), "1/3");
    }

    #[test]
    fn empty_search_clears_cursor() {
        let mut nav = Navigator::new();
        nav.start_new(records(2));
        nav.start_new(Vec::new());
        assert_eq!(nav.current_index(), None);
        assert_eq!(nav.position_display(), "0/0");
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut nav = Navigator::new();
        nav.start_new(records(3));
        for _ in 0..3 {
            nav.next().unwrap();
        }
        assert_eq!(nav.current_index(), Some(0));
        for _ in 0..3 {
            nav.previous().unwrap();
        }
        assert_eq!(nav.current_index(), Some(0));
        nav.previous().unwrap();
        assert_eq!(nav.current_index(), Some(2));
    }

    #[test]
    fn navigation_on_empty_set_is_an_error() {
        let mut nav = Navigator::new();
        assert!(matches!(nav.next(), Err(SearchError::EmptyResultSet)));
        assert!(matches!(nav.previous(), Err(SearchError::EmptyResultSet)));
        nav.start_new(records(1));
        assert!(nav.next().is_ok());
        nav.start_new(Vec::new());
        assert!(matches!(nav.next(), Err(SearchError::EmptyResultSet)));
    }

    #[test]
    fn single_match_stays_put() {
        let mut nav = Navigator::new();
        nav.start_new(records(1));
        assert_eq!(nav.next().unwrap(), MatchRecord::Text { start: 0, end: 5 });
        assert_eq!(nav.position_display(), "1/1");
    }
}
