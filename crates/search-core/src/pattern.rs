use regex::{Regex, RegexBuilder};

use crate::error::SearchError;

/// Options for one search invocation, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub term: String,
    pub case_sensitive: bool,
    pub whole_word: bool,
}

impl SearchConfig {
    pub fn new(term: impl Into<String>, case_sensitive: bool, whole_word: bool) -> Self {
        Self {
            term: term.into(),
            case_sensitive,
            whole_word,
        }
    }
}

/// A search term compiled into a literal-matching regex. The term is escaped
/// so metacharacters match themselves; whole-word mode wraps it in word
/// boundaries; case folding is delegated to the regex engine so the same
/// fold applies to pattern and haystack alike and byte offsets stay aligned
/// with the original buffer.
pub struct CompiledPattern {
    regex: Regex,
    config: SearchConfig,
}

impl CompiledPattern {
    pub fn compile(config: SearchConfig) -> Result<Self, SearchError> {
        if config.term.is_empty() {
            return Err(SearchError::InvalidPattern);
        }
        let escaped = regex::escape(&config.term);
        let pattern = if config.whole_word {
            format!(r"\b{escaped}\b")
        } else {
            escaped
        };
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(!config.case_sensitive)
            .build()
            .map_err(|_| SearchError::InvalidPattern)?;
        Ok(Self { regex, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// All non-overlapping matches in `text`, left to right, as byte ranges.
    pub fn find_in(&self, text: &str) -> Vec<(usize, usize)> {
        self.regex.find_iter(text).map(|m| (m.start(), m.end())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(term: &str, case_sensitive: bool, whole_word: bool) -> CompiledPattern {
        CompiledPattern::compile(SearchConfig::new(term, case_sensitive, whole_word)).unwrap()
    }

    #[test]
    fn rejects_empty_term() {
        assert!(matches!(
            CompiledPattern::compile(SearchConfig::new("", true, false)),
            Err(SearchError::InvalidPattern)
        ));
    }

    #[test]
    fn whitespace_terms_are_searchable() {
        let p = compile("  ", true, false);
        assert_eq!(p.find_in("a  b c"), vec![(1, 3)]);
    }

    #[test]
    fn metacharacters_match_literally() {
        let p = compile("a.b*", true, false);
        assert_eq!(p.find_in("a.b* axby a.b*"), vec![(0, 4), (10, 14)]);
        assert!(p.find_in("aXb").is_empty());
    }

    #[test]
    fn case_insensitive_matches_both_cases() {
        let p = compile("hello", false, false);
        assert_eq!(p.find_in("Hello hello HELLO").len(), 3);
    }

    #[test]
    fn case_sensitive_is_exact() {
        let p = compile("Hello", true, false);
        assert_eq!(p.find_in("Hello hello HELLO"), vec![(0, 5)]);
    }

    #[test]
    fn whole_word_requires_boundaries() {
        let p = compile("cat", true, true);
        assert_eq!(p.find_in("concatenate cat category"), vec![(12, 15)]);
        let plain = compile("cat", true, false);
        assert_eq!(plain.find_in("concatenate cat category").len(), 3);
    }

    #[test]
    fn matches_are_non_overlapping() {
        let p = compile("aa", true, false);
        assert_eq!(p.find_in("aaaa"), vec![(0, 2), (2, 4)]);
    }
}
