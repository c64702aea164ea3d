/// Only the leading words of an indicator phrase are ever checked.
pub const KEYWORDS_PER_INDICATOR: usize = 3;

/// Lower-cased haystack that indicator phrases are tested against.
///
/// An indicator is present when any of its first [`KEYWORDS_PER_INDICATOR`]
/// words occurs as a substring anywhere in the text. The check is crude and
/// over-matches ("lie" matches "believe"); callers rely on that exact
/// behavior, so it must not be tightened here.
#[derive(Debug, Clone)]
pub struct IndicatorMatcher {
    haystack: String,
}

impl IndicatorMatcher {
    pub fn new(text: &str) -> Self {
        Self {
            haystack: text.to_lowercase(),
        }
    }

    pub fn haystack(&self) -> &str {
        &self.haystack
    }

    pub fn present(&self, indicator: &str) -> bool {
        if self.haystack.is_empty() {
            return false;
        }

        indicator
            .to_lowercase()
            .split_whitespace()
            .take(KEYWORDS_PER_INDICATOR)
            .any(|keyword| self.haystack.contains(keyword))
    }

    /// Plain substring test, used by the literal safety-net patterns.
    pub fn contains(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        !term.is_empty() && self.haystack.contains(&term)
    }
}

pub fn present(indicator: &str, text: &str) -> bool {
    IndicatorMatcher::new(text).present(indicator)
}
