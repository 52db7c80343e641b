use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Characters stripped from document bodies before splitting into
    /// tokens. Kept as one named set so the normalization rules stay
    /// auditable.
    pub static ref PUNCTUATION: HashSet<char> = [
        '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_',
        '`', '~', '(', ')',
    ]
    .iter()
    .copied()
    .collect();
}

pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Collapse every run of whitespace (spaces, tabs, CR, LF) to a single space
    fn collapse_whitespace(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if !in_run {
                    out.push(' ');
                    in_run = true;
                }
            } else {
                out.push(c);
                in_run = false;
            }
        }
        out
    }

    /// Remove the fixed punctuation set
    fn punctuation_filter(&self, text: &str) -> String {
        text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
    }

    /// Full normalization pipeline: collapse whitespace, strip punctuation,
    /// split on single spaces, lowercase, drop empty pieces.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let collapsed = self.collapse_whitespace(text);
        let cleaned = self.punctuation_filter(&collapsed);
        cleaned
            .split(' ')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Analyze and return unique tokens (for indexing)
    pub fn analyze_unique(&self, text: &str) -> HashSet<String> {
        self.analyze(text).into_iter().collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
