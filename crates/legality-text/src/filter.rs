//! Content filter for custom names.
//!
//! Only user-entered names are filtered; default species names come from
//! the games themselves and never pass through here.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Built-in denylist patterns
    static ref DEFAULT_PATTERNS: Vec<Regex> = [
        r"fuck",
        r"sh[i1]t",
        r"b[i1]tch",
        r"cunt",
        r"a[s$]{2}hole",
        r"wh[o0]re",
        r"n[a@]z[i1]",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
    .collect();

    /// Separators people insert to dodge the filter
    static ref SEPARATORS: Regex = Regex::new(r"[\s._\-\u{2019}']+").unwrap();
}

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid denylist pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Decides whether a custom name contains disallowed content
pub trait WordFilter: Send + Sync {
    /// Returns the offending fragment when the text is filtered
    fn check(&self, text: &str) -> Option<String>;

    fn is_filtered(&self, text: &str) -> bool {
        self.check(text).is_some()
    }
}

/// Regex denylist filter
#[derive(Debug, Clone, Default)]
pub struct DenyListFilter {
    extra: Vec<Regex>,
}

impl DenyListFilter {
    /// Filter with only the built-in patterns
    pub fn new() -> Self {
        Self::default()
    }

    /// Add literal terms on top of the built-in patterns
    pub fn with_terms<I, S>(terms: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extra = Vec::new();
        for term in terms {
            let term = term.as_ref();
            if term.trim().is_empty() {
                continue;
            }
            let pattern = format!("(?i){}", regex::escape(term));
            let regex = Regex::new(&pattern).map_err(|source| FilterError::InvalidPattern {
                pattern: term.to_string(),
                source,
            })?;
            extra.push(regex);
        }
        Ok(Self { extra })
    }

    fn find(&self, text: &str) -> Option<String> {
        DEFAULT_PATTERNS
            .iter()
            .chain(self.extra.iter())
            .find_map(|re| re.find(text).map(|m| m.as_str().to_string()))
    }
}

impl WordFilter for DenyListFilter {
    fn check(&self, text: &str) -> Option<String> {
        if let Some(hit) = self.find(text) {
            return Some(hit);
        }
        let collapsed = SEPARATORS.replace_all(text, "");
        let hit = self.find(&collapsed);
        if let Some(term) = &hit {
            tracing::debug!(%term, "filter matched after collapsing separators");
        }
        hit
    }
}
