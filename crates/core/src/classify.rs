//! Classification of string-tagged CMS records into closed variant families.

/// Outcome of matching a record's `key` tag against a closed set of variants.
///
/// `Unmatched` is an expected outcome: records tagged with a key this crate
/// does not know are dropped from the document, not reported as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<K> {
    Matched(K),
    /// The tag that did not match any known variant.
    Unmatched(String),
}

impl<K> Classification<K> {
    /// Returns the matched variant, if any.
    pub fn matched(self) -> Option<K> {
        match self {
            Classification::Matched(kind) => Some(kind),
            Classification::Unmatched(_) => None,
        }
    }

    /// Returns true if the tag matched a known variant.
    pub fn is_matched(&self) -> bool {
        matches!(self, Classification::Matched(_))
    }
}
