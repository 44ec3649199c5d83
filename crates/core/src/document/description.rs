use serde::{Deserialize, Serialize};

use super::Indexed;
use crate::asset::ImageRef;

/// A line of descriptive copy, optionally nested to arbitrary depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionItem {
    pub index: i64,
    pub text: String,
    pub sub_text: Option<String>,
    pub icon: Option<ImageRef>,
    /// Nested items, sorted by index independently of this level.
    pub children: Vec<DescriptionItem>,
}

impl DescriptionItem {
    /// Depth of the deepest nesting below and including this item.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

impl Indexed for DescriptionItem {
    fn index(&self) -> i64 {
        self.index
    }
}
