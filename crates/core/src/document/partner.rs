use serde::{Deserialize, Serialize};

use super::Indexed;
use crate::asset::ImageRef;

/// A partner logo tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerItem {
    pub index: i64,
    pub logo_image: Option<ImageRef>,
    pub url: Option<String>,
}

impl Indexed for PartnerItem {
    fn index(&self) -> i64 {
        self.index
    }
}
