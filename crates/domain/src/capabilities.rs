use serde::{Deserialize, Serialize};

const FEATURE_DELIMITER: char = ';';
const FEATURE_FLOAT: &str = "float";
const FEATURE_BATCH_INDEX: &str = "batch-index";
const FEATURE_REPLICAS_ALL: &str = "replicas-all";

/// Optional server capabilities advertised through the `features` info key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityFlags {
    pub has_batch_index: bool,
    pub has_replicas_all: bool,
    pub has_double: bool,
}

impl CapabilityFlags {
    /// Scans a `;`-delimited feature list.
    ///
    /// Tokens must match exactly (case-sensitive); anything else is ignored.
    /// Scanning stops as soon as every known capability has been seen.
    pub fn parse(features: &str) -> Self {
        let mut flags = Self::default();

        for token in features.split(FEATURE_DELIMITER) {
            if flags.all() {
                break;
            }
            match token {
                FEATURE_FLOAT => flags.has_double = true,
                FEATURE_BATCH_INDEX => flags.has_batch_index = true,
                FEATURE_REPLICAS_ALL => flags.has_replicas_all = true,
                _ => {}
            }
        }

        flags
    }

    pub fn all(&self) -> bool {
        self.has_batch_index && self.has_replicas_all && self.has_double
    }
}

impl From<&str> for CapabilityFlags {
    fn from(features: &str) -> Self {
        Self::parse(features)
    }
}
