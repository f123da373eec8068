use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::naming::or_placeholder;

/// Fields for an ad-set name describing the targeted audience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdSetSpec {
    pub target_type: String,
    pub category: String,
    pub audience: String,
    pub location: String,
    pub gender: String,
    pub age: String,
}

impl AdSetSpec {
    /// `TYPE_CAT_AUD_LOC_GENDER_AGE`, uppercased. An unset gender means
    /// no gender targeting and renders as `ALL`.
    pub fn build(&self) -> String {
        let parts = [
            or_placeholder(&self.target_type, "TYPE"),
            or_placeholder(&self.category, "CAT"),
            or_placeholder(&self.audience, "AUD"),
            or_placeholder(&self.location, "LOC"),
            or_placeholder(&self.gender, "ALL"),
            or_placeholder(&self.age, "AGE"),
        ];
        parts.join("_").to_uppercase()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.target_type.is_empty() {
            return Err(CoreError::MissingTargetType);
        }
        Ok(())
    }
}
