use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::naming::{format_date_token, or_placeholder};

/// Fields for a creative-level ad name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdSpec {
    pub page: String,
    pub brand: String,
    pub product: String,
    pub creative: String,
    pub format: String,
    pub date: Option<NaiveDate>,
}

impl AdSpec {
    /// `(PAGE)_BRAND-PROD_CREATIVE_TYPE_DDMMM`, uppercased. The product is
    /// a dash suffix on the brand segment and is dropped when empty.
    pub fn build(&self) -> String {
        let page = if self.page.is_empty() {
            "PAGE".to_string()
        } else {
            format!("({})", self.page)
        };

        let mut brand_product = or_placeholder(&self.brand, "BRAND").to_string();
        if !self.product.is_empty() {
            brand_product.push_str(&format!("-{}", self.product));
        }

        let date = format_date_token(self.date);
        let parts = [
            page.as_str(),
            brand_product.as_str(),
            or_placeholder(&self.creative, "CREATIVE"),
            or_placeholder(&self.format, "TYPE"),
            date.as_str(),
        ];
        parts.join("_").to_uppercase()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.brand.is_empty() {
            return Err(CoreError::MissingBrand);
        }
        Ok(())
    }
}
