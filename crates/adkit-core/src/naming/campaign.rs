use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::naming::{format_date_token, or_placeholder};

/// Fields for a standardized campaign name. Empty fields render as their
/// uppercase placeholder so partial input still produces a preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSpec {
    pub objective: String,
    pub brand: String,
    pub category: String,
    pub product: String,
    pub audience: String,
    pub date: Option<NaiveDate>,
    pub page: String,
    pub addon: String,
}

impl CampaignSpec {
    /// `OBJ_BRAND_CAT_PROD_AUD_DDMMM`, with `_(page)` and `_addon`
    /// appended when present, uppercased as a whole.
    pub fn build(&self) -> String {
        let date = format_date_token(self.date);
        let parts = [
            or_placeholder(&self.objective, "OBJ"),
            or_placeholder(&self.brand, "BRAND"),
            or_placeholder(&self.category, "CAT"),
            or_placeholder(&self.product, "PROD"),
            or_placeholder(&self.audience, "AUD"),
            date.as_str(),
        ];

        let mut name = parts.join("_");
        if !self.page.is_empty() {
            name.push_str(&format!("_({})", self.page));
        }
        if !self.addon.is_empty() {
            name.push_str(&format!("_{}", self.addon));
        }
        name.to_uppercase()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.objective.is_empty() {
            return Err(CoreError::MissingObjective);
        }
        if self.brand.is_empty() {
            return Err(CoreError::MissingBrand);
        }
        if self.product.is_empty() {
            return Err(CoreError::MissingProduct);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CampaignSpec;
    use crate::error::CoreError;
    use chrono::NaiveDate;

    fn filled() -> CampaignSpec {
        CampaignSpec {
            objective: "CONVERSIONS".to_string(),
            brand: "THAILIFE".to_string(),
            category: "LIFE".to_string(),
            product: "HAPPY".to_string(),
            audience: "broad".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 5),
            page: String::new(),
            addon: String::new(),
        }
    }

    #[test]
    fn build_joins_and_uppercases() {
        assert_eq!(filled().build(), "CONVERSIONS_THAILIFE_LIFE_HAPPY_BROAD_05MAR");
    }

    #[test]
    fn empty_fields_render_placeholders() {
        let name = CampaignSpec::default().build();
        assert_eq!(name, "OBJ_BRAND_CAT_PROD_AUD_DATE");
    }

    #[test]
    fn page_wrapped_in_parens_and_addon_appended() {
        let spec = CampaignSpec {
            page: "Line OA".to_string(),
            addon: "test".to_string(),
            ..filled()
        };
        assert_eq!(
            spec.build(),
            "CONVERSIONS_THAILIFE_LIFE_HAPPY_BROAD_05MAR_(LINE OA)_TEST"
        );
    }

    #[test]
    fn validate_requires_objective_brand_product() {
        assert_eq!(
            CampaignSpec::default().validate(),
            Err(CoreError::MissingObjective)
        );
        let spec = CampaignSpec {
            product: String::new(),
            ..filled()
        };
        assert_eq!(spec.validate(), Err(CoreError::MissingProduct));
        assert_eq!(filled().validate(), Ok(()));
    }
}
