use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::link::slugify;

/// Display limit for the channel/type/post tracker fragment. Crossing it
/// is reported, not rejected: the over-long string is still usable.
pub const MAX_TRACKER_LEN: usize = 50;

/// Display limit for the free-text tail of a campaign tag.
pub const MAX_CUSTOM_TEXT_LEN: usize = 45;

/// Slugified concatenation of a channel fragment, a business-line
/// fragment, and free text, e.g. `ads-fb-life-summer-sale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerTag {
    pub value: String,
}

impl TrackerTag {
    pub fn new(channel: &str, builder_type: &str, post: &str) -> Self {
        let raw = format!("{}{}{}", channel, builder_type, post);
        Self {
            value: slugify(&raw),
        }
    }

    pub fn over_limit(&self) -> bool {
        self.value.chars().count() > MAX_TRACKER_LEN
    }
}

/// Structured tag for the dash-delimited convention
/// `source-method-platform-creative-dYYYYMMDD-sequence-customtext`, where
/// the custom text is `brand-productcode-freetext` slugified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignTag {
    pub source: String,
    pub method: String,
    pub platform: String,
    pub creative: String,
    /// Digit-only date, e.g. `20260115`.
    pub date: String,
    /// Running sequence within the date, e.g. `s1`.
    pub sequence: String,
    pub brand: String,
    pub product_code: String,
    pub freetext: String,
}

impl CampaignTag {
    /// The slugified `brand-productcode-freetext` tail; empty pieces are
    /// skipped rather than leaving doubled dashes.
    pub fn custom_text(&self) -> String {
        let parts: Vec<&str> = [
            self.brand.as_str(),
            self.product_code.as_str(),
            self.freetext.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
        slugify(&parts.join("-"))
    }

    pub fn custom_text_over_limit(&self) -> bool {
        self.custom_text().chars().count() > MAX_CUSTOM_TEXT_LEN
    }

    /// Joins the populated segments with dashes; the date segment carries
    /// a `d` marker.
    pub fn build(&self) -> String {
        let date = if self.date.is_empty() {
            String::new()
        } else {
            format!("d{}", self.date)
        };
        let custom = self.custom_text();

        let parts: Vec<&str> = [
            self.source.as_str(),
            self.method.as_str(),
            self.platform.as_str(),
            self.creative.as_str(),
            date.as_str(),
            self.sequence.as_str(),
            custom.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
        parts.join("-")
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            (self.source.as_str(), "source"),
            (self.method.as_str(), "method"),
            (self.platform.as_str(), "platform"),
            (self.creative.as_str(), "creative"),
            (self.date.as_str(), "date"),
            (self.sequence.as_str(), "sequence"),
        ];
        for (value, field) in required {
            if value.is_empty() {
                return Err(CoreError::MissingTagField(field));
            }
        }
        Ok(())
    }
}
