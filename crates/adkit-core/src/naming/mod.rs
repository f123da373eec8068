pub mod ad;
pub mod adset;
pub mod campaign;

pub use ad::AdSpec;
pub use adset::AdSetSpec;
pub use campaign::CampaignSpec;

use chrono::{Datelike, NaiveDate};

const MONTH_TOKENS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Date segment used by the campaign and ad builders, e.g. `02JAN`.
/// A missing date renders as the placeholder, like every other field.
pub fn format_date_token(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{:02}{}", date.day(), MONTH_TOKENS[date.month0() as usize]),
        None => "DATE".to_string(),
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
