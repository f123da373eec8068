pub mod catalog;
pub mod tag;

pub use catalog::{LinkBuilderType, LinkChannel, LinkProduct};
pub use tag::{CampaignTag, TrackerTag, MAX_CUSTOM_TEXT_LEN, MAX_TRACKER_LEN};

/// Lowercases and maps every whitespace character, `+`, and `_` to a dash.
/// All tag fragments share this shape.
pub fn slugify(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '+' || c == '_' {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Attaches query parameters to a base URL: free-form `params` first, then
/// `bannerid=<id>`, joined with `&` and introduced by `?` unless the base
/// already carries a query. An empty base yields nothing.
pub fn append_params(base: &str, params: &str, banner_id: &str) -> Option<String> {
    if base.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if !params.is_empty() {
        parts.push(params.to_string());
    }
    if !banner_id.is_empty() {
        parts.push(format!("bannerid={}", banner_id));
    }

    let mut url = base.to_string();
    if !parts.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&parts.join("&"));
    }
    Some(url)
}
