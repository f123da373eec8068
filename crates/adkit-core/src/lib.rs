pub mod batch;
pub mod clean;
pub mod error;
pub mod link;
pub mod naming;

pub use clean::{normalize_phones, parse_names, NameBatch, ParsedName};
pub use error::CoreError;
pub use link::{CampaignTag, LinkBuilderType, LinkChannel, LinkProduct, TrackerTag};
pub use naming::{AdSetSpec, AdSpec, CampaignSpec};
