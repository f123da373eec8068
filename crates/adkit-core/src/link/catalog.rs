use serde::{Deserialize, Serialize};

/// A traffic channel and the tag fragment it contributes, e.g. the
/// Facebook ads channel contributing `Ads-Fb-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkChannel {
    pub label: String,
    pub value: String,
}

/// A business line and its tag fragment, e.g. car insurance contributing
/// `ins-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBuilderType {
    pub label: String,
    pub value: String,
}

/// A landing-page destination keyed by brand and product display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkProduct {
    pub brand: String,
    pub product: String,
    pub url: String,
}
