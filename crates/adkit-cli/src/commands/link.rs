use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::warn;
use url::Url;

use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::parse_date;
use adkit_core::link::append_params;
use adkit_core::{CampaignTag, TrackerTag};

#[derive(Debug, Subcommand)]
pub enum LinkCommand {
    Tracker(TrackerArgs),
    Tag(TagArgs),
    Url(UrlArgs),
}

#[derive(Debug, Args)]
pub struct TrackerArgs {
    /// Channel label or raw fragment, e.g. "Facebook ads" or "Ads-Fb-"
    #[arg(long)]
    pub channel: Option<String>,
    /// Business-line label or raw fragment, e.g. "Lead Agency" or "life-"
    #[arg(long = "type")]
    pub builder_type: Option<String>,
    /// Free text appended after the fragments
    #[arg(long)]
    pub post: Option<String>,
}

pub fn tracker(ctx: &Context<'_>, args: TrackerArgs) -> Result<()> {
    let channel = resolve_fragment(args.channel.as_deref(), |raw| {
        ctx.config.find_channel(raw).map(|c| c.value.clone())
    });
    let builder_type = resolve_fragment(args.builder_type.as_deref(), |raw| {
        ctx.config.find_builder_type(raw).map(|t| t.value.clone())
    });
    let post = args.post.unwrap_or_default();

    let tag = TrackerTag::new(&channel, &builder_type, &post);
    let over_limit = tag.over_limit();
    if over_limit {
        warn!(
            length = tag.value.chars().count(),
            "tracker tag exceeds {} characters", adkit_core::link::MAX_TRACKER_LEN
        );
    }

    if ctx.json {
        print_json(&serde_json::json!({
            "tag": tag.value,
            "over_limit": over_limit,
        }))?;
    } else {
        println!("{}", tag.value);
    }
    Ok(())
}

/// A configured label resolves to its fragment value; anything else is
/// used verbatim.
fn resolve_fragment<F>(raw: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match raw {
        Some(raw) => lookup(raw).unwrap_or_else(|| raw.to_string()),
        None => String::new(),
    }
}

#[derive(Debug, Args)]
pub struct TagArgs {
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub method: Option<String>,
    #[arg(long)]
    pub platform: Option<String>,
    #[arg(long)]
    pub creative: Option<String>,
    /// Tag date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// Running sequence within the date
    #[arg(long, default_value = "s1")]
    pub sequence: String,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long = "product-code")]
    pub product_code: Option<String>,
    #[arg(long)]
    pub freetext: Option<String>,
}

pub fn tag(ctx: &Context<'_>, args: TagArgs) -> Result<()> {
    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw)?.format("%Y%m%d").to_string(),
        None => String::new(),
    };

    let tag = CampaignTag {
        source: args.source.unwrap_or_default(),
        method: args.method.unwrap_or_default(),
        platform: args.platform.unwrap_or_default(),
        creative: args.creative.unwrap_or_default(),
        date,
        sequence: args.sequence,
        brand: args.brand.unwrap_or_default(),
        product_code: args.product_code.unwrap_or_default(),
        freetext: args.freetext.unwrap_or_default(),
    };

    tag.validate()?;
    if tag.custom_text_over_limit() {
        warn!(
            length = tag.custom_text().chars().count(),
            "custom text exceeds {} characters", adkit_core::link::MAX_CUSTOM_TEXT_LEN
        );
    }

    let built = tag.build();
    if ctx.json {
        print_json(&serde_json::json!({
            "tag": built,
            "custom_text": tag.custom_text(),
        }))?;
    } else {
        println!("{}", built);
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct UrlArgs {
    /// Destination base URL
    #[arg(long, conflicts_with = "product")]
    pub base: Option<String>,
    /// Catalog product whose landing page becomes the base URL
    #[arg(long)]
    pub product: Option<String>,
    /// Free-form query parameters, e.g. "pnlid=123"
    #[arg(long)]
    pub params: Option<String>,
    #[arg(long = "banner-id")]
    pub banner_id: Option<String>,
}

pub fn url(ctx: &Context<'_>, args: UrlArgs) -> Result<()> {
    let base = match (args.base, args.product) {
        (Some(base), _) => {
            Url::parse(&base).map_err(|_| invalid_input(format!("invalid base url: {}", base)))?;
            base
        }
        (None, Some(product)) => match ctx.config.find_link_product(&product) {
            Some(found) => found.url.clone(),
            None => return Err(not_found(format!("link product {}", product))),
        },
        (None, None) => return Err(invalid_input("either --base or --product is required")),
    };

    let params = args.params.unwrap_or_default();
    let banner_id = args.banner_id.unwrap_or_default();
    let link = append_params(&base, &params, &banner_id)
        .ok_or_else(|| invalid_input("base url is empty"))?;

    if ctx.json {
        print_json(&serde_json::json!({ "url": link }))?;
    } else {
        println!("{}", link);
    }
    Ok(())
}
