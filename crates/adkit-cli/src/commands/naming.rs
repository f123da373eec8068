use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::parse_date_arg;
use adkit_core::{AdSetSpec, AdSpec, CampaignSpec};

#[derive(Debug, Subcommand)]
pub enum NameCommand {
    Campaign(CampaignArgs),
    Adset(AdSetArgs),
    Ad(AdArgs),
}

#[derive(Debug, Args)]
pub struct CampaignArgs {
    #[arg(long)]
    pub objective: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub product: Option<String>,
    #[arg(long)]
    pub audience: Option<String>,
    /// Campaign date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub page: Option<String>,
    #[arg(long)]
    pub addon: Option<String>,
    /// Preview with placeholders instead of enforcing required fields
    #[arg(long)]
    pub draft: bool,
}

pub fn campaign(ctx: &Context<'_>, args: CampaignArgs) -> Result<()> {
    let date = parse_date_arg(args.date.as_deref())?;
    let spec = CampaignSpec {
        objective: args.objective.unwrap_or_default(),
        brand: args.brand.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
        product: args.product.unwrap_or_default(),
        audience: args.audience.unwrap_or_default(),
        date,
        page: args.page.unwrap_or_default(),
        addon: args.addon.unwrap_or_default(),
    };

    if !args.draft {
        spec.validate()?;
        check_brand_product(ctx, &spec.brand, &spec.product)?;
    }

    emit_name(ctx, &spec.build(), &spec)
}

#[derive(Debug, Args)]
pub struct AdSetArgs {
    /// Target type, e.g. INTEREST, LOOKALIKE, CUSTOM
    #[arg(long = "type")]
    pub target_type: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub audience: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    /// Preview with placeholders instead of enforcing required fields
    #[arg(long)]
    pub draft: bool,
}

pub fn adset(ctx: &Context<'_>, args: AdSetArgs) -> Result<()> {
    let spec = AdSetSpec {
        target_type: args.target_type.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
        audience: args.audience.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        gender: args.gender.unwrap_or_default(),
        age: args.age.unwrap_or_default(),
    };

    if !args.draft {
        spec.validate()?;
    }

    emit_name(ctx, &spec.build(), &spec)
}

#[derive(Debug, Args)]
pub struct AdArgs {
    #[arg(long)]
    pub page: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    /// Free-form product; unlike campaigns this is not checked against
    /// the catalog
    #[arg(long)]
    pub product: Option<String>,
    #[arg(long)]
    pub creative: Option<String>,
    /// Creative format, e.g. IMG, VDO
    #[arg(long)]
    pub format: Option<String>,
    /// Ad date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// Preview with placeholders instead of enforcing required fields
    #[arg(long)]
    pub draft: bool,
}

pub fn ad(ctx: &Context<'_>, args: AdArgs) -> Result<()> {
    let date = parse_date_arg(args.date.as_deref())?;
    let spec = AdSpec {
        page: args.page.unwrap_or_default(),
        brand: args.brand.unwrap_or_default(),
        product: args.product.unwrap_or_default(),
        creative: args.creative.unwrap_or_default(),
        format: args.format.unwrap_or_default(),
        date,
    };

    if !args.draft {
        spec.validate()?;
    }

    emit_name(ctx, &spec.build(), &spec)
}

/// Campaign products come from a per-brand dropdown, so an unknown pairing
/// is almost always a typo. Unknown brands pass: the catalog may lag the
/// account.
fn check_brand_product(ctx: &Context<'_>, brand: &str, product: &str) -> Result<()> {
    if brand.is_empty() || product.is_empty() {
        return Ok(());
    }
    if let Some(products) = ctx.config.products_for_brand(brand) {
        if !products.iter().any(|p| p == product) {
            return Err(invalid_input(format!(
                "product {} is not listed for brand {}",
                product, brand
            )));
        }
    }
    Ok(())
}

fn emit_name<T: Serialize>(ctx: &Context<'_>, name: &str, fields: &T) -> Result<()> {
    if ctx.json {
        print_json(&serde_json::json!({ "name": name, "fields": fields }))?;
    } else {
        println!("{}", name);
    }
    Ok(())
}
