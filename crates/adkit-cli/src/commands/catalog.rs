use anyhow::Result;
use clap::Args;

use crate::commands::{print_json, Context};

#[derive(Debug, Args)]
pub struct CatalogArgs {}

/// Prints the active catalog so a config override can be inspected.
pub fn show(ctx: &Context<'_>, _args: CatalogArgs) -> Result<()> {
    if ctx.json {
        print_json(ctx.config)?;
        return Ok(());
    }

    let config = ctx.config;
    println!("objectives: {}", config.objectives.join(", "));
    println!("brandings: {}", config.brandings.join(", "));
    println!("categories: {}", config.categories.join(", "));
    println!("pages: {}", config.pages.join(", "));
    println!("ad set categories: {}", config.ad_set_categories.join(", "));
    println!("locations: {}", config.locations.join(", "));

    println!("products:");
    for (brand, products) in &config.products_by_brand {
        println!("  {}: {}", brand, products.join(", "));
    }

    println!("link channels:");
    for channel in &config.link_channels {
        println!("  {} ({})", channel.label, channel.value);
    }
    println!("link builder types:");
    for builder_type in &config.link_builder_types {
        println!("  {} ({})", builder_type.label, builder_type.value);
    }
    println!("link products:");
    for product in &config.link_products {
        println!("  {} / {} -> {}", product.brand, product.product, product.url);
    }
    Ok(())
}
