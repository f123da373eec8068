use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::commands::{print_json, Context};
use crate::util::read_input;

#[derive(Debug, Args)]
pub struct ParseNamesArgs {
    /// Input file; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,
    /// Which column(s) to print
    #[arg(long, value_enum, default_value = "both")]
    pub part: NamePart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum NamePart {
    First,
    Last,
    Both,
}

pub fn parse_names(ctx: &Context<'_>, args: ParseNamesArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let batch = adkit_core::parse_names(&text);

    if ctx.json {
        print_json(&batch)?;
        return Ok(());
    }

    if batch.first_names.is_empty() && batch.last_names.is_empty() {
        return Ok(());
    }

    match args.part {
        NamePart::First => println!("{}", batch.first_names),
        NamePart::Last => println!("{}", batch.last_names),
        NamePart::Both => {
            // The two columns always carry the same number of lines.
            let firsts = batch.first_names.split('\n');
            let lasts = batch.last_names.split('\n');
            for (first, last) in firsts.zip(lasts) {
                println!("{}\t{}", first, last);
            }
        }
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct NormalizePhonesArgs {
    /// Input file; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,
}

pub fn normalize_phones(ctx: &Context<'_>, args: NormalizePhonesArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let phones = adkit_core::normalize_phones(&text);

    if ctx.json {
        print_json(&serde_json::json!({ "phones": phones }))?;
        return Ok(());
    }

    if !phones.is_empty() {
        println!("{}", phones);
    }
    Ok(())
}
