//! vnlocale: inspect and search Vietnam's administrative units from the
//! terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show record counts
//!   $ vnlocale stats
//!
//! - List districts of Ho Chi Minh City
//!   $ vnlocale districts 79
//!
//! - Search wards named "Phường 3" inside Quận 3
//!   $ vnlocale search ward "phuong 3" --district 770
//!
//! Data source
//! -----------
//!
//! Without `--data-dir` or `--snapshot` the dataset bundled with
//! `vnlocale-core` is used (requires the default `bundled` feature).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;
use vnlocale_core::prelude::*;
use vnlocale_core::text::{fold, Case};

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level `{level}`"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn load_dataset(args: &CliArgs) -> anyhow::Result<Dataset> {
    if let Some(dir) = &args.data_dir {
        return Dataset::load_from_dir(dir)
            .with_context(|| format!("loading dataset from {}", dir.display()));
    }
    if let Some(path) = &args.snapshot {
        return Dataset::load_snapshot(path)
            .with_context(|| format!("loading snapshot {}", path.display()));
    }
    bundled_dataset()
}

#[cfg(feature = "bundled")]
fn bundled_dataset() -> anyhow::Result<Dataset> {
    Ok(Dataset::bundled()?.clone())
}

#[cfg(not(feature = "bundled"))]
fn bundled_dataset() -> anyhow::Result<Dataset> {
    bail!("built without the bundled dataset; pass --data-dir or --snapshot")
}

fn load_config(args: &CliArgs) -> anyhow::Result<SearchConfig> {
    match &args.config {
        Some(path) => SearchConfig::load_from_path(path)
            .with_context(|| format!("reading search config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    // `fold` needs no dataset.
    if let Commands::Fold { text, keep_case } = &args.command {
        let case = if *keep_case { Case::Preserve } else { Case::Lower };
        println!("{}", fold(text, case));
        return Ok(());
    }

    let dataset = load_dataset(&args)?;
    if let Commands::Snapshot { out } = &args.command {
        dataset
            .save_snapshot(out)
            .with_context(|| format!("writing snapshot {}", out.display()))?;
        println!("Snapshot written to {}", out.display());
        return Ok(());
    }

    let mut config = load_config(&args)?;
    if let Commands::Search { limit: Some(n), .. } = &args.command {
        config.limit = Some(*n);
    }
    let locale = VietnamLocale::with_config(dataset, config)?;
    debug!(stats = ?locale.stats(), "locale ready");

    match args.command {
        Commands::Stats => {
            let stats = locale.stats();
            println!("Dataset statistics:");
            println!("  Provinces: {}", stats.provinces);
            println!("  Districts: {}", stats.districts);
            println!("  Wards: {}", stats.wards);
        }

        Commands::Provinces => {
            for p in locale.provinces() {
                println!("{}  {} ({})", p.code, p.name, p.slug_name);
            }
        }

        Commands::Districts { province_code } => {
            let Some(province) = locale.province(&province_code) else {
                bail!("province {province_code} not found");
            };
            println!("Districts in {}:", province.description);
            for d in locale
                .districts_by_province_code(&province_code)
                .into_iter()
                .flatten()
            {
                println!("- {}  {}", d.code, d.name);
            }
        }

        Commands::Wards {
            district_code,
            province,
        } => {
            let Some(district) = locale.district(&district_code) else {
                bail!("district {district_code} not found");
            };
            let wards = match province.as_deref() {
                Some(p) => locale.wards_by_province_and_district(p, &district_code),
                None => locale.wards_by_district(&district_code),
            };
            println!("Wards in {}:", district.name);
            for w in wards.into_iter().flatten() {
                println!("- {}  {}", w.code, w.name);
            }
        }

        Commands::Search {
            category,
            query,
            province,
            district,
            json,
            ..
        } => {
            let drill_down = DrillDown {
                province_code: province.as_deref(),
                district_code: district.as_deref(),
            };
            let hits = locale.search_by_name(&category, &query, drill_down)?;
            if hits.is_empty() && !json {
                println!("No {category} found matching: {query}");
            }
            for hit in hits {
                if json {
                    println!("{}", serde_json::to_string(&hit)?);
                } else {
                    println!("{}  {}", hit.code(), hit.label());
                }
            }
        }

        Commands::Fold { .. } | Commands::Snapshot { .. } => {}
    }

    Ok(())
}
