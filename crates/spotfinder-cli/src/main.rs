//! spotfinder: command-line interface for spotfinder-core
//!
//! Loads a point-of-interest catalog and runs proximity searches against it.
//!
//! Usage examples
//! --------------
//!
//! - Outdoor spots within 5 km of a point
//!   $ spotfinder -c spots.json search --tags outdoor --lat 35.4681 --lng 133.0486 -r 5
//!
//! - Same, showing per-stage candidate counts
//!   $ spotfinder -c spots.json search --tags outdoor --lat 35.4681 --lng 133.0486 -r 5 --explain
//!
//! - Catalog summary and tag list
//!   $ spotfinder -c spots.json stats
//!   $ spotfinder -c spots.json tags
//!
//! - Build a binary cache for fast startup
//!   $ spotfinder -c spots.json build --out spots.bin
//!
//! Data source
//! -----------
//!
//! A `.json` or `.json.gz` catalog is cached as binary next to the source on
//! first load and reused while it is newer than the source. Use `--no-cache`
//! to always parse the JSON. Logging goes to stderr and honours `RUST_LOG`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use spotfinder_core::prelude::*;
use spotfinder_core::LocationFilter;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SearchConfig::default(),
    };
    debug!(?config, "search configuration");

    match args.command {
        // Pure geometry, no catalog needed.
        Commands::Distance {
            lat1,
            lng1,
            lat2,
            lng2,
        } => {
            let km = distance_km(lat1, lng1, lat2, lng2);
            if args.json {
                print_json(&serde_json::json!({ "distance_km": km }))?;
            } else {
                println!("{km:.3} km");
            }
        }

        Commands::Bbox { lat, lng, radius_km } => {
            let Some(loc) = LocationFilter::new(Coordinate::new(lat, lng), radius_km, &config)
            else {
                bail!("center ({lat}, {lng}) is not a finite coordinate");
            };
            let bbox = BoundingBox::around(loc.center, loc.radius_km, &config);
            if args.json {
                print_json(&bbox)?;
            } else {
                println!(
                    "Bounding box for {} km around {}:",
                    loc.radius_km, loc.center
                );
                println!("  lat: {:.6} .. {:.6}", bbox.lat_min, bbox.lat_max);
                if bbox.is_longitude_unconstrained() {
                    println!("  lng: unconstrained (circle reaches a pole)");
                } else {
                    println!("  lng: {:.6} .. {:.6}", bbox.lng_min, bbox.lng_max);
                }
            }
        }

        Commands::Search {
            q,
            tags,
            lat,
            lng,
            radius_km,
            limit,
            explain,
        } => {
            let catalog = open_catalog(args.catalog.as_deref(), args.no_cache)?;
            let raw = RawSearchParams {
                q,
                tags,
                lat,
                lng,
                radius_km,
            };
            let criteria = normalize_with(&raw, &config);
            let engine = SearchEngine::new(config);
            let (hits, report) = catalog.search_with_report(&engine, &criteria);
            let shown = &hits[..limit.unwrap_or(hits.len()).min(hits.len())];

            if args.json {
                #[derive(Serialize)]
                struct Output<'a> {
                    total: usize,
                    results: &'a [&'a CatalogEntry],
                    #[serde(skip_serializing_if = "Option::is_none")]
                    report: Option<&'a SearchReport>,
                }
                print_json(&Output {
                    total: hits.len(),
                    results: shown,
                    report: explain.then_some(&report),
                })?;
            } else {
                if hits.is_empty() {
                    println!("No spots found.");
                }
                for e in shown {
                    print_entry(e, criteria.location.as_ref().map(|l| l.center));
                }
                if shown.len() < hits.len() {
                    println!("... {} more", hits.len() - shown.len());
                }
                if explain {
                    print_report(&report);
                }
            }
        }

        Commands::Stats => {
            let catalog = open_catalog(args.catalog.as_deref(), args.no_cache)?;
            let stats = catalog.stats();
            if args.json {
                print_json(&stats)?;
            } else {
                println!("Catalog statistics:");
                println!("  Entries: {}", stats.entries);
                println!("  Tagged: {}", stats.tagged);
                println!("  Distinct tags: {}", stats.distinct_tags);
                if let Some(b) = stats.bounds {
                    println!(
                        "  Extent: lat {:.4} .. {:.4}, lng {:.4} .. {:.4}",
                        b.lat_min, b.lat_max, b.lng_min, b.lng_max
                    );
                }
            }
        }

        Commands::Tags => {
            let catalog = open_catalog(args.catalog.as_deref(), args.no_cache)?;
            let tags = catalog.distinct_tags();
            if args.json {
                print_json(&tags)?;
            } else {
                for t in tags {
                    println!("{t}");
                }
            }
        }

        Commands::Build { out, uncompressed } => {
            let catalog = open_catalog(args.catalog.as_deref(), true)?;
            build_cache(&catalog, &out, uncompressed)?;
            println!("Wrote {} entries to {}", catalog.len(), out.display());
        }
    }

    Ok(())
}

/// stderr logging; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(feature = "json")]
fn load_config(path: &Path) -> anyhow::Result<SearchConfig> {
    SearchConfig::from_json_path(path)
        .with_context(|| format!("loading search config from {}", path.display()))
}

#[cfg(not(feature = "json"))]
fn load_config(path: &Path) -> anyhow::Result<SearchConfig> {
    bail!("cannot read {}: built without the 'json' feature", path.display())
}

fn open_catalog(path: Option<&Path>, no_cache: bool) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        bail!("no catalog given, pass --catalog <PATH>");
    };

    #[cfg(feature = "json")]
    let is_json = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|n| n.ends_with(".json") || n.ends_with(".json.gz"));
    #[cfg(feature = "json")]
    if is_json && !no_cache {
        return Catalog::load_cached(path)
            .with_context(|| format!("loading catalog from {}", path.display()));
    }
    #[cfg(not(feature = "json"))]
    let _ = no_cache;

    Catalog::load_from_path(path).with_context(|| format!("loading catalog from {}", path.display()))
}

#[cfg(feature = "builder")]
fn build_cache(catalog: &Catalog, out: &Path, uncompressed: bool) -> anyhow::Result<()> {
    use spotfinder_core::loader::CompressionMode;

    let mode = if uncompressed {
        CompressionMode::None
    } else {
        CompressionMode::preferred()
    };
    catalog
        .save_binary_with(out, mode)
        .with_context(|| format!("writing {}", out.display()))
}

#[cfg(not(feature = "builder"))]
fn build_cache(_catalog: &Catalog, _out: &Path, _uncompressed: bool) -> anyhow::Result<()> {
    bail!("built without the 'builder' feature")
}

fn print_entry(e: &CatalogEntry, center: Option<Coordinate>) {
    let tags = if e.tags.trim().is_empty() {
        String::new()
    } else {
        format!(" [{}]", e.tags)
    };
    match center {
        Some(c) => println!(
            "{:>6}  {}{}  ({:.3} km)",
            e.id,
            e.name,
            tags,
            c.distance_km_to(&e.coordinate())
        ),
        None => println!("{:>6}  {}{}", e.id, e.name, tags),
    }
}

fn print_report(report: &SearchReport) {
    println!();
    println!("Pipeline:");
    for s in &report.stages {
        let note = if s.skipped { " (skipped)" } else { "" };
        println!("  {:<9} {:>7}{note}", s.stage.as_str(), s.candidates);
    }
    if let Some(b) = report.bbox {
        println!(
            "  box: lat {:.5} .. {:.5}, lng {:.5} .. {:.5}",
            b.lat_min, b.lat_max, b.lng_min, b.lng_max
        );
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
