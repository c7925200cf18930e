use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wld_inspector::{
    load_world_with, summarize, Aggregator, FrequencyTable, LoadOptions, Statistics, TypeCatalog,
    TypeKind, WorldSummary,
};

#[derive(Parser)]
#[command(name = "wld-inspect")]
#[command(about = "Show world metadata and block/wall counts of a Terraria world file")]
struct Args {
    /// World file (.wld)
    path: PathBuf,

    /// List walls instead of blocks
    #[arg(long)]
    walls: bool,

    /// Only list types whose name contains TEXT (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Print metadata and both tables as JSON
    #[arg(long)]
    json: bool,

    /// Count tiles while decoding instead of building the tile grid
    #[arg(long)]
    streaming: bool,

    /// Refuse worlds with more tiles than this
    #[arg(long, value_name = "N")]
    max_tiles: Option<u64>,

    /// JSON file with extra block/wall names
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report {
    world: WorldSummary,
    statistics: Statistics,
}

fn inspect(args: &Args) -> wld_inspector::Result<Report> {
    let catalog = match &args.catalog {
        Some(path) => TypeCatalog::load_overrides(path)?,
        None => TypeCatalog::builtin(),
    };
    let mut options = LoadOptions::default();
    if let Some(max_tiles) = args.max_tiles {
        options = options.with_max_tiles(max_tiles);
    }

    if args.streaming {
        let (world, statistics) = summarize(&args.path, &options, &catalog)?;
        return Ok(Report { world, statistics });
    }
    let world = load_world_with(&args.path, &options)?;
    let statistics = Aggregator::new(&catalog).run(&world);
    Ok(Report { world: world.into_summary(), statistics })
}

/// 1234567 -> "1,234,567"
fn with_separators(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rows by descending count, keeping names that contain `search`.
fn table_rows<'a>(table: &'a FrequencyTable, search: Option<&str>) -> Vec<(&'a str, u64)> {
    let needle = search.map(str::to_lowercase);
    table
        .sorted_by_count()
        .into_iter()
        .filter(|(name, _)| needle.as_ref().map_or(true, |n| name.to_lowercase().contains(n.as_str())))
        .collect()
}

fn print_report(report: &Report, args: &Args) {
    let meta = &report.world.metadata;
    println!("Name:       {}", meta.name);
    match &meta.seed {
        Some(seed) => println!("Seed:       {seed}"),
        None => println!("Seed:       -"),
    }
    println!("Size:       {} x {}", meta.width, meta.height);
    println!("Difficulty: {:?}", meta.difficulty);
    println!("Evil:       {:?}", meta.world_evil);
    println!("Hardmode:   {}", if meta.is_hardmode { "YES" } else { "NO" });
    println!("Spawn:      {}", meta.spawn);
    println!("Version:    {}", report.world.header.version);
    println!();

    let stats = &report.statistics;
    let (kind, table, without) = if args.walls {
        (TypeKind::Wall, &stats.walls, stats.tiles_without_wall)
    } else {
        (TypeKind::Block, &stats.blocks, stats.tiles_without_block)
    };
    let rows = table_rows(table, args.search.as_deref());
    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0).max(4);
    for (name, count) in &rows {
        println!("{name:<width$}  {:>14}", with_separators(*count));
    }
    println!();
    println!("{} {kind} types, {} tiles without a {kind}", table.len(), with_separators(without));

    let unknown = stats.unknown_tiles(kind);
    if unknown > 0 {
        println!("{} tiles with an unknown {kind} type were skipped", with_separators(unknown));
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("wld_inspector=info".parse()?))
        .init();

    let args = Args::parse();

    // Decoding is CPU-bound; keep it off the async worker threads.
    let (args, report) = tokio::task::spawn_blocking(move || {
        let report = inspect(&args);
        (args, report)
    })
    .await?;
    let report = report?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &args);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_separators() {
        assert_eq!(with_separators(0), "0");
        assert_eq!(with_separators(999), "999");
        assert_eq!(with_separators(1000), "1,000");
        assert_eq!(with_separators(20_160_000), "20,160,000");
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["wld-inspect", "w.wld", "--walls", "--search", "stone", "--max-tiles", "10"]).unwrap();
        assert!(args.walls);
        assert_eq!(args.search.as_deref(), Some("stone"));
        assert_eq!(args.max_tiles, Some(10));
        assert!(!args.streaming);
    }
}
