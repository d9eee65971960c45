mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_core::FolioConfig;
use folio_core::model::PageLayout;

const USAGE: &str = "Usage: folio-sim <layout.json> [--config <config.json>] [offset...]";

struct Args {
    layout: PathBuf,
    config: Option<PathBuf>,
    offsets: Vec<f64>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let Some(layout) = args.next() else {
        return Ok(None);
    };
    let mut config = None;
    let mut offsets = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a path")?;
            config = Some(PathBuf::from(path));
        } else {
            let offset = arg
                .parse::<f64>()
                .with_context(|| format!("invalid scroll offset {arg:?}"))?;
            offsets.push(offset);
        }
    }
    Ok(Some(Args {
        layout: PathBuf::from(layout),
        config,
        offsets,
    }))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn main() -> Result<()> {
    let Some(args) = parse_args(std::env::args().skip(1))? else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    let layout: PageLayout = serde_json::from_str(&read(&args.layout)?)
        .with_context(|| format!("parsing layout {}", args.layout.display()))?;
    let config = match &args.config {
        Some(path) => FolioConfig::from_json(&read(path)?)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FolioConfig::default(),
    };

    // Without explicit offsets, walk the page a quarter viewport at a time.
    let offsets = if args.offsets.is_empty() {
        report::sweep(&layout, layout.viewport_height / 4.0)
    } else {
        args.offsets
    };

    let frames = report::replay(&layout, &config, &offsets);
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &frames)?;
    writeln!(out)?;
    Ok(())
}
