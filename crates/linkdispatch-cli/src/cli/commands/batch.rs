//! `linkdispatch batch` – classify a file of URLs, one per line.

use super::classify::format_line;
use anyhow::{Context, Result};
use linkdispatch_core::{classify, ClassifiedLink, DispatchContext, LaunchState, LinkCategory, LinkSource};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Classify each non-blank, non-comment line of `reader`.
pub fn classify_lines<R: BufRead>(reader: R, source: LinkSource) -> Result<Vec<ClassifiedLink>> {
    let ctx = DispatchContext::new(source, LaunchState::Running);
    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", idx + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(classify(trimmed, ctx));
    }
    Ok(out)
}

pub fn run_batch(path: &Path, source: LinkSource, json: bool) -> Result<()> {
    let results = if path == Path::new("-") {
        classify_lines(io::stdin().lock(), source)?
    } else {
        let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
        classify_lines(BufReader::new(f), source)?
    };

    let mut counts: BTreeMap<LinkCategory, usize> = BTreeMap::new();
    for r in &results {
        *counts.entry(r.category()).or_default() += 1;
        if json {
            println!("{}", serde_json::to_string(r)?);
        } else {
            println!("{}\t{}", r.raw_url, format_line(r));
        }
    }
    tracing::info!(total = results.len(), "batch classified");
    if !json {
        eprintln!("{} links classified", results.len());
        for (cat, n) in counts {
            eprintln!("  {:<32} {}", cat, n);
        }
    }
    Ok(())
}
