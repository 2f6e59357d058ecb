// Entry point: batch pattern analysis selected by subcommand, results
// printed to stdout and rendered as PNG under the configured out_dir.
mod cli;

use std::error::Error;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tonewheel::config::RenderConfig;
use tonewheel::core::compare::{
    min_distance_to_rotations, nearest_to_reference, overlap_matrix, overlap_totals,
};
use tonewheel::core::necklace::{enumerate_necklaces, necklace_census};
use tonewheel::core::scales::{self, rotate_to_prefix};
use tonewheel::plot::{self, AlignmentStrip, StripRow};

use crate::cli::{Args, Command};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = RenderConfig::load_or_default(&args.config);
    create_dir_all(&cfg.out_dir)?;
    let out_dir = PathBuf::from(&cfg.out_dir);

    match args.command {
        Command::Necklaces { n, k } => run_necklaces(&out_dir, &cfg, n, k),
        Command::Census { n } => run_census(&out_dir, n),
        Command::OverlapGrid { n } => run_overlap_grid(&out_dir, &cfg, n),
        Command::Overlap { n, k1, k2 } => run_overlap(&out_dir, &cfg, n, k1, k2),
        Command::Compare { n, k, scale } => run_compare(&out_dir, &cfg, n, k, &scale),
    }
}

fn run_necklaces(
    out_dir: &Path,
    cfg: &RenderConfig,
    n: usize,
    k: usize,
) -> Result<(), Box<dyn Error>> {
    let reps = enumerate_necklaces(n, k)?;
    info!(n, k, count = reps.len(), "enumerated rotation-distinct patterns");

    let mut rows = Vec::with_capacity(reps.len());
    for rep in &reps {
        match scales::match_known_scale(rep) {
            Some(name) => {
                println!("{rep}  ({name})");
                rows.push(StripRow {
                    pattern: rep.clone(),
                    caption: format!("{rep} ({name})"),
                });
            }
            None => {
                println!("{rep}");
                rows.push(StripRow {
                    pattern: rep.clone(),
                    caption: rep.to_string(),
                });
            }
        }
    }

    let path = out_dir.join(format!("necklaces_n{n}_k{k}.png"));
    plot::pattern_strips(
        &path,
        &format!("Rotation-distinct patterns, {k} ones in {n} positions"),
        &rows,
        cfg,
    )?;
    info!(path = %path.display(), "wrote strip figure");
    Ok(())
}

fn run_census(out_dir: &Path, n: usize) -> Result<(), Box<dyn Error>> {
    let rows = necklace_census(n)?;
    println!("{:>4}  {:>14}  {:>10}", "k", "combinations", "necklaces");
    for row in &rows {
        println!(
            "{:>4}  {:>14}  {:>10}",
            row.k, row.combinations, row.necklaces
        );
    }

    let path = out_dir.join(format!("census_n{n}.png"));
    plot::census_table(
        &path,
        &format!("Combinations and unique rotations, length {n}"),
        &rows,
    )?;
    info!(path = %path.display(), "wrote census table");
    Ok(())
}

fn run_overlap_grid(out_dir: &Path, cfg: &RenderConfig, n: usize) -> Result<(), Box<dyn Error>> {
    let totals = overlap_totals(n)?;
    let path = out_dir.join(format!("overlap_grid_n{n}.png"));
    plot::heatmap(
        &path,
        &format!("Family-summed overlap counts, {n} positions"),
        "k2 (number of ones)",
        "k1 (number of ones)",
        &totals,
        cfg,
    )?;
    info!(path = %path.display(), "wrote overlap grid");
    Ok(())
}

fn run_overlap(
    out_dir: &Path,
    cfg: &RenderConfig,
    n: usize,
    k1: usize,
    k2: usize,
) -> Result<(), Box<dyn Error>> {
    let fam_a = enumerate_necklaces(n, k1)?;
    let fam_b = enumerate_necklaces(n, k2)?;
    let matrix = overlap_matrix(&fam_a, &fam_b)?;
    let total: u64 = matrix.iter().flatten().map(|&v| v as u64).sum();
    println!("Total overlaps of {k1} ones in {k2} ones: {total}");

    let as_u64: Vec<Vec<u64>> = matrix
        .iter()
        .map(|row| row.iter().map(|&v| v as u64).collect())
        .collect();
    let path = out_dir.join(format!("overlap_n{n}_k{k1}_in_k{k2}.png"));
    plot::heatmap(
        &path,
        &format!("Overlap counts of {k1} ones in {k2} ones, {n} positions"),
        &format!("patterns with {k2} ones"),
        &format!("patterns with {k1} ones"),
        &as_u64,
        cfg,
    )?;
    info!(path = %path.display(), total, "wrote overlap matrix");
    Ok(())
}

fn run_compare(
    out_dir: &Path,
    cfg: &RenderConfig,
    n: usize,
    k: usize,
    scale: &str,
) -> Result<(), Box<dyn Error>> {
    let (scale_name, reference) = scales::lookup(scale)
        .ok_or_else(|| format!("unknown scale {scale:?}; known: {}", known_scale_names()))?;
    if reference.len() != n {
        return Err(format!(
            "scale {scale_name} has {} positions, requested n = {n}",
            reference.len()
        )
        .into());
    }

    let reps = enumerate_necklaces(n, k)?;
    let mut results = nearest_to_reference(&reps, &reference)?;
    results.sort_by_key(|r| r.score);
    info!(
        n,
        k,
        scale = scale_name,
        count = results.len(),
        "scored family against reference scale"
    );

    let mut blocks = Vec::new();
    for result in &results {
        let matched = scales::match_known_scale(&result.pattern);
        let mut caption = format!(
            "Pattern: {}, Dissimilarity: {}",
            result.pattern, result.score
        );
        if let Some(name) = matched {
            caption.push_str(&format!(", Matches: {name}"));
        }
        println!("{caption}");
        for (pat_rot, target_rot) in &result.alignments {
            // Line both rows up on the reference mode where possible.
            blocks.push(AlignmentStrip {
                top: rotate_to_prefix(target_rot, &reference),
                bottom: rotate_to_prefix(pat_rot, &reference),
                caption: caption.clone(),
            });
        }
    }

    let strips_path = out_dir.join(format!("compare_n{n}_k{k}_{}.png", slug(scale_name)));
    plot::alignment_strips(
        &strips_path,
        &format!("Minimal alignments against {scale_name}"),
        &blocks,
        cfg,
    )?;
    info!(path = %strips_path.display(), "wrote alignment strips");

    // Row-constant distance matrix: each row holds the pattern's minimal
    // distance against the reference rotations, repeated across columns.
    let mut matrix = Vec::with_capacity(results.len());
    for result in &results {
        let d = min_distance_to_rotations(&result.pattern, &reference)? as u64;
        matrix.push(vec![d; results.len()]);
    }
    let matrix_path = out_dir.join(format!("distance_n{n}_k{k}_{}.png", slug(scale_name)));
    plot::heatmap(
        &matrix_path,
        &format!("Distance to {scale_name} rotations"),
        "pattern index",
        "pattern index",
        &matrix,
        cfg,
    )?;
    info!(path = %matrix_path.display(), "wrote distance matrix");
    Ok(())
}

fn known_scale_names() -> String {
    scales::KNOWN_SCALES
        .iter()
        .map(|&(name, _)| name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
