//! PNG rendering of enumeration and comparison results (plotters).
//!
//! All functions take computed results read-only and write a single image;
//! nothing here feeds back into the core.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::RenderConfig;
use crate::core::necklace::CensusRow;
use crate::core::pattern::Pattern;

/// One annotated pattern row in a strip figure.
#[derive(Debug, Clone)]
pub struct StripRow {
    pub pattern: Pattern,
    pub caption: String,
}

/// One two-row alignment block: reference on top, candidate below.
#[derive(Debug, Clone)]
pub struct AlignmentStrip {
    pub top: Pattern,
    pub bottom: Pattern,
    pub caption: String,
}

/// Three-stop color ramp from dark violet through teal to yellow.
fn ramp(t: f64) -> RGBColor {
    const STOPS: [(f64, f64, f64); 3] = [
        (68.0, 1.0, 84.0),
        (33.0, 145.0, 140.0),
        (253.0, 231.0, 37.0),
    ];
    let t = t.clamp(0.0, 1.0) * 2.0;
    let (lo, hi, f) = if t < 1.0 {
        (STOPS[0], STOPS[1], t)
    } else {
        (STOPS[1], STOPS[2], t - 1.0)
    };
    let mix = |a: f64, b: f64| (a + (b - a) * f).round() as u8;
    RGBColor(mix(lo.0, hi.0), mix(lo.1, hi.1), mix(lo.2, hi.2))
}

/// Annotated integer-matrix heatmap, row 0 at the top.
pub fn heatmap(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    matrix: &[Vec<u64>],
    cfg: &RenderConfig,
) -> Result<(), Box<dyn Error>> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, |r| r.len());
    if rows == 0 || cols == 0 {
        return Err("empty matrix".into());
    }
    let max = matrix.iter().flatten().copied().max().unwrap_or(0).max(1);

    let width = cfg.cell_px * cols as u32 + 120;
    let height = cfg.cell_px * rows as u32 + 120;
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..cols as f64, 0f64..rows as f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(cols.min(16))
        .y_labels(rows.min(16))
        .x_label_formatter(&|v| format!("{}", *v as usize))
        .y_label_formatter(&|v| format!("{}", rows.saturating_sub(1 + *v as usize)))
        .draw()?;

    chart.draw_series(matrix.iter().enumerate().flat_map(|(r, row)| {
        let y = (rows - 1 - r) as f64;
        row.iter().enumerate().map(move |(c, &v)| {
            let t = v as f64 / max as f64;
            Rectangle::new(
                [(c as f64, y), (c as f64 + 1.0, y + 1.0)],
                ramp(t).filled(),
            )
        })
    }))?;

    if cfg.annotate {
        chart.draw_series(matrix.iter().enumerate().flat_map(|(r, row)| {
            let y = (rows - 1 - r) as f64;
            row.iter().enumerate().map(move |(c, &v)| {
                let t = v as f64 / max as f64;
                let color = if t < 0.5 { WHITE } else { BLACK };
                Text::new(
                    format!("{v}"),
                    (c as f64 + 0.5, y + 0.55),
                    ("sans-serif", 13)
                        .into_font()
                        .color(&color)
                        .pos(Pos::new(HPos::Center, VPos::Center)),
                )
            })
        }))?;
    }

    root.present()?;
    Ok(())
}

/// One pattern per row, black cells for set bits, caption above each row.
pub fn pattern_strips(
    path: &Path,
    title: &str,
    rows: &[StripRow],
    cfg: &RenderConfig,
) -> Result<(), Box<dyn Error>> {
    let cols = rows.iter().map(|r| r.pattern.len()).max().unwrap_or(0);
    if rows.is_empty() || cols == 0 {
        return Err("nothing to draw".into());
    }

    let cell = cfg.strip_cell_px;
    let block = cell + 26;
    let width = cell * cols as u32 + 40;
    let height = block * rows.len() as u32 + 50;
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    root.draw(&Text::new(
        title.to_string(),
        (20, 10),
        ("sans-serif", 20).into_font(),
    ))?;

    for (r, row) in rows.iter().enumerate() {
        let y0 = 40 + r as i32 * block as i32;
        root.draw(&Text::new(
            row.caption.clone(),
            (20, y0),
            ("sans-serif", 14).into_font(),
        ))?;
        draw_bit_row(&root, &row.pattern, 20, y0 + 18, cell as i32)?;
    }

    root.present()?;
    Ok(())
}

/// Stacked two-row alignment blocks, reference over candidate.
pub fn alignment_strips(
    path: &Path,
    title: &str,
    blocks: &[AlignmentStrip],
    cfg: &RenderConfig,
) -> Result<(), Box<dyn Error>> {
    let cols = blocks.iter().map(|b| b.top.len()).max().unwrap_or(0);
    if blocks.is_empty() || cols == 0 {
        return Err("nothing to draw".into());
    }

    let cell = cfg.strip_cell_px;
    let block = 2 * cell + 34;
    let width = cell * cols as u32 + 40;
    let height = block * blocks.len() as u32 + 50;
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    root.draw(&Text::new(
        title.to_string(),
        (20, 10),
        ("sans-serif", 20).into_font(),
    ))?;

    for (r, b) in blocks.iter().enumerate() {
        let y0 = 40 + r as i32 * block as i32;
        root.draw(&Text::new(
            b.caption.clone(),
            (20, y0),
            ("sans-serif", 14).into_font(),
        ))?;
        draw_bit_row(&root, &b.top, 20, y0 + 18, cell as i32)?;
        draw_bit_row(&root, &b.bottom, 20, y0 + 18 + cell as i32, cell as i32)?;
    }

    root.present()?;
    Ok(())
}

/// Rendered text table of per-k combination and necklace counts.
pub fn census_table(
    path: &Path,
    title: &str,
    rows: &[CensusRow],
) -> Result<(), Box<dyn Error>> {
    let line = 24;
    let width = 520u32;
    let height = 70 + line * (rows.len() as u32 + 1);
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    root.draw(&Text::new(
        title.to_string(),
        (20, 10),
        ("sans-serif", 20).into_font(),
    ))?;

    let header = format!("{:>4}  {:>14}  {:>10}", "k", "combinations", "necklaces");
    root.draw(&Text::new(
        header,
        (20, 44),
        ("monospace", 16).into_font(),
    ))?;
    for (i, row) in rows.iter().enumerate() {
        let text = format!(
            "{:>4}  {:>14}  {:>10}",
            row.k, row.combinations, row.necklaces
        );
        root.draw(&Text::new(
            text,
            (20, 44 + line as i32 * (i as i32 + 1)),
            ("monospace", 16).into_font(),
        ))?;
    }

    root.present()?;
    Ok(())
}

fn draw_bit_row<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    pattern: &Pattern,
    x0: i32,
    y0: i32,
    cell: i32,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    for (c, &bit) in pattern.bits().iter().enumerate() {
        let x = x0 + c as i32 * cell;
        let fill = if bit { BLACK.filled() } else { WHITE.filled() };
        root.draw(&Rectangle::new([(x, y0), (x + cell, y0 + cell)], fill))?;
        root.draw(&Rectangle::new(
            [(x, y0), (x + cell, y0 + cell)],
            BLACK.stroke_width(1),
        ))?;
    }
    Ok(())
}
