mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use lanechart_core::{Chart, ChartStyle, Dataset, LayoutConfig};
use lanechart_protocol::Viewport;

const SVG_WIDTH: f64 = 1200.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: lanechart <timelines-dir> [--svg <out.svg>]");
        std::process::exit(1);
    }

    let dir = PathBuf::from(&args[1]);
    let dataset = Dataset::load_dir(&dir)
        .with_context(|| format!("loading timelines from {}", dir.display()))?;
    if dataset.lanes.is_empty() {
        bail!("no .yml timeline files in {}", dir.display());
    }

    if let Some(pos) = args.iter().position(|a| a == "--svg") {
        let Some(out) = args.get(pos + 1) else {
            bail!("--svg requires an output path");
        };
        return export_svg(&dataset, out);
    }

    // Terminal cells are the pixel unit here, so a one-cell row pitch keeps
    // each band on its own line.
    let config = LayoutConfig {
        row_height: 1.0,
        row_padding: 0.0,
        lane_padding: 1.0,
    };
    let chart = Chart::new(&dataset, ChartStyle::new(), config, 80.0)?;
    renderer::run(chart)
}

fn export_svg(dataset: &Dataset, out: &str) -> Result<()> {
    let chart = Chart::new(dataset, ChartStyle::new(), LayoutConfig::default(), SVG_WIDTH)?;
    let height = chart.total_height() + lanechart_core::views::axis::AXIS_HEIGHT;
    let viewport = Viewport {
        x: 0.0,
        y: 0.0,
        width: SVG_WIDTH,
        height,
        dpr: 1.0,
    };
    let commands = chart.render(&viewport, None);
    let svg = lanechart_core::svg::render_svg(&commands, viewport.width, viewport.height);
    std::fs::write(out, svg).with_context(|| format!("writing {out}"))?;
    eprintln!("wrote {out}");
    Ok(())
}
