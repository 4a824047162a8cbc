// File: crates/kpi-demo/src/main.rs
// Summary: Demo drives a widget through a ChartContext with rows from JSON/CSV and writes a PNG.

mod input;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kpi_core::types::{HEIGHT, WIDTH};
use kpi_core::{kpi_chart_config, ChartContext, ChartModel, ChartWidget, KpiCardWidget, RowCountWidget};
use kpi_render_skia::{RenderOptions, SkiaRenderer};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum WidgetKind {
    Kpi,
    RowCount,
}

#[derive(Debug, Parser)]
#[command(name = "kpi-demo", about = "Render a KPI card from host-style rows")]
struct Args {
    /// Rows as .json (array or {"data": [...]}) or .csv; omit to render the no-data fallback
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = WIDTH)]
    width: u32,

    #[arg(long, default_value_t = HEIGHT)]
    height: u32,

    #[arg(short, long, default_value = "target/out/kpi_card.png")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = WidgetKind::Kpi)]
    widget: WidgetKind,

    /// Print the field configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Skip text (font-independent output)
    #[arg(long)]
    no_text: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&kpi_chart_config())?);
        return Ok(());
    }

    let model = match &args.input {
        Some(path) => input::load_model(path).with_context(|| format!("failed to load rows from '{}'", path.display()))?,
        None => ChartModel::default(),
    };
    log::info!("loaded {} rows", model.data().len());

    match args.widget {
        WidgetKind::Kpi => run(KpiCardWidget, &model, &args),
        WidgetKind::RowCount => run(RowCountWidget, &model, &args),
    }
}

fn run<W: ChartWidget>(widget: W, model: &ChartModel, args: &Args) -> Result<()> {
    let mut ctx = ChartContext::new(widget, args.width, args.height);
    ctx.render(model);

    let opts = RenderOptions {
        width: args.width as i32,
        height: args.height as i32,
        draw_text: !args.no_text,
        ..RenderOptions::default()
    };
    SkiaRenderer::new(opts)
        .render_target_to_png(ctx.target(), &args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    log::info!("wrote {}", args.out.display());

    ctx.destroy();
    Ok(())
}
