mod app;
mod color;
mod data;
mod figure;
mod theme;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};

use app::KenPlotApp;
use data::model::{SIZE_COLUMN, TYPE_COLUMN};
use data::{loader, transform};
use eframe::egui;
use figure::Figure;
use theme::Theme;

const RESULTS_PATH: &str = "results.csv";
const ROUND_PLACES: u32 = 3;

fn main() -> Result<()> {
    env_logger::init();

    let table = loader::load_results(Path::new(RESULTS_PATH))
        .with_context(|| format!("loading {RESULTS_PATH}"))?;
    let table = transform::round_numeric_columns(table, ROUND_PLACES);
    log::info!(
        "Loaded {} rows ({} type categories, {} size groups)",
        table.len(),
        table.unique_values.get(TYPE_COLUMN).map_or(0, |v| v.len()),
        table.unique_values.get(SIZE_COLUMN).map_or(0, |v| v.len()),
    );

    let figure = Figure::build(&table, Theme::ticks()).context("building figure")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "kenplot – Generator Benchmark Results",
        options,
        Box::new(move |_cc| Ok(Box::new(KenPlotApp::new(figure)))),
    )
    .map_err(|e| anyhow::anyhow!("starting viewer: {e}"))
}
