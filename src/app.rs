use eframe::egui;

use crate::figure::Figure;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct KenPlotApp {
    figure: Figure,
}

impl KenPlotApp {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for KenPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::results_plot(ui, &self.figure);
        });
    }
}
