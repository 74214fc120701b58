use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::theme::Theme;
use crate::core::presentation::PredictionRow;

/// Ranked predictions; rows arrive already in server order.
pub fn results_table(ui: &mut egui::Ui, theme: &Theme, rows: &[PredictionRow]) {
    let ctx = ui.ctx().clone();
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y)
        + 6.0;

    TableBuilder::new(ui)
        .id_salt("prediction_results")
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(40.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(70.0))
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "#"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "Disease"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "Confidence"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "Level"));
            });
        })
        .body(|body| {
            body.rows(text_height, rows.len(), |mut table_row| {
                let row = &rows[table_row.index()];
                let color = theme.tier_color(&ctx, row.tier);

                table_row.col(|ui| {
                    ui.label(row.rank.to_string());
                });
                table_row.col(|ui| {
                    ui.strong(row.label.as_str());
                });
                table_row.col(|ui| {
                    ui.add(
                        egui::ProgressBar::new((row.percent.clamp(0, 100) as f32) / 100.0)
                            .desired_width(80.0)
                            .fill(color)
                            .text(row.confidence.as_str()),
                    );
                });
                table_row.col(|ui| {
                    ui.label(egui::RichText::new(row.tier.as_str()).color(color).strong());
                });
            });
        });
}
