use eframe::egui::{
    self,
    containers,
};

use super::theme::Theme;
use crate::core::RequestState;

pub enum TopBarAction {
    OpenSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        api_base_url: &str,
        symptoms_state: &RequestState,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Connection Settings").clicked() {
                        action = Some(TopBarAction::OpenSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, theme, api_base_url, symptoms_state);
                });
            });
        });

        action
    }

    fn show_status_indicator(
        ui: &mut egui::Ui,
        theme: &Theme,
        api_base_url: &str,
        symptoms_state: &RequestState,
    ) {
        let ctx = ui.ctx().clone();
        let (color, tooltip) = match symptoms_state {
            RequestState::Success => (theme.ok(&ctx), format!("Connected to {api_base_url}")),
            RequestState::Error(message) => (theme.error(&ctx), message.clone()),
            RequestState::Loading => (theme.warning(&ctx), format!("Connecting to {api_base_url}")),
            RequestState::Idle => (theme.warning(&ctx), "Not connected".to_string()),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip.as_str());
            ui.small("Prediction service").on_hover_text(tooltip.as_str());
        });
    }
}
