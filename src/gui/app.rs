use std::time::Duration;

use eframe::egui;

use super::{
    results_table::results_table,
    settings_modal::SettingsModal,
    symptom_picker::SymptomPicker,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    api::HttpApi,
    core::{
        labels::display_label,
        presentation::prediction_rows,
        ClientConfig,
        ClientError,
        PredictionClient,
        RequestState,
        SelectedSymptoms,
    },
};

pub struct PredictorApp {
    client: PredictionClient<HttpApi>,
    config: ClientConfig,
    selected: SelectedSymptoms,

    // UI State
    picker: SymptomPicker,
    settings_modal: SettingsModal,
    theme: Theme,
    notice: Option<String>,
}

impl PredictorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Result<Self, ClientError> {
        let api = HttpApi::new(&config)?;
        let mut client = PredictionClient::new(api, config.submit_policy)?;
        client.load_symptoms();

        let theme = Theme::clinic();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Ok(Self {
            client,
            config,
            selected: SelectedSymptoms::new(),
            picker: SymptomPicker::new(),
            settings_modal: SettingsModal::new(),
            theme,
            notice: None,
        })
    }

    fn submit(&mut self) {
        match self.client.submit_prediction(&self.selected) {
            Ok(request) => tracing::debug!("Prediction {} sent", request),
            // Rejections are already reflected in the client state.
            Err(e) if e.is_local() => tracing::debug!("Submission rejected: {}", e),
            Err(e) => tracing::warn!("Submission failed: {}", e),
        }
    }

    fn show_selection(&self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();

        if self.selected.is_empty() {
            ui.label(self.theme.muted(&ctx, "No symptoms selected yet."));
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for id in self.selected.iter() {
                let text = egui::RichText::new(display_label(id));
                if self.client.state().is_known_symptom(id) {
                    ui.label(text);
                } else {
                    ui.label(text.color(self.theme.warning(&ctx)))
                        .on_hover_text("Not in the service's symptom list");
                }
                ui.label(self.theme.muted(&ctx, "·"));
            }
        });

        let unknown = self.client.state().unknown_symptoms(&self.selected);
        if !unknown.is_empty() && self.client.state().symptoms_state() == &RequestState::Success {
            ui.label(self.theme.muted(
                &ctx,
                &format!("{} symptom(s) not recognised; they are sent anyway.", unknown.len()),
            ));
        }
    }

    fn show_results(&self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();

        match self.client.state().prediction_state() {
            RequestState::Idle => {
                ui.label(self.theme.muted(&ctx, "Select symptoms and press Predict."));
            }
            RequestState::Loading => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Predicting...");
                });
                if let Some(message) = self.client.state().validation_message() {
                    ui.colored_label(self.theme.warning(&ctx), format!("⚠ {message}"));
                }
            }
            RequestState::Error(message) => {
                ui.colored_label(self.theme.error(&ctx), format!("⚠ {message}"));
            }
            RequestState::Success => {
                let rows = prediction_rows(self.client.state().predictions(), self.config.max_results);
                if rows.is_empty() {
                    ui.label(self.theme.muted(&ctx, "The service returned no predictions."));
                } else {
                    results_table(ui, &self.theme, &rows);
                }
            }
        }
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.client.poll();
        if self.client.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        if let Some(action) = TopBar::show(
            ctx,
            &self.theme,
            &self.config.api_base_url,
            self.client.state().symptoms_state(),
        ) {
            match action {
                TopBarAction::OpenSettings => self.settings_modal.open_settings(self.config.clone()),
            }
        }

        egui::SidePanel::left("symptom_panel").resizable(true).default_width(280.0).show(
            ctx,
            |ui| {
                self.picker.show(ui, &self.theme, self.client.state(), &mut self.selected);
            },
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.theme.heading(ctx, "Symptom → Disease Predictor"));
            ui.add_space(8.0);

            self.show_selection(ui);
            ui.add_space(8.0);

            let can_submit = self.client.can_submit();
            let predict = ui
                .add_enabled(can_submit, egui::Button::new("Predict").min_size([120.0, 28.0].into()))
                .on_disabled_hover_text("Waiting for the current prediction");
            if predict.clicked() {
                self.submit();
            }

            ui.separator();
            self.show_results(ui);

            if let Some(notice) = &self.notice {
                ui.add_space(12.0);
                ui.label(self.theme.muted(ctx, notice));
            }
        });

        if let Some(config) = self.settings_modal.show(ctx) {
            self.notice = Some(match config.save() {
                Ok(()) => "Settings saved. Restart to apply them.".to_string(),
                Err(e) => format!("Failed to save settings: {e}"),
            });
        }
    }
}
