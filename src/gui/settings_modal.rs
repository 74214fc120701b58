use eframe::egui;

use crate::core::{
    ClientConfig,
    SubmitPolicy,
};

pub struct SettingsModal {
    open: bool,
    original: ClientConfig,
    draft: ClientConfig,
    error: Option<String>,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            original: ClientConfig::default(),
            draft: ClientConfig::default(),
            error: None,
        }
    }

    pub fn open_settings(&mut self, current: ClientConfig) {
        self.original = current.clone();
        self.draft = current;
        self.error = None;
        self.open = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Returns the validated settings when the user saves.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<ClientConfig> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Connection Settings");
            ui.add_space(10.0);

            egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("API base URL");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.api_base_url)
                        .desired_width(260.0),
                );
                ui.end_row();

                ui.label("Timeout (seconds)");
                ui.add(egui::DragValue::new(&mut self.draft.request_timeout_secs).range(1..=120));
                ui.end_row();

                ui.label("Results shown");
                ui.add(egui::DragValue::new(&mut self.draft.max_results).range(1..=10));
                ui.end_row();

                ui.label("While a prediction is pending");
                egui::ComboBox::from_id_salt("submit_policy")
                    .selected_text(self.draft.submit_policy.label())
                    .show_ui(ui, |ui| {
                        for policy in SubmitPolicy::ALL {
                            ui.selectable_value(
                                &mut self.draft.submit_policy,
                                policy,
                                policy.label(),
                            );
                        }
                    });
                ui.end_row();
            });

            ui.add_space(8.0);
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), format!("⚠ {error}"));
            } else {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::LIGHT_BLUE, "ℹ");
                    ui.label("Changes apply the next time the app starts.");
                });
            }

            ui.separator();

            ui.horizontal(|ui| {
                let is_dirty = self.is_dirty();
                if ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked() {
                    match self.draft.validate() {
                        Ok(()) => {
                            result = Some(self.draft.clone());
                            ui.close();
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Restore Default").clicked() {
                        self.draft = ClientConfig::default();
                        self.error = None;
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
