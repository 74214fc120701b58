use eframe::egui;

use super::theme::Theme;
use crate::core::{
    labels::parse_symptom_list,
    ClientState,
    RequestState,
    SelectedSymptoms,
};

#[derive(Default)]
pub struct SymptomPicker {
    filter: String,
    free_text: String,
}

impl SymptomPicker {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches_filter(&self, label: &str) -> bool {
        let filter = self.filter.trim().to_lowercase();
        filter.is_empty() || label.to_lowercase().contains(&filter)
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        state: &ClientState,
        selected: &mut SelectedSymptoms,
    ) {
        let ctx = ui.ctx().clone();
        ui.label(theme.heading(&ctx, "Symptoms"));
        ui.add_space(4.0);

        match state.symptoms_state() {
            RequestState::Loading | RequestState::Idle => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading symptoms...");
                });
            }
            RequestState::Error(message) => {
                ui.colored_label(theme.error(&ctx), format!("⚠ {message}"));
                ui.label(theme.muted(&ctx, "You can still type symptoms below."));
            }
            RequestState::Success => {}
        }

        ui.add(
            egui::TextEdit::singleline(&mut self.filter)
                .hint_text("Filter symptoms")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);

        let list_height = (ui.available_height() - 120.0).max(80.0);
        egui::ScrollArea::vertical().max_height(list_height).auto_shrink([false, true]).show(
            ui,
            |ui| {
                if state.symptoms().is_empty() {
                    ui.label(theme.muted(&ctx, "No symptoms available"));
                }
                for symptom in state.symptoms().iter().filter(|s| self.matches_filter(&s.label)) {
                    let mut checked = selected.contains(&symptom.id);
                    if ui.checkbox(&mut checked, symptom.label.as_str()).changed() {
                        selected.toggle(&symptom.id);
                    }
                }
            },
        );

        ui.separator();
        ui.label("Or type symptoms (comma-separated):");
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.free_text)
                    .hint_text("fever, cough, tiredness")
                    .desired_width(ui.available_width() - 50.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Add").clicked() || submitted {
                selected.extend(parse_symptom_list(&self.free_text));
                self.free_text.clear();
            }
        });

        ui.horizontal(|ui| {
            ui.label(theme.muted(&ctx, &format!("{} selected", selected.len())));
            if ui.add_enabled(!selected.is_empty(), egui::Button::new("Clear")).clicked() {
                selected.clear();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matching() {
        let mut picker = SymptomPicker::new();
        assert!(picker.matches_filter("Sore Throat"));

        picker.filter = " throat ".to_string();
        assert!(picker.matches_filter("Sore Throat"));
        assert!(!picker.matches_filter("Fever"));
    }
}
