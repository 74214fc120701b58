pub mod app;
pub mod results_table;
pub mod settings_modal;
pub mod symptom_picker;
pub mod theme;
pub mod top_bar;

pub use app::PredictorApp;
