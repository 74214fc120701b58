use eframe::egui;
use symptom_predictor::{
    gui::PredictorApp,
    ClientConfig,
};
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::load();
    tracing::info!("Starting symptom predictor against {}", config.api_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Symptom Predictor")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Symptom Predictor",
        options,
        Box::new(move |cc| Ok(Box::new(PredictorApp::new(cc, config)?))),
    )
}
