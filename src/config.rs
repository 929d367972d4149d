use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "HealthAssess";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "healthassess=info"
}

/// Get the application data directory
/// ~/HealthAssess/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("HealthAssess")
}

/// Get the models directory (for the optional ONNX classifier)
pub fn models_dir() -> PathBuf {
    app_data_dir().join("models")
}

/// Get the symptom classifier model directory
pub fn classifier_model_dir() -> PathBuf {
    models_dir().join("symptom-classifier")
}
