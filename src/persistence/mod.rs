use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::ClientError;

const APP_NAME: &str = "symptom-predictor";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        app_dir_in(&data_dir)
    } else {
        PathBuf::from(".")
    }
}

/// Creation failures are logged; saving into the directory reports the error.
fn app_dir_in(data_dir: &Path) -> PathBuf {
    let app_dir = data_dir.join(APP_NAME);
    if let Err(e) = fs::create_dir_all(&app_dir) {
        tracing::warn!("Failed to create {}: {}", app_dir.display(), e);
    }
    app_dir
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), ClientError> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    let file_path = get_data_file_path(filename);
    match load_json_from::<T>(&file_path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Failed to load {}: {}. Using defaults.", file_path.display(), e);
            T::default()
        }
    }
}

fn save_json_to<T: Serialize>(data: &T, file_path: &Path) -> Result<(), ClientError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    tracing::info!("Data saved to: {}", file_path.display());
    Ok(())
}

/// Missing files load as `T::default()`.
fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    file_path: &Path,
) -> Result<T, ClientError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    tracing::debug!("Data loaded from: {}", file_path.display());
    Ok(data)
}
