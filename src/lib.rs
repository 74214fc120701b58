pub mod api;
pub mod core;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    ClientConfig,
    ClientError,
    PredictionClient,
};
