//! Client library for the Yandex.Weather forecast API.
//!
//! This crate defines:
//! - An HTTP client for the forecast endpoint (full forecast and
//!   current-conditions fetches)
//! - The typed response schema
//! - Russian translation tables for condition and wind-direction codes
//! - A formatter rendering current conditions as human-readable text
//!
//! It is used by `yandex-weather-cli`, but can also be reused by other
//! binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod translate;

pub use client::{API_KEY_HEADER, BASE_URL, Client};
pub use config::Config;
pub use error::Error;
pub use format::format_current;
pub use model::{Fact, Forecast, Hour, Info, Part, Parts, TzInfo, WeatherResponse};
pub use translate::{translate_condition, translate_wind_direction};
