//! Response schema for the Yandex.Weather forecast endpoint.
//!
//! All types are passive records populated by JSON deserialization.
//! Every struct carries `#[serde(default)]` so fields the API omits take
//! their zero value, and fields this crate does not know about are ignored.
//! Zero in the pressure fields means "no data", not an actual reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full answer from the forecast endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherResponse {
    /// Server time of the request, Unix seconds.
    pub now: i64,
    /// Server time of the request, ISO 8601 string.
    pub now_dt: String,
    /// Echo of the query context.
    pub info: Info,
    /// Current conditions at the requested coordinates.
    pub fact: Fact,
    /// Per-day forecasts, ordered by date ascending (API guarantee).
    pub forecasts: Vec<Forecast>,
}

impl WeatherResponse {
    /// Server time as a typed timestamp, if `now` is within chrono's range.
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.now, 0)
    }
}

/// Information about the request itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    pub lat: f64,
    pub lon: f64,
    /// URL of the forecast page for these coordinates.
    pub url: String,
    /// Standard pressure for the location, mmHg. Zero means no data.
    pub def_pressure_mm: i32,
    /// Standard pressure for the location, hPa. Zero means no data.
    pub def_pressure_pa: i32,
    pub tzinfo: TzInfo,
}

/// Timezone of the queried location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TzInfo {
    /// IANA name, e.g. "Europe/Moscow".
    pub name: String,
    pub abbr: String,
    /// Whether daylight-saving time is in effect.
    pub dst: bool,
    /// Offset from UTC in seconds.
    pub offset: i32,
}

/// Current ("factual") weather conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fact {
    /// Temperature, °C.
    pub temp: i32,
    /// Feels-like temperature, °C.
    pub feels_like: i32,
    /// Weather icon code.
    pub icon: String,
    /// Condition code, e.g. "clear" or "thunderstorm-with-hail".
    pub condition: String,
    /// Wind speed, m/s.
    pub wind_speed: f64,
    /// Wind gust speed, m/s.
    pub wind_gust: f64,
    /// Wind direction code, e.g. "nw" or "c" for calm.
    pub wind_dir: String,
    /// Relative humidity, %.
    pub humidity: i32,
    /// "d" for daylight, "n" for night.
    pub daytime: String,
    /// Polar day or night at the location.
    pub polar: bool,
    pub season: String,
    /// Observation time, Unix seconds.
    pub obs_time: i64,
    pub prec_type: i32,
    pub prec_strength: f64,
    /// Cloud cover fraction, 0.0 to 1.0.
    pub cloudness: f64,
}

impl Fact {
    /// Observation time as a typed timestamp.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.obs_time, 0)
    }
}

/// Forecast for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    /// Date in YYYY-MM-DD form.
    pub date: String,
    /// Date as Unix seconds.
    pub date_ts: i64,
    /// ISO week number.
    pub week: i32,
    pub sunrise: String,
    pub sunset: String,
    pub moon_code: i32,
    pub moon_text: String,
    pub parts: Parts,
    /// Hourly forecast, ordered by hour ascending. Empty unless hourly
    /// data was requested.
    pub hours: Vec<Hour>,
}

impl Forecast {
    /// Forecast date as a typed timestamp.
    pub fn date_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date_ts, 0)
    }
}

/// The day divided into its six named segments. All six are always
/// present in API responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parts {
    pub night: Part,
    pub morning: Part,
    pub day: Part,
    pub evening: Part,
    pub day_short: Part,
    pub night_short: Part,
}

/// Aggregated forecast for one segment of a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part {
    pub temp_min: i32,
    pub temp_max: i32,
    pub temp_avg: i32,
    pub feels_like: i32,
    pub icon: String,
    pub condition: String,
    pub daytime: String,
    pub polar: bool,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub wind_dir: String,
    /// Pressure, mmHg. Zero means no data.
    pub pressure_mm: i32,
    /// Pressure, hPa. Zero means no data.
    pub pressure_pa: i32,
    pub humidity: i32,
    /// Precipitation amount, mm.
    pub prec_mm: f64,
    /// Precipitation period, minutes.
    pub prec_period: i32,
    /// Precipitation probability, %.
    pub prec_probability: i32,
    pub prec_type: i32,
    pub prec_strength: f64,
    pub cloudness: f64,
}

/// Forecast for one specific hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hour {
    /// Hour of day, "0" through "23".
    pub hour: String,
    /// Start of the hour, Unix seconds.
    pub hour_ts: i64,
    pub temp: i32,
    pub feels_like: i32,
    pub icon: String,
    pub condition: String,
    pub cloudness: f64,
    pub prec_type: i32,
    pub prec_strength: f64,
    pub is_thunder: bool,
    pub wind_dir: String,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub pressure_mm: i32,
    pub pressure_pa: i32,
    pub humidity: i32,
    pub prec_mm: f64,
    pub prec_period: i32,
    pub prec_probability: i32,
}

impl Hour {
    /// Start of the hour as a typed timestamp.
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.hour_ts, 0)
    }
}
