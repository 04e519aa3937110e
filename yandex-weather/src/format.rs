//! Human-readable rendering of current conditions.

use crate::model::WeatherResponse;
use crate::translate::{translate_condition, translate_wind_direction};

/// Placeholder used for the location line. The forecast response carries
/// no reverse-geocoded place name, so the output never names a real city.
const UNKNOWN_LOCATION: &str = "неизвестном месте";

/// Render current conditions as a short multi-line summary.
///
/// With `lang == "ru_RU"` (or empty) the condition and wind-direction
/// codes are translated to Russian; any other language tag falls back to
/// English field labels with the raw codes. `None` yields a fixed
/// "no data" sentinel. Never fails; untranslated codes and missing
/// pressure degrade to placeholders instead of errors.
pub fn format_current(weather: Option<&WeatherResponse>, lang: &str) -> String {
    let Some(weather) = weather else {
        return "Нет данных о погоде".to_string();
    };

    let fact = &weather.fact;
    let mut out = String::new();

    if lang == "ru_RU" || lang.is_empty() {
        out.push_str(&format!("Погода в {UNKNOWN_LOCATION}:\n"));
        out.push_str(&format!("Температура: {}°C\n", fact.temp));
        out.push_str(&format!("Ощущается как: {}°C\n", fact.feels_like));
        out.push_str(&format!(
            "Погодные условия: {}\n",
            translate_condition(&fact.condition)
        ));
        out.push_str(&format!(
            "Ветер: {} {:.1} м/с\n",
            translate_wind_direction(&fact.wind_dir),
            fact.wind_speed
        ));
        out.push_str(&format!("Влажность: {}%\n", fact.humidity));

        // Zero pressure is the "not reported" sentinel.
        let pressure = if weather.info.def_pressure_mm > 0 {
            format!("{} мм рт.ст.", weather.info.def_pressure_mm)
        } else {
            "Нет данных".to_string()
        };
        out.push_str(&format!("Давление: {pressure}\n"));
    } else {
        out.push_str(&format!("Weather in {UNKNOWN_LOCATION}:\n"));
        out.push_str(&format!("Temperature: {}°C\n", fact.temp));
        out.push_str(&format!("Feels like: {}°C\n", fact.feels_like));
        out.push_str(&format!("Condition: {}\n", fact.condition));
        out.push_str(&format!("Wind: {} {:.1} m/s\n", fact.wind_dir, fact.wind_speed));
        out.push_str(&format!("Humidity: {}%\n", fact.humidity));

        let pressure = if weather.info.def_pressure_mm > 0 {
            format!("{} mmHg", weather.info.def_pressure_mm)
        } else {
            "No data".to_string()
        };
        out.push_str(&format!("Pressure: {pressure}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fact, Info, WeatherResponse};

    fn sample_response() -> WeatherResponse {
        WeatherResponse {
            fact: Fact {
                temp: 20,
                feels_like: 18,
                condition: "cloudy".to_string(),
                wind_dir: "n".to_string(),
                wind_speed: 3.5,
                humidity: 60,
                ..Fact::default()
            },
            info: Info {
                def_pressure_mm: 750,
                ..Info::default()
            },
            ..WeatherResponse::default()
        }
    }

    #[test]
    fn absent_response_yields_sentinel() {
        assert_eq!(format_current(None, "ru_RU"), "Нет данных о погоде");
        assert_eq!(format_current(None, "en_US"), "Нет данных о погоде");
    }

    #[test]
    fn russian_branch_translates_codes() {
        let out = format_current(Some(&sample_response()), "ru_RU");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Погода в неизвестном месте:",
                "Температура: 20°C",
                "Ощущается как: 18°C",
                "Погодные условия: облачно с прояснениями",
                "Ветер: северный 3.5 м/с",
                "Влажность: 60%",
                "Давление: 750 мм рт.ст.",
            ]
        );
    }

    #[test]
    fn empty_lang_uses_russian_branch() {
        let out = format_current(Some(&sample_response()), "");
        assert!(out.contains("Погодные условия: облачно с прояснениями"));
    }

    #[test]
    fn other_languages_keep_raw_codes() {
        let out = format_current(Some(&sample_response()), "en_US");

        assert!(out.contains("Condition: cloudy"));
        assert!(out.contains("Wind: n 3.5 m/s"));
        assert!(out.contains("Pressure: 750 mmHg"));
        assert!(!out.contains("облачно"));
    }

    #[test]
    fn third_language_degrades_to_english_labels() {
        let out = format_current(Some(&sample_response()), "de_DE");
        assert!(out.contains("Temperature: 20°C"));
        assert!(out.contains("Condition: cloudy"));
    }

    #[test]
    fn zero_pressure_renders_no_data_in_both_branches() {
        let mut response = sample_response();
        response.info.def_pressure_mm = 0;

        let ru = format_current(Some(&response), "ru_RU");
        assert!(ru.contains("Давление: Нет данных"));

        let en = format_current(Some(&response), "en_US");
        assert!(en.contains("Pressure: No data"));
    }

    #[test]
    fn positive_pressure_renders_with_unit() {
        let mut response = sample_response();
        response.info.def_pressure_mm = 745;

        let ru = format_current(Some(&response), "ru_RU");
        assert!(ru.contains("Давление: 745 мм рт.ст."));
    }

    #[test]
    fn russian_label_for_clear_condition() {
        let mut response = sample_response();
        response.fact.condition = "clear".to_string();

        let ru = format_current(Some(&response), "ru_RU");
        assert!(ru.contains("ясно"));

        let en = format_current(Some(&response), "en_US");
        assert!(en.contains("clear"));
    }
}
