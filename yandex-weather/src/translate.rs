//! Russian translations for the condition and wind-direction codes the
//! API returns.
//!
//! Both lookups are total: a code that is not in the table comes back
//! unchanged, so codes added by the API later degrade to their raw form
//! instead of failing.

/// Condition code → Russian label.
pub const CONDITION_TRANSLATIONS: &[(&str, &str)] = &[
    ("clear", "ясно"),
    ("partly-cloudy", "малооблачно"),
    ("cloudy", "облачно с прояснениями"),
    ("overcast", "пасмурно"),
    ("drizzle", "морось"),
    ("rain", "дождь"),
    ("heavy-rain", "сильный дождь"),
    ("showers", "ливень"),
    ("wet-snow", "дождь со снегом"),
    ("light-snow", "небольшой снег"),
    ("light-rain", "небольшой дождь"),
    ("snow", "снег"),
    ("snow-showers", "снегопад"),
    ("hail", "град"),
    ("thunderstorm", "гроза"),
    ("thunderstorm-with-rain", "дождь с грозой"),
    ("thunderstorm-with-hail", "гроза с градом"),
];

/// Wind-direction code → Russian label.
pub const WIND_DIRECTION_TRANSLATIONS: &[(&str, &str)] = &[
    ("nw", "северо-западный"),
    ("n", "северный"),
    ("ne", "северо-восточный"),
    ("e", "восточный"),
    ("se", "юго-восточный"),
    ("s", "южный"),
    ("sw", "юго-западный"),
    ("w", "западный"),
    ("c", "штиль"),
];

fn lookup<'a>(table: &'static [(&'static str, &'static str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|&&(key, _)| key == code)
        .map_or(code, |&(_, label)| label)
}

/// Translate a condition code to its Russian label, or return the code
/// itself if it is unknown.
pub fn translate_condition(condition: &str) -> &str {
    lookup(CONDITION_TRANSLATIONS, condition)
}

/// Translate a wind-direction code to its Russian label, or return the
/// code itself if it is unknown.
pub fn translate_wind_direction(direction: &str) -> &str {
    lookup(WIND_DIRECTION_TRANSLATIONS, direction)
}
