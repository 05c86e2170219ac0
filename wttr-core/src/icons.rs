//! wttr.in weather codes mapped to the glyphs shown in the bar.

use std::{collections::HashMap, sync::LazyLock};

static WEATHER_ICONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("113", "☀️"),
        ("116", "⛅️"),
        ("119", "☁️"),
        ("122", "☁️"),
        ("143", "🌫"),
        ("176", "🌦"),
        ("179", "🌧"),
        ("182", "🌧"),
        ("185", "🌧"),
        ("200", "⛈"),
        ("227", "🌨"),
        ("230", "❄️"),
        ("248", "🌫"),
        ("260", "🌫"),
        ("263", "🌦"),
        ("266", "🌦"),
        ("281", "🌧"),
        ("284", "🌧"),
        ("293", "🌦"),
        ("296", "🌦"),
        ("299", "🌧"),
        ("302", "🌧"),
        ("305", "🌧"),
        ("308", "🌧"),
        ("311", "🌧"),
        ("314", "🌧"),
        ("317", "🌧"),
        ("320", "🌨"),
        ("323", "🌨"),
        ("326", "🌨"),
        ("329", "❄️"),
        ("332", "❄️"),
        ("335", "❄️"),
        ("338", "❄️"),
        ("350", "🌧"),
        ("353", "🌦"),
        ("356", "🌧"),
        ("359", "🌧"),
        ("362", "🌧"),
        ("365", "🌧"),
        ("368", "🌨"),
        ("371", "❄️"),
        ("374", "🌧"),
        ("377", "🌧"),
        ("386", "⛈"),
        ("389", "🌩"),
        ("392", "⛈"),
        ("395", "❄️"),
    ])
});

/// Icon for a weather code, or `""` when the code is unknown.
pub fn weather_icon(code: &str) -> &'static str {
    WEATHER_ICONS.get(code).copied().unwrap_or("")
}
