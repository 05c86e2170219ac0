use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};

/// Body of `https://wttr.in/?format=j1`, reduced to the fields the report reads.
///
/// wttr.in sends every value as a string; they are kept verbatim so the
/// tooltip shows exactly what the service reported. Absent fields decode to
/// empty values, empty lists are caught when the report reads them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WttrResponse {
    pub current_condition: Vec<CurrentCondition>,
    pub weather: Vec<ForecastDay>,
}

impl WttrResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(WeatherError::Decode)
    }

    pub fn current(&self) -> Result<&CurrentCondition> {
        self.current_condition
            .first()
            .ok_or(WeatherError::MissingData("current_condition"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeatherDesc {
    pub value: String,
}

/// Description text of the first `weatherDesc` entry.
pub(crate) fn first_description(descs: &[WeatherDesc]) -> Result<&str> {
    descs
        .first()
        .map(|d| d.value.as_str())
        .ok_or(WeatherError::MissingData("weatherDesc"))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentCondition {
    #[serde(rename = "weatherCode")]
    pub weather_code: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "windspeedMiles")]
    pub windspeed_miles: String,
    pub humidity: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WeatherDesc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForecastDay {
    pub date: String,
    #[serde(rename = "maxtempC")]
    pub max_temp_c: String,
    #[serde(rename = "mintempC")]
    pub min_temp_c: String,
    pub astronomy: Vec<Astronomy>,
    pub hourly: Vec<HourlyForecast>,
}

impl ForecastDay {
    pub fn astronomy(&self) -> Result<&Astronomy> {
        self.astronomy
            .first()
            .ok_or(WeatherError::MissingData("astronomy"))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourlyForecast {
    pub time: String,
    #[serde(rename = "weatherCode")]
    pub weather_code: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WeatherDesc>,
    #[serde(rename = "chanceoffog")]
    pub chance_of_fog: String,
    #[serde(rename = "chanceoffrost")]
    pub chance_of_frost: String,
    #[serde(rename = "chanceofovercast")]
    pub chance_of_overcast: String,
    #[serde(rename = "chanceofrain")]
    pub chance_of_rain: String,
    #[serde(rename = "chanceofsnow")]
    pub chance_of_snow: String,
    #[serde(rename = "chanceofsunshine")]
    pub chance_of_sunshine: String,
    #[serde(rename = "chanceofthunder")]
    pub chance_of_thunder: String,
    #[serde(rename = "chanceofwindy")]
    pub chance_of_windy: String,
}

impl HourlyForecast {
    pub fn chances(&self) -> Chances<'_> {
        Chances {
            fog: &self.chance_of_fog,
            frost: &self.chance_of_frost,
            overcast: &self.chance_of_overcast,
            rain: &self.chance_of_rain,
            snow: &self.chance_of_snow,
            sunshine: &self.chance_of_sunshine,
            thunder: &self.chance_of_thunder,
            wind: &self.chance_of_windy,
        }
    }
}

/// Percent chance of each condition for one hour, as reported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chances<'a> {
    pub fog: &'a str,
    pub frost: &'a str,
    pub overcast: &'a str,
    pub rain: &'a str,
    pub snow: &'a str,
    pub sunshine: &'a str,
    pub thunder: &'a str,
    pub wind: &'a str,
}

impl<'a> Chances<'a> {
    /// Values paired with their display names, in display order.
    pub fn named(&self) -> [(&'static str, &'a str); 8] {
        [
            ("Fog", self.fog),
            ("Frost", self.frost),
            ("Overcast", self.overcast),
            ("Rain", self.rain),
            ("Snow", self.snow),
            ("Sunshine", self.sunshine),
            ("Thunder", self.thunder),
            ("Wind", self.wind),
        ]
    }
}

/// JSON object consumed by a Waybar `custom` module with `return-type: json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetOutput {
    pub text: String,
    pub tooltip: String,
}

impl WidgetOutput {
    /// Compact single-line JSON.
    pub fn to_json_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(WeatherError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wttr_field_names() {
        let body = r#"{
            "current_condition": [{
                "FeelsLikeC": "12", "temp_C": "14", "weatherCode": "116",
                "windspeedMiles": "9", "humidity": "71",
                "weatherDesc": [{"value": "Partly cloudy"}],
                "visibility": "10"
            }],
            "weather": [{
                "date": "2024-05-01", "maxtempC": "18", "mintempC": "9",
                "astronomy": [{
                    "sunrise": "05:50 AM", "sunset": "08:41 PM",
                    "moon_phase": "Waning Gibbous"
                }],
                "hourly": [{
                    "time": "300", "weatherCode": "113", "FeelsLikeC": "8",
                    "weatherDesc": [{"value": "Clear"}],
                    "chanceofrain": "40", "chanceofwindy": "5"
                }]
            }]
        }"#;

        let parsed = WttrResponse::from_json(body).expect("valid body");
        let current = parsed.current().unwrap();
        assert_eq!(current.weather_code, "116");
        assert_eq!(current.feels_like_c, "12");
        assert_eq!(current.temp_c, "14");
        assert_eq!(
            first_description(&current.weather_desc).unwrap(),
            "Partly cloudy"
        );

        let day = &parsed.weather[0];
        assert_eq!(day.max_temp_c, "18");
        assert_eq!(day.astronomy().unwrap().sunset, "08:41 PM");

        let chances = day.hourly[0].chances();
        assert_eq!(chances.rain, "40");
        assert_eq!(chances.wind, "5");
        assert_eq!(chances.fog, "");
    }

    #[test]
    fn absent_string_fields_decode_empty() {
        let body = r#"{
            "current_condition": [{"weatherDesc": [{"value": "Mist"}]}],
            "weather": [{"hourly": [{"chanceofrain": "30"}]}]
        }"#;

        let parsed = WttrResponse::from_json(body).unwrap();
        let current = parsed.current().unwrap();
        assert_eq!(current.weather_code, "");
        assert_eq!(current.feels_like_c, "");
        assert_eq!(current.temp_c, "");

        let day = &parsed.weather[0];
        assert_eq!(day.date, "");
        assert_eq!(day.max_temp_c, "");
        assert_eq!(day.min_temp_c, "");
        assert_eq!(day.hourly[0].time, "");
        assert_eq!(day.hourly[0].weather_code, "");
        assert_eq!(day.hourly[0].chance_of_rain, "30");
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = WttrResponse::from_json("{not json").unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
        assert!(err.to_string().contains("Failed to decode weather data"));
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        let body = r#"{"current_condition": "sunny"}"#;
        let err = WttrResponse::from_json(body).unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[test]
    fn empty_current_condition_is_missing_data() {
        let parsed = WttrResponse::from_json(r#"{"weather": []}"#).unwrap();
        let err = parsed.current().unwrap_err();
        assert!(matches!(err, WeatherError::MissingData(_)));
        assert!(err.to_string().contains("current_condition"));
    }

    #[test]
    fn widget_output_is_single_line_json() {
        let out = WidgetOutput {
            text: "20°C".into(),
            tooltip: "<b>Sunny</b>\nline".into(),
        };
        let line = out.to_json_line().unwrap();

        assert!(!line.contains('\n'));
        assert_eq!(line, r#"{"text":"20°C","tooltip":"<b>Sunny</b>\nline"}"#);
    }
}
