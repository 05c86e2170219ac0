//! Turns a decoded wttr.in response into the bar text and tooltip.

use tracing::{debug, instrument};

use crate::{
    error::Result,
    format::{format_chances, format_temp, format_time},
    icons::weather_icon,
    model::{
        CurrentCondition, ForecastDay, HourlyForecast, WidgetOutput, WttrResponse,
        first_description,
    },
    provider::WeatherProvider,
};

/// How many already-past hours of today stay visible in the tooltip.
pub const DEFAULT_LOOKBACK_HOURS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Local wall-clock hour, 0-23.
    pub current_hour: u32,
    pub lookback_hours: u32,
}

impl ReportOptions {
    pub fn new(current_hour: u32) -> Self {
        Self {
            current_hour,
            lookback_hours: DEFAULT_LOOKBACK_HOURS,
        }
    }

    pub fn with_lookback(mut self, lookback_hours: u32) -> Self {
        self.lookback_hours = lookback_hours;
        self
    }

    /// Earliest hour of today that is still shown.
    fn first_visible_hour(&self) -> i64 {
        i64::from(self.current_hour) - i64::from(self.lookback_hours)
    }
}

/// Fetch from `provider` and build the widget output in one go.
pub async fn fetch_report<P>(provider: &P, options: ReportOptions) -> Result<WidgetOutput>
where
    P: WeatherProvider + ?Sized,
{
    let response = provider.fetch().await?;
    build_report(&response, options)
}

#[instrument(skip(response), fields(days = response.weather.len()))]
pub fn build_report(response: &WttrResponse, options: ReportOptions) -> Result<WidgetOutput> {
    let current = response.current()?;

    let icon = weather_icon(&current.weather_code);
    let text = format!("{icon} {}°C", current.feels_like_c);

    let mut tooltip = current_section(current)?;
    for (index, day) in response.weather.iter().enumerate() {
        tooltip.push_str(&day_section(index, day, options)?);
    }

    Ok(WidgetOutput { text, tooltip })
}

fn current_section(current: &CurrentCondition) -> Result<String> {
    let description = first_description(&current.weather_desc)?;

    let mut out = format!("<b>{description} {}°C</b>\n", current.temp_c);
    out.push_str(&format!("Feels like: {}°C\n", current.feels_like_c));
    out.push_str(&format!("Wind: {}mi/h\n", current.windspeed_miles));
    out.push_str(&format!("Humidity: {}%\n", current.humidity));
    Ok(out)
}

fn day_prefix(index: usize) -> &'static str {
    match index {
        0 => "Today, ",
        1 => "Tomorrow, ",
        _ => "",
    }
}

fn day_section(index: usize, day: &ForecastDay, options: ReportOptions) -> Result<String> {
    let astronomy = day.astronomy()?;

    let (high, low) = (&day.max_temp_c, &day.min_temp_c);
    let (sunrise, sunset) = (&astronomy.sunrise, &astronomy.sunset);

    let mut out = format!("\n<b>{}{}</b>\n", day_prefix(index), day.date);
    out.push_str(&format!("⬆️ {high}° ⬇️ {low}° "));
    out.push_str(&format!("🌅 {sunrise} 🌇 {sunset}\n"));

    for hour in &day.hourly {
        if index == 0 && is_past(hour, options) {
            debug!(time = %hour.time, "skipping past hour");
            continue;
        }
        out.push_str(&hour_line(hour)?);
    }
    Ok(out)
}

/// Hours that do not parse are never considered past.
fn is_past(hour: &HourlyForecast, options: ReportOptions) -> bool {
    format_time(&hour.time)
        .parse::<i64>()
        .is_ok_and(|h| h < options.first_visible_hour())
}

fn hour_line(hour: &HourlyForecast) -> Result<String> {
    let description = first_description(&hour.weather_desc)?;
    Ok(format!(
        "{} {} {} {}, {}\n",
        format_time(&hour.time),
        weather_icon(&hour.weather_code),
        format_temp(&hour.feels_like_c),
        description,
        format_chances(&hour.chances()),
    ))
}
