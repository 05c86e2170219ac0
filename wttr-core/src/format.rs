//! Small string formatters used to lay out the tooltip.

use crate::model::Chances;

/// Turns a wttr.in hour (`"0"`, `"100"`, ..., `"2300"`) into a two-digit hour.
///
/// Every `"00"` is removed; an empty remainder becomes `"24"` and a single
/// digit is zero-padded, so `"0"` and `"100"` render as `"00"` and `"01"`.
pub fn format_time(time: &str) -> String {
    let cleaned = time.replace("00", "");
    match cleaned.chars().count() {
        0 => "24".to_string(),
        1 => format!("0{cleaned}"),
        _ => cleaned,
    }
}

/// Temperature with a degree sign, left-aligned in a three column cell.
pub fn format_temp(temp: &str) -> String {
    let cell = format!("{temp}°");
    format!("{cell:<3}")
}

/// `"Rain 80%, Wind 15%"` style summary of the non-zero chances.
///
/// Values that are not integers or are not positive are left out.
pub fn format_chances(chances: &Chances<'_>) -> String {
    chances
        .named()
        .into_iter()
        .filter(|(_, raw)| raw.parse::<i64>().is_ok_and(|chance| chance > 0))
        .map(|(name, raw)| format!("{name} {raw}%"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_strips_double_zeros_and_pads() {
        let cases = [
            ("0", "00"),
            ("100", "01"),
            ("300", "03"),
            ("900", "09"),
            ("1000", "10"),
            ("1200", "12"),
            ("1400", "14"),
            ("2000", "20"),
            ("2300", "23"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_time(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn time_with_nothing_left_is_24() {
        assert_eq!(format_time(""), "24");
        assert_eq!(format_time("00"), "24");
        assert_eq!(format_time("0000"), "24");
    }

    #[test]
    fn temp_pads_to_three_columns() {
        assert_eq!(format_temp("5"), "5° ");
        assert_eq!(format_temp("20"), "20°");
        assert_eq!(format_temp("-12"), "-12°");
        assert_eq!(format_temp(""), "°  ");
    }

    #[test]
    fn chances_all_zero_is_empty() {
        let chances = Chances {
            fog: "0",
            frost: "0",
            overcast: "0",
            rain: "0",
            snow: "0",
            sunshine: "0",
            thunder: "0",
            wind: "0",
        };
        assert_eq!(format_chances(&chances), "");
    }

    #[test]
    fn chances_keep_fixed_order() {
        let chances = Chances {
            rain: "80",
            snow: "0",
            wind: "15",
            ..Chances::default()
        };
        assert_eq!(format_chances(&chances), "Rain 80%, Wind 15%");
    }

    #[test]
    fn chances_skip_unparsable_and_negative() {
        let chances = Chances {
            fog: "n/a",
            frost: "-3",
            overcast: "55",
            sunshine: "12.5",
            thunder: "1",
            ..Chances::default()
        };
        assert_eq!(format_chances(&chances), "Overcast 55%, Thunder 1%");
    }

    #[test]
    fn chances_render_raw_value() {
        let chances = Chances {
            snow: "07",
            ..Chances::default()
        };
        assert_eq!(format_chances(&chances), "Snow 07%");
    }
}
