//! Weather-to-parameter mapper.
//!
//! A pure, deterministic, total function from a weather snapshot to the
//! fixed parameter vocabulary. Condition keywords take priority over
//! temperature; temperature is bucketed in °F. Unexpected inputs (unknown
//! condition text, NaN temperature) land in the mild default bucket —
//! this function never fails.

use stylecast_core::params::{Mood, Occasion, OutfitParameters, Style};
use stylecast_core::weather::WeatherSnapshot;

/// Wind at or above this (mph) nudges the mild-weather mood.
const BLUSTERY_WIND_MPH: f64 = 25.0;

/// Derive the generation parameters for a snapshot.
pub fn derive_parameters(weather: &WeatherSnapshot) -> OutfitParameters {
    let condition = weather.condition.to_lowercase();

    // Precipitation and sky keywords win over temperature.
    if condition.contains("thunder") || condition.contains("storm") {
        return OutfitParameters {
            occasion: Occasion::Lounge,
            style: Style::Cozy,
            mood: Mood::Cozy,
        };
    }
    if condition.contains("snow") || condition.contains("sleet") || condition.contains("ice") {
        return OutfitParameters {
            occasion: Occasion::Casual,
            style: Style::Cozy,
            mood: Mood::Cozy,
        };
    }
    if condition.contains("rain")
        || condition.contains("drizzle")
        || condition.contains("shower")
    {
        return OutfitParameters {
            occasion: Occasion::Casual,
            style: Style::Classic,
            mood: Mood::Relaxed,
        };
    }
    if condition.contains("fog") || condition.contains("mist") || condition.contains("haze") {
        return OutfitParameters {
            occasion: Occasion::Casual,
            style: Style::Minimal,
            mood: Mood::Relaxed,
        };
    }

    // Temperature buckets, hottest and coldest first.
    let temp = weather.temperature_f;
    if temp >= 90.0 {
        return OutfitParameters {
            occasion: Occasion::Casual,
            style: Style::Athleisure,
            mood: Mood::Energetic,
        };
    }
    if temp >= 85.0 {
        return OutfitParameters {
            occasion: Occasion::Casual,
            style: Style::Casual,
            mood: Mood::Fresh,
        };
    }
    if temp <= 25.0 {
        return OutfitParameters {
            occasion: Occasion::Lounge,
            style: Style::Cozy,
            mood: Mood::Cozy,
        };
    }
    if temp <= 32.0 {
        return OutfitParameters {
            occasion: Occasion::Casual,
            style: Style::Cozy,
            mood: Mood::Cozy,
        };
    }
    if temp <= 40.0 {
        return OutfitParameters {
            occasion: Occasion::Casual,
            style: Style::Classic,
            mood: Mood::Confident,
        };
    }
    if temp <= 45.0 {
        return OutfitParameters {
            occasion: Occasion::Casual,
            style: Style::Classic,
            mood: Mood::Relaxed,
        };
    }

    // Mild default (46–84°F, or anything unclassifiable like NaN).
    let mood = if weather.wind_speed_mph >= BLUSTERY_WIND_MPH {
        Mood::Bold
    } else {
        Mood::Fresh
    };
    OutfitParameters {
        occasion: Occasion::Casual,
        style: Style::Minimal,
        mood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot(temperature_f: f64, condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_f,
            condition: condition.into(),
            humidity: 50,
            wind_speed_mph: 5.0,
            location: "Testville".into(),
            is_fallback: false,
            is_stale: false,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn hot_clear_day_maps_to_casual_athleisure() {
        let params = derive_parameters(&snapshot(95.0, "Clear"));
        assert_eq!(params.occasion, Occasion::Casual);
        assert_eq!(params.style, Style::Athleisure);
    }

    #[test]
    fn warm_day_maps_to_casual() {
        let params = derive_parameters(&snapshot(87.0, "Sunny"));
        assert_eq!(params.style, Style::Casual);
        assert_eq!(params.mood, Mood::Fresh);
    }

    #[test]
    fn condition_keywords_beat_temperature() {
        // 95°F but raining: the rain bucket wins.
        let params = derive_parameters(&snapshot(95.0, "Light rain"));
        assert_eq!(params.style, Style::Classic);
        assert_eq!(params.mood, Mood::Relaxed);
    }

    #[test]
    fn thunderstorm_maps_to_lounge() {
        let params = derive_parameters(&snapshot(70.0, "Thunderstorms"));
        assert_eq!(params.occasion, Occasion::Lounge);
        assert_eq!(params.style, Style::Cozy);
    }

    #[test]
    fn snow_maps_to_cozy() {
        let params = derive_parameters(&snapshot(28.0, "Heavy snow"));
        assert_eq!(params.style, Style::Cozy);
        assert_eq!(params.mood, Mood::Cozy);
    }

    #[test]
    fn cold_buckets_are_distinct() {
        assert_eq!(derive_parameters(&snapshot(20.0, "Clear")).occasion, Occasion::Lounge);
        assert_eq!(derive_parameters(&snapshot(30.0, "Clear")).occasion, Occasion::Casual);
        assert_eq!(derive_parameters(&snapshot(38.0, "Clear")).mood, Mood::Confident);
        assert_eq!(derive_parameters(&snapshot(44.0, "Clear")).mood, Mood::Relaxed);
    }

    #[test]
    fn mild_day_defaults_to_minimal() {
        let params = derive_parameters(&snapshot(68.0, "Partly cloudy"));
        assert_eq!(params.occasion, Occasion::Casual);
        assert_eq!(params.style, Style::Minimal);
        assert_eq!(params.mood, Mood::Fresh);
    }

    #[test]
    fn blustery_mild_day_turns_bold() {
        let mut snap = snapshot(68.0, "Partly cloudy");
        snap.wind_speed_mph = 30.0;
        assert_eq!(derive_parameters(&snap).mood, Mood::Bold);
    }

    #[test]
    fn total_over_garbage_input() {
        // NaN temperature and an unknown condition still produce a value.
        let params = derive_parameters(&snapshot(f64::NAN, "¯\\_(ツ)_/¯"));
        assert_eq!(params.occasion, Occasion::Casual);
        assert_eq!(params.style, Style::Minimal);

        let params = derive_parameters(&snapshot(f64::INFINITY, ""));
        assert_eq!(params.style, Style::Athleisure);

        let params = derive_parameters(&snapshot(f64::NEG_INFINITY, ""));
        assert_eq!(params.occasion, Occasion::Lounge);
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let params = derive_parameters(&snapshot(60.0, "RAIN SHOWERS"));
        assert_eq!(params.style, Style::Classic);
    }
}
