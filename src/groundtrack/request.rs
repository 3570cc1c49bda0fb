use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::groundtrack::color::ColorMode;
use crate::groundtrack::error::ValidationError;
use crate::groundtrack::propagation::TleLines;
use crate::groundtrack::time::julian_date;
use crate::groundtrack::types::{JulianDate, Rgb};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date plus separate hour and minute fields.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct TimeFields {
    pub date: String,
    #[serde(deserialize_with = "deserialize_field")]
    pub hour: String,
    #[serde(deserialize_with = "deserialize_field")]
    pub minute: String,
}

impl TimeFields {
    /// `date + "T" + HH + ":" + MM + ":00"`
    pub fn compose(&self) -> String {
        format!(
            "{}T{}:{}:00",
            self.date.trim(),
            self.hour.trim(),
            self.minute.trim()
        )
    }

    fn to_julian(&self, field: &'static str) -> Result<(String, JulianDate), ValidationError> {
        let composed = self.compose();
        let datetime = NaiveDateTime::parse_from_str(&composed, DATETIME_FORMAT).map_err(|e| {
            ValidationError::InvalidTime {
                field,
                value: composed.clone(),
                message: e.to_string(),
            }
        })?;
        Ok((composed, julian_date(&datetime)))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct IncrementFields {
    #[serde(default = "zero_field", deserialize_with = "deserialize_field")]
    pub hours: String,
    #[serde(default = "zero_field", deserialize_with = "deserialize_field")]
    pub minutes: String,
}

impl IncrementFields {
    /// Increment in days.
    pub fn to_days(&self) -> Result<f64, ValidationError> {
        let parse = |field: &'static str, value: &str| {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ValidationError::InvalidIncrement {
                    field,
                    value: value.to_string(),
                })
        };
        let hours = parse("hours", &self.hours)?;
        let minutes = parse("minutes", &self.minutes)?;
        Ok(1.0 / 24.0 * hours + 1.0 / (24.0 * 60.0) * minutes)
    }
}

/// Raw plot request as entered by the user.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct PlotRequest {
    #[serde(default)]
    pub title: String,
    pub tle: TleLines,
    pub start: TimeFields,
    pub end: TimeFields,
    pub increment: IncrementFields,
    /// Color the track by speed instead of `color`.
    #[serde(default)]
    pub gradient: bool,
    #[serde(default)]
    pub arrows: bool,
    /// `#rrggbb`; falls back to the configured plot color.
    #[serde(default)]
    pub color: Option<String>,
}

/// Request that passed validation, with times as Julian dates.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub title: String,
    pub tle: TleLines,
    pub start_label: String,
    pub end_label: String,
    pub start: JulianDate,
    pub end: JulianDate,
    pub increment: f64,
    pub color_mode: ColorMode,
    pub arrows: bool,
}

impl PlotRequest {
    pub fn validate(&self, default_color: Rgb) -> Result<ValidatedRequest, ValidationError> {
        let (start_label, start) = self.start.to_julian("start")?;
        let (end_label, end) = self.end.to_julian("end")?;
        let increment = self.increment.to_days()?;

        if end <= start {
            return Err(ValidationError::EndNotAfterStart);
        }
        if !(increment > 0.0) {
            return Err(ValidationError::IncrementNotPositive);
        }
        if increment > end - start {
            return Err(ValidationError::IncrementExceedsWindow);
        }

        let color_mode = if self.gradient {
            ColorMode::Gradient
        } else {
            match &self.color {
                Some(hex) => ColorMode::Uniform(Rgb::from_hex(hex)?),
                None => ColorMode::Uniform(default_color),
            }
        };

        Ok(ValidatedRequest {
            title: self.title.clone(),
            tle: self.tle.clone(),
            start_label,
            end_label,
            start,
            end,
            increment,
            color_mode,
            arrows: self.arrows,
        })
    }
}

impl fmt::Display for ValidatedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TLE,L1: {}", self.tle.line1)?;
        writeln!(f, "TLE,L2: {}", self.tle.line2)?;
        writeln!(f, "Start Time: {}", self.start_label)?;
        writeln!(f, "End Time: {}", self.end_label)?;
        write!(f, "Time Increment: {} days", self.increment)
    }
}

fn zero_field() -> String {
    "0".to_string()
}

/// Accept form fields written either as strings or as bare numbers.
fn deserialize_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(s) => s,
        Field::Integer(n) => format!("{:02}", n),
        Field::Float(x) => x.to_string(),
    })
}
