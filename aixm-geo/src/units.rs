// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Units of measurement and vertical value normalization.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

pub const FEET_IN_METER: f64 = 0.3048;
pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;
pub const STATUTE_MILE_IN_METER: f64 = 1609.4;
pub const KILOMETER_IN_METER: f64 = 1000.0;

/// Height used for an unlimited (`UNL`) vertical limit: 60,000 ft.
pub const UNLIMITED_IN_METER: f64 = 18288.0;

/// AIXM unit of measurement code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum Uom {
    #[serde(rename = "FT")]
    Feet,
    #[serde(rename = "M")]
    Meters,
    #[serde(rename = "FL")]
    FlightLevel,
    #[serde(rename = "NM")]
    NauticalMiles,
    #[serde(rename = "MI")]
    StatuteMiles,
    #[serde(rename = "KM")]
    Kilometers,
}

impl Uom {
    /// Returns the AIXM code of the unit.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Feet => "FT",
            Self::Meters => "M",
            Self::FlightLevel => "FL",
            Self::NauticalMiles => "[nmi_i]",
            Self::StatuteMiles => "MI",
            Self::Kilometers => "KM",
        }
    }

    /// Converts a distance `value` in this unit to meters.
    ///
    /// Flight levels are no distance and return `None`.
    pub fn to_meters(&self, value: f64) -> Option<f64> {
        match self {
            Self::Feet => Some(value * FEET_IN_METER),
            Self::Meters => Some(value),
            Self::NauticalMiles => Some(value * NAUTICAL_MILE_IN_METER),
            Self::StatuteMiles => Some(value * STATUTE_MILE_IN_METER),
            Self::Kilometers => Some(value * KILOMETER_IN_METER),
            Self::FlightLevel => None,
        }
    }
}

impl FromStr for Uom {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "FT" | "ft" => Ok(Self::Feet),
            "M" | "m" => Ok(Self::Meters),
            "FL" => Ok(Self::FlightLevel),
            "[nmi_i]" | "NM" => Ok(Self::NauticalMiles),
            "MI" | "[mi_i]" => Ok(Self::StatuteMiles),
            "KM" | "km" => Ok(Self::Kilometers),
            other => Err(Error::UnknownUnit {
                field: "uom",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Uom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(switch_radius_unit(self.code()))
    }
}

/// Returns the display code for a radius unit.
///
/// AIXM encodes nautical miles as the UCUM code `[nmi_i]` which renderers
/// show as `NM`.
pub fn switch_radius_unit(code: &str) -> &str {
    match code {
        "[nmi_i]" => "NM",
        other => other,
    }
}

/// Normalizes an elevation or altitude to meters.
///
/// `GND` is 0 m and `UNL` is 60,000 ft regardless of the unit. Flight levels
/// are hundreds of feet. Values without a known unit are taken as meters and
/// missing or non-numeric values as 0 m.
///
/// # Examples
///
/// ```
/// use aixm_geo::units::{normalize_elevation, Uom};
///
/// let (value, uom) = normalize_elevation(Some("95"), Some("FL"));
/// assert!((value - 2895.6).abs() < 1e-9);
/// assert_eq!(uom, Uom::Meters);
/// ```
pub fn normalize_elevation(value: Option<&str>, uom: Option<&str>) -> (f64, Uom) {
    let value = match value.map(str::trim) {
        Some("GND") => return (0.0, Uom::Meters),
        Some("UNL") => return (UNLIMITED_IN_METER, Uom::Meters),
        Some(v) => v.parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };

    let meters = match uom.and_then(|uom| uom.parse::<Uom>().ok()) {
        Some(Uom::FlightLevel) => value * 100.0 * FEET_IN_METER,
        Some(Uom::Feet) => value * FEET_IN_METER,
        _ => value,
    };

    (meters, Uom::Meters)
}
