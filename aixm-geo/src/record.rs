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

use std::fmt;

use serde::Serialize;

use crate::features::FeatureType;
use crate::geometry::{classify_geometry, Coordinate, GeometryKind};
use crate::units::Uom;

/// The geographic information of one AIXM feature.
///
/// All vertical values are in meters. Fields a feature type does not carry
/// are `None`, as are values missing from the source.
///
/// # Examples
///
/// ```
/// use aixm_geo::{FeatureType, GeographyRecord, GeometryKind};
/// use aixm_geo::geometry::{Coordinate, Position};
///
/// let record = GeographyRecord::new(
///     FeatureType::DesignatedPoint,
///     vec![Coordinate::Point(Position::new(52.123, 10.456))],
/// );
/// assert_eq!(record.geometry(), GeometryKind::Point);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct GeographyRecord {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    /// Display label, e.g. `"EGPB (SUMBURGH)"`.
    pub name: Option<String>,
    pub coordinates: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_uom: Option<Uom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_layer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_layer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_layer_uom: Option<Uom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_layer_uom: Option<Uom>,
    /// Datum of the upper limit as given in the source, e.g. `"SFC"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_layer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obstacle_type: Option<String>,
}

impl GeographyRecord {
    pub fn new(feature_type: FeatureType, coordinates: Vec<Coordinate>) -> Self {
        Self {
            feature_type,
            name: None,
            coordinates,
            elevation: None,
            elevation_uom: None,
            upper_layer: None,
            lower_layer: None,
            upper_layer_uom: None,
            lower_layer_uom: None,
            upper_layer_reference: None,
            obstacle_type: None,
        }
    }

    /// Returns the geometry the record is rendered as.
    pub fn geometry(&self) -> GeometryKind {
        classify_geometry(self)
    }

    /// Returns how the vertical limits are referenced when rendered.
    pub fn altitude_mode(&self) -> AltitudeMode {
        match self.upper_layer_reference.as_deref() {
            Some("SFC") => AltitudeMode::RelativeToGround,
            _ => AltitudeMode::Absolute,
        }
    }
}

/// Altitude reference of rendered vertical limits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AltitudeMode {
    RelativeToGround,
    Absolute,
}

impl fmt::Display for AltitudeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RelativeToGround => f.write_str("relativeToGround"),
            Self::Absolute => f.write_str("absolute"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    #[test]
    fn altitude_mode_from_upper_reference() {
        let mut airspace = GeographyRecord::new(FeatureType::Airspace, vec![]);
        assert_eq!(airspace.altitude_mode(), AltitudeMode::Absolute);

        airspace.upper_layer_reference = Some("SFC".to_string());
        assert_eq!(airspace.altitude_mode(), AltitudeMode::RelativeToGround);
        assert_eq!(airspace.altitude_mode().to_string(), "relativeToGround");

        airspace.upper_layer_reference = Some("MSL".to_string());
        assert_eq!(airspace.altitude_mode(), AltitudeMode::Absolute);
    }

    #[test]
    fn serializes_as_mapping() {
        let mut ahp = GeographyRecord::new(
            FeatureType::AirportHeliport,
            vec![Coordinate::Point(
                Position::new(59.5347278, -1.6285111).with_elevation(72.25),
            )],
        );
        ahp.name = Some("EGPB (SUMBURGH)".to_string());
        ahp.elevation = Some(72.25);
        ahp.elevation_uom = Some(Uom::Meters);

        let json = serde_json::to_value(&ahp).unwrap();
        assert_eq!(json["type"], "AirportHeliport");
        assert_eq!(json["name"], "EGPB (SUMBURGH)");
        assert_eq!(json["coordinates"][0], "59.5347278 -1.6285111 72.25");
        assert_eq!(json["elevation"], 72.25);
        assert_eq!(json["elevation_uom"], "M");
        assert!(json.get("upper_layer").is_none());
    }
}
