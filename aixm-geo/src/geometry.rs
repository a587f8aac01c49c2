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

//! Coordinate tokens and the geometry classification of records.
//!
//! Each [`Coordinate`] renders to the text form that KML tooling expects
//! (`"<lat> <lon>"`, `"…, radius=…, radius_uom=…"` or
//! `"start=…, end=…, centre=…, direction=…"`), but classification matches on
//! the variant and never parses that text back.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::arc::Direction;
use crate::error::Error;
use crate::features::FeatureType;
use crate::record::GeographyRecord;

/// A geographic position in WGS-84 decimal degrees with an optional
/// elevation in meters.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
        }
    }

    /// Returns the position with the `elevation` set.
    pub fn with_elevation(self, elevation: f64) -> Self {
        Self {
            elevation: Some(elevation),
            ..self
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Parses the `"<lat> <lon>"` text of a `gml:pos`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidValue {
            field: "pos",
            value: s.to_string(),
        };

        let mut parts = s.split_whitespace();
        let latitude = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        let longitude = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;

        Ok(Self::new(latitude, longitude))
    }
}

/// Writes the `value` with at least one decimal, e.g. `51.0` instead of `51`.
fn write_decimal(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, self.latitude)?;
        f.write_str(" ")?;
        write_decimal(f, self.longitude)?;
        if let Some(elevation) = self.elevation {
            f.write_str(" ")?;
            write_decimal(f, elevation)?;
        }
        Ok(())
    }
}

/// A circle around a centre position.
#[derive(Clone, PartialEq, Debug)]
pub struct Circle {
    pub centre: Position,
    pub radius: f64,
    /// Radius unit as given in the source, e.g. `[nmi_i]`. Circles without a
    /// `uom` are kept and written with an empty unit.
    pub radius_uom: Option<String>,
}

/// An arc around a centre with its computed end points.
#[derive(Clone, PartialEq, Debug)]
pub struct Arc {
    pub start: Position,
    pub end: Position,
    pub centre: Position,
    pub direction: Direction,
}

/// A coordinate token of a geography record.
#[derive(Clone, PartialEq, Debug)]
pub enum Coordinate {
    Point(Position),
    Circle(Circle),
    Arc(Arc),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(pos) => write!(f, "{pos}"),
            Self::Circle(c) => write!(
                f,
                "{}, radius={}, radius_uom={}",
                c.centre,
                c.radius,
                c.radius_uom.as_deref().unwrap_or_default()
            ),
            Self::Arc(a) => write!(
                f,
                "start={}, end={}, centre={}, direction={}",
                a.start, a.end, a.centre, a.direction
            ),
        }
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The geometry used to render a record.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GeometryKind {
    Point,
    LineString,
    Cylinder,
    Polyhedron,
    Polygon,
    Unknown,
}

/// Classifies the geometry of a `record` by its type and coordinates.
pub fn classify_geometry(record: &GeographyRecord) -> GeometryKind {
    let coordinates = &record.coordinates;

    match record.feature_type {
        FeatureType::RouteSegment => return GeometryKind::LineString,
        FeatureType::VerticalStructure if coordinates.len() > 1 => {
            return GeometryKind::Polygon;
        }
        FeatureType::VerticalStructure => return GeometryKind::Point,
        _ => {}
    }

    let has_upper_layer = record.upper_layer.is_some_and(|upper| upper != 0.0);

    match coordinates.as_slice() {
        [Coordinate::Circle(_)] if has_upper_layer => GeometryKind::Cylinder,
        [Coordinate::Circle(_)] => GeometryKind::Unknown,
        [_] => GeometryKind::Point,
        [a, b] if matches!(a, Coordinate::Arc(_)) || matches!(b, Coordinate::Arc(_)) => {
            GeometryKind::Polyhedron
        }
        [_, _] => GeometryKind::LineString,
        [_, _, _, ..] if has_upper_layer => GeometryKind::Polyhedron,
        [_, _, _, ..] => GeometryKind::Polygon,
        [] => GeometryKind::Unknown,
    }
}
