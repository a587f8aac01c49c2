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

//! Geodesic arc solving for `gml:ArcByCenterPoint`.
//!
//! The end points of an arc are the geodesic destinations from its centre
//! along the start and end angle on the WGS84 ellipsoid. Whether the arc
//! runs clockwise depends on the axis order of the CRS it is given in.

use std::fmt;
use std::str::FromStr;

use geo::{Destination, Geodesic, Point};
use serde::Serialize;

use crate::error::Error;
use crate::geometry::{Arc, Position};
use crate::units::Uom;

/// Coordinate reference systems in which arcs can be drawn.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Crs {
    /// EPSG:4326 with latitude, longitude axis order.
    Epsg4326,
    /// OGC CRS84 with longitude, latitude axis order.
    Crs84,
}

impl Crs {
    /// Resolves the CRS from an `srsName` like
    /// `urn:ogc:def:crs:EPSG::4326` by its trailing authority code.
    pub fn from_srs_name(srs_name: &str) -> Result<Self, Error> {
        let code = srs_name
            .trim()
            .rsplit([':', '/'])
            .next()
            .unwrap_or_default();

        match code {
            "4326" => Ok(Self::Epsg4326),
            "CRS84" => Ok(Self::Crs84),
            _ => Err(Error::UnsupportedCrs(srs_name.to_string())),
        }
    }
}

impl FromStr for Crs {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_srs_name(s)
    }
}

/// Rotational direction of an arc.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Clockwise,
    Anticlockwise,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise => f.write_str("clockwise"),
            Self::Anticlockwise => f.write_str("anticlockwise"),
        }
    }
}

/// Determines the direction of an arc from its start to its end angle.
///
/// Swapping the axis order mirrors the arc, so the same angles run the
/// other way round in CRS84.
pub fn determine_direction(start_angle: f64, end_angle: f64, crs: Crs) -> Direction {
    match (crs, start_angle < end_angle) {
        (Crs::Epsg4326, true) | (Crs::Crs84, false) => Direction::Clockwise,
        (Crs::Epsg4326, false) | (Crs::Crs84, true) => Direction::Anticlockwise,
    }
}

/// Converts a radius to meters.
pub fn radius_in_meters(radius: f64, uom: &str) -> Result<f64, Error> {
    let unknown = || Error::UnknownUnit {
        field: "radius",
        value: uom.to_string(),
    };

    let uom: Uom = uom.parse().map_err(|_| unknown())?;
    uom.to_meters(radius).ok_or_else(unknown)
}

/// Solves an arc around the `centre` from the `start_angle` to the
/// `end_angle`, both in degrees clockwise from true north.
pub fn solve_arc(
    centre: Position,
    start_angle: f64,
    end_angle: f64,
    radius: f64,
    radius_uom: &str,
    crs: Crs,
) -> Result<Arc, Error> {
    let distance = radius_in_meters(radius, radius_uom)?;
    let origin = Point::new(centre.longitude, centre.latitude);

    let forward = |azimuth: f64| {
        let dest = Geodesic.destination(origin, azimuth, distance);
        Position::new(round5(dest.y()), round5(dest.x()))
    };

    Ok(Arc {
        start: forward(start_angle),
        end: forward(end_angle),
        centre,
        direction: determine_direction(start_angle, end_angle, crs),
    })
}

fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}
