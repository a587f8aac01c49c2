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

//! Extraction of geographic information from AIXM features.
//!
//! Each supported feature type has an extractor that reads the latest
//! timeslice of a feature and returns a flat [`GeographyRecord`]. All
//! extractors are reached through the [`Feature`] enum which the
//! [`FeatureFactory`](crate::FeatureFactory) produces.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::Serialize;

use crate::error::Error;
use crate::geometry::{Coordinate, Position};
use crate::record::GeographyRecord;
use crate::units::{normalize_elevation, Uom};
use crate::unpack::unpack;
use crate::xml::{Attribute, Element, ElementExt};

/// The feature types geographic information can be extracted from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub enum FeatureType {
    AirportHeliport,
    DesignatedPoint,
    NavaidComponent,
    RouteSegment,
    Airspace,
    VerticalStructure,
}

impl FeatureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AirportHeliport => "AirportHeliport",
            Self::DesignatedPoint => "DesignatedPoint",
            Self::NavaidComponent => "NavaidComponent",
            Self::RouteSegment => "RouteSegment",
            Self::Airspace => "Airspace",
            Self::VerticalStructure => "VerticalStructure",
        }
    }
}

impl FromStr for FeatureType {
    type Err = Error;

    /// Parses a feature type tag like `AirportHeliport`.
    ///
    /// Navaids are tagged `Navaid` in AIXM 5.1 messages and share the
    /// extractor of their components.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AirportHeliport" => Ok(Self::AirportHeliport),
            "DesignatedPoint" => Ok(Self::DesignatedPoint),
            "Navaid" | "NavaidComponent" => Ok(Self::NavaidComponent),
            "RouteSegment" => Ok(Self::RouteSegment),
            "Airspace" => Ok(Self::Airspace),
            "VerticalStructure" => Ok(Self::VerticalStructure),
            other => Err(Error::UnsupportedFeature(other.to_string())),
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature that carries geographic information.
pub trait GeographicFeature {
    fn feature_type(&self) -> FeatureType;

    /// Extracts the geographic information of the feature.
    ///
    /// Missing optional data is left empty. An error is returned only if
    /// the geometry can't be computed, e.g. an arc in an unsupported CRS.
    fn geographic_information(&self) -> Result<GeographyRecord, Error>;
}

/// The latest timeslice of a feature that queries run against.
#[derive(Copy, Clone, Debug)]
pub struct Context<'a, 'input: 'a> {
    root: Element<'a, 'input>,
}

impl<'a, 'input: 'a> Context<'a, 'input> {
    /// Creates a context from the content element of a timeslice, e.g. an
    /// `aixm:AirportHeliportTimeSlice`.
    pub fn new(root: Element<'a, 'input>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Element<'a, 'input> {
        self.root
    }

    /// Returns the text of the first element matching the `path` in the
    /// `subtree`, or in the timeslice if no subtree is given.
    pub fn first_text(
        &self,
        path: &str,
        subtree: Option<Element<'a, 'input>>,
    ) -> Option<&'a str> {
        self.first(path, subtree)?.text_content()
    }

    /// Returns the attribute `name` of the first element matching the
    /// `path`.
    pub fn first_attribute(
        &self,
        path: &str,
        name: &str,
        subtree: Option<Element<'a, 'input>>,
    ) -> Option<&'a str> {
        self.first(path, subtree)?.attribute(name)
    }

    /// Returns all attributes of the first element matching the `path`.
    pub fn attributes(
        &self,
        path: &str,
        subtree: Option<Element<'a, 'input>>,
    ) -> Option<Vec<Attribute<'a, 'input>>> {
        Some(self.first(path, subtree)?.attributes().collect())
    }

    /// Returns the first element matching the `path`.
    pub fn first(
        &self,
        path: &str,
        subtree: Option<Element<'a, 'input>>,
    ) -> Option<Element<'a, 'input>> {
        match subtree.unwrap_or(self.root).find(path) {
            Ok(el) => el,
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    /// Returns all elements matching the `path`.
    pub fn all(&self, path: &str, subtree: Option<Element<'a, 'input>>) -> Vec<Element<'a, 'input>> {
        subtree
            .unwrap_or(self.root)
            .find_all(path)
            .unwrap_or_else(|e| {
                warn!("{e}");
                Vec::new()
            })
    }

    /// Returns the position at the `path`, skipping malformed text.
    fn position(&self, path: &str) -> Option<Position> {
        match self.first_text(path, None)?.parse() {
            Ok(pos) => Some(pos),
            Err(e) => {
                warn!("skipping position: {e}");
                None
            }
        }
    }

    /// Returns the elevation at the `path` in meters, or `None` if the
    /// timeslice has no such element.
    fn elevation(&self, path: &str) -> Option<f64> {
        let el = self.first(path, None)?;
        let (value, _) = normalize_elevation(el.text_content(), el.attribute("uom"));
        Some(value)
    }

    /// Returns the vertical limit at the `path` in meters.
    ///
    /// A missing limit is 0 m, like a missing value.
    fn vertical_limit(&self, path: &str) -> (f64, Uom) {
        let el = self.first(path, None);
        normalize_elevation(
            el.and_then(|el| el.text_content()),
            el.and_then(|el| el.attribute("uom")),
        )
    }

    /// Returns the coordinates of every geometry container at the `path`.
    fn coordinates(&self, path: &str) -> Result<Vec<Coordinate>, Error> {
        let mut coordinates = Vec::new();

        for container in self.all(path, None) {
            for coordinate in unpack(container, srs_name(container)) {
                coordinates.push(coordinate?);
            }
        }

        Ok(coordinates)
    }
}

/// Returns the first `srsName` within the `container`.
fn srs_name<'a>(container: Element<'a, '_>) -> Option<&'a str> {
    container
        .descendants()
        .find_map(|el| el.attribute("srsName"))
}

/// Joins two label parts as `"<primary> (<secondary>)"`.
fn label(primary: Option<&str>, secondary: Option<&str>) -> Option<String> {
    match (primary, secondary) {
        (Some(p), Some(s)) => Some(format!("{p} ({s})")),
        (Some(v), None) | (None, Some(v)) => Some(v.to_string()),
        (None, None) => None,
    }
}

/// Returns the position as point with the `elevation` merged in.
fn elevated_point(pos: Option<Position>, elevation: Option<f64>) -> Vec<Coordinate> {
    pos.map(|pos| match elevation {
        Some(elevation) => pos.with_elevation(elevation),
        None => pos,
    })
    .map(Coordinate::Point)
    .into_iter()
    .collect()
}

/// An airport or heliport at its aerodrome reference point.
#[derive(Copy, Clone, Debug)]
pub struct AirportHeliport<'a, 'input: 'a> {
    ctx: Context<'a, 'input>,
}

impl<'a, 'input: 'a> AirportHeliport<'a, 'input> {
    pub fn new(ctx: Context<'a, 'input>) -> Self {
        Self { ctx }
    }
}

impl GeographicFeature for AirportHeliport<'_, '_> {
    fn feature_type(&self) -> FeatureType {
        FeatureType::AirportHeliport
    }

    fn geographic_information(&self) -> Result<GeographyRecord, Error> {
        let elevation = self.ctx.elevation(".//aixm:fieldElevation");
        let arp = self.ctx.position(".//aixm:ARP//gml:pos");

        let mut record =
            GeographyRecord::new(self.feature_type(), elevated_point(arp, elevation));
        record.name = label(
            self.ctx.first_text(".//aixm:designator", None),
            self.ctx.first_text(".//aixm:name", None),
        );
        record.elevation = elevation;
        record.elevation_uom = elevation.map(|_| Uom::Meters);

        Ok(record)
    }
}

/// A radio navigation aid at its location.
#[derive(Copy, Clone, Debug)]
pub struct NavaidComponent<'a, 'input: 'a> {
    ctx: Context<'a, 'input>,
}

impl<'a, 'input: 'a> NavaidComponent<'a, 'input> {
    pub fn new(ctx: Context<'a, 'input>) -> Self {
        Self { ctx }
    }

    /// Returns the label as `"<designator>(<name>) <type>"`.
    fn name(&self) -> Option<String> {
        let designator = self.ctx.first_text(".//aixm:designator", None);
        let name = self.ctx.first_text(".//aixm:name", None);
        let navaid_type = self.ctx.first_text(".//aixm:type", None);

        let ident = match (designator, name) {
            (Some(d), Some(n)) => Some(format!("{d}({n})")),
            (Some(v), None) | (None, Some(v)) => Some(v.to_string()),
            (None, None) => None,
        };

        match (ident, navaid_type) {
            (Some(ident), Some(t)) => Some(format!("{ident} {t}")),
            (Some(ident), None) => Some(ident),
            (None, t) => t.map(str::to_string),
        }
    }
}

impl GeographicFeature for NavaidComponent<'_, '_> {
    fn feature_type(&self) -> FeatureType {
        FeatureType::NavaidComponent
    }

    fn geographic_information(&self) -> Result<GeographyRecord, Error> {
        let elevation = self.ctx.elevation(".//aixm:location//aixm:elevation");
        let location = self.ctx.position(".//aixm:location//gml:pos");

        let mut record =
            GeographyRecord::new(self.feature_type(), elevated_point(location, elevation));
        record.name = self.name();
        record.elevation = elevation;
        record.elevation_uom = elevation.map(|_| Uom::Meters);

        Ok(record)
    }
}

/// A named waypoint or fix.
#[derive(Copy, Clone, Debug)]
pub struct DesignatedPoint<'a, 'input: 'a> {
    ctx: Context<'a, 'input>,
}

impl<'a, 'input: 'a> DesignatedPoint<'a, 'input> {
    pub fn new(ctx: Context<'a, 'input>) -> Self {
        Self { ctx }
    }
}

impl GeographicFeature for DesignatedPoint<'_, '_> {
    fn feature_type(&self) -> FeatureType {
        FeatureType::DesignatedPoint
    }

    fn geographic_information(&self) -> Result<GeographyRecord, Error> {
        let location = self.ctx.position(".//aixm:location//gml:pos");

        let mut record = GeographyRecord::new(self.feature_type(), elevated_point(location, None));
        record.name = self
            .ctx
            .first_text(".//aixm:name", None)
            .or_else(|| self.ctx.first_text(".//aixm:designator", None))
            .map(str::to_string);

        Ok(record)
    }
}

/// A segment of an ATS route.
#[derive(Copy, Clone, Debug)]
pub struct RouteSegment<'a, 'input: 'a> {
    ctx: Context<'a, 'input>,
}

impl<'a, 'input: 'a> RouteSegment<'a, 'input> {
    pub fn new(ctx: Context<'a, 'input>) -> Self {
        Self { ctx }
    }
}

impl GeographicFeature for RouteSegment<'_, '_> {
    fn feature_type(&self) -> FeatureType {
        FeatureType::RouteSegment
    }

    fn geographic_information(&self) -> Result<GeographyRecord, Error> {
        let coordinates = self.ctx.coordinates(".//aixm:curveExtent")?;
        Ok(GeographyRecord::new(self.feature_type(), coordinates))
    }
}

/// An airspace with its lateral boundary and vertical limits.
#[derive(Copy, Clone, Debug)]
pub struct Airspace<'a, 'input: 'a> {
    ctx: Context<'a, 'input>,
}

impl<'a, 'input: 'a> Airspace<'a, 'input> {
    pub fn new(ctx: Context<'a, 'input>) -> Self {
        Self { ctx }
    }
}

impl GeographicFeature for Airspace<'_, '_> {
    fn feature_type(&self) -> FeatureType {
        FeatureType::Airspace
    }

    fn geographic_information(&self) -> Result<GeographyRecord, Error> {
        let coordinates = self.ctx.coordinates(".//aixm:AirspaceGeometryComponent")?;

        let (upper, upper_uom) = self
            .ctx
            .vertical_limit(".//aixm:theAirspaceVolume//aixm:upperLimit");
        let (lower, lower_uom) = self
            .ctx
            .vertical_limit(".//aixm:theAirspaceVolume//aixm:lowerLimit");

        let mut record = GeographyRecord::new(self.feature_type(), coordinates);
        record.name = label(
            self.ctx.first_text(".//aixm:designator", None),
            self.ctx.first_text(".//aixm:name", None),
        );
        record.upper_layer = Some(upper);
        record.upper_layer_uom = Some(upper_uom);
        record.lower_layer = Some(lower);
        record.lower_layer_uom = Some(lower_uom);
        record.upper_layer_reference = self
            .ctx
            .first_text(".//aixm:theAirspaceVolume//aixm:upperLimitReference", None)
            .map(str::to_string);

        Ok(record)
    }
}

/// An obstacle made up of one or more parts.
#[derive(Copy, Clone, Debug)]
pub struct VerticalStructure<'a, 'input: 'a> {
    ctx: Context<'a, 'input>,
}

impl<'a, 'input: 'a> VerticalStructure<'a, 'input> {
    pub fn new(ctx: Context<'a, 'input>) -> Self {
        Self { ctx }
    }
}

impl GeographicFeature for VerticalStructure<'_, '_> {
    fn feature_type(&self) -> FeatureType {
        FeatureType::VerticalStructure
    }

    fn geographic_information(&self) -> Result<GeographyRecord, Error> {
        let mut coordinates = match self.ctx.first(".//aixm:part", None) {
            Some(part) => unpack(part, srs_name(part)).collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let elevation = self
            .ctx
            .elevation(".//aixm:verticalExtent")
            .or_else(|| self.ctx.elevation(".//aixm:part//aixm:elevation"));

        if let ([Coordinate::Point(pos)], Some(elevation)) = (coordinates.as_mut_slice(), elevation)
        {
            *pos = pos.with_elevation(elevation);
        }

        let obstacle_type = self.ctx.first_text(".//aixm:type", None);

        let mut record = GeographyRecord::new(self.feature_type(), coordinates);
        record.name = label(self.ctx.first_text(".//aixm:name", None), obstacle_type);
        record.elevation = elevation;
        record.elevation_uom = elevation.map(|_| Uom::Meters);
        record.obstacle_type = obstacle_type.map(str::to_string);

        Ok(record)
    }
}

/// A supported AIXM feature.
///
/// # Examples
///
/// ```
/// use aixm_geo::{Feature, FeatureType, GeographicFeature};
/// use aixm_geo::features::Context;
/// use aixm_geo::xml::parse;
///
/// let doc = parse(r#"
///   <aixm:DesignatedPointTimeSlice
///     xmlns:aixm="http://www.aixm.aero/schema/5.1"
///     xmlns:gml="http://www.opengis.net/gml/3.2">
///     <aixm:designator>ABLAN</aixm:designator>
///     <aixm:location>
///       <aixm:Point><gml:pos>52.123 10.456</gml:pos></aixm:Point>
///     </aixm:location>
///   </aixm:DesignatedPointTimeSlice>"#).unwrap();
///
/// let feature = Feature::new(FeatureType::DesignatedPoint, Context::new(doc.root_element()));
/// let record = feature.geographic_information().unwrap();
///
/// assert_eq!(record.name.as_deref(), Some("ABLAN"));
/// assert_eq!(record.coordinates[0].to_string(), "52.123 10.456");
/// ```
#[derive(Copy, Clone, Debug)]
pub enum Feature<'a, 'input: 'a> {
    AirportHeliport(AirportHeliport<'a, 'input>),
    NavaidComponent(NavaidComponent<'a, 'input>),
    DesignatedPoint(DesignatedPoint<'a, 'input>),
    RouteSegment(RouteSegment<'a, 'input>),
    Airspace(Airspace<'a, 'input>),
    VerticalStructure(VerticalStructure<'a, 'input>),
}

impl<'a, 'input: 'a> Feature<'a, 'input> {
    /// Creates the extractor for the `feature_type` on the `ctx`.
    pub fn new(feature_type: FeatureType, ctx: Context<'a, 'input>) -> Self {
        match feature_type {
            FeatureType::AirportHeliport => Self::AirportHeliport(AirportHeliport::new(ctx)),
            FeatureType::NavaidComponent => Self::NavaidComponent(NavaidComponent::new(ctx)),
            FeatureType::DesignatedPoint => Self::DesignatedPoint(DesignatedPoint::new(ctx)),
            FeatureType::RouteSegment => Self::RouteSegment(RouteSegment::new(ctx)),
            FeatureType::Airspace => Self::Airspace(Airspace::new(ctx)),
            FeatureType::VerticalStructure => Self::VerticalStructure(VerticalStructure::new(ctx)),
        }
    }

    fn inner(&self) -> &dyn GeographicFeature {
        match self {
            Self::AirportHeliport(f) => f,
            Self::NavaidComponent(f) => f,
            Self::DesignatedPoint(f) => f,
            Self::RouteSegment(f) => f,
            Self::Airspace(f) => f,
            Self::VerticalStructure(f) => f,
        }
    }
}

impl GeographicFeature for Feature<'_, '_> {
    fn feature_type(&self) -> FeatureType {
        self.inner().feature_type()
    }

    fn geographic_information(&self) -> Result<GeographyRecord, Error> {
        self.inner().geographic_information()
    }
}
