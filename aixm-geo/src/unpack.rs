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

//! Extraction of coordinates from GML geometry.
//!
//! AIXM wraps its geometry primitives in feature specific containers
//! (`aixm:horizontalProjection`, `aixm:curveExtent`, `gml:segments`, ...) at
//! no fixed depth. Instead of mapping each container, the unpacker walks the
//! subtree in document order and only reacts to the closed set of
//! [`Primitive`]s. Everything else is descended into.

use std::collections::VecDeque;

use log::{trace, warn};

use crate::arc::{solve_arc, Crs};
use crate::error::Error;
use crate::geometry::{Circle, Coordinate, Position};
use crate::xml::{Element, ElementExt};

/// GML primitives that carry coordinates.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Primitive {
    GeodesicString,
    LineStringSegment,
    LineString,
    LinearRing,
    Point,
    ElevatedPoint,
    CircleByCenterPoint,
    ArcByCenterPoint,
}

impl Primitive {
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "GeodesicString" => Some(Self::GeodesicString),
            "LineStringSegment" => Some(Self::LineStringSegment),
            "LineString" => Some(Self::LineString),
            "LinearRing" => Some(Self::LinearRing),
            "Point" => Some(Self::Point),
            "ElevatedPoint" => Some(Self::ElevatedPoint),
            "CircleByCenterPoint" => Some(Self::CircleByCenterPoint),
            "ArcByCenterPoint" => Some(Self::ArcByCenterPoint),
            _ => None,
        }
    }
}

/// Returns the coordinates of all primitives in the `subtree`.
///
/// The `srs_name` is the CRS in effect for the subtree. An `srsName`
/// attribute within the subtree overrides it for that element's children.
/// Arcs need a resolvable CRS to determine their direction.
///
/// The returned iterator is lazy and every call walks the subtree anew.
///
/// # Examples
///
/// ```
/// use aixm_geo::unpack::unpack;
/// use aixm_geo::xml::parse;
///
/// let doc = parse(r#"
///   <gml:GeodesicString xmlns:gml="http://www.opengis.net/gml/3.2">
///     <gml:posList>52.0 -32.5 52.5 -32.0</gml:posList>
///   </gml:GeodesicString>"#).unwrap();
///
/// let coordinates = unpack(doc.root_element(), None)
///     .map(|c| c.map(|c| c.to_string()))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// assert_eq!(coordinates, ["52.0 -32.5", "52.5 -32.0"]);
/// ```
pub fn unpack<'a, 'input: 'a>(
    subtree: Element<'a, 'input>,
    srs_name: Option<&'a str>,
) -> Unpack<'a, 'input> {
    Unpack {
        stack: vec![(subtree, srs_name)],
        pending: VecDeque::new(),
    }
}

/// Iterator returned by [`unpack`].
pub struct Unpack<'a, 'input: 'a> {
    stack: Vec<(Element<'a, 'input>, Option<&'a str>)>,
    pending: VecDeque<Coordinate>,
}

impl<'a, 'input: 'a> Iterator for Unpack<'a, 'input> {
    type Item = Result<Coordinate, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(coordinate) = self.pending.pop_front() {
                return Some(Ok(coordinate));
            }

            let (el, inherited) = self.stack.pop()?;
            let srs_name = el.attribute("srsName").or(inherited);

            let Some(primitive) = Primitive::from_local_name(el.local_name()) else {
                self.stack.extend(
                    el.children()
                        .filter(Element::is_element)
                        .rev()
                        .map(|child| (child, srs_name)),
                );
                continue;
            };

            trace!("unpacking {primitive:?}");

            match primitive {
                Primitive::GeodesicString
                | Primitive::LineStringSegment
                | Primitive::LineString
                | Primitive::LinearRing
                | Primitive::Point
                | Primitive::ElevatedPoint => {
                    self.pending
                        .extend(positions(&el).into_iter().map(Coordinate::Point));
                }
                Primitive::CircleByCenterPoint => {
                    return Some(circle(&el).map(Coordinate::Circle));
                }
                Primitive::ArcByCenterPoint => {
                    return Some(arc(&el, srs_name));
                }
            }
        }
    }
}

/// Returns every `gml:pos` and `gml:posList` position below the `el`.
fn positions(el: &Element) -> Vec<Position> {
    let mut positions = Vec::new();

    for child in el.descendants().filter(Element::is_element) {
        let Some(text) = child.text_content() else {
            continue;
        };

        match child.local_name() {
            "pos" => match text.parse() {
                Ok(pos) => positions.push(pos),
                Err(e) => warn!("skipping position: {e}"),
            },
            "posList" => positions.extend(parse_pos_list(text)),
            _ => {}
        }
    }

    positions
}

/// Splits a `gml:posList` into positions of alternating latitude and
/// longitude values.
pub fn parse_pos_list(text: &str) -> Vec<Position> {
    let values: Vec<f64> = text
        .split_whitespace()
        .filter_map(|s| match s.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!("skipping non-numeric posList value \"{s}\"");
                None
            }
        })
        .collect();

    let chunks = values.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        warn!("dropping trailing posList value {}", chunks.remainder()[0]);
    }

    chunks.map(|c| Position::new(c[0], c[1])).collect()
}

/// Returns the centre of a circle or arc, preferring a `gml:pos` over the
/// first position of a `gml:posList`.
fn centre(el: &Element) -> Result<Position, Error> {
    let missing = || Error::InvalidValue {
        field: "centre",
        value: String::new(),
    };

    if let Some(pos) = el.find(".//gml:pos")?.and_then(|pos| pos.text_content()) {
        return pos.parse();
    }

    let pos_list = el
        .find(".//gml:posList")?
        .and_then(|pos_list| pos_list.text_content())
        .ok_or_else(missing)?;

    parse_pos_list(pos_list).into_iter().next().ok_or_else(missing)
}

fn number(el: &Element, path: &str, field: &'static str) -> Result<f64, Error> {
    let text = el
        .find(path)?
        .and_then(|value| value.text_content())
        .unwrap_or_default();

    text.parse().map_err(|_| Error::InvalidValue {
        field,
        value: text.to_string(),
    })
}

/// Returns the radius and its unit, if any.
fn radius(el: &Element) -> Result<(f64, Option<String>), Error> {
    let value = number(el, ".//gml:radius", "radius")?;
    let uom = el
        .find(".//gml:radius")?
        .and_then(|r| r.attribute("uom"))
        .map(str::to_string);

    Ok((value, uom))
}

fn circle(el: &Element) -> Result<Circle, Error> {
    let centre = centre(el)?;
    let (radius, radius_uom) = radius(el)?;

    Ok(Circle {
        centre,
        radius,
        radius_uom,
    })
}

fn arc(el: &Element, srs_name: Option<&str>) -> Result<Coordinate, Error> {
    let crs = srs_name
        .ok_or_else(|| Error::UnsupportedCrs("unspecified".to_string()))
        .and_then(Crs::from_srs_name)?;

    let centre = centre(el)?;
    let start_angle = number(el, ".//gml:startAngle", "startAngle")?;
    let end_angle = number(el, ".//gml:endAngle", "endAngle")?;
    let (radius, radius_uom) = radius(el)?;
    let radius_uom = radius_uom.unwrap_or_default();

    solve_arc(centre, start_angle, end_angle, radius, &radius_uom, crs).map(Coordinate::Arc)
}
