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

//! Dispatch of geography records to a renderer.

use log::trace;

use crate::features::FeatureType;
use crate::geometry::{Circle, Coordinate, GeometryKind};
use crate::record::{AltitudeMode, GeographyRecord};
use crate::units::{switch_radius_unit, Uom};

/// Lower and upper limit of an extruded geometry.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct VerticalLimits {
    pub lower: f64,
    pub upper: f64,
    pub lower_uom: Uom,
    pub upper_uom: Uom,
    pub altitude_mode: AltitudeMode,
}

impl VerticalLimits {
    fn of(record: &GeographyRecord) -> Self {
        Self {
            lower: record.lower_layer.unwrap_or_default(),
            upper: record.upper_layer.unwrap_or_default(),
            lower_uom: record.lower_layer_uom.unwrap_or(Uom::Meters),
            upper_uom: record.upper_layer_uom.unwrap_or(Uom::Meters),
            altitude_mode: record.altitude_mode(),
        }
    }
}

/// A sink for the geometries of geography records, e.g. a KML writer.
pub trait GeometryRenderer {
    fn draw_point(&mut self, coordinate: &Coordinate, label: Option<&str>);

    fn draw_line_string(&mut self, coordinates: &[Coordinate], label: Option<&str>);

    fn draw_polygon(&mut self, coordinates: &[Coordinate], label: Option<&str>);

    /// Draws a circle extruded between the limits. The `radius_unit` is the
    /// display code, e.g. `NM`, or `None` if the circle has no unit.
    fn draw_cylinder(
        &mut self,
        circle: &Circle,
        radius_unit: Option<&str>,
        limits: &VerticalLimits,
        label: Option<&str>,
    );

    fn draw_polyhedron(
        &mut self,
        coordinates: &[Coordinate],
        limits: &VerticalLimits,
        label: Option<&str>,
    );
}

/// Draws the `record` with the `renderer` and returns the geometry it was
/// drawn as.
///
/// Records of [`GeometryKind::Unknown`] are not drawn.
pub fn render<R>(record: &GeographyRecord, renderer: &mut R) -> GeometryKind
where
    R: GeometryRenderer + ?Sized,
{
    let kind = record.geometry();
    let label = record.name.as_deref();
    let coordinates = record.coordinates.as_slice();

    trace!("drawing {} as {kind:?}", record.feature_type);

    match kind {
        GeometryKind::Point => {
            if let Some(coordinate) = coordinates.first() {
                renderer.draw_point(coordinate, label);
            }
        }
        GeometryKind::LineString => renderer.draw_line_string(coordinates, label),
        GeometryKind::Polygon if record.feature_type == FeatureType::VerticalStructure => {
            let limits = VerticalLimits {
                lower: 0.0,
                upper: record.elevation.unwrap_or_default(),
                lower_uom: Uom::Meters,
                upper_uom: record.elevation_uom.unwrap_or(Uom::Meters),
                altitude_mode: record.altitude_mode(),
            };
            renderer.draw_polyhedron(coordinates, &limits, label);
        }
        GeometryKind::Polygon => renderer.draw_polygon(coordinates, label),
        GeometryKind::Cylinder => {
            if let [Coordinate::Circle(circle)] = coordinates {
                let radius_unit = circle.radius_uom.as_deref().map(switch_radius_unit);
                renderer.draw_cylinder(circle, radius_unit, &VerticalLimits::of(record), label);
            }
        }
        GeometryKind::Polyhedron => {
            renderer.draw_polyhedron(coordinates, &VerticalLimits::of(record), label);
        }
        GeometryKind::Unknown => {}
    }

    kind
}
