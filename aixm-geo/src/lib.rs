// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

//! Geographic information from AIXM 5.1 messages.
//!
//! This crate reads an AIXM basic message and extracts a flat
//! [`GeographyRecord`] per feature: its coordinates, vertical limits and a
//! display label. Airports, navaids, designated points, route segments,
//! airspaces and vertical structures are supported. Of every feature only
//! the latest timeslice is read.
//!
//! Circles and arcs are kept as such. The end points of an arc are solved
//! on the WGS84 ellipsoid and all vertical values are normalized to meters.
//!
//! # Examples
//!
//! Read all records of a message and draw them with a [`GeometryRenderer`]:
//!
//! ```no_run
//! use aixm_geo::{render, xml, FeatureFactory, GeometryRenderer};
//!
//! # fn draw<R: GeometryRenderer>(renderer: &mut R) -> Result<(), aixm_geo::Error> {
//! let text = xml::read_file("EG_AIP_DS_FULL.xml")?;
//! let mut factory = FeatureFactory::parse(&text)?;
//!
//! for record in factory.geographic_information() {
//!     render(&record, renderer);
//! }
//!
//! // features that were skipped
//! for e in factory.errors() {
//!     eprintln!("{e}");
//! }
//! #     Ok(())
//! # }
//! ```

pub mod arc;
mod error;
pub mod factory;
pub mod features;
pub mod geometry;
pub mod namespace;
pub mod record;
pub mod render;
pub mod timeslice;
pub mod units;
pub mod unpack;
pub mod xml;

pub use error::Error;
pub use factory::FeatureFactory;
pub use features::{Feature, FeatureType, GeographicFeature};
pub use geometry::{classify_geometry, Coordinate, GeometryKind};
pub use record::{AltitudeMode, GeographyRecord};
pub use render::{render, GeometryRenderer, VerticalLimits};
