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

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// An XML parsing error from the underlying parser.
    Xml(String),
    /// The XML source could not be read.
    Io(String),
    /// The member's feature type has no extractor.
    UnsupportedFeature(String),
    /// An arc is drawn in a coordinate reference system other than
    /// EPSG:4326 or CRS84, or the CRS could not be resolved at all.
    UnsupportedCrs(String),
    /// A unit of measurement outside the supported conversion table.
    UnknownUnit { field: &'static str, value: String },
    /// A value required to build a geometry could not be parsed (e.g. the
    /// radius of a circle).
    InvalidValue { field: &'static str, value: String },
    /// A malformed element path expression.
    InvalidPath(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnsupportedFeature(tag) => {
                write!(f, "aixm:{tag} is not a currently supported feature type")
            }
            Self::UnsupportedCrs(crs) => {
                write!(f, "unsupported CRS \"{crs}\", only EPSG:4326 and CRS84 are supported")
            }
            Self::UnknownUnit { field, value } => {
                write!(f, "unknown unit of measurement for {field}: {value}")
            }
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: {value}")
            }
            Self::InvalidPath(path) => write!(f, "invalid element path: {path}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
