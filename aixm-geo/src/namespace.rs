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

//! Namespace bindings used to evaluate element paths.
//!
//! AIXM documents declare their own prefixes, but the paths used by the
//! extractors are written against the fixed prefixes below. Elements are
//! matched by their resolved namespace URI, so a document that binds e.g.
//! GML to `g:` instead of `gml:` is still matched correctly.

pub const XLINK: &str = "http://www.w3.org/1999/xlink";
pub const GML: &str = "http://www.opengis.net/gml/3.2";
pub const AIXM: &str = "http://www.aixm.aero/schema/5.1";
pub const MESSAGE: &str = "http://www.aixm.aero/schema/5.1/message";
pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const NATS: &str = "http://www.aixm.aero/schema/5.1/extensions/NATS/eSDO";

/// The prefix to namespace URI map used by all path queries.
pub static NAMESPACES: Namespaces = Namespaces {
    bindings: &[
        ("xlink", XLINK),
        ("gml", GML),
        ("aixm", AIXM),
        ("message", MESSAGE),
        ("xsi", XSI),
        ("nats", NATS),
    ],
};

/// Immutable prefix bindings.
#[derive(Debug)]
pub struct Namespaces {
    bindings: &'static [(&'static str, &'static str)],
}

impl Namespaces {
    /// Returns the namespace URI bound to the `prefix`.
    pub fn resolve(&self, prefix: &str) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, uri)| *uri)
    }

    /// Returns the prefix bound to the namespace `uri`.
    pub fn prefix(&self, uri: &str) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|(_, u)| *u == uri)
            .map(|(p, _)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.bindings.iter().copied()
    }
}
