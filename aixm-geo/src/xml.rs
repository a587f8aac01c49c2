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

//! Element path queries on `roxmltree` documents.
//!
//! AIXM nests geometry at varying depths, so the extractors need random
//! access to a feature's subtree instead of a single forward pass. Elements
//! are queried with a subset of the ElementPath syntax:
//!
//! - `aixm:name` selects child elements,
//! - `.//gml:pos` selects descendants,
//! - `.//aixm:ARP//gml:pos` chains steps,
//! - `*` matches any element.
//!
//! Prefixes are resolved through [`NAMESPACES`]. An unprefixed name matches
//! the local name in any namespace.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;

pub use roxmltree::{Attribute, Document};

use crate::error::Error;
use crate::namespace::NAMESPACES;

/// An element of a parsed document.
pub type Element<'a, 'input> = roxmltree::Node<'a, 'input>;

/// Reads the XML text from the `reader`.
pub fn read<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Reads the XML text of the file at `path`.
pub fn read_file<P: AsRef<std::path::Path>>(path: P) -> Result<String, Error> {
    Ok(fs::read_to_string(path)?)
}

/// Parses the `text` into a document.
pub fn parse(text: &str) -> Result<Document<'_>, Error> {
    Ok(Document::parse(text)?)
}

/// Convenience accessors and path queries on elements.
pub trait ElementExt<'a, 'input: 'a> {
    /// Returns the local name without any namespace prefix.
    fn local_name(&self) -> &'a str;

    /// Returns the trimmed text content or `None` if there is none.
    fn text_content(&self) -> Option<&'a str>;

    /// Returns the value of the attribute with the local `name` in any
    /// namespace, e.g. `id` for `gml:id`.
    fn local_attribute(&self, name: &str) -> Option<&'a str>;

    /// Returns the first element matching the `path`.
    fn find(&self, path: &str) -> Result<Option<Element<'a, 'input>>, Error>;

    /// Returns all elements matching the `path` in document order.
    fn find_all(&self, path: &str) -> Result<Vec<Element<'a, 'input>>, Error>;
}

impl<'a, 'input: 'a> ElementExt<'a, 'input> for Element<'a, 'input> {
    fn local_name(&self) -> &'a str {
        self.tag_name().name()
    }

    fn text_content(&self) -> Option<&'a str> {
        self.text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    fn local_attribute(&self, name: &str) -> Option<&'a str> {
        self.attributes()
            .find(|attr| attr.name() == name)
            .map(|attr| attr.value())
    }

    fn find(&self, path: &str) -> Result<Option<Element<'a, 'input>>, Error> {
        Ok(self.find_all(path)?.into_iter().next())
    }

    fn find_all(&self, path: &str) -> Result<Vec<Element<'a, 'input>>, Error> {
        let path = Path::parse(path)?;
        Ok(path.select(*self))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Clone, Debug, PartialEq)]
enum NameTest {
    Any,
    Local(String),
    Qualified {
        namespace: &'static str,
        local: String,
    },
}

impl NameTest {
    fn matches(&self, el: &Element<'_, '_>) -> bool {
        if !el.is_element() {
            return false;
        }

        let name = el.tag_name();
        match self {
            Self::Any => true,
            Self::Local(local) => name.name() == local,
            Self::Qualified { namespace, local } => {
                name.name() == local && name.namespace() == Some(*namespace)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Step {
    axis: Axis,
    test: NameTest,
}

/// A parsed element path expression.
#[derive(Clone, Debug, PartialEq)]
struct Path {
    steps: Vec<Step>,
}

impl Path {
    fn parse(expr: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidPath(expr.to_string());

        let mut rest = expr.trim();
        if let Some(r) = rest.strip_prefix('.') {
            rest = match r {
                "" => return Err(invalid()),
                r => r.strip_prefix('/').ok_or_else(invalid)?,
            };
        }

        let mut steps = Vec::new();
        let mut axis = Axis::Child;

        for part in rest.split('/') {
            if part.is_empty() {
                axis = Axis::Descendant;
                continue;
            }

            let test = match part.split_once(':') {
                _ if part == "*" => NameTest::Any,
                Some((prefix, local)) => NameTest::Qualified {
                    namespace: NAMESPACES.resolve(prefix).ok_or_else(invalid)?,
                    local: local.to_string(),
                },
                None => NameTest::Local(part.to_string()),
            };

            steps.push(Step { axis, test });
            axis = Axis::Child;
        }

        // a trailing separator leaves a dangling axis
        if steps.is_empty() || rest.ends_with('/') {
            return Err(invalid());
        }

        Ok(Self { steps })
    }

    /// Selects the matches below the `context`.
    ///
    /// Node ids follow document order, so keying the matches by id removes
    /// duplicates from nested contexts and keeps them ordered.
    fn select<'a, 'input>(&self, context: Element<'a, 'input>) -> Vec<Element<'a, 'input>> {
        let mut current = vec![context];

        for step in &self.steps {
            let mut next: BTreeMap<u32, Element<'a, 'input>> = BTreeMap::new();
            let mut visit = |el: Element<'a, 'input>| {
                if step.test.matches(&el) {
                    next.insert(el.id().get(), el);
                }
            };

            for el in current {
                match step.axis {
                    Axis::Child => el.children().for_each(&mut visit),
                    Axis::Descendant => el.descendants().skip(1).for_each(&mut visit),
                }
            }

            current = next.into_values().collect();
        }

        current
    }
}
