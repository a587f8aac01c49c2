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

use log::{debug, warn};

use crate::error::Error;
use crate::features::{Context, Feature, FeatureType, GeographicFeature};
use crate::record::GeographyRecord;
use crate::timeslice::{latest, resolve_feature_type, resolve_timeslices};
use crate::xml::{self, Document, Element, ElementExt};

/// Produces the features of an AIXM basic message.
///
/// Every `message:hasMember` of the message is one feature. Members of an
/// unsupported type or with broken geometry don't stop the processing of
/// the remaining members.
///
/// The factory borrows the message text, which is read with
/// [`xml::read_file`] or [`xml::read`].
///
/// # Examples
///
/// ```
/// use aixm_geo::FeatureFactory;
///
/// let xml = r#"
///   <message:AIXMBasicMessage
///     xmlns:aixm="http://www.aixm.aero/schema/5.1"
///     xmlns:gml="http://www.opengis.net/gml/3.2"
///     xmlns:message="http://www.aixm.aero/schema/5.1/message">
///     <message:hasMember>
///       <aixm:DesignatedPoint gml:id="uuid.abc">
///         <aixm:timeSlice>
///           <aixm:DesignatedPointTimeSlice gml:id="DP1">
///             <aixm:designator>ABLAN</aixm:designator>
///             <aixm:location>
///               <aixm:Point srsName="urn:ogc:def:crs:EPSG::4326">
///                 <gml:pos>52.0 10.0</gml:pos>
///               </aixm:Point>
///             </aixm:location>
///           </aixm:DesignatedPointTimeSlice>
///         </aixm:timeSlice>
///       </aixm:DesignatedPoint>
///     </message:hasMember>
///   </message:AIXMBasicMessage>"#;
///
/// let mut factory = FeatureFactory::parse(xml).unwrap();
/// let records = factory.geographic_information();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name.as_deref(), Some("ABLAN"));
/// assert!(factory.errors().is_empty());
/// ```
pub struct FeatureFactory<'input> {
    document: Document<'input>,
    errors: Vec<Error>,
}

impl<'input> FeatureFactory<'input> {
    pub fn new(document: Document<'input>) -> Self {
        Self {
            document,
            errors: Vec::new(),
        }
    }

    /// Parses the message `text`.
    pub fn parse(text: &'input str) -> Result<Self, Error> {
        let document = xml::parse(text)?;
        debug!(
            "parsed AIXM message with {} nodes",
            document.descendants().count()
        );
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document<'input> {
        &self.document
    }

    /// Returns the member elements of the message in document order.
    pub fn members(&self) -> Vec<Element<'_, 'input>> {
        self.document
            .root_element()
            .find_all(".//message:hasMember")
            .unwrap_or_default()
    }

    /// Returns the features of the message in document order.
    pub fn features(&self) -> impl Iterator<Item = Result<Feature<'_, 'input>, Error>> + '_ {
        self.members().into_iter().map(Self::produce)
    }

    /// Produces the feature of a `message:hasMember`.
    ///
    /// The feature is read from its latest timeslice. A member without any
    /// timeslice has no type and is unsupported as `Unknown`.
    pub fn produce<'a>(member: Element<'a, 'input>) -> Result<Feature<'a, 'input>, Error> {
        let timeslices = resolve_timeslices(member);

        let (Some(tag), Some(content)) = (resolve_feature_type(&timeslices), latest(&timeslices))
        else {
            debug!(
                "member {} has no timeslice",
                identifier(member).unwrap_or("without id")
            );
            return Err(Error::UnsupportedFeature("Unknown".to_string()));
        };

        let feature_type: FeatureType = tag.parse()?;
        debug!(
            "producing {feature_type} {}",
            identifier(member).unwrap_or("without id")
        );

        Ok(Feature::new(feature_type, Context::new(content)))
    }

    /// Returns the geographic information of all supported features.
    ///
    /// Features that fail are logged and can be inspected with
    /// [`errors`](Self::errors) afterwards.
    pub fn geographic_information(&mut self) -> Vec<GeographyRecord> {
        let mut records = Vec::new();
        let mut errors = Vec::new();

        for result in self
            .features()
            .map(|feature| feature?.geographic_information())
        {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("{e}");
                    errors.push(e);
                }
            }
        }

        debug!(
            "extracted {} records, {} features skipped",
            records.len(),
            errors.len()
        );

        self.errors = errors;
        records
    }

    /// Returns the errors of the last
    /// [`geographic_information`](Self::geographic_information) call.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }
}

/// Returns the `gml:id` of the member's feature without its `uuid.` prefix.
fn identifier<'a>(member: Element<'a, '_>) -> Option<&'a str> {
    let id = member.first_element_child()?.local_attribute("id")?;
    Some(id.strip_prefix("uuid.").unwrap_or(id))
}
