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

//! Temporal resolution of AIXM timeslices.
//!
//! A feature carries one `aixm:timeSlice` per version. The slices are
//! ordered by the date of their `aixm:versionBegin` so that the last slice
//! is the current state of the feature.

use chrono::NaiveDate;
use log::debug;

use crate::xml::{Element, ElementExt};

/// Returns the timeslices of the `feature` ordered from oldest to newest.
///
/// A single timeslice is returned as is. If any slice has no parseable
/// `versionBegin` the slices are kept in document order.
pub fn resolve_timeslices<'a, 'input>(feature: Element<'a, 'input>) -> Vec<Element<'a, 'input>> {
    let timeslices = feature.find_all(".//aixm:timeSlice").unwrap_or_default();

    if timeslices.len() <= 1 {
        return timeslices;
    }

    let dates: Option<Vec<NaiveDate>> = timeslices.iter().map(version_begin).collect();

    match dates {
        Some(dates) => {
            let mut dated: Vec<_> = dates.into_iter().zip(timeslices).collect();
            dated.sort_by_key(|(date, _)| *date);
            dated.into_iter().map(|(_, ts)| ts).collect()
        }
        None => {
            debug!("timeslices without valid versionBegin are kept in document order");
            timeslices
        }
    }
}

/// Returns the date of the `versionBegin`, dropping the time of day.
fn version_begin(timeslice: &Element) -> Option<NaiveDate> {
    let text = timeslice
        .find(".//aixm:versionBegin")
        .ok()??
        .text_content()?;
    let date = text.split('T').next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Returns the feature type tag of the latest timeslice.
///
/// The tag is the local name of the timeslice content without its
/// `TimeSlice` suffix, e.g. `AirportHeliport` for an
/// `aixm:AirportHeliportTimeSlice`.
pub fn resolve_feature_type(timeslices: &[Element]) -> Option<String> {
    let content = latest(timeslices)?;
    let name = content.local_name();

    Some(name.strip_suffix("TimeSlice").unwrap_or(name).to_string())
}

/// Returns the content element of the latest timeslice.
pub fn latest<'a, 'input>(timeslices: &[Element<'a, 'input>]) -> Option<Element<'a, 'input>> {
    timeslices.last()?.first_element_child()
}
