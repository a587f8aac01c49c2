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

use aixm_geo::arc::Direction;
use aixm_geo::units::Uom;
use aixm_geo::{Coordinate, Error, FeatureFactory, FeatureType, GeographyRecord, GeometryKind};

const AIXM_DATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<message:AIXMBasicMessage
  xmlns:aixm="http://www.aixm.aero/schema/5.1"
  xmlns:gml="http://www.opengis.net/gml/3.2"
  xmlns:message="http://www.aixm.aero/schema/5.1/message"
  xmlns:xlink="http://www.w3.org/1999/xlink"
  gml:id="M0000001">

  <!-- Airport with an older and a newer timeslice -->
  <message:hasMember>
    <aixm:AirportHeliport gml:id="uuid.8b8c3e0a-9f2e-4a4b-9d3c-6a6f1d4c2e11">
      <gml:identifier codeSpace="urn:uuid:">8b8c3e0a-9f2e-4a4b-9d3c-6a6f1d4c2e11</gml:identifier>
      <aixm:timeSlice>
        <aixm:AirportHeliportTimeSlice gml:id="AHP_EGPB_2">
          <gml:validTime>
            <gml:TimePeriod gml:id="vt2">
              <gml:beginPosition>2024-03-21T00:00:00Z</gml:beginPosition>
              <gml:endPosition indeterminatePosition="unknown"/>
            </gml:TimePeriod>
          </gml:validTime>
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:sequenceNumber>2</aixm:sequenceNumber>
          <aixm:versionBegin>2024-03-21T00:00:00Z</aixm:versionBegin>
          <aixm:designator>EGPB</aixm:designator>
          <aixm:name>SUMBURGH</aixm:name>
          <aixm:fieldElevation uom="FT">237.05</aixm:fieldElevation>
          <aixm:ARP>
            <aixm:ElevatedPoint srsName="urn:ogc:def:crs:EPSG::4326" gml:id="ep_egpb">
              <gml:pos>59.5347278 -1.6285111</gml:pos>
            </aixm:ElevatedPoint>
          </aixm:ARP>
        </aixm:AirportHeliportTimeSlice>
      </aixm:timeSlice>
      <aixm:timeSlice>
        <aixm:AirportHeliportTimeSlice gml:id="AHP_EGPB_1">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:sequenceNumber>1</aixm:sequenceNumber>
          <aixm:versionBegin>2020-01-30T00:00:00Z</aixm:versionBegin>
          <aixm:designator>EGPB</aixm:designator>
          <aixm:name>SUMBURGH OLD</aixm:name>
          <aixm:fieldElevation uom="FT">20</aixm:fieldElevation>
          <aixm:ARP>
            <aixm:ElevatedPoint srsName="urn:ogc:def:crs:EPSG::4326" gml:id="ep_egpb_old">
              <gml:pos>59.5 -1.6</gml:pos>
            </aixm:ElevatedPoint>
          </aixm:ARP>
        </aixm:AirportHeliportTimeSlice>
      </aixm:timeSlice>
    </aixm:AirportHeliport>
  </message:hasMember>

  <!-- Runway is not supported -->
  <message:hasMember>
    <aixm:Runway gml:id="uuid.9e51668f-bf8a-4f5b-ba6e-27087972b9b8">
      <aixm:timeSlice>
        <aixm:RunwayTimeSlice gml:id="RWY1">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:designator>09/27</aixm:designator>
          <aixm:associatedAirportHeliport xlink:href="urn:uuid:8b8c3e0a-9f2e-4a4b-9d3c-6a6f1d4c2e11"/>
        </aixm:RunwayTimeSlice>
      </aixm:timeSlice>
    </aixm:Runway>
  </message:hasMember>

  <!-- Navaid -->
  <message:hasMember>
    <aixm:Navaid gml:id="uuid.08a1bbd5-ea70-4fe3-836a-ea9686349495">
      <aixm:timeSlice>
        <aixm:NavaidTimeSlice gml:id="NAV_SUM">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:type>VOR_DME</aixm:type>
          <aixm:designator>SUM</aixm:designator>
          <aixm:name>SUMBURGH</aixm:name>
          <aixm:location>
            <aixm:ElevatedPoint srsName="urn:ogc:def:crs:EPSG::4326" gml:id="ep_sum">
              <gml:pos>59.8789 -1.2956</gml:pos>
              <aixm:elevation uom="FT">100</aixm:elevation>
            </aixm:ElevatedPoint>
          </aixm:location>
        </aixm:NavaidTimeSlice>
      </aixm:timeSlice>
    </aixm:Navaid>
  </message:hasMember>

  <!-- Route segment -->
  <message:hasMember>
    <aixm:RouteSegment gml:id="uuid.2f0e3c6d-1b5a-4f0e-8a3b-5d6c7e8f9a0b">
      <aixm:timeSlice>
        <aixm:RouteSegmentTimeSlice gml:id="RS1">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:curveExtent>
            <aixm:Curve srsName="urn:ogc:def:crs:EPSG::4326" gml:id="c_rs1">
              <gml:segments>
                <gml:GeodesicString>
                  <gml:pos>51.540220667 0.977041556</gml:pos>
                  <gml:pos>51.531229778 0.388494583</gml:pos>
                </gml:GeodesicString>
              </gml:segments>
            </aixm:Curve>
          </aixm:curveExtent>
        </aixm:RouteSegmentTimeSlice>
      </aixm:timeSlice>
    </aixm:RouteSegment>
  </message:hasMember>

  <!-- Airspace bounded by a line and an arc -->
  <message:hasMember>
    <aixm:Airspace gml:id="uuid.4fd9f4be-8c65-43f6-b083-3ced9a4b2a7f">
      <aixm:timeSlice>
        <aixm:AirspaceTimeSlice gml:id="ASE1">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:type>D</aixm:type>
          <aixm:designator>EGD001</aixm:designator>
          <aixm:name>TEST RANGE</aixm:name>
          <aixm:geometryComponent>
            <aixm:AirspaceGeometryComponent gml:id="AGC1">
              <aixm:operation>BASE</aixm:operation>
              <aixm:theAirspaceVolume>
                <aixm:AirspaceVolume gml:id="AV1">
                  <aixm:upperLimit uom="FL">95</aixm:upperLimit>
                  <aixm:upperLimitReference>STD</aixm:upperLimitReference>
                  <aixm:lowerLimit>GND</aixm:lowerLimit>
                  <aixm:lowerLimitReference>SFC</aixm:lowerLimitReference>
                  <aixm:horizontalProjection>
                    <aixm:Surface srsName="urn:ogc:def:crs:EPSG::4326" gml:id="S1">
                      <gml:patches>
                        <gml:PolygonPatch>
                          <gml:exterior>
                            <gml:Ring>
                              <gml:curveMember>
                                <gml:Curve gml:id="C1">
                                  <gml:segments>
                                    <gml:GeodesicString>
                                      <gml:posList>50.92 -1.03 51.07 -0.95</gml:posList>
                                    </gml:GeodesicString>
                                    <gml:ArcByCenterPoint numArc="1">
                                      <gml:pos>51.0 -1.0</gml:pos>
                                      <gml:radius uom="[nmi_i]">5</gml:radius>
                                      <gml:startAngle uom="deg">25</gml:startAngle>
                                      <gml:endAngle uom="deg">200</gml:endAngle>
                                    </gml:ArcByCenterPoint>
                                  </gml:segments>
                                </gml:Curve>
                              </gml:curveMember>
                            </gml:Ring>
                          </gml:exterior>
                        </gml:PolygonPatch>
                      </gml:patches>
                    </aixm:Surface>
                  </aixm:horizontalProjection>
                </aixm:AirspaceVolume>
              </aixm:theAirspaceVolume>
            </aixm:AirspaceGeometryComponent>
          </aixm:geometryComponent>
        </aixm:AirspaceTimeSlice>
      </aixm:timeSlice>
    </aixm:Airspace>
  </message:hasMember>

  <!-- Obstacle -->
  <message:hasMember>
    <aixm:VerticalStructure gml:id="uuid.6c1d2e3f-4a5b-4c6d-8e7f-9a0b1c2d3e4f">
      <aixm:timeSlice>
        <aixm:VerticalStructureTimeSlice gml:id="VS1">
          <aixm:interpretation>BASELINE</aixm:interpretation>
          <aixm:name>SCATSTA MAST</aixm:name>
          <aixm:type>ANTENNA</aixm:type>
          <aixm:part>
            <aixm:VerticalStructurePart gml:id="VSP1">
              <aixm:verticalExtent uom="M">152</aixm:verticalExtent>
              <aixm:horizontalProjection_location>
                <aixm:ElevatedPoint srsName="urn:ogc:def:crs:EPSG::4326" gml:id="ep_vs1">
                  <gml:pos>60.4327 -1.2961</gml:pos>
                </aixm:ElevatedPoint>
              </aixm:horizontalProjection_location>
            </aixm:VerticalStructurePart>
          </aixm:part>
        </aixm:VerticalStructureTimeSlice>
      </aixm:timeSlice>
    </aixm:VerticalStructure>
  </message:hasMember>
</message:AIXMBasicMessage>
"#;

fn record_of(records: &[GeographyRecord], feature_type: FeatureType) -> &GeographyRecord {
    records
        .iter()
        .find(|r| r.feature_type == feature_type)
        .unwrap_or_else(|| panic!("{feature_type} should be extracted"))
}

#[test]
fn extract_geographic_information() {
    let mut factory = FeatureFactory::parse(AIXM_DATA).expect("message should parse");
    let records = factory.geographic_information();

    assert_eq!(records.len(), 5);
    assert_eq!(
        records.iter().map(|r| r.feature_type).collect::<Vec<_>>(),
        [
            FeatureType::AirportHeliport,
            FeatureType::NavaidComponent,
            FeatureType::RouteSegment,
            FeatureType::Airspace,
            FeatureType::VerticalStructure,
        ]
    );

    // the runway is skipped but reported
    assert_eq!(factory.errors().len(), 1);
    assert!(matches!(
        &factory.errors()[0],
        Error::UnsupportedFeature(tag) if tag == "Runway"
    ));
}

#[test]
fn airport_from_latest_timeslice() {
    let mut factory = FeatureFactory::parse(AIXM_DATA).unwrap();
    let records = factory.geographic_information();
    let egpb = record_of(&records, FeatureType::AirportHeliport);

    assert_eq!(egpb.name.as_deref(), Some("EGPB (SUMBURGH)"));
    assert_eq!(egpb.elevation_uom, Some(Uom::Meters));
    assert!((egpb.elevation.unwrap() - 72.25).abs() < 0.01);
    assert_eq!(egpb.geometry(), GeometryKind::Point);
    assert!(egpb.coordinates[0]
        .to_string()
        .starts_with("59.5347278 -1.6285111 72.25"));
}

#[test]
fn navaid_label_and_elevation() {
    let mut factory = FeatureFactory::parse(AIXM_DATA).unwrap();
    let records = factory.geographic_information();
    let sum = record_of(&records, FeatureType::NavaidComponent);

    assert_eq!(sum.name.as_deref(), Some("SUM(SUMBURGH) VOR_DME"));
    assert!((sum.elevation.unwrap() - 30.48).abs() < 1e-9);
}

#[test]
fn route_segment_is_line_string() {
    let mut factory = FeatureFactory::parse(AIXM_DATA).unwrap();
    let records = factory.geographic_information();
    let segment = record_of(&records, FeatureType::RouteSegment);

    let coordinates: Vec<_> = segment.coordinates.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        coordinates,
        ["51.540220667 0.977041556", "51.531229778 0.388494583"]
    );
    assert_eq!(segment.geometry(), GeometryKind::LineString);

    let json = serde_json::to_value(segment).unwrap();
    assert_eq!(json["type"], "RouteSegment");
    assert!(json["name"].is_null());
}

#[test]
fn airspace_with_arc() {
    let mut factory = FeatureFactory::parse(AIXM_DATA).unwrap();
    let records = factory.geographic_information();
    let range = record_of(&records, FeatureType::Airspace);

    assert_eq!(range.name.as_deref(), Some("EGD001 (TEST RANGE)"));
    assert_eq!(range.coordinates.len(), 3);
    assert_eq!(range.upper_layer, Some(95.0 * 100.0 * 0.3048));
    assert_eq!(range.lower_layer, Some(0.0));
    assert_eq!(range.upper_layer_reference.as_deref(), Some("STD"));
    assert_eq!(range.geometry(), GeometryKind::Polyhedron);

    let Coordinate::Arc(arc) = &range.coordinates[2] else {
        panic!("expected the arc last");
    };
    assert_eq!(arc.direction, Direction::Clockwise);
    assert!(arc.start.latitude > 51.0 && arc.start.longitude > -1.0);
    assert!(arc.end.latitude < 51.0 && arc.end.longitude < -1.0);
    assert!(range.coordinates[2]
        .to_string()
        .ends_with("centre=51.0 -1.0, direction=clockwise"));
}

#[test]
fn vertical_structure_point() {
    let mut factory = FeatureFactory::parse(AIXM_DATA).unwrap();
    let records = factory.geographic_information();
    let mast = record_of(&records, FeatureType::VerticalStructure);

    assert_eq!(mast.name.as_deref(), Some("SCATSTA MAST (ANTENNA)"));
    assert_eq!(mast.obstacle_type.as_deref(), Some("ANTENNA"));
    assert_eq!(mast.elevation, Some(152.0));
    assert_eq!(mast.coordinates[0].to_string(), "60.4327 -1.2961 152.0");
    assert_eq!(mast.geometry(), GeometryKind::Point);
}

#[test]
fn circle_airspace_without_unit() {
    let xml = r#"<message:AIXMBasicMessage
      xmlns:aixm="http://www.aixm.aero/schema/5.1"
      xmlns:gml="http://www.opengis.net/gml/3.2"
      xmlns:message="http://www.aixm.aero/schema/5.1/message">
      <message:hasMember>
        <aixm:Airspace gml:id="uuid.atz1">
          <aixm:timeSlice>
            <aixm:AirspaceTimeSlice gml:id="ATZ1">
              <aixm:designator>EGPB ATZ</aixm:designator>
              <aixm:geometryComponent>
                <aixm:AirspaceGeometryComponent>
                  <aixm:theAirspaceVolume>
                    <aixm:AirspaceVolume>
                      <aixm:upperLimit uom="FT">2000</aixm:upperLimit>
                      <aixm:horizontalProjection>
                        <aixm:Surface srsName="urn:ogc:def:crs:EPSG::4326">
                          <gml:CircleByCenterPoint>
                            <gml:pos>59.8789 -1.2956</gml:pos>
                            <gml:radius>2.5</gml:radius>
                          </gml:CircleByCenterPoint>
                        </aixm:Surface>
                      </aixm:horizontalProjection>
                    </aixm:AirspaceVolume>
                  </aixm:theAirspaceVolume>
                </aixm:AirspaceGeometryComponent>
              </aixm:geometryComponent>
            </aixm:AirspaceTimeSlice>
          </aixm:timeSlice>
        </aixm:Airspace>
      </message:hasMember>
    </message:AIXMBasicMessage>"#;

    let mut factory = FeatureFactory::parse(xml).unwrap();
    let records = factory.geographic_information();
    assert!(factory.errors().is_empty());

    let atz = record_of(&records, FeatureType::Airspace);
    assert_eq!(atz.geometry(), GeometryKind::Cylinder);
    assert_eq!(
        atz.coordinates[0].to_string(),
        "59.8789 -1.2956, radius=2.5, radius_uom="
    );
}
