//! Unit tests for GeoJSON intake.
//!
//! All documents are inline literals — no fixture files.

#[cfg(test)]
mod classify {
    use crate::parse_features;

    const CAMPUS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature",
             "geometry": {"type": "LineString",
                          "coordinates": [[-88.040, 30.690], [-88.030, 30.700]]},
             "properties": {}},
            {"type": "Feature",
             "geometry": {"type": "Polygon",
                          "coordinates": [[[-88.050, 30.680], [-88.050, 30.690],
                                           [-88.040, 30.690], [-88.050, 30.680]]]},
             "properties": {"name": "Library"}},
            {"type": "Feature",
             "geometry": {"type": "Point", "coordinates": [-88.041, 30.695]},
             "properties": {"name": "Fountain"}}
        ]
    }"#;

    #[test]
    fn partitions_by_geometry_type() {
        let set = parse_features(CAMPUS).unwrap();
        assert_eq!(set.paths.len(), 1);
        assert_eq!(set.buildings.len(), 1);
        assert_eq!(set.points.len(), 1);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn lon_lat_swapped_into_lat_lon() {
        let set = parse_features(CAMPUS).unwrap();
        let first = set.paths[0].coords[0];
        assert_eq!(first.lat, 30.690);
        assert_eq!(first.lon, -88.040);

        let point = set.points[0].position;
        assert_eq!(point.lat, 30.695);
        assert_eq!(point.lon, -88.041);
    }

    #[test]
    fn names_come_from_properties() {
        let set = parse_features(CAMPUS).unwrap();
        assert_eq!(set.buildings[0].name, "Library");
        assert_eq!(set.points[0].name, "Fountain");
    }

    #[test]
    fn polygon_keeps_outer_ring_only() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "geometry": {"type": "Polygon",
                              "coordinates": [
                                  [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
                                  [[0.2, 0.2], [0.2, 0.4], [0.4, 0.2], [0.2, 0.2]]
                              ]},
                 "properties": {"name": "Courtyard Hall"}}
            ]
        }"#;
        let set = parse_features(doc).unwrap();
        assert_eq!(set.buildings.len(), 1);
        assert_eq!(set.buildings[0].outer_ring.len(), 4);
    }

    #[test]
    fn unknown_geometry_types_skipped() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "geometry": {"type": "MultiPoint",
                              "coordinates": [[0.0, 0.0], [1.0, 1.0]]},
                 "properties": {"name": "Scatter"}}
            ]
        }"#;
        let set = parse_features(doc).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn missing_or_null_name_is_empty() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
                 "properties": null},
                {"type": "Feature",
                 "geometry": {"type": "Point", "coordinates": [1.0, 1.0]},
                 "properties": {"name": null}}
            ]
        }"#;
        let set = parse_features(doc).unwrap();
        assert_eq!(set.points.len(), 2);
        assert_eq!(set.points[0].name, "");
        assert_eq!(set.points[1].name, "");
    }

    #[test]
    fn altitude_ordinate_ignored() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "geometry": {"type": "Point", "coordinates": [-88.041, 30.695, 12.5]},
                 "properties": {"name": "Tower"}}
            ]
        }"#;
        let set = parse_features(doc).unwrap();
        assert_eq!(set.points[0].position.lat, 30.695);
        assert_eq!(set.points[0].position.lon, -88.041);
    }

    #[test]
    fn relative_order_preserved() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "geometry": {"type": "LineString",
                              "coordinates": [[0.0, 0.0], [0.0, 1.0]]},
                 "properties": {}},
                {"type": "Feature",
                 "geometry": {"type": "Point", "coordinates": [5.0, 5.0]},
                 "properties": {"name": "Kiosk"}},
                {"type": "Feature",
                 "geometry": {"type": "LineString",
                              "coordinates": [[2.0, 2.0], [2.0, 3.0]]},
                 "properties": {}}
            ]
        }"#;
        let set = parse_features(doc).unwrap();
        assert_eq!(set.paths.len(), 2);
        assert_eq!(set.paths[0].coords[0].lon, 0.0);
        assert_eq!(set.paths[1].coords[0].lon, 2.0);
    }

    #[test]
    fn empty_collection_is_not_an_error() {
        let set = parse_features(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(set.is_empty());
    }
}

#[cfg(test)]
mod malformed {
    use crate::{parse_features, GeoJsonError};

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_features("{not json").unwrap_err();
        assert!(matches!(err, GeoJsonError::Parse(_)));
    }

    #[test]
    fn top_level_must_be_a_collection() {
        let doc = r#"{"type": "Feature",
                      "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
                      "properties": null}"#;
        let err = parse_features(doc).unwrap_err();
        assert!(matches!(err, GeoJsonError::NotACollection(_)));
    }

    #[test]
    fn feature_without_geometry_names_the_offender() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null, "properties": {"name": "Ghost"}}
            ]
        }"#;
        let err = parse_features(doc).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("feature #0"), "{msg}");
        assert!(msg.contains("Ghost"), "{msg}");
        assert!(msg.contains("no geometry"), "{msg}");
    }

    #[test]
    fn non_string_name_rejected() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
                 "properties": {"name": 42}}
            ]
        }"#;
        let err = parse_features(doc).unwrap_err();
        assert!(matches!(err, GeoJsonError::Malformed { index: 0, .. }), "{err}");
    }

    #[test]
    fn polygon_without_rings_rejected() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "geometry": {"type": "Polygon", "coordinates": []},
                 "properties": {"name": "Void"}}
            ]
        }"#;
        assert!(parse_features(doc).is_err());
    }

    #[test]
    fn short_position_rejected() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature",
                 "geometry": {"type": "LineString", "coordinates": [[-88.04], [0.0, 1.0]]},
                 "properties": {}}
            ]
        }"#;
        assert!(parse_features(doc).is_err());
    }
}
