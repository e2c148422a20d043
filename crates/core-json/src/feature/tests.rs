// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use biomap_core::prelude::SENTINEL;
use serde_json::json;

use super::*;

fn load(json: &Value) -> _core::RecordStore {
    load_record_store(json.to_string().as_bytes(), Default::default()).unwrap()
}

#[test]
fn non_string_properties_default_to_sentinel() {
    let store = load(&json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "scientificName": "Rana sp.",
                "japaneseName": "カエル",
                "genus": null,
                "page": 12,
                "latitude": 35.68,
                "longitude": "139.76",
            },
            "geometry": null,
        }],
    }));
    assert_eq!(1, store.len());
    let record = &store.records()[0];
    assert_eq!("Rana sp.", record.scientific_name);
    assert_eq!(SENTINEL, record.genus);
    assert_eq!(SENTINEL, record.page);
    assert_eq!(SENTINEL, record.prefecture);
    assert_eq!(Some(35.68), record.latitude);
    assert_eq!(Some(139.76), record.longitude);
}

#[test]
fn non_numeric_coordinates_are_absent() {
    let store = load(&json!({
        "features": [{
            "properties": {
                "latitude": "north",
                "longitude": true,
            },
        }],
    }));
    let record = &store.records()[0];
    assert_eq!(None, record.latitude);
    assert_eq!(None, record.longitude);
}

#[test]
fn point_geometry_as_fallback() {
    let store = load(&json!({
        "features": [
            {
                "properties": {},
                "geometry": { "type": "Point", "coordinates": [127.68, 26.21] },
            },
            {
                "properties": {},
                "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] },
            },
        ],
    }));
    let records = store.records();
    assert_eq!(Some(26.21), records[0].latitude);
    assert_eq!(Some(127.68), records[0].longitude);
    assert_eq!(None, records[1].coordinates());
}

#[test]
fn features_without_properties_are_kept() {
    let store = load(&json!({ "features": [{}, { "properties": null }] }));
    assert_eq!(2, store.len());
    assert!(store.records().iter().all(|record| record.scientific_name == SENTINEL));
}

#[test]
fn reject_malformed_json() {
    assert!(matches!(
        load_record_store(b"{\"features\": 1}", Default::default()),
        Err(_core::LoadError::Malformed(_))
    ));
}
