// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Record features of a GeoJSON `FeatureCollection`

use biomap_core::record::FeatureProperties;
use serde_json::{Map, Value};

use crate::{_core, prelude::*};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,

    #[serde(default)]
    pub geometry: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Feature {
    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }
}

fn parse_finite(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

impl FeatureProperties for Feature {
    fn string_property(&self, key: &str) -> Option<&str> {
        self.property(key).and_then(Value::as_str)
    }

    fn numeric_property(&self, key: &str) -> Option<f64> {
        self.property(key).and_then(parse_finite)
    }

    fn geometry_point(&self) -> Option<_core::Coordinates> {
        let geometry = self.geometry.as_ref()?.as_object()?;
        if geometry.get("type").and_then(Value::as_str) != Some("Point") {
            return None;
        }
        let coordinates = geometry.get("coordinates")?.as_array()?;
        // GeoJSON positions are ordered [longitude, latitude]
        let lon = coordinates.first().and_then(parse_finite)?;
        let lat = coordinates.get(1).and_then(parse_finite)?;
        Some(_core::Coordinates { lat, lon })
    }
}

pub fn decode_feature_collection(json: &[u8]) -> Result<FeatureCollection, _core::LoadError> {
    serde_json::from_slice(json).map_err(|err| _core::LoadError::Malformed(err.to_string()))
}

/// Load the record store from a GeoJSON `FeatureCollection`.
pub fn load_record_store(
    json: &[u8],
    catalogs: _core::Catalogs,
) -> Result<_core::RecordStore, _core::LoadError> {
    let FeatureCollection { features } = decode_feature_collection(json)?;
    let missing_properties = features
        .iter()
        .filter(|feature| feature.properties.is_none())
        .count();
    if missing_properties > 0 {
        log::warn!("{missing_properties} feature(s) without properties");
    }
    Ok(_core::RecordStore::from_features(&features, catalogs))
}

#[cfg(test)]
mod tests;
