// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use biomap_core::{Catalogs, LiteratureCatalog, RecordStore, RegionOrder, TaxonMap};
use biomap_core_json::{feature::load_record_store, rows::decode_rows};

pub(crate) const TAXON_MAP_JSON: &str = r#"[
    ["scientificName", "japaneseName"],
    ["Rana", "アカガエル属"],
    ["Ranidae", "アカガエル科"],
    ["Anura", "無尾目"],
    ["Bufo", "ヒキガエル属"],
    ["Bufonidae", "ヒキガエル科"]
]"#;

pub(crate) const PREFECTURE_ORDER_JSON: &str = r#"[
    ["prefecture"],
    ["東京都"],
    ["沖縄県"]
]"#;

pub(crate) const ISLAND_ORDER_JSON: &str = r#"[
    ["island"],
    ["本州"],
    ["沖縄島"],
    ["石垣島"]
]"#;

pub(crate) const LITERATURE_JSON: &str = r#"[
    ["order", "id", "label", "link"],
    ["2", "L1", "Frogs of <i>Tokyo</i>", "https://example.org/l1"],
    ["1", "L2", "Ryukyu herpetofauna", "-"]
]"#;

pub(crate) const RECORDS_JSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {
                "recordType": "6_literature-record",
                "scientificName": "Rana japonica",
                "japaneseName": "ニホンアカガエル",
                "genus": "Rana", "family": "Ranidae", "order": "Anura",
                "prefecture": "東京都", "island": "本州",
                "literatureID": "L1", "original": "yes",
                "latitude": 35.68, "longitude": 139.76
            }
        },
        {
            "type": "Feature",
            "properties": {
                "recordType": "5_specimen-record",
                "scientificName": "Rana japonica",
                "japaneseName": "ニホンアカガエル",
                "genus": "Rana", "family": "Ranidae", "order": "Anura",
                "prefecture": "東京都", "island": "本州",
                "literatureID": "-", "original": "-",
                "latitude": 35.68, "longitude": 139.76
            }
        },
        {
            "type": "Feature",
            "properties": {
                "recordType": "7_questionable-literature-record",
                "scientificName": "Bufo japonicus",
                "japaneseName": "ニホンヒキガエル",
                "genus": "Bufo", "family": "Bufonidae", "order": "Anura",
                "prefecture": "沖縄県", "island": "沖縄島",
                "literatureID": "L2", "original": "no"
            },
            "geometry": { "type": "Point", "coordinates": [127.68, 26.21] }
        },
        {
            "type": "Feature",
            "properties": {
                "recordType": "6_literature-record",
                "scientificName": "Rana ishikawae",
                "japaneseName": "オキナワイシカワガエル",
                "genus": "Rana", "family": "Ranidae", "order": "Anura",
                "prefecture": "沖縄県", "island": "石垣島",
                "literatureID": "L2", "original": "yes",
                "latitude": "24.34", "longitude": "124.16"
            }
        }
    ]
}"#;

fn rows(json: &str) -> Vec<Vec<String>> {
    decode_rows(json.as_bytes()).unwrap()
}

pub(crate) fn catalogs() -> Catalogs {
    Catalogs {
        taxon_map: TaxonMap::from_rows(rows(TAXON_MAP_JSON)),
        prefecture_order: RegionOrder::from_rows(rows(PREFECTURE_ORDER_JSON)),
        island_order: RegionOrder::from_rows(rows(ISLAND_ORDER_JSON)),
        literature: LiteratureCatalog::from_rows(rows(LITERATURE_JSON)),
    }
}

pub(crate) fn store() -> RecordStore {
    load_record_store(RECORDS_JSON.as_bytes(), catalogs()).unwrap()
}
