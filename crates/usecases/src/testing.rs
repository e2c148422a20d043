// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use biomap_core::{Catalogs, LiteratureCatalog, Record, RecordStore, RegionOrder, TaxonMap};

fn row(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|column| (*column).to_owned()).collect()
}

pub(crate) fn record(
    record_type: &str,
    (scientific_name, japanese_name): (&str, &str),
    (genus, family, order): (&str, &str, &str),
    (prefecture, island): (&str, &str),
    literature_id: &str,
    original: &str,
    coordinates: Option<(f64, f64)>,
) -> Record {
    Record {
        record_type: record_type.into(),
        scientific_name: scientific_name.into(),
        japanese_name: japanese_name.into(),
        genus: genus.into(),
        family: family.into(),
        order: order.into(),
        prefecture: prefecture.into(),
        island: island.into(),
        literature_id: literature_id.into(),
        original: original.into(),
        latitude: coordinates.map(|(lat, _)| lat),
        longitude: coordinates.map(|(_, lon)| lon),
        ..Default::default()
    }
}

pub(crate) fn records() -> Vec<Record> {
    vec![
        record(
            "6_literature-record",
            ("Rana sp.", "カエル"),
            ("Rana", "Ranidae", "Anura"),
            ("東京都", "本州"),
            "L1",
            "yes",
            Some((35.68, 139.76)),
        ),
        record(
            "5_specimen-record",
            ("Rana japonica", "ニホンアカガエル"),
            ("Rana", "Ranidae", "Anura"),
            ("東京都", "本州"),
            "-",
            "-",
            Some((35.68, 139.76)),
        ),
        record(
            "3_questionable-type-locality",
            ("Bufo japonicus", "ニホンヒキガエル"),
            ("Bufo", "Bufonidae", "Anura"),
            ("沖縄県", "沖縄島"),
            "L2",
            "no",
            Some((26.21, 127.68)),
        ),
        record(
            "1_type-locality",
            ("Hynobius sp.", "サンショウウオ"),
            ("-", "Hynobiidae", "Caudata"),
            ("北海道", "北海道"),
            "L3",
            "yes",
            None,
        ),
        record(
            "7_questionable-literature-record",
            ("Rana sp.", "カエル"),
            ("Rana", "Ranidae", "Anura"),
            ("沖縄県", "石垣島"),
            "L2",
            "no",
            Some((24.34, 124.16)),
        ),
    ]
}

pub(crate) fn catalogs() -> Catalogs {
    let taxon_map = [
        ("Rana", "アカガエル属"),
        ("Ranidae", "アカガエル科"),
        ("Anura", "無尾目"),
        ("Bufo", "ヒキガエル属"),
        ("Hynobiidae", "サンショウウオ科"),
        ("Caudata", "有尾目"),
    ]
    .into_iter()
    .collect::<TaxonMap>();
    let prefecture_order = ["北海道", "東京都", "沖縄県", "大阪府"]
        .into_iter()
        .collect::<RegionOrder>();
    let island_order = ["本州", "北海道", "沖縄島", "石垣島", "本州"]
        .into_iter()
        .collect::<RegionOrder>();
    let literature = LiteratureCatalog::from_rows([
        row(&["order", "id", "label", "link"]),
        row(&["2", "L1", "Frogs of <i>Tokyo</i>", "https://example.org/l1"]),
        row(&["1", "L2", "Ryukyu herpetofauna", "-"]),
        row(&["3", "L4", "Unused", ""]),
    ]);
    Catalogs {
        taxon_map,
        prefecture_order,
        island_order,
        literature,
    }
}

pub(crate) fn store() -> RecordStore {
    RecordStore::new(records(), catalogs())
}
