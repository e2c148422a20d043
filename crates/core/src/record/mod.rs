// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use smol_str::SmolStr;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::util::{SENTINEL, is_unset, normalize};

/// Classification of an occurrence record.
///
/// The string representation is the literal tag found in the
/// source data. The leading digit defines the display priority.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    strum::Display,
)]
pub enum RecordType {
    #[strum(serialize = "1_type-locality")]
    TypeLocality,
    #[strum(serialize = "2_integrated-type-locality")]
    IntegratedTypeLocality,
    #[strum(serialize = "3_questionable-type-locality")]
    QuestionableTypeLocality,
    #[strum(serialize = "4_questionable-integrated-type-locality")]
    QuestionableIntegratedTypeLocality,
    #[strum(serialize = "5_specimen-record")]
    SpecimenRecord,
    #[strum(serialize = "6_literature-record")]
    LiteratureRecord,
    #[strum(serialize = "7_questionable-literature-record")]
    QuestionableLiteratureRecord,
}

impl RecordType {
    /// Parse a literal tag.
    ///
    /// Returns `None` for unrecognized tags.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        self.into()
    }

    /// Records of questionable origin or location.
    #[must_use]
    pub const fn is_questionable(self) -> bool {
        matches!(
            self,
            Self::QuestionableTypeLocality
                | Self::QuestionableIntegratedTypeLocality
                | Self::QuestionableLiteratureRecord
        )
    }
}

/// Geographic position in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Key for counting distinct locations.
    ///
    /// Two records share a location if and only if both the latitude
    /// and the longitude are exactly equal. Negative zero equals zero.
    #[must_use]
    pub fn location_key(&self) -> String {
        let Self { lat, lon } = *self;
        format!(
            "{lat},{lon}",
            lat = positive_zero(lat),
            lon = positive_zero(lon)
        )
    }
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Compose the key of the species facet.
#[must_use]
pub fn species_key(scientific_name: &str, japanese_name: &str) -> String {
    format!("{scientific_name} / {japanese_name}")
}

/// Raw properties of a single feature, i.e. one record.
///
/// Implemented by decoders of the source data.
pub trait FeatureProperties {
    /// A string property.
    ///
    /// Returns `None` if the property is absent or not a string.
    fn string_property(&self, key: &str) -> Option<&str>;

    /// A numeric property.
    ///
    /// Returns `None` if the property is absent or not numeric.
    fn numeric_property(&self, key: &str) -> Option<f64>;

    /// Fallback position from the feature geometry.
    fn geometry_point(&self) -> Option<Coordinates> {
        None
    }
}

/// Property keys of the source data.
pub mod keys {
    pub const RECORD_TYPE: &str = "recordType";
    pub const JAPANESE_NAME: &str = "japaneseName";
    pub const SCIENTIFIC_NAME: &str = "scientificName";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const DATE: &str = "date";
    pub const PREFECTURE: &str = "prefecture";
    pub const ISLAND: &str = "island";
    pub const GENUS: &str = "genus";
    pub const FAMILY: &str = "family";
    pub const ORDER: &str = "order";
    pub const LITERATURE_ID: &str = "literatureID";
    pub const PAGE: &str = "page";
    pub const ORIGINAL: &str = "original";
    pub const ORIGINAL_JAPANESE_NAME: &str = "originalJapaneseName";
    pub const ORIGINAL_SCIENTIFIC_NAME: &str = "originalScientificName";
    pub const LOCATION: &str = "location";
    pub const NOTE: &str = "note";
    pub const REGISTRANT: &str = "registrant";
    pub const REGISTRATION_DATE: &str = "registrationDate";
}

/// A single occurrence record.
///
/// All string fields are trimmed. Absent values are represented
/// by the sentinel `"-"`.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub record_type: SmolStr,
    pub japanese_name: SmolStr,
    pub scientific_name: SmolStr,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: SmolStr,
    pub prefecture: SmolStr,
    pub island: SmolStr,
    pub genus: SmolStr,
    pub family: SmolStr,
    pub order: SmolStr,
    pub literature_id: SmolStr,
    pub page: SmolStr,
    pub original: SmolStr,
    pub original_japanese_name: SmolStr,
    pub original_scientific_name: SmolStr,
    pub location: SmolStr,
    pub note: SmolStr,
    pub registrant: SmolStr,
    pub registration_date: SmolStr,
}

impl Default for Record {
    fn default() -> Self {
        let sentinel = SmolStr::new_static(SENTINEL);
        Self {
            record_type: sentinel.clone(),
            japanese_name: sentinel.clone(),
            scientific_name: sentinel.clone(),
            latitude: None,
            longitude: None,
            date: sentinel.clone(),
            prefecture: sentinel.clone(),
            island: sentinel.clone(),
            genus: sentinel.clone(),
            family: sentinel.clone(),
            order: sentinel.clone(),
            literature_id: sentinel.clone(),
            page: sentinel.clone(),
            original: sentinel.clone(),
            original_japanese_name: sentinel.clone(),
            original_scientific_name: sentinel.clone(),
            location: sentinel.clone(),
            note: sentinel.clone(),
            registrant: sentinel.clone(),
            registration_date: sentinel,
        }
    }
}

impl Record {
    #[must_use]
    pub fn from_feature(feature: &impl FeatureProperties) -> Self {
        let string = |key| normalize(feature.string_property(key));
        let (latitude, longitude) = match (
            feature.numeric_property(keys::LATITUDE),
            feature.numeric_property(keys::LONGITUDE),
        ) {
            (None, None) => feature
                .geometry_point()
                .map_or((None, None), |Coordinates { lat, lon }| {
                    (Some(lat), Some(lon))
                }),
            partial => partial,
        };
        Self {
            record_type: string(keys::RECORD_TYPE),
            japanese_name: string(keys::JAPANESE_NAME),
            scientific_name: string(keys::SCIENTIFIC_NAME),
            latitude,
            longitude,
            date: string(keys::DATE),
            prefecture: string(keys::PREFECTURE),
            island: string(keys::ISLAND),
            genus: string(keys::GENUS),
            family: string(keys::FAMILY),
            order: string(keys::ORDER),
            literature_id: string(keys::LITERATURE_ID),
            page: string(keys::PAGE),
            original: string(keys::ORIGINAL),
            original_japanese_name: string(keys::ORIGINAL_JAPANESE_NAME),
            original_scientific_name: string(keys::ORIGINAL_SCIENTIFIC_NAME),
            location: string(keys::LOCATION),
            note: string(keys::NOTE),
            registrant: string(keys::REGISTRANT),
            registration_date: string(keys::REGISTRATION_DATE),
        }
    }

    #[must_use]
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::parse(&self.record_type)
    }

    /// Both latitude and longitude are required for placing a marker.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = self.latitude?;
        let lon = self.longitude?;
        Some(Coordinates { lat, lon })
    }

    #[must_use]
    pub fn species_key(&self) -> String {
        species_key(&self.scientific_name, &self.japanese_name)
    }

    /// Records that do not refer to any literature.
    #[must_use]
    pub fn is_unpublished(&self) -> bool {
        is_unset(&self.literature_id)
    }

    #[must_use]
    pub fn is_questionable(&self) -> bool {
        self.record_type().is_some_and(RecordType::is_questionable)
    }
}
