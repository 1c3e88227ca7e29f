//! Core value types shared across screens, stores, and the ad runtime.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display language of the app.
///
/// Persisted under the `appLanguage` preference key; the product launched
/// Arabic-first, so Arabic is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    /// Two-letter code used on the wire and in the preference store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language '{other}' (expected ar or en)")),
        }
    }
}

/// Name generation strategies offered by the backend.
///
/// Wire names are the backend's `type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    Ai,
    Sector,
    Abbreviated,
    Compound,
    SmartRandom,
    Geographic,
    LengthBased,
    Personality,
}

impl GenerationKind {
    /// Every strategy, in menu order.
    pub const ALL: [GenerationKind; 8] = [
        GenerationKind::Ai,
        GenerationKind::Sector,
        GenerationKind::Abbreviated,
        GenerationKind::Compound,
        GenerationKind::SmartRandom,
        GenerationKind::Geographic,
        GenerationKind::LengthBased,
        GenerationKind::Personality,
    ];

    /// The backend's `type` value for this strategy.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            GenerationKind::Ai => "ai",
            GenerationKind::Sector => "sector",
            GenerationKind::Abbreviated => "abbreviated",
            GenerationKind::Compound => "compound",
            GenerationKind::SmartRandom => "smart_random",
            GenerationKind::Geographic => "geographic",
            GenerationKind::LengthBased => "length_based",
            GenerationKind::Personality => "personality",
        }
    }

    /// Menu label in the given display language.
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (GenerationKind::Ai, Language::Ar) => "توليد بالذكاء الاصطناعي",
            (GenerationKind::Ai, Language::En) => "AI generation",
            (GenerationKind::Sector, Language::Ar) => "حسب القطاع",
            (GenerationKind::Sector, Language::En) => "By sector",
            (GenerationKind::Abbreviated, Language::Ar) => "أسماء مختصرة",
            (GenerationKind::Abbreviated, Language::En) => "Abbreviated",
            (GenerationKind::Compound, Language::Ar) => "أسماء مركبة",
            (GenerationKind::Compound, Language::En) => "Compound",
            (GenerationKind::SmartRandom, Language::Ar) => "عشوائي ذكي",
            (GenerationKind::SmartRandom, Language::En) => "Smart random",
            (GenerationKind::Geographic, Language::Ar) => "جغرافي",
            (GenerationKind::Geographic, Language::En) => "Geographic",
            (GenerationKind::LengthBased, Language::Ar) => "حسب الطول",
            (GenerationKind::LengthBased, Language::En) => "By length",
            (GenerationKind::Personality, Language::Ar) => "حسب الشخصية",
            (GenerationKind::Personality, Language::En) => "By personality",
        }
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for GenerationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GenerationKind::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| {
                let known = GenerationKind::ALL.map(GenerationKind::wire_name).join(", ");
                format!("unknown generation type '{s}' (expected one of: {known})")
            })
    }
}

/// Ad formats the app integrates.
///
/// The first three carry a full load/show lifecycle; banners only need a
/// resolved unit id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdKind {
    Interstitial,
    Rewarded,
    AppOpen,
    Banner,
}

impl AdKind {
    /// Kinds that get a lifecycle surface.
    pub const SURFACES: [AdKind; 3] = [AdKind::Interstitial, AdKind::Rewarded, AdKind::AppOpen];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AdKind::Interstitial => "interstitial",
            AdKind::Rewarded => "rewarded",
            AdKind::AppOpen => "app_open",
            AdKind::Banner => "banner",
        }
    }
}

impl fmt::Display for AdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name the user kept, wire-identical to the backend's saved-name records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedName {
    pub id: String,
    pub name: String,
    /// Strategy or sector the name came from, free-form.
    pub category: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl SavedName {
    /// Create a fresh record with a random id stamped now.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            timestamp: Utc::now(),
            is_favorite: false,
        }
    }

    /// List ordering used everywhere saved names are displayed:
    /// favorites first, then newest first.
    #[must_use]
    pub fn display_order(a: &SavedName, b: &SavedName) -> std::cmp::Ordering {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then(b.timestamp.cmp(&a.timestamp))
    }
}

/// Serde codec for saved-name timestamps.
///
/// The backend emits naive UTC timestamps (no offset suffix) while our own
/// writes are RFC 3339 with a `Z`; reads accept both.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_language_codes_round_trip() {
        assert_eq!(Language::Ar.code(), "ar");
        assert_eq!(Language::En.code(), "en");
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Ar);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_default_is_arabic() {
        assert_eq!(Language::default(), Language::Ar);
    }

    #[test]
    fn test_language_other_toggles() {
        assert_eq!(Language::Ar.other(), Language::En);
        assert_eq!(Language::En.other(), Language::Ar);
    }

    #[test]
    fn test_language_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let parsed: Language = serde_json::from_str("\"ar\"").unwrap();
        assert_eq!(parsed, Language::Ar);
    }

    #[test]
    fn test_generation_kind_wire_names_match_serde() {
        for kind in GenerationKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.wire_name()));
            assert_eq!(kind.wire_name().parse::<GenerationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_generation_kind_rejects_unknown() {
        let err = "llm".parse::<GenerationKind>().unwrap_err();
        assert!(err.contains("smart_random"));
    }

    #[test]
    fn test_generation_kind_labels_exist_for_both_languages() {
        for kind in GenerationKind::ALL {
            assert!(!kind.label(Language::Ar).is_empty());
            assert!(!kind.label(Language::En).is_empty());
            assert_ne!(kind.label(Language::Ar), kind.label(Language::En));
        }
    }

    #[test]
    fn test_ad_kind_surfaces_excludes_banner() {
        assert!(!AdKind::SURFACES.contains(&AdKind::Banner));
        assert_eq!(AdKind::SURFACES.len(), 3);
    }

    #[test]
    fn test_saved_name_new_populates_id_and_timestamp() {
        let saved = SavedName::new("نور تك", "ai");
        assert!(!saved.id.is_empty());
        assert_eq!(saved.name, "نور تك");
        assert_eq!(saved.category, "ai");
        assert!(!saved.is_favorite);
    }

    #[test]
    fn test_saved_name_display_order_favorites_first_then_newest() {
        let mut old_favorite = SavedName::new("a", "ai");
        old_favorite.is_favorite = true;
        old_favorite.timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let mut newer = SavedName::new("b", "ai");
        newer.timestamp = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

        let mut older = SavedName::new("c", "ai");
        older.timestamp = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let mut list = vec![older.clone(), newer.clone(), old_favorite.clone()];
        list.sort_by(SavedName::display_order);

        assert_eq!(list[0].name, old_favorite.name);
        assert_eq!(list[1].name, newer.name);
        assert_eq!(list[2].name, older.name);
    }

    #[test]
    fn test_saved_name_json_field_names() {
        let saved = SavedName::new("Nova", "sector");
        let json = serde_json::to_value(&saved).unwrap();
        assert!(json.get("is_favorite").is_some());
        assert!(json.get("timestamp").is_some());
        assert!(json.get("category").is_some());
    }

    #[test]
    fn test_timestamp_parses_rfc3339() {
        let parsed = timestamp::parse("2025-01-15T10:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_timestamp_parses_naive_backend_format() {
        // FastAPI serializes datetime.utcnow() without an offset.
        let parsed = timestamp::parse("2025-01-15T10:30:00.123456").unwrap();
        assert_eq!(parsed.timestamp(), 1736937000);
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        assert!(timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_saved_name_deserializes_backend_record() {
        let json = r#"{
            "id": "0a1b2c3d-0000-4000-8000-000000000000",
            "name": "سمارت سولوشن",
            "category": "compound",
            "timestamp": "2025-03-02T08:15:30.500000",
            "is_favorite": true
        }"#;
        let saved: SavedName = serde_json::from_str(json).unwrap();
        assert_eq!(saved.name, "سمارت سولوشن");
        assert!(saved.is_favorite);
    }

    #[test]
    fn test_saved_name_missing_favorite_defaults_false() {
        let json = r#"{
            "id": "x",
            "name": "Nova",
            "category": "ai",
            "timestamp": "2025-03-02T08:15:30Z"
        }"#;
        let saved: SavedName = serde_json::from_str(json).unwrap();
        assert!(!saved.is_favorite);
    }
}
