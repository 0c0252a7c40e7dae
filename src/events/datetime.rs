//! Wall-clock event timestamps as exchanged with clients.
//!
//! Events carry datetime-local text (`2024-03-01T10:00`), no zone and no
//! UTC normalization; the same wall-clock value is stored and rendered.

use time::macros::format_description;
use time::PrimitiveDateTime;

/// Parse datetime-local text, with or without the seconds component.
pub fn parse(s: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let minutes_only = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    PrimitiveDateTime::parse(s, &with_seconds)
        .or_else(|_| PrimitiveDateTime::parse(s, &minutes_only))
}

/// Canonical wire form, always with seconds.
pub fn format(dt: PrimitiveDateTime) -> Result<String, time::error::Format> {
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    dt.format(&with_seconds)
}

/// Minute-precision text for a datetime-local form input.
pub fn format_minutes(dt: PrimitiveDateTime) -> Result<String, time::error::Format> {
    let minutes_only = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    dt.format(&minutes_only)
}

pub fn serialize<S>(dt: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let text = format(*dt).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&text)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = <String as serde::Deserialize>::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

pub mod option {
    use time::PrimitiveDateTime;

    pub fn serialize<S>(dt: &Option<PrimitiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match dt {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
        match s {
            Some(s) => super::parse(&s).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
