//! Custom serde helpers for fixture wire formats.

/// (De)serializes a Unix-millis integer as `DateTime<Utc>`.
///
/// The wallet ledger carries `date` as epoch milliseconds (i64),
/// not ISO 8601 strings.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(dt.timestamp_millis())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super::timestamp_ms")]
        date: DateTime<Utc>,
    }

    #[test]
    fn test_timestamp_ms_round_trip() {
        let parsed: Stamped = serde_json::from_str(r#"{"date":1721044800000}"#).unwrap();
        assert_eq!(parsed.date.timestamp_millis(), 1_721_044_800_000);
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"{"date":1721044800000}"#);
    }
}
