pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        format!("{}", time.format(DATE_FMT)).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, Utc};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_read_back_written_date() {
        let stamped = Stamped { at: Utc::now().naive_utc() };
        let json = serde_json::to_string(&stamped).expect("should serialize");
        let loaded: Stamped = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(stamped, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_date() {
        let res = serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#);
        assert!(res.is_err());
    }
}
