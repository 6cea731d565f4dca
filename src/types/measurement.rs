use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// One reading as returned by the `getlatestmeasurements` endpoint.
///
/// Stations report a varying set of columns (ambient temperature, air
/// pressure, humidity, rainfall, ...), so a reading is kept as the raw
/// key/value record rather than a fixed schema and passed through for
/// display.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Measurement(Map<String, Value>);

impl Measurement {
    /// Looks up a single reported column, if the station reported it.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Iterates over the reported columns.
    pub fn columns(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl fmt::Display for Measurement {
    /// Renders the raw record as indented JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_are_opaque_passthrough() {
        let measurement: Measurement = serde_json::from_str(
            r#"{"ambient_temp": 11.2, "air_pressure": 998.2, "reading_timestamp": "2020-02-17T13:15:01Z"}"#,
        )
        .unwrap();

        assert_eq!(measurement.get("ambient_temp"), Some(&json!(11.2)));
        assert_eq!(
            measurement.get("reading_timestamp"),
            Some(&json!("2020-02-17T13:15:01Z"))
        );
        assert_eq!(measurement.get("wind_speed"), None);
        assert_eq!(measurement.columns().count(), 3);
    }

    #[test]
    fn test_display_pretty_prints_record() {
        let measurement: Measurement =
            serde_json::from_str(r#"{"ambient_temp": 11.2}"#).unwrap();
        let rendered = measurement.to_string();

        assert!(rendered.contains("\"ambient_temp\""));
        assert!(rendered.contains("11.2"));
        // Indented output, one column per line.
        assert!(rendered.contains('\n'));
    }
}
