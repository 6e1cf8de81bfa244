use serde::{de, Deserialize, Deserializer};

use crate::{Error, Result};

/// Number of leading `sensordatavalues` entries the relay consumes:
/// SDS011 PM10, SDS011 PM2.5, DHT22 temperature, DHT22 humidity,
/// BMP180 pressure, BMP180 temperature.
pub const MEASUREMENTS: usize = 6;

#[derive(Debug, Deserialize)]
pub struct DataJson {
    #[serde(default)]
    pub software_version: Option<String>,
    pub sensordatavalues: Vec<SensorDataValue>,
}

#[derive(Debug, Deserialize)]
pub struct SensorDataValue {
    #[serde(default)]
    pub value_type: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub value: f64,
}

impl DataJson {
    pub fn parse(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The first [`MEASUREMENTS`] values in document order.
    pub fn measurements(&self) -> Result<[f64; MEASUREMENTS]> {
        if self.sensordatavalues.len() < MEASUREMENTS {
            return Err(Error::MissingValues(self.sensordatavalues.len()));
        }

        let mut values = [0.0; MEASUREMENTS];
        for (value, data) in values.iter_mut().zip(&self.sensordatavalues) {
            *value = data.value;
        }

        Ok(values)
    }
}

// the firmware reports every value as a string, e.g. "12.30"
fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Number(f64),
        String(String),
    }

    match Value::deserialize(deserializer)? {
        Value::Number(value) => Ok(value),
        Value::String(value) => value.trim().parse().map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_firmware_payload() {
        let body = json!({
            "software_version": "NRZ-2020-133",
            "age": "118",
            "sensordatavalues": [
                { "value_type": "SDS_P1", "value": "10.00" },
                { "value_type": "SDS_P2", "value": "20.00" },
                { "value_type": "temperature", "value": "21.55" },
                { "value_type": "humidity", "value": "44.20" },
                { "value_type": "BMP_pressure", "value": "101325.00" },
                { "value_type": "BMP_temperature", "value": "22.10" },
                { "value_type": "samples", "value": "3466431" },
                { "value_type": "signal", "value": "-62" }
            ]
        });
        let body = serde_json::to_vec(&body).unwrap();

        let data = DataJson::parse(&body).unwrap();
        assert_eq!(data.software_version.as_deref(), Some("NRZ-2020-133"));
        assert_eq!(data.sensordatavalues[0].value_type.as_deref(), Some("SDS_P1"));
        assert_eq!(
            data.measurements().unwrap(),
            [10.0, 20.0, 21.55, 44.2, 101325.0, 22.1]
        );
    }

    #[test]
    fn test_parse_numbers() {
        let body = br#"{"sensordatavalues":[{"value":1},{"value":2.5},{"value":" 3 "},
            {"value":-4},{"value":"5e2"},{"value":6}]}"#;

        let data = DataJson::parse(body).unwrap();
        assert_eq!(data.software_version, None);
        assert_eq!(data.measurements().unwrap(), [1.0, 2.5, 3.0, -4.0, 500.0, 6.0]);
    }

    #[test]
    fn test_missing_key() {
        let body = serde_json::to_vec(&json!({ "software_version": "NRZ-2020-133" })).unwrap();
        assert!(matches!(DataJson::parse(&body), Err(Error::Json(_))));
    }

    #[test]
    fn test_not_a_number() {
        let body = serde_json::to_vec(&json!({
            "sensordatavalues": [{ "value_type": "SDS_P1", "value": "n/a" }]
        }))
        .unwrap();
        assert!(matches!(DataJson::parse(&body), Err(Error::Json(_))));
    }

    #[test]
    fn test_short_sequence() {
        let body = serde_json::to_vec(&json!({
            "sensordatavalues": [{ "value": "1" }, { "value": "2" }, { "value": "3" }]
        }))
        .unwrap();

        let data = DataJson::parse(&body).unwrap();
        assert!(matches!(data.measurements(), Err(Error::MissingValues(3))));
    }
}
