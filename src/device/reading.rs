use crate::protocol::constant::HUMIDITY_FRACTION_DIGITS;
use serde::{Serialize, Serializer};

// a single sht31 measurement taken from bytes 0..4 of an uplink.
// temperature goes out as a plain number, humidity as a two decimal string,
// consumers downstream already parse that shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecodedReading {
    pub temperature: f64,
    #[serde(serialize_with = "serialize_fixed")]
    pub humidity: f64,
}

impl DecodedReading {
    pub fn humidity_fixed(&self) -> String {
        format!("{:.*}", HUMIDITY_FRACTION_DIGITS, self.humidity)
    }
}

fn serialize_fixed<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:.*}", HUMIDITY_FRACTION_DIGITS, value))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialize_reading_should_ok() {
        let reading = DecodedReading {
            temperature: 23.45,
            humidity: 52.28,
        };

        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"temperature":23.45,"humidity":"52.28"}"#);
    }

    #[test]
    fn humidity_fixed_pads_fraction() {
        let reading = DecodedReading {
            temperature: 0.0,
            humidity: 0.0,
        };
        assert_eq!(reading.humidity_fixed(), "0.00");

        let reading = DecodedReading {
            temperature: 0.0,
            humidity: 12.5,
        };
        assert_eq!(reading.humidity_fixed(), "12.50");
    }
}
