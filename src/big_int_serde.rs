//! Serde support: a [`BigInt`] travels as its canonical decimal string.
//! Human-readable formats may also hand over a bare integer, as long as it
//! fits in `i64`/`u64`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::BigInt;

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a decimal integer string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigInt, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigInt, E> {
        Ok(BigInt::from(v))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(BigIntVisitor)
        } else {
            // bincode and friends cannot guess the type, ask for the string
            deserializer.deserialize_str(BigIntVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn test_serde_round_trip() {
        let a: BigInt = "-2432902008176640000123".parse().unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"-2432902008176640000123\"");
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);

        let from_number: BigInt = serde_json::from_str("-17").unwrap();
        assert_eq!(from_number, BigInt::from(-17));
        let from_number: BigInt = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(from_number, BigInt::from(u64::MAX));
        // wider integers must come as strings
        assert!(serde_json::from_str::<BigInt>("100000000000000000000").is_err());
        let wide: BigInt = serde_json::from_str("\"100000000000000000000\"").unwrap();
        assert_eq!(wide.to_string(), "100000000000000000000");
        assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
    }

    #[test]
    fn test_serde_compact_round_trip() {
        for literal in ["-2432902008176640000123", "0", "999999999", "1000000000"] {
            let a: BigInt = literal.parse().unwrap();
            let bytes = bincode::serialize(&a).unwrap();
            let back: BigInt = bincode::deserialize(&bytes).unwrap();
            assert_eq!(back, a, "literal {}", literal);
            assert_eq!(back.to_string(), literal);
        }

        let bytes = bincode::serialize("12x").unwrap();
        assert!(bincode::deserialize::<BigInt>(&bytes).is_err());
    }
}
