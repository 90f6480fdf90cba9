//! Catalog search response model.
//!
//! The service answers with `{"results": [...]}`. Only the first result is
//! used; later results are never decoded, so a malformed tail does not spoil
//! a good best match.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::value::RawValue;

use bom_model::{PartAttribute, PartRecord};

use crate::error::{LookupError, Result};

/// A JSON string, number, or boolean rendered as text. Numbers and booleans
/// keep the exact spelling they had in the response body (`1.50` stays
/// `1.50`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar(String);

impl Scalar {
    pub fn to_text(&self) -> String {
        self.0.clone()
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();
        match text.as_bytes().first() {
            Some(b'"') => serde_json::from_str::<String>(text)
                .map(Self)
                .map_err(de::Error::custom),
            Some(b'{' | b'[') => Err(de::Error::custom(
                "expected a string, number, or boolean",
            )),
            _ => Ok(Self(text.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceTable {
    #[serde(rename = "USD")]
    pub usd: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentativePart {
    pub part_number: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub manufacturer: Option<Scalar>,
    pub description: Option<Scalar>,
    pub lifecycle: Option<Scalar>,
    pub price: Option<PriceTable>,
    pub stock: Option<Scalar>,
    pub representative_parts: Option<Vec<RepresentativePart>>,
}

type Extractor = fn(&SearchHit) -> Option<String>;

/// Where each recognized attribute comes from inside a search hit.
pub static FIELD_EXTRACTORS: [(PartAttribute, Extractor); 6] = [
    (PartAttribute::Manufacturer, |hit| {
        hit.manufacturer.as_ref().map(Scalar::to_text)
    }),
    (PartAttribute::Description, |hit| {
        hit.description.as_ref().map(Scalar::to_text)
    }),
    (PartAttribute::Lifecycle, |hit| {
        hit.lifecycle.as_ref().map(Scalar::to_text)
    }),
    (PartAttribute::Price, |hit| {
        hit.price
            .as_ref()
            .and_then(|price| price.usd.as_ref())
            .map(Scalar::to_text)
    }),
    (PartAttribute::Stock, |hit| hit.stock.as_ref().map(Scalar::to_text)),
    (PartAttribute::RepresentativeParts, |hit| {
        Some(join_representative_parts(
            hit.representative_parts.as_deref().unwrap_or_default(),
        ))
    }),
];

fn join_representative_parts(parts: &[RepresentativePart]) -> String {
    parts
        .iter()
        .filter_map(|part| part.part_number.as_ref())
        .map(Scalar::to_text)
        .collect::<Vec<_>>()
        .join(", ")
}

impl SearchHit {
    pub fn to_record(&self) -> PartRecord {
        let mut record = PartRecord::default();
        for (attribute, extract) in &FIELD_EXTRACTORS {
            record.set(*attribute, extract(self));
        }
        record
    }
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Option<Vec<Box<RawValue>>>,
}

/// Decode a response body into the record for its first result.
///
/// Returns [`LookupError::NoMatch`] when `results` is absent, null, or empty.
pub fn parse_search_response(body: &str) -> Result<PartRecord> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;
    let first = envelope
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or(LookupError::NoMatch)?;
    let hit: SearchHit = serde_json::from_str(first.get())?;
    Ok(hit.to_record())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_fields_from_first_result() {
        let body = r#"{
            "results": [
                {
                    "manufacturer": "Acme",
                    "description": "10k resistor",
                    "lifecycle": "Active",
                    "price": {"USD": 0.12, "EUR": 0.11},
                    "stock": 1500,
                    "representativeParts": [{"partNumber": "R10K-A"}, {"partNumber": "R10K-B"}]
                },
                {"manufacturer": "Other"}
            ]
        }"#;
        let record = parse_search_response(body).expect("parse");
        assert_eq!(record.manufacturer.as_deref(), Some("Acme"));
        assert_eq!(record.description.as_deref(), Some("10k resistor"));
        assert_eq!(record.lifecycle.as_deref(), Some("Active"));
        assert_eq!(record.price.as_deref(), Some("0.12"));
        assert_eq!(record.stock.as_deref(), Some("1500"));
        assert_eq!(record.representative_parts.as_deref(), Some("R10K-A, R10K-B"));
    }

    #[test]
    fn numbers_keep_their_response_spelling() {
        let record = parse_search_response(
            r#"{"results":[{"price":{"USD":1.50},"stock":1e3,"lifecycle":true}]}"#,
        )
        .expect("parse");
        assert_eq!(record.price.as_deref(), Some("1.50"));
        assert_eq!(record.stock.as_deref(), Some("1e3"));
        assert_eq!(record.lifecycle.as_deref(), Some("true"));
    }

    #[test]
    fn escaped_strings_are_unescaped() {
        let record =
            parse_search_response(r#"{"results":[{"description":"10\u00b5F \"X7R\""}]}"#)
                .expect("parse");
        assert_eq!(record.description.as_deref(), Some("10\u{b5}F \"X7R\""));
    }

    #[test]
    fn absent_fields_stay_empty() {
        let record = parse_search_response(r#"{"results":[{"manufacturer":"Acme"}]}"#)
            .expect("parse");
        assert_eq!(record.price, None);
        assert_eq!(record.stock, None);
        assert_eq!(record.representative_parts.as_deref(), Some(""));
        assert_eq!(record.get(PartAttribute::RepresentativeParts), None);
    }

    #[test]
    fn price_without_usd_is_a_gap() {
        let record = parse_search_response(r#"{"results":[{"price":{"EUR":"1.00"}}]}"#)
            .expect("parse");
        assert_eq!(record.price, None);
    }

    #[test]
    fn later_results_are_not_decoded() {
        let record =
            parse_search_response(r#"{"results":[{"stock":"12"}, {"price": "not an object"}]}"#)
                .expect("parse");
        assert_eq!(record.stock.as_deref(), Some("12"));
    }

    #[test]
    fn empty_or_absent_results_are_no_match() {
        for body in [r#"{"results":[]}"#, r#"{}"#, r#"{"results":null}"#] {
            assert!(matches!(
                parse_search_response(body),
                Err(LookupError::NoMatch)
            ));
        }
    }

    #[test]
    fn malformed_bodies_are_decode_errors() {
        for body in [
            "not json",
            "[1,2]",
            r#"{"results":"x"}"#,
            r#"{"results":[{"price":"5"}]}"#,
            r#"{"results":[{"stock":{"count":5}}]}"#,
        ] {
            assert!(matches!(
                parse_search_response(body),
                Err(LookupError::Decode(_))
            ));
        }
    }
}
