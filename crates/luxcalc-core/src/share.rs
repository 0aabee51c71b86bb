//! Shareable query-string snapshot of the calculator state.
//!
//! Uses short keys: `l` length, `w` width, `h` ceiling height, `rt` room type id,
//! `bt` bulb type id. Only these five fields travel in a share link; everything
//! else keeps the receiver's current values.

use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::error::{LuxcalcError, Result};
use crate::models::CalculatorState;
use crate::tables::{BulbType, RoomType};

/// Fields decoded from a share query; absent keys stay `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareQuery {
    #[serde(rename = "l", skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(rename = "w", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(rename = "h", skip_serializing_if = "Option::is_none")]
    pub ceiling_height: Option<f64>,
    #[serde(rename = "rt", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(rename = "bt", skip_serializing_if = "Option::is_none")]
    pub bulb_type: Option<BulbType>,
}

impl ShareQuery {
    pub fn is_empty(&self) -> bool {
        *self == ShareQuery::default()
    }
}

/// Encode the shareable fields of a state as `l=..&w=..&h=..&rt=..&bt=..`
pub fn encode_query(state: &CalculatorState) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("l", &state.length.to_string())
        .append_pair("w", &state.width.to_string())
        .append_pair("h", &state.ceiling_height.to_string())
        .append_pair("rt", state.room_type.id())
        .append_pair("bt", state.bulb_type.id())
        .finish()
}

/// Append the encoded state to a base URL, replacing any existing query
pub fn share_url(base: &str, state: &CalculatorState) -> String {
    let base = base.split(['?', '#']).next().unwrap_or(base);
    format!("{}?{}", base, encode_query(state))
}

/// Decode a bare query string or a full URL
///
/// Percent escapes are decoded. When a key repeats, its first value wins.
/// Unknown keys are ignored. Malformed numbers and unknown identifiers are errors.
pub fn decode_query(input: &str) -> Result<ShareQuery> {
    let mut decoded = ShareQuery::default();

    for (key, value) in query_pairs(input) {
        match key.as_str() {
            "l" if decoded.length.is_none() => {
                decoded.length = Some(parse_number(&key, &value)?)
            }
            "w" if decoded.width.is_none() => {
                decoded.width = Some(parse_number(&key, &value)?)
            }
            "h" if decoded.ceiling_height.is_none() => {
                decoded.ceiling_height = Some(parse_number(&key, &value)?)
            }
            "rt" if decoded.room_type.is_none() => {
                decoded.room_type = Some(value.parse().map_err(|e: LuxcalcError| {
                    LuxcalcError::InvalidShareQuery { key: key.clone(), reason: e.to_string() }
                })?)
            }
            "bt" if decoded.bulb_type.is_none() => {
                decoded.bulb_type = Some(value.parse().map_err(|e: LuxcalcError| {
                    LuxcalcError::InvalidShareQuery { key: key.clone(), reason: e.to_string() }
                })?)
            }
            "l" | "w" | "h" | "rt" | "bt" => {
                tracing::debug!(key = %key, "Ignoring repeated share query key")
            }
            other => tracing::debug!(key = other, "Ignoring unknown share query key"),
        }
    }

    Ok(decoded)
}

/// Decoded key/value pairs of an absolute URL, a relative link, or a bare query
fn query_pairs(input: &str) -> Vec<(String, String)> {
    if let Ok(url) = Url::parse(input) {
        return url.query_pairs().into_owned().collect();
    }

    let without_fragment = input.split('#').next().unwrap_or_default();
    let query = without_fragment.split_once('?').map_or(without_fragment, |(_, query)| query);
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

fn parse_number(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(LuxcalcError::InvalidShareQuery {
            key: key.to_string(),
            reason: format!("expected a number, got '{}'", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_default_state() {
        let query = encode_query(&CalculatorState::default());
        assert_eq!(query, "l=4&w=3&h=2.7&rt=living&bt=led-neutral");
    }

    #[test]
    fn test_share_url_replaces_existing_query() {
        let url = share_url("https://example.com/calc?l=9#top", &CalculatorState::default());
        assert_eq!(url, "https://example.com/calc?l=4&w=3&h=2.7&rt=living&bt=led-neutral");
    }

    #[test]
    fn test_decode_full_url() {
        let decoded =
            decode_query("http://localhost:5173/?l=5.5&w=4&h=3&rt=kitchen&bt=fluorescent").unwrap();
        assert_eq!(decoded.length, Some(5.5));
        assert_eq!(decoded.width, Some(4.0));
        assert_eq!(decoded.ceiling_height, Some(3.0));
        assert_eq!(decoded.room_type, Some(RoomType::Kitchen));
        assert_eq!(decoded.bulb_type, Some(BulbType::Fluorescent));
    }

    #[test]
    fn test_decode_partial_and_unknown_keys() {
        let decoded = decode_query("w=2.5&utm_source=mail").unwrap();
        assert_eq!(decoded.width, Some(2.5));
        assert!(decoded.length.is_none());
        assert!(decoded.room_type.is_none());

        assert!(decode_query("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_bad_values() {
        let err = decode_query("l=abc").unwrap_err();
        assert!(matches!(err, LuxcalcError::InvalidShareQuery { ref key, .. } if key == "l"));

        assert!(decode_query("rt=garage").is_err());
        assert!(decode_query("bt=halogen").is_err());
        assert!(decode_query("h=inf").is_err());
    }

    #[test]
    fn test_decode_reads_back_encoded_state() {
        let state = CalculatorState {
            length: 7.3,
            width: 2.1,
            ceiling_height: 3.4,
            room_type: RoomType::Bathroom,
            bulb_type: BulbType::LedCold,
            ..Default::default()
        };

        let mut restored = CalculatorState::default();
        restored.apply_share(&decode_query(&share_url("http://x/", &state)).unwrap());
        assert_eq!(restored, state);
    }

    #[test]
    fn test_decode_percent_encoded_values() {
        let decoded =
            decode_query("http://localhost:5173/?l=4%2E5&w=3&rt=living&bt=led%2Dneutral").unwrap();
        assert_eq!(decoded.length, Some(4.5));
        assert_eq!(decoded.width, Some(3.0));
        assert_eq!(decoded.bulb_type, Some(BulbType::LedNeutral));

        let decoded = decode_query("?rt=kitch%65n&h=2%2E8").unwrap();
        assert_eq!(decoded.room_type, Some(RoomType::Kitchen));
        assert_eq!(decoded.ceiling_height, Some(2.8));
    }

    #[test]
    fn test_decode_relative_link_and_repeated_keys() {
        let decoded = decode_query("/calc?l=6&l=9#results").unwrap();
        assert_eq!(decoded.length, Some(6.0));
    }
}
