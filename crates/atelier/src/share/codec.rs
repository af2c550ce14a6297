//! Share codec
//!
//! Serializes one asset or the full collection of all six partitions into a
//! URL-embeddable string (percent-encoded JSON in a query parameter) and
//! decodes incoming strings back.

use serde::{Deserialize, Serialize};

use crate::config::share::{ASSET_PARAM, DATA_PARAM};
use crate::data::assets::{Color, Component, Gradient, Icon, Logo, Typography};
use crate::data::types::Asset;
use crate::error::{AtelierError, Result};

/// A full-collection share payload
///
/// Every kind is optional: an encoding includes all six, but a decoded
/// payload may carry any subset, and only present kinds are imported.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Vec<Asset<Typography>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Asset<Color>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<Vec<Asset<Gradient>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logos: Option<Vec<Asset<Logo>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<Asset<Icon>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Asset<Component>>>,
}

impl ShareBundle {
    /// Whether no kind is present at all
    pub fn is_empty(&self) -> bool {
        self.typography.is_none()
            && self.colors.is_none()
            && self.gradients.is_none()
            && self.logos.is_none()
            && self.icons.is_none()
            && self.components.is_none()
    }
}

/// A single-asset share payload: `{id, name, data}` where `data` is the full
/// asset record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharedAsset {
    pub id: String,
    pub name: String,
    pub data: serde_json::Value,
}

/// Encode the full collection as `<origin>?data=<percent-encoded JSON>`
pub fn encode_all(origin: &str, bundle: &ShareBundle) -> Result<String> {
    let json = serde_json::to_string(bundle).map_err(|e| {
        AtelierError::Parse(format!("Failed to serialize share payload: {}", e))
    })?;
    Ok(format!("{}?{}={}", origin, DATA_PARAM, urlencoding::encode(&json)))
}

/// Encode one asset as `<origin>?asset=<percent-encoded JSON>`
pub fn encode_asset<T: Serialize>(origin: &str, id: &str, name: &str, data: &T) -> Result<String> {
    let payload = SharedAsset {
        id: id.to_string(),
        name: name.to_string(),
        data: serde_json::to_value(data).map_err(|e| {
            AtelierError::Parse(format!("Failed to serialize shared asset: {}", e))
        })?,
    };
    let json = serde_json::to_string(&payload).map_err(|e| {
        AtelierError::Parse(format!("Failed to serialize shared asset: {}", e))
    })?;
    Ok(format!("{}?{}={}", origin, ASSET_PARAM, urlencoding::encode(&json)))
}

/// Decode a raw (percent-encoded) `data` parameter value into a bundle
///
/// Malformed input is a parse error; callers log it and abort the import
/// silently.
pub fn decode_bundle(raw: &str) -> Result<ShareBundle> {
    let decoded = percent_decode(raw)?;
    serde_json::from_str(&decoded)
        .map_err(|e| AtelierError::Parse(format!("Failed to parse share payload: {}", e)))
}

/// Decode a raw (percent-encoded) `asset` parameter value
pub fn decode_asset(raw: &str) -> Result<SharedAsset> {
    let decoded = percent_decode(raw)?;
    serde_json::from_str(&decoded)
        .map_err(|e| AtelierError::Parse(format!("Failed to parse shared asset: {}", e)))
}

fn percent_decode(raw: &str) -> Result<String> {
    urlencoding::decode(raw)
        .map(|cow| cow.into_owned())
        .map_err(|e| AtelierError::Parse(format!("Share payload is not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::url::query_param;

    fn sample_bundle() -> ShareBundle {
        ShareBundle {
            typography: Some(vec![Asset::new(
                "1700000000001",
                "Heading 1",
                Typography::new("Helvetica Neue", "32px", "700", "1.2"),
            )]),
            colors: Some(vec![
                Asset::new("1700000000002", "Primary", Color::new("#3366FF")),
                Asset::new("1700000000003", "Accent", Color::new("#ec4899")),
            ]),
            gradients: Some(vec![Asset::new(
                "1700000000004",
                "Sunset",
                Gradient::new("#6366f1", "#ec4899", 135),
            )]),
            logos: Some(vec![Asset::new(
                "1700000000005",
                "Company Logo",
                Logo::new("data:image/svg+xml;base64,PHN2Zz4="),
            )]),
            icons: Some(vec![Asset::new(
                "1700000000006",
                "Menu",
                Icon::new("<svg viewBox=\"0 0 24 24\"></svg>"),
            )]),
            components: Some(vec![Asset::new(
                "1700000000007",
                "Button",
                Component::new("<button>Go</button>", "Primary action button"),
            )]),
        }
    }

    #[test]
    fn test_encode_all_decode_roundtrip() {
        let bundle = sample_bundle();
        let url = encode_all("https://atelier.local", &bundle).unwrap();

        let raw = query_param(&url, "data").unwrap();
        let decoded = decode_bundle(raw).unwrap();
        assert_eq!(decoded, bundle);
    }

    #[test]
    fn test_encode_all_uses_data_param() {
        let url = encode_all("https://atelier.local", &ShareBundle::default()).unwrap();
        assert!(url.starts_with("https://atelier.local?data="));
    }

    #[test]
    fn test_decode_color_payload() {
        // Encoded form of {"colors":[{"id":"1","name":"X","hex":"#000"}]}
        let raw = "%7B%22colors%22%3A%5B%7B%22id%22%3A%221%22%2C%22name%22%3A%22X%22%2C%22hex%22%3A%22%23000%22%7D%5D%7D";
        let bundle = decode_bundle(raw).unwrap();

        let colors = bundle.colors.unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].id, "1");
        assert_eq!(colors[0].name, "X");
        assert_eq!(colors[0].payload.hex, "#000");
        assert!(bundle.typography.is_none());
        assert!(bundle.icons.is_none());
    }

    #[test]
    fn test_decode_tolerates_missing_kinds() {
        let bundle = decode_bundle("%7B%7D").unwrap();
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_decode_malformed_json_is_parse_error() {
        let result = decode_bundle("%7Bnot-json");
        assert!(matches!(result, Err(AtelierError::Parse(_))));
    }

    #[test]
    fn test_encode_asset_roundtrip() {
        let asset = Asset::new("42", "Primary", Color::new("#3366FF"));
        let url = encode_asset("https://atelier.local", &asset.id, &asset.name, &asset).unwrap();
        assert!(url.starts_with("https://atelier.local?asset="));

        let raw = query_param(&url, "asset").unwrap();
        let shared = decode_asset(raw).unwrap();
        assert_eq!(shared.id, "42");
        assert_eq!(shared.name, "Primary");
        assert_eq!(shared.data["hex"], "#3366FF");
    }

    #[test]
    fn test_encode_all_skips_absent_kinds() {
        let bundle = ShareBundle {
            colors: Some(vec![Asset::new("1", "X", Color::new("#000"))]),
            ..Default::default()
        };
        let url = encode_all("https://atelier.local", &bundle).unwrap();
        let raw = query_param(&url, "data").unwrap();
        let json = urlencoding::decode(raw).unwrap();

        assert!(json.contains("colors"));
        assert!(!json.contains("typography"));
        assert!(!json.contains("gradients"));
    }

    #[test]
    fn test_payload_survives_special_characters() {
        let bundle = ShareBundle {
            components: Some(vec![Asset::new(
                "1",
                "Card & Frame",
                Component::new("<div class=\"card\">100%</div>", "A & B ? C = D"),
            )]),
            ..Default::default()
        };
        let url = encode_all("https://atelier.local", &bundle).unwrap();

        // The encoded payload must not introduce extra query separators
        assert_eq!(url.matches('?').count(), 1);
        assert_eq!(url.matches('&').count(), 0);

        let raw = query_param(&url, "data").unwrap();
        assert_eq!(decode_bundle(raw).unwrap(), bundle);
    }
}
