//! The six asset payload types
//!
//! Wire field names are camelCase to match the persisted and shared JSON
//! format.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::data::types::{AssetKind, AssetPayload};
use crate::error::Result;

// =============================================================================
// Typography
// =============================================================================

/// A typography style
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
}

impl Typography {
    pub fn new(
        font_family: impl Into<String>,
        font_size: impl Into<String>,
        font_weight: impl Into<String>,
        line_height: impl Into<String>,
    ) -> Self {
        Self {
            font_family: font_family.into(),
            font_size: font_size.into(),
            font_weight: font_weight.into(),
            line_height: line_height.into(),
        }
    }
}

impl AssetPayload for Typography {
    const KIND: AssetKind = AssetKind::Typography;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.font_family]
    }

    fn summary(&self) -> String {
        format!(
            "{} {} w{} lh{}",
            self.font_family, self.font_size, self.font_weight, self.line_height
        )
    }
}

// =============================================================================
// Color
// =============================================================================

/// A palette color
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub hex: String,
}

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self { hex: hex.into() }
    }
}

impl AssetPayload for Color {
    const KIND: AssetKind = AssetKind::Color;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.hex]
    }

    fn summary(&self) -> String {
        self.hex.clone()
    }
}

// =============================================================================
// Gradient
// =============================================================================

/// A two-stop gradient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gradient {
    pub color1: String,
    pub color2: String,
    /// Angle in degrees, 0-360
    pub angle: u16,
}

impl Gradient {
    /// Create a gradient; the angle is clamped to 0-360 degrees
    pub fn new(color1: impl Into<String>, color2: impl Into<String>, angle: u16) -> Self {
        Self {
            color1: color1.into(),
            color2: color2.into(),
            angle: angle.min(360),
        }
    }
}

impl AssetPayload for Gradient {
    const KIND: AssetKind = AssetKind::Gradient;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.color1, &self.color2]
    }

    fn summary(&self) -> String {
        format!("{} to {} at {}deg", self.color1, self.color2, self.angle)
    }
}

// =============================================================================
// Logo
// =============================================================================

/// Image format of a logo, derived from its URL at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogoFormat {
    Svg,
    Png,
}

impl LogoFormat {
    /// Derive the format from an image URL (data URI or remote URL)
    pub fn from_image_url(url: &str) -> Self {
        if url.starts_with("data:image/svg") {
            LogoFormat::Svg
        } else {
            LogoFormat::Png
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoFormat::Svg => "SVG",
            LogoFormat::Png => "PNG",
        }
    }
}

/// A logo image, stored inline as a data URI or referenced by URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub image_url: String,
    pub format: LogoFormat,
}

impl Logo {
    pub fn new(image_url: impl Into<String>) -> Self {
        let image_url = image_url.into();
        let format = LogoFormat::from_image_url(&image_url);
        Self { image_url, format }
    }

    /// Read a local image file and embed it as a base64 data URI
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let data_uri = format!(
            "data:{};base64,{}",
            mime_for_extension(path),
            BASE64.encode(&bytes)
        );
        Ok(Self::new(data_uri))
    }
}

/// Image MIME type by file extension, defaulting to PNG
fn mime_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("svg") => "image/svg+xml",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        _ => "image/png",
    }
}

impl AssetPayload for Logo {
    const KIND: AssetKind = AssetKind::Logo;

    fn has_required_content(&self) -> bool {
        !self.image_url.trim().is_empty()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.format.as_str()]
    }

    fn summary(&self) -> String {
        if self.image_url.starts_with("data:") {
            format!("{} (inline, {} bytes)", self.format.as_str(), self.image_url.len())
        } else {
            format!("{} {}", self.format.as_str(), self.image_url)
        }
    }
}

// =============================================================================
// Icon
// =============================================================================

/// An SVG icon, stored as raw markup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Icon {
    pub svg: String,
}

impl Icon {
    pub fn new(svg: impl Into<String>) -> Self {
        Self { svg: svg.into() }
    }

    /// Read a local `.svg` file as raw markup
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }
}

impl AssetPayload for Icon {
    const KIND: AssetKind = AssetKind::Icon;

    fn has_required_content(&self) -> bool {
        !self.svg.trim().is_empty()
    }
}

// =============================================================================
// Component
// =============================================================================

/// A reusable component snippet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Component {
    pub code: String,
    pub description: String,
}

impl Component {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl AssetPayload for Component {
    const KIND: AssetKind = AssetKind::Component;

    fn has_required_content(&self) -> bool {
        !self.code.trim().is_empty()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description]
    }

    fn summary(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_format_from_svg_data_uri() {
        assert_eq!(
            LogoFormat::from_image_url("data:image/svg+xml;base64,PHN2Zz4="),
            LogoFormat::Svg
        );
    }

    #[test]
    fn test_logo_format_defaults_to_png() {
        assert_eq!(
            LogoFormat::from_image_url("data:image/png;base64,iVBOR"),
            LogoFormat::Png
        );
        assert_eq!(
            LogoFormat::from_image_url("https://example.com/logo.png"),
            LogoFormat::Png
        );
    }

    #[test]
    fn test_logo_format_wire_values() {
        let logo = Logo::new("data:image/svg+xml;base64,PHN2Zz4=");
        let json = serde_json::to_value(&logo).unwrap();
        assert_eq!(json["format"], "SVG");
        assert_eq!(json["imageUrl"], "data:image/svg+xml;base64,PHN2Zz4=");
    }

    #[test]
    fn test_gradient_angle_clamped() {
        let gradient = Gradient::new("#6366f1", "#ec4899", 720);
        assert_eq!(gradient.angle, 360);

        let gradient = Gradient::new("#6366f1", "#ec4899", 135);
        assert_eq!(gradient.angle, 135);
    }

    #[test]
    fn test_typography_wire_format_camel_case() {
        let style = Typography::new("Helvetica Neue", "16px", "400", "1.5");
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["fontFamily"], "Helvetica Neue");
        assert_eq!(json["fontSize"], "16px");
        assert_eq!(json["fontWeight"], "400");
        assert_eq!(json["lineHeight"], "1.5");
    }

    #[test]
    fn test_required_content_checks() {
        assert!(!Icon::new("").has_required_content());
        assert!(!Icon::new("   ").has_required_content());
        assert!(Icon::new("<svg></svg>").has_required_content());

        assert!(!Logo::new("").has_required_content());
        assert!(Logo::new("https://example.com/a.png").has_required_content());

        assert!(!Component::new("", "desc").has_required_content());
        assert!(Component::new("<button/>", "").has_required_content());
    }

    #[test]
    fn test_logo_from_file_embeds_data_uri() {
        use std::env::temp_dir;
        use std::sync::atomic::{AtomicU32, Ordering};
        static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = temp_dir().join(format!("atelier_logo_test_{}.svg", id));
        fs::write(&path, "<svg></svg>").unwrap();

        let logo = Logo::from_file(&path).unwrap();
        assert!(logo.image_url.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(logo.format, LogoFormat::Svg);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_mime_for_extension() {
        use std::path::PathBuf;
        assert_eq!(mime_for_extension(&PathBuf::from("a.SVG")), "image/svg+xml");
        assert_eq!(mime_for_extension(&PathBuf::from("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for_extension(&PathBuf::from("a.webp")), "image/webp");
        // Unknown extensions fall back to PNG
        assert_eq!(mime_for_extension(&PathBuf::from("a.bin")), "image/png");
        assert_eq!(mime_for_extension(&PathBuf::from("noext")), "image/png");
    }

    #[test]
    fn test_kinds_without_content_field_always_pass() {
        assert!(Typography::new("", "", "", "").has_required_content());
        assert!(Color::new("").has_required_content());
        assert!(Gradient::new("", "", 0).has_required_content());
    }
}
