//! Configuration for the Extractor

use crate::decode::resolve_encoding;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
///
/// The markers default to the literals used by the certificate exports; they
/// are matched literally, never as patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Encoding label (WHATWG or `cp949`) used when a document has no byte-order mark
    pub encoding: String,

    /// Heading that starts every certificate
    pub certificate_header: String,

    /// Marker opening the project-info block
    pub project_marker: String,

    /// Marker opening the researcher-info block
    pub researcher_marker: String,

    /// Marker closing the researcher-info block
    pub blank_margin_marker: String,

    /// Maximum accepted document size (bytes)
    pub max_document_bytes: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            encoding: "euc-kr".to_string(),
            certificate_header: "연구과제 참여확인서".to_string(),
            project_marker: "■ 과제정보".to_string(),
            researcher_marker: "■ 연구원정보".to_string(),
            blank_margin_marker: "-- 이하 여백 --".to_string(),
            max_document_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let markers = [
            ("certificate_header", &self.certificate_header),
            ("project_marker", &self.project_marker),
            ("researcher_marker", &self.researcher_marker),
            ("blank_margin_marker", &self.blank_margin_marker),
        ];
        for (name, marker) in markers {
            if marker.trim().is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        if self.project_marker == self.researcher_marker {
            return Err("project_marker and researcher_marker must differ".to_string());
        }
        if self.max_document_bytes == 0 {
            return Err("max_document_bytes must be greater than 0".to_string());
        }
        resolve_encoding(&self.encoding).map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
