//! Core types and structures for bitsquat

use crate::error::{BitsquatError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A domain name or extension whose characters each fit in one byte
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Label(String);

impl Label {
    /// Create a label, rejecting NUL and characters above code point 255
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if let Some(position) = value.chars().position(|c| c == '\0') {
            return Err(BitsquatError::validation(format!(
                "label contains NUL at position {}",
                position
            )));
        }
        if let Some((position, character)) = value
            .chars()
            .enumerate()
            .find(|(_, c)| u32::from(*c) > 0xFF)
        {
            return Err(BitsquatError::encoding(value, character, position));
        }
        Ok(Self(value))
    }

    /// Build a label from raw bytes, one character per byte
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|&b| char::from(b)).collect())
    }

    /// Byte value of each character
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        // every constructor rejects chars above 0xFF, so nothing is dropped here
        self.0.chars().filter_map(|c| u8::try_from(c).ok())
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Label {
    type Error = BitsquatError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which bit positions a variant set flips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipMode {
    /// Flip positions 1..=N; slot N lies past the last bit and leaves the label unchanged
    #[default]
    Reference,
    /// Flip positions 0..N so every bit is flipped once
    Strict,
}

impl std::fmt::Display for FlipMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlipMode::Reference => write!(f, "reference"),
            FlipMode::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for FlipMode {
    type Err = BitsquatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reference" => Ok(FlipMode::Reference),
            "strict" => Ok(FlipMode::Strict),
            other => Err(BitsquatError::config(format!(
                "unknown flip mode '{}' (expected 'reference' or 'strict')",
                other
            ))),
        }
    }
}

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One candidate per line
    #[default]
    Lines,
    /// The full report as pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Lines => write!(f, "lines"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BitsquatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lines" | "text" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            other => Err(BitsquatError::config(format!(
                "unknown output format '{}' (expected 'lines' or 'json')",
                other
            ))),
        }
    }
}

/// A reassembled `domain.extension` candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Index into the domain variant set
    pub domain_index: usize,
    /// Index into the extension variant set, `None` when the extension is fixed
    pub extension_index: Option<usize>,
    pub url: String,
}

impl Candidate {
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

/// Outcome of one bitsquat run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquatReport {
    /// URL after protocol trimming
    pub target: String,
    pub domain: Label,
    pub extension: Label,
    pub domain_bits: String,
    pub extension_bits: String,
    pub flip_mode: FlipMode,
    pub permutate_extension: bool,
    /// Number of candidates produced before filtering
    pub generated: usize,
    /// Candidates accepted by the validity filter, in generation order
    pub candidates: Vec<Candidate>,
}

impl SquatReport {
    /// Number of candidates that passed the filter
    pub fn emitted(&self) -> usize {
        self.candidates.len()
    }

    /// Candidate strings in output order
    pub fn urls(&self) -> Vec<&str> {
        self.candidates.iter().map(Candidate::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_accepts_latin1() {
        let label = Label::new("caf\u{e9}").unwrap();
        assert_eq!(label.char_len(), 4);
        assert_eq!(label.bytes().last(), Some(0xE9));
    }

    #[test]
    fn test_label_rejects_wide_chars() {
        let err = Label::new("g\u{43e}ogle").unwrap_err();
        assert_eq!(
            err,
            BitsquatError::encoding("g\u{43e}ogle", '\u{43e}', 1)
        );
    }

    #[test]
    fn test_label_rejects_nul() {
        let err = Label::new("ab\0c").unwrap_err();
        assert!(matches!(err, BitsquatError::Validation { .. }));
        assert!(err.to_string().contains("position 2"));

        // decoded variants may contain NUL
        assert_eq!(Label::from_bytes(&[b'a', 0]).char_len(), 2);
    }

    #[test]
    fn test_label_deserialize_checks_code_points() {
        let err = serde_json::from_str::<Label>("\"g\u{43e}ogle\"").unwrap_err();
        assert!(err.to_string().contains("exceeds 255"));

        let err = serde_json::from_str::<Label>(r#""a\u0000b""#).unwrap_err();
        assert!(err.to_string().contains("NUL"));

        let label: Label = serde_json::from_str(r#""caf\u00e9""#).unwrap();
        assert_eq!(label.bytes().collect::<Vec<_>>(), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"caf\u{e9}\"");
    }

    #[test]
    fn test_report_deserialize_rejects_wide_label() {
        let json = r#"{
            "target": "x.com", "domain": "\u043e", "extension": "com",
            "domain_bits": "", "extension_bits": "", "flip_mode": "reference",
            "permutate_extension": false, "generated": 0, "candidates": []
        }"#;
        assert!(serde_json::from_str::<SquatReport>(json).is_err());
    }

    #[test]
    fn test_label_from_bytes() {
        let label = Label::from_bytes(&[0x21, 0x62, 0xE1]);
        assert_eq!(label.as_str(), "!b\u{e1}");
        assert_eq!(label.bytes().collect::<Vec<_>>(), vec![0x21, 0x62, 0xE1]);
    }

    #[test]
    fn test_flip_mode_parsing() {
        assert_eq!("strict".parse::<FlipMode>().unwrap(), FlipMode::Strict);
        assert_eq!(" Reference ".parse::<FlipMode>().unwrap(), FlipMode::Reference);
        assert!("loose".parse::<FlipMode>().is_err());
        assert_eq!(FlipMode::default(), FlipMode::Reference);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Lines);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
