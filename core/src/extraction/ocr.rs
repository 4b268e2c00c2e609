//! OCR collaborator boundary
//!
//! The external OCR service returns either a flat list of text lines, an
//! object carrying a `texts` list, or a bare string. Everything is
//! normalized here, at the boundary: the extraction core only ever sees an
//! [`OcrText`]. Transport or parse failures degrade to an empty line list,
//! never an error, because all downstream functions tolerate empty input.

use log::warn;
use serde::Deserialize;

/// OCR text prepared for scanning
///
/// Holds the uppercased source lines and the whitespace-collapsed joined
/// text the pattern passes run against. Construct from a line list
/// ([`OcrText::from_lines`]) or a pre-joined string
/// ([`OcrText::from_joined`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrText {
    lines: Vec<String>,
    joined: String,
}

impl OcrText {
    /// Builds from a list of OCR lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|l| l.as_ref().to_uppercase())
            .collect();
        let joined = collapse_whitespace(&lines.join(" "));
        Self { lines, joined }
    }

    /// Builds from pre-joined text, splitting on newlines for the
    /// line-local scanning pass
    pub fn from_joined(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Uppercased source lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Uppercased, whitespace-collapsed joined text
    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// Returns whether there is no scannable text
    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Wire shapes an OCR service response may take
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OcrResponse {
    Lines(Vec<String>),
    Object { texts: Vec<String> },
    Text(String),
}

/// Extracts text lines from a raw OCR service JSON response
///
/// Accepts a bare string array, an object with a required `texts` list, or
/// a bare string. Any other shape (including parse failures) yields an
/// empty list with a warning, so a misbehaving collaborator never
/// propagates an error into the extraction core.
pub fn lines_from_json(json: &str) -> Vec<String> {
    match serde_json::from_str::<OcrResponse>(json) {
        Ok(OcrResponse::Lines(lines)) => lines,
        Ok(OcrResponse::Object { texts }) => texts,
        Ok(OcrResponse::Text(text)) => vec![text],
        Err(err) => {
            warn!("unrecognized OCR response, treating as empty: {}", err);
            Vec::new()
        }
    }
}
