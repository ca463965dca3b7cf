//! Structured media types.
//!
//! Content-type assertions normalize both sides into [`MediaType`] before
//! comparing, so `"application/json; charset=utf-8"` given as a string and a
//! structured value built by hand land in the same comparison domain.
//! Parsing is total: a string that is not a well-formed media type simply
//! never compares equal to one that is.

use std::fmt;

/// A parsed media type: type, subtype, optional charset parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    kind: String,
    subtype: String,
    charset: Option<String>,
}

impl MediaType {
    /// Build a media type from its components. Components are lowercased,
    /// matching the case-insensitive comparison rules of media types.
    pub fn new(kind: impl Into<String>, subtype: impl Into<String>) -> MediaType {
        MediaType {
            kind: kind.into().trim().to_ascii_lowercase(),
            subtype: subtype.into().trim().to_ascii_lowercase(),
            charset: None,
        }
    }

    /// Attach a charset parameter.
    pub fn with_charset(mut self, charset: impl Into<String>) -> MediaType {
        self.charset = Some(charset.into().trim().to_ascii_lowercase());
        self
    }

    /// Parse a raw header-style value such as `text/html; charset=utf-8`.
    ///
    /// Never fails: a value without a `/` parses with an empty subtype, and
    /// unknown parameters are ignored. Quotes around the charset value are
    /// stripped.
    pub fn parse(raw: &str) -> MediaType {
        let mut parts = raw.split(';');
        let full_type = parts.next().unwrap_or_default().trim();
        let (kind, subtype) = match full_type.split_once('/') {
            Some((kind, subtype)) => (kind, subtype),
            None => (full_type, ""),
        };

        let mut media = MediaType::new(kind, subtype);
        for parameter in parts {
            if let Some((name, value)) = parameter.split_once('=') {
                if name.trim().eq_ignore_ascii_case("charset") {
                    let value = value.trim().trim_matches('"');
                    media = media.with_charset(value);
                }
            }
        }
        media
    }

    /// The top-level type, e.g. `application`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The subtype, e.g. `json`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// The charset parameter, if one was given.
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.subtype)?;
        if let Some(charset) = &self.charset {
            write!(f, "; charset={}", charset)?;
        }
        Ok(())
    }
}

impl From<&str> for MediaType {
    fn from(raw: &str) -> Self {
        MediaType::parse(raw)
    }
}

/// Closed set of accepted content-type inputs for assertion methods.
///
/// Strings parse through [`MediaType::parse`]; `None` declares that the
/// facet is expected to be absent. Everything normalizes here before the
/// comparator runs, so the comparator itself never branches on input shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTypeExpectation {
    /// The result must carry no content type.
    Absent,
    /// The result must carry exactly this media type.
    Media(MediaType),
}

impl ContentTypeExpectation {
    /// The structured expected value, `None` when absence is expected.
    pub fn media(&self) -> Option<&MediaType> {
        match self {
            ContentTypeExpectation::Absent => None,
            ContentTypeExpectation::Media(media) => Some(media),
        }
    }
}

impl From<&str> for ContentTypeExpectation {
    fn from(raw: &str) -> Self {
        ContentTypeExpectation::Media(MediaType::parse(raw))
    }
}

impl From<String> for ContentTypeExpectation {
    fn from(raw: String) -> Self {
        ContentTypeExpectation::from(raw.as_str())
    }
}

impl From<MediaType> for ContentTypeExpectation {
    fn from(media: MediaType) -> Self {
        ContentTypeExpectation::Media(media)
    }
}

impl From<Option<MediaType>> for ContentTypeExpectation {
    fn from(media: Option<MediaType>) -> Self {
        match media {
            Some(media) => ContentTypeExpectation::Media(media),
            None => ContentTypeExpectation::Absent,
        }
    }
}

impl From<Option<&str>> for ContentTypeExpectation {
    fn from(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => ContentTypeExpectation::from(raw),
            None => ContentTypeExpectation::Absent,
        }
    }
}
