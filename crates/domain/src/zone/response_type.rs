use std::fmt;

/// How a zone answers address and pointer queries.
///
/// The tag is resolved once when the registry is built. `Unrecognized` keeps
/// an unknown configuration value around for reporting and is answered like
/// `NxError`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseType {
    Dynamic,
    Static,
    NxError,
    Unrecognized(String),
}

impl ResponseType {
    /// Maps a configuration tag, ignoring case.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dynamic" => ResponseType::Dynamic,
            "static" => ResponseType::Static,
            "nxerror" | "nxdomain" => ResponseType::NxError,
            _ => ResponseType::Unrecognized(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResponseType::Dynamic => "Dynamic",
            ResponseType::Static => "Static",
            ResponseType::NxError => "NxError",
            ResponseType::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ResponseType::Unrecognized(_))
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
