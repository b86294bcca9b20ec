//! Declared parameter signatures for message identifiers.

use std::fmt;

use serde::Deserialize;

/// Marker accepted in signature files for identifiers exempt from checking.
pub const UNVERIFIED_MARKER: &str = "unverified";

/// Kind of an expected message parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKind {
    String,
    Integer,
    Float,
    Character,
}

impl ParamKind {
    /// Short label used when rendering expected signatures.
    pub fn label(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "int",
            ParamKind::Float => "float",
            ParamKind::Character => "char",
        }
    }

    /// Parse a label from a signature file. Accepts a few common aliases.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "string" | "str" => Some(ParamKind::String),
            "int" | "integer" => Some(ParamKind::Integer),
            "float" | "double" => Some(ParamKind::Float),
            "char" | "character" => Some(ParamKind::Character),
            _ => None,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Expected parameters of one message identifier.
///
/// `Params` with an empty list means the message takes no parameters, which is
/// different from `Unverified`: the former still rejects any specifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSignature")]
pub enum ParameterSignature {
    /// Exempt from verification.
    Unverified,
    /// Ordered expected kinds; the end of the list is the end of the signature.
    Params(Vec<ParamKind>),
}

impl ParameterSignature {
    pub fn new(kinds: impl IntoIterator<Item = ParamKind>) -> Self {
        ParameterSignature::Params(kinds.into_iter().collect())
    }

    pub fn empty() -> Self {
        ParameterSignature::Params(Vec::new())
    }

    pub fn is_unverified(&self) -> bool {
        matches!(self, ParameterSignature::Unverified)
    }

    pub fn params(&self) -> Option<&[ParamKind]> {
        match self {
            ParameterSignature::Unverified => None,
            ParameterSignature::Params(kinds) => Some(kinds),
        }
    }

    /// Render expected kinds as space separated labels (`int string`).
    /// Both an empty and an unverified signature render as an empty string.
    pub fn render(&self) -> String {
        self.params()
            .unwrap_or_default()
            .iter()
            .map(|kind| kind.label())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// On-disk shape: `"unverified"` or a list of kind labels.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSignature {
    Marker(String),
    Kinds(Vec<String>),
}

impl TryFrom<RawSignature> for ParameterSignature {
    type Error = String;

    fn try_from(raw: RawSignature) -> Result<Self, Self::Error> {
        match raw {
            RawSignature::Marker(marker) if marker == UNVERIFIED_MARKER => {
                Ok(ParameterSignature::Unverified)
            }
            RawSignature::Marker(marker) => Err(format!(
                "expected a list of parameter kinds or \"{}\", got \"{}\"",
                UNVERIFIED_MARKER, marker
            )),
            RawSignature::Kinds(labels) => labels
                .iter()
                .map(|label| {
                    ParamKind::from_label(label)
                        .ok_or_else(|| format!("unknown parameter kind \"{}\"", label))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ParameterSignature::Params),
        }
    }
}
