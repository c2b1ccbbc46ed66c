use crate::constants::directive::REPORT_URI;
use crate::util::normalize_lower;
use std::fmt;

/// Directives every policy tracks from construction, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveType {
    Default,
    Font,
    Connect,
    Frame,
    Img,
    Manifest,
    Media,
    Script,
    Style,
}

impl DirectiveType {
    pub const ALL: [DirectiveType; 9] = [
        DirectiveType::Default,
        DirectiveType::Font,
        DirectiveType::Connect,
        DirectiveType::Frame,
        DirectiveType::Img,
        DirectiveType::Manifest,
        DirectiveType::Media,
        DirectiveType::Script,
        DirectiveType::Style,
    ];

    /// Lower-cased key used for storage; the header token adds `-src`.
    pub const fn as_str(self) -> &'static str {
        match self {
            DirectiveType::Default => "default",
            DirectiveType::Font => "font",
            DirectiveType::Connect => "connect",
            DirectiveType::Frame => "frame",
            DirectiveType::Img => "img",
            DirectiveType::Manifest => "manifest",
            DirectiveType::Media => "media",
            DirectiveType::Script => "script",
            DirectiveType::Style => "style",
        }
    }
}

impl fmt::Display for DirectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized directive key: trimmed and lower-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectiveName(String);

impl DirectiveName {
    pub fn new(name: &str) -> Self {
        Self(normalize_lower(name.trim()))
    }

    pub fn report_uri() -> Self {
        Self(REPORT_URI.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<DirectiveType> for DirectiveName {
    fn from(value: DirectiveType) -> Self {
        Self(value.as_str().to_string())
    }
}

impl From<&str> for DirectiveName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&String> for DirectiveName {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl From<String> for DirectiveName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl AsRef<str> for DirectiveName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "directive_test.rs"]
mod directive_test;
