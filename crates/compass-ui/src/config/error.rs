use std::fmt;

/// A syntax error in a style document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "style parse error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}

/// A style document that parsed but does not describe a valid compass.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(ParseError),
    /// The root node is not `Compass`.
    UnknownRoot(String),
    UnknownKey { key: String, line: usize },
    DuplicateKey { key: String, line: usize },
    /// The value has the wrong literal type for the key.
    WrongType { key: String, expected: &'static str, line: usize },
    /// The value has the right type but is out of range.
    InvalidValue { key: String, reason: &'static str, line: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => e.fmt(f),
            ConfigError::UnknownRoot(name) => write!(f, "expected a `Compass` block, found `{name}`"),
            ConfigError::UnknownKey { key, line } => write!(f, "line {line}: unknown property `{key}`"),
            ConfigError::DuplicateKey { key, line } => write!(f, "line {line}: property `{key}` set twice"),
            ConfigError::WrongType { key, expected, line } => {
                write!(f, "line {line}: property `{key}` expects {expected}")
            }
            ConfigError::InvalidValue { key, reason, line } => {
                write!(f, "line {line}: property `{key}` {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Parse(e)
    }
}
