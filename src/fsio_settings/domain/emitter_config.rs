use crate::shared::error::FsioError;
use crate::shared::Result;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Generation notice used when neither the CLI nor the config file sets one
pub const DEFAULT_GENERATION_MESSAGE: &str = "was generated automatically by fsio-gen";

/// End-of-line sequence written into generated files
///
/// Generated headers are usually checked into firmware trees, so the
/// terminator is chosen explicitly instead of following the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            "cr" => Ok(LineEnding::Cr),
            _ => Err(format!(
                "Invalid line ending: {}. Please specify 'lf', 'crlf' or 'cr'",
                s
            )),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::CrLf => write!(f, "crlf"),
            LineEnding::Cr => write!(f, "cr"),
        }
    }
}

/// Settings every emitter receives at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    generation_message: String,
    line_terminator: String,
}

impl EmitterConfig {
    /// Creates a config, rejecting values that would corrupt the header
    ///
    /// # Errors
    /// Returns a validation error if the message contains a line break or
    /// the terminator is empty.
    pub fn new(generation_message: impl Into<String>, line_terminator: impl Into<String>) -> Result<Self> {
        let generation_message = generation_message.into();
        let line_terminator = line_terminator.into();

        if generation_message.contains(['\n', '\r']) {
            return Err(FsioError::Validation {
                message: "generation message must fit on a single line".to_string(),
            }
            .into());
        }
        if line_terminator.is_empty() {
            return Err(FsioError::Validation {
                message: "line terminator must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            generation_message,
            line_terminator,
        })
    }

    pub fn with_line_ending(generation_message: impl Into<String>, line_ending: LineEnding) -> Result<Self> {
        Self::new(generation_message, line_ending.as_str())
    }

    pub fn generation_message(&self) -> &str {
        &self.generation_message
    }

    pub fn line_terminator(&self) -> &str {
        &self.line_terminator
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            generation_message: DEFAULT_GENERATION_MESSAGE.to_string(),
            line_terminator: LineEnding::Lf.as_str().to_string(),
        }
    }
}
