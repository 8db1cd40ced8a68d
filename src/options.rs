//! Configuration options for the flattening utilities.

use crate::error::{CollectionError, Result};
use serde::{Deserialize, Serialize};

/// How many levels of nesting a flatten expands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlattenDepth {
    /// Expand every level
    #[default]
    Deep,
    /// Expand exactly one level
    Shallow,
    /// Expand up to the given number of levels (0 leaves the input as is)
    Levels(usize),
}

impl FlattenDepth {
    /// Level limit, or `None` when unbounded
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Deep => None,
            Self::Shallow => Some(1),
            Self::Levels(levels) => Some(levels),
        }
    }
}

/// Options controlling a flatten
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenOptions {
    /// Nesting levels to expand (default: deep)
    #[serde(default)]
    pub depth: FlattenDepth,
}

impl FlattenOptions {
    /// Create options for a deep flatten
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options for a one-level flatten
    pub fn shallow() -> Self {
        Self {
            depth: FlattenDepth::Shallow,
        }
    }

    /// Set the flatten depth
    pub fn depth(mut self, depth: FlattenDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Limit flattening to `levels` levels
    pub fn levels(mut self, levels: usize) -> Self {
        self.depth = FlattenDepth::Levels(levels);
        self
    }

    /// Load options from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.depth == FlattenDepth::Levels(0) {
            return Err(CollectionError::config(
                "flatten depth of 0 levels would never flatten; use a positive level count",
            ));
        }
        Ok(())
    }
}

impl From<bool> for FlattenOptions {
    /// `true` selects a shallow flatten, `false` a deep one
    fn from(shallow: bool) -> Self {
        if shallow {
            Self::shallow()
        } else {
            Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FlattenOptions::default();
        assert_eq!(options.depth, FlattenDepth::Deep);
        assert_eq!(options.depth.limit(), None);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(FlattenOptions::from(true).depth, FlattenDepth::Shallow);
        assert_eq!(FlattenOptions::from(false).depth, FlattenDepth::Deep);
    }

    #[test]
    fn test_builder() {
        let options = FlattenOptions::new().levels(2);
        assert_eq!(options.depth.limit(), Some(2));
        assert_eq!(FlattenOptions::new().depth(FlattenDepth::Shallow).depth.limit(), Some(1));
    }

    #[test]
    fn test_from_json() {
        let options = FlattenOptions::from_json(r#"{"depth": "shallow"}"#).unwrap();
        assert_eq!(options.depth, FlattenDepth::Shallow);

        let options = FlattenOptions::from_json(r#"{"depth": {"levels": 3}}"#).unwrap();
        assert_eq!(options.depth, FlattenDepth::Levels(3));

        let options = FlattenOptions::from_json("{}").unwrap();
        assert_eq!(options.depth, FlattenDepth::Deep);
    }

    #[test]
    fn test_from_json_errors() {
        let err = FlattenOptions::from_json(r#"{"depth": "sideways"}"#).unwrap_err();
        assert!(matches!(err, CollectionError::SerializationError { .. }));

        let err = FlattenOptions::from_json(r#"{"depth": {"levels": 0}}"#).unwrap_err();
        assert!(matches!(err, CollectionError::ConfigurationError { .. }));
    }
}
