//! Configuration types for taguml diagram generation.
//!
//! This module provides configuration structures that control how tag
//! records are grouped and how the PlantUML text is styled. All types
//! implement [`serde::Deserialize`] for loading from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining grouping and style settings.
//! - [`GroupingConfig`] - Controls the function-diagram grouping and the default namespace.
//! - [`StyleConfig`] - Controls PlantUML output options such as `skinparam` lines.
//!
//! # Example
//!
//! ```
//! # use taguml::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.grouping().default_package(), "root");
//! ```

use serde::Deserialize;

/// Top-level configuration combining grouping and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Grouping configuration section.
    #[serde(default)]
    grouping: GroupingConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified grouping and style
    /// configurations.
    pub fn new(grouping: GroupingConfig, style: StyleConfig) -> Self {
        Self { grouping, style }
    }

    /// Returns the grouping configuration.
    pub fn grouping(&self) -> &GroupingConfig {
        &self.grouping
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// How function-diagram nodes are grouped into `package` blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionGrouping {
    /// One package block per defining source file.
    #[default]
    File,

    /// One package block per enclosing scope; records without a scope
    /// fall into the default namespace.
    Scope,

    /// No grouping; a flat node list.
    None,
}

/// Grouping configuration for both diagram types.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupingConfig {
    /// Grouping strategy for the function diagram.
    #[serde(default)]
    functions: FunctionGrouping,

    /// Namespace for records that carry no package scope.
    #[serde(default = "default_package_name")]
    default_package: String,
}

impl GroupingConfig {
    /// Creates a new [`GroupingConfig`].
    ///
    /// # Arguments
    ///
    /// * `functions` - Grouping strategy for the function diagram.
    /// * `default_package` - Namespace for records without a package scope.
    pub fn new(functions: FunctionGrouping, default_package: impl Into<String>) -> Self {
        Self {
            functions,
            default_package: default_package.into(),
        }
    }

    /// Returns the function-diagram grouping strategy.
    pub fn functions(&self) -> FunctionGrouping {
        self.functions
    }

    /// Returns the namespace used for records without a package scope.
    pub fn default_package(&self) -> &str {
        &self.default_package
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            functions: FunctionGrouping::default(),
            default_package: default_package_name(),
        }
    }
}

fn default_package_name() -> String {
    "root".to_string()
}

/// Output styling for the emitted PlantUML text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// When set, emitted as `skinparam classAttributeIconSize <n>` at the
    /// top of the class diagram.
    #[serde(default)]
    class_attribute_icon_size: Option<u32>,

    /// When true, method lines include the tag's `signature:` text
    /// instead of empty parentheses.
    #[serde(default)]
    show_signatures: bool,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    pub fn new(class_attribute_icon_size: Option<u32>, show_signatures: bool) -> Self {
        Self {
            class_attribute_icon_size,
            show_signatures,
        }
    }

    /// Returns the `classAttributeIconSize` skinparam value, if configured.
    pub fn class_attribute_icon_size(&self) -> Option<u32> {
        self.class_attribute_icon_size
    }

    /// Returns whether method lines include signatures.
    pub fn show_signatures(&self) -> bool {
        self.show_signatures
    }
}
