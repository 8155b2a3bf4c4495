//! taguml - Generate PlantUML diagrams from ctags tag listings.
//!
//! Parsing, grouping, and text emission for ctags-style tag files. Both
//! function call diagrams and class/package structure diagrams are
//! produced as plain PlantUML source text; rendering is left to the
//! PlantUML toolchain.

pub mod config;

mod error;
mod export;

pub use taguml_core::{kind, model, record};

pub use error::TagumlError;

use log::{debug, info, trace};

use taguml_core::model::DiagramModel;
use taguml_parser::error::Diagnostic;

use config::AppConfig;

/// A parsed and grouped tag file, ready for diagram emission.
///
/// Produced by [`DiagramGenerator::parse`]; holds the grouped
/// [`DiagramModel`] together with the warnings for any lines the parser
/// had to skip.
#[derive(Debug)]
pub struct TagIndex {
    model: DiagramModel,
    warnings: Vec<Diagnostic>,
}

impl TagIndex {
    /// The grouped diagram model.
    pub fn model(&self) -> &DiagramModel {
        &self.model
    }

    /// Warnings for skipped lines, in input order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// Generator for PlantUML diagrams from tag listings.
///
/// This provides an API for processing a tag file through parsing,
/// grouping, and text emission.
///
/// # Examples
///
/// ```rust
/// use taguml::{DiagramGenerator, config::AppConfig};
///
/// let source = "foo\tmain.go\t/^func foo/;\"\tf\n";
///
/// // With custom config
/// let config = AppConfig::default();
/// let generator = DiagramGenerator::new(config);
///
/// // Parse tag text into a grouped index
/// let index = generator.parse(source);
///
/// // Emit PlantUML source text
/// let diagram = generator.render_function_diagram(&index);
/// assert!(diagram.starts_with("@startuml"));
///
/// // Or use default config
/// let generator = DiagramGenerator::default();
/// ```
#[derive(Default)]
pub struct DiagramGenerator {
    config: AppConfig,
}

impl DiagramGenerator {
    /// Create a new diagram generator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse tag text into a grouped [`TagIndex`].
    ///
    /// Parsing never fails: malformed lines are skipped and reported as
    /// warnings on the returned index, and records with kinds that have
    /// no diagram representation are dropped during grouping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taguml::DiagramGenerator;
    ///
    /// let generator = DiagramGenerator::default();
    /// let index = generator.parse("Point\tpoint.go\t/^type Point/;\"\ts\n");
    ///
    /// assert!(index.model().classes().contains_key("Point"));
    /// assert!(index.warnings().is_empty());
    /// ```
    pub fn parse(&self, source: &str) -> TagIndex {
        info!("Parsing tag file");

        let (records, warnings) = taguml_parser::parse(source).into_parts();
        debug!(records = records.len(), warnings = warnings.len(); "Tag file parsed");

        let model =
            DiagramModel::from_records(records, self.config.grouping().default_package());
        trace!(model:?; "Diagram model");

        TagIndex { model, warnings }
    }

    /// Emit the function call diagram as PlantUML source text.
    ///
    /// Nodes are grouped by defining file or enclosing scope depending
    /// on configuration; call edges come from `calls:` extension fields.
    /// Output is deterministic: elements appear in the first-seen order
    /// of the tag file.
    pub fn render_function_diagram(&self, index: &TagIndex) -> String {
        info!("Rendering function diagram");
        let text = export::function_diagram(index.model(), &self.config);
        debug!(bytes = text.len(); "Function diagram rendered");
        text
    }

    /// Emit the class/package structure diagram as PlantUML source text.
    ///
    /// One package block per namespace, one class block per struct or
    /// class with methods and fields nested inside, and global variables
    /// as top-level elements. Same determinism guarantee as
    /// [`render_function_diagram`](Self::render_function_diagram).
    pub fn render_class_diagram(&self, index: &TagIndex) -> String {
        info!("Rendering class diagram");
        let text = export::class_diagram(index.model(), &self.config);
        debug!(bytes = text.len(); "Class diagram rendered");
        text
    }
}
