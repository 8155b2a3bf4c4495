//! The diagram model: insertion-ordered grouping of tag records.
//!
//! [`DiagramModel`] is the intermediate accumulator between parsing and
//! text emission. It groups records by kind and scope in one pass and is
//! discarded after the diagram is written; nothing here is persisted.
//!
//! All groupings use [`IndexMap`]/[`IndexSet`], so every element keeps the
//! first-seen order of the input file. Repeated runs over identical input
//! therefore produce identical iteration order, which the emitters rely on
//! for byte-identical output.

use indexmap::{IndexMap, IndexSet};
use log::{debug, trace};

use crate::{
    kind::TagKind,
    record::{Scope, TagRecord},
};

/// A node of the function diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionNode {
    file: String,
    scope: Option<String>,
    calls: Vec<String>,
}

impl FunctionNode {
    /// The defining source file.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The enclosing scope name, if the record carried one.
    pub fn scope_name(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Deduplicated callee names, in first-seen order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

/// Methods and fields collected under one class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassEntry {
    methods: IndexMap<String, Option<String>>,
    fields: IndexSet<String>,
}

impl ClassEntry {
    /// Method names mapped to their optional signatures, in first-seen
    /// order. Duplicate method names keep the first signature.
    pub fn methods(&self) -> &IndexMap<String, Option<String>> {
        &self.methods
    }

    /// Field names in first-seen order.
    pub fn fields(&self) -> &IndexSet<String> {
        &self.fields
    }
}

/// Classes and free functions collected under one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageEntry {
    classes: IndexSet<String>,
    functions: IndexSet<String>,
}

impl PackageEntry {
    /// Class names defined in this package, in first-seen order.
    pub fn classes(&self) -> &IndexSet<String> {
        &self.classes
    }

    /// Free function names defined in this package, in first-seen order.
    pub fn functions(&self) -> &IndexSet<String> {
        &self.functions
    }
}

/// One-pass grouping of tag records by kind and scope.
///
/// Built by [`DiagramModel::from_records`]; every record maps to exactly
/// one diagram element. Records of [`TagKind::Other`] are dropped here,
/// which is what makes unknown kinds non-fatal for the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramModel {
    functions: IndexMap<String, FunctionNode>,
    classes: IndexMap<String, ClassEntry>,
    packages: IndexMap<String, PackageEntry>,
    globals: IndexSet<String>,
}

impl DiagramModel {
    /// Group records into a diagram model.
    ///
    /// `default_package` names the namespace for records that carry no
    /// package scope.
    ///
    /// Placement rules:
    ///
    /// - Callable records with a type scope become methods of that class;
    ///   all other callables are free functions of their package. Every
    ///   callable also becomes a function-diagram node.
    /// - Fields require a type scope; a field without one has no owning
    ///   class and is dropped.
    /// - Duplicate callable names keep the first-seen defining file and
    ///   merge their callee lists.
    pub fn from_records(
        records: impl IntoIterator<Item = TagRecord>,
        default_package: &str,
    ) -> Self {
        let mut model = Self::default();

        for record in records {
            model.insert(record, default_package);
        }

        debug!(
            functions = model.functions.len(),
            classes = model.classes.len(),
            packages = model.packages.len(),
            globals = model.globals.len();
            "Diagram model built"
        );

        model
    }

    /// Function-diagram nodes keyed by name, in first-seen order.
    pub fn functions(&self) -> &IndexMap<String, FunctionNode> {
        &self.functions
    }

    /// Class entries keyed by name, in first-seen order.
    pub fn classes(&self) -> &IndexMap<String, ClassEntry> {
        &self.classes
    }

    /// Package entries keyed by name, in first-seen order.
    pub fn packages(&self) -> &IndexMap<String, PackageEntry> {
        &self.packages
    }

    /// Global variable names, in first-seen order.
    pub fn globals(&self) -> &IndexSet<String> {
        &self.globals
    }

    fn insert(&mut self, record: TagRecord, default_package: &str) {
        match record.kind() {
            TagKind::Package => {
                self.packages.entry(record.name().to_string()).or_default();
            }
            TagKind::Class => self.insert_class(&record, default_package),
            TagKind::Function | TagKind::Method => {
                self.insert_callable(&record, default_package);
            }
            TagKind::Field => self.insert_field(&record),
            TagKind::Variable => {
                self.globals.insert(record.name().to_string());
            }
            TagKind::Other => {
                trace!(name = record.name(); "Skipping tag without diagram representation");
            }
        }
    }

    fn insert_class(&mut self, record: &TagRecord, default_package: &str) {
        let package = match record.scope() {
            Some(Scope::Package(name)) => name.as_str(),
            _ => default_package,
        };
        self.packages
            .entry(package.to_string())
            .or_default()
            .classes
            .insert(record.name().to_string());
        self.classes.entry(record.name().to_string()).or_default();
    }

    fn insert_callable(&mut self, record: &TagRecord, default_package: &str) {
        let node = self
            .functions
            .entry(record.name().to_string())
            .or_insert_with(|| FunctionNode {
                file: record.file().to_string(),
                scope: record.scope().map(|scope| scope.name().to_string()),
                calls: Vec::new(),
            });
        for callee in record.calls() {
            if !node.calls.iter().any(|known| known == callee) {
                node.calls.push(callee.clone());
            }
        }

        match record.scope() {
            Some(Scope::Type(owner)) => {
                self.classes
                    .entry(owner.clone())
                    .or_default()
                    .methods
                    .entry(record.name().to_string())
                    .or_insert_with(|| record.signature().map(str::to_string));
            }
            Some(Scope::Package(package)) => {
                self.packages
                    .entry(package.clone())
                    .or_default()
                    .functions
                    .insert(record.name().to_string());
            }
            None => {
                self.packages
                    .entry(default_package.to_string())
                    .or_default()
                    .functions
                    .insert(record.name().to_string());
            }
        }
    }

    fn insert_field(&mut self, record: &TagRecord) {
        match record.scope() {
            Some(Scope::Type(owner)) => {
                self.classes
                    .entry(owner.clone())
                    .or_default()
                    .fields
                    .insert(record.name().to_string());
            }
            _ => {
                trace!(name = record.name(); "Dropping field without an owning type scope");
            }
        }
    }
}
