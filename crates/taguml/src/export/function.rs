//! Function diagram emission.
//!
//! One `entity` node per callable record, grouped into `package` blocks
//! by defining file or enclosing scope, followed by one `-->` edge per
//! resolvable call relationship.

use indexmap::IndexMap;
use log::trace;

use taguml_core::model::{DiagramModel, FunctionNode};

use crate::config::{AppConfig, FunctionGrouping};

use super::{puml_name, writer::PumlWriter};

pub(crate) fn function_diagram(model: &DiagramModel, config: &AppConfig) -> String {
    let mut writer = PumlWriter::new();
    writer.line("@startuml");

    match config.grouping().functions() {
        FunctionGrouping::File => grouped(&mut writer, model, |node| node.file()),
        FunctionGrouping::Scope => {
            let default_package = config.grouping().default_package();
            grouped(&mut writer, model, |node| {
                node.scope_name().unwrap_or(default_package)
            });
        }
        FunctionGrouping::None => {
            for name in model.functions().keys() {
                writer.line(&format!("entity {name}"));
            }
        }
    }

    emit_edges(&mut writer, model);

    writer.line("@enduml");
    writer.finish()
}

/// Emit nodes inside one `package` block per group key, keeping the
/// first-seen order of both groups and members.
fn grouped<'m>(
    writer: &mut PumlWriter,
    model: &'m DiagramModel,
    key: impl Fn(&'m FunctionNode) -> &'m str,
) {
    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for (name, node) in model.functions() {
        groups.entry(key(node)).or_default().push(name.as_str());
    }

    for (group, names) in groups {
        writer.open(&format!("package {}", puml_name(group)));
        for name in names {
            writer.line(&format!("entity {name}"));
        }
        writer.close();
    }
}

/// One edge per caller/callee pair, in declaration order. Callees that
/// are not nodes of this diagram are dropped, as are self-calls.
fn emit_edges(writer: &mut PumlWriter, model: &DiagramModel) {
    for (caller, node) in model.functions() {
        for callee in node.calls() {
            if callee == caller {
                continue;
            }
            if !model.functions().contains_key(callee.as_str()) {
                trace!(caller = caller.as_str(), callee = callee.as_str(); "Dropping edge to unknown callee");
                continue;
            }
            writer.line(&format!("{caller} --> {callee}"));
        }
    }
}
