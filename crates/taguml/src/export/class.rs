//! Class diagram emission.
//!
//! One `package` block per namespace, one `class` block per struct or
//! class with its methods and fields nested inside, a synthetic
//! `<package>_globals` class for free functions, and global variables
//! as top-level standalone elements.

use indexmap::IndexSet;

use taguml_core::model::{ClassEntry, DiagramModel};

use crate::config::AppConfig;

use super::{puml_name, writer::PumlWriter};

pub(crate) fn class_diagram(model: &DiagramModel, config: &AppConfig) -> String {
    let mut writer = PumlWriter::new();
    writer.line("@startuml");

    if let Some(size) = config.style().class_attribute_icon_size() {
        writer.line(&format!("skinparam classAttributeIconSize {size}"));
    }

    let mut packaged: IndexSet<&str> = IndexSet::new();
    for (package, entry) in model.packages() {
        writer.open(&format!("package {}", puml_name(package)));

        for class in entry.classes() {
            packaged.insert(class.as_str());
            class_block(&mut writer, class, model.classes().get(class.as_str()), config);
        }

        if !entry.functions().is_empty() {
            writer.open(&format!("class {}", puml_name(&format!("{package}_globals"))));
            for function in entry.functions() {
                writer.line(&format!("+ {function}()"));
            }
            writer.close();
        }

        writer.close();
    }

    // A class named only as a scope owner still gets a block, outside
    // any package.
    for (class, entry) in model.classes() {
        if !packaged.contains(class.as_str()) {
            class_block(&mut writer, class, Some(entry), config);
        }
    }

    for global in model.globals() {
        writer.line(&format!("entity {global}"));
    }

    writer.line("@enduml");
    writer.finish()
}

fn class_block(
    writer: &mut PumlWriter,
    name: &str,
    entry: Option<&ClassEntry>,
    config: &AppConfig,
) {
    writer.open(&format!("class {}", puml_name(name)));

    if let Some(entry) = entry {
        for (method, signature) in entry.methods() {
            let line = match signature {
                Some(signature) if config.style().show_signatures() => {
                    format!("+ {method}{signature}")
                }
                _ => format!("+ {method}()"),
            };
            writer.line(&line);
        }
        for field in entry.fields() {
            writer.line(&format!("- {field}"));
        }
    }

    writer.close();
}
