//! PlantUML text emission.
//!
//! Both emitters walk the insertion-ordered [`DiagramModel`] exactly
//! once, so the output reproduces the first-seen order of the tag file
//! and identical input yields byte-identical text.
//!
//! [`DiagramModel`]: taguml_core::model::DiagramModel

mod class;
mod function;
mod writer;

pub(crate) use class::class_diagram;
pub(crate) use function::function_diagram;

use std::borrow::Cow;

/// Quote a name for PlantUML unless it is a plain identifier.
///
/// File paths used as package labels contain `/` and `.`, which PlantUML
/// would otherwise parse as structure.
fn puml_name(name: &str) -> Cow<'_, str> {
    let plain = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{name}\""))
    }
}
