use std::fmt::Write as _;

use crate::catalog::definition::ParameterDefinition;

/// Render definitions as the glossary handed to the plan generator.
///
/// One line per definition: `- <id> [<min>, <max>] (toggle-like)? (— <note>)?`.
pub fn render_glossary(defs: &[ParameterDefinition]) -> String {
    let mut out = String::new();
    for d in defs {
        let _ = write!(out, "- {} [{}, {}]", d.id, d.min, d.max);
        if d.is_categorical {
            out.push_str(" (toggle-like)");
        }
        if !d.note.is_empty() {
            let _ = write!(out, " — {}", d.note);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/glossary.rs"]
mod tests;
