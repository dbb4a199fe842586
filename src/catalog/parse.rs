use std::{path::Path, sync::LazyLock};

use regex::Regex;

use crate::{
    catalog::definition::ParameterDefinition,
    foundation::error::{RigError, RigResult},
};

const NUM: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^\s*(?:[-*•]\s*)?(?P<id>[A-Za-z_][\w.]*)\s*(?:[—–:-]+\s*)?\[\s*(?P<min>{NUM})\s*,\s*(?P<max>{NUM})\s*\](?:\s*\((?P<paren>[^)]*)\))?(?:\s*[—–-]+\s*(?P<note>.*?))?\s*$"
    );
    Regex::new(&pattern).expect("catalog line pattern is valid")
});

static DEFAULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)default\s*[:=]?\s*(?P<value>{NUM})"))
        .expect("default pattern is valid")
});

/// Note fragments that mark a parameter as stepped rather than continuous.
const CATEGORICAL_MARKERS: &[&str] = &[
    "toggle",
    "switch",
    "on/off",
    "discrete",
    "categorical",
    "enum",
    "stepped",
    "step-wise",
    "stepwise",
    "integer",
];

/// Result of parsing a free-text catalog.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    /// Parsed definitions in catalog order, one per id.
    pub definitions: Vec<ParameterDefinition>,
    /// Non-blank lines that did not match the declaration grammar.
    pub dropped_lines: usize,
    /// Ids declared more than once (each listed once).
    pub duplicate_ids: Vec<String>,
}

/// Parse a human-authored catalog, one declaration per line:
///
/// ```text
/// - ParamAngleX — [-30, 30] (default 0) — head yaw
/// - ParamMouthForm — [0, 3] — mouth shape, discrete
/// ```
///
/// Non-matching lines are skipped and counted. A repeated id replaces the
/// earlier definition's values but keeps its position.
pub fn parse_catalog(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some(def) = parse_line(line) else {
            report.dropped_lines += 1;
            continue;
        };
        match report.definitions.iter_mut().find(|d| d.id == def.id) {
            Some(existing) => {
                if !report.duplicate_ids.contains(&def.id) {
                    report.duplicate_ids.push(def.id.clone());
                }
                *existing = def;
            }
            None => report.definitions.push(def),
        }
    }

    tracing::debug!(
        definitions = report.definitions.len(),
        dropped = report.dropped_lines,
        duplicates = report.duplicate_ids.len(),
        "parsed parameter catalog"
    );
    report
}

/// Read a catalog text file from disk and parse it with [`parse_catalog`].
pub fn parse_catalog_file(path: &Path) -> RigResult<ParseReport> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| RigError::catalog(format!("read '{}': {e}", path.display())))?;
    Ok(parse_catalog(&text))
}

/// Parse a single declaration line.
pub fn parse_line(line: &str) -> Option<ParameterDefinition> {
    let caps = LINE_RE.captures(line)?;
    let min: f64 = caps["min"].parse().ok()?;
    let max: f64 = caps["max"].parse().ok()?;
    if !min.is_finite() || !max.is_finite() {
        return None;
    }

    let paren = caps.name("paren").map_or("", |m| m.as_str().trim());
    let note = caps.name("note").map_or("", |m| m.as_str().trim());

    let default = DEFAULT_RE
        .captures(paren)
        .and_then(|c| c["value"].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    let mut def = ParameterDefinition::new(&caps["id"], min, max, default).with_note(note);
    def.is_categorical = is_categorical_note(note) || is_categorical_note(paren);
    Some(def)
}

fn is_categorical_note(note: &str) -> bool {
    let lower = note.to_lowercase();
    CATEGORICAL_MARKERS.iter().any(|m| lower.contains(m))
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/parse.rs"]
mod tests;
