use std::collections::HashMap;

/// One rig parameter declared by the catalog.
///
/// Invariant: `min <= default <= max`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    /// Parameter id as the rig knows it (e.g. `ParamAngleX`).
    pub id: String,
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Rest value.
    pub default: f64,
    /// Discrete / toggle-like parameter; values are snapped to integers.
    pub is_categorical: bool,
    /// Free-text note from the catalog line.
    #[serde(default)]
    pub note: String,
}

impl ParameterDefinition {
    /// Continuous parameter with no note; bounds are reordered and the default clamped in.
    pub fn new(id: impl Into<String>, min: f64, max: f64, default: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let default = if default.is_finite() { default } else { 0.0 };
        Self {
            id: id.into(),
            min,
            max,
            default: default.clamp(min, max),
            is_categorical: false,
            note: String::new(),
        }
    }

    /// Mark the definition as categorical.
    pub fn categorical(mut self) -> Self {
        self.is_categorical = true;
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Clamp `value` into range, snapping categorical parameters to the nearest integer.
    ///
    /// Returns `None` for non-finite input.
    pub fn constrain(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let v = value.clamp(self.min, self.max);
        // A range holding no integer keeps the clamped value.
        if self.is_categorical && self.max.floor() >= self.min {
            // Rounding can leave the range when a bound is fractional.
            let snapped = v.round();
            if snapped > self.max {
                return Some(self.max.floor());
            }
            if snapped < self.min {
                return Some(self.min.ceil());
            }
            return Some(snapped);
        }
        Some(v)
    }
}

/// Id-indexed view over a definition list.
///
/// When the list repeats an id, the last occurrence wins.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    defs: Vec<ParameterDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the index over `defs`.
    pub fn new(defs: Vec<ParameterDefinition>) -> Self {
        let index = defs
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();
        Self { defs, index }
    }

    /// Keep at most `max` definitions, in catalog order.
    pub fn truncated(&self, max: usize) -> Self {
        Self::new(self.defs.iter().take(max).cloned().collect())
    }

    /// Definition for `id`, exact match.
    pub fn get(&self, id: &str) -> Option<&ParameterDefinition> {
        self.index.get(id).map(|&i| &self.defs[i])
    }

    /// `true` when `id` is declared.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// First declared id among `candidates`.
    pub fn first_present<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates.iter().copied().find(|id| self.contains(id))
    }

    /// Definitions in catalog order.
    pub fn definitions(&self) -> &[ParameterDefinition] {
        &self.defs
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// `true` when nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl From<Vec<ParameterDefinition>> for Catalog {
    fn from(defs: Vec<ParameterDefinition>) -> Self {
        Self::new(defs)
    }
}

impl From<&[ParameterDefinition]> for Catalog {
    fn from(defs: &[ParameterDefinition]) -> Self {
        Self::new(defs.to_vec())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/definition.rs"]
mod tests;
