//! Option name resolution
//!
//! Order lines only carry option ids. Names come from one batch lookup
//! (`GET /options?ids=`) per rendered list.

use serde::Serialize;
use shared::models::{NO_OPTION, OptionName, OptionSet, OrderLine, UNRESOLVED_OPTION};
use std::collections::{HashMap, HashSet};

/// id → display name map from a batch lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionNames(HashMap<i64, String>);

impl OptionNames {
    /// Distinct option ids referenced by `lines`, in first-seen order
    pub fn collect_ids<'a>(lines: impl IntoIterator<Item = &'a OrderLine>) -> Vec<i64> {
        let mut seen = HashSet::new();
        lines
            .into_iter()
            .flat_map(|line| line.option_number.iter())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Name for `id`, or the unresolved placeholder
    pub fn name(&self, id: i64) -> &str {
        self.0.get(&id).map(String::as_str).unwrap_or(UNRESOLVED_OPTION)
    }

    /// Comma-separated names, or "No option" for an empty set
    pub fn label_for(&self, options: &OptionSet) -> String {
        if options.is_empty() {
            return NO_OPTION.to_string();
        }
        options
            .iter()
            .map(|id| self.name(id))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<OptionName>> for OptionNames {
    fn from(names: Vec<OptionName>) -> Self {
        Self(
            names
                .into_iter()
                .map(|n| (n.id, n.option_details))
                .collect(),
        )
    }
}
