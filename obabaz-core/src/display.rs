//! Resolution of selections into the display strings used downstream.

use crate::catalog::Catalogs;
use crate::types::{Choice, SelectionState, StapleTemperature, NO_STAPLE};

/// Placeholder for main, staple, method, umami and salt.
pub const GENERIC_PLACEHOLDER: &str = "お好みのもの";

/// Placeholder for a custom vegetable with no text.
pub const VEGETABLE_PLACEHOLDER: &str = "お野菜";

/// Placeholder for a custom arrangement option with no text.
pub const ARRANGEMENT_PLACEHOLDER: &str = "お好み";

impl Choice {
    /// The string used downstream: the catalog value as-is, or the custom
    /// text falling back to `placeholder` when it is empty.
    pub fn resolve<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Choice::Catalog(value) => value.as_str(),
            Choice::Custom(text) if text.is_empty() => placeholder,
            Choice::Custom(text) => text.as_str(),
        }
    }
}

/// Resolve a raw wizard value and its "other" text.
pub fn resolve(value: &str, other_text: &str, placeholder: &str) -> String {
    Choice::from_raw(value, other_text)
        .resolve(placeholder)
        .to_string()
}

/// A selected arrangement with its catalog label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArrangement {
    pub category_id: String,
    pub label: String,
    pub option: String,
}

/// Every field of a selection resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection {
    pub main: String,
    pub vegetables: Vec<String>,
    pub staple: String,
    pub staple_temperature: StapleTemperature,
    pub method: String,
    pub umami: String,
    pub salt: String,
    /// Selected arrangements in catalog declaration order.
    pub arrangements: Vec<ResolvedArrangement>,
}

impl ResolvedSelection {
    pub fn resolve(selection: &SelectionState, catalogs: &Catalogs) -> Self {
        for id in selection.arrangements.keys() {
            if catalogs.arrangement(id).is_none() {
                tracing::warn!(category_id = %id, "skipping arrangement not in catalog");
            }
        }

        let arrangements = catalogs
            .arrangements
            .iter()
            .filter_map(|category| {
                let choice = selection.arrangements.get(&category.id)?;
                Some(ResolvedArrangement {
                    category_id: category.id.clone(),
                    label: category.label.clone(),
                    option: choice.resolve(ARRANGEMENT_PLACEHOLDER).to_string(),
                })
            })
            .collect();

        Self {
            main: selection.main.resolve(GENERIC_PLACEHOLDER).to_string(),
            vegetables: selection
                .vegetables
                .iter()
                .map(|v| v.resolve(VEGETABLE_PLACEHOLDER).to_string())
                .collect(),
            staple: selection.staple.resolve(GENERIC_PLACEHOLDER).to_string(),
            staple_temperature: selection.staple_temperature,
            method: selection.method.resolve(GENERIC_PLACEHOLDER).to_string(),
            umami: selection.umami.resolve(GENERIC_PLACEHOLDER).to_string(),
            salt: selection.salt.resolve(GENERIC_PLACEHOLDER).to_string(),
            arrangements,
        }
    }

    /// True when a staple is picked and it is not the "no staple" entry.
    pub fn has_staple(&self) -> bool {
        !self.staple.is_empty() && self.staple != NO_STAPLE
    }
}
