use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Wizard value that stands for "something not in the list".
pub const OTHER: &str = "その他";

/// Staple value meaning the dish is served without a staple.
pub const NO_STAPLE: &str = "無し（おかずのみ）";

/// Maximum number of vegetables a selection may carry.
pub const MAX_VEGETABLES: usize = 3;

/// One field of the selection: either an exact catalog entry or a freeform
/// entry typed by the user after picking "その他".
///
/// `Catalog("")` means nothing has been picked yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Catalog(String),
    Custom(String),
}

impl Default for Choice {
    fn default() -> Self {
        Choice::Catalog(String::new())
    }
}

impl Choice {
    pub fn catalog(value: impl Into<String>) -> Self {
        Choice::Catalog(value.into())
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Choice::Custom(text.into())
    }

    /// Build a choice from the wizard's raw value plus its "other" text box.
    pub fn from_raw(value: &str, other_text: &str) -> Self {
        if value == OTHER {
            Choice::Custom(other_text.to_string())
        } else {
            Choice::Catalog(value.to_string())
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Choice::Catalog(value.to_string())
    }
}

/// Serving temperature of the staple.
///
/// Deserializes from either the snake_case name or the wizard's own label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StapleTemperature {
    #[default]
    #[serde(alias = "温製")]
    Hot,
    #[serde(alias = "冷製")]
    Cold,
}

impl StapleTemperature {
    /// Label shown in the wizard and written into the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            StapleTemperature::Hot => "温製",
            StapleTemperature::Cold => "冷製",
        }
    }
}

/// Everything the wizard has collected by the time the recipe is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default)]
    pub main: Choice,
    #[serde(default)]
    pub vegetables: Vec<Choice>,
    #[serde(default)]
    pub staple: Choice,
    #[serde(default)]
    pub staple_temperature: StapleTemperature,
    #[serde(default)]
    pub method: Choice,
    #[serde(default)]
    pub umami: Choice,
    #[serde(default)]
    pub salt: Choice,
    /// Arrangement category id -> chosen option. Absent means not selected.
    #[serde(default)]
    pub arrangements: BTreeMap<String, Choice>,
}

impl SelectionState {
    /// Toggle a vegetable on or off. A new vegetable is only added while fewer
    /// than three are selected. Returns whether the vegetable ends up selected.
    pub fn toggle_vegetable(&mut self, vegetable: Choice) -> bool {
        if let Some(pos) = self.vegetables.iter().position(|v| *v == vegetable) {
            self.vegetables.remove(pos);
            return false;
        }
        if self.vegetables.len() < MAX_VEGETABLES {
            self.vegetables.push(vegetable);
            return true;
        }
        false
    }

    /// Select (or replace) the option for an arrangement category.
    pub fn select_arrangement(&mut self, category_id: &str, option: Choice) {
        self.arrangements.insert(category_id.to_string(), option);
    }

    pub fn remove_arrangement(&mut self, category_id: &str) -> Option<Choice> {
        self.arrangements.remove(category_id)
    }

    pub fn reset(&mut self) {
        *self = SelectionState::default();
    }

    /// Check the vegetable invariants. The composer itself never rejects a
    /// selection; this is for callers that want to.
    pub fn validate(&self) -> Result<(), SelectionError> {
        if self.vegetables.len() > MAX_VEGETABLES {
            return Err(SelectionError::TooManyVegetables {
                count: self.vegetables.len(),
                max: MAX_VEGETABLES,
            });
        }
        for (i, veg) in self.vegetables.iter().enumerate() {
            if self.vegetables[..i].contains(veg) {
                let name = match veg {
                    Choice::Catalog(v) => v.clone(),
                    Choice::Custom(t) => format!("{OTHER}: {t}"),
                };
                return Err(SelectionError::DuplicateVegetable(name));
            }
        }
        Ok(())
    }
}

/// The wizard's flat form data, with a separate "other" text box per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSelection {
    pub main: String,
    pub main_other: String,
    pub vegetables: Vec<String>,
    pub vegetables_other: String,
    pub staple: String,
    pub staple_other: String,
    pub staple_temperature: StapleTemperature,
    pub method: String,
    pub method_other: String,
    pub umami: String,
    pub umami_other: String,
    pub salt: String,
    pub salt_other: String,
    pub arrangements: BTreeMap<String, String>,
    pub arrangements_other: BTreeMap<String, String>,
}

impl RawSelection {
    /// Fold every "その他" value together with its text box into a [`Choice`].
    pub fn normalize(&self) -> SelectionState {
        let arrangements = self
            .arrangements
            .iter()
            .map(|(id, option)| {
                let other = self
                    .arrangements_other
                    .get(id)
                    .map(String::as_str)
                    .unwrap_or("");
                (id.clone(), Choice::from_raw(option, other))
            })
            .collect();

        SelectionState {
            main: Choice::from_raw(&self.main, &self.main_other),
            vegetables: self
                .vegetables
                .iter()
                .map(|v| Choice::from_raw(v, &self.vegetables_other))
                .collect(),
            staple: Choice::from_raw(&self.staple, &self.staple_other),
            staple_temperature: self.staple_temperature,
            method: Choice::from_raw(&self.method, &self.method_other),
            umami: Choice::from_raw(&self.umami, &self.umami_other),
            salt: Choice::from_raw(&self.salt, &self.salt_other),
            arrangements,
        }
    }
}

/// The five narrative paragraphs, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeStage {
    Preparation,
    Cooking,
    Flavor,
    FinalTouch,
    Completion,
}

impl NarrativeStage {
    pub const ALL: [NarrativeStage; 5] = [
        NarrativeStage::Preparation,
        NarrativeStage::Cooking,
        NarrativeStage::Flavor,
        NarrativeStage::FinalTouch,
        NarrativeStage::Completion,
    ];

    pub fn index(&self) -> usize {
        match self {
            NarrativeStage::Preparation => 0,
            NarrativeStage::Cooking => 1,
            NarrativeStage::Flavor => 2,
            NarrativeStage::FinalTouch => 3,
            NarrativeStage::Completion => 4,
        }
    }
}

/// Generated recipe, ready for display and for the copy-prompt button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDocument {
    pub title: String,
    pub description: String,
    pub steps: [String; 5],
    pub tip: String,
    /// Prompt text for an external generative AI chat, copied verbatim.
    pub prompt: String,
}

impl RecipeDocument {
    pub fn step(&self, stage: NarrativeStage) -> &str {
        &self.steps[stage.index()]
    }
}
