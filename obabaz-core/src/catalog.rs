//! Lookup tables supplied to the composer.
//!
//! The default catalog is embedded from `data/catalog.json` at compile time.
//! Deployments can load their own file with the same schema.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::OTHER;

/// An optional add-on category such as garnish or topping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrangementCategory {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub options: Vec<String>,
}

/// All constant tables the composer and the wizard read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogs {
    pub main: Vec<String>,
    pub vegetables: Vec<String>,
    pub staples: Vec<String>,
    pub methods: Vec<String>,
    pub umami: Vec<String>,
    pub salt: Vec<String>,
    /// In declaration order; this order drives the final-touch and prompt output.
    pub arrangements: Vec<ArrangementCategory>,
    /// Cooking method -> sensory phrase.
    pub sensory: HashMap<String, String>,
    pub tips: Vec<String>,
}

static EMBEDDED: LazyLock<Catalogs> = LazyLock::new(|| {
    let json = include_str!("../data/catalog.json");
    Catalogs::from_json(json).expect("Failed to parse embedded catalog.json")
});

impl Catalogs {
    /// The catalog shipped with the crate.
    pub fn embedded() -> &'static Catalogs {
        &EMBEDDED
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalogs: Catalogs = serde_json::from_str(json)?;
        catalogs.validate()?;
        Ok(catalogs)
    }

    /// Read and validate a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalogs = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            arrangements = catalogs.arrangements.len(),
            tips = catalogs.tips.len(),
            "catalog loaded"
        );
        Ok(catalogs)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.tips.is_empty() {
            return Err(CatalogError::EmptyTipPool);
        }

        let lists = [
            ("main", &self.main),
            ("vegetables", &self.vegetables),
            ("staples", &self.staples),
            ("methods", &self.methods),
            ("umami", &self.umami),
            ("salt", &self.salt),
        ];
        for (name, options) in lists {
            if !options.iter().any(|o| o == OTHER) {
                return Err(CatalogError::MissingOtherOption(name.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for category in &self.arrangements {
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateArrangement(category.id.clone()));
            }
            if !category.options.iter().any(|o| o == OTHER) {
                return Err(CatalogError::MissingOtherOption(format!(
                    "arrangements.{}",
                    category.id
                )));
            }
        }

        Ok(())
    }

    pub fn arrangement(&self, id: &str) -> Option<&ArrangementCategory> {
        self.arrangements.iter().find(|c| c.id == id)
    }

    /// Sensory phrase for a cooking method, if the method is known.
    pub fn sensory_phrase(&self, method: &str) -> Option<&str> {
        self.sensory.get(method).map(String::as_str)
    }
}
