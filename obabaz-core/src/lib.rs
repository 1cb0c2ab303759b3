pub mod catalog;
pub mod compose;
pub mod config;
pub mod display;
pub mod error;
pub mod narrative;
pub mod prompts;
pub mod tips;
pub mod title;
pub mod types;

pub use catalog::{ArrangementCategory, Catalogs};
pub use compose::{generate, generate_random, generate_with_seed};
pub use config::{ComposerConfig, ConfigError};
pub use display::{
    resolve, ResolvedArrangement, ResolvedSelection, ARRANGEMENT_PLACEHOLDER,
    GENERIC_PLACEHOLDER, VEGETABLE_PLACEHOLDER,
};
pub use error::{CatalogError, ComposeError, SelectionError};
pub use narrative::MainKind;
pub use title::compose_title;
pub use types::{
    Choice, NarrativeStage, RawSelection, RecipeDocument, SelectionState, StapleTemperature,
    MAX_VEGETABLES, NO_STAPLE, OTHER,
};
