//! Prompt templates for external generative AI services.

pub mod recipe;

pub use recipe::{render_recipe_prompt, RECIPE_PROMPT_NAME};
