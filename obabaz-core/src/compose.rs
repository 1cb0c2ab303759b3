//! Recipe assembly: runs every stage over one resolved selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalogs;
use crate::display::ResolvedSelection;
use crate::error::ComposeError;
use crate::narrative::compose_steps;
use crate::prompts::{render_recipe_prompt, RECIPE_PROMPT_NAME};
use crate::tips::pick_tip;
use crate::title::compose_title;
use crate::types::{RecipeDocument, SelectionState};

fn describe(method: &str) -> String {
    format!("選び抜かれた食材と{method}の技がひとつになった一皿。心まで温まる、今日だけの特別な時間をどうぞ。")
}

/// Generate a recipe document from a finished selection.
///
/// Apart from the tip, which is drawn from `rng`, the output depends only on
/// `selection` and `catalogs`.
pub fn generate<R: Rng>(
    selection: &SelectionState,
    catalogs: &Catalogs,
    rng: &mut R,
) -> Result<RecipeDocument, ComposeError> {
    let resolved = ResolvedSelection::resolve(selection, catalogs);

    let title = compose_title(&resolved);
    let steps = compose_steps(&resolved, catalogs);
    let tip = pick_tip(&catalogs.tips, rng)?.to_string();
    let prompt = render_recipe_prompt(&resolved);

    tracing::debug!(
        title = %title,
        prompt_name = RECIPE_PROMPT_NAME,
        prompt_len = prompt.len(),
        "recipe generated"
    );

    Ok(RecipeDocument {
        title,
        description: describe(&resolved.method),
        steps,
        tip,
        prompt,
    })
}

/// Generate with a tip draw seeded from `seed`, for reproducible output.
pub fn generate_with_seed(
    selection: &SelectionState,
    catalogs: &Catalogs,
    seed: u64,
) -> Result<RecipeDocument, ComposeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(selection, catalogs, &mut rng)
}

/// Generate with a tip drawn from the thread-local generator.
pub fn generate_random(
    selection: &SelectionState,
    catalogs: &Catalogs,
) -> Result<RecipeDocument, ComposeError> {
    let mut rng = rand::rng();
    generate(selection, catalogs, &mut rng)
}
