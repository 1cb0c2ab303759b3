//! Dish title synthesis.

use crate::display::ResolvedSelection;

/// Join two title parts with "と", or return whichever one is non-empty.
fn join_pair(first: &str, second: &str) -> String {
    match (first.is_empty(), second.is_empty()) {
        (false, false) => format!("{first}と{second}"),
        (false, true) => first.to_string(),
        _ => second.to_string(),
    }
}

/// Compose the one-line dish title.
///
/// With a staple the title leads with the main ingredient and names the
/// staple; without one it leads with the vegetables and names the method.
/// An empty main with no vegetables yields an empty subject, which is accepted.
pub fn compose_title(resolved: &ResolvedSelection) -> String {
    let veg_part = resolved.vegetables.join("と");
    let main_part = resolved.main.as_str();

    if resolved.has_staple() {
        let base = join_pair(main_part, &veg_part);
        format!("{base}で仕立てる、絶品{staple}", staple = resolved.staple)
    } else {
        let base = join_pair(&veg_part, main_part);
        format!("素材の旨味を閉じ込めた、{base}の{method}", method = resolved.method)
    }
}
