//! Recipe-writing prompt for an external generative AI chat.

use crate::display::ResolvedSelection;

/// Prompt name, used when the prompt is logged.
pub const RECIPE_PROMPT_NAME: &str = "recipe";

/// Render the prompt the user copies into a generative AI chat.
///
/// The section layout is relied on by the copy-prompt affordance, so keep
/// headers and directive lines stable.
pub fn render_recipe_prompt(resolved: &ResolvedSelection) -> String {
    let vegetables = resolved.vegetables.join("、");
    let arrangements = resolved
        .arrangements
        .iter()
        .map(|a| a.option.as_str())
        .collect::<Vec<_>>()
        .join("、");

    format!(
        r#"あなたは経験豊富な料理人です。提供された食材と条件をもとに、作る人の心に寄り添う、温かみのある丁寧な言葉遣いでレシピを執筆してください。

【材料】
- メイン：{main}
- 野菜：{vegetables}
- 主食：{staple}（{temperature}）

【調理方針】
- 調理法：{method}
- 味のベース：{umami}
- 仕上げの味：{salt}
- アレンジ：{arrangements}

【要望】
- ステップごとの丁寧な解説を含めてください。
- プロならではのコツや、美味しくなる一工夫を添えてください。
- 読んだ人が温かい気持ちになれるような文章で記述してください。"#,
        main = resolved.main,
        vegetables = vegetables,
        staple = resolved.staple,
        temperature = resolved.staple_temperature.label(),
        method = resolved.method,
        umami = resolved.umami,
        salt = resolved.salt,
        arrangements = arrangements
    )
}
