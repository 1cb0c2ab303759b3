//! Five-stage narrative synthesis.
//!
//! Each stage picks its template independently from the resolved selection.
//! Every branch has a fallback, so no stage can fail or come out empty.

use crate::catalog::Catalogs;
use crate::display::ResolvedSelection;
use crate::types::StapleTemperature;

/// Final-touch paragraph used when no arrangement is selected.
pub const PLAIN_FINAL_TOUCH: &str =
    "最後は器との調和を考え、静かに整えます。出来立ての香りを大切に、そっと食卓へ運びましょう。";

/// Closing paragraph shared by every recipe.
pub const COMPLETION: &str = "感謝を込めて盛り付けます。台所から食卓へ、温かな記憶を繋ぐ時間。さあ、冷めないうちに「いただきます」のご挨拶を。";

/// Kind of main ingredient, used to pick the preparation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainKind {
    Meat,
    Seafood,
    Egg,
    Tofu,
    Other,
}

impl MainKind {
    /// Classify a main ingredient name by keyword.
    ///
    /// Checked in priority order Meat, Seafood, Egg, Tofu; the first match
    /// wins, so a name containing both 肉 and 卵 is Meat.
    pub fn classify(main: &str) -> Self {
        if main.contains('肉') {
            MainKind::Meat
        } else if main.contains('魚') || main.contains("シーフード") {
            MainKind::Seafood
        } else if main.contains('卵') {
            MainKind::Egg
        } else if main.contains("豆腐") {
            MainKind::Tofu
        } else {
            MainKind::Other
        }
    }
}

fn vegetable_prep(vegetables: &[String]) -> String {
    if vegetables.is_empty() {
        return String::new();
    }
    format!(
        "{}は食感を活かすように丁寧に切り分けましょう。",
        vegetables.join("、")
    )
}

pub fn preparation(resolved: &ResolvedSelection) -> String {
    let main = resolved.main.as_str();
    let kind = MainKind::classify(main);
    tracing::debug!(main, ?kind, "classified main ingredient");

    let veg = vegetable_prep(&resolved.vegetables);
    match kind {
        MainKind::Meat => {
            format!("{main}は室温に戻してから、表面の水分を拭き取ると旨味が逃げませんよ。{veg}")
        }
        MainKind::Seafood => {
            format!("{main}は下処理を丁寧に行い、臭みがないよう準備しましょうね。{veg}")
        }
        MainKind::Egg => format!(
            "卵はボウルに割り、白身を切るようにリズムよく割りほぐすのが、ふんわり仕上げるコツです。{veg}"
        ),
        MainKind::Tofu => {
            format!("豆腐は水気をしっかり切って、崩れないよう愛しむように切り分けましょう。{veg}")
        }
        // The generic template names the vegetables itself
        MainKind::Other => {
            let subject = std::iter::once(main)
                .chain(resolved.vegetables.iter().map(String::as_str))
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("と");
            format!("{subject}を準備しましょう。食材の顔ぶれを見るだけで、ワクワクしますね。")
        }
    }
}

pub fn cooking(resolved: &ResolvedSelection, catalogs: &Catalogs) -> String {
    let method = resolved.method.as_str();

    if resolved.staple_temperature == StapleTemperature::Cold {
        return format!(
            "食材を「{method}」で仕上げた後は、氷水でキュッと締めて、涼やかな一皿に仕立てましょう。瑞々しい輝きが、食卓に涼を呼び込みますよ。"
        );
    }

    match catalogs.sensory_phrase(method) {
        Some(phrase) => phrase.to_string(),
        None => {
            tracing::debug!(method, "no sensory phrase for method, using generic template");
            format!("{method}を丁寧に進めていきましょう。")
        }
    }
}

pub fn flavor(resolved: &ResolvedSelection) -> String {
    let staple_text = if resolved.has_staple() {
        format!(
            "これを{}に合わせれば、ボリューム満点の一品になりますよ。",
            resolved.staple
        )
    } else {
        String::new()
    };

    let umami = &resolved.umami;
    let salt = &resolved.salt;
    match resolved.staple_temperature {
        StapleTemperature::Cold => format!(
            "{umami}の冷たいお出汁に、{salt}をキリッと効かせて。{staple_text}素材の芯まで冷えゆく心地よさを大切にしましょう。"
        ),
        StapleTemperature::Hot => format!(
            "{umami}の深いコクに、{salt}で味の輪郭を整えます。{staple_text}味が食材の奥まで染み込んでいく様子を想像してくださいね。"
        ),
    }
}

pub fn final_touch(resolved: &ResolvedSelection) -> String {
    if resolved.arrangements.is_empty() {
        return PLAIN_FINAL_TOUCH.to_string();
    }

    let descriptions = resolved
        .arrangements
        .iter()
        .map(|a| format!("{}の{}", a.label, a.option))
        .collect::<Vec<_>>()
        .join("や");
    format!(
        "仕上げに{descriptions}を添えます。香りが静かに広がり、彩りが加わることで、素材たちがより輝き始めます。"
    )
}

/// All five paragraphs in stage order.
pub fn compose_steps(resolved: &ResolvedSelection, catalogs: &Catalogs) -> [String; 5] {
    [
        preparation(resolved),
        cooking(resolved, catalogs),
        flavor(resolved),
        final_touch(resolved),
        COMPLETION.to_string(),
    ]
}
