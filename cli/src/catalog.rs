//! Print the selectable options of a catalog.

use anyhow::Result;
use obabaz_core::{Catalogs, ComposerConfig, StapleTemperature};

pub fn render_catalog(catalogs: &Catalogs) -> String {
    let mut out = String::new();

    let lists = [
        ("メイン", &catalogs.main),
        ("野菜（3つまで）", &catalogs.vegetables),
        ("主食", &catalogs.staples),
        ("調理法", &catalogs.methods),
        ("うまみ", &catalogs.umami),
        ("塩味", &catalogs.salt),
    ];
    for (label, options) in lists {
        out.push_str(&format!("{}: {}\n", label, options.join(" / ")));
    }
    out.push_str(&format!(
        "仕立て: {} / {}\n",
        StapleTemperature::Hot.label(),
        StapleTemperature::Cold.label()
    ));

    out.push_str("\nアレンジ:\n");
    for category in &catalogs.arrangements {
        out.push_str(&format!(
            "  {} {} [{}]: {}\n",
            category.icon,
            category.label,
            category.id,
            category.options.join(" / ")
        ));
    }

    out
}

pub fn print_catalog(config: &ComposerConfig) -> Result<()> {
    let catalogs = config.catalogs()?;
    print!("{}", render_catalog(&catalogs));
    Ok(())
}
