use dioxus::prelude::*;

use crate::{
    domain::{classify_margin, MarginBand},
    ui::theme,
};

#[component]
pub fn MarginBadge(margin_pct: f64, minimum_sales_profit_pct: f64) -> Element {
    let band = classify_margin(margin_pct, minimum_sales_profit_pct);
    let text = match band {
        MarginBand::MeetsTarget => format!("{margin_pct:.1}% margin {}", band.label()),
        _ => format!("{margin_pct:.1}% margin ({})", band.label()),
    };

    rsx! {
        div {
            class: "{theme::margin_band(band)}",
            "{theme::margin_band_icon(band)} {text}"
        }
    }
}
