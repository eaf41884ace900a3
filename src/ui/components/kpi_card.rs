use dioxus::prelude::*;

/// A headline number, optionally with a signed delta underneath.
#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    delta: Option<f64>,
) -> Element {
    let delta_view = delta.map(|delta| {
        let class = if delta >= 0.0 {
            "kpi-desc kpi-delta-up"
        } else {
            "kpi-desc kpi-delta-down"
        };
        (class, format!("{delta:.1}%"))
    });

    rsx! {
        div {
            class: "kpi-card",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some((class, text)) = delta_view {
                p { class: class, "{text}" }
            }
            if let Some(desc) = description {
                p { class: "kpi-desc", "{desc}" }
            }
        }
    }
}
