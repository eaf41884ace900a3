use dioxus::prelude::*;

use crate::ui::theme;

/// Free-text amount input. Parsing happens in the page so a half-typed value
/// never blocks the keyboard.
#[component]
pub fn NumberField(
    label: &'static str,
    value: String,
    step: f64,
    help: Option<&'static str>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: theme::FIELD,
            label { class: theme::LABEL, "{label}" }
            input {
                class: theme::INPUT,
                r#type: "number",
                inputmode: "decimal",
                min: "0",
                step: "{step}",
                value: value,
                oninput: move |evt| on_input.call(evt.value()),
            }
            if let Some(help) = help {
                p { class: theme::HELP, "{help}" }
            }
        }
    }
}

/// Whole-percent slider bounded by `(min, max, step)`.
#[component]
pub fn PercentSlider(
    label: &'static str,
    value: f64,
    range: (u8, u8, u8),
    help: Option<&'static str>,
    on_change: EventHandler<f64>,
) -> Element {
    let (min, max, step) = range;
    let caption = format!("{label}: {value:.0}%");
    rsx! {
        div {
            class: theme::FIELD,
            label { class: theme::LABEL, "{caption}" }
            input {
                class: theme::SLIDER,
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<f64>() {
                        on_change.call(parsed);
                    }
                },
            }
            if let Some(help) = help {
                p { class: theme::HELP, "{help}" }
            }
        }
    }
}

#[component]
pub fn CheckboxField(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: theme::CHECKBOX_ROW,
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| on_change.call(evt.checked()),
            }
            span { "{label}" }
        }
    }
}
