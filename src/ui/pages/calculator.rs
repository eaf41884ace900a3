use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        compare, compute, pricing_summary, AppState, ComparisonResult, CompetitorEntry,
        CostInputs, PricingPolicy, PricingResult,
    },
    ui::{
        components::{
            comparison_table::ComparisonTable,
            kpi_card::KpiCard,
            margin_badge::MarginBadge,
            number_field::NumberField,
            pricing_inputs::PricingInputs,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        form::{parse_competitors, CompetitorForm, CostForm, FormError},
        theme,
    },
};

const COMPETITOR_PLACEHOLDERS: [&str; 3] = ["Local Garden Center", "Big Box Store", "Online Retailer"];

/// Everything the page renders, derived from the current field values.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub costs: CostInputs,
    pub policy: PricingPolicy,
    pub result: PricingResult,
}

/// Runs the whole pipeline for the current fields. Nothing is cached between
/// calls.
pub fn evaluate(form: &CostForm, policy: &PricingPolicy) -> Result<Evaluation, FormError> {
    let costs = form.parse()?;
    let result = compute(&costs, policy)?;
    tracing::debug!(
        total_cost = result.total_cost,
        final_price = result.final_price,
        margin = result.actual_margin_pct,
        "recomputed price"
    );
    Ok(Evaluation {
        costs,
        policy: policy.clone(),
        result,
    })
}

pub fn evaluate_competitors(
    slots: &[CompetitorForm],
    our_price: f64,
) -> Result<Option<ComparisonResult>, FormError> {
    let entries: Vec<CompetitorEntry> = parse_competitors(slots)?;
    Ok(compare(&entries, our_price))
}

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let layout = state.with(|st| st.layout);
    let mut cost_form = use_signal(|| state.with(|st| CostForm::from_inputs(&st.default_costs)));
    let mut policy = use_signal(|| state.with(|st| st.default_policy.clone()));
    let competitors = use_signal(|| vec![CompetitorForm::default(); COMPETITOR_PLACEHOLDERS.len()]);

    let evaluation = evaluate(&cost_form(), &policy());
    if let Err(err) = &evaluation {
        tracing::debug!("inputs rejected: {err}");
    }

    let comparison = evaluation
        .as_ref()
        .ok()
        .map(|eval| evaluate_competitors(&competitors(), eval.result.final_price));

    let summary = evaluation.as_ref().ok().map(|eval| {
        let comparison = comparison
            .as_ref()
            .and_then(|outcome| outcome.as_ref().ok())
            .and_then(|outcome| outcome.as_ref());
        pricing_summary(&eval.costs, &eval.policy, &eval.result, comparison)
    });

    let on_save_defaults = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| match evaluate(&cost_form(), &policy()) {
            Ok(Evaluation { costs, policy, .. }) => {
                state.with_mut(|st| {
                    st.default_costs = costs;
                    st.default_policy = policy;
                });
                if persist_user_state(&state, toasts.clone()) {
                    push_toast(toasts.clone(), ToastKind::Success, "Saved current inputs as defaults.");
                }
            }
            Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
        }
    };

    let on_restore = {
        let state = state.clone();
        move |_| {
            let (costs, saved_policy) =
                state.with(|st| (st.default_costs.clone(), st.default_policy.clone()));
            cost_form.set(CostForm::from_inputs(&costs));
            policy.set(saved_policy);
        }
    };

    rsx! {
        div { class: theme::STACK,
            div { class: "{theme::calculator_layout(layout)}",
                section { class: theme::PANEL,
                    h2 { class: theme::PANEL_TITLE, "💰 Cost Inputs" }
                    PricingInputs { cost_form, policy }

                    div { class: "button-row",
                        button { class: theme::BTN_PRIMARY, onclick: on_save_defaults, "Save as Defaults" }
                        button { class: theme::BTN_SECONDARY, onclick: on_restore, "Restore Defaults" }
                    }
                }

                section { class: theme::PANEL,
                    h2 { class: theme::PANEL_TITLE, "💡 Pricing Results" }
                    {match &evaluation {
                        Ok(eval) => rsx! { PricingResults { evaluation: eval.clone() } },
                        Err(err) => rsx! {
                            div { class: theme::NOTICE_BAD, "⛔ {err}" }
                        },
                    }}
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "🔍 Market Comparison" }
                p { class: theme::MUTED, "Compare your price with local competitors" }
                CompetitorInputs { slots: competitors }
                {match comparison {
                    Some(Ok(Some(result))) => rsx! { ComparisonView { result } },
                    Some(Err(err)) => rsx! {
                        div { class: theme::NOTICE_BAD, "⛔ {err}" }
                    },
                    _ => rsx! {},
                }}
            }

            if let Some(summary) = summary {
                section { class: theme::PANEL,
                    h2 { class: theme::PANEL_TITLE, "📋 Pricing Summary" }
                    label { class: theme::LABEL, "Copy this summary:" }
                    textarea {
                        class: "summary-text",
                        readonly: true,
                        value: "{summary}",
                    }
                }
            }
        }
    }
}

#[component]
fn PricingResults(evaluation: Evaluation) -> Element {
    let Evaluation {
        costs,
        policy,
        result,
    } = evaluation;

    let tax_suffix = if policy.include_tax { " (inc GST)" } else { "" };
    let final_label = format!("Final Selling Price{tax_suffix}");
    let final_value = money(result.final_price);
    let final_caption = format!("Achieves {:.1}% profit margin", result.actual_margin_pct);

    let discount_lines = result.discount_amount().map(|amount| {
        (
            money(result.list_price),
            format!("Discount ({}%)", policy.sales_discount_pct),
            format!("-{}", money(amount)),
        )
    });
    let floor_note = result
        .min_allowable_price
        .filter(|_| result.floor_applied)
        .map(|floor| {
            format!(
                "Discount held at {} to keep a {}% minimum margin.",
                money(floor),
                policy.minimum_sales_profit_pct
            )
        });
    let show_tax_split = policy.include_tax && !policy.has_discount();
    let hours = format!("Time ({}h)", costs.care_hours);
    let time_detail = format!(
        "Time ({}h @ {}/h)",
        costs.care_hours,
        money(costs.hourly_rate)
    );

    rsx! {
        h3 { class: theme::SECTION_TITLE, "Cost Breakdown" }
        FlowRow { label: "Plant Cost".to_string(), value: money(costs.plant_cost) }
        FlowRow { label: "Materials".to_string(), value: money(result.materials_cost) }
        FlowRow { label: hours, value: money(result.time_cost) }
        FlowRow { label: "Total Cost".to_string(), value: money(result.total_cost), total: true }

        details {
            summary { "📋 Detailed Cost Breakdown" }
            FlowRow { label: "Plant".to_string(), value: money(costs.plant_cost) }
            FlowRow { label: "Pot/Container".to_string(), value: money(costs.pot_cost) }
            FlowRow { label: "Soil/Growing Medium".to_string(), value: money(costs.soil_cost) }
            FlowRow { label: "Fertilizer/Care".to_string(), value: money(costs.fertilizer_cost) }
            FlowRow { label: "Packaging/Shipping".to_string(), value: money(costs.packaging_cost) }
            if costs.other_materials_cost > 0.0 {
                FlowRow { label: "Other Materials".to_string(), value: money(costs.other_materials_cost) }
            }
            FlowRow { label: time_detail, value: money(result.time_cost) }
        }

        h3 { class: theme::SECTION_TITLE, "Recommended Price" }
        if let Some((list, discount_label, discount_value)) = discount_lines {
            FlowRow { label: "List Price".to_string(), value: list }
            FlowRow { label: discount_label, value: discount_value }
        }
        if let Some(note) = floor_note {
            p { class: theme::HELP, "{note}" }
        }
        if show_tax_split {
            FlowRow { label: "Price before GST".to_string(), value: money(result.base_price) }
            FlowRow { label: "GST (10%)".to_string(), value: money(result.tax_amount) }
        }

        div { class: "kpi-grid",
            KpiCard {
                title: final_label,
                value: final_value,
                description: Some(final_caption),
            }
            KpiCard {
                title: "Actual Profit".to_string(),
                value: money(result.actual_profit),
                delta: Some(result.actual_margin_pct),
            }
        }
        MarginBadge {
            margin_pct: result.actual_margin_pct,
            minimum_sales_profit_pct: policy.minimum_sales_profit_pct,
        }
    }
}

#[component]
fn FlowRow(label: String, value: String, #[props(default)] total: bool) -> Element {
    rsx! {
        div {
            class: if total { "flow-row flow-total" } else { "flow-row" },
            span { "{label}" }
            span { "{value}" }
        }
    }
}

#[component]
fn CompetitorInputs(slots: Signal<Vec<CompetitorForm>>) -> Element {
    let mut slots = slots;
    let rendered_slots = slots()
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            let name_label = format!("Competitor {} Name", index + 1);
            let placeholder = COMPETITOR_PLACEHOLDERS.get(index).copied().unwrap_or_default();
            (index, name_label, placeholder, slot)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "competitor-grid",
            for (index, name_label, placeholder, slot) in rendered_slots {
                div {
                    div { class: theme::FIELD,
                        label { class: theme::LABEL, "{name_label}" }
                        input {
                            class: theme::INPUT,
                            placeholder: placeholder,
                            value: slot.name.clone(),
                            oninput: move |evt| slots.with_mut(|all| all[index].name = evt.value()),
                        }
                    }
                    NumberField {
                        label: "Their Price ($)",
                        value: slot.price.clone(),
                        step: 0.5,
                        on_input: move |value| slots.with_mut(|all| all[index].price = value),
                    }
                }
            }
        }
    }
}

#[component]
fn ComparisonView(result: ComparisonResult) -> Element {
    let our_price = result
        .ranking
        .iter()
        .find(|row| row.is_ours)
        .map(|row| row.price)
        .unwrap_or_default();
    let (notice_class, notice) = if result.competitive {
        (
            theme::NOTICE_GOOD,
            format!(
                "✅ Your price ({}) is competitive with average competitor price ({})",
                money(our_price),
                money(result.average)
            ),
        )
    } else {
        (
            theme::NOTICE_WARN,
            format!(
                "⚠️ Your price is {} above average competitor price. Consider if premium quality justifies this.",
                money(result.difference)
            ),
        )
    };

    rsx! {
        h3 { class: theme::SECTION_TITLE, "Price Comparison" }
        ComparisonTable { rows: result.ranking.clone() }
        div { class: notice_class, "{notice}" }
    }
}

fn money(value: f64) -> String {
    format!("${value:.2}")
}
