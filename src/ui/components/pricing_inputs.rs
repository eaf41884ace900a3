use dioxus::prelude::*;

use crate::{
    domain::{
        PricingPolicy, MINIMUM_SALES_PROFIT_RANGE, PROFIT_MARGIN_RANGE, SALES_DISCOUNT_RANGE,
        TAX_RATE,
    },
    ui::{
        components::number_field::{CheckboxField, NumberField, PercentSlider},
        form::CostForm,
        theme,
    },
};

/// One text field of [`CostForm`] as it appears on screen.
#[derive(Clone, Copy)]
pub struct CostField {
    /// Heading rendered above this field, opening a new group.
    pub group: Option<&'static str>,
    pub label: &'static str,
    pub step: f64,
    pub help: Option<&'static str>,
    pub get: fn(&CostForm) -> &String,
    pub get_mut: fn(&mut CostForm) -> &mut String,
}

pub const COST_FIELDS: [CostField; 8] = [
    CostField {
        group: None,
        label: "Plant Cost ($)",
        step: 0.5,
        help: Some("Wholesale cost or cost to grow this plant"),
        get: |f| &f.plant_cost,
        get_mut: |f| &mut f.plant_cost,
    },
    CostField {
        group: Some("Materials & Care"),
        label: "Pot/Container ($)",
        step: 0.25,
        help: None,
        get: |f| &f.pot_cost,
        get_mut: |f| &mut f.pot_cost,
    },
    CostField {
        group: None,
        label: "Soil/Growing Medium ($)",
        step: 0.25,
        help: None,
        get: |f| &f.soil_cost,
        get_mut: |f| &mut f.soil_cost,
    },
    CostField {
        group: None,
        label: "Fertilizer/Care Products ($)",
        step: 0.25,
        help: None,
        get: |f| &f.fertilizer_cost,
        get_mut: |f| &mut f.fertilizer_cost,
    },
    CostField {
        group: None,
        label: "Packaging/Shipping Materials ($)",
        step: 0.25,
        help: Some("Box, padding, protective materials for shipping"),
        get: |f| &f.packaging_cost,
        get_mut: |f| &mut f.packaging_cost,
    },
    CostField {
        group: None,
        label: "Other Materials ($)",
        step: 0.25,
        help: None,
        get: |f| &f.other_materials_cost,
        get_mut: |f| &mut f.other_materials_cost,
    },
    CostField {
        group: Some("Time Investment"),
        label: "Care/Prep Hours",
        step: 0.25,
        help: None,
        get: |f| &f.care_hours,
        get_mut: |f| &mut f.care_hours,
    },
    CostField {
        group: None,
        label: "Your Hourly Rate ($)",
        step: 5.0,
        help: None,
        get: |f| &f.hourly_rate,
        get_mut: |f| &mut f.hourly_rate,
    },
];

/// Cost fields, the three pricing sliders and the GST toggle. Shared by the
/// calculator and the defaults editor.
#[component]
pub fn PricingInputs(cost_form: Signal<CostForm>, policy: Signal<PricingPolicy>) -> Element {
    let mut cost_form = cost_form;
    let mut policy = policy;
    let form = cost_form();
    let current_policy = policy();
    let tax_label = format!("Add GST ({:.0}%)", TAX_RATE * 100.0);

    let fields = COST_FIELDS
        .iter()
        .map(|field| (*field, (field.get)(&form).clone()))
        .collect::<Vec<_>>();

    rsx! {
        for (field, value) in fields {
            if let Some(group) = field.group {
                h3 { class: theme::SECTION_TITLE, "{group}" }
            }
            NumberField {
                label: field.label,
                value: value,
                step: field.step,
                help: field.help,
                on_input: move |value| cost_form.with_mut(|f| *(field.get_mut)(f) = value),
            }
        }

        h3 { class: theme::SECTION_TITLE, "Pricing Settings" }
        PercentSlider {
            label: "Desired Profit Margin",
            value: current_policy.profit_margin_pct,
            range: PROFIT_MARGIN_RANGE,
            on_change: move |value| policy.with_mut(|p| p.profit_margin_pct = value),
        }
        PercentSlider {
            label: "Sales Discount",
            value: current_policy.sales_discount_pct,
            range: SALES_DISCOUNT_RANGE,
            help: Some("Discount applied to final price"),
            on_change: move |value| policy.with_mut(|p| p.sales_discount_pct = value),
        }
        PercentSlider {
            label: "Minimum Sales Profit",
            value: current_policy.minimum_sales_profit_pct,
            range: MINIMUM_SALES_PROFIT_RANGE,
            help: Some("Lowest profit margin allowed during sales"),
            on_change: move |value| policy.with_mut(|p| p.minimum_sales_profit_pct = value),
        }
        CheckboxField {
            label: tax_label,
            checked: current_policy.include_tax,
            on_change: move |checked| policy.with_mut(|p| p.include_tax = checked),
        }
    }
}
