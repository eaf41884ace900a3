use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{compute, AppState, CostInputs, PricingPolicy},
    ui::{
        components::{
            pricing_inputs::PricingInputs,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        form::{CostForm, FormError},
        theme,
    },
    util::{
        logging::LOG_ENV,
        persistence::settings_path,
        version::{version_label, APP_NAME},
    },
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut cost_form = use_signal(|| state.with(|st| CostForm::from_inputs(&st.default_costs)));
    let mut policy = use_signal(|| state.with(|st| st.default_policy.clone()));

    let settings_location = settings_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable on this system".to_string());
    let about = format!("{APP_NAME} {}", version_label());

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| match parse_defaults(&cost_form(), &policy()) {
            Ok((costs, parsed_policy)) => {
                state.with_mut(|st| {
                    st.default_costs = costs;
                    st.default_policy = parsed_policy;
                });
                if persist_user_state(&state, toasts.clone()) {
                    push_toast(toasts.clone(), ToastKind::Success, "Updated default inputs.");
                }
            }
            Err(err) => push_toast(toasts.clone(), ToastKind::Error, err.to_string()),
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.reset_defaults());
            let (costs, defaults) =
                state.with(|st| (st.default_costs.clone(), st.default_policy.clone()));
            cost_form.set(CostForm::from_inputs(&costs));
            policy.set(defaults);
            if persist_user_state(&state, toasts.clone()) {
                push_toast(toasts.clone(), ToastKind::Info, "Restored factory defaults.");
            }
        }
    };

    rsx! {
        div { class: theme::STACK,
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Default Inputs" }
                p { class: theme::MUTED, "The calculator starts from these values." }

                PricingInputs { cost_form, policy }

                div { class: "button-row",
                    button { class: theme::BTN_PRIMARY, onclick: on_apply, "Apply" }
                    button { class: theme::BTN_SECONDARY, onclick: on_reset, "Reset Defaults" }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "About" }
                p { "{about}" }
                p { class: theme::MUTED, "Settings file: {settings_location}" }
                p { class: theme::MUTED, "Set {LOG_ENV}=debug to log every recalculation." }
            }
        }
    }
}

fn parse_defaults(
    form: &CostForm,
    policy: &PricingPolicy,
) -> Result<(CostInputs, PricingPolicy), FormError> {
    let costs = form.parse()?;
    // Defaults the calculator could not price are refused here.
    compute(&costs, policy)?;
    Ok((costs, policy.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricingError;

    #[test]
    fn defaults_must_be_valid() {
        let form = CostForm::from_inputs(&CostInputs::default());
        let policy = PricingPolicy {
            minimum_sales_profit_pct: 120.0,
            ..PricingPolicy::default()
        };
        assert!(matches!(
            parse_defaults(&form, &policy),
            Err(FormError::Pricing(PricingError::MarginOutOfRange {
                field: "minimum sales profit",
                ..
            }))
        ));
        assert!(parse_defaults(&form, &PricingPolicy::default()).is_ok());
    }

    #[test]
    fn unpriceable_defaults_are_refused() {
        let mut form = CostForm::from_inputs(&CostInputs::default());
        form.care_hours = "1e200".to_string();
        form.hourly_rate = "1e200".to_string();
        assert!(matches!(
            parse_defaults(&form, &PricingPolicy::default()),
            Err(FormError::Pricing(PricingError::ComputationOverflow { .. }))
        ));
    }
}
