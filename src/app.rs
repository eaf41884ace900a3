use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_hook({
        let mut state = state.clone();
        let toasts = toasts.clone();
        move || match load_persisted_state() {
            Ok(Some(saved)) => {
                tracing::info!("loaded saved defaults");
                let rejected = state.with_mut(|st| st.apply_persisted(saved));
                if rejected > 0 {
                    push_toast(
                        toasts,
                        ToastKind::Warning,
                        "Some saved defaults were invalid and have been reset.",
                    );
                }
            }
            Ok(None) => tracing::debug!("no saved settings, using factory defaults"),
            Err(err) => {
                tracing::warn!("discarding saved settings: {err}");
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    format!("Using factory defaults. {err}"),
                );
            }
        }
    });
    use_context_provider(|| state.clone());
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the current defaults and layout to disk. Failures are reported as
/// a toast; returns whether the write succeeded.
pub fn persist_user_state(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) -> bool {
    let snapshot = state.with(|st| st.to_persisted());
    match save_persisted_state(&snapshot) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("failed to persist settings: {err}");
            push_toast(toasts, ToastKind::Error, format!("Could not save settings: {err}"));
            false
        }
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
