use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::AppState;
use crate::ui::{
    components::{number_field::CheckboxField, toast::ToastMessage},
    theme,
};
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let layout = state.with(|st| st.layout);
    let footer = format!("{APP_NAME} {}", version_label());

    let on_toggle_layout = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_: bool| {
            state.with_mut(|st| st.layout = st.layout.toggled());
            persist_user_state(&state, toasts.clone());
        }
    };

    rsx! {
        div {
            header { class: "app-header",
                div {
                    h1 { class: "app-title", "🌱 Nursery Pricing Calculator" }
                    p { class: "app-tagline", "Calculate optimal pricing for your nursery products with built-in profit margins" }
                }
                nav { class: "nav",
                    NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "Calculator" }
                    NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    CheckboxField {
                        label: "🖥️ Desktop View".to_string(),
                        checked: layout.is_desktop(),
                        on_change: on_toggle_layout,
                    }
                }
            }
            main {
                {children}
            }
            footer { class: "footer", "{footer}" }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
