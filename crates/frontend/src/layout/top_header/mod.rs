//! TopHeader component - application top bar with the sidebar toggle,
//! title and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{end_session, use_auth};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (_, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"AACEAC Employee Tracker"</span>
            </div>

            <div class="top-header__actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        log::debug!("logout requested");
                        end_session(set_auth_state);
                    }
                >
                    {icon("log-out")}
                    " Logout"
                </Button>
            </div>
        </div>
    }
}
