use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only while a session exists, `fallback` otherwise.
#[component]
pub fn RequireAuth<F, IV>(fallback: F, children: ChildrenFn) -> impl IntoView
where
    F: Fn() -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
