use super::traits::TableDisplayable;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::pagination_controls::ListPagination;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

/// Picker over any [`ListController`]
///
/// - click selects a row, double click confirms it
/// - `initial_selected_id` highlights the current value on open
#[component]
pub fn GenericAggregatePicker<T>(
    controller: ListController<T>,
    #[prop(optional_no_strip)]
    initial_selected_id: Option<EntityId>,
    on_confirm: Callback<T>,
    on_cancel: Callback<()>,
) -> impl IntoView
where
    T: TableDisplayable + Clone + Send + Sync + 'static,
{
    let selected = RwSignal::new(None::<T>);
    let selected_id = move || {
        selected
            .with(|s| s.as_ref().map(|item| item.id()))
            .or(initial_selected_id)
    };

    controller.reload();

    let headers = T::headers();

    let handle_confirm = move |_| {
        if let Some(item) = selected.get_untracked() {
            on_confirm.run(item);
        }
    };

    view! {
        <div class="picker-container">
            <div class="picker-toolbar">
                <SearchInput on_change=Callback::new(move |s: String| controller.set_search(s)) />
            </div>

            <ErrorBanner message=Signal::derive(move || controller.error()) />

            <div class="picker-content">
                {move || {
                    let items = controller.items();
                    if controller.is_loading() && items.is_empty() {
                        view! { <div class="picker-loading">"Loading..."</div> }.into_any()
                    } else if items.is_empty() {
                        view! { <div class="picker-empty">"No matching records"</div> }.into_any()
                    } else {
                        view! {
                            <table class="picker-table">
                                <thead>
                                    <tr>
                                        {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {items.into_iter().map(|item| {
                                        let item_id = item.id();
                                        let item_for_click = item.clone();
                                        let item_for_dblclick = item.clone();
                                        view! {
                                            <tr
                                                class="picker-row"
                                                class:selected=move || selected_id() == Some(item_id)
                                                on:click=move |_| selected.set(Some(item_for_click.clone()))
                                                on:dblclick=move |_| on_confirm.run(item_for_dblclick.clone())
                                            >
                                                {item.cells().into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>

            <ListPagination controller=controller />

            <div class="picker-actions">
                <button
                    class="button button--primary"
                    on:click=handle_confirm
                    disabled=move || selected.with(|s| s.is_none())
                >
                    "Select"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
