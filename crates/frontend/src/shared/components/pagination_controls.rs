use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use contracts::shared::paging::showing_label;
use leptos::prelude::*;

/// Footer of a paginated table: "Showing X to Y of N entries" plus
/// Previous/Next and an optional page size selector.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// Total count of items on the server
    #[prop(into)]
    total_count: Signal<usize>,

    /// Rows on the current page
    #[prop(into)]
    shown: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    /// Shows the page size selector when set
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50]);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    showing_label(current_page.get(), page_size.get(), shown.get(), total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=move || !has_previous.get()
                title="Previous"
            >
                {icon("chevron-left")}
                "Previous"
            </button>
            <span class="pagination-page">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=move || !has_next.get()
                title="Next"
            >
                "Next"
                {icon("chevron-right")}
            </button>
            {on_page_size_change.map(|on_change| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse() {
                            on_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}

/// [`PaginationControls`] wired to a [`ListController`].
#[component]
pub fn ListPagination<T>(controller: ListController<T>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let state = controller.state;

    view! {
        <PaginationControls
            current_page=Signal::derive(move || state.with(|s| s.page))
            total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
            has_previous=Signal::derive(move || state.with(|s| s.has_previous()))
            has_next=Signal::derive(move || state.with(|s| s.has_next()))
            total_count=Signal::derive(move || state.with(|s| s.total_count))
            shown=Signal::derive(move || state.with(|s| s.items.len()))
            page_size=Signal::derive(move || state.with(|s| s.page_size))
            on_page_change=Callback::new(move |page| controller.set_page(page))
            on_page_size_change=Callback::new(move |size| controller.set_page_size(size))
        />
    }
}
