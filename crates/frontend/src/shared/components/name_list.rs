//! List page for the lookup tables that only carry a name.

use crate::shared::api_client::use_api_client;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::ListPagination;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{confirm, delete_prompt, SearchInput};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::common::{EntityId, NameDto, NamedEntity};
use contracts::shared::api_error::{ApiError, Mutation};
use contracts::shared::list_state::VALIDATION_ERROR_TTL_MS;
use leptos::prelude::*;

/// `controller` pages the lookup table; mutations go to its resource.
#[component]
pub fn NameListPage<T>(
    controller: ListController<T>,
    /// Page title, e.g. "Subcities"
    title: &'static str,
    /// Capitalised singular, e.g. "Subcity"
    label: &'static str,
    page_id: &'static str,
) -> impl IntoView
where
    T: NamedEntity + Clone + Send + Sync + 'static,
{
    let client = StoredValue::new(use_api_client());
    let resource = controller.resource();
    let form = RwSignal::new(None::<NameDto>);
    // Only open/close and the edited id re-render the modal, not typing
    let form_target = Memo::new(move |_| form.with(|f| f.as_ref().map(|dto| dto.id)));

    controller.reload();

    let open_edit = move |item: &T| form.set(Some(NameDto::for_edit(item)));
    let close_form = Callback::new(move |_| form.set(None));

    let save = move || {
        let Some(dto) = form.get_untracked() else {
            return;
        };
        if let Err(message) = dto.validate(label) {
            controller.show_error(message, VALIDATION_ERROR_TTL_MS);
            return;
        }
        let dto = dto.normalized();
        let client = client.get_value();
        let mutation = if dto.id.is_some() {
            Mutation::Update
        } else {
            Mutation::Create
        };
        controller.run_mutation(mutation, async move {
            match dto.id {
                Some(id) => client.update(resource, id, &dto).await?,
                None => client.create(resource, &dto).await?,
            }
            form.try_set(None);
            Ok::<(), ApiError>(())
        });
    };

    let delete = move |id: EntityId| {
        if !confirm(&delete_prompt(resource.singular())) {
            return;
        }
        let client = client.get_value();
        controller.run_mutation(Mutation::Delete, async move {
            client.delete(resource, id).await
        });
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader title=title>
                <button class="button button--primary" on:click=move |_| form.set(Some(NameDto::default()))>
                    {icon("plus")}
                    {format!("Add {}", label)}
                </button>
                <button class="button button--secondary" on:click=move |_| controller.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <SearchInput on_change=Callback::new(move |s: String| controller.set_search(s)) />

            <ErrorBanner message=Signal::derive(move || {
                if form_target.get().is_some() { None } else { controller.error() }
            }) />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || controller.items().into_iter().map(|item| {
                            let id = item.id();
                            let name = item.name().to_string();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{name}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--icon" title="Edit" on:click=move |_| open_edit(&item)>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete(id)>
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <ListPagination controller=controller />

            {move || form_target.get().map(|editing| {
                let title = match editing {
                    Some(_) => format!("Edit {}", label),
                    None => format!("Add {}", label),
                };
                view! {
                    <Modal title=title on_close=close_form>
                        <ErrorBanner message=Signal::derive(move || controller.error()) />
                        <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            save();
                        }>
                            <div class="form-group">
                                <label for="name">"Name"</label>
                                <input
                                    type="text"
                                    id="name"
                                    prop:value=move || form.with(|f| f.as_ref().map(|d| d.name.clone()).unwrap_or_default())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| if let Some(dto) = f { dto.name = value });
                                    }
                                />
                            </div>
                            <div class="form-actions">
                                <button type="submit" class="button button--primary">"Save"</button>
                                <button type="button" class="button button--secondary" on:click=move |_| close_form.run(())>
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
