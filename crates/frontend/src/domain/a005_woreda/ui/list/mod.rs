use crate::domain::a005_woreda::ui::details::WoredaDetails;
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
use contracts::domain::a005_woreda::aggregate::{Woreda, WoredaDto};
use contracts::domain::a006_organizational_unit::details::NOT_AVAILABLE;
use contracts::domain::common::Resource;
use contracts::shared::api_error::Mutation;
use leptos::prelude::*;

#[component]
pub fn WoredaList() -> impl IntoView {
    let client = StoredValue::new(use_api_client());
    let controller = ListController::<Woreda>::remote(client.get_value(), Resource::Woredas);
    // Form open with this starting value
    let editing = RwSignal::new(None::<WoredaDto>);

    controller.reload();

    let close_form = Callback::new(move |_| editing.set(None));
    let on_saved = Callback::new(move |_| {
        editing.set(None);
        controller.mutation_succeeded();
    });

    let delete = move |woreda: &Woreda| {
        if !confirm(&delete_prompt(Resource::Woredas.singular())) {
            return;
        }
        let client = client.get_value();
        let id = woreda.id;
        controller.run_mutation(Mutation::Delete, async move {
            client.delete(Resource::Woredas, id).await
        });
    };

    view! {
        <PageFrame page_id="a005_woreda--list" category=PAGE_CAT_LIST>
            <PageHeader title="Woredas">
                <button class="button button--primary" on:click=move |_| editing.set(Some(WoredaDto::default()))>
                    {icon("plus")}
                    "Add Woreda"
                </button>
                <button class="button button--secondary" on:click=move |_| controller.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <SearchInput on_change=Callback::new(move |s: String| controller.set_search(s)) />

            <ErrorBanner message=Signal::derive(move || controller.error()) />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Subcity"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || controller.items().into_iter().map(|woreda| {
                            let dto = WoredaDto::for_edit(&woreda);
                            let name = woreda.name.clone();
                            let subcity = woreda
                                .subcity_name
                                .clone()
                                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{name}</td>
                                    <td class="table__cell">{subcity}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(dto.clone()))>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete(&woreda)>
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

            {move || editing.get().map(|initial| {
                let title = if initial.id.is_some() { "Edit Woreda" } else { "Add Woreda" };
                view! {
                    <Modal title=title on_close=close_form>
                        <WoredaDetails initial=initial on_saved=on_saved on_cancel=close_form />
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
