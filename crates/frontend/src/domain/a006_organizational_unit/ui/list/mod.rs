use crate::domain::a006_organizational_unit::ui::details::OrganizationalUnitDetails;
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
use contracts::domain::a006_organizational_unit::aggregate::{
    OrganizationalUnit, OrganizationalUnitDraft,
};
use contracts::domain::a006_organizational_unit::details::{detail_rows, NOT_AVAILABLE};
use contracts::domain::common::Resource;
use contracts::shared::api_error::Mutation;
use leptos::prelude::*;

const COLUMN_COUNT: &str = "4";

#[component]
fn UnitDetailRows(unit: OrganizationalUnit) -> impl IntoView {
    view! {
        <tr class="table__row table__row--details">
            <td class="table__cell" colspan=COLUMN_COUNT>
                <dl class="details-list">
                    {detail_rows(&unit).into_iter().map(|row| view! {
                        <div class="details-list__row">
                            <dt>{row.label}</dt>
                            <dd>{row.value}</dd>
                        </div>
                    }).collect_view()}
                </dl>
            </td>
        </tr>
    }
}

#[component]
pub fn OrganizationalUnitList() -> impl IntoView {
    let client = StoredValue::new(use_api_client());
    let controller = ListController::<OrganizationalUnit>::remote(
        client.get_value(),
        Resource::OrganizationalUnits,
    );
    let editing = RwSignal::new(None::<OrganizationalUnitDraft>);

    controller.reload();

    let close_form = Callback::new(move |_| editing.set(None));
    let on_saved = Callback::new(move |_| {
        editing.set(None);
        controller.mutation_succeeded();
    });

    let delete = move |id| {
        if !confirm(&delete_prompt(Resource::OrganizationalUnits.singular())) {
            return;
        }
        let client = client.get_value();
        controller.run_mutation(Mutation::Delete, async move {
            client.delete(Resource::OrganizationalUnits, id).await
        });
    };

    view! {
        <PageFrame page_id="a006_organizational_unit--list" category=PAGE_CAT_LIST>
            <PageHeader title="Organizational Units" subtitle="Click a row to show its details">
                <button
                    class="button button--primary"
                    on:click=move |_| editing.set(Some(OrganizationalUnitDraft::default()))
                >
                    {icon("plus")}
                    "Add Organizational Unit"
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
                            <th class="table__header-cell">"Division"</th>
                            <th class="table__header-cell">"Parent"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || controller.items().into_iter().map(|unit| {
                            let id = unit.id;
                            let is_expanded = move || controller.expanded() == Some(id);
                            let draft = OrganizationalUnitDraft::from(&unit);
                            let division = unit.division_name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
                            let parent = unit.parent_name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
                            let details = unit.clone();
                            view! {
                                <tr
                                    class="table__row table__row--clickable"
                                    class:table__row--selected=is_expanded
                                    on:click=move |_| controller.toggle_expanded(id)
                                >
                                    <td class="table__cell">
                                        <span class="table__expander" class:table__expander--open=is_expanded>
                                            {icon("chevron-right")}
                                        </span>
                                        {unit.name.clone()}
                                    </td>
                                    <td class="table__cell">{division}</td>
                                    <td class="table__cell">{parent}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                editing.set(Some(draft.clone()));
                                            }
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Delete"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete(id);
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                                <Show when=is_expanded>
                                    <UnitDetailRows unit=details.clone() />
                                </Show>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <ListPagination controller=controller />

            {move || editing.get().map(|initial| {
                let title = if initial.id.is_some() {
                    "Edit Organizational Unit"
                } else {
                    "Add Organizational Unit"
                };
                view! {
                    <Modal title=title on_close=close_form class="modal--wide">
                        <OrganizationalUnitDetails initial=initial on_saved=on_saved on_cancel=close_form />
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
