use crate::domain::a008_employee::ui::details::EmployeeDetails;
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
use contracts::domain::a006_organizational_unit::details::NOT_AVAILABLE;
use contracts::domain::a008_employee::aggregate::{Employee, EmployeeDto};
use contracts::domain::common::Resource;
use contracts::shared::api_error::Mutation;
use leptos::prelude::*;

#[component]
pub fn EmployeeList() -> impl IntoView {
    let client = StoredValue::new(use_api_client());
    let controller = ListController::<Employee>::remote(client.get_value(), Resource::Employees);
    let editing = RwSignal::new(None::<EmployeeDto>);

    controller.reload();

    let close_form = Callback::new(move |_| editing.set(None));
    let on_saved = Callback::new(move |_| {
        editing.set(None);
        controller.mutation_succeeded();
    });

    let delete = move |id| {
        if !confirm(&delete_prompt(Resource::Employees.singular())) {
            return;
        }
        let client = client.get_value();
        controller.run_mutation(Mutation::Delete, async move {
            client.delete(Resource::Employees, id).await
        });
    };

    view! {
        <PageFrame page_id="a008_employee--list" category=PAGE_CAT_LIST>
            <PageHeader title="Employees">
                <button class="button button--primary" on:click=move |_| editing.set(Some(EmployeeDto::default()))>
                    {icon("plus")}
                    "Add Employee"
                </button>
                <button class="button button--secondary" on:click=move |_| controller.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <SearchInput
                placeholder="Search by name or phone..."
                on_change=Callback::new(move |s: String| controller.set_search(s))
            />

            <ErrorBanner message=Signal::derive(move || controller.error()) />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"First Name"</th>
                            <th class="table__header-cell">"Middle Name"</th>
                            <th class="table__header-cell">"Last Name"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Organizational Unit"</th>
                            <th class="table__header-cell">"Role"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || controller.items().into_iter().map(|employee| {
                            let id = employee.id;
                            let dto = EmployeeDto::for_edit(&employee);
                            let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{employee.fname}</td>
                                    <td class="table__cell">{employee.mname}</td>
                                    <td class="table__cell">{employee.lname}</td>
                                    <td class="table__cell">{employee.phone_no}</td>
                                    <td class="table__cell">{or_na(employee.organizationalunit_name)}</td>
                                    <td class="table__cell">{or_na(employee.role_name)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(dto.clone()))>
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

            {move || editing.get().map(|initial| {
                let title = if initial.id.is_some() { "Edit Employee" } else { "Add Employee" };
                view! {
                    <Modal title=title on_close=close_form>
                        <EmployeeDetails initial=initial on_saved=on_saved on_cancel=close_form />
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
