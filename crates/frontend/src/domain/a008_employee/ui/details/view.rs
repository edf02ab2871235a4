use super::view_model::EmployeeDetailsViewModel;
use crate::domain::a006_organizational_unit::ui::picker::OrganizationalUnitPicker;
use crate::shared::api_client::use_api_client;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::id_select::{named_options, IdSelect};
use crate::shared::list_controller::ListController;
use contracts::domain::a006_organizational_unit::aggregate::OrganizationalUnit;
use contracts::domain::a008_employee::aggregate::EmployeeDto;
use contracts::domain::common::Resource;
use leptos::prelude::*;

/// Text input bound to one string field of the form
#[component]
fn TextField(
    label: &'static str,
    id: &'static str,
    #[prop(optional)]
    input_type: &'static str,
    vm: EmployeeDetailsViewModel,
    get: fn(&EmployeeDto) -> String,
    set: fn(&mut EmployeeDto, String),
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };

    view! {
        <div class="form-group">
            <label for=id>{label}" *"</label>
            <input
                type=input_type
                id=id
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

#[component]
pub fn EmployeeDetails(
    initial: EmployeeDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new(use_api_client(), initial);
    vm.load_roles();

    let unit_name = move || {
        vm.form.with(|f| {
            if f.organizationalunit_name.is_empty() {
                "Not selected".to_string()
            } else {
                f.organizationalunit_name.clone()
            }
        })
    };

    view! {
        <div class="details-container employee-details">
            <ErrorBanner message=Signal::derive(move || vm.error.get()) />

            <form
                class="details-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <TextField label="First Name" id="emp_fname" vm=vm get={|f: &EmployeeDto| f.fname.clone()} set={|f: &mut EmployeeDto, v: String| f.fname = v} />
                <TextField label="Middle Name" id="emp_mname" vm=vm get={|f: &EmployeeDto| f.mname.clone()} set={|f: &mut EmployeeDto, v: String| f.mname = v} />
                <TextField label="Last Name" id="emp_lname" vm=vm get={|f: &EmployeeDto| f.lname.clone()} set={|f: &mut EmployeeDto, v: String| f.lname = v} />
                <TextField
                    label="Phone Number"
                    id="emp_phone"
                    input_type="tel"
                    vm=vm
                    get={|f: &EmployeeDto| f.phone_no.clone()}
                    set={|f: &mut EmployeeDto, v: String| f.phone_no = v}
                />

                <div class="form-group">
                    <label>"Organizational Unit *"</label>
                    <div class="form__picker-field">
                        <span class="form__picker-value">{unit_name}</span>
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| vm.show_unit_picker.set(true)
                        >
                            "Select Unit"
                        </button>
                    </div>
                </div>

                <IdSelect
                    label="Role"
                    id="emp_role"
                    placeholder="No role"
                    value=Signal::derive(move || vm.form.with(|f| f.role))
                    options=Signal::derive(move || vm.roles.with(|r| named_options(r)))
                    on_change=Callback::new(move |role| vm.form.update(|f| f.role = role))
                />

                <div class="form-actions">
                    <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                        {move || if vm.is_edit_mode() { "Update" } else { "Create" }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>

            <Show when=move || vm.show_unit_picker.get()>
                {move || {
                    let controller = ListController::<OrganizationalUnit>::remote(
                        vm.client(),
                        Resource::OrganizationalUnits,
                    );
                    view! {
                        <OrganizationalUnitPicker
                            title="Select Organizational Unit"
                            controller=controller
                            initial_selected_id=vm.form.with_untracked(|f| f.organizationalunit)
                            on_confirm=Callback::new(move |unit| vm.select_unit(unit))
                            on_cancel=Callback::new(move |_| vm.show_unit_picker.set(false))
                        />
                    }
                }}
            </Show>
        </div>
    }
}
