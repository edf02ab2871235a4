use super::view_model::OrganizationalUnitDetailsViewModel;
use crate::domain::a006_organizational_unit::ui::picker::{
    local_unit_controller, OrganizationalUnitPicker,
};
use crate::shared::api_client::use_api_client;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::id_select::{named_options, IdSelect};
use crate::shared::icons::icon;
use contracts::domain::a005_woreda::aggregate::options_for_subcity;
use contracts::domain::a006_organizational_unit::aggregate::OrganizationalUnitDraft;
use contracts::domain::a006_organizational_unit::details::{parent_label, NOT_AVAILABLE};
use contracts::domain::a006_organizational_unit::form_rules::FormField;
use contracts::domain::common::{name_by_id, EntityId};
use leptos::prelude::*;
use thaw::Spinner;

/// Read-only value inherited from the parent
#[component]
fn DerivedField(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="form-group form-group--derived">
            <label>{label}</label>
            <div class="form__derived-value">{move || value.get()}</div>
        </div>
    }
}

fn required_mark(required: bool) -> &'static str {
    if required {
        " *"
    } else {
        ""
    }
}

#[component]
pub fn OrganizationalUnitDetails(
    initial: OrganizationalUnitDraft,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = OrganizationalUnitDetailsViewModel::new(use_api_client(), initial);
    vm.load_reference_data();

    let visible = move |field: FormField| vm.visibility.with(|m| m.is_visible(field));
    let derived = move |field: FormField| vm.visibility.with(|m| m.is_derived(field));
    let required = move |field: FormField| vm.visibility.with(|m| m.is_required(field));
    let field_label =
        move |field: FormField| format!("{}{}", field.label(), required_mark(required(field)));

    let parent_name = move || {
        let parent = vm.form.with(|f| f.parent);
        vm.reference.with(|r| parent_label(&r.units, parent))
    };

    view! {
        <div class="details-container organizational-unit-details">
            <ErrorBanner message=Signal::derive(move || vm.error.get()) />

            <Show when=move || vm.loading.get()>
                <div class="details-loading">
                    <Spinner />
                </div>
            </Show>

            <form
                class="details-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <div class="form-group">
                    <label for="ou_name">{move || field_label(FormField::Name)}</label>
                    <input
                        type="text"
                        id="ou_name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="ou_required_employees">{move || field_label(FormField::RequiredEmployeesNo)}</label>
                    <input
                        type="number"
                        id="ou_required_employees"
                        min="0"
                        prop:value=move || vm.form.with(|f| f.required_employees_no.map(|n| n.to_string()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.required_employees_no = value.trim().parse::<i64>().ok());
                        }
                    />
                </div>

                <div class="form-group">
                    <label>{move || field_label(FormField::Parent)}</label>
                    <div class="form__picker-field">
                        <span class="form__picker-value">{parent_name}</span>
                        <button
                            type="button"
                            class="button button--secondary"
                            disabled=move || vm.loading.get()
                            on:click=move |_| vm.show_parent_picker.set(true)
                        >
                            "Select Parent"
                        </button>
                        <Show when=move || vm.form.with(|f| f.parent.is_some())>
                            <button
                                type="button"
                                class="button button--icon"
                                title="Clear parent"
                                on:click=move |_| vm.select_parent(None)
                            >
                                {icon("x")}
                            </button>
                        </Show>
                    </div>
                </div>

                <Show when=move || visible(FormField::Division)>
                    {move || if derived(FormField::Division) {
                        view! {
                            <DerivedField
                                label="Division"
                                value=Signal::derive(move || {
                                    let id = vm.visibility.with(|m| m.derived_division);
                                    vm.reference
                                        .with(|r| name_by_id(&r.divisions, id).map(str::to_string))
                                        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                                })
                            />
                        }.into_any()
                    } else {
                        view! {
                            <IdSelect
                                label=field_label(FormField::Division)
                                id="ou_division"
                                placeholder="Select a division"
                                value=Signal::derive(move || vm.form.with(|f| f.division))
                                options=Signal::derive(move || vm.reference.with(|r| named_options(&r.divisions)))
                                on_change=Callback::new(move |id| vm.select_division(id))
                            />
                        }.into_any()
                    }}
                </Show>

                <Show when=move || visible(FormField::SectorSubdivType)>
                    <IdSelect
                        label=field_label(FormField::SectorSubdivType)
                        id="ou_sector_subdiv_type"
                        placeholder="Select a sector subdivision type"
                        value=Signal::derive(move || vm.form.with(|f| f.sector_subdiv_type))
                        options=Signal::derive(move || vm.reference.with(|r| named_options(&r.sector_types)))
                        on_change=Callback::new(move |id| vm.form.update(|f| f.sector_subdiv_type = id))
                    />
                </Show>

                <Show when=move || visible(FormField::SubcitySubdivType)>
                    {move || if derived(FormField::SubcitySubdivType) {
                        view! {
                            <DerivedField
                                label="Subcity Subdivision Type"
                                value=Signal::derive(move || {
                                    let id = vm.visibility.with(|m| m.derived_subcity_subdiv_type);
                                    vm.reference
                                        .with(|r| name_by_id(&r.subcity_types, id).map(str::to_string))
                                        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                                })
                            />
                        }.into_any()
                    } else {
                        view! {
                            <IdSelect
                                label=field_label(FormField::SubcitySubdivType)
                                id="ou_subcity_subdiv_type"
                                placeholder="Select a subcity subdivision type"
                                value=Signal::derive(move || vm.form.with(|f| f.subcity_subdiv_type))
                                options=Signal::derive(move || vm.reference.with(|r| named_options(&r.subcity_types)))
                                on_change=Callback::new(move |id| vm.form.update(|f| f.subcity_subdiv_type = id))
                            />
                        }.into_any()
                    }}
                </Show>

                <Show when=move || visible(FormField::Subcity)>
                    <IdSelect
                        label=field_label(FormField::Subcity)
                        id="ou_subcity"
                        placeholder="Select a subcity"
                        value=Signal::derive(move || vm.form.with(|f| f.subcity))
                        options=Signal::derive(move || vm.reference.with(|r| named_options(&r.subcities)))
                        on_change=Callback::new(move |id| vm.select_subcity(id))
                    />
                </Show>

                <Show when=move || visible(FormField::Woreda)>
                    <IdSelect
                        label=field_label(FormField::Woreda)
                        id="ou_woreda"
                        placeholder="Select a woreda"
                        value=Signal::derive(move || vm.form.with(|f| f.woreda))
                        options=Signal::derive(move || {
                            let subcity = vm.form.with(|f| f.subcity);
                            vm.reference.with(|r| named_options(&options_for_subcity(&r.woredas, subcity)))
                        })
                        on_change=Callback::new(move |id| vm.form.update(|f| f.woreda = id))
                    />
                </Show>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get() || vm.loading.get()
                    >
                        {move || if vm.is_edit_mode() { "Update" } else { "Create" }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>

            <Show when=move || vm.show_parent_picker.get()>
                {move || {
                    let initial_selected_id: Option<EntityId> = vm.form.with_untracked(|f| f.parent);
                    view! {
                        <OrganizationalUnitPicker
                            title="Select Parent Unit"
                            controller=local_unit_controller(vm.candidates.into())
                            initial_selected_id=initial_selected_id
                            on_confirm=Callback::new(move |unit| vm.select_parent(Some(unit)))
                            on_cancel=Callback::new(move |_| vm.show_parent_picker.set(false))
                        />
                    }
                }}
            </Show>
        </div>
    }
}
