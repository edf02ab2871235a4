use super::view_model::WoredaDetailsViewModel;
use crate::shared::api_client::use_api_client;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::id_select::{named_options, IdSelect};
use contracts::domain::a005_woreda::aggregate::WoredaDto;
use leptos::prelude::*;

#[component]
pub fn WoredaDetails(
    initial: WoredaDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = WoredaDetailsViewModel::new(use_api_client(), initial);
    vm.load_subcities();

    view! {
        <div class="details-container woreda-details">
            <ErrorBanner message=Signal::derive(move || vm.error.get()) />

            <form
                class="details-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command(on_saved);
                }
            >
                <div class="form-group">
                    <label for="woreda_name">"Name *"</label>
                    <input
                        type="text"
                        id="woreda_name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Woreda name"
                    />
                </div>

                <IdSelect
                    label="Subcity"
                    id="woreda_subcity"
                    required=true
                    placeholder="Select a subcity"
                    value=Signal::derive(move || vm.form.with(|f| f.subcity))
                    options=Signal::derive(move || vm.subcities.with(|s| named_options(s)))
                    on_change=Callback::new(move |subcity| vm.form.update(|f| f.subcity = subcity))
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
        </div>
    }
}
