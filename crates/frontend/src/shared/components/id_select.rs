use contracts::domain::common::{option_value, AggregateId, EntityId};
use leptos::prelude::*;

/// Labelled `<select>` over reference records, with an empty placeholder
/// option standing for "nothing selected".
#[component]
pub fn IdSelect(
    #[prop(into)]
    label: String,
    /// ID for the select element
    id: &'static str,
    #[prop(into)]
    value: Signal<Option<EntityId>>,
    /// Options as (id, label)
    #[prop(into)]
    options: Signal<Vec<(EntityId, String)>>,
    on_change: Callback<Option<EntityId>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let placeholder = move || placeholder.get().unwrap_or_else(|| "Select...".to_string());

    view! {
        <div class="form-group">
            <label for=id>
                {label}
                {required.then_some(" *")}
            </label>
            <select
                id=id
                class="form__select"
                on:change=move |ev| on_change.run(EntityId::from_optional_str(&event_target_value(&ev)))
            >
                <option value="" selected=move || value.get().is_none()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(option_id, label)| (*option_id, label.clone())
                    children=move |(option_id, label)| {
                        view! {
                            <option
                                value=option_value(Some(option_id))
                                selected=move || value.get() == Some(option_id)
                            >
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Option list for [`IdSelect`] from named records.
pub fn named_options<T: contracts::domain::common::NamedEntity>(
    items: &[T],
) -> Vec<(EntityId, String)> {
    items
        .iter()
        .map(|item| (item.id(), item.name().to_string()))
        .collect()
}
