use super::model::{self, ReferenceData, REFERENCE_LOAD_FAILED};
use crate::shared::api_client::ApiClient;
use crate::shared::timed_error::TimedError;
use contracts::domain::a006_organizational_unit::aggregate::{
    OrganizationalUnit, OrganizationalUnitDraft,
};
use contracts::domain::a006_organizational_unit::form_rules::{
    compute_visibility, validate, VisibilityMap,
};
use contracts::domain::a006_organizational_unit::hierarchy::candidate_parents;
use contracts::domain::common::{EntityId, Resource};
use contracts::shared::api_error::{mutation_failed_message, Mutation};
use contracts::shared::list_state::{
    FORM_DATA_ERROR_TTL_MS, MUTATION_ERROR_TTL_MS, VALIDATION_ERROR_TTL_MS,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the organizational unit form
///
/// `visibility` is recomputed from the draft on every change; the view
/// only reads it.
#[derive(Clone, Copy)]
pub struct OrganizationalUnitDetailsViewModel {
    pub form: RwSignal<OrganizationalUnitDraft>,
    pub reference: RwSignal<ReferenceData>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: TimedError,
    pub show_parent_picker: RwSignal<bool>,
    pub candidates: Memo<Vec<OrganizationalUnit>>,
    pub visibility: Memo<VisibilityMap>,
    client: StoredValue<ApiClient>,
}

impl OrganizationalUnitDetailsViewModel {
    pub fn new(client: ApiClient, initial: OrganizationalUnitDraft) -> Self {
        let editing = initial.id;
        let form = RwSignal::new(initial);
        let reference = RwSignal::new(ReferenceData::default());

        let candidates =
            Memo::new(move |_| reference.with(|r| candidate_parents(&r.units, editing)));
        let visibility = Memo::new(move |_| {
            form.with(|draft| {
                reference.with(|r| {
                    candidates.with(|c| compute_visibility(draft, &r.divisions, c))
                })
            })
        });

        Self {
            form,
            reference,
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: TimedError::new(),
            show_parent_picker: RwSignal::new(false),
            candidates,
            visibility,
            client: StoredValue::new(client),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_reference_data(&self) {
        let this = *self;
        let client = self.client.get_value();
        self.loading.set(true);
        spawn_local(async move {
            match model::load_reference_data(&client).await {
                Ok(data) => {
                    this.reference.try_set(data);
                }
                Err(e) => {
                    log::error!("loading organizational unit form data failed: {}", e);
                    this.error.show(REFERENCE_LOAD_FAILED, FORM_DATA_ERROR_TTL_MS);
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn select_parent(&self, parent: Option<OrganizationalUnit>) {
        self.form.update(|f| f.select_parent(parent.as_ref()));
        self.show_parent_picker.set(false);
    }

    pub fn select_division(&self, division: Option<EntityId>) {
        self.reference.with_untracked(|r| {
            self.form
                .update(|f| f.select_division(division, &r.divisions))
        });
    }

    pub fn select_subcity(&self, subcity: Option<EntityId>) {
        self.reference.with_untracked(|r| {
            self.form.update(|f| f.select_subcity(subcity, &r.woredas))
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let draft = self.form.get_untracked();
        let map = self.visibility.get_untracked();
        if let Err(message) = validate(&draft, &map) {
            self.error.show(message, VALIDATION_ERROR_TTL_MS);
            return;
        }
        let payload = draft.normalized();
        let mutation = if payload.id.is_some() {
            Mutation::Update
        } else {
            Mutation::Create
        };

        let this = *self;
        let client = self.client.get_value();
        self.saving.set(true);
        spawn_local(async move {
            let result = model::save(&client, &payload).await;
            this.saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("saving organizational unit failed: {}", e);
                    this.error.show(
                        mutation_failed_message(Resource::OrganizationalUnits, mutation, &e),
                        MUTATION_ERROR_TTL_MS,
                    );
                }
            }
        });
    }
}
