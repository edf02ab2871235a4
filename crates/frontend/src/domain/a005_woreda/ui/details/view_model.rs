use crate::shared::api_client::ApiClient;
use crate::shared::timed_error::TimedError;
use contracts::domain::a004_subcity::aggregate::Subcity;
use contracts::domain::a005_woreda::aggregate::WoredaDto;
use contracts::domain::common::Resource;
use contracts::shared::api_error::{fetch_failed_message, mutation_failed_message, Mutation};
use contracts::shared::list_state::{
    FORM_DATA_ERROR_TTL_MS, MUTATION_ERROR_TTL_MS, VALIDATION_ERROR_TTL_MS,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the woreda form
#[derive(Clone, Copy)]
pub struct WoredaDetailsViewModel {
    pub form: RwSignal<WoredaDto>,
    pub subcities: RwSignal<Vec<Subcity>>,
    pub error: TimedError,
    pub saving: RwSignal<bool>,
    client: StoredValue<ApiClient>,
}

impl WoredaDetailsViewModel {
    pub fn new(client: ApiClient, initial: WoredaDto) -> Self {
        Self {
            form: RwSignal::new(initial),
            subcities: RwSignal::new(Vec::new()),
            error: TimedError::new(),
            saving: RwSignal::new(false),
            client: StoredValue::new(client),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Fill the subcity dropdown
    pub fn load_subcities(&self) {
        let this = *self;
        let client = self.client.get_value();
        spawn_local(async move {
            match client.fetch_all::<Subcity>(Resource::Subcities).await {
                Ok(items) => {
                    this.subcities.try_set(items);
                }
                Err(e) => {
                    log::error!("loading subcities for woreda form failed: {}", e);
                    this.error
                        .show(fetch_failed_message(Resource::Subcities), FORM_DATA_ERROR_TTL_MS);
                }
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(message) = current.validate() {
            self.error.show(message, VALIDATION_ERROR_TTL_MS);
            return;
        }
        let payload = current.normalized();
        let mutation = if payload.id.is_some() {
            Mutation::Update
        } else {
            Mutation::Create
        };

        let this = *self;
        let client = self.client.get_value();
        self.saving.set(true);
        spawn_local(async move {
            let result = match payload.id {
                Some(id) => client.update(Resource::Woredas, id, &payload).await,
                None => client.create(Resource::Woredas, &payload).await,
            };
            this.saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("saving woreda failed: {}", e);
                    this.error.show(
                        mutation_failed_message(Resource::Woredas, mutation, &e),
                        MUTATION_ERROR_TTL_MS,
                    );
                }
            }
        });
    }
}
