use crate::shared::api_client::ApiClient;
use crate::shared::timed_error::TimedError;
use contracts::domain::a006_organizational_unit::aggregate::OrganizationalUnit;
use contracts::domain::a007_employee_role::aggregate::EmployeeRole;
use contracts::domain::a008_employee::aggregate::EmployeeDto;
use contracts::domain::common::Resource;
use contracts::shared::api_error::{fetch_failed_message, mutation_failed_message, Mutation};
use contracts::shared::list_state::{
    FORM_DATA_ERROR_TTL_MS, MUTATION_ERROR_TTL_MS, VALIDATION_ERROR_TTL_MS,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeDto>,
    pub roles: RwSignal<Vec<EmployeeRole>>,
    pub error: TimedError,
    pub saving: RwSignal<bool>,
    pub show_unit_picker: RwSignal<bool>,
    client: StoredValue<ApiClient>,
}

impl EmployeeDetailsViewModel {
    pub fn new(client: ApiClient, initial: EmployeeDto) -> Self {
        Self {
            form: RwSignal::new(initial),
            roles: RwSignal::new(Vec::new()),
            error: TimedError::new(),
            saving: RwSignal::new(false),
            show_unit_picker: RwSignal::new(false),
            client: StoredValue::new(client),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Fill the role dropdown
    pub fn load_roles(&self) {
        let this = *self;
        let client = self.client();
        spawn_local(async move {
            match client.fetch_all::<EmployeeRole>(Resource::EmployeeRoles).await {
                Ok(items) => {
                    this.roles.try_set(items);
                }
                Err(e) => {
                    log::error!("loading employee roles failed: {}", e);
                    this.error.show(
                        fetch_failed_message(Resource::EmployeeRoles),
                        FORM_DATA_ERROR_TTL_MS,
                    );
                }
            }
        });
    }

    pub fn select_unit(&self, unit: OrganizationalUnit) {
        self.form.update(|f| f.select_unit(unit.id, &unit.name));
        self.show_unit_picker.set(false);
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
        let client = self.client();
        self.saving.set(true);
        spawn_local(async move {
            let result = match payload.id {
                Some(id) => client.update(Resource::Employees, id, &payload).await,
                None => client.create(Resource::Employees, &payload).await,
            };
            this.saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("saving employee failed: {}", e);
                    this.error.show(
                        mutation_failed_message(Resource::Employees, mutation, &e),
                        MUTATION_ERROR_TTL_MS,
                    );
                }
            }
        });
    }
}
