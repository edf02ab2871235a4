use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Error message of a form that clears itself after a delay. A newer
/// message is never cleared by an older timer.
#[derive(Clone, Copy)]
pub struct TimedError {
    message: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl TimedError {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.message.get()
    }

    pub fn show(&self, message: impl Into<String>, ttl_ms: u32) {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        self.message.set(Some(message.into()));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(ttl_ms).await;
            if this.generation.try_get_value() == Some(generation) {
                this.message.try_set(None);
            }
        });
    }
}

impl Default for TimedError {
    fn default() -> Self {
        Self::new()
    }
}
