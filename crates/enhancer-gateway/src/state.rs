use std::sync::Arc;

use enhancer_core::RedirectStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RedirectStore>,
    redirect_base: String,
}

impl AppState {
    pub fn new(store: Arc<dyn RedirectStore>, public_base_url: impl AsRef<str>) -> Self {
        Self {
            store,
            redirect_base: format!(
                "{}/enhanced",
                public_base_url.as_ref().trim_end_matches('/')
            ),
        }
    }

    pub fn store(&self) -> &dyn RedirectStore {
        self.store.as_ref()
    }

    /// Prefix that issued keys are appended to, e.g. `http://host/enhanced`.
    pub fn redirect_base(&self) -> &str {
        &self.redirect_base
    }
}
