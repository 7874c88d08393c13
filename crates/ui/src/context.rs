use std::sync::Arc;

use quiz_core::model::QuizSettings;
use services::{Clock, SessionFlowController, SubjectCatalog};

/// What the UI needs from the composition root to start a quiz flow.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> SubjectCatalog;
    fn settings(&self) -> QuizSettings;
    fn clock(&self) -> Clock;

    /// Seed for random assignments; `None` draws from the OS.
    fn seed(&self) -> Option<u64>;

    /// Name pre-filled on the subject screen.
    fn user_name(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
        }
    }

    /// A fresh controller sitting on the subject screen.
    #[must_use]
    pub fn build_controller(&self) -> SessionFlowController {
        let controller =
            SessionFlowController::new(self.app.catalog(), self.app.settings(), self.app.clock())
                .with_user_name(self.app.user_name());
        match self.app.seed() {
            Some(seed) => controller.with_seed(seed),
            None => controller,
        }
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
