use std::sync::Arc;

use crate::data_access::data_context::DataContext;
use crate::notifier::CompletionNotifier;

pub struct AppState {
    pub data_context: DataContext,
    pub notifier: Arc<dyn CompletionNotifier>,
}

pub type SharedState = Arc<AppState>;
