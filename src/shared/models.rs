pub mod task;
pub mod sort_directive;
pub mod app_state;
pub mod settings;
