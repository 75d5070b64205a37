pub mod task_controller;
pub mod health_controller;
