#![forbid(unsafe_code)]

pub mod app_services;
pub mod completion_store;
pub mod error;
pub mod picker_service;

pub use app_services::{AppServices, SharedPicker};
pub use completion_store::{COMPLETED_KEY, CompletionStore};
pub use error::{AppServicesError, PickerServiceError};
pub use picker_service::PickerService;
