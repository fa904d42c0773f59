//! Folder filter controls for the code graph service.

mod component;
mod controls;
mod dispatch;
mod host;
mod pipeline;
mod registry;
mod types;

pub use component::{FilterButtons, StatusSnackbar, TaskList, Toast, show_toast};
pub use controls::ControlId;
pub use dispatch::StatusMessage;
pub use host::PanelHost;
pub use types::GraphSnapshot;
