mod dashboard;
mod forms;
mod gallery;
mod save;

pub use dashboard::{DashboardState, EntityTab, LoadState, OpenModal};
pub use forms::{
    APARTMENT_STATUSES, ApartmentForm, EmployeeForm, PROJECT_STATUSES, ProjectForm,
};
pub use gallery::GalleryState;
pub use save::{save_apartment, save_employee, save_project};
