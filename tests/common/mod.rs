mod fixtures;
mod server;

pub use fixtures::*;
pub use server::*;

// Re-export commonly used types from lathea_admin for tests
pub use lathea_admin::core::admin::{
    ApartmentForm, DashboardState, EmployeeForm, EntityTab, LoadState, OpenModal, ProjectForm,
    save_apartment, save_employee, save_project,
};
pub use lathea_admin::{
    Apartment, ApartmentPayload, ApartmentRepository, ApiConfig, ApiError, BackendClient,
    Employee, EmployeePayload, EmployeeRepository, ImageResolver, Project, ProjectPayload,
    ProjectRepository,
};
