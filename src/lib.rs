pub mod core;

pub use core::api::{
    Apartment, ApartmentPayload, ApartmentRepository, ApiConfig, ApiError, BackendClient,
    Employee, EmployeePayload, EmployeeRepository, Project, ProjectPayload, ProjectRepository,
};
pub use core::images::{ImageCandidates, ImageResolver};

#[cfg(feature = "gui")]
pub mod gui;
