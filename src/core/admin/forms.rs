//! Create/edit form state for the three entity kinds.
//!
//! A form is create-mode when `editing` is `None` and edit-mode otherwise;
//! both modes use the same fields. Seeding from an entity resets all
//! transient state (pending file selections, error text), so opening and
//! closing a form without saving never touches the backend.

use std::path::PathBuf;

use crate::core::api::{
    Apartment, ApartmentPayload, Employee, EmployeePayload, Project, ProjectPayload,
};

pub const PROJECT_STATUSES: [&str; 4] = ["Finished", "Off Plan", "Ongoing", "Coming Soon"];
pub const APARTMENT_STATUSES: [&str; 7] = [
    "Finished",
    "Off Plan",
    "Ongoing",
    "Coming Soon",
    "AVAILABLE",
    "SOLD",
    "RESERVED",
];

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Minimal email-shape check, mirroring the input-level validation of the
/// dashboard: one `@`, a non-empty local part, and a dot inside the domain.
pub(crate) fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub editing: Option<i64>,
    pub name: String,
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    pub status: String,
    pub description: String,
    pub existing_images: Vec<String>,
    pub existing_specs: Vec<String>,
    pub selected_images: Vec<PathBuf>,
    pub selected_specs: Vec<PathBuf>,
    pub error: Option<String>,
    pub saving: bool,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self {
            status: PROJECT_STATUSES[0].to_string(),
            ..Self::default()
        }
    }

    pub fn seeded(project: &Project) -> Self {
        Self {
            editing: Some(project.id),
            name: project.name.clone(),
            location: project.location.clone().unwrap_or_default(),
            latitude: project.latitude.map(|v| v.to_string()).unwrap_or_default(),
            longitude: project.longitude.map(|v| v.to_string()).unwrap_or_default(),
            status: if project.status.is_empty() {
                PROJECT_STATUSES[0].to_string()
            } else {
                project.status.clone()
            },
            description: project.description.clone().unwrap_or_default(),
            existing_images: project.image.clone().unwrap_or_default(),
            existing_specs: project.specs.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required.".to_string());
        }
        for (label, value) in [("Latitude", &self.latitude), ("Longitude", &self.longitude)] {
            if !value.trim().is_empty() && value.trim().parse::<f64>().is_err() {
                return Err(format!("{label} must be a number."));
            }
        }
        Ok(())
    }

    /// Edited scalar fields merged with the untouched existing path lists.
    pub fn payload(&self) -> ProjectPayload {
        ProjectPayload {
            name: self.name.trim().to_string(),
            status: self.status.clone(),
            location: none_if_empty(&self.location),
            latitude: self.latitude.trim().parse().ok(),
            longitude: self.longitude.trim().parse().ok(),
            description: none_if_empty(&self.description),
            image: Some(self.existing_images.clone()),
            specs: Some(self.existing_specs.clone()),
        }
    }

    pub fn has_pending_uploads(&self) -> bool {
        !self.selected_images.is_empty() || !self.selected_specs.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApartmentForm {
    pub editing: Option<i64>,
    pub name: String,
    pub status: String,
    pub description: String,
    pub project_id: Option<i64>,
    pub existing_images: Vec<String>,
    pub existing_flat_plans: Vec<String>,
    pub selected_images: Vec<PathBuf>,
    pub selected_flat_plans: Vec<PathBuf>,
    pub error: Option<String>,
    pub saving: bool,
}

impl ApartmentForm {
    pub fn new() -> Self {
        Self {
            status: APARTMENT_STATUSES[0].to_string(),
            ..Self::default()
        }
    }

    pub fn seeded(apartment: &Apartment) -> Self {
        Self {
            editing: Some(apartment.id),
            name: apartment.name.clone(),
            status: if apartment.status.is_empty() {
                APARTMENT_STATUSES[0].to_string()
            } else {
                apartment.status.clone()
            },
            description: apartment.description.clone().unwrap_or_default(),
            project_id: apartment.project_id,
            existing_images: apartment.image.clone().unwrap_or_default(),
            existing_flat_plans: apartment.flat_plan.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required.".to_string());
        }
        Ok(())
    }

    pub fn payload(&self) -> ApartmentPayload {
        ApartmentPayload {
            name: self.name.trim().to_string(),
            status: self.status.clone(),
            description: none_if_empty(&self.description),
            project_id: self.project_id,
            image: Some(self.existing_images.clone()),
            flat_plan: Some(self.existing_flat_plans.clone()),
        }
    }

    pub fn has_pending_uploads(&self) -> bool {
        !self.selected_images.is_empty() || !self.selected_flat_plans.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub editing: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub linked_in: String,
    pub title: String,
    pub existing_image: Option<String>,
    pub selected_files: Vec<PathBuf>,
    pub error: Option<String>,
    pub saving: bool,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(employee: &Employee) -> Self {
        Self {
            editing: Some(employee.id),
            name: employee.name.clone(),
            email: employee.email.clone(),
            phone_number: employee.phone_number.clone().unwrap_or_default(),
            linked_in: employee.linked_in.clone().unwrap_or_default(),
            title: employee.title.clone().unwrap_or_default(),
            existing_image: employee.image.clone(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required.".to_string());
        }
        if !is_email_shaped(self.email.trim()) {
            return Err("A valid email address is required.".to_string());
        }
        Ok(())
    }

    pub fn payload(&self) -> EmployeePayload {
        EmployeePayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: none_if_empty(&self.phone_number),
            linked_in: none_if_empty(&self.linked_in),
            title: none_if_empty(&self.title),
            image: self.existing_image.clone(),
        }
    }

    pub fn has_pending_uploads(&self) -> bool {
        !self.selected_files.is_empty()
    }
}
