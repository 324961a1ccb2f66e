//! The modal submit protocol: create-or-update, then sequential uploads with
//! the saved entity's id.
//!
//! An upload failure after a successful save does not undo the save; the
//! record is reported saved and the failure is logged under a distinct
//! message so it stays observable. A failure of the create/update step aborts
//! the uploads and is returned to the caller.

use crate::core::admin::forms::{ApartmentForm, EmployeeForm, ProjectForm};
use crate::core::api::{
    Apartment, ApartmentRepository, ApiError, Employee, EmployeeRepository, Project,
    ProjectRepository,
};

pub async fn save_project<R: ProjectRepository>(
    repo: &R,
    form: &ProjectForm,
) -> Result<Project, ApiError> {
    let payload = form.payload();
    let mut project = match form.editing {
        Some(id) => repo.update_project(id, &payload).await?,
        None => repo.create_project(&payload).await?,
    };
    if !form.selected_specs.is_empty() {
        match repo.upload_project_files(project.id, &form.selected_specs).await {
            Ok(updated) => project = updated,
            Err(err) => log::warn!(
                "upload-after-save failure: project {} saved but spec upload failed: {err}",
                project.id
            ),
        }
    }
    if !form.selected_images.is_empty() {
        match repo.upload_project_images(project.id, &form.selected_images).await {
            Ok(updated) => project = updated,
            Err(err) => log::warn!(
                "upload-after-save failure: project {} saved but image upload failed: {err}",
                project.id
            ),
        }
    }
    Ok(project)
}

pub async fn save_apartment<R: ApartmentRepository>(
    repo: &R,
    form: &ApartmentForm,
) -> Result<Apartment, ApiError> {
    let payload = form.payload();
    let mut apartment = match form.editing {
        Some(id) => repo.update_apartment(id, &payload).await?,
        None => repo.create_apartment(&payload).await?,
    };
    if !form.selected_flat_plans.is_empty() {
        match repo
            .upload_apartment_files(apartment.id, &form.selected_flat_plans)
            .await
        {
            Ok(updated) => apartment = updated,
            Err(err) => log::warn!(
                "upload-after-save failure: apartment {} saved but flat-plan upload failed: {err}",
                apartment.id
            ),
        }
    }
    if !form.selected_images.is_empty() {
        match repo
            .upload_apartment_images(apartment.id, &form.selected_images)
            .await
        {
            Ok(updated) => apartment = updated,
            Err(err) => log::warn!(
                "upload-after-save failure: apartment {} saved but image upload failed: {err}",
                apartment.id
            ),
        }
    }
    Ok(apartment)
}

pub async fn save_employee<R: EmployeeRepository>(
    repo: &R,
    form: &EmployeeForm,
) -> Result<Employee, ApiError> {
    let payload = form.payload();
    let mut employee = match form.editing {
        Some(id) => repo.update_employee(id, &payload).await?,
        None => repo.create_employee(&payload).await?,
    };
    if !form.selected_files.is_empty() {
        match repo
            .upload_employee_image(employee.id, &form.selected_files)
            .await
        {
            Ok(updated) => employee = updated,
            Err(err) => log::warn!(
                "upload-after-save failure: employee {} saved but photo upload failed: {err}",
                employee.id
            ),
        }
    }
    Ok(employee)
}
