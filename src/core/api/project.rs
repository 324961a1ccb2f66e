use std::future::Future;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::api::{ApiError, apartment::Apartment};

/// A development project as returned by the backend.
///
/// `id` is assigned server-side and immutable. The `image` and `specs` lists
/// preserve insertion order; gallery indices depend on it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub description: Option<String>,
    pub image: Option<Vec<String>>,
    pub specs: Option<Vec<String>>,
    pub apartments: Option<Vec<Apartment>>,
    #[serde(skip)]
    pub(crate) _guard: (),
}

/// Create/update body for a project. The backend consumes the same shape for
/// both operations; existing file-path lists are passed through unchanged and
/// only grow server-side when files are uploaded.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specs: Option<Vec<String>>,
}

pub trait ProjectRepository {
    fn get_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>>;
    fn get_project(&self, id: i64) -> impl Future<Output = Result<Project, ApiError>>;
    fn create_project(
        &self,
        payload: &ProjectPayload,
    ) -> impl Future<Output = Result<Project, ApiError>>;
    fn update_project(
        &self,
        id: i64,
        payload: &ProjectPayload,
    ) -> impl Future<Output = Result<Project, ApiError>>;
    fn upload_project_files(
        &self,
        id: i64,
        files: &[PathBuf],
    ) -> impl Future<Output = Result<Project, ApiError>>;
    fn upload_project_images(
        &self,
        id: i64,
        files: &[PathBuf],
    ) -> impl Future<Output = Result<Project, ApiError>>;
}
