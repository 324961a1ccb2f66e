use std::future::Future;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::api::ApiError;

/// An apartment record. `project_id` is a weak back-reference: the backend
/// does not guarantee the referenced project still exists, so lookups must
/// tolerate dangling ids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub description: Option<String>,
    pub image: Option<Vec<String>>,
    pub flat_plan: Option<Vec<String>>,
    pub project_id: Option<i64>,
    #[serde(skip)]
    pub(crate) _guard: (),
}

/// Create/update body for an apartment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentPayload {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_plan: Option<Vec<String>>,
}

pub trait ApartmentRepository {
    fn get_apartments(&self) -> impl Future<Output = Result<Vec<Apartment>, ApiError>>;
    fn get_apartment(&self, id: i64) -> impl Future<Output = Result<Apartment, ApiError>>;
    fn create_apartment(
        &self,
        payload: &ApartmentPayload,
    ) -> impl Future<Output = Result<Apartment, ApiError>>;
    fn update_apartment(
        &self,
        id: i64,
        payload: &ApartmentPayload,
    ) -> impl Future<Output = Result<Apartment, ApiError>>;
    fn upload_apartment_files(
        &self,
        id: i64,
        files: &[PathBuf],
    ) -> impl Future<Output = Result<Apartment, ApiError>>;
    fn upload_apartment_images(
        &self,
        id: i64,
        files: &[PathBuf],
    ) -> impl Future<Output = Result<Apartment, ApiError>>;
    fn link_to_project(
        &self,
        apartment_id: i64,
        project_id: i64,
    ) -> impl Future<Output = Result<Apartment, ApiError>>;
    fn delete_apartment(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;
}
