mod apartment;
mod config;
mod employee;
mod error;
mod project;

use std::path::PathBuf;

use reqwest::{Response, StatusCode, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use apartment::{Apartment, ApartmentPayload, ApartmentRepository};
pub use config::ApiConfig;
pub use employee::{Employee, EmployeePayload, EmployeeRepository};
pub use error::ApiError;
pub use project::{Project, ProjectPayload, ProjectRepository};

/// HTTP client for the backend REST surface.
///
/// One instance serves all entity kinds; it is cheap to clone (the underlying
/// connection pool is shared). There are no retries and no request timeouts:
/// a hung backend leaves the caller waiting.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl BackendClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        files: &[PathBuf],
    ) -> Result<T, ApiError> {
        let mut form = multipart::Form::new();
        for file in files {
            let bytes = tokio::fs::read(file).await.map_err(|source| ApiError::Upload {
                path: file.clone(),
                source,
            })?;
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload")
                .to_string();
            form = form.part("files", multipart::Part::bytes(bytes).file_name(name));
        }
        let response = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }
        Ok(response.json().await?)
    }

    async fn check(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }
        Ok(())
    }

    /// Fetch the raw body of an already-resolved URL, e.g. a gallery image.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

impl ProjectRepository for BackendClient {
    async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/api/projects/").await
    }

    async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { kind: "project", id });
        }
        Self::decode(response).await
    }

    async fn create_project(&self, payload: &ProjectPayload) -> Result<Project, ApiError> {
        self.post_json("/api/projects/create", payload).await
    }

    async fn update_project(&self, id: i64, payload: &ProjectPayload) -> Result<Project, ApiError> {
        self.put_json(&format!("/api/projects/{id}/update"), payload)
            .await
    }

    async fn upload_project_files(&self, id: i64, files: &[PathBuf]) -> Result<Project, ApiError> {
        self.upload(&format!("/api/projects/{id}/uploadFiles"), files)
            .await
    }

    async fn upload_project_images(&self, id: i64, files: &[PathBuf]) -> Result<Project, ApiError> {
        self.upload(&format!("/api/projects/{id}/uploadImages"), files)
            .await
    }
}

impl ApartmentRepository for BackendClient {
    async fn get_apartments(&self) -> Result<Vec<Apartment>, ApiError> {
        self.get_json("/api/apartments/").await
    }

    async fn get_apartment(&self, id: i64) -> Result<Apartment, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/apartments/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: "apartment",
                id,
            });
        }
        Self::decode(response).await
    }

    async fn create_apartment(&self, payload: &ApartmentPayload) -> Result<Apartment, ApiError> {
        self.post_json("/api/apartments/create", payload).await
    }

    async fn update_apartment(
        &self,
        id: i64,
        payload: &ApartmentPayload,
    ) -> Result<Apartment, ApiError> {
        self.put_json(&format!("/api/apartments/{id}/update"), payload)
            .await
    }

    async fn upload_apartment_files(
        &self,
        id: i64,
        files: &[PathBuf],
    ) -> Result<Apartment, ApiError> {
        self.upload(&format!("/api/apartments/{id}/uploadFiles"), files)
            .await
    }

    async fn upload_apartment_images(
        &self,
        id: i64,
        files: &[PathBuf],
    ) -> Result<Apartment, ApiError> {
        self.upload(&format!("/api/apartments/{id}/uploadImages"), files)
            .await
    }

    async fn link_to_project(
        &self,
        apartment_id: i64,
        project_id: i64,
    ) -> Result<Apartment, ApiError> {
        let response = self
            .http
            .put(self.url(&format!(
                "/api/apartments/{apartment_id}/project?projectId={project_id}"
            )))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_apartment(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/apartments/{id}")))
            .send()
            .await?;
        Self::check(response).await
    }
}

impl EmployeeRepository for BackendClient {
    async fn get_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/api/employees/").await
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        self.post_json("/api/employees/create", payload).await
    }

    async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<Employee, ApiError> {
        self.put_json(&format!("/api/employees/{id}/update"), payload)
            .await
    }

    async fn upload_employee_image(
        &self,
        id: i64,
        files: &[PathBuf],
    ) -> Result<Employee, ApiError> {
        self.upload(&format!("/api/employees/{id}/uploadImage"), files)
            .await
    }

    async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/employees/{id}")))
            .send()
            .await?;
        Self::check(response).await
    }
}
