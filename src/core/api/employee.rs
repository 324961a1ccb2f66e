use std::future::Future;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::api::ApiError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub linked_in: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    #[serde(skip)]
    pub(crate) _guard: (),
}

impl Employee {
    /// The LinkedIn handle with any profile-URL prefix stripped, for display.
    pub fn linkedin_handle(&self) -> Option<&str> {
        self.linked_in.as_deref().map(|raw| {
            raw.trim_start_matches("https://")
                .trim_start_matches("http://")
                .trim_start_matches("www.")
                .trim_start_matches("linkedin.com/in/")
        })
    }
}

/// Create/update body for an employee. `image` passes the existing path
/// through; a new photo goes through the upload endpoint instead.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub trait EmployeeRepository {
    fn get_employees(&self) -> impl Future<Output = Result<Vec<Employee>, ApiError>>;
    fn create_employee(
        &self,
        payload: &EmployeePayload,
    ) -> impl Future<Output = Result<Employee, ApiError>>;
    fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> impl Future<Output = Result<Employee, ApiError>>;
    fn upload_employee_image(
        &self,
        id: i64,
        files: &[PathBuf],
    ) -> impl Future<Output = Result<Employee, ApiError>>;
    fn delete_employee(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(linked_in: Option<&str>) -> Employee {
        Employee {
            id: 1,
            name: "Maya Haddad".to_string(),
            email: "maya@lathea.com".to_string(),
            phone_number: None,
            linked_in: linked_in.map(str::to_string),
            title: None,
            image: None,
            _guard: (),
        }
    }

    #[test]
    fn linkedin_handle_strips_profile_url() {
        let e = employee(Some("https://www.linkedin.com/in/maya-haddad"));
        assert_eq!(e.linkedin_handle(), Some("maya-haddad"));
    }

    #[test]
    fn linkedin_handle_keeps_bare_handles() {
        let e = employee(Some("maya-haddad"));
        assert_eq!(e.linkedin_handle(), Some("maya-haddad"));
        assert_eq!(employee(None).linkedin_handle(), None);
    }
}
