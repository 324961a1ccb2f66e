use std::io::Write;

use lathea_admin::{ApartmentPayload, EmployeePayload, ProjectPayload};
use tempfile::NamedTempFile;

/// Creates a small file on disk to stand in for an upload. Keep the handle
/// alive until the upload request has been sent.
pub fn temp_upload(name_hint: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix(name_hint)
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp upload file");
    file.write_all(b"not a real png")
        .expect("Failed to write temp upload file");
    file
}

pub fn project_payload(name: &str) -> ProjectPayload {
    ProjectPayload {
        name: name.to_string(),
        status: "Ongoing".to_string(),
        location: Some("Beirut".to_string()),
        latitude: Some(33.8938),
        longitude: Some(35.5018),
        description: Some("Waterfront towers with sea view".to_string()),
        image: Some(Vec::new()),
        specs: Some(Vec::new()),
    }
}

pub fn apartment_payload(name: &str, project_id: Option<i64>) -> ApartmentPayload {
    ApartmentPayload {
        name: name.to_string(),
        status: "AVAILABLE".to_string(),
        description: Some("Corner unit".to_string()),
        project_id,
        image: Some(Vec::new()),
        flat_plan: Some(Vec::new()),
    }
}

pub fn employee_payload(name: &str, email: &str) -> EmployeePayload {
    EmployeePayload {
        name: name.to_string(),
        email: email.to_string(),
        phone_number: Some("+961 1 234 567".to_string()),
        linked_in: None,
        title: Some("Sales Agent".to_string()),
        image: None,
    }
}
