//! Integration tests for project CRUD against a mock backend.
//!
//! Tests cover:
//! - Listing and fetching projects by id
//! - Creating and updating projects (id stability across updates)
//! - Missing-id lookups mapping to a typed not-found error
//! - Multipart uploads appending server-side paths

mod common;

use common::*;

#[tokio::test]
async fn test_list_projects_starts_empty() -> anyhow::Result<()> {
    let (_store, base_url) = spawn_backend().await;
    let client = BackendClient::new(ApiConfig::new(base_url));

    let projects = client.get_projects().await?;
    assert!(projects.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_and_get_project() -> anyhow::Result<()> {
    let (_store, base_url) = spawn_backend().await;
    let client = BackendClient::new(ApiConfig::new(base_url));

    // 1. Create a project
    let created = client.create_project(&project_payload("Lathea Vibes")).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Lathea Vibes");
    assert_eq!(created.status, "Ongoing");
    assert_eq!(created.location.as_deref(), Some("Beirut"));

    // 2. Fetch it back by id
    let fetched = client.get_project(created.id).await?;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Lathea Vibes");

    // 3. It shows up in the list
    let projects = client.get_projects().await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, created.id);

    Ok(())
}

#[tokio::test]
async fn test_update_keeps_the_id() -> anyhow::Result<()> {
    let (_store, base_url) = spawn_backend().await;
    let client = BackendClient::new(ApiConfig::new(base_url));

    // 1. Create, then update with changed fields
    let created = client.create_project(&project_payload("Lathea Vibes")).await?;
    let mut payload = project_payload("Lathea Vibes");
    payload.status = "Finished".to_string();
    payload.description = Some("Handover complete".to_string());
    let updated = client.update_project(created.id, &payload).await?;

    // 2. Same record, new fields
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status, "Finished");
    assert_eq!(updated.description.as_deref(), Some("Handover complete"));

    // 3. The list still has exactly one project
    let projects = client.get_projects().await?;
    assert_eq!(projects.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_missing_project_is_not_found() -> anyhow::Result<()> {
    let (_store, base_url) = spawn_backend().await;
    let client = BackendClient::new(ApiConfig::new(base_url));

    let err = client.get_project(9999).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::NotFound {
            kind: "project",
            id: 9999
        }
    ));

    Ok(())
}

#[tokio::test]
async fn test_image_upload_appends_server_paths() -> anyhow::Result<()> {
    let (_store, base_url) = spawn_backend().await;
    let client = BackendClient::new(ApiConfig::new(base_url));

    // 1. Create a project with no images
    let created = client.create_project(&project_payload("Marina Bay")).await?;
    assert_eq!(created.image.as_deref(), Some(&[][..]));

    // 2. Upload two images
    let first = temp_upload("tower-a");
    let second = temp_upload("tower-b");
    let updated = client
        .upload_project_images(
            created.id,
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        )
        .await?;

    // 3. Both stored paths are under the images prefix, in upload order
    let images = updated.image.unwrap_or_default();
    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|path| path.starts_with("/api/images/")));

    Ok(())
}

#[tokio::test]
async fn test_spec_upload_uses_the_files_prefix() -> anyhow::Result<()> {
    let (_store, base_url) = spawn_backend().await;
    let client = BackendClient::new(ApiConfig::new(base_url));

    let created = client.create_project(&project_payload("Marina Bay")).await?;
    let spec = temp_upload("floorplan");
    let updated = client
        .upload_project_files(created.id, &[spec.path().to_path_buf()])
        .await?;

    let specs = updated.specs.unwrap_or_default();
    assert_eq!(specs.len(), 1);
    assert!(specs[0].starts_with("/api/files/"));

    Ok(())
}

#[tokio::test]
async fn test_upload_of_a_missing_local_file_fails_before_the_request() -> anyhow::Result<()> {
    let (store, base_url) = spawn_backend().await;
    let client = BackendClient::new(ApiConfig::new(base_url));

    let created = client.create_project(&project_payload("Marina Bay")).await?;
    let writes_before = store.write_count();

    let err = client
        .upload_project_images(created.id, &["/no/such/file.png".into()])
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Upload { .. }));
    // Nothing reached the backend
    assert_eq!(store.write_count(), writes_before);

    Ok(())
}
