//! In-process mock of the backend REST surface, enough for client tests:
//! JSON CRUD per entity kind, multipart uploads appending server-side paths,
//! and toggleable upload failures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Projects,
    Apartments,
    Employees,
}

#[derive(Default)]
struct Inner {
    projects: HashMap<i64, Value>,
    apartments: HashMap<i64, Value>,
    employees: HashMap<i64, Value>,
    next_id: i64,
    fail_uploads: bool,
    writes: u64,
}

impl Inner {
    fn map(&mut self, kind: Kind) -> &mut HashMap<i64, Value> {
        match kind {
            Kind::Projects => &mut self.projects,
            Kind::Apartments => &mut self.apartments,
            Kind::Employees => &mut self.employees,
        }
    }
}

#[derive(Clone, Default)]
pub struct Store(Arc<Mutex<Inner>>);

impl Store {
    /// Make every subsequent upload endpoint answer 500.
    pub fn fail_uploads(&self, fail: bool) {
        self.0.lock().unwrap().fail_uploads = fail;
    }

    /// Number of successful mutating requests handled so far.
    pub fn write_count(&self) -> u64 {
        self.0.lock().unwrap().writes
    }

    pub fn seed_project(&self, value: Value) -> i64 {
        self.seed(Kind::Projects, value)
    }

    pub fn seed_apartment(&self, value: Value) -> i64 {
        self.seed(Kind::Apartments, value)
    }

    pub fn seed_employee(&self, value: Value) -> i64 {
        self.seed(Kind::Employees, value)
    }

    fn seed(&self, kind: Kind, mut value: Value) -> i64 {
        let mut inner = self.0.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        value["id"] = json!(id);
        inner.map(kind).insert(id, value);
        id
    }

    fn list(&self, kind: Kind) -> Vec<Value> {
        let mut inner = self.0.lock().unwrap();
        let mut entries: Vec<(i64, Value)> =
            inner.map(kind).iter().map(|(k, v)| (*k, v.clone())).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, v)| v).collect()
    }

    fn get(&self, kind: Kind, id: i64) -> Option<Value> {
        self.0.lock().unwrap().map(kind).get(&id).cloned()
    }

    fn create(&self, kind: Kind, mut body: Value) -> Value {
        let mut inner = self.0.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        body["id"] = json!(id);
        inner.map(kind).insert(id, body.clone());
        inner.writes += 1;
        body
    }

    fn update(&self, kind: Kind, id: i64, mut body: Value) -> Option<Value> {
        let mut inner = self.0.lock().unwrap();
        if !inner.map(kind).contains_key(&id) {
            return None;
        }
        body["id"] = json!(id);
        inner.map(kind).insert(id, body.clone());
        inner.writes += 1;
        Some(body)
    }

    fn remove(&self, kind: Kind, id: i64) -> bool {
        let mut inner = self.0.lock().unwrap();
        let removed = inner.map(kind).remove(&id).is_some();
        if removed {
            inner.writes += 1;
        }
        removed
    }

    /// Append server-side paths for uploaded file names. `single` replaces a
    /// scalar field instead of pushing onto an array.
    fn attach(
        &self,
        kind: Kind,
        id: i64,
        field: &str,
        prefix: &str,
        single: bool,
        names: &[String],
    ) -> Result<Option<Value>, ()> {
        let mut inner = self.0.lock().unwrap();
        if inner.fail_uploads {
            return Err(());
        }
        let Some(entity) = inner.map(kind).get_mut(&id) else {
            return Ok(None);
        };
        if single {
            if let Some(name) = names.last() {
                entity[field] = json!(format!("{prefix}/{name}"));
            }
        } else {
            if !entity[field].is_array() {
                entity[field] = json!([]);
            }
            let list = entity[field].as_array_mut().unwrap();
            for name in names {
                list.push(json!(format!("{prefix}/{name}")));
            }
        }
        let updated = entity.clone();
        inner.writes += 1;
        Ok(Some(updated))
    }

    fn link(&self, apartment_id: i64, project_id: i64) -> Option<Value> {
        let mut inner = self.0.lock().unwrap();
        let apartment = inner.apartments.get_mut(&apartment_id)?;
        apartment["projectId"] = json!(project_id);
        let updated = apartment.clone();
        inner.writes += 1;
        Some(updated)
    }
}

async fn field_names(mut multipart: Multipart) -> Vec<String> {
    let mut names = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        if field.name() == Some("files") {
            let name = field.file_name().unwrap_or("upload").to_string();
            // Body must be consumed for the next field to be readable.
            let _ = field.bytes().await.expect("field bytes");
            names.push(name);
        }
    }
    names
}

fn found(value: Option<Value>) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn upload_response(result: Result<Option<Value>, ()>) -> Response {
    match result {
        Err(()) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Ok(value) => found(value),
    }
}

#[derive(serde::Deserialize)]
struct LinkQuery {
    #[serde(rename = "projectId")]
    project_id: i64,
}

fn router(store: Store) -> Router {
    async fn list_projects(State(store): State<Store>) -> Json<Vec<Value>> {
        Json(store.list(Kind::Projects))
    }
    async fn get_project(State(store): State<Store>, Path(id): Path<i64>) -> Response {
        found(store.get(Kind::Projects, id))
    }
    async fn create_project(State(store): State<Store>, Json(body): Json<Value>) -> Json<Value> {
        Json(store.create(Kind::Projects, body))
    }
    async fn update_project(
        State(store): State<Store>,
        Path(id): Path<i64>,
        Json(body): Json<Value>,
    ) -> Response {
        found(store.update(Kind::Projects, id, body))
    }
    async fn upload_project_files(
        State(store): State<Store>,
        Path(id): Path<i64>,
        multipart: Multipart,
    ) -> Response {
        let names = field_names(multipart).await;
        upload_response(store.attach(Kind::Projects, id, "specs", "/api/files", false, &names))
    }
    async fn upload_project_images(
        State(store): State<Store>,
        Path(id): Path<i64>,
        multipart: Multipart,
    ) -> Response {
        let names = field_names(multipart).await;
        upload_response(store.attach(Kind::Projects, id, "image", "/api/images", false, &names))
    }

    async fn list_apartments(State(store): State<Store>) -> Json<Vec<Value>> {
        Json(store.list(Kind::Apartments))
    }
    async fn get_apartment(State(store): State<Store>, Path(id): Path<i64>) -> Response {
        found(store.get(Kind::Apartments, id))
    }
    async fn create_apartment(State(store): State<Store>, Json(body): Json<Value>) -> Json<Value> {
        Json(store.create(Kind::Apartments, body))
    }
    async fn update_apartment(
        State(store): State<Store>,
        Path(id): Path<i64>,
        Json(body): Json<Value>,
    ) -> Response {
        found(store.update(Kind::Apartments, id, body))
    }
    async fn upload_apartment_files(
        State(store): State<Store>,
        Path(id): Path<i64>,
        multipart: Multipart,
    ) -> Response {
        let names = field_names(multipart).await;
        upload_response(store.attach(Kind::Apartments, id, "flatPlan", "/api/files", false, &names))
    }
    async fn upload_apartment_images(
        State(store): State<Store>,
        Path(id): Path<i64>,
        multipart: Multipart,
    ) -> Response {
        let names = field_names(multipart).await;
        upload_response(store.attach(Kind::Apartments, id, "image", "/api/images", false, &names))
    }
    async fn link_apartment(
        State(store): State<Store>,
        Path(id): Path<i64>,
        Query(query): Query<LinkQuery>,
    ) -> Response {
        found(store.link(id, query.project_id))
    }
    async fn delete_apartment(State(store): State<Store>, Path(id): Path<i64>) -> StatusCode {
        if store.remove(Kind::Apartments, id) {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        }
    }

    async fn list_employees(State(store): State<Store>) -> Json<Vec<Value>> {
        Json(store.list(Kind::Employees))
    }
    async fn create_employee(State(store): State<Store>, Json(body): Json<Value>) -> Json<Value> {
        Json(store.create(Kind::Employees, body))
    }
    async fn update_employee(
        State(store): State<Store>,
        Path(id): Path<i64>,
        Json(body): Json<Value>,
    ) -> Response {
        found(store.update(Kind::Employees, id, body))
    }
    async fn upload_employee_image(
        State(store): State<Store>,
        Path(id): Path<i64>,
        multipart: Multipart,
    ) -> Response {
        let names = field_names(multipart).await;
        upload_response(store.attach(Kind::Employees, id, "image", "/api/images", true, &names))
    }
    async fn delete_employee(State(store): State<Store>, Path(id): Path<i64>) -> StatusCode {
        if store.remove(Kind::Employees, id) {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        }
    }

    Router::new()
        .route("/api/projects/", get(list_projects))
        .route("/api/projects/{id}", get(get_project))
        .route("/api/projects/create", post(create_project))
        .route("/api/projects/{id}/update", put(update_project))
        .route("/api/projects/{id}/uploadFiles", post(upload_project_files))
        .route("/api/projects/{id}/uploadImages", post(upload_project_images))
        .route("/api/apartments/", get(list_apartments))
        .route(
            "/api/apartments/{id}",
            get(get_apartment).delete(delete_apartment),
        )
        .route("/api/apartments/create", post(create_apartment))
        .route("/api/apartments/{id}/update", put(update_apartment))
        .route(
            "/api/apartments/{id}/uploadFiles",
            post(upload_apartment_files),
        )
        .route(
            "/api/apartments/{id}/uploadImages",
            post(upload_apartment_images),
        )
        .route("/api/apartments/{id}/project", put(link_apartment))
        .route("/api/employees/", get(list_employees))
        .route("/api/employees/create", post(create_employee))
        .route("/api/employees/{id}/update", put(update_employee))
        .route(
            "/api/employees/{id}/uploadImage",
            post(upload_employee_image),
        )
        .route("/api/employees/{id}", axum::routing::delete(delete_employee))
        .with_state(store)
}

/// Start the mock backend on an ephemeral port. Returns its store handle and
/// base URL.
pub async fn spawn_backend() -> (Store, String) {
    let store = Store::default();
    let app = router(store.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });
    (store, format!("http://{addr}"))
}
