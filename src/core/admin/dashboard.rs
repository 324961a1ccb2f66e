//! Dashboard orchestration state: active tab, per-kind load states, the
//! entity selected for editing, and the derived id -> project-name index.
//!
//! Concurrent edits of the same record are last-write-wins; the backend keeps
//! no version field and this layer does not pretend otherwise.

use std::collections::HashMap;

use crate::core::api::{Apartment, Employee, Project};

pub const UNKNOWN_PROJECT: &str = "Unknown Project";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntityTab {
    #[default]
    Projects,
    Apartments,
    Employees,
}

impl EntityTab {
    pub const ALL: [EntityTab; 3] = [EntityTab::Projects, EntityTab::Apartments, EntityTab::Employees];

    pub fn label(&self) -> &'static str {
        match self {
            EntityTab::Projects => "Projects",
            EntityTab::Apartments => "Apartments",
            EntityTab::Employees => "Employees",
        }
    }
}

/// Fetch lifecycle for one collection: `Idle -> Loading -> Ready | Failed`,
/// back to `Loading` on any refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Which create/edit overlay is open. `None` inside a variant means
/// create-mode; a seeded entity means edit-mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OpenModal {
    #[default]
    Closed,
    Project(Option<Project>),
    Apartment(Option<Apartment>),
    Employee(Option<Employee>),
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub tab: EntityTab,
    pub search: String,
    pub projects: LoadState<Vec<Project>>,
    pub apartments: LoadState<Vec<Apartment>>,
    pub employees: LoadState<Vec<Employee>>,
    pub modal: OpenModal,
    project_names: HashMap<i64, String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_projects_load(&mut self) {
        self.projects = LoadState::Loading;
    }

    pub fn start_apartments_load(&mut self) {
        self.apartments = LoadState::Loading;
    }

    pub fn start_employees_load(&mut self) {
        self.employees = LoadState::Loading;
    }

    /// Record a finished projects fetch. The id -> name index is rebuilt here,
    /// once per list change, rather than per lookup.
    pub fn finish_projects_load(&mut self, result: Result<Vec<Project>, String>) {
        match result {
            Ok(projects) => {
                self.project_names = projects
                    .iter()
                    .map(|project| (project.id, project.name.clone()))
                    .collect();
                self.projects = LoadState::Ready(projects);
            }
            Err(message) => {
                self.project_names.clear();
                self.projects = LoadState::Failed(message);
            }
        }
    }

    pub fn finish_apartments_load(&mut self, result: Result<Vec<Apartment>, String>) {
        self.apartments = match result {
            Ok(apartments) => LoadState::Ready(apartments),
            Err(message) => LoadState::Failed(message),
        };
    }

    pub fn finish_employees_load(&mut self, result: Result<Vec<Employee>, String>) {
        self.employees = match result {
            Ok(employees) => LoadState::Ready(employees),
            Err(message) => LoadState::Failed(message),
        };
    }

    /// O(1) project-name lookup for apartment cards. Dangling ids (a deleted
    /// project still referenced by an apartment) fall back to a label.
    pub fn project_name(&self, project_id: i64) -> &str {
        self.project_names
            .get(&project_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_PROJECT)
    }

    pub fn open_create_project(&mut self) {
        self.modal = OpenModal::Project(None);
    }

    pub fn open_edit_project(&mut self, project: Project) {
        self.modal = OpenModal::Project(Some(project));
    }

    pub fn open_create_apartment(&mut self) {
        self.modal = OpenModal::Apartment(None);
    }

    pub fn open_edit_apartment(&mut self, apartment: Apartment) {
        self.modal = OpenModal::Apartment(Some(apartment));
    }

    pub fn open_create_employee(&mut self) {
        self.modal = OpenModal::Employee(None);
    }

    pub fn open_edit_employee(&mut self, employee: Employee) {
        self.modal = OpenModal::Employee(Some(employee));
    }

    /// Closing always clears the selection, whether or not a save happened.
    pub fn close_modal(&mut self) {
        self.modal = OpenModal::Closed;
    }

    fn matches(&self, haystacks: &[Option<&str>]) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        haystacks
            .iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&needle))
    }

    pub fn filtered_projects(&self) -> Vec<&Project> {
        self.projects
            .ready()
            .map(|projects| {
                projects
                    .iter()
                    .filter(|p| {
                        self.matches(&[
                            Some(&p.name),
                            p.location.as_deref(),
                            Some(&p.status),
                        ])
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn filtered_apartments(&self) -> Vec<&Apartment> {
        self.apartments
            .ready()
            .map(|apartments| {
                apartments
                    .iter()
                    .filter(|a| {
                        let project_name = a.project_id.map(|id| self.project_name(id));
                        self.matches(&[Some(&a.name), Some(&a.status), project_name])
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn filtered_employees(&self) -> Vec<&Employee> {
        self.employees
            .ready()
            .map(|employees| {
                employees
                    .iter()
                    .filter(|e| {
                        self.matches(&[Some(&e.name), Some(&e.email), e.title.as_deref()])
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
