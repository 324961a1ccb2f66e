use std::path::PathBuf;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{
        button, column, container, pick_list, row, scrollable, space::horizontal as horizontal_space, text, text_input,
    },
};
use rfd::AsyncFileDialog;

use crate::{
    core::{
        admin::{
            APARTMENT_STATUSES, ApartmentForm, DashboardState, EmployeeForm, EntityTab, OpenModal,
            PROJECT_STATUSES, ProjectForm, save_apartment, save_employee, save_project,
        },
        api::{
            Apartment, ApartmentRepository, BackendClient, Employee, EmployeeRepository, Project,
            ProjectRepository,
        },
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets,
    },
};

#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    dashboard: DashboardState,
    project_form: Option<ProjectForm>,
    apartment_form: Option<ApartmentForm>,
    employee_form: Option<EmployeeForm>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Location,
    Latitude,
    Longitude,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApartmentField {
    Name,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Name,
    Email,
    PhoneNumber,
    LinkedIn,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlot {
    ProjectImages,
    ProjectSpecs,
    ApartmentImages,
    ApartmentFlatPlans,
    EmployeePhoto,
}

/// Entry in the apartment form's project picker. `id` is `None` for the
/// "leave unassigned" choice.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectChoice {
    id: Option<i64>,
    label: String,
}

impl std::fmt::Display for ProjectChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    TabSelected(EntityTab),
    SearchChanged(String),
    Refresh,
    ProjectsLoaded(Result<Vec<Project>, String>),
    ApartmentsLoaded(Result<Vec<Apartment>, String>),
    EmployeesLoaded(Result<Vec<Employee>, String>),
    OpenCreate,
    EditProject(Project),
    EditApartment(Apartment),
    EditEmployee(Employee),
    CloseModal,
    ProjectField(ProjectField, String),
    ApartmentField(ApartmentField, String),
    EmployeeField(EmployeeField, String),
    ProjectStatusPicked(String),
    ApartmentStatusPicked(String),
    ApartmentProjectPicked(ProjectChoice),
    PickFiles(FileSlot),
    FilesPicked(FileSlot, Vec<PathBuf>),
    Submit,
    ProjectSaved(Result<Project, String>),
    ApartmentSaved(Result<Apartment, String>),
    EmployeeSaved(Result<Employee, String>),
    Delete,
    Deleted(Result<EntityTab, String>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenProject(Project),
}

fn load_projects(client: BackendClient) -> Task<ScreenMessage<DashboardScreen>> {
    Task::perform(
        async move {
            client.get_projects().await.map_err(|err| {
                log::error!("projects fetch failed: {err}");
                "Failed to load projects. Please try again.".to_string()
            })
        },
        |result| ScreenMessage::ScreenMessage(DashboardMessage::ProjectsLoaded(result)),
    )
}

fn load_apartments(client: BackendClient) -> Task<ScreenMessage<DashboardScreen>> {
    Task::perform(
        async move {
            client.get_apartments().await.map_err(|err| {
                log::error!("apartments fetch failed: {err}");
                "Failed to load apartments. Please try again.".to_string()
            })
        },
        |result| ScreenMessage::ScreenMessage(DashboardMessage::ApartmentsLoaded(result)),
    )
}

fn load_employees(client: BackendClient) -> Task<ScreenMessage<DashboardScreen>> {
    Task::perform(
        async move {
            client.get_employees().await.map_err(|err| {
                log::error!("employees fetch failed: {err}");
                "Failed to load employees. Please try again.".to_string()
            })
        },
        |result| ScreenMessage::ScreenMessage(DashboardMessage::EmployeesLoaded(result)),
    )
}

impl DashboardScreen {
    pub fn new(client: &BackendClient) -> (Self, Task<ScreenMessage<Self>>) {
        let mut screen = Self::default();
        screen.dashboard.start_projects_load();
        screen.dashboard.start_apartments_load();
        screen.dashboard.start_employees_load();
        let task = Task::batch([
            load_projects(client.clone()),
            load_apartments(client.clone()),
            load_employees(client.clone()),
        ]);
        (screen, task)
    }

    fn close_modal(&mut self) {
        self.dashboard.close_modal();
        self.project_form = None;
        self.apartment_form = None;
        self.employee_form = None;
    }

    fn submit(&mut self, state: &AppState) -> Task<ScreenMessage<Self>> {
        if let Some(form) = &mut self.project_form {
            return match form.validate() {
                Err(message) => {
                    form.error = Some(message);
                    Task::none()
                }
                Ok(()) => {
                    form.error = None;
                    form.saving = true;
                    let client = state.client.clone();
                    let form = form.clone();
                    Task::perform(
                        async move {
                            save_project(&client, &form)
                                .await
                                .map_err(|err| err.to_string())
                        },
                        |result| {
                            ScreenMessage::ScreenMessage(DashboardMessage::ProjectSaved(result))
                        },
                    )
                }
            };
        }
        if let Some(form) = &mut self.apartment_form {
            return match form.validate() {
                Err(message) => {
                    form.error = Some(message);
                    Task::none()
                }
                Ok(()) => {
                    form.error = None;
                    form.saving = true;
                    let client = state.client.clone();
                    let form = form.clone();
                    Task::perform(
                        async move {
                            save_apartment(&client, &form)
                                .await
                                .map_err(|err| err.to_string())
                        },
                        |result| {
                            ScreenMessage::ScreenMessage(DashboardMessage::ApartmentSaved(result))
                        },
                    )
                }
            };
        }
        if let Some(form) = &mut self.employee_form {
            return match form.validate() {
                Err(message) => {
                    form.error = Some(message);
                    Task::none()
                }
                Ok(()) => {
                    form.error = None;
                    form.saving = true;
                    let client = state.client.clone();
                    let form = form.clone();
                    Task::perform(
                        async move {
                            save_employee(&client, &form)
                                .await
                                .map_err(|err| err.to_string())
                        },
                        |result| {
                            ScreenMessage::ScreenMessage(DashboardMessage::EmployeeSaved(result))
                        },
                    )
                }
            };
        }
        Task::none()
    }

    fn delete(&mut self, state: &AppState) -> Task<ScreenMessage<Self>> {
        if let Some(id) = self.apartment_form.as_ref().and_then(|form| form.editing) {
            let client = state.client.clone();
            return Task::perform(
                async move {
                    client
                        .delete_apartment(id)
                        .await
                        .map(|()| EntityTab::Apartments)
                        .map_err(|err| err.to_string())
                },
                |result| ScreenMessage::ScreenMessage(DashboardMessage::Deleted(result)),
            );
        }
        if let Some(id) = self.employee_form.as_ref().and_then(|form| form.editing) {
            let client = state.client.clone();
            return Task::perform(
                async move {
                    client
                        .delete_employee(id)
                        .await
                        .map(|()| EntityTab::Employees)
                        .map_err(|err| err.to_string())
                },
                |result| ScreenMessage::ScreenMessage(DashboardMessage::Deleted(result)),
            );
        }
        Task::none()
    }

    fn pick_files(&self, slot: FileSlot) -> Task<ScreenMessage<Self>> {
        let dialog = match slot {
            FileSlot::ProjectImages | FileSlot::ApartmentImages | FileSlot::EmployeePhoto => {
                AsyncFileDialog::new().add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            }
            FileSlot::ProjectSpecs | FileSlot::ApartmentFlatPlans => AsyncFileDialog::new()
                .add_filter("Documents", &["pdf", "png", "jpg", "jpeg"]),
        };
        match slot {
            FileSlot::EmployeePhoto => Task::perform(dialog.pick_file(), move |handle| {
                let paths = handle
                    .map(|file| vec![file.path().to_path_buf()])
                    .unwrap_or_default();
                ScreenMessage::ScreenMessage(DashboardMessage::FilesPicked(slot, paths))
            }),
            _ => Task::perform(dialog.pick_files(), move |handles| {
                let paths = handles
                    .map(|files| {
                        files
                            .iter()
                            .map(|file| file.path().to_path_buf())
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default();
                ScreenMessage::ScreenMessage(DashboardMessage::FilesPicked(slot, paths))
            }),
        }
    }

    fn store_picked(&mut self, slot: FileSlot, mut paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        match slot {
            FileSlot::ProjectImages => {
                if let Some(form) = &mut self.project_form {
                    form.selected_images.append(&mut paths);
                }
            }
            FileSlot::ProjectSpecs => {
                if let Some(form) = &mut self.project_form {
                    form.selected_specs.append(&mut paths);
                }
            }
            FileSlot::ApartmentImages => {
                if let Some(form) = &mut self.apartment_form {
                    form.selected_images.append(&mut paths);
                }
            }
            FileSlot::ApartmentFlatPlans => {
                if let Some(form) = &mut self.apartment_form {
                    form.selected_flat_plans.append(&mut paths);
                }
            }
            FileSlot::EmployeePhoto => {
                if let Some(form) = &mut self.employee_form {
                    form.selected_files = paths;
                }
            }
        }
    }
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = ParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DashboardMessage::TabSelected(tab) => {
                self.dashboard.tab = tab;
                Task::none()
            }
            DashboardMessage::SearchChanged(value) => {
                self.dashboard.search = value;
                Task::none()
            }
            DashboardMessage::Refresh => {
                self.dashboard.start_projects_load();
                self.dashboard.start_apartments_load();
                self.dashboard.start_employees_load();
                Task::batch([
                    load_projects(state.client.clone()),
                    load_apartments(state.client.clone()),
                    load_employees(state.client.clone()),
                ])
            }
            DashboardMessage::ProjectsLoaded(result) => {
                self.dashboard.finish_projects_load(result);
                Task::none()
            }
            DashboardMessage::ApartmentsLoaded(result) => {
                self.dashboard.finish_apartments_load(result);
                Task::none()
            }
            DashboardMessage::EmployeesLoaded(result) => {
                self.dashboard.finish_employees_load(result);
                Task::none()
            }
            DashboardMessage::OpenCreate => {
                match self.dashboard.tab {
                    EntityTab::Projects => {
                        self.dashboard.open_create_project();
                        self.project_form = Some(ProjectForm::new());
                    }
                    EntityTab::Apartments => {
                        self.dashboard.open_create_apartment();
                        self.apartment_form = Some(ApartmentForm::new());
                    }
                    EntityTab::Employees => {
                        self.dashboard.open_create_employee();
                        self.employee_form = Some(EmployeeForm::new());
                    }
                }
                Task::none()
            }
            DashboardMessage::EditProject(project) => {
                self.project_form = Some(ProjectForm::seeded(&project));
                self.dashboard.open_edit_project(project);
                Task::none()
            }
            DashboardMessage::EditApartment(apartment) => {
                self.apartment_form = Some(ApartmentForm::seeded(&apartment));
                self.dashboard.open_edit_apartment(apartment);
                Task::none()
            }
            DashboardMessage::EditEmployee(employee) => {
                self.employee_form = Some(EmployeeForm::seeded(&employee));
                self.dashboard.open_edit_employee(employee);
                Task::none()
            }
            DashboardMessage::CloseModal => {
                self.close_modal();
                Task::none()
            }
            DashboardMessage::ProjectField(field, value) => {
                if let Some(form) = &mut self.project_form {
                    match field {
                        ProjectField::Name => form.name = value,
                        ProjectField::Location => form.location = value,
                        ProjectField::Latitude => form.latitude = value,
                        ProjectField::Longitude => form.longitude = value,
                        ProjectField::Description => form.description = value,
                    }
                }
                Task::none()
            }
            DashboardMessage::ApartmentField(field, value) => {
                if let Some(form) = &mut self.apartment_form {
                    match field {
                        ApartmentField::Name => form.name = value,
                        ApartmentField::Description => form.description = value,
                    }
                }
                Task::none()
            }
            DashboardMessage::EmployeeField(field, value) => {
                if let Some(form) = &mut self.employee_form {
                    match field {
                        EmployeeField::Name => form.name = value,
                        EmployeeField::Email => form.email = value,
                        EmployeeField::PhoneNumber => form.phone_number = value,
                        EmployeeField::LinkedIn => form.linked_in = value,
                        EmployeeField::Title => form.title = value,
                    }
                }
                Task::none()
            }
            DashboardMessage::ProjectStatusPicked(status) => {
                if let Some(form) = &mut self.project_form {
                    form.status = status;
                }
                Task::none()
            }
            DashboardMessage::ApartmentStatusPicked(status) => {
                if let Some(form) = &mut self.apartment_form {
                    form.status = status;
                }
                Task::none()
            }
            DashboardMessage::ApartmentProjectPicked(choice) => {
                if let Some(form) = &mut self.apartment_form {
                    form.project_id = choice.id;
                }
                Task::none()
            }
            DashboardMessage::PickFiles(slot) => self.pick_files(slot),
            DashboardMessage::FilesPicked(slot, paths) => {
                self.store_picked(slot, paths);
                Task::none()
            }
            DashboardMessage::Submit => self.submit(state),
            DashboardMessage::ProjectSaved(result) => match result {
                Ok(_) => {
                    self.close_modal();
                    self.dashboard.start_projects_load();
                    load_projects(state.client.clone())
                }
                Err(message) => {
                    if let Some(form) = &mut self.project_form {
                        form.error = Some(message);
                        form.saving = false;
                    }
                    Task::none()
                }
            },
            DashboardMessage::ApartmentSaved(result) => match result {
                Ok(_) => {
                    self.close_modal();
                    self.dashboard.start_apartments_load();
                    load_apartments(state.client.clone())
                }
                Err(message) => {
                    if let Some(form) = &mut self.apartment_form {
                        form.error = Some(message);
                        form.saving = false;
                    }
                    Task::none()
                }
            },
            DashboardMessage::EmployeeSaved(result) => match result {
                Ok(_) => {
                    self.close_modal();
                    self.dashboard.start_employees_load();
                    load_employees(state.client.clone())
                }
                Err(message) => {
                    if let Some(form) = &mut self.employee_form {
                        form.error = Some(message);
                        form.saving = false;
                    }
                    Task::none()
                }
            },
            DashboardMessage::Delete => self.delete(state),
            DashboardMessage::Deleted(result) => match result {
                Ok(EntityTab::Apartments) => {
                    self.close_modal();
                    self.dashboard.start_apartments_load();
                    load_apartments(state.client.clone())
                }
                Ok(EntityTab::Employees) => {
                    self.close_modal();
                    self.dashboard.start_employees_load();
                    load_employees(state.client.clone())
                }
                Ok(EntityTab::Projects) => Task::none(),
                Err(message) => {
                    let error = self
                        .apartment_form
                        .as_mut()
                        .map(|form| &mut form.error)
                        .or_else(|| self.employee_form.as_mut().map(|form| &mut form.error));
                    if let Some(slot) = error {
                        *slot = Some(message);
                    }
                    Task::none()
                }
            },
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let tabs = EntityTab::ALL.iter().fold(row![].spacing(8), |acc, tab| {
            let style: fn(&iced::Theme, button::Status) -> button::Style =
                if *tab == self.dashboard.tab {
                    button::primary
                } else {
                    button::text
                };
            acc.push(
                button(text(tab.label()))
                    .style(style)
                    .on_press(ScreenMessage::ScreenMessage(DashboardMessage::TabSelected(
                        *tab,
                    ))),
            )
        });

        let new_label = match self.dashboard.tab {
            EntityTab::Projects => "New Project",
            EntityTab::Apartments => "New Apartment",
            EntityTab::Employees => "New Employee",
        };

        let header = row![
            text("Lathea Admin").size(28),
            horizontal_space(),
            tabs,
            text_input("Search...", &self.dashboard.search)
                .on_input(|value| ScreenMessage::ScreenMessage(DashboardMessage::SearchChanged(
                    value
                )))
                .width(220),
            button(text(new_label))
                .on_press(ScreenMessage::ScreenMessage(DashboardMessage::OpenCreate)),
            button("Refresh").on_press(ScreenMessage::ScreenMessage(DashboardMessage::Refresh)),
        ]
        .spacing(12)
        .align_y(Center);

        let content = match self.dashboard.tab {
            EntityTab::Projects => self.projects_view(),
            EntityTab::Apartments => self.apartments_view(),
            EntityTab::Employees => self.employees_view(),
        };

        let base: Element<'_, ScreenMessage<Self>> = container(
            column![header, content].spacing(16).padding(20),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

        match &self.dashboard.modal {
            OpenModal::Closed => base,
            _ => {
                let form = if let Some(form) = &self.project_form {
                    self.project_form_view(form)
                } else if let Some(form) = &self.apartment_form {
                    self.apartment_form_view(form)
                } else if let Some(form) = &self.employee_form {
                    self.employee_form_view(form)
                } else {
                    return base;
                };
                widgets::modal(
                    base,
                    form,
                    ScreenMessage::ScreenMessage(DashboardMessage::CloseModal),
                )
            }
        }
    }
}

impl DashboardScreen {
    fn projects_view(&self) -> Element<'_, ScreenMessage<Self>> {
        if self.dashboard.projects.is_loading() {
            return container(text("Loading projects...")).padding(20).into();
        }
        if let Some(message) = self.dashboard.projects.error() {
            return widgets::error_banner(message);
        }
        let cards = self
            .dashboard
            .filtered_projects()
            .into_iter()
            .fold(column![].spacing(10), |acc, project| {
                let details = column![
                    row![
                        text(&project.name).size(18),
                        widgets::status_badge(&project.status),
                    ]
                    .spacing(10)
                    .align_y(Center),
                    text(project.location.as_deref().unwrap_or("No location").to_string()).size(14),
                    text(widgets::truncate(
                        project.description.as_deref().unwrap_or_default(),
                        100,
                    ))
                    .size(13),
                ]
                .spacing(4);
                let actions = column![
                    button("Open").on_press(ScreenMessage::ParentMessage(
                        ParentMessage::OpenProject(project.clone())
                    )),
                    button("Edit")
                        .style(button::secondary)
                        .on_press(ScreenMessage::ScreenMessage(DashboardMessage::EditProject(
                            project.clone()
                        ))),
                ]
                .spacing(6);
                acc.push(widgets::card(
                    row![details, horizontal_space(), actions].align_y(Center),
                ))
            });
        scrollable(cards).height(Length::Fill).into()
    }

    fn apartments_view(&self) -> Element<'_, ScreenMessage<Self>> {
        if self.dashboard.apartments.is_loading() {
            return container(text("Loading apartments...")).padding(20).into();
        }
        if let Some(message) = self.dashboard.apartments.error() {
            return widgets::error_banner(message);
        }
        let cards = self
            .dashboard
            .filtered_apartments()
            .into_iter()
            .fold(column![].spacing(10), |acc, apartment| {
                let project_label = match apartment.project_id {
                    Some(id) => self.dashboard.project_name(id).to_string(),
                    None => "Unassigned".to_string(),
                };
                let details = column![
                    row![
                        text(&apartment.name).size(18),
                        widgets::status_badge(&apartment.status),
                    ]
                    .spacing(10)
                    .align_y(Center),
                    text(project_label).size(14),
                    text(widgets::truncate(
                        apartment.description.as_deref().unwrap_or_default(),
                        100,
                    ))
                    .size(13),
                ]
                .spacing(4);
                acc.push(widgets::card(
                    row![
                        details,
                        horizontal_space(),
                        button("Edit").style(button::secondary).on_press(
                            ScreenMessage::ScreenMessage(DashboardMessage::EditApartment(
                                apartment.clone()
                            ))
                        ),
                    ]
                    .align_y(Center),
                ))
            });
        scrollable(cards).height(Length::Fill).into()
    }

    fn employees_view(&self) -> Element<'_, ScreenMessage<Self>> {
        if self.dashboard.employees.is_loading() {
            return container(text("Loading employees...")).padding(20).into();
        }
        if let Some(message) = self.dashboard.employees.error() {
            return widgets::error_banner(message);
        }
        let cards = self
            .dashboard
            .filtered_employees()
            .into_iter()
            .fold(column![].spacing(10), |acc, employee| {
                let avatar = container(text(widgets::initials(&employee.name)).size(20))
                    .padding(12)
                    .style(container::bordered_box);
                let mut details = column![
                    text(&employee.name).size(18),
                    text(employee.title.as_deref().unwrap_or_default().to_string()).size(14),
                    text(&employee.email).size(13),
                ]
                .spacing(4);
                if let Some(phone) = &employee.phone_number {
                    details = details.push(text(phone.clone()).size(13));
                }
                if let Some(handle) = employee.linkedin_handle() {
                    details = details.push(text(format!("in/{handle}")).size(13));
                }
                acc.push(widgets::card(
                    row![
                        avatar,
                        details,
                        horizontal_space(),
                        button("Edit").style(button::secondary).on_press(
                            ScreenMessage::ScreenMessage(DashboardMessage::EditEmployee(
                                employee.clone()
                            ))
                        ),
                    ]
                    .spacing(12)
                    .align_y(Center),
                ))
            });
        scrollable(cards).height(Length::Fill).into()
    }

    fn project_form_view(&self, form: &ProjectForm) -> Element<'_, ScreenMessage<Self>> {
        let title = if form.editing.is_some() {
            "Edit Project"
        } else {
            "New Project"
        };
        let statuses: Vec<String> = PROJECT_STATUSES.iter().map(|s| s.to_string()).collect();
        let mut content = column![
            text(title).size(24),
            text_input("Name", &form.name).on_input(|v| ScreenMessage::ScreenMessage(
                DashboardMessage::ProjectField(ProjectField::Name, v)
            )),
            text_input("Location", &form.location).on_input(|v| ScreenMessage::ScreenMessage(
                DashboardMessage::ProjectField(ProjectField::Location, v)
            )),
            row![
                text_input("Latitude", &form.latitude).on_input(|v| {
                    ScreenMessage::ScreenMessage(DashboardMessage::ProjectField(
                        ProjectField::Latitude,
                        v,
                    ))
                }),
                text_input("Longitude", &form.longitude).on_input(|v| {
                    ScreenMessage::ScreenMessage(DashboardMessage::ProjectField(
                        ProjectField::Longitude,
                        v,
                    ))
                }),
            ]
            .spacing(8),
            pick_list(statuses, Some(form.status.clone()), |status| {
                ScreenMessage::ScreenMessage(DashboardMessage::ProjectStatusPicked(status))
            })
            .placeholder("Status"),
            text_input("Description", &form.description).on_input(|v| {
                ScreenMessage::ScreenMessage(DashboardMessage::ProjectField(
                    ProjectField::Description,
                    v,
                ))
            }),
            row![
                button(text(format!(
                    "Images ({} existing, {} new)",
                    form.existing_images.len(),
                    form.selected_images.len(),
                )))
                .style(button::secondary)
                .on_press(ScreenMessage::ScreenMessage(DashboardMessage::PickFiles(
                    FileSlot::ProjectImages
                ))),
                button(text(format!(
                    "Specs ({} existing, {} new)",
                    form.existing_specs.len(),
                    form.selected_specs.len(),
                )))
                .style(button::secondary)
                .on_press(ScreenMessage::ScreenMessage(DashboardMessage::PickFiles(
                    FileSlot::ProjectSpecs
                ))),
            ]
            .spacing(8),
        ]
        .spacing(10);
        if let Some(message) = &form.error {
            content = content.push(widgets::error_banner(message));
        }
        content = content.push(Self::form_actions(form.saving, false));
        container(content)
            .width(440)
            .padding(16)
            .style(container::rounded_box)
            .into()
    }

    fn apartment_form_view(&self, form: &ApartmentForm) -> Element<'_, ScreenMessage<Self>> {
        let title = if form.editing.is_some() {
            "Edit Apartment"
        } else {
            "New Apartment"
        };
        let statuses: Vec<String> = APARTMENT_STATUSES.iter().map(|s| s.to_string()).collect();

        let mut choices = vec![ProjectChoice {
            id: None,
            label: "Unassigned".to_string(),
        }];
        if let Some(projects) = self.dashboard.projects.ready() {
            choices.extend(projects.iter().map(|project| ProjectChoice {
                id: Some(project.id),
                label: project.name.clone(),
            }));
        }
        let selected = choices
            .iter()
            .find(|choice| choice.id == form.project_id)
            .cloned();

        let mut content = column![
            text(title).size(24),
            text_input("Name", &form.name).on_input(|v| ScreenMessage::ScreenMessage(
                DashboardMessage::ApartmentField(ApartmentField::Name, v)
            )),
            pick_list(statuses, Some(form.status.clone()), |status| {
                ScreenMessage::ScreenMessage(DashboardMessage::ApartmentStatusPicked(status))
            })
            .placeholder("Status"),
            pick_list(choices, selected, |choice| {
                ScreenMessage::ScreenMessage(DashboardMessage::ApartmentProjectPicked(choice))
            })
            .placeholder("Project"),
            text_input("Description", &form.description).on_input(|v| {
                ScreenMessage::ScreenMessage(DashboardMessage::ApartmentField(
                    ApartmentField::Description,
                    v,
                ))
            }),
            row![
                button(text(format!(
                    "Images ({} existing, {} new)",
                    form.existing_images.len(),
                    form.selected_images.len(),
                )))
                .style(button::secondary)
                .on_press(ScreenMessage::ScreenMessage(DashboardMessage::PickFiles(
                    FileSlot::ApartmentImages
                ))),
                button(text(format!(
                    "Flat plans ({} existing, {} new)",
                    form.existing_flat_plans.len(),
                    form.selected_flat_plans.len(),
                )))
                .style(button::secondary)
                .on_press(ScreenMessage::ScreenMessage(DashboardMessage::PickFiles(
                    FileSlot::ApartmentFlatPlans
                ))),
            ]
            .spacing(8),
        ]
        .spacing(10);
        if let Some(message) = &form.error {
            content = content.push(widgets::error_banner(message));
        }
        content = content.push(Self::form_actions(form.saving, form.editing.is_some()));
        container(content)
            .width(440)
            .padding(16)
            .style(container::rounded_box)
            .into()
    }

    fn employee_form_view(&self, form: &EmployeeForm) -> Element<'_, ScreenMessage<Self>> {
        let title = if form.editing.is_some() {
            "Edit Employee"
        } else {
            "New Employee"
        };
        let photo_label = match (&form.existing_image, form.selected_files.is_empty()) {
            (_, false) => "Photo (new file selected)".to_string(),
            (Some(_), true) => "Photo (keep current)".to_string(),
            (None, true) => "Photo (none)".to_string(),
        };
        let mut content = column![
            text(title).size(24),
            text_input("Name", &form.name).on_input(|v| ScreenMessage::ScreenMessage(
                DashboardMessage::EmployeeField(EmployeeField::Name, v)
            )),
            text_input("Email", &form.email).on_input(|v| ScreenMessage::ScreenMessage(
                DashboardMessage::EmployeeField(EmployeeField::Email, v)
            )),
            text_input("Phone number", &form.phone_number).on_input(|v| {
                ScreenMessage::ScreenMessage(DashboardMessage::EmployeeField(
                    EmployeeField::PhoneNumber,
                    v,
                ))
            }),
            text_input("LinkedIn", &form.linked_in).on_input(|v| ScreenMessage::ScreenMessage(
                DashboardMessage::EmployeeField(EmployeeField::LinkedIn, v)
            )),
            text_input("Title", &form.title).on_input(|v| ScreenMessage::ScreenMessage(
                DashboardMessage::EmployeeField(EmployeeField::Title, v)
            )),
            button(text(photo_label))
                .style(button::secondary)
                .on_press(ScreenMessage::ScreenMessage(DashboardMessage::PickFiles(
                    FileSlot::EmployeePhoto
                ))),
        ]
        .spacing(10);
        if let Some(message) = &form.error {
            content = content.push(widgets::error_banner(message));
        }
        content = content.push(Self::form_actions(form.saving, form.editing.is_some()));
        container(content)
            .width(440)
            .padding(16)
            .style(container::rounded_box)
            .into()
    }

    fn form_actions(saving: bool, deletable: bool) -> Element<'static, ScreenMessage<Self>> {
        let mut actions = row![
            button("Cancel")
                .style(button::text)
                .on_press(ScreenMessage::ScreenMessage(DashboardMessage::CloseModal)),
        ]
        .spacing(8);
        if deletable {
            actions = actions.push(
                button("Delete")
                    .style(button::danger)
                    .on_press_maybe(
                        (!saving).then_some(ScreenMessage::ScreenMessage(DashboardMessage::Delete)),
                    ),
            );
        }
        actions = actions.push(horizontal_space()).push(
            button(if saving { "Saving..." } else { "Save" }).on_press_maybe(
                (!saving).then_some(ScreenMessage::ScreenMessage(DashboardMessage::Submit)),
            ),
        );
        actions.into()
    }
}
