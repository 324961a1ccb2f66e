use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, image, row, scrollable, space::horizontal as horizontal_space, text},
};

use crate::{
    core::{
        admin::GalleryState,
        api::BackendClient,
        images::{ImageCandidates, ImageResolver},
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets,
    },
};

/// One gallery image working through its candidate URLs.
#[derive(Debug, Clone)]
enum Slot {
    Loading(ImageCandidates),
    Ready(image::Handle),
    Missing,
}

#[derive(Debug, Clone)]
pub struct ProjectDetailScreen {
    project: crate::core::api::Project,
    gallery: GalleryState,
    slots: Vec<Slot>,
}

#[derive(Debug, Clone)]
pub enum ProjectDetailMessage {
    Fetched(usize, Result<Vec<u8>, String>),
    Next,
    Prev,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Back,
}

fn fetch(
    client: BackendClient,
    index: usize,
    url: String,
) -> Task<ScreenMessage<ProjectDetailScreen>> {
    Task::perform(
        async move {
            client
                .fetch_bytes(&url)
                .await
                .map_err(|err| err.to_string())
        },
        move |result| {
            ScreenMessage::ScreenMessage(ProjectDetailMessage::Fetched(index, result))
        },
    )
}

impl ProjectDetailScreen {
    pub fn open(
        project: crate::core::api::Project,
        client: &BackendClient,
        resolver: &ImageResolver,
    ) -> (Self, Task<ScreenMessage<Self>>) {
        let paths = project.image.clone().unwrap_or_default();
        let slots: Vec<Slot> = paths
            .iter()
            .map(|path| Slot::Loading(resolver.candidates(path)))
            .collect();
        let mut tasks = Vec::new();
        for (index, slot) in slots.iter().enumerate() {
            if let Slot::Loading(candidates) = slot {
                if let Some(url) = candidates.current() {
                    tasks.push(fetch(client.clone(), index, url.to_string()));
                }
            }
        }
        let screen = Self {
            gallery: GalleryState::new(slots.len()),
            project,
            slots,
        };
        (screen, Task::batch(tasks))
    }
}

impl Screen for ProjectDetailScreen {
    type Message = ProjectDetailMessage;
    type ParentMessage = ParentMessage;

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProjectDetailMessage::Fetched(index, result) => {
                let Some(slot) = self.slots.get_mut(index) else {
                    return Task::none();
                };
                let Slot::Loading(candidates) = slot else {
                    return Task::none();
                };
                match result {
                    Ok(bytes) => {
                        *slot = Slot::Ready(image::Handle::from_bytes(bytes));
                        Task::none()
                    }
                    Err(err) => match candidates.advance() {
                        Some(url) => {
                            log::debug!("image candidate failed, trying next: {err}");
                            fetch(state.client.clone(), index, url.to_string())
                        }
                        None => {
                            log::warn!("all image candidates failed: {err}");
                            *slot = Slot::Missing;
                            Task::none()
                        }
                    },
                }
            }
            ProjectDetailMessage::Next => {
                self.gallery.next();
                Task::none()
            }
            ProjectDetailMessage::Prev => {
                self.gallery.prev();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let header = row![
            button("Back").on_press(ScreenMessage::ParentMessage(ParentMessage::Back)),
            text(&self.project.name).size(28),
            widgets::status_badge(&self.project.status),
            horizontal_space(),
        ]
        .spacing(12)
        .align_y(Center);

        let gallery = self.gallery_view();

        let mut details = column![].spacing(6);
        if let Some(location) = &self.project.location {
            details = details.push(text(location.clone()).size(16));
        }
        if let (Some(lat), Some(lon)) = (self.project.latitude, self.project.longitude) {
            details = details.push(text(format!("{lat:.5}, {lon:.5}")).size(13));
        }
        if let Some(description) = &self.project.description {
            details = details.push(text(description.clone()).size(14));
        }
        if let Some(specs) = &self.project.specs {
            if !specs.is_empty() {
                details = details.push(text(format!("{} spec file(s)", specs.len())).size(13));
            }
        }

        let mut apartments = column![text("Apartments").size(20)].spacing(8);
        match self.project.apartments.as_deref() {
            Some([]) | None => {
                apartments = apartments.push(text("No apartments in this project.").size(14));
            }
            Some(list) => {
                for apartment in list {
                    apartments = apartments.push(widgets::card(
                        row![
                            text(&apartment.name).size(16),
                            widgets::status_badge(&apartment.status),
                            horizontal_space(),
                        ]
                        .spacing(10)
                        .align_y(Center),
                    ));
                }
            }
        }

        scrollable(
            column![header, gallery, details, apartments]
                .spacing(16)
                .padding(20),
        )
        .height(Length::Fill)
        .into()
    }
}

impl ProjectDetailScreen {
    fn gallery_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let current = match self.gallery.index().and_then(|i| self.slots.get(i)) {
            None => container(text("No image available").size(16))
                .center_x(Length::Fill)
                .padding(40),
            Some(Slot::Loading(_)) => container(text("Loading image...").size(16))
                .center_x(Length::Fill)
                .padding(40),
            Some(Slot::Missing) => container(text("No image available").size(16))
                .center_x(Length::Fill)
                .padding(40),
            Some(Slot::Ready(handle)) => container(image(handle.clone()).height(320))
                .center_x(Length::Fill),
        };

        if self.gallery.len() < 2 {
            return current.into();
        }

        let position = self
            .gallery
            .index()
            .map(|i| format!("{} / {}", i + 1, self.gallery.len()))
            .unwrap_or_default();
        column![
            current,
            row![
                button("<").on_press(ScreenMessage::ScreenMessage(ProjectDetailMessage::Prev)),
                text(position).size(13),
                button(">").on_press(ScreenMessage::ScreenMessage(ProjectDetailMessage::Next)),
            ]
            .spacing(12)
            .align_y(Center),
        ]
        .spacing(8)
        .align_x(Center)
        .into()
    }
}
