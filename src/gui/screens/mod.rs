pub mod dashboard;
pub mod project_detail;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Dashboard(dashboard::DashboardScreen),
    ProjectDetail(project_detail::ProjectDetailScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Dashboard(screen) => screen.view().map(Message::Dashboard),
            ScreenData::ProjectDetail(screen) => screen.view().map(Message::ProjectDetail),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::Dashboard(page), Message::Dashboard(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Dashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    dashboard::ParentMessage::OpenProject(project) => {
                        let (screen, task) = project_detail::ProjectDetailScreen::open(
                            project,
                            &state.client,
                            &state.resolver,
                        );
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::ProjectDetail(screen),
                        )))
                        .chain(
                            task.map(Message::ProjectDetail)
                                .map(ScreenMessage::ScreenMessage),
                        )
                    }
                },
            },
            (ScreenData::ProjectDetail(page), Message::ProjectDetail(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ProjectDetail)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    project_detail::ParentMessage::Back => {
                        let (screen, task) = dashboard::DashboardScreen::new(&state.client);
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::Dashboard(screen),
                        )))
                        .chain(
                            task.map(Message::Dashboard)
                                .map(ScreenMessage::ScreenMessage),
                        )
                    }
                },
            },
            // A message addressed to a screen we already left is dropped.
            _ => Task::none(),
        }
    }
}
