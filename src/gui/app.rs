use iced::{Element, Task, Theme};

use crate::core::api::ApiConfig;
use crate::gui::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, dashboard::DashboardScreen},
};

pub struct AdminApp {
    state: AppState,
    screen: ScreenData,
}

impl AdminApp {
    pub fn new(config: ApiConfig) -> (Self, Task<Message>) {
        let state = AppState::new(config);
        let (dashboard, task) = DashboardScreen::new(&state.client);
        (
            Self {
                state,
                screen: ScreenData::Dashboard(dashboard),
            },
            task.map(Message::Dashboard),
        )
    }

    pub fn title(&self) -> String {
        "Lathea Admin Console".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Run the dashboard until the window closes.
pub fn run(config: ApiConfig) -> anyhow::Result<()> {
    iced::application(
        move || AdminApp::new(config.clone()),
        AdminApp::update,
        AdminApp::view,
    )
    .title(AdminApp::title)
    .theme(AdminApp::theme)
    .run()?;
    Ok(())
}
