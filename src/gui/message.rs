use crate::gui::screens::{
    ScreenData, ScreenMessage, dashboard::DashboardScreen, project_detail::ProjectDetailScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(ScreenMessage<DashboardScreen>),
    ProjectDetail(ScreenMessage<ProjectDetailScreen>),
    ChangeScreen(ScreenData),
}
