use iced::widget::{center, container, mouse_area, opaque, stack, text};
use iced::{Color, Element, Theme, border};

/// Overlay `content` on top of `base`, dimming the background. A click on the
/// dimmed area emits `on_dismiss`; the content itself stays interactive.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let backdrop = center(opaque(content)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });
    stack![base.into(), opaque(mouse_area(backdrop).on_press(on_dismiss))].into()
}

pub fn card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> iced::widget::Container<'a, Message> {
    container(content)
        .style(container::bordered_box)
        .padding(12)
        .width(iced::Length::Fill)
}

fn status_color(status: &str) -> Color {
    match status {
        "Finished" | "SOLD" => Color::from_rgb8(0x4c, 0xaf, 0x50),
        "Ongoing" | "AVAILABLE" => Color::from_rgb8(0x21, 0x96, 0xf3),
        "Off Plan" | "RESERVED" => Color::from_rgb8(0xff, 0x98, 0x00),
        "Coming Soon" => Color::from_rgb8(0x9c, 0x27, 0xb0),
        _ => Color::from_rgb8(0x9e, 0x9e, 0x9e),
    }
}

pub fn status_badge<'a, Message: 'a>(status: &str) -> Element<'a, Message> {
    let color = status_color(status);
    container(text(status.to_string()).size(12))
        .padding(6)
        .style(move |_theme: &Theme| container::Style {
            border: border::rounded(8).color(color).width(1),
            text_color: Some(color),
            ..container::Style::default()
        })
        .into()
}

pub fn error_banner<'a, Message: 'a>(message: &str) -> Element<'a, Message> {
    container(text(message.to_string()).color(Color::from_rgb8(0xef, 0x53, 0x50)))
        .padding(8)
        .width(iced::Length::Fill)
        .style(|_theme: &Theme| container::Style {
            border: border::rounded(4)
                .color(Color::from_rgb8(0xef, 0x53, 0x50))
                .width(1),
            ..container::Style::default()
        })
        .into()
}

/// Up to two initials for the employee avatar placeholder.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Shorten card descriptions at a character boundary.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let cut: String = value.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
