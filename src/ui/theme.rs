use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Palette for the current mode. `d` flips between the two.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    fn fg(&self) -> Color {
        if self.dark {
            Color::White
        } else {
            Color::Black
        }
    }

    fn muted(&self) -> Color {
        if self.dark {
            Color::DarkGray
        } else {
            Color::Gray
        }
    }

    pub fn background(&self) -> Style {
        if self.dark {
            Style::default().fg(Color::White).bg(Color::Black)
        } else {
            Style::default().fg(Color::Black).bg(Color::White)
        }
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(if self.dark { Color::Blue } else { Color::LightBlue })
    }

    pub fn title(&self) -> Style {
        self.header().add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted())
    }

    pub fn border_selected(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_running(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn border_type(&self, selected: bool) -> BorderType {
        if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        }
    }

    pub fn row_title(&self) -> Style {
        Style::default().fg(self.fg())
    }

    pub fn time(&self) -> Style {
        Style::default().fg(self.fg()).add_modifier(Modifier::BOLD)
    }

    pub fn time_running(&self) -> Style {
        Style::default()
            .fg(if self.dark { Color::LightGreen } else { Color::Green })
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_start(&self) -> Style {
        Style::default().fg(Color::Black).bg(Color::Green)
    }

    pub fn button_stop(&self) -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    pub fn button_reset(&self) -> Style {
        Style::default().fg(self.fg()).bg(self.muted())
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.muted())
    }

    pub fn footer(&self) -> Style {
        Style::default().fg(self.fg()).bg(self.muted())
    }

    pub fn footer_key(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .bg(self.muted())
            .add_modifier(Modifier::BOLD)
    }
}
