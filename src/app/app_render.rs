use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::theme;

const FIELD_HEIGHT: u16 = 3;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (field_area, body_area, help_area) = (layout[0], layout[1], layout[2]);

        let field_rect = crate::input::input_render::render_field(self, frame, field_area);
        self.layout_regions.search_field = Some(field_rect);

        self.render_history(frame, body_area);

        crate::help::help_line_render::render_line(self, frame, help_area);
        self.layout_regions.help_line = Some(help_area);

        // Drawn last among the panes so it overlays the history
        if let Some(dropdown_rect) =
            crate::dropdown::dropdown_render::render_dropdown(self, frame, field_rect)
        {
            self.layout_regions.dropdown = Some(dropdown_rect);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let lines: Vec<Line> = self
            .routes()
            .iter()
            .rev()
            .map(|route| Line::styled(format!(" {}", route), Style::default().fg(theme::help_line::ROUTE)))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Navigations ")
            .border_style(Style::default().fg(theme::input::BORDER_UNFOCUSED));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
