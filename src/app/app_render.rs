use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::input::input_render;
use crate::notification::render_notification;
use crate::suggestions::suggestions_render;
use crate::theme;

const INPUT_HEIGHT: u16 = 3;

const HIDDEN_KEYS: &[(&str, &str)] = &[
    ("↓", "suggestions"),
    ("Enter", "submit"),
    ("Esc", "quit"),
];

const VISIBLE_KEYS: &[(&str, &str)] = &[
    ("↑↓", "navigate"),
    ("Enter/Tab", "accept"),
    ("Esc", "close"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let input_area = layout[0];
        let help_area = layout[2];

        input_render::render_field(self, frame, input_area);
        self.layout_regions.input_field = Some(input_area);

        self.render_help_line(frame, help_area);
        self.layout_regions.help_line = Some(help_area);

        // Popup overlays the body and must not cover the help line
        let popup_bounds = Rect {
            height: frame.area().height.saturating_sub(help_area.height),
            ..frame.area()
        };
        self.layout_regions.suggestions = self.render_suggestions(frame, input_area, popup_bounds);

        render_notification(frame, &mut self.notification);
    }

    fn render_suggestions(
        &mut self,
        frame: &mut Frame,
        input_area: Rect,
        bounds: Rect,
    ) -> Option<Rect> {
        suggestions_render::render_popup(
            &self.suggestions.store,
            &mut self.suggestions_scroll,
            self.max_visible,
            frame,
            bounds,
            input_area,
        )
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let keys = if self.suggestions.store.is_visible() {
            VISIBLE_KEYS
        } else {
            HIDDEN_KEYS
        };

        let mut spans = Vec::with_capacity(keys.len() * 3);
        for (key, description) in keys {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(theme::help_line::KEY),
            ));
            spans.push(Span::styled(
                format!(" {} ", description),
                Style::default().fg(theme::help_line::DESCRIPTION),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
