use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::autocomplete::render_dropdown;
use crate::input::render_input;
use crate::page::Route;
use crate::panels::render_panels;
use crate::widgets::placement;

const INPUT_HEIGHT: u16 = 3;
const HOME_INPUT_WIDTH: u16 = 60;
const APP_TITLE: &str = "searchdeck";

impl App {
    /// Render the UI
    ///
    /// Clickable regions are re-recorded every frame.
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let input_area = match self.page.route() {
            Route::Home => self.render_home(frame),
            Route::Results => self.render_results(frame),
        };

        // Dropdowns draw last so they sit on top of everything
        if let Some(input) = self.page.inputs.first() {
            render_dropdown(frame, &input.autocomplete, input_area, &mut self.regions);
        }
    }

    /// Centered search field under the app name
    fn render_home(&mut self, frame: &mut Frame) -> Rect {
        let area = frame.area();
        let width = HOME_INPUT_WIDTH.min(area.width.saturating_sub(4)).max(10);
        let input_area = placement::centered(area, width, INPUT_HEIGHT);

        if input_area.y > area.y {
            let title_area = Rect::new(input_area.x, input_area.y - 1, input_area.width, 1);
            let title = Paragraph::new(Line::from(Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )))
            .centered();
            frame.render_widget(title, title_area);
        }

        self.render_inputs(frame, input_area);
        input_area
    }

    /// Header field, query line, panels and key hints
    fn render_results(&mut self, frame: &mut Frame) -> Rect {
        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT), // Header search field
            Constraint::Length(1),            // Active query
            Constraint::Min(0),               // Panels
            Constraint::Length(1),            // Key hints
        ])
        .split(frame.area());

        let input_area = layout[0];
        self.render_inputs(frame, input_area);

        let query_line = if self.page.query.is_empty() {
            Line::from(Span::styled("No query", Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(vec![
                Span::styled("Results for: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.page.query.as_str(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ])
        };
        frame.render_widget(Paragraph::new(query_line), layout[1]);

        let focus = self.panel_focus();
        render_panels(frame, layout[2], &self.page.panels, focus, &mut self.regions);

        let hints = Paragraph::new(Line::from(Span::styled(
            "Tab: switch panel | Enter: open | Esc: close/quit | Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(hints, layout[3]);

        input_area
    }

    fn render_inputs(&mut self, frame: &mut Frame, area: Rect) {
        let focus = self.focus;
        if let Some(input) = self.page.inputs.first_mut() {
            let focused = focus == Focus::Input(input.id);
            render_input(frame, input, area, focused, &mut self.regions);
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
