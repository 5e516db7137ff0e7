use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Color;

use super::*;
use crate::page::InputId;
use crate::test_utils::test_helpers::buffer_lines;

fn render(input: &mut SearchInput, focused: bool) -> (Terminal<TestBackend>, LayoutRegions) {
    let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
    let mut regions = LayoutRegions::new();
    terminal
        .draw(|f| render_input(f, input, Rect::new(0, 0, 40, 3), focused, &mut regions))
        .unwrap();
    (terminal, regions)
}

#[test]
fn test_renders_value_and_title() {
    let mut input = SearchInput::attach(InputId::new(1), "ferris crab", false);
    let (terminal, _) = render(&mut input, true);

    let lines = buffer_lines(terminal.backend().buffer());
    assert!(lines[0].contains("Search"));
    assert!(lines[1].contains("ferris crab"));
}

#[test]
fn test_border_color_follows_focus() {
    let mut input = SearchInput::attach(InputId::new(1), "", false);

    let (terminal, _) = render(&mut input, true);
    assert_eq!(terminal.backend().buffer()[(0, 0)].fg, Color::Cyan);

    let (terminal, _) = render(&mut input, false);
    assert_eq!(terminal.backend().buffer()[(0, 0)].fg, Color::DarkGray);
}

#[test]
fn test_records_click_region() {
    let mut input = SearchInput::attach(InputId::new(5), "", false);
    let (_, regions) = render(&mut input, false);
    assert_eq!(
        regions.region_at(10, 1),
        Some(Region::SearchInput(InputId::new(5)))
    );
}
