//! UI rendering

use super::app::{App, CELL_WIDTH, Mode, ROW_LABEL_WIDTH};
use super::help::help_lines;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};
use tinysheet_core::CellRef;
use tinysheet_engine::engine::{fit_to_width, parse_literal};

const STATUS_BAR_HEIGHT: u16 = 1;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(f.area());

    draw_grid(f, app, chunks[0]);
    draw_status_bar(f, app, chunks[1]);

    if app.mode == Mode::Help {
        draw_help_modal(f);
    }
}

/// Pad a cell's display into its column: numbers right, text left.
fn cell_content(display: &str) -> String {
    let shown: String = fit_to_width(display, CELL_WIDTH)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let inner = CELL_WIDTH - 1;
    if parse_literal(display).is_some() {
        format!("{shown:>inner$} ")
    } else {
        format!("{shown:<CELL_WIDTH$}")
    }
}

fn draw_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let header_style = Style::default().fg(Color::DarkGray);
    let active_style = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut header_cells = vec![Cell::from(" ")];
    for col in app.visible_col_range() {
        let style = if col == app.cursor_col {
            active_style
        } else {
            header_style
        };
        let name = CellRef::col_to_letter(col).to_string();
        header_cells.push(Cell::from(format!("{name:^CELL_WIDTH$}")).style(style));
    }
    let header = Row::new(header_cells).height(1);

    let mut rows = Vec::new();
    for row in app.visible_row_range() {
        let style = if row == app.cursor_row {
            active_style
        } else {
            header_style
        };
        let label_width = ROW_LABEL_WIDTH - 1;
        let mut cells = vec![Cell::from(format!("{:>label_width$} ", row + 1)).style(style)];

        for col in app.visible_col_range() {
            let display = app.sheet.display(CellRef::new(row, col));
            let is_cursor = row == app.cursor_row && col == app.cursor_col;
            let style = if is_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if display.starts_with('#') {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            cells.push(Cell::from(cell_content(&display)).style(style));
        }
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(ROW_LABEL_WIDTH as u16)];
    widths.extend(app.visible_col_range().map(|_| Constraint::Length(CELL_WIDTH as u16)));

    let table = Table::new(rows, widths).header(header).column_spacing(0);
    f.render_widget(table, area);
}

fn draw_status_bar(f: &mut Frame, app: &mut App, area: Rect) {
    let line = match app.mode {
        Mode::Prompt(kind) => Line::from(vec![
            Span::styled(
                format!("{}: ", kind.label()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(app.prompt.text().to_string()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Mode::Normal | Mode::Help => {
            let style = if app.status_message.is_some() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(app.status_line(), style))
        }
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_modal(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" tinysheet help ")
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().fg(Color::White).bg(Color::Black));

    let lines: Vec<Line> = help_lines()
        .into_iter()
        .map(|text| {
            let style = if text.starts_with("  ") || text.is_empty() {
                Style::default().fg(Color::White)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::super::prompt::PromptKind;
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        app.resize(width, height);
        app.begin_pass();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_cell_content_alignment() {
        assert_eq!(cell_content("42"), "       42 ");
        assert_eq!(cell_content("hi"), "hi        ");
        assert_eq!(cell_content("#CYCLE"), "#CYCLE    ");
        assert_eq!(cell_content("a long piece of text"), "a long p… ");
        assert_eq!(cell_content("two\nlines"), "two lines ");
    }

    #[test]
    fn test_grid_layout() {
        let mut app = App::default();
        app.sheet.set_text(CellRef::new(0, 0), "2");
        app.sheet.set_text(CellRef::new(0, 1), "=A1*1.5");
        app.sheet.set_text(CellRef::new(9, 0), "label");
        let lines = render(&mut app, 44, 13);

        assert_eq!(lines[0], format!("{:4}{:^10}{:^10}{:^10}{:^10}", "", "A", "B", "C", "D"));
        assert_eq!(&lines[1][..24], format!("{:>3} {:>9} {:>9} ", 1, 2, 3));
        assert_eq!(&lines[10][..14], format!("{:>3} {:<10}", 10, "label"));
        assert!(lines[12].starts_with("A1 [2] val=2"));
    }

    #[test]
    fn test_prompt_replaces_status_line() {
        let mut app = App::default();
        app.open_prompt(PromptKind::Goto, "B7");
        let lines = render(&mut app, 40, 6);
        assert!(lines[5].starts_with("Goto: B7_"), "{}", lines[5]);
    }

    #[test]
    fn test_help_overlay_is_drawn() {
        let mut app = App::default();
        app.mode = Mode::Help;
        let lines = render(&mut app, 80, 30);
        assert!(lines.iter().any(|l| l.contains("tinysheet help")));
        assert!(lines.iter().any(|l| l.contains("Quit")));
    }
}
