#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Margin;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::AuthField;
use crate::domain::models::Focus;
use crate::domain::models::Loading;
use crate::domain::models::Screen;
use crate::domain::models::StatusType;
use crate::domain::models::TextArea;
use crate::domain::models::MAX_RATING;
use crate::domain::services::AppState;
use crate::domain::services::CHAT_TITLE;
use crate::domain::services::PASSWORD_TITLE;
use crate::domain::services::SEARCH_TITLE;
use crate::domain::services::USERNAME_TITLE;

pub const RECOMMENDATIONS_PLACEHOLDER: &str =
    "Select games and click the button to get recommendations.";
pub const SELECTION_PLACEHOLDER: &str = "No games selected yet.";
pub const CHAT_HINT: &str = "Put a specific game name in [brackets] for a direct lookup.";

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    return Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1];
}

fn status_line<'a>(app_state: &AppState) -> Line<'a> {
    if let Some(status) = &app_state.status {
        let color = match status.stype {
            StatusType::Info => Color::Green,
            StatusType::Error => Color::Red,
        };
        return Line::from(Span::styled(
            status.text.to_string(),
            Style::default().fg(color),
        ));
    }

    return Line::from("");
}

fn hotkeys_line<'a>(app_state: &AppState) -> Line<'a> {
    let chat_label = if app_state.chat_open {
        "Close"
    } else {
        "Ask AI"
    };

    let mut spans = vec![];
    for (key, label) in [
        ("Tab", "Focus"),
        ("Ctrl+G", "Get recommendations"),
        ("Ctrl+A", chat_label),
        ("Ctrl+L", "Log out"),
        ("Ctrl+C", "Quit"),
    ] {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::raw(format!(" {label}  ")));
    }

    return Line::from(spans);
}

pub fn render(frame: &mut Frame, app_state: &mut AppState) {
    match app_state.screen {
        Screen::Login | Screen::Register => render_auth(frame, app_state),
        Screen::Home => render_home(frame, app_state),
    }
}

fn render_auth(frame: &mut Frame, app_state: &mut AppState) {
    let (title, switch_hint, pending) = match app_state.screen {
        Screen::Register => (
            "Register",
            "Already have an account? Press Ctrl+N to log in.",
            "Registering...",
        ),
        _ => (
            "Log in",
            "Don't have an account? Press Ctrl+N to register now.",
            "Logging in...",
        ),
    };

    let area = centered_rect(60, 60, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(TextArea::block(title, true), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area.inner(&Margin {
            vertical: 1,
            horizontal: 2,
        }));

    app_state.username.set_block(TextArea::block(
        USERNAME_TITLE,
        app_state.auth_field == AuthField::Username,
    ));
    app_state.password.set_block(TextArea::block(
        PASSWORD_TITLE,
        app_state.auth_field == AuthField::Password,
    ));
    frame.render_widget(app_state.username.widget(), layout[0]);

    if app_state.auth_pending {
        Loading::new(pending).render(frame, layout[1]);
    } else {
        frame.render_widget(app_state.password.widget(), layout[1]);
    }

    frame.render_widget(Paragraph::new(status_line(app_state)), layout[2]);
    frame.render_widget(
        Paragraph::new(switch_hint).style(Style::default().fg(Color::DarkGray)),
        layout[3],
    );
}

fn render_home(frame: &mut Frame, app_state: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3), Constraint::Min(3)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(3), Constraint::Min(3)])
        .split(columns[1]);

    render_search(frame, app_state, left[0], left[1]);
    render_selection(frame, app_state, right[0]);
    render_recommendations(frame, app_state, right[1]);

    frame.render_widget(Paragraph::new(status_line(app_state)), layout[1]);
    frame.render_widget(Paragraph::new(hotkeys_line(app_state)), layout[2]);

    if app_state.chat_open {
        render_chat(frame, app_state, centered_rect(70, 80, layout[0]));
    }
}

fn render_search(frame: &mut Frame, app_state: &mut AppState, input_rect: Rect, list_rect: Rect) {
    app_state.search_input.set_block(TextArea::block(
        SEARCH_TITLE,
        app_state.focus == Focus::Search,
    ));
    frame.render_widget(app_state.search_input.widget(), input_rect);

    let items = app_state
        .search_results
        .iter()
        .map(|name| return ListItem::new(name.to_string()))
        .collect::<Vec<ListItem>>();

    let mut state = ListState::default();
    if app_state.focus == Focus::Results && !items.is_empty() {
        state.select(Some(app_state.result_cursor));
    }

    let list = List::new(items)
        .block(TextArea::block("Results", app_state.focus == Focus::Results))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, list_rect, &mut state);
}

fn render_selection(frame: &mut Frame, app_state: &AppState, rect: Rect) {
    let title = format!(
        "Your games ({}/{})",
        app_state.selection.len(),
        app_state.selection.capacity()
    );
    let block = TextArea::block(title, app_state.focus == Focus::Selection);
    if app_state.selection.is_empty() {
        frame.render_widget(
            Paragraph::new(SELECTION_PLACEHOLDER)
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            rect,
        );
        return;
    }

    let items = app_state
        .selection
        .games()
        .iter()
        .map(|game| {
            let mut spans = vec![
                Span::raw(game.name.to_string()),
                Span::styled(
                    format!("  {}/{MAX_RATING}", game.rating()),
                    Style::default().fg(Color::Yellow),
                ),
            ];

            if let Some(platforms) = game.platforms {
                for label in platforms.labels() {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        format!(" {label} "),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    ));
                }
            }

            return ListItem::new(Line::from(spans));
        })
        .collect::<Vec<ListItem>>();

    let mut state = ListState::default();
    if app_state.focus == Focus::Selection && !items.is_empty() {
        state.select(Some(app_state.selection_cursor));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, rect, &mut state);
}

fn render_recommendations(frame: &mut Frame, app_state: &AppState, rect: Rect) {
    if app_state.waiting_for_recommendations {
        Loading::new("Getting recommendations...").render(frame, rect);
        return;
    }

    let block = TextArea::block("Recommendations", false);
    if app_state.recommendations.is_empty() {
        frame.render_widget(
            Paragraph::new(RECOMMENDATIONS_PLACEHOLDER)
                .block(block)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::DarkGray)),
            rect,
        );
        return;
    }

    let items = app_state
        .recommendations
        .iter()
        .enumerate()
        .map(|(idx, name)| return ListItem::new(format!("{}. {name}", idx + 1)))
        .collect::<Vec<ListItem>>();
    frame.render_widget(List::new(items).block(block), rect);
}

fn render_chat(frame: &mut Frame, app_state: &mut AppState, area: Rect) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(CHAT_HINT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        layout[0],
    );

    let block = TextArea::block("Game assistant", app_state.focus == Focus::Chat);
    let inner = block.inner(layout[1]);
    if inner.width != app_state.last_known_width || inner.height != app_state.last_known_height {
        app_state.set_rect(inner);
    }

    let lines = app_state
        .chat_lines(inner.width as usize)
        .into_iter()
        .map(Line::from)
        .collect::<Vec<Line>>();
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app_state.scroll.position as u16, 0)),
        layout[1],
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        layout[1].inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );

    if app_state.waiting_for_chat {
        Loading::new("Thinking...").render(frame, layout[2]);
    } else {
        app_state.chat_input.set_block(TextArea::block(
            CHAT_TITLE,
            app_state.focus == Focus::Chat,
        ));
        frame.render_widget(app_state.chat_input.widget(), layout[2]);
    }
}
