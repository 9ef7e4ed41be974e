use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus};

pub fn draw(f: &mut Frame, app: &App) {
    let msg = app.messages();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(msg.title).style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    draw_form(f, app, chunks[1]);

    let summary = Line::from(vec![
        Span::styled(
            format!("{} : {}", msg.player_count, app.roster.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" | {} : {}", msg.total, app.roster.total())),
    ]);
    f.render_widget(Paragraph::new(summary), chunks[2]);

    draw_players(f, app, chunks[3]);

    let help = Paragraph::new(msg.help).style(Style::default().fg(Color::Gray));
    f.render_widget(help, chunks[4]);

    if let Some(alert) = app.alert {
        draw_alert(f, app, alert);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let msg = app.messages();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(25),
            Constraint::Min(10),
        ])
        .split(area);

    let name = if app.form.name().is_empty() {
        Paragraph::new(msg.name_placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.form.name())
    };
    f.render_widget(
        name.block(field_block(msg.name_label, app.focus == Focus::Name)),
        chunks[0],
    );

    let balance = Paragraph::new(app.form.balance())
        .block(field_block(msg.balance_label, app.focus == Focus::Balance));
    f.render_widget(balance, chunks[1]);

    let add = Paragraph::new(msg.add_hint).block(Block::default().borders(Borders::ALL));
    f.render_widget(add, chunks[2]);

    let cursor = match app.focus {
        Focus::Name => Some((chunks[0], app.form.name().chars().count())),
        Focus::Balance => Some((chunks[1], app.form.balance().chars().count())),
        Focus::List => None,
    };
    if let Some((rect, len)) = cursor {
        let x = rect.x + 1 + (len as u16).min(rect.width.saturating_sub(3));
        f.set_cursor_position((x, rect.y + 1));
    }
}

fn draw_players(f: &mut Frame, app: &App, area: Rect) {
    let msg = app.messages();
    let block = field_block(msg.players_title, app.focus == Focus::List);

    if app.roster.is_empty() {
        let empty = Paragraph::new(msg.empty_roster)
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .roster
        .players()
        .map(|p| {
            let marker = if p.is_active() { " ★" } else { "" };
            let style = if p.is_active() {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}{}", p.name(), marker),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {} : {}", msg.balance, p.balance()), style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if app.focus == Focus::List {
        state.select(Some(app.cursor));
    }
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_alert(f: &mut Frame, app: &App, alert: &str) {
    let msg = app.messages();
    let area = centered_rect(60, 7, f.area());
    let text = vec![
        Line::raw(alert),
        Line::raw(""),
        Line::styled(msg.alert_dismiss, Style::default().fg(Color::Gray)),
    ];
    let popup = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(msg.alert_title),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A `width`-percent wide, `height`-rows tall rectangle centered in `r`.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let w = (u32::from(r.width) * u32::from(width.min(100)) / 100) as u16;
    let h = height.min(r.height);
    Rect::new(
        r.x + (r.width - w) / 2,
        r.y + (r.height - h) / 2,
        w,
        h,
    )
}
