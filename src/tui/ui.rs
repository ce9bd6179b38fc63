// src/tui/ui.rs
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::application::{Composer, ComposerField};
use crate::constants::DRAWER_LABEL_WIDTH;
use crate::tui::App;
use crate::util::text::{first_line, truncate_label};

pub(crate) fn draw(frame: &mut Frame, app: &mut App) {
    let [body, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    if let Some(composer) = app.composer.as_ref() {
        draw_composer(frame, body, composer);
    } else {
        draw_main(frame, body, app);
    }
    draw_status_line(frame, status, app);
}

fn draw_main(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.drawer_open {
        let [drawer, detail] = Layout::horizontal([
            Constraint::Length(DRAWER_LABEL_WIDTH as u16 + 4),
            Constraint::Min(0),
        ])
        .areas(area);
        draw_drawer(frame, drawer, app);
        draw_detail(frame, detail, app);
    } else {
        draw_detail(frame, area, app);
    }
}

fn draw_drawer(frame: &mut Frame, area: Rect, app: &mut App) {
    let selected = app.notebook.selected_id();
    let items: Vec<ListItem> = app
        .notebook
        .notes()
        .iter()
        .map(|note| {
            let marker = if Some(note.id) == selected { "● " } else { "  " };
            let label = truncate_label(&first_line(&note.title), DRAWER_LABEL_WIDTH);
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::raw(label),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Notes"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.drawer_state);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("sidenote");
    let Some(note) = app.notebook.selected() else {
        let empty = Paragraph::new("No note selected").block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            note.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(note.content.lines().map(|line| Line::from(line.to_string())));

    let detail = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

fn draw_composer(frame: &mut Frame, area: Rect, composer: &Composer) {
    let [title_area, content_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        field_paragraph(
            composer.title(),
            "Title",
            composer.focus() == ComposerField::Title,
        ),
        title_area,
    );
    frame.render_widget(
        field_paragraph(
            composer.content(),
            "Content",
            composer.focus() == ComposerField::Content,
        ),
        content_area,
    );
}

fn field_paragraph<'a>(text: &'a str, label: &'a str, focused: bool) -> Paragraph<'a> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(label),
        )
        .wrap(Wrap { trim: false })
}

fn draw_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(notice) = app.notice.as_ref() {
        Line::from(Span::styled(
            notice.message.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else if app.composer.is_some() {
        Line::from("Tab switch field  Ctrl-S save  Esc cancel")
    } else if app.drawer_open {
        Line::from("↑/↓ move  Enter open  x delete  Esc close  n new  q quit")
    } else {
        Line::from("d drawer  n new note  q quit")
    };
    frame.render_widget(Paragraph::new(line), area);
}
