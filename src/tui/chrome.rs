// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


// Layout, panel, status and footer helpers used by TUI rendering.

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const MIN_CELL_WIDTH: usize = 5;
const NOTE_HEIGHT: u16 = 7;

fn stack_panes_vertically(area: Rect) -> bool {
    area.width < 100
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let direction = if stack_panes_vertically(rows[0]) {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(42),
            Constraint::Percentage(28),
        ])
        .split(rows[0]);

    render_orders(frame, app, panes[0]);
    render_calendar(frame, app, panes[1]);
    render_details(frame, app, panes[2]);
    frame.render_widget(Paragraph::new(status_line(app)), rows[1]);
    frame.render_widget(Paragraph::new(footer_line(app)), rows[2]);
}

fn panel_block<'a>(app: &App, title: String, pane: Pane) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(app.theme.panel_border_style(app.focus == pane))
        .style(app.theme.base_style())
}

fn orders_title(app: &App, shown: usize) -> String {
    let total = app.session.catalog().len();
    let mut title = if shown == total {
        format!(" Orders ({total}) ")
    } else {
        format!(" Orders ({shown}/{total}) ")
    };
    if app.filter_editing || !app.filter.is_empty() {
        title.push_str(&format!("/{}", app.filter));
        if app.filter_editing {
            title.push('▏');
        }
        title.push(' ');
    }
    title
}

fn render_orders(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let items: Vec<ListItem<'static>> = app
        .visible_orders()
        .into_iter()
        .map(|order| {
            let marked = app.highlighted.contains(order.order_number());
            let text = format!(
                "{} {} - {}",
                if marked { "◼" } else { "◻" },
                order.order_number(),
                order.company()
            );
            let style = if marked { app.theme.marked_style() } else { app.theme.base_style() };
            ListItem::new(text).style(style)
        })
        .collect();
    let title = orders_title(app, items.len());
    let block = panel_block(app, title, Pane::Orders);

    if items.is_empty() {
        let empty = if app.session.catalog().is_empty() {
            "No orders loaded. Press r to refresh."
        } else {
            "No orders match the filter."
        };
        let paragraph = Paragraph::new(empty).style(app.theme.muted_style()).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut app.orders_state);
}

fn calendar_lines(app: &App, inner_width: u16) -> Vec<Line<'static>> {
    let cell_width = (usize::from(inner_width) / 7).max(MIN_CELL_WIDTH);
    let cursor = app.controller.cursor();
    let focused = app.focused_day();
    let today = CalendarDate::today();

    let header = WEEKDAY_HEADER
        .iter()
        .map(|name| Span::styled(format!("{name:^cell_width$}"), app.theme.muted_style()))
        .collect::<Vec<_>>();
    let mut lines = vec![Line::from(header), Line::default()];

    for week in cursor.weeks() {
        let mut spans = Vec::with_capacity(7);
        for date in week {
            let day = app.session.day(date);
            let mut text = format!("{:>2}", date.day());
            if !day.orders().is_empty() {
                text.push_str(&format!("•{}", day.orders().len()));
            }
            if !app.controller.visible_note(&app.session, date).is_empty() {
                text.push('✎');
            }
            let style = if date == focused {
                app.theme.selection_style()
            } else if !cursor.contains(date) {
                app.theme.muted_style()
            } else if date == today {
                app.theme.today_style()
            } else if !day.orders().is_empty() {
                app.theme.marked_style()
            } else {
                app.theme.base_style()
            };
            spans.push(Span::styled(format!("{text:^cell_width$}"), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines
}

fn render_calendar(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let title = match &app.carry {
        Some(carry) => format!(
            " {} [carrying {}] ",
            app.controller.cursor().label(),
            carry.orders.len()
        ),
        None => format!(" {} ", app.controller.cursor().label()),
    };
    let lines = calendar_lines(app, area.width.saturating_sub(2));
    let paragraph = Paragraph::new(Text::from(lines)).block(panel_block(app, title, Pane::Calendar));
    frame.render_widget(paragraph, area);
}

fn render_details(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(NOTE_HEIGHT)])
        .split(area);
    let date = app.focused_day();
    let title = format!(" {} ", date.long_label());
    let block = panel_block(app, title, Pane::Details);

    let items: Vec<ListItem<'static>> = app
        .session
        .day(date)
        .orders()
        .iter()
        .map(|number| {
            let label = assignment_label(&app.session, number);
            let marked = app.details_selected.contains(number);
            let style = match (marked, label.orphaned) {
                (true, _) => app.theme.marked_style(),
                (false, true) => app.theme.orphan_style(),
                (false, false) => app.theme.base_style(),
            };
            ListItem::new(format!("{} {label}", if marked { "◼" } else { "◻" })).style(style)
        })
        .collect();

    if items.is_empty() {
        let paragraph = Paragraph::new(crate::interaction::messages::NO_ORDERS_ON_DAY)
            .style(app.theme.muted_style())
            .block(block);
        frame.render_widget(paragraph, parts[0]);
    } else {
        let list = List::new(items)
            .block(block)
            .highlight_style(app.theme.selection_style());
        frame.render_stateful_widget(list, parts[0], &mut app.details_state);
    }

    let editing = app.focus == Pane::Note;
    let note = if editing {
        format!("{}▏", app.note_text)
    } else {
        app.controller.visible_note(&app.session, date).to_owned()
    };
    let note_title = if editing { " Note (esc to finish) " } else { " Note (n) " };
    let paragraph = Paragraph::new(note)
        .wrap(Wrap { trim: false })
        .block(panel_block(app, note_title.to_owned(), Pane::Note));
    frame.render_widget(paragraph, parts[1]);
}

fn status_line(app: &App) -> Line<'static> {
    let status = app.controller.status();
    let mut spans = vec![Span::styled("● ", app.theme.light_style(status.light))];
    if !status.message.is_empty() {
        spans.push(Span::styled(status.message.clone(), app.theme.base_style()));
    }
    if let Some(label) = status.last_refresh_label() {
        spans.push(Span::styled(format!("  {label}"), app.theme.muted_style()));
    }
    if app.controller.is_dirty() {
        spans.push(Span::styled("  [unsaved]", app.theme.muted_style()));
    }
    if status.light == StatusLight::Pending && app.controller.refresh_in_flight() {
        spans.push(Span::styled(" …", app.theme.muted_style()));
    }
    Line::from(spans)
}

fn footer_line(app: &App) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    if let Some(hint) = &app.hint {
        spans.push(Span::styled(hint.clone(), Style::default().fg(FOOTER_KEY_COLOR)));
        return Line::from(spans);
    }

    let no_undo = !app.session.can_undo();
    let no_redo = !app.session.can_redo();
    match app.focus {
        Pane::Orders if app.filter_editing => {
            push_footer_entry(&mut spans, "FILTER", "type");
            push_footer_entry(&mut spans, "DONE", "enter");
        }
        Pane::Orders => {
            push_footer_entry(&mut spans, "MOVE", "↑↓");
            push_footer_entry(&mut spans, "MARK", "space");
            push_footer_entry(&mut spans, "FILTER", "/");
            push_footer_entry(&mut spans, "CARRY", "m");
            push_footer_entry(&mut spans, "REFRESH", "r");
        }
        Pane::Calendar => {
            push_footer_entry(&mut spans, "DAY", "←→↑↓");
            let enter = if app.carry.is_some() { "enter (drop)" } else { "enter" };
            push_footer_entry(&mut spans, "OPEN", enter);
            push_footer_entry(&mut spans, "CLEAR", "del");
            push_footer_entry(&mut spans, "NOTE", "n");
            push_footer_entry(&mut spans, "MONTH", "[ ] t");
        }
        Pane::Details => {
            push_footer_entry(&mut spans, "MARK", "space");
            push_footer_entry(&mut spans, "REMOVE", "del/x");
            push_footer_entry(&mut spans, "CLEAR", "c");
            push_footer_entry(&mut spans, "CARRY", "m");
            push_footer_entry(&mut spans, "NOTE", "n");
        }
        Pane::Note => {
            push_footer_entry(&mut spans, "DONE", "esc");
        }
    }
    push_footer_entry_maybe_disabled(&mut spans, "UNDO", "^z", no_undo);
    push_footer_entry_maybe_disabled(&mut spans, "REDO", "^y", no_redo);
    if app.focus != Pane::Note && !app.filter_editing {
        push_footer_entry(&mut spans, "PANE", "tab");
        push_footer_entry(&mut spans, "QUIT", "q");
    }
    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    let color = if disabled { Color::DarkGray } else { FOOTER_KEY_COLOR };
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
