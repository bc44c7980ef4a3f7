//! Rendering of the four screens: landing, intro, survey step, success.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use survey_wizard::{FieldKind, Form, PageId, SurveyDefinition};

use crate::backend::{Controls, choices};
use crate::{TerminalSurface, Theme};

/// Everything a frame is drawn from.
pub(crate) struct Screen<'a> {
    pub title: &'a str,
    pub theme: &'a Theme,
    pub definition: &'a SurveyDefinition,
    pub form: &'a Form,
    pub surface: &'a TerminalSurface,
    pub controls: &'a Controls,
}

pub(crate) fn draw(frame: &mut Frame, screen: &Screen) {
    if screen.surface.success_shown() {
        draw_completion(frame, screen);
        return;
    }
    match screen.surface.page() {
        PageId::Landing => draw_landing(frame, screen),
        PageId::Intro => draw_intro(frame, screen),
        PageId::SurveyForm => draw_step(frame, screen),
    }
}

fn centered(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(6),
            Constraint::Percentage(30),
        ])
        .split(area)[1]
}

fn draw_landing(frame: &mut Frame, screen: &Screen) {
    let theme = screen.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(format!(" {} ", screen.title))
        .title_style(Style::default().fg(theme.primary).bold());
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let text = vec![
        Line::from(screen.definition.title.clone().bold()),
        Line::default(),
        Line::from("Tell us how you shop with quick-commerce apps."),
        Line::default(),
        Line::from("Enter: View survey  Esc: Quit".fg(theme.border)),
    ];
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered(inner));
}

fn draw_intro(frame: &mut Frame, screen: &Screen) {
    let theme = screen.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" {} ", screen.definition.title))
        .title_style(Style::default().fg(theme.primary).bold());
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let mut text = vec![
        Line::from(format!(
            "{} short sections. It takes about five minutes.",
            screen.definition.len()
        )),
        Line::default(),
    ];
    for (index, step) in screen.definition.steps().iter().enumerate() {
        text.push(Line::from(format!("{}. {}", index + 1, step.title)));
    }
    text.push(Line::default());
    text.push(Line::from(
        "Enter: Start survey  Alt+←: Back  Esc: Quit".fg(theme.border),
    ));

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(inner));
}

fn draw_step(frame: &mut Frame, screen: &Screen) {
    let theme = screen.theme;
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Progress bar
            Constraint::Min(8),    // Fields
            Constraint::Length(2), // Errors
            Constraint::Length(3), // Help
        ])
        .split(area);

    let Some(index) = screen.surface.active_step() else {
        return;
    };
    let Some(step) = screen.definition.step(index) else {
        return;
    };

    let header = Paragraph::new(format!(
        "Section {} of {}: {}",
        index + 1,
        screen.definition.len(),
        step.title
    ))
    .style(Style::default().fg(theme.primary).bold())
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, chunks[0]);

    draw_progress(frame, chunks[1], screen.surface.progress(), theme);

    // Fields
    let mut lines = Vec::new();
    let mut focused_line = 0;
    let visible = screen.controls.visible_fields(step, screen.form);
    for (position, field) in visible.iter().enumerate() {
        let focused = position == screen.controls.field();
        if focused {
            focused_line = lines.len();
        }
        let invalid = screen.surface.is_field_invalid(field.name());
        let marker = if field.is_required() || screen.form.is_required(field.name()) {
            " *"
        } else {
            ""
        };
        let label_style = if invalid {
            Style::default().fg(theme.error).bold()
        } else if focused {
            Style::default().fg(theme.highlight).bold()
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(if focused { "► " } else { "  " }, label_style),
            Span::styled(format!("{}{}", field.label(), marker), label_style),
        ]));

        match field.kind() {
            kind if kind.is_text() => {
                let value = screen.form.get_text(field.name()).unwrap_or_default();
                let cursor = if focused { "▏" } else { "" };
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(value.to_string(), Style::default().fg(theme.text)),
                    Span::styled(cursor, Style::default().fg(theme.highlight)),
                ]));
            }
            FieldKind::AnyOf(_) => {
                let checked = screen.form.get_checked(field.name()).unwrap_or_default();
                for (option, (label, value)) in choices(field.kind()).iter().enumerate() {
                    let mark = if checked.contains(value) { "[✓]" } else { "[ ]" };
                    lines.push(option_line(screen, focused, option, mark, label));
                }
            }
            _ => {
                let picked = screen.form.get_choice(field.name()).ok().flatten();
                for (option, (label, value)) in choices(field.kind()).iter().enumerate() {
                    let mark = if picked == Some(value.as_str()) { "(•)" } else { "( )" };
                    lines.push(option_line(screen, focused, option, mark, label));
                }
            }
        }
        lines.push(Line::default());
    }

    let height = chunks[2].height.saturating_sub(2);
    let scroll = scroll_offset(focused_line, height);
    let fields = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(fields, chunks[2]);

    // Errors
    let mut errors: Vec<String> = screen
        .surface
        .indicator_messages()
        .into_iter()
        .map(str::to_string)
        .collect();
    if let Some(message) = screen.surface.transport_error() {
        errors.push(message.to_string());
    }
    if !errors.is_empty() {
        let error_widget = Paragraph::new(errors.join("  "))
            .style(Style::default().fg(theme.error).bold())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(error_widget, chunks[3]);
    }

    // Help bar
    let help_text = if index + 1 == screen.definition.len() {
        let (enabled, label) = screen.surface.submit();
        if enabled {
            format!("Tab: Next field  Space: Select  Enter: {label}  PgUp: Previous  Esc: Quit")
        } else {
            label.to_string()
        }
    } else {
        "Tab: Next field  ↑/↓: Option  Space: Select  Enter: Next  PgUp: Previous  Esc: Quit"
            .to_string()
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(theme.border))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(help, chunks[4]);
}

/// Vertical scroll that keeps `focused_line` near the middle of `height` rows.
fn scroll_offset(focused_line: usize, height: u16) -> u16 {
    u16::try_from(focused_line)
        .unwrap_or(u16::MAX)
        .saturating_sub(height / 2)
}

fn option_line(
    screen: &Screen,
    focused: bool,
    option: usize,
    mark: &'static str,
    label: &str,
) -> Line<'static> {
    let style = if focused && option == screen.controls.option() {
        Style::default().fg(screen.theme.highlight).bold()
    } else {
        Style::default().fg(screen.theme.text)
    };
    Line::from(vec![
        Span::raw("    "),
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(label.to_string(), style),
    ])
}

/// Thin single-line bar with the percentage centered below it.
fn draw_progress(frame: &mut Frame, area: Rect, percent: f64, theme: &Theme) {
    let bar_width = area.width.saturating_sub(2);
    let filled_width = (percent / 100.0 * f64::from(bar_width)) as u16;
    let bar_x = area.x + 1;

    let track = "─".repeat(bar_width as usize);
    let track_widget = Paragraph::new(track).style(Style::default().fg(theme.border));
    frame.render_widget(track_widget, Rect::new(bar_x, area.y, bar_width, 1));

    if filled_width > 0 {
        let filled = "━".repeat(filled_width as usize);
        let filled_widget = Paragraph::new(filled).style(Style::default().fg(theme.primary));
        frame.render_widget(filled_widget, Rect::new(bar_x, area.y, filled_width, 1));
    }

    let text = format!(" {percent:.0}% ");
    let text_width = text.len() as u16;
    let text_x = bar_x + bar_width.saturating_sub(text_width) / 2;
    let text_widget = Paragraph::new(text).style(Style::default().fg(theme.secondary));
    frame.render_widget(text_widget, Rect::new(text_x, area.y + 1, text_width, 1));
}

fn draw_completion(frame: &mut Frame, screen: &Screen) {
    let area = frame.area();
    let theme = screen.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .title(" Complete ")
        .title_style(Style::default().fg(theme.success).bold());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(
        "Thank you! Your response has been recorded.\n\nPress Enter to finish.",
    )
    .style(Style::default().fg(theme.text))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, centered(inner));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_focus_centred() {
        assert_eq!(scroll_offset(0, 20), 0);
        assert_eq!(scroll_offset(5, 20), 0);
        assert_eq!(scroll_offset(30, 20), 20);
    }

    #[test]
    fn scroll_saturates_on_huge_forms() {
        assert_eq!(scroll_offset(70_000, 20), u16::MAX - 10);
        assert_eq!(scroll_offset(usize::MAX, 0), u16::MAX);
    }
}
