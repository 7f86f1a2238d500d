use cue_playback_interface::PlaybackSource;
use cue_transcript::ItemCategory;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::{App, SEGMENTS_REGION, WORDS_REGION};

const SEGMENT_PANEL_WIDTH: u16 = 44;

pub fn render(frame: &mut Frame, app: &App) {
    let [header_area, body_area, timeline_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [words_area, segments_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(SEGMENT_PANEL_WIDTH)])
            .areas(body_area);

    render_header(frame, app, header_area);
    render_words(frame, app, words_area);
    render_segments(frame, app, segments_area);
    render_timeline(frame, app, timeline_area);
    render_hints(frame, hint_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = if app.playback.is_playing() {
        "▶ playing"
    } else {
        "⏸ paused"
    };
    let small_talk = if app.hide_small_talk {
        "hidden"
    } else {
        "shown"
    };
    let mut text = format!(
        " {} | {} ×{:.2} | small talk {} ",
        app.fixture_name, status, app.speed, small_talk
    );
    if let Some(flash) = &app.flash {
        text.push_str("| ");
        text.push_str(flash);
        text.push(' ');
    }
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn region_block(app: &App, slot: usize, title: &str) -> Block<'static> {
    let region = &app.regions[slot];
    let mut label = format!(" {title} ");
    if region.above {
        label.push_str("▲ ");
    }
    if region.below {
        label.push_str("▼ ");
    }
    let style = if app.focus == slot {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(label, style))
}

fn render_words(frame: &mut Frame, app: &App, area: Rect) {
    let block = region_block(app, WORDS_REGION, "transcript");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let first = app.regions[WORDS_REGION].offset as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (row, item) in app
        .index
        .items()
        .iter()
        .enumerate()
        .skip(first)
        .take(inner.height as usize)
    {
        let active = app.active_id.as_deref() == Some(item.id.as_str());
        let selected = row == app.selected;
        let small_talk = item.category == ItemCategory::SmallTalk;

        let mut style = Style::default();
        if small_talk {
            style = style.fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
        }
        if active {
            style = Style::default().fg(Color::Black).bg(Color::Yellow);
        }
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let speaker = item.speaker.as_deref().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(
                format!("{speaker:>9} "),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(item.text.clone(), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_segments(frame: &mut Frame, app: &App, area: Rect) {
    let block = region_block(app, SEGMENTS_REGION, "segments");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let first = app.regions[SEGMENTS_REGION].offset as usize;
    let active_row = app.active_segment_row();
    let text_width = inner.width.saturating_sub(16) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (row, segment) in app
        .segments
        .iter()
        .enumerate()
        .skip(first)
        .take(inner.height as usize)
    {
        let mut style = Style::default();
        if segment.small_talk {
            style = style.fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
        }
        if active_row == Some(row) {
            style = Style::default().fg(Color::Black).bg(Color::Yellow);
        }

        let speaker = segment.speaker.as_deref().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", format_time(segment.start_ms)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{:<9} ", truncate(speaker, 9)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(truncate(&segment.text, text_width).to_string(), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_timeline(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.playback.status();
    let duration = status.duration_ms.unwrap_or(app.duration_ms);
    let ratio = (status.time_ms / duration).clamp(0.0, 1.0);
    let label = format!(
        "{} / {}",
        format_time(status.time_ms as i64),
        format_time(duration as i64)
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(
            " [Space] play/pause  [↑/↓] select  [Enter] jump  [←/→] ±2s  [PgUp/PgDn] scroll  [Tab] focus  [s] small talk  [c] copy  [q] quit ",
        )
        .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn format_time(ms: i64) -> String {
    let total_secs = ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
