//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use components::{render_dot_strip, render_nav_button};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(8),    // 评价卡片
            Constraint::Length(3), // 导航控件
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_card(frame, app, chunks[1]);
    render_controls(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    // 悬停判定覆盖卡片和导航控件，对应网页版的 slider wrapper
    app.areas.wrapper = Some(chunks[1].union(chunks[2]));
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let mut text = "🏮 走马灯 · 学员评价".to_string();
    if app.carousel.count() > 1 && !app.carousel.is_rotating() {
        text.push_str("（已暂停）");
    }

    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_card(frame: &mut Frame, app: &App, area: Rect) {
    let Some(slide) = app.current_slide() else {
        let empty = Paragraph::new("暂无评价数据")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().title("评价").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let index = app.carousel.current();
    let title = format!("评价 {}/{}", index + 1, app.carousel.count());

    let author_line = if slide.role.is_empty() {
        Line::from(Span::styled(
            format!("—— {}", slide.author),
            Style::default().fg(Color::Cyan),
        ))
    } else {
        Line::from(vec![
            Span::styled(format!("—— {}", slide.author), Style::default().fg(Color::Cyan)),
            Span::styled(format!("（{}）", slide.role), Style::default().fg(Color::Gray)),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("“{}”", slide.quote),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(slide.stars(), Style::default().fg(Color::Yellow))),
        Line::from(""),
        author_line,
    ];

    // 活跃标签由控制器维护，这里只读取
    let border_style = if app.stage.slides.get(index).is_some_and(|tags| tags.active) {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(card, area);
}

fn render_controls(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.deck.is_empty() {
        app.areas.prev = None;
        app.areas.next = None;
        app.areas.dots.clear();
        frame.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(5),
        ])
        .split(area);

    render_nav_button(frame, chunks[0], "‹");
    render_nav_button(frame, chunks[2], "›");
    app.areas.prev = Some(chunks[0]);
    app.areas.next = Some(chunks[2]);
    app.areas.dots = render_dot_strip(frame, chunks[1], &app.stage.slides, &app.stage.dots);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[←/h] 上一条  [→/l] 下一条  [1-9] 跳转  [鼠标悬停] 暂停  [q] 退出";

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
