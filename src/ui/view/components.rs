//! 通用 UI 组件
//!
//! 导航按钮、指示点条等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::state::SlideTags;

/// [组件] 导航按钮（‹ / ›）
pub fn render_nav_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

/// [组件] 指示点条，居中绘制并返回每个点的命中区域
///
/// 已退场的幻灯片画成小点，呈现轮播的行进方向
pub fn render_dot_strip(
    frame: &mut Frame,
    area: Rect,
    slides: &[SlideTags],
    dots: &[bool],
) -> Vec<Rect> {
    if dots.is_empty() || area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    // 每个点占两列（点 + 间隔）
    let total = (dots.len() as u16).saturating_mul(2);
    let x0 = area.x + area.width.saturating_sub(total) / 2;
    let y = area.y + area.height / 2;

    let mut spans = Vec::new();
    let mut hit_areas = Vec::new();
    for (i, active) in dots.iter().enumerate() {
        let x = x0 + i as u16 * 2;
        hit_areas.push(Rect::new(x, y, 2, 1));

        let exited = slides.get(i).is_some_and(|tags| tags.exited);
        let (glyph, style) = if *active {
            ("●", Style::default().fg(Color::Yellow))
        } else if exited {
            ("∙", Style::default().fg(Color::DarkGray))
        } else {
            ("○", Style::default().fg(Color::Gray))
        };
        spans.push(Span::styled(glyph, style));
        spans.push(Span::raw(" "));
    }

    let strip_area = Rect::new(x0, y, total.min(area.width), 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), strip_area);

    hit_areas
}
