//! Screen layout and rendering.
//!
//! [`Layout::compute`] decides where the window, the clock label and the status
//! line go for a given terminal size. The same layout is used to draw a frame
//! and to translate mouse clicks into label-relative coordinates, so the two
//! always agree.
//!
//! Windowed mode draws a bordered frame of the configured size centered in the
//! terminal. Fullscreen uses every cell and drops the border.

use crate::config::Config;
use crate::countdown::Countdown;
use crate::digits;
use crate::format::font_size_for_rows;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Font points per glyph scale step.
const POINTS_PER_SCALE: u32 = 80;
/// Rows below the label: a blank row, the status line and the key hint.
const STATUS_ROWS: u16 = 3;

/// A rectangle of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Whether the cell at (`x`, `y`) lies inside.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }

    fn inset(&self, by: u16) -> Rect {
        Rect {
            x: self.x + by,
            y: self.y + by,
            width: self.width.saturating_sub(by * 2),
            height: self.height.saturating_sub(by * 2),
        }
    }

    fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// Where everything goes for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// The whole window, border included.
    pub window: Rect,
    /// The window interior.
    pub content: Rect,
    /// The clock label.
    pub label: Rect,
    /// Row of the status line.
    pub status_row: u16,
    /// Row of the key hint.
    pub help_row: u16,
    /// Font size derived from the window height.
    pub font_size: u32,
    /// Glyph scale of the label. Zero means plain text.
    pub scale: usize,
    /// Whether a border is drawn.
    pub bordered: bool,
}

impl Layout {
    /// Lays out `label_text` in a terminal of `term_width` x `term_height`.
    pub fn compute(
        term_width: u16,
        term_height: u16,
        fullscreen: bool,
        config: &Config,
        label_text: &str,
    ) -> Self {
        let (window, bordered) = if fullscreen {
            (
                Rect {
                    x: 0,
                    y: 0,
                    width: term_width,
                    height: term_height,
                },
                false,
            )
        } else {
            let width = config.windowed_width.min(term_width);
            let height = config.windowed_height.min(term_height);
            (
                Rect {
                    x: (term_width - width) / 2,
                    y: (term_height - height) / 2,
                    width,
                    height,
                },
                true,
            )
        };
        let content = if bordered { window.inset(1) } else { window };

        let font_size = font_size_for_rows(content.height);
        let preferred = (font_size / POINTS_PER_SCALE).max(1) as usize;
        let scale = digits::fit_scale(
            label_text,
            preferred,
            usize::from(content.width),
            usize::from(content.height.saturating_sub(STATUS_ROWS)),
        );

        let (label_width, label_height) = if scale == 0 {
            (label_text.width().min(usize::from(content.width)), 1)
        } else {
            (
                digits::width(label_text, scale).unwrap_or(0),
                digits::height(scale),
            )
        };
        let label_width = u16::try_from(label_width).unwrap_or(content.width);
        let label_height = u16::try_from(label_height).unwrap_or(content.height);

        let block_height = label_height + STATUS_ROWS;
        let label = Rect {
            x: content.x + content.width.saturating_sub(label_width) / 2,
            y: content.y + content.height.saturating_sub(block_height) / 2,
            width: label_width,
            height: label_height,
        };

        Self {
            window,
            content,
            label,
            status_row: label.bottom() + 1,
            help_row: label.bottom() + 2,
            font_size,
            scale,
            bordered,
        }
    }

    /// Translates a click into a column offset within the label, or `None`
    /// if the click missed it.
    pub fn label_offset(&self, x: u16, y: u16) -> Option<u16> {
        self.label.contains(x, y).then(|| x - self.label.x)
    }
}

/// Background colour of the window for the current state of `countdown`.
pub fn window_background<'a>(countdown: &Countdown, config: &'a Config) -> &'a str {
    if countdown.is_alert() {
        config.alert_background.as_str()
    } else {
        config.background.as_str()
    }
}

/// Style of the window: colours, interior size and, when windowed, a border.
pub fn window_style(layout: &Layout, countdown: &Countdown, config: &Config) -> Style {
    let style = Style::new()
        .foreground(Color::from(config.foreground.as_str()))
        .background(Color::from(window_background(countdown, config)))
        .width(i32::from(layout.content.width))
        .height(i32::from(layout.content.height));
    if layout.bordered {
        style
            .border_style(lipgloss::normal_border())
            .border_top(true)
            .border_right(true)
            .border_bottom(true)
            .border_left(true)
            .border_foreground(Color::from(config.foreground.as_str()))
    } else {
        style
    }
}

/// Draws one frame of `countdown` using `layout`, with `help` as the key hint
/// under the status line.
pub fn render(
    layout: &Layout,
    term_height: u16,
    countdown: &Countdown,
    config: &Config,
    help: &str,
) -> String {
    let content = layout.content;
    let content_width = usize::from(content.width);
    let label_text = countdown.label();
    let label_lines = if layout.scale == 0 {
        vec![label_text]
    } else {
        digits::render(&label_text, layout.scale).unwrap_or_else(|| vec![label_text])
    };

    let body = (content.y..content.bottom())
        .map(|row| {
            let text = if layout.label.contains(layout.label.x, row) {
                label_lines
                    .get(usize::from(row - layout.label.y))
                    .map(String::as_str)
                    .unwrap_or("")
            } else if row == layout.status_row {
                countdown.status()
            } else if row == layout.help_row {
                help
            } else {
                ""
            };
            center(text, content_width)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let window = window_style(layout, countdown, config).render(&body);
    let window_lines = window.split('\n').collect::<Vec<_>>();

    let margin = " ".repeat(usize::from(layout.window.x));
    let mut lines = Vec::with_capacity(usize::from(term_height));
    for row in 0..term_height.max(layout.window.bottom()) {
        if row >= layout.window.y && row < layout.window.bottom() {
            let line = window_lines
                .get(usize::from(row - layout.window.y))
                .copied()
                .unwrap_or("");
            lines.push(format!("{}{}", margin, line));
        } else {
            lines.push(String::new());
        }
    }
    lines.join("\n")
}

/// Centers `text` in a field `width` columns wide, truncating if it is wider.
fn center(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let used = text.width();
    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            return &text[..i];
        }
        used += w;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::{EXPIRED_LABEL, STATUS_PAUSED};

    fn strip(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_windowed_layout_is_centered() {
        let config = Config::default();
        let layout = Layout::compute(120, 40, false, &config, "00:00");
        assert_eq!(
            layout.window,
            Rect {
                x: 20,
                y: 10,
                width: 80,
                height: 20
            }
        );
        assert!(layout.bordered);
        assert_eq!(layout.content.width, 78);
        assert_eq!(layout.content.height, 18);
    }

    #[test]
    fn test_windowed_layout_shrinks_to_terminal() {
        let config = Config::default();
        let layout = Layout::compute(40, 10, false, &config, "00:00");
        assert_eq!(layout.window.width, 40);
        assert_eq!(layout.window.height, 10);
        assert_eq!(layout.window.x, 0);
    }

    #[test]
    fn test_fullscreen_uses_whole_terminal() {
        let config = Config::default();
        let layout = Layout::compute(200, 60, true, &config, "00:00");
        assert_eq!(layout.window, layout.content);
        assert_eq!(layout.window.width, 200);
        assert!(!layout.bordered);
        assert!(layout.scale >= 2);
    }

    #[test]
    fn test_scale_grows_with_height() {
        let config = Config::default();
        let small = Layout::compute(300, 30, true, &config, "00:00");
        let large = Layout::compute(300, 100, true, &config, "00:00");
        assert!(large.scale > small.scale);
        assert!(large.font_size > small.font_size);
    }

    #[test]
    fn test_plain_text_when_too_narrow() {
        let config = Config::default();
        let layout = Layout::compute(20, 20, true, &config, "00:00");
        assert_eq!(layout.scale, 0);
        assert_eq!(layout.label.width, 5);
        assert_eq!(layout.label.height, 1);
    }

    #[test]
    fn test_label_offset() {
        let config = Config::default();
        let layout = Layout::compute(120, 40, true, &config, "00:00");
        let label = layout.label;
        assert_eq!(layout.label_offset(label.x, label.y), Some(0));
        assert_eq!(
            layout.label_offset(label.x + label.width - 1, label.y + label.height - 1),
            Some(label.width - 1)
        );
        assert_eq!(layout.label_offset(label.x + label.width, label.y), None);
        assert_eq!(layout.label_offset(label.x, label.y.saturating_sub(1)), None);
    }

    #[test]
    fn test_render_plain_label_and_status() {
        let config = Config::default();
        let mut countdown = Countdown::with_remaining(65);
        countdown.toggle();
        countdown.toggle();

        let layout = Layout::compute(20, 10, true, &config, &countdown.label());
        let view = strip(&render(&layout, 10, &countdown, &config, ""));
        assert!(view.contains("01:05"));
        assert!(view.contains(STATUS_PAUSED));
        assert_eq!(view.lines().count(), 10);
    }

    #[test]
    fn test_render_block_label_in_window() {
        let config = Config::default();
        let countdown = Countdown::with_remaining(65);
        let layout = Layout::compute(100, 30, false, &config, &countdown.label());
        let view = strip(&render(&layout, 30, &countdown, &config, ""));

        assert!(view.contains('█'));
        assert!(view.contains('┌'));
        assert!(view.contains('┘'));
        let top = view.lines().nth(usize::from(layout.window.y)).unwrap();
        assert!(top.starts_with(&" ".repeat(usize::from(layout.window.x))));
    }

    #[test]
    fn test_render_alert_text() {
        let config = Config::default();
        let mut countdown = Countdown::new();
        countdown.toggle();

        let layout = Layout::compute(12, 6, true, &config, &countdown.label());
        let view = strip(&render(&layout, 6, &countdown, &config, ""));
        assert!(view.contains(EXPIRED_LABEL));
    }

    #[test]
    fn test_background_follows_alert_and_reset() {
        let config = Config {
            background: "#111111".to_string(),
            alert_background: "#aa0000".to_string(),
            ..Config::default()
        };
        let mut countdown = Countdown::with_remaining(1);
        assert_eq!(window_background(&countdown, &config), "#111111");

        countdown.toggle();
        let last = countdown.ticker().current_tick();
        countdown.tick(&last);
        assert!(countdown.is_alert());
        assert_eq!(window_background(&countdown, &config), "#aa0000");
        let layout = Layout::compute(100, 30, true, &config, &countdown.label());
        let expired = strip(&render(&layout, 30, &countdown, &config, ""));

        countdown.reset();
        assert_eq!(window_background(&countdown, &config), "#111111");
        let layout = Layout::compute(100, 30, true, &config, &countdown.label());
        let idle = strip(&render(&layout, 30, &countdown, &config, ""));
        assert!(idle.contains('█'));
        assert_ne!(expired, idle);
    }

    #[test]
    fn test_render_key_hint_below_status() {
        let config = Config::default();
        let countdown = Countdown::with_remaining(65);
        let layout = Layout::compute(40, 12, true, &config, &countdown.label());
        assert_eq!(layout.help_row, layout.status_row + 1);

        let view = strip(&render(&layout, 12, &countdown, &config, "del reset"));
        let hint = view.lines().nth(usize::from(layout.help_row)).unwrap();
        assert_eq!(hint.trim(), "del reset");
    }

    #[test]
    fn test_center_and_truncate() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("abcdef", 4), "abcd");
        assert_eq!(center("", 3), "   ");
    }
}
