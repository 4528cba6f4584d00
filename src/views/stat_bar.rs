use crate::model::{fill_fraction, is_high_stat, PowerStats, StatKind};
use crate::theme::{Palette, Strings};
use gpui::prelude::*;
use gpui::*;

#[derive(Debug, Clone, PartialEq)]
pub struct StatBarModel {
    pub label: &'static str,
    /// Shown verbatim next to the bar, placeholders included.
    pub raw: String,
    pub fraction: f32,
    pub high: bool,
    pub color: u32,
}

impl StatBarModel {
    pub fn new(kind: StatKind, stats: &PowerStats, strings: &Strings) -> Self {
        let value = stats.value(kind);
        Self {
            label: strings.stat_label(kind),
            raw: stats.raw(kind).to_string(),
            fraction: fill_fraction(value),
            high: is_high_stat(value),
            color: kind.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    /// Inside a result card.
    Compact,
    /// Inside the detail dialog; high rows get a highlighted background.
    Detail,
}

pub fn stat_bar(bar: &StatBarModel, style: BarStyle, palette: &Palette) -> Div {
    let (label_width, track_height, radius) = match style {
        BarStyle::Compact => (px(90.0), px(8.0), px(4.0)),
        BarStyle::Detail => (px(110.0), px(10.0), px(5.0)),
    };

    let fill = if bar.high {
        div().bg(linear_gradient(
            90.0,
            linear_color_stop(rgb(bar.color), 0.0),
            linear_color_stop(rgb(0xffffff), 1.0),
        ))
    } else {
        div().bg(rgb(bar.color))
    };

    div()
        .flex()
        .items_center()
        .gap_2()
        .py_1()
        .when(bar.high && style == BarStyle::Detail, |row| {
            row.px_2().rounded_md().bg(rgb(palette.high_row))
        })
        .child(
            div()
                .w(label_width)
                .text_sm()
                .text_color(rgb(if bar.high {
                    palette.text_strong
                } else {
                    palette.text_muted
                }))
                .font_weight(if bar.high {
                    FontWeight::BOLD
                } else {
                    FontWeight::NORMAL
                })
                .child(bar.label),
        )
        .child(
            div()
                .flex_1()
                .h(track_height)
                .rounded(radius)
                .bg(rgb(palette.bar_track))
                .child(fill.h_full().w(relative(bar.fraction)).rounded(radius)),
        )
        .child(
            div()
                .w(px(36.0))
                .text_sm()
                .font_weight(if bar.high {
                    FontWeight::EXTRA_BOLD
                } else {
                    FontWeight::BOLD
                })
                .text_color(rgb(if bar.high { bar.color } else { palette.text_muted }))
                .child(bar.raw.clone()),
        )
}
