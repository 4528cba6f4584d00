use crate::model::{Hero, StatKind};
use crate::theme::{Palette, Strings};
use crate::views::card::avatar;
use crate::views::stat_bar::{stat_bar, BarStyle, StatBarModel};
use gpui::prelude::*;
use gpui::*;

#[derive(Debug, Clone, PartialEq)]
pub struct HeroDetailModel {
    pub name: String,
    pub avatar_url: String,
    pub stats_title: &'static str,
    pub bars: Vec<StatBarModel>,
    pub id_caption: String,
    pub close_label: &'static str,
}

impl HeroDetailModel {
    pub fn new(hero: &Hero, strings: &Strings) -> Self {
        Self {
            name: hero.name.clone(),
            avatar_url: hero.image.url.clone(),
            stats_title: strings.stats_title,
            bars: StatKind::ALL
                .iter()
                .map(|&kind| StatBarModel::new(kind, &hero.powerstats, strings))
                .collect(),
            id_caption: strings.hero_id(&hero.id),
            close_label: strings.close,
        }
    }
}

/// The dialog panel. `on_close` runs when the close button is pressed;
/// clicks inside the panel never reach the backdrop behind it.
pub fn hero_detail(
    detail: &HeroDetailModel,
    palette: &Palette,
    on_close: impl Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
) -> Div {
    div()
        .flex()
        .flex_col()
        .items_center()
        .w(px(460.0))
        .p_4()
        .gap_3()
        .rounded_xl()
        .bg(rgb(palette.dialog))
        .border_1()
        .border_color(rgb(palette.border))
        .shadow_lg()
        .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .child(avatar(
            &detail.avatar_url,
            px(150.0),
            palette.accent,
            palette.accent_deep,
        ))
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(palette.accent))
                .child(detail.name.clone()),
        )
        .child(
            div()
                .pt_2()
                .text_lg()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(palette.text_muted))
                .child(detail.stats_title),
        )
        .child(
            div().w_full().flex().flex_col().children(
                detail
                    .bars
                    .iter()
                    .map(|bar| stat_bar(bar, BarStyle::Detail, palette)),
            ),
        )
        .child(
            div()
                .pt_2()
                .text_sm()
                .text_color(rgb(palette.text_muted))
                .child(detail.id_caption.clone()),
        )
        .child(
            div()
                .w_full()
                .mt_2()
                .p_2()
                .flex()
                .justify_center()
                .rounded_md()
                .bg(rgb(palette.accent))
                .text_color(rgb(palette.on_primary))
                .font_weight(FontWeight::SEMIBOLD)
                .cursor_pointer()
                .on_mouse_down(MouseButton::Left, on_close)
                .child(detail.close_label),
        )
}
