use crate::config::CardStats;
use crate::model::{Hero, StatKind};
use crate::theme::{Palette, Strings};
use crate::views::stat_bar::{stat_bar, BarStyle, StatBarModel};
use gpui::prelude::*;
use gpui::*;

const SUMMARY_STATS: [StatKind; 3] = [StatKind::Intelligence, StatKind::Strength, StatKind::Speed];

/// One row of the results list.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroCardModel {
    pub name: String,
    pub avatar_url: String,
    pub notable: bool,
    pub badge: Option<&'static str>,
    pub bars: Vec<StatBarModel>,
}

impl HeroCardModel {
    pub fn new(hero: &Hero, stats: CardStats, strings: &Strings) -> Self {
        let kinds: &[StatKind] = match stats {
            CardStats::Summary => &SUMMARY_STATS,
            CardStats::Full => &StatKind::ALL,
        };
        let notable = hero.is_notable();

        Self {
            name: hero.name.clone(),
            avatar_url: hero.image.url.clone(),
            notable,
            badge: notable.then_some(strings.notable_badge),
            bars: kinds
                .iter()
                .map(|&kind| StatBarModel::new(kind, &hero.powerstats, strings))
                .collect(),
        }
    }
}

/// The card body. The caller attaches the click handler.
pub fn hero_card(card: &HeroCardModel, palette: &Palette) -> Div {
    let (ring_from, ring_to, name_color, surface) = if card.notable {
        (
            palette.notable,
            palette.notable_deep,
            palette.notable,
            palette.card_notable,
        )
    } else {
        (palette.accent, palette.accent_deep, palette.accent, palette.card)
    };
    let hover_bg = palette.card_hover;

    div()
        .flex()
        .items_center()
        .gap_4()
        .p_3()
        .rounded_xl()
        .bg(rgb(surface))
        .when(card.notable, |c| c.border_2().border_color(rgb(palette.notable)))
        .when(!card.notable, |c| c.border_1().border_color(rgb(palette.border)))
        .cursor_pointer()
        .hover(move |s| s.bg(rgb(hover_bg)))
        .child(avatar(&card.avatar_url, px(100.0), ring_from, ring_to))
        .child(
            div()
                .flex()
                .flex_col()
                .flex_1()
                .gap_1()
                .overflow_hidden()
                .child(
                    div()
                        .text_xl()
                        .font_weight(FontWeight::BOLD)
                        .text_color(rgb(name_color))
                        .truncate()
                        .child(card.name.clone()),
                )
                .when_some(card.badge, |col, badge| {
                    col.child(
                        div()
                            .text_xs()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(palette.notable))
                            .child(badge),
                    )
                })
                .children(
                    card.bars
                        .iter()
                        .map(|bar| stat_bar(bar, BarStyle::Compact, palette)),
                ),
        )
}

/// Round thumbnail inside a gradient ring.
pub fn avatar(url: &str, size: Pixels, ring_from: u32, ring_to: u32) -> Div {
    div()
        .size(size)
        .flex_none()
        .p(px(3.0))
        .rounded_full()
        .bg(linear_gradient(
            135.0,
            linear_color_stop(rgb(ring_from), 0.0),
            linear_color_stop(rgb(ring_to), 1.0),
        ))
        .when(!url.is_empty(), |ring| {
            ring.child(
                img(url.to_string())
                    .size_full()
                    .rounded_full()
                    .object_fit(ObjectFit::Cover),
            )
        })
}
