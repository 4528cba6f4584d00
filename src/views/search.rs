use crate::config::CardStats;
use crate::state::{AppState, ScreenState};
use crate::theme::Theme;
use crate::views::card::{hero_card, HeroCardModel};
use crate::views::detail::{hero_detail, HeroDetailModel};
use crate::views::input::{KeyOutcome, QueryInput};
use gpui::prelude::*;
use gpui::*;

pub struct SearchView {
    screen: ScreenState,
    input: QueryInput,
    focus_handle: FocusHandle,
}

impl SearchView {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            screen: ScreenState::new(),
            input: QueryInput::default(),
            focus_handle: cx.focus_handle(),
        }
    }

    fn perform_search(&mut self, cx: &mut Context<Self>) {
        if !self.screen.can_search() {
            return;
        }
        let Some(ticket) = self.screen.begin_search() else {
            return;
        };
        cx.notify();

        let service = cx.global::<AppState>().service.clone();
        cx.spawn(async move |view, cx| {
            let query = ticket.query.clone();
            let outcome = cx
                .background_executor()
                .spawn(async move { service.search_heroes(&query) })
                .await;

            view.update(cx, |this, cx| {
                if this.screen.complete_search(ticket.generation, outcome) {
                    cx.notify();
                }
            })
            .ok();
        })
        .detach();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        self.apply_key(keystroke.key.as_str(), keystroke.key_char.as_deref(), cx);
    }

    fn apply_key(&mut self, key: &str, typed: Option<&str>, cx: &mut Context<Self>) {
        match self.input.handle_key(key, typed) {
            KeyOutcome::Submit => self.perform_search(cx),
            KeyOutcome::Edited => {
                self.screen.query = self.input.text().to_string();
                cx.notify();
            }
            KeyOutcome::Moved => cx.notify(),
            KeyOutcome::Ignored => {}
        }
    }

    fn render_search_bar(&self, theme: &Theme, window: &Window, cx: &mut Context<Self>) -> Div {
        let palette = &theme.palette;
        let is_focused = self.focus_handle.is_focused(window);
        let enabled = self.screen.can_search();

        let (field_text, field_color) = if self.input.text().is_empty() && !is_focused {
            (theme.strings.search_placeholder.to_string(), palette.text_muted)
        } else if is_focused {
            (self.input.with_caret(), palette.text)
        } else {
            (self.input.text().to_string(), palette.text)
        };

        let on_search = cx.listener(|this, _, _window, cx| this.perform_search(cx));

        div()
            .flex()
            .gap_2()
            .child(
                div()
                    .flex_1()
                    .p_2()
                    .bg(rgb(palette.input_bg))
                    .rounded_md()
                    .border_1()
                    .border_color(rgb(if is_focused {
                        palette.primary
                    } else {
                        palette.border
                    }))
                    .cursor_text()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, window, cx| {
                            window.focus(&this.focus_handle);
                            cx.notify();
                        }),
                    )
                    .child(
                        div()
                            .track_focus(&self.focus_handle)
                            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                                this.on_key_down(event, cx)
                            }))
                            .text_color(rgb(field_color))
                            .child(field_text),
                    ),
            )
            .child(
                div()
                    .px_4()
                    .py_2()
                    .rounded_md()
                    .font_weight(FontWeight::SEMIBOLD)
                    .bg(rgb(if enabled {
                        palette.primary
                    } else {
                        palette.disabled
                    }))
                    .text_color(rgb(palette.on_primary))
                    .when(enabled, move |button| {
                        button
                            .cursor_pointer()
                            .on_mouse_down(MouseButton::Left, on_search)
                    })
                    .child(theme.strings.search_button),
            )
    }

    fn render_results(
        &self,
        theme: &Theme,
        card_stats: CardStats,
        cx: &mut Context<Self>,
    ) -> Div {
        let palette = &theme.palette;

        div()
            .flex()
            .flex_col()
            .flex_1()
            .gap_2()
            .child(
                div()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(rgb(palette.text_muted))
                    .child(theme.strings.found_heroes(self.screen.results.len())),
            )
            .child(
                div()
                    .id("hero-list")
                    .flex()
                    .flex_col()
                    .flex_1()
                    .gap_3()
                    .overflow_y_scroll()
                    .children(self.screen.results.iter().map(|hero| {
                        let card = HeroCardModel::new(hero, card_stats, &theme.strings);
                        let selected = hero.clone();
                        hero_card(&card, palette).on_mouse_down(
                            MouseButton::Left,
                            cx.listener(move |this, _, _window, cx| {
                                this.screen.select_hero(Some(selected.clone()));
                                cx.notify();
                            }),
                        )
                    })),
            )
    }

    fn render_detail(&self, theme: &Theme, cx: &mut Context<Self>) -> Option<Div> {
        let hero = self.screen.selected.as_ref()?;
        let detail = HeroDetailModel::new(hero, &theme.strings);
        let dismiss = |this: &mut Self, cx: &mut Context<Self>| {
            this.screen.select_hero(None);
            cx.notify();
        };

        Some(
            div()
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .bg(rgba(theme.palette.backdrop))
                .occlude()
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |this, _, _window, cx| dismiss(this, cx)),
                )
                .child(hero_detail(
                    &detail,
                    &theme.palette,
                    cx.listener(move |this, _, _window, cx| dismiss(this, cx)),
                )),
        )
    }
}

impl Render for SearchView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let app_state = cx.global::<AppState>();
        let theme = app_state.theme.clone();
        let card_stats = app_state.card_stats;
        let palette = &theme.palette;

        div()
            .relative()
            .size_full()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .size_full()
                    .p_8()
                    .gap_4()
                    .child(self.render_search_bar(&theme, window, cx))
                    .when(self.screen.loading, |col| {
                        col.child(
                            div()
                                .h(px(200.0))
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_color(rgb(palette.primary))
                                .child(theme.strings.loading),
                        )
                    })
                    .when_some(self.screen.error.clone(), |col, message| {
                        col.child(
                            div()
                                .p_4()
                                .flex()
                                .justify_center()
                                .rounded_md()
                                .bg(rgb(palette.error_bg))
                                .text_color(rgb(palette.error_fg))
                                .child(message),
                        )
                    })
                    .when(self.screen.shows_empty_state(), |col| {
                        col.child(
                            div()
                                .h(px(200.0))
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_color(rgb(palette.text_muted))
                                .child(theme.strings.empty_results),
                        )
                    })
                    .when(self.screen.shows_results(), |col| {
                        col.child(self.render_results(&theme, card_stats, cx))
                    }),
            )
            .children(self.render_detail(&theme, cx))
    }
}
