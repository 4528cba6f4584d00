use crate::state::AppState;
use crate::views::search::SearchView;
use gpui::prelude::*;
use gpui::*;

pub struct RootView {
    active_view: AnyView,
}

impl RootView {
    pub fn new(cx: &mut Context<Self>, _window: &mut Window) -> Self {
        let search_view = cx.new(SearchView::new);
        Self {
            active_view: search_view.into(),
        }
    }

    pub fn set_active_view(&mut self, view: AnyView, cx: &mut Context<Self>) {
        self.active_view = view;
        cx.notify();
    }
}

impl Render for RootView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<AppState>().theme.clone();
        let palette = &theme.palette;

        div()
            .size_full()
            .bg(rgb(palette.background))
            .text_color(rgb(palette.text))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .size_full()
                    .child(
                        div()
                            .h_12()
                            .flex()
                            .items_center()
                            .px_4()
                            .bg(rgb(palette.title_bar))
                            .border_b_1()
                            .border_color(rgb(palette.border))
                            .child(
                                div()
                                    .text_xl()
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(rgb(palette.primary))
                                    .cursor_pointer()
                                    .on_mouse_down(
                                        MouseButton::Left,
                                        cx.listener(|this, _, _window, cx| {
                                            let view = cx.new(SearchView::new);
                                            this.set_active_view(view.into(), cx);
                                        }),
                                    )
                                    .child(theme.strings.app_title),
                            ),
                    )
                    .child(div().flex_1().child(self.active_view.clone())),
            )
    }
}
