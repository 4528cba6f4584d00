mod api;
mod config;
mod error;
mod http;
mod model;
mod state;
mod theme;
mod views;

use anyhow::Context as _;
use api::SuperheroService;
use config::Config;
use gpui::*;
use http::ImageHttpClient;
use state::AppState;
use std::sync::Arc;
use views::root::RootView;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load().context("failed to load configuration")?;
    let service = SuperheroService::new(&config)?;
    let app_state = AppState::new(Arc::new(service), &config);
    let request_timeout = config.request_timeout;
    let title = app_state.theme.strings.app_title;
    log::info!("starting against {}", config.api_base_url);

    Application::new().run(move |cx: &mut App| {
        // Lets `img()` fetch avatar URLs.
        match ImageHttpClient::new(request_timeout) {
            Ok(client) => cx.set_http_client(Arc::new(client)),
            Err(err) => log::warn!("avatar images disabled: {err:#}"),
        }
        cx.set_global(app_state);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds {
                origin: Point::default(),
                size: Size {
                    width: px(720.0),
                    height: px(900.0),
                },
            })),
            titlebar: Some(TitlebarOptions {
                title: Some(title.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| RootView::new(cx, window))
        }) {
            log::error!("failed to open window: {err:#}");
            cx.quit();
        }
    });

    Ok(())
}
