// main.rs - Native and browser entry points

use conway_canvas::{Config, ConwayApp};

const APP_NAME: &str = "Conway's Game of Life";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), eframe::Error> {
    use eframe::egui;

    env_logger::init();

    let config = match config_path() {
        Some(path) => match Config::load(&path) {
            Ok(config) => {
                log::info!("using configuration from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{}: {err}; falling back to defaults", path.display());
                Config::default()
            }
        },
        None => Config::default(),
    };
    log::info!(
        "{}x{} cells at resolution {}",
        config.columns(),
        config.rows(),
        config.resolution
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.surface_width as f32 + 40.0,
            config.surface_height as f32 + 200.0,
        ]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Box::new(ConwayApp::new(cc, config))),
    )
}

/// First CLI argument, else `CONWAY_CANVAS_CONFIG`.
#[cfg(not(target_arch = "wasm32"))]
fn config_path() -> Option<std::path::PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("CONWAY_CANVAS_CONFIG"))
        .map(std::path::PathBuf::from)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    log::info!("starting {APP_NAME}");

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let started = eframe::WebRunner::new()
            .start(
                "the_canvas_id",
                web_options,
                Box::new(|cc| Box::new(ConwayApp::new(cc, Config::default()))),
            )
            .await;
        if let Err(err) = started {
            log::error!("failed to start eframe: {err:?}");
        }
    });
}
