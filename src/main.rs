use std::path::PathBuf;

use log::{error, info};
use zraster::logging::{init_logging, LoggingConfig};
use zraster::render::Screen;
use zraster::window::{FrameLimiter, Window, WindowEvent};
use zraster::{RenderConfig, Scene};

const SNAPSHOT_PATH: &str = "zraster.png";

fn render(config: &RenderConfig) -> Result<Screen, String> {
    let scene = Scene::demo(config);
    let mut screen = Screen::new(config.width, config.height, config.background);
    scene
        .render(&mut screen.as_framebuffer())
        .map_err(|e| e.to_string())?;
    Ok(screen)
}

/// `--png <path>` renders without opening a window.
fn headless_target() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--png" {
            return Some(args.next().map_or_else(|| SNAPSHOT_PATH.into(), PathBuf::from));
        }
    }
    None
}

fn run() -> Result<(), String> {
    let mut config = RenderConfig::from_env();
    info!(
        "rendering {}x{} demo scene, step {}",
        config.width, config.height, config.step
    );
    let mut screen = render(&config)?;

    if let Some(path) = headless_target() {
        return screen.save_png(&path).map_err(|e| e.to_string());
    }

    let mut window = Window::new("zraster", config.width, config.height)?;
    let mut limiter = FrameLimiter::new(&window);

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Save => {
                if let Err(e) = screen.save_png(SNAPSHOT_PATH) {
                    error!("could not save {SNAPSHOT_PATH}: {e}");
                }
            }
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                config.width = w;
                config.height = h;
                screen = render(&config)?;
            }
            WindowEvent::None => {}
        }

        window.present(&screen.to_argb_bytes())?;
        limiter.wait(&window);
    }

    Ok(())
}

fn main() -> Result<(), String> {
    init_logging(LoggingConfig::default());
    run().inspect_err(|e| error!("{e}"))
}
