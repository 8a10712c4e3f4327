//! Window engine demo application
//!
//! Opens the windows listed in a configuration file (or one default window)
//! and drives them with the cooperative pump.
//!
//! Keys: `Escape` closes the focused window, `T` retitles it with its current
//! size, `C` closes every window including non-closable ones.

use window_engine::foundation::logging;
use window_engine::prelude::*;

const ICON_COLOR: [u8; 4] = [0xe0, 0x6c, 0x3c, 0xff];

fn load_config() -> Result<ApplicationConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(ApplicationConfig::load_from_file(&path)?),
        None => Ok(ApplicationConfig::default()),
    }
}

fn handle_key(platform: &mut Platform, window: WindowId, key: KeyCode) {
    match key {
        KeyCode::Named(Key::Escape) => {
            if let Some(mut window) = platform.window(window) {
                window.close();
            }
        }
        KeyCode::Named(Key::T) => {
            if let Some(mut window) = platform.window(window) {
                let title = format!("{} ({})", window.title(), window.size());
                window.set_title(title);
            }
        }
        KeyCode::Named(Key::C) => {
            let ids: Vec<WindowId> = platform.windows().collect();
            for id in ids {
                platform.remove(id);
            }
        }
        _ => {}
    }
}

fn run(config: &ApplicationConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut platform = Platform::new(Box::new(GlfwBinding::new()?))?;
    let icon = Image::solid_color(32, 32, ICON_COLOR);

    for settings in &config.windows {
        let window = WindowConfig::from_settings(settings.clone()).with_icon(icon.clone());
        platform.create(&window)?;
    }

    let mut frames = 0_u64;
    while let Some(item) = platform.next_event() {
        match item {
            PumpEvent::Event(event) => {
                log::debug!("{:?}", event);
                if let EventKind::KeyDown { key, .. } = event.kind {
                    handle_key(&mut platform, event.window, key);
                }
            }
            PumpEvent::Idle => {
                frames += 1;
                let ids: Vec<WindowId> = platform.windows().collect();
                for id in ids {
                    if let Some(mut window) = platform.window(id) {
                        window.make_current();
                        window.swap_buffers();
                    }
                }
            }
        }
    }

    log::info!("All windows closed after {} idle frames", frames);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_filter(&config.log_level);

    log::info!("Starting window engine demo");

    if let Err(e) = run(&config) {
        log::error!("Application error: {}", e);
        return Err(e);
    }
    Ok(())
}
