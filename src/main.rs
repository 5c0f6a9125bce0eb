pub use crate::app::App;
pub use crate::app::*;

use eframe::egui;

mod app;

// Load the app icon from the possible bundle locations
fn get_app_icon() -> Option<egui::IconData> {
    let icon_paths = [
        "./assets/icons/icon.png",            // Development path
        "../assets/icons/icon.png",           // Relative to release dir
        "../Resources/assets/icons/icon.png", // Relative to app bundle
    ];

    for path in icon_paths {
        if let Ok(icon) = image::open(path) {
            let icon = icon.to_rgba8();
            let (width, height) = icon.dimensions();
            return Some(egui::IconData {
                rgba: icon.into_raw(),
                width,
                height,
            });
        }
    }

    // If all paths failed, log it but continue without an icon
    tracing::warn!("Could not load app icon from any path");
    None
}

// The Chinese phrase table needs a CJK-capable font; egui's bundled
// fonts don't carry one, so pull a system font in via font-kit.
fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let source = font_kit::source::SystemSource::new();

    let preferred: &[&str] = match std::env::consts::OS {
        "macos" => &["PingFang SC", "Hiragino Sans GB", "STSong"],
        "windows" => &["Microsoft YaHei", "SimSun", "SimHei"],
        _ => &["Noto Sans CJK SC", "WenQuanYi Zen Hei"],
    };

    const SYSTEM_FONT_NAME: &str = "SystemCJKFont";

    let loaded = preferred.iter().find_map(|font_name| {
        let family = source.select_family_by_name(font_name).ok()?;
        let handle = family.fonts().first()?.clone();
        let font_data = match handle {
            font_kit::handle::Handle::Memory { bytes, .. } => bytes.to_vec(),
            font_kit::handle::Handle::Path { path, .. } => std::fs::read(path).ok()?,
        };
        Some((font_name, font_data))
    });

    match loaded {
        Some((font_name, font_data)) => {
            fonts.font_data.insert(
                SYSTEM_FONT_NAME.to_owned(),
                egui::FontData::from_owned(font_data).into(),
            );

            // Primary for proportional text, fallback for monospace
            fonts
                .families
                .get_mut(&egui::FontFamily::Proportional)
                .unwrap()
                .insert(0, SYSTEM_FONT_NAME.to_owned());
            fonts
                .families
                .get_mut(&egui::FontFamily::Monospace)
                .unwrap()
                .push(SYSTEM_FONT_NAME.to_owned());

            tracing::info!("Using system font '{}' for CJK support", font_name);
        }
        None => {
            tracing::warn!("Could not find a CJK-capable system font, using defaults");
        }
    }

    ctx.set_fonts(fonts);
}

fn main() {
    tracing_subscriber::fmt::init();
    tracing::info!("App booting...");

    let app = App::load().unwrap_or_default();

    let icon_result = get_app_icon();

    // Create the native options with viewport settings
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WINDOW_WIDTH, app.default_window_height as f32])
            .with_min_inner_size([320.0, 0.0])
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(true),
        ..Default::default()
    };

    // Apply the icon if available
    let native_options = if let Some(icon) = icon_result {
        eframe::NativeOptions {
            viewport: native_options.viewport.with_icon(icon),
            ..native_options
        }
    } else {
        native_options
    };

    eframe::run_native(
        "Shopwindow",
        native_options,
        Box::new(|cc| {
            // Initialize image loaders so flag URLs resolve
            egui_extras::install_image_loaders(&cc.egui_ctx);

            setup_fonts(&cc.egui_ctx);

            Ok(Box::new(app))
        }),
    )
    .expect("failed to launch the storefront window");
}
