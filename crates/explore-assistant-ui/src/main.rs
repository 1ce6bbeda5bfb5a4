//! Explore Assistant Desktop Application
//!
//! GPUI-based desktop shell around the explore assistant sidebar.

use explore_assistant_core::storage::{default_data_dir, load_sidebar_settings};
use explore_assistant_core::{SidebarSettings, Storage};
use explore_assistant_ui::{AppStore, Theme};
use gpui::*;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod window;

use window::AssistantWindow;

/// Serves `icons/*.svg` from the first `assets/` directory found near the binary
struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    fn locate() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from));

        let root = exe_dir
            .iter()
            .flat_map(|dir| [dir.join("assets"), dir.join("../assets"), dir.join("../../assets")])
            .chain(std::iter::once(PathBuf::from("assets")))
            .find(|candidate| candidate.is_dir())
            .unwrap_or_else(|| PathBuf::from("assets"));

        info!("Serving assets from {:?}", root);
        Self { root }
    }
}

impl AssetSource for AssetDir {
    fn load(&self, path: &str) -> anyhow::Result<Option<Cow<'static, [u8]>>> {
        let file = self.root.join(path);
        match std::fs::read(&file) {
            Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Missing asset {:?}", file);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self, path: &str) -> anyhow::Result<Vec<SharedString>> {
        let Ok(dir) = std::fs::read_dir(self.root.join(path)) else {
            return Ok(Vec::new());
        };
        Ok(dir
            .flatten()
            .filter_map(|entry| entry.file_name().to_str().map(|name| name.to_string().into()))
            .collect())
    }
}

/// Open persistent storage, falling back to an in-memory store
fn open_app_store() -> AppStore {
    let data_dir = default_data_dir();
    let storage = match Storage::new_with_path(&data_dir) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            error!("Failed to open storage in {:?}: {}", data_dir, e);
            return AppStore::in_memory(SidebarSettings::default());
        }
    };

    let settings = match storage.connection().and_then(|conn| load_sidebar_settings(&conn)) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load sidebar settings, using defaults: {}", e);
            SidebarSettings::default()
        }
    };
    info!("Storage opened at {:?}", storage.db_path());

    AppStore::load(storage, settings)
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Explore Assistant v{}", env!("CARGO_PKG_VERSION"));

    App::new()
        .with_assets(AssetDir::locate())
        .run(|cx: &mut AppContext| {
            let theme = Theme::light();
            let store = cx.new_model(|_| open_app_store());

            let window_options = WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Explore Assistant".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds {
                    origin: point(px(120.0), px(80.0)),
                    size: size(px(1100.0), px(760.0)),
                })),
                focus: true,
                show: true,
                app_id: Some("com.explore-assistant.app".to_string()),
                ..Default::default()
            };

            if let Err(e) = cx.open_window(window_options, |cx| {
                cx.new_view(|cx| AssistantWindow::new(store, theme, cx))
            }) {
                error!("Failed to open window: {}", e);
                cx.quit();
            }
        });
}
