use catalog::Catalog;
use router::{Route, Router};
use serde::{Deserialize, Serialize};

// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 460.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 560.0;

mod app_impl;
pub mod catalog;
mod components;
pub mod i18n;
pub mod router;
mod style;

// Re-export the i18n functions for convenience
pub use i18n::{get_language, set_language, t, tf, Language};

// Struct for storing basic settings in confy
#[derive(Serialize, Deserialize)]
pub struct AppSettings {
    // Language setting
    pub current_language: i18n::Language,

    // Route restored on next boot
    pub last_route: Option<String>,

    // UI state
    pub default_window_height: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            current_language: i18n::Language::English,
            last_route: None,
            default_window_height: DEFAULT_WINDOW_HEIGHT as f64,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TempError {
    MissingAppState,
}

impl std::fmt::Display for TempError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Couldn't load app state")
    }
}

pub struct App {
    pub catalog: Catalog,

    pub router: Router,

    // Language setting, follows the route's locale segment
    pub current_language: i18n::Language,

    // Country selector open/closed state, reset on every boot
    pub is_selector_open: bool,

    // Text being typed into the search bar before it is committed to
    // the route's search context
    pub search_draft: String,

    pub quit: bool,

    pub is_maximized: bool,

    pub show_about_dialog: bool,

    pub default_window_height: f64,
}

impl Default for App {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            router: Router::new(),
            current_language: i18n::Language::English, // Default language
            is_selector_open: false,
            search_draft: String::new(),
            quit: false,
            is_maximized: false,
            show_about_dialog: false,
            default_window_height: DEFAULT_WINDOW_HEIGHT as f64,
        }
    }
}

impl App {
    pub fn load() -> Result<Self, TempError> {
        // Use confy for app settings
        let config_result = confy::load::<AppSettings>("shopwindow", None);

        let mut app = App::default();

        // Initialize i18n
        i18n::init();

        if let Ok(settings) = config_result {
            // Apply settings from confy
            app.current_language = settings.current_language;
            app.default_window_height = settings.default_window_height;

            if let Some(ref last_route) = settings.last_route {
                let route = Route::parse(last_route);
                tracing::info!("Restoring last route {}", route.to_path());
                app.router = Router::starting_at(route);
                app.current_language =
                    Language::from_route_lang(app.router.current().lang());
            }
        }

        // Set the language from the loaded config
        i18n::set_language(app.current_language);

        // Load the shipping catalog
        app.catalog = Catalog::load();
        if app.catalog.is_empty() {
            tracing::warn!("Country catalog is empty, the selector will have nothing to offer");
        }

        // Seed the search bar from the restored route
        app.search_draft = app
            .router
            .current()
            .search_by()
            .unwrap_or_default()
            .to_string();

        app.is_selector_open = false;
        app.is_maximized = false;
        app.show_about_dialog = false;

        Ok(app)
    }

    pub fn save_state(&self) {
        let settings = AppSettings {
            current_language: self.current_language,
            last_route: Some(self.router.current().to_path()),
            default_window_height: self.default_window_height,
        };

        // Save app settings to confy
        let store_result = confy::store("shopwindow", None, &settings);
        match store_result {
            Ok(_) => tracing::info!("Settings stored successfully"),
            Err(err) => tracing::error!("Failed to store app settings: {}", err),
        }
    }

    /// Push a new route and follow its locale segment with the UI
    /// language. This is the single navigation entry point; it never
    /// persists anything (settings are written on exit).
    pub fn navigate(&mut self, route: Route) {
        self.router.push_route(route);
        self.current_language = Language::from_route_lang(self.router.current().lang());
    }

    /// Commit the search draft to the route's search context. An empty
    /// draft clears it.
    pub fn commit_search(&mut self) {
        let draft = self.search_draft.trim().to_string();
        let query = if draft.is_empty() {
            None
        } else {
            Some(draft.as_str())
        };
        let route = self.router.current().with_search(query);
        self.navigate(route);
    }

    pub fn clear_search(&mut self) {
        self.search_draft.clear();
        let route = self.router.current().with_search(None);
        self.navigate(route);
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn get_language(&self) -> i18n::Language {
        self.current_language
    }
}

// Include the version info module generated at build time
pub mod version_info {
    include!(concat!(env!("OUT_DIR"), "/version_info.rs"));

    // Return formatted version string with commit hash
    pub fn formatted_version() -> String {
        format!("Version {} ({})", VERSION, GIT_HASH)
    }
}

#[cfg(test)]
mod tests {
    use super::catalog::{Country, ImageRef};
    use super::*;

    fn test_app() -> App {
        let catalog = Catalog::from_countries(vec![
            Country {
                code: "US".to_string(),
                name: "United States".to_string(),
                image: ImageRef {
                    url: "/us.svg".to_string(),
                },
                default_locale: "en-US".to_string(),
            },
            Country {
                code: "CN".to_string(),
                name: "China".to_string(),
                image: ImageRef {
                    url: "/cn.svg".to_string(),
                },
                default_locale: "zh-CN".to_string(),
            },
        ]);

        App {
            catalog,
            ..App::default()
        }
    }

    #[test]
    fn selector_starts_closed() {
        let app = test_app();

        assert!(!app.is_selector_open);
    }

    #[test]
    fn navigate_follows_route_locale() {
        let mut app = test_app();

        app.navigate(Route::storefront("cn", "zh-cn", None));
        assert_eq!(app.current_language, Language::Chinese);

        app.navigate(Route::storefront("us", "en-us", None));
        assert_eq!(app.current_language, Language::English);
    }

    #[test]
    fn commit_search_writes_route_query() {
        let mut app = test_app();
        app.navigate(Route::storefront("us", "en-us", None));

        app.search_draft = "shoes".to_string();
        app.commit_search();

        assert_eq!(app.router.current().to_path(), "/us/en-us?searchBy=shoes");
    }

    #[test]
    fn clear_search_drops_route_query() {
        let mut app = test_app();
        app.navigate(Route::storefront("us", "en-us", Some("shoes")));

        app.clear_search();

        assert_eq!(app.router.current().to_path(), "/us/en-us");
        assert!(app.search_draft.is_empty());
    }

    #[test]
    fn blank_search_draft_clears_context() {
        let mut app = test_app();
        app.navigate(Route::storefront("us", "en-us", Some("shoes")));

        app.search_draft = "   ".to_string();
        app.commit_search();

        assert_eq!(app.router.current().search_by(), None);
    }
}
