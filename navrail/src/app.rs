#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Task, Theme};
use navrail_ui_routes::RouteCatalog;

use crate::config::{self, AppConfig, PersistState};
use crate::theme::ThemeManager;
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent, SidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const HOME_PATH: &str = "/";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Layout and color mode owners
    ToggleDrawer,
    ToggleColorMode,
    Navigate { path: String },
    // Preference persistence
    PreferencesSaved,
    PreferencesSaveFailed(String),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) config: AppConfig,
    pub(crate) catalog: RouteCatalog,
    pub(crate) current_path: String,
    pub(crate) persist: PersistState,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = config::load_initial_config();
        let catalog = config::load_route_catalog();
        let theme_manager = ThemeManager::new(config.color_mode);
        log::info!(
            "navrail {APP_VERSION} starting with roles {:?}",
            config.roles
        );

        let app = App {
            theme_manager,
            config,
            catalog,
            current_path: String::from(HOME_PATH),
            persist: PersistState::default(),
            widgets: Widgets {
                sidebar: SidebarWidget::new(),
            },
        };

        (app, Task::done(()).map(|_: ()| AppEvent::IcedReady))
    }

    #[cfg(test)]
    pub(crate) fn with_config(config: AppConfig) -> Self {
        App {
            theme_manager: ThemeManager::new(config.color_mode),
            config,
            catalog: RouteCatalog::default(),
            current_path: String::from(HOME_PATH),
            persist: PersistState::default(),
            widgets: Widgets {
                sidebar: SidebarWidget::new(),
            },
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Navrail")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> iced::Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Whether the sidebar renders in its open (labelled) layout.
    pub(crate) fn is_sidebar_open(&self) -> bool {
        self.config.sidebar_open
    }
}

/// Event that asks the sidebar to derive routes for the current roles.
pub(crate) fn sync_routes_event() -> AppEvent {
    AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::SyncRoutes))
}
