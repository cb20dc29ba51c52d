use serde::{Deserialize, Serialize};

/// Icon shown next to a route in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteIcon {
    Home,
    Dashboard,
    Reports,
    Users,
    Settings,
    Help,
    Page,
}

/// One navigable destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Absolute path, unique across the catalog.
    pub path: String,
    /// Label rendered when the sidebar is open.
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: RouteIcon,
    /// Roles allowed to see the route. Empty means visible to everyone.
    #[serde(default)]
    pub allowed_roles: Vec<String>,
    /// Pin the route to the footer group instead of the primary list.
    #[serde(default)]
    pub bottom_nav: bool,
    /// Sub-routes revealed when the item is expanded.
    #[serde(default)]
    pub children: Vec<RouteDescriptor>,
}

fn default_icon() -> RouteIcon {
    RouteIcon::Page
}

impl RouteDescriptor {
    /// Create a public, primary-group route without children.
    pub fn new(path: &str, title: &str, icon: RouteIcon) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            icon,
            allowed_roles: Vec::new(),
            bottom_nav: false,
            children: Vec::new(),
        }
    }

    /// Restrict the route to the given roles.
    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.allowed_roles =
            roles.iter().map(|role| role.to_string()).collect();
        self
    }

    /// Move the route into the footer group.
    pub fn pinned_to_bottom(mut self) -> Self {
        self.bottom_nav = true;
        self
    }

    /// Attach sub-routes.
    pub fn with_children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Full navigation tree persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCatalog {
    pub version: u8,
    pub routes: Vec<RouteDescriptor>,
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self {
            version: 1,
            routes: vec![
                RouteDescriptor::new("/", "Home", RouteIcon::Home),
                RouteDescriptor::new(
                    "/dashboard",
                    "Dashboard",
                    RouteIcon::Dashboard,
                ),
                RouteDescriptor::new("/reports", "Reports", RouteIcon::Reports)
                    .with_roles(&["admin", "analyst"])
                    .with_children(vec![
                        RouteDescriptor::new(
                            "/reports/daily",
                            "Daily",
                            RouteIcon::Page,
                        ),
                        RouteDescriptor::new(
                            "/reports/audit",
                            "Audit",
                            RouteIcon::Page,
                        )
                        .with_roles(&["admin"]),
                    ]),
                RouteDescriptor::new("/users", "Users", RouteIcon::Users)
                    .with_roles(&["admin"]),
                RouteDescriptor::new("/settings", "Settings", RouteIcon::Settings)
                    .pinned_to_bottom(),
                RouteDescriptor::new("/help", "Help", RouteIcon::Help)
                    .pinned_to_bottom(),
            ],
        }
    }
}
