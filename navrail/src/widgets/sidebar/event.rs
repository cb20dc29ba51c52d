/// Intent events handled by the sidebar presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum SidebarIntent {
    /// Re-derive the route list if the role list changed.
    SyncRoutes,
    ItemPressed { index: usize },
    ChildPressed { index: usize, child: usize },
    ItemEntered { index: usize },
    ItemExited,
    ToggleColorMode,
    ToggleDrawer,
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SidebarEffect {
    /// Ask the color-mode owner to switch modes.
    ToggleColorMode,
    /// Ask the layout owner to flip the open flag.
    ToggleDrawer,
    /// A route was chosen.
    Navigate { path: String },
}

/// Sidebar event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    /// Intent event reduced by the sidebar widget.
    Intent(SidebarIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidebarEffect),
}
