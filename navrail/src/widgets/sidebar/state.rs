use navrail_ui_routes::{RouteCatalog, RouteDescriptor, active_route_details};

/// Pointer and click selection over route indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct NavState {
    pub(crate) hovered: Option<usize>,
    pub(crate) active: Option<usize>,
    pub(crate) expanded: Option<usize>,
}

impl NavState {
    /// Activate `index` and toggle its expansion.
    pub(crate) fn press(&mut self, index: usize) {
        self.active = Some(index);
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub(crate) fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Clear hover regardless of which item the pointer left.
    pub(crate) fn leave(&mut self) {
        self.hovered = None;
    }
}

/// Routes derived for the last seen role list.
#[derive(Debug, Default)]
struct RouteCache {
    roles: Option<Vec<String>>,
    routes: Vec<RouteDescriptor>,
    derivations: usize,
}

/// Internal runtime state for sidebar routes and selection.
#[derive(Debug, Default)]
pub(super) struct SidebarState {
    nav: NavState,
    cache: RouteCache,
}

impl SidebarState {
    pub(super) fn nav(&self) -> NavState {
        self.nav
    }

    pub(super) fn routes(&self) -> &[RouteDescriptor] {
        &self.cache.routes
    }

    #[cfg(test)]
    pub(super) fn derivations(&self) -> usize {
        self.cache.derivations
    }

    /// Re-derive routes when `roles` differs from the cached role list.
    ///
    /// Returns `true` when a derivation ran. Selection is cleared when the
    /// derived list changed.
    pub(super) fn sync_routes(
        &mut self,
        catalog: &RouteCatalog,
        roles: &[String],
    ) -> bool {
        if self.cache.roles.as_deref() == Some(roles) {
            return false;
        }

        let routes = active_route_details(catalog, roles);
        if routes != self.cache.routes {
            self.nav = NavState::default();
        }
        self.cache.roles = Some(roles.to_vec());
        self.cache.routes = routes;
        self.cache.derivations += 1;
        true
    }

    /// Press the item at `index`, returning the path to navigate to.
    pub(super) fn press_item(&mut self, index: usize) -> Option<String> {
        let path = self.cache.routes.get(index)?.path.clone();
        self.nav.press(index);
        Some(path)
    }

    /// Return the path of a child route under the item at `index`.
    pub(super) fn child_path(
        &self,
        index: usize,
        child: usize,
    ) -> Option<String> {
        self.cache
            .routes
            .get(index)
            .and_then(|route| route.children.get(child))
            .map(|route| route.path.clone())
    }

    pub(super) fn enter_item(&mut self, index: usize) {
        self.nav.enter(index);
    }

    pub(super) fn leave_item(&mut self) {
        self.nav.leave();
    }
}
