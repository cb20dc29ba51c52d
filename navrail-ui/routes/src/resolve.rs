use crate::model::{RouteCatalog, RouteDescriptor};

/// Return the routes visible to `roles`, preserving catalog order.
///
/// Filtering applies to children as well: a visible parent keeps only the
/// sub-routes the roles may see.
pub fn active_route_details(
    catalog: &RouteCatalog,
    roles: &[String],
) -> Vec<RouteDescriptor> {
    filter_routes(&catalog.routes, roles)
}

fn filter_routes(
    routes: &[RouteDescriptor],
    roles: &[String],
) -> Vec<RouteDescriptor> {
    routes
        .iter()
        .filter(|route| is_visible_for(route, roles))
        .map(|route| RouteDescriptor {
            children: filter_routes(&route.children, roles),
            ..route.clone()
        })
        .collect()
}

/// Whether a single route (ignoring its children) is visible to `roles`.
pub fn is_visible_for(route: &RouteDescriptor, roles: &[String]) -> bool {
    route.allowed_roles.is_empty()
        || route
            .allowed_roles
            .iter()
            .any(|allowed| roles.iter().any(|role| role == allowed))
}

/// Find a route by path, searching depth-first through children.
pub fn find_route<'a>(
    routes: &'a [RouteDescriptor],
    path: &str,
) -> Option<&'a RouteDescriptor> {
    for route in routes {
        if route.path == path {
            return Some(route);
        }
        if let Some(found) = find_route(&route.children, path) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{active_route_details, find_route, is_visible_for};
    use crate::model::{RouteCatalog, RouteDescriptor, RouteIcon};

    fn roles(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn given_no_roles_when_resolving_then_only_public_routes_remain() {
        let catalog = RouteCatalog::default();

        let routes = active_route_details(&catalog, &[]);

        let paths: Vec<&str> =
            routes.iter().map(|route| route.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/dashboard", "/settings", "/help"]);
    }

    #[test]
    fn given_admin_role_when_resolving_then_catalog_order_is_preserved() {
        let catalog = RouteCatalog::default();

        let routes = active_route_details(&catalog, &roles(&["admin"]));

        let paths: Vec<&str> =
            routes.iter().map(|route| route.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/", "/dashboard", "/reports", "/users", "/settings", "/help"]
        );
    }

    #[test]
    fn given_analyst_role_when_resolving_then_restricted_children_are_dropped()
    {
        let catalog = RouteCatalog::default();

        let routes = active_route_details(&catalog, &roles(&["analyst"]));
        let reports = find_route(&routes, "/reports").expect("reports visible");

        assert_eq!(reports.children.len(), 1);
        assert_eq!(reports.children[0].path, "/reports/daily");
        assert!(find_route(&routes, "/reports/audit").is_none());
    }

    #[test]
    fn given_route_without_roles_when_checking_visibility_then_it_is_public() {
        let route = RouteDescriptor::new("/open", "Open", RouteIcon::Page);

        assert!(is_visible_for(&route, &[]));
        assert!(is_visible_for(&route, &roles(&["guest"])));
    }

    #[test]
    fn given_nested_path_when_finding_route_then_child_is_returned() {
        let catalog = RouteCatalog::default();

        let found = find_route(&catalog.routes, "/reports/audit");

        assert_eq!(found.map(|route| route.title.as_str()), Some("Audit"));
    }
}
