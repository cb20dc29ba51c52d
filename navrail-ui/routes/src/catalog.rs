use std::collections::HashSet;
use std::path::Path;

use crate::errors::RouteCatalogError;
use crate::model::{RouteCatalog, RouteDescriptor};

/// Load a route catalog from disk.
///
/// A missing file yields the built-in catalog.
pub fn load_catalog(path: &Path) -> Result<RouteCatalog, RouteCatalogError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!(
                "route catalog {} not found, using built-in routes",
                path.display()
            );
            return Ok(RouteCatalog::default());
        },
        Err(err) => return Err(err.into()),
    };
    parse_catalog(&content)
}

/// Parse and validate a JSON route catalog.
pub fn parse_catalog(content: &str) -> Result<RouteCatalog, RouteCatalogError> {
    let catalog: RouteCatalog = serde_json::from_str(content)?;
    validate(&catalog)?;
    Ok(catalog)
}

fn validate(catalog: &RouteCatalog) -> Result<(), RouteCatalogError> {
    let mut seen = HashSet::new();
    validate_routes(&catalog.routes, &mut seen)
}

fn validate_routes<'a>(
    routes: &'a [RouteDescriptor],
    seen: &mut HashSet<&'a str>,
) -> Result<(), RouteCatalogError> {
    for route in routes {
        if !route.path.starts_with('/') {
            return Err(RouteCatalogError::Invalid {
                message: format!(
                    "route '{}' has path '{}' not starting with '/'",
                    route.title, route.path
                ),
            });
        }
        if !seen.insert(route.path.as_str()) {
            return Err(RouteCatalogError::Invalid {
                message: format!("duplicate route path '{}'", route.path),
            });
        }
        validate_routes(&route.children, seen)?;
    }
    Ok(())
}
