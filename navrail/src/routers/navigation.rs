use crate::app::App;

/// Record the route chosen in the sidebar as the current location.
pub(crate) fn navigate(app: &mut App, path: String) {
    if app.current_path == path {
        return;
    }

    log::debug!("navigating from {} to {path}", app.current_path);
    app.current_path = path;
}

#[cfg(test)]
mod tests {
    use super::navigate;
    use crate::app::App;
    use crate::config::AppConfig;

    #[test]
    fn given_new_path_when_navigating_then_current_path_is_updated() {
        let mut app = App::with_config(AppConfig::default());

        navigate(&mut app, String::from("/reports/daily"));

        assert_eq!(app.current_path, "/reports/daily");
    }
}
