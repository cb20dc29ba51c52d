use iced::Task;
use iced::keyboard::{self, Key, Modifiers};

use crate::app::AppEvent;

const TOGGLE_DRAWER_KEY: &str = "b";

/// Map global key presses to app events.
pub(crate) fn route(event: keyboard::Event) -> Task<AppEvent> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. }
            if is_toggle_drawer(&key, modifiers) =>
        {
            Task::done(AppEvent::ToggleDrawer)
        },
        _ => Task::none(),
    }
}

fn is_toggle_drawer(key: &Key, modifiers: Modifiers) -> bool {
    let Key::Character(value) = key.as_ref() else {
        return false;
    };

    modifiers.command()
        && !modifiers.shift()
        && !modifiers.alt()
        && value.eq_ignore_ascii_case(TOGGLE_DRAWER_KEY)
}
