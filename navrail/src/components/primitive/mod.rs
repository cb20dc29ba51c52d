pub(crate) mod hint;
pub(crate) mod icon_button;
