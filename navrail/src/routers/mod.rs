pub(crate) mod navigation;
pub(crate) mod preferences;
pub(crate) mod shortcuts;
pub(crate) mod sidebar;
