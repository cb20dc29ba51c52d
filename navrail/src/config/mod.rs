mod errors;
mod model;
mod persist;
mod storage;

pub(crate) use errors::ConfigError;
pub(crate) use model::AppConfig;
pub(crate) use persist::PersistState;
pub(crate) use storage::{
    load_initial_config, load_route_catalog, save_config,
};
