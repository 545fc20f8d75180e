use std::{env, path::PathBuf};

pub const RUST_LOG: &str = "RUST_LOG";
pub const CONFIG_PATH: &str = "SHT31_UPLINK_CONFIG";

pub fn init() {
    if env::var(RUST_LOG).is_err() {
        env::set_var(RUST_LOG, "info");
    }
}

pub fn config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH).map(PathBuf::from)
}
