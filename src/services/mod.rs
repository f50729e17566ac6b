pub mod config_file;
pub mod pid;
pub mod settings;

pub use config_file::{add_key, remove_key, upsert_key_value};
pub use pid::{NO_PID, ftl_pid, ftl_pid_file};
pub use settings::Settings;
