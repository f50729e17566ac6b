//! End-to-end PID resolution: settings -> PID file path -> validated PID.

use std::fs;

use tempfile::TempDir;

use ftlconf::services::pid::{NO_PID, ftl_pid, ftl_pid_file};
use ftlconf::services::settings::Settings;

fn settings_in(dir: &TempDir) -> Settings {
    Settings {
        ftl_binary: "pihole-FTL".into(),
        ftl_config_path: dir.path().join("pihole-FTL.conf"),
        default_pid_file: dir.path().join("default.pid"),
    }
}

#[test]
fn pid_read_through_config_redirected_path() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    let custom = dir.path().join("custom.pid");
    fs::write(
        &settings.ftl_config_path,
        format!("PRIVACYLEVEL=0\nPIDFILE={}\n", custom.display()),
    )
    .unwrap();
    fs::write(&custom, "4321\n").unwrap();

    let pid_file = ftl_pid_file(&settings);
    assert_eq!(pid_file, custom);
    assert_eq!(ftl_pid(&pid_file), 4321);
}

#[test]
fn pid_read_through_default_path() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    fs::write(&settings.ftl_config_path, "PRIVACYLEVEL=0\n").unwrap();
    fs::write(&settings.default_pid_file, "99").unwrap();

    let pid_file = ftl_pid_file(&settings);
    assert_eq!(pid_file, settings.default_pid_file);
    assert_eq!(ftl_pid(&pid_file), 99);
}

#[test]
fn tampered_pid_file_degrades_to_sentinel() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);
    fs::write(&settings.default_pid_file, "$(reboot)").unwrap();

    let pid_file = ftl_pid_file(&settings);
    assert_eq!(ftl_pid(&pid_file), NO_PID);
}

#[test]
fn missing_everything_degrades_to_sentinel() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);

    let pid_file = ftl_pid_file(&settings);
    assert_eq!(pid_file, settings.default_pid_file);
    assert_eq!(ftl_pid(&pid_file), NO_PID);
}
