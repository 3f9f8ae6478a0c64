//! Default configuration file locations for imap-probe.

use std::path::PathBuf;

use either::Either;

/// Application directory and file stem used in every default location.
const APP_NAME: &str = "imap-probe";

/// System-wide configuration file.
const SYSTEM_CONFIG: &str = "/etc/imap-probe/config.yaml";

/// Default configuration file paths, most specific first.
///
/// User config directory variants come first, then dotfiles in the home
/// directory, then the system-wide file.
pub fn defaults() -> impl Iterator<Item = PathBuf> {
    let user_config = dirs::config_dir().into_iter().flat_map(|dir| {
        [
            dir.join(APP_NAME).join("config.yaml"),
            dir.join(format!("{APP_NAME}.yaml")),
        ]
    });
    let home = dirs::home_dir().into_iter().flat_map(|dir| {
        [
            dir.join(format!(".{APP_NAME}.yaml")),
            dir.join(format!(".{APP_NAME}")).join("config.yaml"),
        ]
    });
    let system = std::iter::once_with(|| PathBuf::from(SYSTEM_CONFIG));

    user_config.chain(home).chain(system)
}

/// The paths to try: only the override when one is given, the defaults
/// otherwise.
pub fn resolve(override_path: Option<PathBuf>) -> impl Iterator<Item = PathBuf> {
    match override_path {
        Some(path) => Either::Left(std::iter::once(path)),
        None => Either::Right(defaults()),
    }
}
