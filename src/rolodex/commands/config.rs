use crate::commands::{CmdMessage, CmdResult, RolodexPaths};
use crate::config::RolodexConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &RolodexPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = RolodexConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RolodexConfig::load(dir)?;
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(val),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            let mut config = RolodexConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e.user_message())));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!("{} set to {}", key, display_val))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::tempdir;

    fn paths_in(dir: &std::path::Path) -> RolodexPaths {
        RolodexPaths {
            data_dir: dir.to_path_buf(),
            book_file: dir.join("addressbook.json"),
        }
    }

    #[test]
    fn shows_defaults() {
        let dir = tempdir().unwrap();
        let result = run(&paths_in(dir.path()), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), RolodexConfig::default());
    }

    #[test]
    fn set_persists_value() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());

        let result = run(
            &paths,
            ConfigAction::Set("window-days".into(), "10".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "window-days set to 10");

        let shown = run(&paths, ConfigAction::ShowKey("window-days".into())).unwrap();
        assert_eq!(shown.messages[0].content, "10");
    }

    #[test]
    fn unknown_key() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());

        let shown = run(&paths, ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(shown.messages[0].level, MessageLevel::Error);

        let set = run(&paths, ConfigAction::Set("colour".into(), "red".into())).unwrap();
        assert_eq!(set.messages[0].content, "Unknown config key: colour");
        assert!(!dir.path().join("rolodex.json").exists());
    }
}
