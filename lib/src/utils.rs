use std::path::PathBuf;

/// Directory holding the received bookmark list
pub fn get_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("MARKPOST_DATA_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(path).join("markpost");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/markpost");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("markpost");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("markpost");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/markpost");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("markpost");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
