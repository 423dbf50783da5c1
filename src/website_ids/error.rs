use std::path::PathBuf;
use thiserror::Error;

/// Why configuration could not be obtained from the first available source.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin} is not valid UTF-8")]
    NotUnicode { origin: String },

    #[error("cannot locate install directory: {0}")]
    ExecutableLocation(#[source] std::io::Error),
}

#[derive(Error, Debug)]
pub enum WebsiteIdsError {
    #[error("failed to load config: {0}")]
    ConfigLoad(#[from] ConfigLoadError),

    #[error("no websites found in config")]
    NoWebsites,
}

impl WebsiteIdsError {
    /// Process exit status for this failure.
    ///
    /// Both kinds share status 1 so scripts written against earlier releases keep working.
    pub fn exit_code(&self) -> i32 {
        match self {
            WebsiteIdsError::ConfigLoad(_) => 1,
            WebsiteIdsError::NoWebsites => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, WebsiteIdsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_websites_message() {
        assert_eq!(
            WebsiteIdsError::NoWebsites.to_string(),
            "no websites found in config"
        );
    }

    #[test]
    fn config_load_message_carries_cause() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WebsiteIdsError::from(ConfigLoadError::Json {
            origin: "CONFIG_JSON".to_string(),
            source,
        });
        let msg = err.to_string();
        assert!(msg.starts_with("failed to load config: invalid JSON in CONFIG_JSON: "));
    }

    #[test]
    fn io_cause_names_the_path() {
        let err = ConfigLoadError::Io {
            path: PathBuf::from("/opt/site/configs/nginxpulse_config.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(
            err.to_string(),
            "/opt/site/configs/nginxpulse_config.json: No such file"
        );
    }

    #[test]
    fn not_unicode_names_the_variable() {
        let err = WebsiteIdsError::from(ConfigLoadError::NotUnicode {
            origin: "CONFIG_JSON".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "failed to load config: CONFIG_JSON is not valid UTF-8"
        );
    }

    #[test]
    fn both_failures_exit_with_one() {
        let load = WebsiteIdsError::ConfigLoad(ConfigLoadError::ExecutableLocation(
            std::io::Error::other("gone"),
        ));
        assert_eq!(load.exit_code(), 1);
        assert_eq!(WebsiteIdsError::NoWebsites.exit_code(), 1);
    }
}
