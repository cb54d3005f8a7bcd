use crate::host::{EnvHost, ServerHost};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    borrow::Cow,
    fs::{File, OpenOptions},
    io::{self, prelude::*, SeekFrom},
    path::Path,
};

/// Version detection settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VersionConfig {
    /// Pins the server implementation package name instead of reading it from the environment,
    /// for example `"org.bukkit.craftbukkit.v1_16_R2"`. Defaults to `null`.
    pub package_name: Option<String>,
}

impl ServerHost for VersionConfig {
    fn package_name(&self) -> Option<Cow<'_, str>> {
        match &self.package_name {
            Some(name) => Some(Cow::Borrowed(name.as_str())),
            None => EnvHost::default()
                .package_name()
                .map(|name| Cow::Owned(name.into_owned())),
        }
    }
}

/// Attempts to parse the version config at the given path. The config should be in JSON format.
///
/// If the file does not exist it is created with the default config. If it exists but is not valid
/// JSON then it is overwritten with the default config.
pub fn load_config(path: &Path) -> io::Result<VersionConfig> {
    if path.exists() {
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;

        let mut json = String::new();
        file.read_to_string(&mut json)?;

        match serde_json::from_str(&json) {
            Ok(config) => Ok(config),
            Err(e) => {
                error!("Invalid version config JSON: {}", e);
                use_default(&mut file)
            }
        }
    } else {
        info!("Version config file not found, creating file");
        use_default(&mut File::create(path)?)
    }
}

fn use_default(file: &mut File) -> io::Result<VersionConfig> {
    info!("Using default version config");

    let default = VersionConfig::default();

    file.seek(SeekFrom::Start(0))?;

    let json = serde_json::to_string_pretty(&default)?;
    let bytes = json.as_bytes();
    file.write_all(bytes)?;

    // Truncate anything left over from the old contents
    file.set_len(bytes.len() as u64)?;

    Ok(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServerVersion;
    use std::{env, fs, path::PathBuf};

    fn scratch_file(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "server_version_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn missing_file_is_created() {
        let path = scratch_file("missing");

        let config = load_config(&path).unwrap();
        assert_eq!(config, VersionConfig::default());

        let written: VersionConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, VersionConfig::default());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn pinned_package_name() {
        let path = scratch_file("pinned");
        fs::write(
            &path,
            r#"{ "package_name": "org.bukkit.craftbukkit.v1_11_R1" }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.package_name.as_deref(),
            Some("org.bukkit.craftbukkit.v1_11_R1")
        );
        assert_eq!(config.version(), ServerVersion::V1_11_R1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn invalid_json_is_replaced() {
        let path = scratch_file("invalid");
        fs::write(&path, "{ this is not json, and it is quite long so truncation matters }").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config, VersionConfig::default());

        let written: VersionConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, VersionConfig::default());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config: VersionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, VersionConfig::default());
    }
}
