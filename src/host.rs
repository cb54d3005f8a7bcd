use crate::ServerVersion;
use log::debug;
use std::{borrow::Cow, env};

/// The environment variable read by [`EnvHost::default`].
pub const PACKAGE_NAME_VAR: &str = "SERVER_PACKAGE_NAME";

/// Returns the revision token of a server implementation package name, which is everything after
/// the last dot. Strings without a dot are returned unchanged.
///
/// # Examples
///
/// ```
/// # use server_version::nms_version;
/// assert_eq!(nms_version("org.bukkit.craftbukkit.v1_16_R2"), "v1_16_R2");
/// assert_eq!(nms_version("v1_8_R3"), "v1_8_R3");
/// ```
pub fn nms_version(package_name: &str) -> &str {
    match package_name.rfind('.') {
        Some(index) => &package_name[index + 1 ..],
        None => package_name,
    }
}

/// A source for the package name of the server implementation we're running under.
pub trait ServerHost {
    /// Returns the fully qualified package name of the server implementation, or `None` if the
    /// host cannot provide one.
    fn package_name(&self) -> Option<Cow<'_, str>>;

    /// Resolves the server version from this host's package name. A missing package name resolves
    /// to [`ServerVersion::Unknown`].
    fn version(&self) -> ServerVersion {
        match self.package_name() {
            Some(package_name) => {
                let token = nms_version(&package_name);
                debug!("Resolving server version from package {}", package_name);
                ServerVersion::resolve(token)
            }
            None => ServerVersion::Unknown,
        }
    }
}

impl ServerHost for str {
    fn package_name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl ServerHost for String {
    fn package_name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<H: ServerHost> ServerHost for Option<H> {
    fn package_name(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|host| host.package_name())
    }
}

/// Reads the server package name from an environment variable.
#[derive(Clone, Debug)]
pub struct EnvHost {
    var: Cow<'static, str>,
}

impl EnvHost {
    /// Creates a host which reads the given environment variable.
    pub fn with_var(var: impl Into<Cow<'static, str>>) -> Self {
        EnvHost { var: var.into() }
    }

    /// The environment variable this host reads.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvHost {
    fn default() -> Self {
        EnvHost::with_var(PACKAGE_NAME_VAR)
    }
}

impl ServerHost for EnvHost {
    fn package_name(&self) -> Option<Cow<'_, str>> {
        match env::var(self.var.as_ref()) {
            Ok(value) => Some(Cow::Owned(value)),
            Err(e) => {
                debug!("Could not read {}: {}", self.var, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nms_version_takes_last_segment() {
        assert_eq!(nms_version("org.bukkit.craftbukkit.v1_16_R2"), "v1_16_R2");
        assert_eq!(nms_version("v1_12_R1"), "v1_12_R1");
        assert_eq!(nms_version("org.bukkit.craftbukkit."), "");
        assert_eq!(nms_version(""), "");
    }

    #[test]
    fn fixed_hosts() {
        assert_eq!(
            "org.bukkit.craftbukkit.v1_13_R2".version(),
            ServerVersion::V1_13_R2
        );
        assert_eq!(
            "org.bukkit.craftbukkit.v1_8_R1".to_owned().version(),
            ServerVersion::V1_8_R1
        );
        assert_eq!("org.bukkit.craftbukkit".version(), ServerVersion::Unknown);
        assert_eq!(
            Some("net.glowstone.v1_15_R1".to_owned()).version(),
            ServerVersion::V1_15_R1
        );
        assert_eq!(None::<String>.version(), ServerVersion::Unknown);
    }

    #[test]
    fn env_host() {
        let var = "SERVER_VERSION_HOST_TEST_PACKAGE";
        let host = EnvHost::with_var(var);
        assert_eq!(host.var(), var);

        env::remove_var(var);
        assert!(host.package_name().is_none());
        assert_eq!(host.version(), ServerVersion::Unknown);

        env::set_var(var, "org.bukkit.craftbukkit.v1_14_R1");
        assert_eq!(host.version(), ServerVersion::V1_14_R1);
        env::remove_var(var);
    }

    #[test]
    fn default_env_var() {
        assert_eq!(EnvHost::default().var(), PACKAGE_NAME_VAR);
    }
}
