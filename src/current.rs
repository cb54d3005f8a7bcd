use crate::{
    host::{EnvHost, ServerHost},
    ServerVersion,
};
use log::{info, warn};
use once_cell::sync::OnceCell;

static CURRENT: VersionCell = VersionCell::new();

/// A server version which is resolved at most once.
///
/// Plugins which would rather pass the version down explicitly than rely on [`current`] can hold
/// one of these themselves.
#[derive(Debug, Default)]
pub struct VersionCell {
    inner: OnceCell<ServerVersion>,
}

impl VersionCell {
    /// Creates an unresolved cell.
    pub const fn new() -> Self {
        VersionCell {
            inner: OnceCell::new(),
        }
    }

    /// Returns the cached version, resolving it from the given host if this is the first access.
    /// Once resolved, the host is ignored and the cached value is returned.
    ///
    /// If several threads race on the first access exactly one host is consulted, and every
    /// thread observes its result.
    pub fn get_or_resolve<H>(&self, host: &H) -> ServerVersion
    where H: ServerHost + ?Sized {
        *self.inner.get_or_init(|| {
            let version = host.version();
            if version.is_unknown() {
                warn!("Unrecognized server version, assuming the newest behavior");
            } else {
                info!("Detected server version {}", version);
            }
            version
        })
    }

    /// Returns the cached version, or `None` if it has not been resolved yet.
    #[inline]
    pub fn get(&self) -> Option<ServerVersion> {
        self.inner.get().copied()
    }
}

/// Resolves the process-wide server version from the given host, unless it was already resolved,
/// and returns it.
pub fn init_current<H>(host: &H) -> ServerVersion
where H: ServerHost + ?Sized {
    CURRENT.get_or_resolve(host)
}

/// Returns the version of the server this process is running under.
///
/// The first call resolves the version from [`EnvHost::default`] unless [`init_current`] was called
/// beforehand; every later call returns the same cached value.
pub fn current() -> ServerVersion {
    CURRENT.get_or_resolve(&EnvHost::default())
}
