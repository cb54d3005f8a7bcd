use crate::error::UnknownVersionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A server implementation revision, named after the revision segment of the server's package
/// name (for instance `v1_16_R2` in `org.bukkit.craftbukkit.v1_16_R2`).
///
/// Versions are ordered by their [rank](ServerVersion::rank), which is the major version times ten
/// plus the revision number, so `V1_8_R1` has rank 81. [`Unknown`](ServerVersion::Unknown) has a
/// rank above every real version and therefore always compares as the newest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[allow(non_camel_case_types, missing_docs)]
pub enum ServerVersion {
    Unknown,

    // Legacy versions
    V1_8_R1,
    V1_8_R2,
    V1_8_R3,
    V1_9_R1,
    V1_9_R2,
    V1_10_R1,
    V1_11_R1,
    V1_12_R1,

    // New versions
    V1_13_R1,
    V1_13_R2,
    V1_14_R1,
    V1_15_R1,
    V1_16_R1,
    V1_16_R2,
}

impl ServerVersion {
    /// Every version in declaration order, starting with the unknown sentinel.
    pub const ALL: &'static [ServerVersion] = &[
        ServerVersion::Unknown,
        ServerVersion::V1_8_R1,
        ServerVersion::V1_8_R2,
        ServerVersion::V1_8_R3,
        ServerVersion::V1_9_R1,
        ServerVersion::V1_9_R2,
        ServerVersion::V1_10_R1,
        ServerVersion::V1_11_R1,
        ServerVersion::V1_12_R1,
        ServerVersion::V1_13_R1,
        ServerVersion::V1_13_R2,
        ServerVersion::V1_14_R1,
        ServerVersion::V1_15_R1,
        ServerVersion::V1_16_R1,
        ServerVersion::V1_16_R2,
    ];
    /// The first version that is not [legacy](ServerVersion::is_legacy) (1.13).
    pub const LEGACY_BOUNDARY: ServerVersion = ServerVersion::V1_13_R1;
    /// The first version that is not [color legacy](ServerVersion::is_color_legacy) (1.16).
    pub const COLOR_LEGACY_BOUNDARY: ServerVersion = ServerVersion::V1_16_R1;

    /// Returns the protocol rank of this version, in the form `NX` where `N` is the major version
    /// and `X` is the revision. For example `V1_8_R1` has rank 81.
    pub const fn rank(self) -> u16 {
        match self {
            ServerVersion::Unknown => 1000,
            ServerVersion::V1_8_R1 => 81,
            ServerVersion::V1_8_R2 => 82,
            ServerVersion::V1_8_R3 => 83,
            ServerVersion::V1_9_R1 => 91,
            ServerVersion::V1_9_R2 => 92,
            ServerVersion::V1_10_R1 => 101,
            ServerVersion::V1_11_R1 => 111,
            ServerVersion::V1_12_R1 => 121,
            ServerVersion::V1_13_R1 => 131,
            ServerVersion::V1_13_R2 => 132,
            ServerVersion::V1_14_R1 => 141,
            ServerVersion::V1_15_R1 => 151,
            ServerVersion::V1_16_R1 => 161,
            ServerVersion::V1_16_R2 => 162,
        }
    }

    /// Returns the name this version is matched against, such as `"V1_16_R2"`.
    pub const fn name(self) -> &'static str {
        match self {
            ServerVersion::Unknown => "UNKNOWN",
            ServerVersion::V1_8_R1 => "V1_8_R1",
            ServerVersion::V1_8_R2 => "V1_8_R2",
            ServerVersion::V1_8_R3 => "V1_8_R3",
            ServerVersion::V1_9_R1 => "V1_9_R1",
            ServerVersion::V1_9_R2 => "V1_9_R2",
            ServerVersion::V1_10_R1 => "V1_10_R1",
            ServerVersion::V1_11_R1 => "V1_11_R1",
            ServerVersion::V1_12_R1 => "V1_12_R1",
            ServerVersion::V1_13_R1 => "V1_13_R1",
            ServerVersion::V1_13_R2 => "V1_13_R2",
            ServerVersion::V1_14_R1 => "V1_14_R1",
            ServerVersion::V1_15_R1 => "V1_15_R1",
            ServerVersion::V1_16_R1 => "V1_16_R1",
            ServerVersion::V1_16_R2 => "V1_16_R2",
        }
    }

    /// Finds the version whose name matches the given revision token, ignoring ASCII case. If no
    /// version matches then [`Unknown`](ServerVersion::Unknown) is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use server_version::ServerVersion;
    /// assert_eq!(ServerVersion::resolve("v1_12_R1"), ServerVersion::V1_12_R1);
    /// assert_eq!(ServerVersion::resolve("v1_99_R7"), ServerVersion::Unknown);
    /// ```
    pub fn resolve(name: &str) -> ServerVersion {
        Self::ALL
            .iter()
            .copied()
            .find(|version| version.name().eq_ignore_ascii_case(name))
            .unwrap_or(ServerVersion::Unknown)
    }

    /// Returns whether this is the unknown sentinel.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, ServerVersion::Unknown)
    }

    /// Returns whether this version is the same as or newer than the given version.
    #[inline]
    pub const fn is_newer_than_or_equal(self, other: ServerVersion) -> bool {
        self.rank() >= other.rank()
    }

    /// Returns whether this version is strictly older than the given version.
    #[inline]
    pub const fn is_older_than(self, other: ServerVersion) -> bool {
        self.rank() < other.rank()
    }

    /// Returns whether this version predates 1.13.
    #[inline]
    pub const fn is_legacy(self) -> bool {
        self.rank() < Self::LEGACY_BOUNDARY.rank()
    }

    /// Returns whether this version predates 1.16, which introduced hex chat colors.
    #[inline]
    pub const fn is_color_legacy(self) -> bool {
        self.rank() < Self::COLOR_LEGACY_BOUNDARY.rank()
    }
}

impl PartialOrd for ServerVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServerVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl Display for ServerVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServerVersion {
    type Err = UnknownVersionError;

    /// Strict counterpart to [`resolve`](ServerVersion::resolve). Anything that would resolve to
    /// [`Unknown`](ServerVersion::Unknown), including the string `"unknown"` itself, is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::resolve(s) {
            ServerVersion::Unknown => Err(UnknownVersionError::new(s)),
            version => Ok(version),
        }
    }
}

impl Serialize for ServerVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        serializer.serialize_str(self.name())
    }
}

// Lenient so that configs written for a newer server still load
impl<'de> Deserialize<'de> for ServerVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::resolve(&name))
    }
}
