// Runs in its own process so the process-wide version is resolved from an explicit host

use server_version::{current, init_current, ServerVersion, VersionConfig, PACKAGE_NAME_VAR};
use std::env;

#[test]
fn explicit_host_wins_over_env() {
    env::set_var(PACKAGE_NAME_VAR, "org.bukkit.craftbukkit.v1_9_R2");

    let config = VersionConfig {
        package_name: Some("org.bukkit.craftbukkit.v1_16_R1".to_owned()),
    };
    let version = init_current(&config);

    assert_eq!(version, ServerVersion::V1_16_R1);
    assert_eq!(current(), ServerVersion::V1_16_R1);
    assert_eq!(current(), version);
    assert!(!version.is_color_legacy());
    assert!(version.is_older_than(ServerVersion::V1_16_R2));
    assert!(version.is_newer_than_or_equal(ServerVersion::COLOR_LEGACY_BOUNDARY));
}
