//! Default configuration values
//!
//! This module is the single source of truth for the compiled-in defaults.
//! The store copies this table into its mutable map at construction.

use super::keys::SettingKey;

/// Default overlay file name
pub const DEFAULT_CONFIG_FILE: &str = "iota.ini";

/// Section of the overlay file holding node settings
pub const OVERLAY_SECTION: &str = "IRI";

/// Network name reported on mainnet
pub const MAINNET_NAME: &str = "IRI";

/// Network name reported on testnet
pub const TESTNET_NAME: &str = "IRI Testnet";

/// Host the API binds to with `--remote`
pub const REMOTE_API_HOST: &str = "0.0.0.0";

/// Database path forced by `--testnet`
pub const TESTNET_DB_PATH: &str = "testnetdb";

/// Database log path forced by `--testnet`
pub const TESTNET_DB_LOG_PATH: &str = "testnetdb.log";

/// Ports below this value trigger a warning
pub const LOW_PORT_THRESHOLD: i32 = 1024;

/// Compiled-in default for `key`
///
/// `None` for keys that have no default and must come from the overlay or an
/// explicit `set`.
pub fn default_value(key: SettingKey) -> Option<&'static str> {
    use SettingKey::*;

    let value = match key {
        Port => "14600",
        ApiHost => "localhost",
        UdpReceiverPort => "14600",
        TcpReceiverPort => "15600",
        Testnet => "false",
        Debug => "false",
        RemoteLimitApi => "",
        RemoteAuth => "",
        Neighbors => "",
        IxiDir => "ixi",
        DbPath => "mainnetdb",
        DbLogPath => "mainnet.log",
        Config => DEFAULT_CONFIG_FILE,
        PRemoveRequest => "0.01",
        PDropTransaction => "0.0",
        PSelectMilestoneChild => "0.7",
        PSendMilestone => "0.02",
        MainDb => "rocksdb",
        Export => "false",
        SendLimit => "-1.0",
        MaxPeers => "0",
        Revalidate => "false",
        RescanDb => "false",
        MainnetMwm => "15",
        TestnetMwm => "13",
        // Pick a number based on best performance
        MaxRandomWalks => "27",
        // Pick a milestone depth number depending on risk model
        MaxDepth => "15",
        MaxFindTransactions => "100000",
        MaxGetTrytes => "10000",
        Coordinator => return None,
    };

    Some(value)
}

/// All `(key, default)` pairs
pub fn defaults() -> impl Iterator<Item = (SettingKey, &'static str)> {
    SettingKey::ALL
        .into_iter()
        .filter_map(|key| default_value(key).map(|value| (key, value)))
}
