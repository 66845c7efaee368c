//! Setting keys
//!
//! The closed set of settings the node understands. Every key has exactly one
//! canonical name, which is also how it is spelled in the overlay file.

use std::fmt;
use std::str::FromStr;

/// A named runtime setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    Config,
    Port,
    ApiHost,
    UdpReceiverPort,
    TcpReceiverPort,
    Testnet,
    Debug,
    RemoteLimitApi,
    RemoteAuth,
    Neighbors,
    IxiDir,
    DbPath,
    DbLogPath,
    PRemoveRequest,
    PDropTransaction,
    PSelectMilestoneChild,
    PSendMilestone,
    MainDb,
    /// Exports transaction trytes to the filesystem
    Export,
    SendLimit,
    MaxPeers,
    Coordinator,
    Revalidate,
    RescanDb,
    MaxRandomWalks,
    MaxFindTransactions,
    MaxGetTrytes,
    MaxDepth,
    MainnetMwm,
    TestnetMwm,
}

impl SettingKey {
    /// Every key, in declaration order
    pub const ALL: [SettingKey; 30] = [
        Self::Config,
        Self::Port,
        Self::ApiHost,
        Self::UdpReceiverPort,
        Self::TcpReceiverPort,
        Self::Testnet,
        Self::Debug,
        Self::RemoteLimitApi,
        Self::RemoteAuth,
        Self::Neighbors,
        Self::IxiDir,
        Self::DbPath,
        Self::DbLogPath,
        Self::PRemoveRequest,
        Self::PDropTransaction,
        Self::PSelectMilestoneChild,
        Self::PSendMilestone,
        Self::MainDb,
        Self::Export,
        Self::SendLimit,
        Self::MaxPeers,
        Self::Coordinator,
        Self::Revalidate,
        Self::RescanDb,
        Self::MaxRandomWalks,
        Self::MaxFindTransactions,
        Self::MaxGetTrytes,
        Self::MaxDepth,
        Self::MainnetMwm,
        Self::TestnetMwm,
    ];

    /// Canonical name of the key
    pub const fn name(self) -> &'static str {
        match self {
            Self::Config => "CONFIG",
            Self::Port => "PORT",
            Self::ApiHost => "API_HOST",
            Self::UdpReceiverPort => "UDP_RECEIVER_PORT",
            Self::TcpReceiverPort => "TCP_RECEIVER_PORT",
            Self::Testnet => "TESTNET",
            Self::Debug => "DEBUG",
            Self::RemoteLimitApi => "REMOTE_LIMIT_API",
            Self::RemoteAuth => "REMOTE_AUTH",
            Self::Neighbors => "NEIGHBORS",
            Self::IxiDir => "IXI_DIR",
            Self::DbPath => "DB_PATH",
            Self::DbLogPath => "DB_LOG_PATH",
            Self::PRemoveRequest => "P_REMOVE_REQUEST",
            Self::PDropTransaction => "P_DROP_TRANSACTION",
            Self::PSelectMilestoneChild => "P_SELECT_MILESTONE_CHILD",
            Self::PSendMilestone => "P_SEND_MILESTONE",
            Self::MainDb => "MAIN_DB",
            Self::Export => "EXPORT",
            Self::SendLimit => "SEND_LIMIT",
            Self::MaxPeers => "MAX_PEERS",
            Self::Coordinator => "COORDINATOR",
            Self::Revalidate => "REVALIDATE",
            Self::RescanDb => "RESCAN_DB",
            Self::MaxRandomWalks => "MAX_RANDOM_WALKS",
            Self::MaxFindTransactions => "MAX_FIND_TRANSACTIONS",
            Self::MaxGetTrytes => "MAX_GET_TRYTES",
            Self::MaxDepth => "MAX_DEPTH",
            Self::MainnetMwm => "MAINNET_MWM",
            Self::TestnetMwm => "TESTNET_MWM",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSettingKey(pub String);

impl fmt::Display for UnknownSettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown setting: {}", self.0)
    }
}

impl std::error::Error for UnknownSettingKey {}

impl FromStr for SettingKey {
    type Err = UnknownSettingKey;

    /// Case-insensitive lookup by canonical name
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSettingKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = SettingKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), SettingKey::ALL.len());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("PORT".parse::<SettingKey>(), Ok(SettingKey::Port));
        assert_eq!("db_log_path".parse::<SettingKey>(), Ok(SettingKey::DbLogPath));
        assert!("NOT_A_SETTING".parse::<SettingKey>().is_err());

        for key in SettingKey::ALL {
            assert_eq!(key.name().parse::<SettingKey>(), Ok(key));
        }
    }
}
