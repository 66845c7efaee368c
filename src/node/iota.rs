//! Business-logic component

use std::sync::Arc;

use log::info;

use super::NodeComponent;
use crate::common::{NodeError, Result};
use crate::config::{ConfigStore, SettingKey};

/// Node settings read from the store at `init()`
///
/// This is where numeric settings are first parsed, so a malformed value in
/// the overlay or on the command line surfaces here.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSettings {
    pub testnet: bool,
    pub min_weight_magnitude: i32,
    pub udp_receiver_port: u16,
    pub tcp_receiver_port: u16,
    pub neighbors: Vec<String>,
    pub db_path: String,
    pub db_log_path: String,
    pub main_db: String,
    pub p_remove_request: f64,
    pub p_drop_transaction: f64,
    pub p_select_milestone_child: f64,
    pub p_send_milestone: f64,
    pub send_limit: f64,
    pub max_peers: i32,
    pub revalidate: bool,
    pub rescan_db: bool,
}

impl NodeSettings {
    pub fn from_store(store: &ConfigStore) -> Result<Self> {
        let testnet = store.get_bool(SettingKey::Testnet)?;
        let mwm_key = if testnet {
            SettingKey::TestnetMwm
        } else {
            SettingKey::MainnetMwm
        };

        Ok(Self {
            testnet,
            min_weight_magnitude: store.get_i32(mwm_key)?,
            udp_receiver_port: store.get_u16(SettingKey::UdpReceiverPort)?,
            tcp_receiver_port: store.get_u16(SettingKey::TcpReceiverPort)?,
            neighbors: store
                .get(SettingKey::Neighbors)?
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            db_path: store.get(SettingKey::DbPath)?,
            db_log_path: store.get(SettingKey::DbLogPath)?,
            main_db: store.get(SettingKey::MainDb)?,
            p_remove_request: store.get_f64(SettingKey::PRemoveRequest)?,
            p_drop_transaction: store.get_f64(SettingKey::PDropTransaction)?,
            p_select_milestone_child: store.get_f64(SettingKey::PSelectMilestoneChild)?,
            p_send_milestone: store.get_f64(SettingKey::PSendMilestone)?,
            send_limit: store.get_f64(SettingKey::SendLimit)?,
            max_peers: store.get_i32(SettingKey::MaxPeers)?,
            revalidate: store.get_bool(SettingKey::Revalidate)?,
            rescan_db: store.get_bool(SettingKey::RescanDb)?,
        })
    }
}

/// Business-logic component
pub struct Iota {
    store: Arc<ConfigStore>,
    settings: Option<NodeSettings>,
}

impl Iota {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self {
            store,
            settings: None,
        }
    }

    /// Settings captured by the last successful `init()`
    pub fn settings(&self) -> Option<&NodeSettings> {
        self.settings.as_ref()
    }
}

impl NodeComponent for Iota {
    fn name(&self) -> &'static str {
        "IOTA"
    }

    fn init(&mut self) -> Result<()> {
        let settings = NodeSettings::from_store(&self.store).map_err(|e| NodeError::Init {
            component: self.name(),
            reason: e.to_string(),
        })?;

        info!(
            "Database {} at {} (log {}), {} neighbor(s), MWM {}",
            settings.main_db,
            settings.db_path,
            settings.db_log_path,
            settings.neighbors.len(),
            settings.min_weight_magnitude
        );
        info!(
            "Receivers on UDP {} / TCP {}",
            settings.udp_receiver_port, settings.tcp_receiver_port
        );

        self.settings = Some(settings);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        info!("Shutting down IOTA component");
        self.settings = None;
        Ok(())
    }
}
