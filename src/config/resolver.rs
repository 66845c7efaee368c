//! Argument resolution
//!
//! Applies command line options to a [`ConfigStore`] in a fixed order. The
//! order matters: `--config` reloads the overlay before the port is resolved,
//! the port is read straight from the overlay before the command line is
//! consulted, and `--testnet` overrides database paths set earlier.
//!
//! Usage, help and parse failures do not exit the process here; they are
//! reported as [`Resolution::Exit`] and the caller terminates.

use log::{debug, error, info, warn};

use super::cli::{usage, CliOptions};
use super::defaults::{
    LOW_PORT_THRESHOLD, MAINNET_NAME, REMOTE_API_HOST, TESTNET_DB_LOG_PATH, TESTNET_DB_PATH,
    TESTNET_NAME,
};
use super::error::{ConfigError, Result};
use super::keys::SettingKey;
use super::store::ConfigStore;
use crate::common::status_report;

/// Exit code of the shared usage routine (help, missing port, bad argument list)
pub const EXIT_USAGE: i32 = 0;

/// Exit code when the command line cannot be tokenised into known options
pub const EXIT_PARSE_ERROR: i32 = 2;

/// Exit code when a collaborator fails to initialise
pub const EXIT_INIT_FAILURE: i32 = -1;

/// Outcome of argument resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The store is fully resolved; start the node
    Continue,
    /// Terminate the process with this code
    Exit(i32),
}

impl Resolution {
    pub fn exit_code(self) -> Option<i32> {
        match self {
            Self::Continue => None,
            Self::Exit(code) => Some(code),
        }
    }
}

/// Welcome line naming the network selected by the effective `TESTNET` value
pub fn welcome(store: &ConfigStore, version: &str) -> Result<String> {
    let network = if store.get_bool(SettingKey::Testnet)? {
        TESTNET_NAME
    } else {
        MAINNET_NAME
    };
    Ok(format!("Welcome to {} {}", network, version))
}

/// Resolves process arguments against a store
pub struct ArgumentResolver<'a> {
    store: &'a ConfigStore,
    version: &'a str,
}

impl<'a> ArgumentResolver<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self {
            store,
            version: crate::VERSION,
        }
    }

    /// Override the version reported in the welcome and usage lines
    pub fn with_version(mut self, version: &'a str) -> Self {
        self.version = version;
        self
    }

    /// Resolve `args` (without the program name) into the store
    ///
    /// `None` stands for an absent argument vector and is handled like an
    /// empty one without an overlay. Errors are overlay I/O failures and a
    /// resolved port that is not an integer.
    pub fn resolve<S: AsRef<str>>(&self, args: Option<&[S]>) -> Result<Resolution> {
        let store = self.store;

        // Initial overlay from the default path
        let overlay_loaded = store.load_overlay()?;

        // Nothing to go on without an overlay or a flag with its value
        let args: Vec<&str> = match args {
            Some(args) if args.len() >= 2 || overlay_loaded => {
                args.iter().map(AsRef::as_ref).collect()
            }
            _ => {
                error!(
                    "Invalid arguments list. Provide ini-file 'iota.ini' or API port number \
                     (i.e. '-p 14600')."
                );
                return Ok(self.usage());
            }
        };

        // Tokenise
        let opts = match CliOptions::parse_args(args) {
            Ok(opts) => opts,
            Err(e) => {
                error!("{}", e);
                self.usage();
                return Ok(Resolution::Exit(EXIT_PARSE_ERROR));
            }
        };

        // Alternate overlay
        if let Some(path) = &opts.config {
            store.set(SettingKey::Config, path.as_str());
            store.load_overlay()?;
        }

        // Mandatory port, overlay first
        let port = match store.overlay_raw(SettingKey::Port).or_else(|| opts.port.clone()) {
            Some(port) => port,
            None => {
                error!(
                    "Invalid arguments list. Provide at least the PORT in iota.ini \
                     or with -p option"
                );
                return Ok(self.usage());
            }
        };
        store.set(SettingKey::Port, port.as_str());

        if opts.help {
            return Ok(self.usage());
        }

        let neighbors = opts.neighbors.clone().unwrap_or_else(|| {
            warn!("No neighbor has been specified. Server starting nodeless.");
            String::new()
        });
        store.set(SettingKey::Neighbors, neighbors);

        // Remote API restrictions
        if let Some(limit) = &opts.remote_limit_api {
            debug!("The following api calls are not allowed : {}", limit);
            store.set(SettingKey::RemoteLimitApi, limit.as_str());
        }
        if let Some(auth) = &opts.remote_auth {
            debug!("Remote access requires basic authentication");
            store.set(SettingKey::RemoteAuth, auth.as_str());
        }

        if let Some(udp) = &opts.udp_receiver_port {
            store.set(SettingKey::UdpReceiverPort, udp.as_str());
        }
        if let Some(tcp) = &opts.tcp_receiver_port {
            store.set(SettingKey::TcpReceiverPort, tcp.as_str());
        }

        if opts.remote {
            info!("Remote access enabled. Binding API socket to listen any interface.");
            store.set(SettingKey::ApiHost, REMOTE_API_HOST);
        }

        if opts.export {
            info!("Export transaction trytes turned on.");
            store.set(SettingKey::Export, "true");
        }

        // The port is only checked for being numeric here
        let port_number: i32 = port.trim().parse().map_err(|_| ConfigError::Parse {
            key: SettingKey::Port,
            value: port.clone(),
            expected: "integer",
        })?;
        if port_number < LOW_PORT_THRESHOLD {
            warn!("Warning: api port value seems too low.");
        }

        if opts.debug {
            store.set(SettingKey::Debug, "true");
            info!("{}", store.dump_all());
            info!("{}", status_report());
        }

        // Testnet always gets its own database
        if opts.testnet {
            store.set(SettingKey::Testnet, "true");
            store.set(SettingKey::DbPath, TESTNET_DB_PATH);
            store.set(SettingKey::DbLogPath, TESTNET_DB_LOG_PATH);
        }

        if opts.revalidate {
            store.set(SettingKey::Revalidate, "true");
        }
        if opts.rescan {
            store.set(SettingKey::RescanDb, "true");
        }

        // Parsed on first read
        if let Some(limit) = &opts.send_limit {
            store.set(SettingKey::SendLimit, limit.as_str());
        }
        if let Some(peers) = &opts.max_peers {
            store.set(SettingKey::MaxPeers, peers.as_str());
        }

        info!("{}", welcome(store, self.version)?);

        Ok(Resolution::Continue)
    }

    /// Log the usage line and request a clean exit
    fn usage(&self) -> Resolution {
        info!("{}", usage(self.version));
        Resolution::Exit(EXIT_USAGE)
    }
}
