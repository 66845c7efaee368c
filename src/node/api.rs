//! API component

use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use log::{debug, info};

use super::NodeComponent;
use crate::common::{NodeError, Result};
use crate::config::{ConfigStore, SettingKey};

/// Request-serving component
///
/// `init()` resolves the bind address from `API_HOST` and `PORT` and loads the
/// remote access restrictions.
pub struct Api {
    store: Arc<ConfigStore>,
    bind_addr: Option<SocketAddr>,
    remote_limit_api: Vec<String>,
    remote_auth: Option<String>,
}

impl Api {
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self {
            store,
            bind_addr: None,
            remote_limit_api: Vec::new(),
            remote_auth: None,
        }
    }

    pub fn bind_addr(&self) -> Option<SocketAddr> {
        self.bind_addr
    }

    /// API commands refused to remote callers
    pub fn remote_limit_api(&self) -> &[String] {
        &self.remote_limit_api
    }

    pub fn requires_auth(&self) -> bool {
        self.remote_auth.is_some()
    }

    fn resolve_bind_addr(&self) -> Result<SocketAddr> {
        let host = self.store.get(SettingKey::ApiHost)?;
        let port = self.store.get_u16(SettingKey::Port)?;

        (host.as_str(), port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| NodeError::Other(format!("No address for {}:{}", host, port)))
    }
}

impl NodeComponent for Api {
    fn name(&self) -> &'static str {
        "API"
    }

    fn init(&mut self) -> Result<()> {
        let addr = self.resolve_bind_addr().map_err(|e| NodeError::Init {
            component: self.name(),
            reason: e.to_string(),
        })?;

        self.remote_limit_api = self
            .store
            .get(SettingKey::RemoteLimitApi)?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let auth = self.store.get(SettingKey::RemoteAuth)?;
        self.remote_auth = (!auth.is_empty()).then_some(auth);

        debug!("Remote API limits: {:?}", self.remote_limit_api);
        info!("API bound to {}", addr);
        self.bind_addr = Some(addr);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        info!("Shutting down API");
        self.bind_addr = None;
        Ok(())
    }
}
