//! Command line options
//!
//! Grammar of the node's flags. Parsing only produces typed options; applying
//! them to a store is the resolver's job.

use clap::Parser;

use super::defaults::MAINNET_NAME;
use super::error::Result;

/// IOTA reference node
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(
    name = "iri",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliOptions {
    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// API port
    #[arg(short = 'p', long = "port")]
    pub port: Option<String>,

    /// UDP receiver port
    #[arg(short = 'u', long = "udp-receiver-port")]
    pub udp_receiver_port: Option<String>,

    /// TCP receiver port
    #[arg(short = 't', long = "tcp-receiver-port")]
    pub tcp_receiver_port: Option<String>,

    /// Dump the effective settings at startup
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Bind the API to all interfaces
    #[arg(long = "remote")]
    pub remote: bool,

    /// API commands refused to remote callers
    #[arg(long = "remote-limit-api")]
    pub remote_limit_api: Option<String>,

    /// Basic auth credentials for remote API access
    #[arg(long = "remote-auth")]
    pub remote_auth: Option<String>,

    /// Neighbor list
    #[arg(short = 'n', long = "neighbors")]
    pub neighbors: Option<String>,

    /// Export transaction trytes to the filesystem
    #[arg(long = "export")]
    pub export: bool,

    /// Print usage and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Join the test network
    #[arg(long = "testnet")]
    pub testnet: bool,

    /// Revalidate milestones on startup
    #[arg(long = "revalidate")]
    pub revalidate: bool,

    /// Rescan the database on startup
    #[arg(long = "rescan")]
    pub rescan: bool,

    /// Outbound bandwidth limit
    #[arg(long = "send-limit", allow_negative_numbers = true)]
    pub send_limit: Option<String>,

    /// Maximum number of non-tethered peers
    #[arg(long = "max-peers")]
    pub max_peers: Option<String>,
}

impl CliOptions {
    /// Parse `args`, which must not include the program name
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }
}

/// One-line usage summary
pub fn usage(version: &str) -> String {
    format!(
        "Usage: {}-{} \
         [{{-n,--neighbors}} '<list of neighbors>'] \
         [{{-p,--port}} 14600] \
         [{{-c,--config}} 'config-file-name'] \
         [{{-u,--udp-receiver-port}} 14600] \
         [{{-t,--tcp-receiver-port}} 15600] \
         [{{-d,--debug}} false] \
         [{{--testnet}} false] \
         [{{--remote}} false] \
         [{{--remote-auth}} string] \
         [{{--remote-limit-api}} string] \
         [{{--export}} false] \
         [{{--revalidate}} false] \
         [{{--rescan}} false] \
         [{{--send-limit}} -1.0] \
         [{{--max-peers}} 0] \
         [{{-h,--help}}]",
        MAINNET_NAME.to_lowercase(),
        version
    )
}
