//! Environment/flag configuration resolution.
//!
//! Flags win over the `MDNS_PUB_*` environment variables; everything is
//! validated here so the responder only ever sees resolved values.

use mdns_pub_domain::{AnswerAddressSource, ConfigError, HostName, PublisherConfig};
use mdns_pub_infrastructure::system::{default_route_ipv4, interface_ipv4};
use std::env;
use std::net::Ipv4Addr;

const ENV_NAMES: &str = "MDNS_PUB_NAMES";
const ENV_BIND_IFACE: &str = "MDNS_PUB_BIND_IFACE";
const ENV_LOCAL_IP: &str = "MDNS_PUB_LOCAL_IP";
const ENV_LOCAL_IFACE: &str = "MDNS_PUB_LOCAL_IFACE";

/// Command-line values that override the environment.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub names: Option<String>,
    pub bind_iface: Option<String>,
    pub local_ip: Option<String>,
    pub local_iface: Option<String>,
}

pub fn load_config(overrides: CliOverrides) -> Result<PublisherConfig, ConfigError> {
    let names = parse_names(
        &overrides
            .names
            .or_else(|| env_var(ENV_NAMES))
            .unwrap_or_default(),
    )?;
    if names.is_empty() {
        return Err(ConfigError::NoNames);
    }

    let bind_interface = overrides
        .bind_iface
        .or_else(|| env_var(ENV_BIND_IFACE))
        .ok_or(ConfigError::MissingBindInterface)?;

    let answer_address = resolve_address_source(
        overrides.local_ip.or_else(|| env_var(ENV_LOCAL_IP)),
        overrides.local_iface.or_else(|| env_var(ENV_LOCAL_IFACE)),
    )?;

    Ok(PublisherConfig {
        names,
        bind_interface,
        answer_address,
    })
}

/// Turns the configured address source into a concrete IPv4 address.
///
/// May open a short-lived UDP probe socket for the default-route fallback;
/// the mDNS socket itself is not touched here.
pub fn resolve_answer_address(config: &PublisherConfig) -> Result<Ipv4Addr, ConfigError> {
    match &config.answer_address {
        AnswerAddressSource::Explicit(addr) => Ok(*addr),
        AnswerAddressSource::Interface(name) => interface_ipv4(name)
            .map_err(|e| ConfigError::AnswerAddressResolution(e.to_string())),
        AnswerAddressSource::DefaultRoute => default_route_ipv4()
            .map_err(|e| ConfigError::AnswerAddressResolution(e.to_string())),
    }
}

fn parse_names(raw: &str) -> Result<Vec<HostName>, ConfigError> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| HostName::parse(s).map_err(|e| ConfigError::InvalidName(s.to_string(), e.to_string())))
        .collect()
}

fn resolve_address_source(
    local_ip: Option<String>,
    local_iface: Option<String>,
) -> Result<AnswerAddressSource, ConfigError> {
    if let Some(raw) = local_ip {
        let addr = raw
            .parse::<Ipv4Addr>()
            .map_err(|_| ConfigError::InvalidLocalIp(raw.clone()))?;
        return Ok(AnswerAddressSource::Explicit(addr));
    }
    if let Some(iface) = local_iface {
        return Ok(AnswerAddressSource::Interface(iface));
    }
    Ok(AnswerAddressSource::DefaultRoute)
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
