use ipnetwork::IpNetwork;
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};

use crate::errors::ScopeError;

// 65536 addresses max per expanded range entry.
const MAX_RANGE_SIZE: u32 = 1 << 16;

/// Compiled address membership: exact addresses plus CIDR containment.
#[derive(Debug, Default)]
pub(crate) struct AddressSet {
    exact: HashSet<IpAddr>,
    networks: Vec<IpNetwork>,
}

impl AddressSet {
    pub(crate) fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::default();
        for entry in entries {
            if let Ok(ip) = entry.parse::<IpAddr>() {
                set.exact.insert(ip);
            } else if let Ok(network) = entry.parse::<IpNetwork>() {
                set.networks.push(network);
            }
        }
        set
    }

    #[inline]
    pub(crate) fn contains(&self, ip: IpAddr) -> bool {
        if self.exact.contains(&ip) {
            return true;
        }
        self.networks.iter().any(|network| network.contains(ip))
    }
}

/// Normalize one raw address entry into canonical textual forms: a plain IP
/// stays a single address, a CIDR block is canonicalized, and an IPv4 dash
/// range (`192.0.2.10-20` or `192.0.2.10-192.0.2.20`) expands to its
/// individual addresses.
pub(crate) fn normalize_entry(raw: &str) -> Result<Vec<String>, ScopeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ScopeError::InvalidAddress("empty entry".to_string()));
    }

    if let Ok(ip) = raw.parse::<IpAddr>() {
        return Ok(vec![ip.to_string()]);
    }

    if raw.contains('/') {
        let network: IpNetwork = raw
            .parse()
            .map_err(|_| ScopeError::InvalidAddress(raw.to_string()))?;
        return Ok(vec![network.to_string()]);
    }

    if let Some((start, end)) = raw.split_once('-') {
        return expand_v4_range(raw, start.trim(), end.trim());
    }

    Err(ScopeError::InvalidAddress(raw.to_string()))
}

fn expand_v4_range(raw: &str, start: &str, end: &str) -> Result<Vec<String>, ScopeError> {
    let start_ip: Ipv4Addr = start
        .parse()
        .map_err(|_| ScopeError::InvalidAddress(raw.to_string()))?;

    // The short form gives only the final octet of the range end.
    let end_ip: Ipv4Addr = if end.contains('.') {
        end.parse()
            .map_err(|_| ScopeError::InvalidAddress(raw.to_string()))?
    } else {
        let last: u8 = end
            .parse()
            .map_err(|_| ScopeError::InvalidAddress(raw.to_string()))?;
        let octets = start_ip.octets();
        Ipv4Addr::new(octets[0], octets[1], octets[2], last)
    };

    let first = u32::from(start_ip);
    let last = u32::from(end_ip);
    if last < first || last - first >= MAX_RANGE_SIZE {
        return Err(ScopeError::InvalidAddress(raw.to_string()));
    }

    Ok((first..=last)
        .map(|value| Ipv4Addr::from(value).to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_addresses() {
        assert_eq!(normalize_entry("192.0.2.1").unwrap(), vec!["192.0.2.1"]);
        assert_eq!(normalize_entry(" 2001:db8::1 ").unwrap(), vec!["2001:db8::1"]);
    }

    #[test]
    fn test_normalize_cidr() {
        assert_eq!(normalize_entry("10.0.0.0/24").unwrap(), vec!["10.0.0.0/24"]);
        assert_eq!(normalize_entry("2001:db8::/64").unwrap(), vec!["2001:db8::/64"]);
    }

    #[test]
    fn test_expand_short_range() {
        let ips = normalize_entry("192.0.2.10-12").unwrap();
        assert_eq!(ips, vec!["192.0.2.10", "192.0.2.11", "192.0.2.12"]);
    }

    #[test]
    fn test_expand_full_range() {
        let ips = normalize_entry("192.0.2.254-192.0.3.1").unwrap();
        assert_eq!(
            ips,
            vec!["192.0.2.254", "192.0.2.255", "192.0.3.0", "192.0.3.1"]
        );
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert!(normalize_entry("").is_err());
        assert!(normalize_entry("not-an-address").is_err());
        assert!(normalize_entry("192.0.2.20-10").is_err());
        assert!(normalize_entry("2001:db8::1-2001:db8::5").is_err());
        assert!(normalize_entry("10.0.0.0/33").is_err());
    }

    #[test]
    fn test_contains_exact_and_network() {
        let set = AddressSet::from_entries(["192.0.2.1", "10.0.0.0/24"]);

        assert!(set.contains("192.0.2.1".parse().unwrap()));
        assert!(set.contains("10.0.0.77".parse().unwrap()));
        assert!(!set.contains("10.0.1.1".parse().unwrap()));
        assert!(!set.contains("192.0.2.2".parse().unwrap()));
    }
}
