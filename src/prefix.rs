//! Canonical network prefix representation.

use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;

use ipnet::{Ipv4Net, Ipv6Net};
use thiserror::Error;

/// Error type for prefix construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// Unparseable address, length out of range, or mixed address families
    #[error("malformed prefix: {0}")]
    MalformedPrefix(String),

    /// Netmask string is not a valid address
    #[error("invalid netmask format: {0}")]
    InvalidNetmask(String),

    /// Netmask bits are not a contiguous run of ones
    #[error("non-contiguous netmask: {0}")]
    NonContiguousMask(String),
}

/// A canonical IPv4 or IPv6 network prefix.
///
/// The address is always truncated to its network boundary: every bit past
/// `prefix_len` is zero. Constructors enforce this, so a host address such
/// as `192.168.1.123/24` normalizes to `192.168.1.0/24` rather than failing.
///
/// Prefixes of different families never compare equal, contain one another,
/// or merge. The total order sorts IPv4 before IPv6, then by prefix length
/// ascending (broader networks first), then by network address.
///
/// # Examples
/// ```
/// use cidrpack::NetworkPrefix;
///
/// let net = NetworkPrefix::from_cidr("192.168.1.123/24").unwrap();
/// assert_eq!(net.to_string(), "192.168.1.0/24");
///
/// let net = NetworkPrefix::from_addr_mask("10.0.0.0", "255.255.0.0").unwrap();
/// assert_eq!(net.to_string(), "10.0.0.0/16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkPrefix {
    /// IPv4 prefix
    V4(Ipv4Net),
    /// IPv6 prefix
    V6(Ipv6Net),
}

/// Contiguous IPv4 mask of `len` leading ones.
fn v4_mask(len: u8) -> u32 {
    if len == 0 {
        0
    } else {
        u32::MAX << (32 - len)
    }
}

/// Contiguous IPv6 mask of `len` leading ones.
fn v6_mask(len: u8) -> u128 {
    if len == 0 {
        0
    } else {
        u128::MAX << (128 - len)
    }
}

impl NetworkPrefix {
    /// Parse a prefix from CIDR notation (`address/length`).
    ///
    /// The length must be in range for the detected family ([0, 32] for
    /// IPv4, [0, 128] for IPv6). The address is truncated to its network
    /// boundary.
    pub fn from_cidr(cidr: &str) -> Result<Self, PrefixError> {
        let cidr = cidr.trim();

        // Try parsing as IPv4 CIDR
        if let Ok(net) = cidr.parse::<Ipv4Net>() {
            return Ok(NetworkPrefix::V4(net.trunc()));
        }

        // Try parsing as IPv6 CIDR
        if let Ok(net) = cidr.parse::<Ipv6Net>() {
            return Ok(NetworkPrefix::V6(net.trunc()));
        }

        Err(PrefixError::MalformedPrefix(cidr.to_string()))
    }

    /// Build a prefix from separate address and netmask strings.
    ///
    /// The prefix length is the mask's bit population; the mask must be a
    /// contiguous run of ones (`255.255.0.255` is rejected, not just masks
    /// with an impossible population count). Both strings must parse as
    /// addresses of the same family.
    pub fn from_addr_mask(addr: &str, mask: &str) -> Result<Self, PrefixError> {
        let addr = addr.trim();
        let mask = mask.trim();

        let addr_ip: IpAddr = addr
            .parse()
            .map_err(|_| PrefixError::MalformedPrefix(addr.to_string()))?;
        let mask_ip: IpAddr = mask
            .parse()
            .map_err(|_| PrefixError::InvalidNetmask(mask.to_string()))?;

        match (addr_ip, mask_ip) {
            (IpAddr::V4(a), IpAddr::V4(m)) => {
                let bits = u32::from(m);
                let len = bits.count_ones() as u8;
                if bits != v4_mask(len) {
                    return Err(PrefixError::NonContiguousMask(mask.to_string()));
                }
                let net = Ipv4Net::new(a, len)
                    .map_err(|_| PrefixError::MalformedPrefix(format!("{}/{}", a, len)))?;
                Ok(NetworkPrefix::V4(net.trunc()))
            }
            (IpAddr::V6(a), IpAddr::V6(m)) => {
                let bits = u128::from(m);
                let len = bits.count_ones() as u8;
                if bits != v6_mask(len) {
                    return Err(PrefixError::NonContiguousMask(mask.to_string()));
                }
                let net = Ipv6Net::new(a, len)
                    .map_err(|_| PrefixError::MalformedPrefix(format!("{}/{}", a, len)))?;
                Ok(NetworkPrefix::V6(net.trunc()))
            }
            _ => Err(PrefixError::MalformedPrefix(format!(
                "{} with netmask {}",
                addr, mask
            ))),
        }
    }

    /// The prefix length.
    pub fn prefix_len(&self) -> u8 {
        match self {
            NetworkPrefix::V4(net) => net.prefix_len(),
            NetworkPrefix::V6(net) => net.prefix_len(),
        }
    }

    /// The network address.
    pub fn network(&self) -> IpAddr {
        match self {
            NetworkPrefix::V4(net) => IpAddr::V4(net.network()),
            NetworkPrefix::V6(net) => IpAddr::V6(net.network()),
        }
    }

    /// The netmask in address form (`255.255.255.0`, `ffff:ffff::`).
    pub fn netmask(&self) -> IpAddr {
        match self {
            NetworkPrefix::V4(net) => IpAddr::V4(net.netmask()),
            NetworkPrefix::V6(net) => IpAddr::V6(net.netmask()),
        }
    }

    /// Whether this is an IPv4 prefix.
    pub fn is_ipv4(&self) -> bool {
        matches!(self, NetworkPrefix::V4(_))
    }

    /// Whether `other`'s entire address range lies inside this prefix.
    ///
    /// Always false across families. A prefix contains itself.
    pub fn contains(&self, other: &Self) -> bool {
        match (self, other) {
            (NetworkPrefix::V4(a), NetworkPrefix::V4(b)) => a.contains(b),
            (NetworkPrefix::V6(a), NetworkPrefix::V6(b)) => a.contains(b),
            _ => false,
        }
    }

    /// Attempt to merge this prefix with its right-hand sibling.
    ///
    /// Succeeds only when both prefixes have the same family and the same
    /// length `L` (L >= 1), this prefix sits on the `L-1` parent boundary
    /// (it is the left half), and `right`'s address is exactly this address
    /// with the bit at position `L-1` (from the most significant bit) set.
    /// Returns the parent supernet of length `L-1`.
    pub fn try_merge(&self, right: &Self) -> Option<Self> {
        match (self, right) {
            (NetworkPrefix::V4(a), NetworkPrefix::V4(b)) => {
                let len = a.prefix_len();
                if b.prefix_len() != len || len == 0 {
                    return None;
                }
                let parent_len = len - 1;
                let addr = u32::from(a.network());
                if addr & v4_mask(parent_len) != addr {
                    return None;
                }
                let expected = addr | (1u32 << (31 - parent_len));
                if u32::from(b.network()) != expected {
                    return None;
                }
                Ipv4Net::new(a.network(), parent_len)
                    .ok()
                    .map(NetworkPrefix::V4)
            }
            (NetworkPrefix::V6(a), NetworkPrefix::V6(b)) => {
                let len = a.prefix_len();
                if b.prefix_len() != len || len == 0 {
                    return None;
                }
                let parent_len = len - 1;
                let addr = u128::from(a.network());
                if addr & v6_mask(parent_len) != addr {
                    return None;
                }
                let expected = addr | (1u128 << (127 - parent_len));
                if u128::from(b.network()) != expected {
                    return None;
                }
                Ipv6Net::new(a.network(), parent_len)
                    .ok()
                    .map(NetworkPrefix::V6)
            }
            _ => None,
        }
    }

    /// Compare by (family, network address, prefix length).
    ///
    /// The merge pass sorts by this key so that sibling prefixes become
    /// consecutive; the derived total order (length first) serves the
    /// aggregation pass instead.
    pub(crate) fn cmp_by_address(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NetworkPrefix::V4(a), NetworkPrefix::V4(b)) => a
                .network()
                .cmp(&b.network())
                .then_with(|| a.prefix_len().cmp(&b.prefix_len())),
            (NetworkPrefix::V6(a), NetworkPrefix::V6(b)) => a
                .network()
                .cmp(&b.network())
                .then_with(|| a.prefix_len().cmp(&b.prefix_len())),
            (NetworkPrefix::V4(_), NetworkPrefix::V6(_)) => Ordering::Less,
            (NetworkPrefix::V6(_), NetworkPrefix::V4(_)) => Ordering::Greater,
        }
    }
}

impl Ord for NetworkPrefix {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NetworkPrefix::V4(a), NetworkPrefix::V4(b)) => a
                .prefix_len()
                .cmp(&b.prefix_len())
                .then_with(|| a.network().cmp(&b.network())),
            (NetworkPrefix::V6(a), NetworkPrefix::V6(b)) => a
                .prefix_len()
                .cmp(&b.prefix_len())
                .then_with(|| a.network().cmp(&b.network())),
            (NetworkPrefix::V4(_), NetworkPrefix::V6(_)) => Ordering::Less,
            (NetworkPrefix::V6(_), NetworkPrefix::V4(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for NetworkPrefix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkPrefix::V4(net) => write!(f, "{}", net),
            NetworkPrefix::V6(net) => write!(f, "{}", net),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cidr_canonicalizes_host_bits() {
        let net = NetworkPrefix::from_cidr("192.168.1.123/24").unwrap();
        assert_eq!(net.to_string(), "192.168.1.0/24");
        assert_eq!(net.prefix_len(), 24);

        let net = NetworkPrefix::from_cidr("2001:db8::1/32").unwrap();
        assert_eq!(net.to_string(), "2001:db8::/32");
    }

    #[test]
    fn test_from_cidr_rejects_garbage() {
        assert!(matches!(
            NetworkPrefix::from_cidr("not-a-network"),
            Err(PrefixError::MalformedPrefix(_))
        ));
        // Missing length
        assert!(NetworkPrefix::from_cidr("192.168.1.0").is_err());
        // Length out of range
        assert!(NetworkPrefix::from_cidr("192.168.1.0/33").is_err());
        assert!(NetworkPrefix::from_cidr("2001:db8::/129").is_err());
        // Bad octet
        assert!(NetworkPrefix::from_cidr("192.168.1.256/24").is_err());
    }

    #[test]
    fn test_from_addr_mask() {
        let net = NetworkPrefix::from_addr_mask("10.1.2.3", "255.255.255.0").unwrap();
        assert_eq!(net.to_string(), "10.1.2.0/24");

        let net = NetworkPrefix::from_addr_mask("0.0.0.0", "0.0.0.0").unwrap();
        assert_eq!(net.to_string(), "0.0.0.0/0");

        let net = NetworkPrefix::from_addr_mask("2001:db8::", "ffff:ffff::").unwrap();
        assert_eq!(net.to_string(), "2001:db8::/32");
    }

    #[test]
    fn test_from_addr_mask_rejects_non_contiguous() {
        assert_eq!(
            NetworkPrefix::from_addr_mask("192.168.1.0", "255.255.0.255"),
            Err(PrefixError::NonContiguousMask("255.255.0.255".to_string()))
        );
        assert!(matches!(
            NetworkPrefix::from_addr_mask("192.168.1.0", "255.0.255.0"),
            Err(PrefixError::NonContiguousMask(_))
        ));
    }

    #[test]
    fn test_from_addr_mask_rejects_bad_mask_string() {
        assert_eq!(
            NetworkPrefix::from_addr_mask("192.168.1.0", "not-a-mask"),
            Err(PrefixError::InvalidNetmask("not-a-mask".to_string()))
        );
    }

    #[test]
    fn test_from_addr_mask_rejects_mixed_families() {
        assert!(matches!(
            NetworkPrefix::from_addr_mask("192.168.1.0", "ffff::"),
            Err(PrefixError::MalformedPrefix(_))
        ));
        assert!(matches!(
            NetworkPrefix::from_addr_mask("2001:db8::", "255.255.0.0"),
            Err(PrefixError::MalformedPrefix(_))
        ));
    }

    #[test]
    fn test_contains() {
        let wide = NetworkPrefix::from_cidr("10.0.0.0/8").unwrap();
        let narrow = NetworkPrefix::from_cidr("10.1.0.0/16").unwrap();
        let outside = NetworkPrefix::from_cidr("11.0.0.0/16").unwrap();

        assert!(wide.contains(&narrow));
        assert!(!narrow.contains(&wide));
        assert!(!wide.contains(&outside));
        assert!(wide.contains(&wide));
    }

    #[test]
    fn test_contains_never_crosses_families() {
        let v4 = NetworkPrefix::from_cidr("0.0.0.0/0").unwrap();
        let v6 = NetworkPrefix::from_cidr("::/0").unwrap();
        assert!(!v4.contains(&v6));
        assert!(!v6.contains(&v4));
    }

    #[test]
    fn test_try_merge_siblings() {
        let left = NetworkPrefix::from_cidr("192.168.0.0/24").unwrap();
        let right = NetworkPrefix::from_cidr("192.168.1.0/24").unwrap();

        let parent = left.try_merge(&right).unwrap();
        assert_eq!(parent.to_string(), "192.168.0.0/23");
    }

    #[test]
    fn test_try_merge_rejects_non_siblings() {
        // Right half of one parent and left half of the next: adjacent but
        // not siblings.
        let a = NetworkPrefix::from_cidr("192.168.1.0/24").unwrap();
        let b = NetworkPrefix::from_cidr("192.168.2.0/24").unwrap();
        assert!(a.try_merge(&b).is_none());

        // Different lengths
        let c = NetworkPrefix::from_cidr("192.168.0.0/24").unwrap();
        let d = NetworkPrefix::from_cidr("192.168.1.0/25").unwrap();
        assert!(c.try_merge(&d).is_none());

        // Not adjacent at all
        let e = NetworkPrefix::from_cidr("10.0.0.0/24").unwrap();
        let f = NetworkPrefix::from_cidr("10.0.2.0/24").unwrap();
        assert!(e.try_merge(&f).is_none());

        // /0 has no parent
        let g = NetworkPrefix::from_cidr("0.0.0.0/0").unwrap();
        assert!(g.try_merge(&g).is_none());
    }

    #[test]
    fn test_try_merge_ipv6_siblings() {
        let left = NetworkPrefix::from_cidr("2001:db8::/33").unwrap();
        let right = NetworkPrefix::from_cidr("2001:db8:8000::/33").unwrap();

        let parent = left.try_merge(&right).unwrap();
        assert_eq!(parent.to_string(), "2001:db8::/32");
    }

    #[test]
    fn test_ordering_broadest_first() {
        let mut nets = vec![
            NetworkPrefix::from_cidr("10.1.0.0/16").unwrap(),
            NetworkPrefix::from_cidr("192.168.0.0/24").unwrap(),
            NetworkPrefix::from_cidr("10.0.0.0/8").unwrap(),
            NetworkPrefix::from_cidr("2001:db8::/32").unwrap(),
        ];
        nets.sort();

        let rendered: Vec<String> = nets.iter().map(|n| n.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["10.0.0.0/8", "10.1.0.0/16", "192.168.0.0/24", "2001:db8::/32"]
        );
    }

    #[test]
    fn test_netmask_rendering() {
        let v4 = NetworkPrefix::from_cidr("192.168.0.0/23").unwrap();
        assert_eq!(v4.netmask().to_string(), "255.255.254.0");

        let v6 = NetworkPrefix::from_cidr("2001:db8::/32").unwrap();
        assert_eq!(v6.netmask().to_string(), "ffff:ffff::");
    }
}
