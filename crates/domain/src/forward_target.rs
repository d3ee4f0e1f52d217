use crate::errors::DomainError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

/// Default port for plain DNS upstreams given without one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Why a forwarding rule's scheme cannot be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedReason {
    /// Reserved scheme (`tcp`, `dot`) that has no transport yet.
    NotImplemented,
    /// Scheme this resolver does not know.
    UnknownScheme,
}

impl UnsupportedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotImplemented => "WIP",
            Self::UnknownScheme => "unsupported scheme",
        }
    }
}

/// Parsed `dns` target of a forwarding rule.
///
/// The scheme is resolved once, at configuration time; nothing downstream
/// re-dispatches on strings.
///
/// | target                     | variant       |
/// |----------------------------|---------------|
/// | `ipv4://10.0.0.1`          | `StaticV4`    |
/// | `ipv6://[fd00::1]`         | `StaticV6`    |
/// | `udp://1.1.1.1:53`         | `Udp`         |
/// | `udp://dns.google`         | `Udp`         |
/// | `doh://dns.google/dns-query` | `Doh`       |
/// | `tcp://…`, `dot://…`, other  | `Unsupported` |
/// | `8.8.8.8` (no scheme)        | `Unsupported` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ForwardTarget {
    StaticV4(Ipv4Addr),
    StaticV6(Ipv6Addr),
    Udp {
        host: Arc<str>,
        port: u16,
    },
    Doh {
        url: Arc<str>,
        hostname: Arc<str>,
    },
    Unsupported {
        scheme: Arc<str>,
        reason: UnsupportedReason,
    },
}

impl ForwardTarget {
    pub fn scheme(&self) -> &str {
        match self {
            ForwardTarget::StaticV4(_) => "ipv4",
            ForwardTarget::StaticV6(_) => "ipv6",
            ForwardTarget::Udp { .. } => "udp",
            ForwardTarget::Doh { .. } => "doh",
            ForwardTarget::Unsupported { scheme, .. } => scheme,
        }
    }

    /// Returns `true` for the static-address variants.
    pub fn is_static(&self) -> bool {
        matches!(
            self,
            ForwardTarget::StaticV4(_) | ForwardTarget::StaticV6(_)
        )
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ForwardTarget::Unsupported { .. })
    }
}

fn invalid(target: &str, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidUpstreamTarget {
        target: target.to_string(),
        reason: reason.into(),
    }
}

/// Host part of `rest`, i.e. everything before the first `/`, `?` or `#`.
fn authority(rest: &str) -> &str {
    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}

fn strip_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}

fn is_hostname(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'))
}

/// `IP`, `IP:PORT`, `[IPv6]`, `[IPv6]:PORT`, `HOST` or `HOST:PORT`.
fn parse_udp_host(target: &str, host: &str) -> Result<(Arc<str>, u16), DomainError> {
    if let Ok(addr) = host.parse::<SocketAddr>() {
        return Ok((addr.ip().to_string().into(), addr.port()));
    }
    if let Ok(ip) = strip_brackets(host).parse::<IpAddr>() {
        return Ok((ip.to_string().into(), DEFAULT_DNS_PORT));
    }

    let (name, port) = match host.rsplit_once(':') {
        Some((name, port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|_| invalid(target, format!("invalid port '{}'", port)))?;
            (name, port)
        }
        None => (host, DEFAULT_DNS_PORT),
    };

    if !is_hostname(name) {
        return Err(invalid(target, "expected HOST, HOST:PORT, IP or IP:PORT"));
    }
    Ok((name.into(), port))
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

impl FromStr for ForwardTarget {
    type Err = DomainError;

    /// Only malformed input is an error. A well-formed target whose scheme
    /// has no transport, including a bare address with no scheme at all,
    /// parses to [`ForwardTarget::Unsupported`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(invalid(s, "empty target"));
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid(s, "target contains whitespace or control characters"));
        }

        let Some((scheme, rest)) = s.split_once("://") else {
            return Ok(ForwardTarget::Unsupported {
                scheme: "".into(),
                reason: UnsupportedReason::UnknownScheme,
            });
        };
        if !is_valid_scheme(scheme) {
            return Err(invalid(s, format!("malformed scheme '{}'", scheme)));
        }
        let scheme = scheme.to_ascii_lowercase();
        let host = authority(rest);

        match scheme.as_str() {
            "ipv4" => {
                let ip = host
                    .parse::<Ipv4Addr>()
                    .map_err(|e| invalid(s, format!("invalid IPv4 address: {}", e)))?;
                Ok(ForwardTarget::StaticV4(ip))
            }
            "ipv6" => {
                let ip = strip_brackets(host)
                    .parse::<Ipv6Addr>()
                    .map_err(|e| invalid(s, format!("invalid IPv6 address: {}", e)))?;
                Ok(ForwardTarget::StaticV6(ip))
            }
            "udp" => {
                let (host, port) = parse_udp_host(s, host)?;
                Ok(ForwardTarget::Udp { host, port })
            }
            "doh" => {
                if host.is_empty() {
                    return Err(invalid(s, "missing DoH host"));
                }
                Ok(ForwardTarget::Doh {
                    url: format!("https://{}", rest).into(),
                    hostname: host.into(),
                })
            }
            "tcp" | "dot" => Ok(ForwardTarget::Unsupported {
                scheme: scheme.into(),
                reason: UnsupportedReason::NotImplemented,
            }),
            _ => Ok(ForwardTarget::Unsupported {
                scheme: scheme.into(),
                reason: UnsupportedReason::UnknownScheme,
            }),
        }
    }
}

impl fmt::Display for ForwardTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardTarget::StaticV4(ip) => write!(f, "ipv4://{}", ip),
            ForwardTarget::StaticV6(ip) => write!(f, "ipv6://[{}]", ip),
            ForwardTarget::Udp { host, port } if host.contains(':') => {
                write!(f, "udp://[{}]:{}", host, port)
            }
            ForwardTarget::Udp { host, port } => write!(f, "udp://{}:{}", host, port),
            ForwardTarget::Doh { url, .. } => write!(f, "{}", url),
            ForwardTarget::Unsupported { scheme, .. } => write!(f, "{}://", scheme),
        }
    }
}
