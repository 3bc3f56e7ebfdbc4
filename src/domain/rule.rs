use serde::Serialize;
use std::fmt;

/// Port constraint attached to a permit rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PortSpec {
    /// Explicit enumeration from an `eq` clause, in source order. Never empty.
    List { ports: Vec<String> },

    /// Inclusive bounds from a `range` clause.
    Range { low: String, high: String },
}

impl PortSpec {
    /// Build a port list from its mandatory first port and any further ports.
    pub fn list(first: impl Into<String>, rest: impl IntoIterator<Item = String>) -> Self {
        let mut ports = vec![first.into()];
        ports.extend(rest);
        PortSpec::List { ports }
    }

    /// Build an inclusive port range.
    pub fn range(low: impl Into<String>, high: impl Into<String>) -> Self {
        PortSpec::Range {
            low: low.into(),
            high: high.into(),
        }
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortSpec::List { ports } => write!(f, "(port {})", ports.join(" or ")),
            PortSpec::Range { low, high } => write!(f, "portrange {}-{}", low, high),
        }
    }
}

/// A single parsed `permit` line.
///
/// Protocol and network tokens are carried through verbatim; nothing here
/// checks that the network is a valid CIDR block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Protocol token (e.g. "tcp", "udp", "ip")
    pub protocol: String,

    /// Network in address/prefix notation
    pub network: String,

    /// Port constraint
    pub ports: PortSpec,
}

impl Rule {
    /// Create a new rule.
    pub fn new(protocol: impl Into<String>, network: impl Into<String>, ports: PortSpec) -> Self {
        Rule {
            protocol: protocol.into(),
            network: network.into(),
            ports,
        }
    }
}

/// Renders the rule as a single parenthesised filter clause.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(net {} and {} and {})",
            self.network, self.protocol, self.ports
        )
    }
}
