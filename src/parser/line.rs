use thiserror::Error;
use tracing::trace;

use super::cursor::TokenCursor;
use super::{ANY, EQ, PERMIT, RANGE};
use crate::domain::{PortSpec, Rule};

/// Why a `permit` line could not be turned into a rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("missing protocol after `permit`")]
    MissingProtocol,

    #[error("missing network")]
    MissingNetwork,

    #[error("missing port operator, expected `eq` or `range`")]
    MissingOperator,

    #[error("unexpected port operator `{0}`, expected `eq` or `range`")]
    UnexpectedOperator(String),

    #[error("missing port after `{operator}`")]
    MissingPort { operator: &'static str },
}

/// Result of parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank, or not a permit statement. Silently ignored.
    Skipped,

    Parsed(Rule),

    /// Starts with `permit` but the rest does not fit the grammar.
    Malformed(MalformedReason),
}

impl LineOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, LineOutcome::Skipped)
    }
}

/// Parse a single rule line.
///
/// Grammar: `permit <protocol> [any] <network> (eq <port> [<port> ...] [any ...] | range <low> <high>)`
pub fn parse_line(line: &str) -> LineOutcome {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut cursor = TokenCursor::new(&tokens);

    if !cursor.advance_if(PERMIT) {
        trace!(line, "skipping non-permit line");
        return LineOutcome::Skipped;
    }

    match parse_permit(&mut cursor) {
        Ok(rule) => LineOutcome::Parsed(rule),
        Err(reason) => LineOutcome::Malformed(reason),
    }
}

fn parse_permit(cursor: &mut TokenCursor<'_>) -> Result<Rule, MalformedReason> {
    let protocol = cursor.expect(MalformedReason::MissingProtocol)?;

    // `any` in network position is dropped; the next token is the network.
    cursor.advance_if(ANY);
    let network = cursor.expect(MalformedReason::MissingNetwork)?;

    let ports = match cursor.expect(MalformedReason::MissingOperator)? {
        EQ => {
            let first = cursor.expect(MalformedReason::MissingPort { operator: EQ })?;
            let rest = cursor.take_until(ANY).into_iter().map(str::to_string);
            PortSpec::list(first, rest)
        }
        RANGE => {
            let low = cursor.expect(MalformedReason::MissingPort { operator: RANGE })?;
            let high = cursor.expect(MalformedReason::MissingPort { operator: RANGE })?;
            PortSpec::range(low, high)
        }
        other => return Err(MalformedReason::UnexpectedOperator(other.to_string())),
    };

    Ok(Rule::new(protocol, network, ports))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Rule {
        match parse_line(line) {
            LineOutcome::Parsed(rule) => rule,
            other => panic!("expected parsed rule for {line:?}, got {other:?}"),
        }
    }

    fn malformed(line: &str) -> MalformedReason {
        match parse_line(line) {
            LineOutcome::Malformed(reason) => reason,
            other => panic!("expected malformed line for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_eq_single_port() {
        let rule = parsed("permit tcp 10.0.0.0/24 eq 443");

        assert_eq!(rule.protocol, "tcp");
        assert_eq!(rule.network, "10.0.0.0/24");
        assert_eq!(rule.ports, PortSpec::list("443", []));
    }

    #[test]
    fn test_eq_port_list_stops_at_any() {
        let rule = parsed("permit tcp 10.0.0.0/24 eq 80 443 any 9999");

        assert_eq!(
            rule.ports,
            PortSpec::List {
                ports: vec!["80".to_string(), "443".to_string()]
            }
        );
        assert!(!rule.to_string().contains("9999"));
    }

    #[test]
    fn test_range() {
        let rule = parsed("permit udp 10.0.1.0/24 range 1000 2000");
        assert_eq!(rule.ports, PortSpec::range("1000", "2000"));
    }

    #[test]
    fn test_range_ignores_trailing_tokens() {
        let rule = parsed("permit udp 10.0.1.0/24 range 1000 2000 log");
        assert_eq!(rule.ports, PortSpec::range("1000", "2000"));
    }

    #[test]
    fn test_any_network_is_dropped() {
        let rule = parsed("permit tcp any 10.0.0.0/24 eq 80");

        assert_eq!(rule.network, "10.0.0.0/24");
        assert_eq!(rule.to_string(), "(net 10.0.0.0/24 and tcp and (port 80))");
    }

    #[test]
    fn test_only_first_any_dropped_and_first_port_verbatim() {
        let rule = parsed("permit tcp any any eq any 80 any 9");

        assert_eq!(rule.network, "any");
        assert_eq!(
            rule.ports,
            PortSpec::List {
                ports: vec!["any".to_string(), "80".to_string()]
            }
        );
        assert_eq!(rule.to_string(), "(net any and tcp and (port any or 80))");
    }

    #[test]
    fn test_surrounding_whitespace() {
        let rule = parsed("   permit\ttcp  10.0.0.0/24   eq 22  \r\n");
        assert_eq!(rule.to_string(), "(net 10.0.0.0/24 and tcp and (port 22))");
    }

    #[test]
    fn test_skipped_lines() {
        assert!(parse_line("").is_skipped());
        assert!(parse_line("   \t ").is_skipped());
        assert!(parse_line("note: ignore me").is_skipped());
        assert!(parse_line("deny tcp 10.0.0.0/24 eq 80").is_skipped());
        assert!(parse_line("remark permit tcp 10.0.0.0/24 eq 80").is_skipped());
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert!(parse_line("PERMIT tcp 10.0.0.0/24 eq 80").is_skipped());
        assert_eq!(
            malformed("permit tcp 10.0.0.0/24 EQ 80"),
            MalformedReason::UnexpectedOperator("EQ".to_string())
        );
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(malformed("permit"), MalformedReason::MissingProtocol);
        assert_eq!(malformed("permit tcp"), MalformedReason::MissingNetwork);
        assert_eq!(malformed("permit tcp any"), MalformedReason::MissingNetwork);
        assert_eq!(
            malformed("permit ip 10.0.0.0/8"),
            MalformedReason::MissingOperator
        );
        assert_eq!(
            malformed("permit tcp 10.0.0.0/24 eq"),
            MalformedReason::MissingPort { operator: "eq" }
        );
        assert_eq!(
            malformed("permit tcp 10.0.0.0/24 range 1000"),
            MalformedReason::MissingPort { operator: "range" }
        );
        assert_eq!(
            malformed("permit tcp 10.0.0.0/24 gt 1024"),
            MalformedReason::UnexpectedOperator("gt".to_string())
        );
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(
            MalformedReason::MissingPort { operator: "eq" }.to_string(),
            "missing port after `eq`"
        );
        assert!(MalformedReason::UnexpectedOperator("gt".to_string())
            .to_string()
            .contains("`gt`"));
    }
}
