//! IP literal validation.
//!
//! Validates candidate strings before they are interpolated into a lookup URL.
//! Parsing through [`std::net::IpAddr`] gives range-checked IPv4 octets and
//! covers the standard IPv6 textual forms (fully expanded, `::`-compressed,
//! and IPv4-mapped) without a hand-maintained pattern.

use std::net::IpAddr;

/// Returns true iff `candidate`, after trimming surrounding whitespace, is a
/// syntactically valid IPv4 or IPv6 literal.
///
/// Empty and whitespace-only input is rejected.
pub fn is_valid_ip(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    trimmed.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ipv4() {
        for ip in ["8.8.8.8", "0.0.0.0", "255.255.255.255", "192.168.1.1"] {
            assert!(is_valid_ip(ip), "{} should be accepted", ip);
        }
    }

    #[test]
    fn test_rejects_out_of_range_octets() {
        for ip in ["999.1.1.1", "256.0.0.1", "1.1.1.300"] {
            assert!(!is_valid_ip(ip), "{} should be rejected", ip);
        }
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in ["abcd", "1.1.1", "1.1.1.1.1", "8.8.8.8/24", "8.8.8.8:80"] {
            assert!(!is_valid_ip(input), "{} should be rejected", input);
        }
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(!is_valid_ip(""));
        assert!(!is_valid_ip("   "));
        assert!(!is_valid_ip("\t\n"));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert!(is_valid_ip(" 8.8.8.8 "));
        assert!(is_valid_ip("\t2001:db8::1\n"));
    }

    #[test]
    fn test_accepts_ipv6_full_form() {
        assert!(is_valid_ip("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
    }

    #[test]
    fn test_accepts_ipv6_compressed_forms() {
        for ip in ["::1", "2001:db8::1", "fe80::", "::"] {
            assert!(is_valid_ip(ip), "{} should be accepted", ip);
        }
    }

    #[test]
    fn test_accepts_ipv4_mapped_ipv6() {
        assert!(is_valid_ip("::ffff:192.168.1.1"));
    }

    #[test]
    fn test_rejects_hostnames() {
        assert!(!is_valid_ip("ipinfo.io"));
        assert!(!is_valid_ip("localhost"));
    }
}
