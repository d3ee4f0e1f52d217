use splitdns_domain::fqdn::{is_normalized, parent_domain};
use splitdns_domain::normalize_fqdn;

#[test]
fn test_normalize_appends_trailing_dot() {
    assert_eq!(normalize_fqdn("example.com"), "example.com.");
}

#[test]
fn test_normalize_keeps_existing_trailing_dot() {
    assert_eq!(normalize_fqdn("example.com."), "example.com.");
}

#[test]
fn test_normalize_case_folds() {
    assert_eq!(normalize_fqdn("Mail.EXAMPLE.Com"), "mail.example.com.");
}

#[test]
fn test_normalize_trims_whitespace() {
    assert_eq!(normalize_fqdn("  example.com \n"), "example.com.");
}

#[test]
fn test_normalize_root() {
    assert_eq!(normalize_fqdn(""), ".");
    assert_eq!(normalize_fqdn("."), ".");
}

#[test]
fn test_is_normalized() {
    assert!(is_normalized("example.com."));
    assert!(!is_normalized("example.com"));
    assert!(!is_normalized("Example.com."));
}

#[test]
fn test_parent_domain_walks_to_root() {
    assert_eq!(parent_domain("x.mail.example.com."), Some("mail.example.com."));
    assert_eq!(parent_domain("mail.example.com."), Some("example.com."));
    assert_eq!(parent_domain("example.com."), Some("com."));
    assert_eq!(parent_domain("com."), Some("."));
    assert_eq!(parent_domain("."), None);
}
