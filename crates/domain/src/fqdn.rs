/// Normalize a domain name to its fully-qualified, case-folded form.
///
/// - surrounding whitespace is dropped
/// - ASCII letters are lower-cased (DNS names compare case-insensitively)
/// - a trailing dot is appended when missing
///
/// The empty name and `"."` both normalize to the root `"."`.
pub fn normalize_fqdn(domain: &str) -> String {
    let trimmed = domain.trim();
    if trimmed.is_empty() || trimmed == "." {
        return ".".to_string();
    }

    let mut fqdn = String::with_capacity(trimmed.len() + 1);
    fqdn.push_str(trimmed);
    fqdn.make_ascii_lowercase();
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    fqdn
}

/// Returns `true` if `domain` is already in normalized form.
#[inline]
pub fn is_normalized(domain: &str) -> bool {
    domain.ends_with('.') && !domain.bytes().any(|b| b.is_ascii_uppercase())
}

/// Parent of a fully-qualified name: `"a.b.c."` → `"b.c."`, `"c."` → `"."`.
///
/// Returns `None` for the root.
#[inline]
pub fn parent_domain(fqdn: &str) -> Option<&str> {
    if fqdn == "." || fqdn.is_empty() {
        return None;
    }
    match fqdn.split_once('.') {
        Some((_, "")) | None => Some("."),
        Some((_, rest)) => Some(rest),
    }
}
