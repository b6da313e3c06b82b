//! City-alias table for the weather collaborator.
//!
//! Colloquial and legacy city names are mapped to the canonical names the
//! weather API recognizes. Consulted before any external lookup; the
//! lookup itself lives outside this crate.

/// Canonical form of a user-provided city name. Unknown names pass
/// through lowercased.
pub fn canonical_city(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.as_str() {
        "vizag" => "visakhapatnam".to_string(),
        "benares" => "varanasi".to_string(),
        "banglore" => "bengaluru".to_string(),
        "bombay" => "mumbai".to_string(),
        "madras" => "chennai".to_string(),
        _ => lower,
    }
}
