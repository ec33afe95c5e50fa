use regex::Regex;
use std::sync::LazyLock;

/// Conservative syntactic pattern for the email addresses: dot-separated local-part segments, `@`,
/// dot-separated domain segments and a 2-4 letter top-level domain.
static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_A-Za-z0-9-]+(\.[_A-Za-z0-9-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(\.[A-Za-z]{2,4})$")
        .expect("Email address regex is valid.")
});

/// Checks whether the address looks like a valid email address. The check is purely syntactic
/// and says nothing about deliverability.
pub fn is_valid_address(address: &str) -> bool {
    EMAIL_ADDRESS_REGEX.is_match(address)
}

#[cfg(test)]
mod tests {
    use super::is_valid_address;

    #[test]
    fn accepts_valid_addresses() {
        for address in [
            "user.name@example.com",
            "a@b.co",
            "dev_ops-team@mail.notifyme.dev",
            "alerts@node-01.example.info",
            "Alerts.Team@Example.COM",
            "1234@example.org",
        ] {
            assert!(is_valid_address(address), "{address} should be valid");
        }
    }

    #[test]
    fn rejects_invalid_addresses() {
        for address in [
            "not-an-email",
            "a@@b.com",
            "",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user@example.museum",
            "user..name@example.com",
            ".user@example.com",
            "user.@example.com",
            "user@.example.com",
            "user@example..com",
            "user name@example.com",
            "user+tag@example.com",
            "User <user@example.com>",
            " user@example.com",
            "user@example.com ",
            "user@example.c0m",
        ] {
            assert!(!is_valid_address(address), "{address:?} should be invalid");
        }
    }
}
