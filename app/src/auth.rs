//! Local credential gate for the console browser.
//!
//! Credentials are fixed and checked entirely on this side; no network is
//! involved. The gate only decides whether the session may enter the home
//! route.

const ADMIN_EMAIL: &str = "admin@admin.com";
const ADMIN_PASSWORD: &str = "123";

/// Check a credential pair against the fixed admin account.
///
/// Both inputs are trimmed before comparison, so trailing newlines from
/// line-based input never reject a valid login. The comparison itself is
/// exact and case-sensitive.
#[must_use]
pub fn verify(email: &str, password: &str) -> bool {
    email.trim() == ADMIN_EMAIL && password.trim() == ADMIN_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_admin_credentials() {
        assert!(verify("admin@admin.com", "123"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(verify("  admin@admin.com\n", " 123 \n"));
    }

    #[test]
    fn rejects_a_wrong_email() {
        assert!(!verify("admin@example.com", "123"));
    }

    #[test]
    fn rejects_a_wrong_password() {
        assert!(!verify("admin@admin.com", "1234"));
    }

    #[test]
    fn rejects_empty_credentials() {
        assert!(!verify("", ""));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!verify("Admin@Admin.com", "123"));
    }
}
