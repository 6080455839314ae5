//! The closed scenario registry
//!
//! The scenario set is small and known at build time, so the registry is a
//! static name-to-variant mapping rather than any dynamic registration
//! mechanism. Adding a scenario means adding one enum variant and one
//! table row.

use crate::input::RunInput;

/// A named smoke-test scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Load the home page and check the document title
    SmokeHome,
    /// Log in with student credentials and check the landing URL
    LoginStudent,
    /// Log in with owner credentials and check the landing URL
    LoginOwner,
    /// Open the "etablerer" checkout and check for the Stripe payment frame
    CheckoutEtablerer,
}

/// Every registered scenario, in catalog order
pub const ALL: [Scenario; 4] = [
    Scenario::SmokeHome,
    Scenario::LoginStudent,
    Scenario::LoginOwner,
    Scenario::CheckoutEtablerer,
];

impl Scenario {
    /// Look up a scenario by its registered name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "smoke-home" => Some(Scenario::SmokeHome),
            "login-student" => Some(Scenario::LoginStudent),
            "login-owner" => Some(Scenario::LoginOwner),
            "checkout-etablerer" => Some(Scenario::CheckoutEtablerer),
            _ => None,
        }
    }

    /// The registered name of this scenario
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::SmokeHome => "smoke-home",
            Scenario::LoginStudent => "login-student",
            Scenario::LoginOwner => "login-owner",
            Scenario::CheckoutEtablerer => "checkout-etablerer",
        }
    }

    /// The URL this scenario navigates to, derived from the base URL
    pub fn target_url(&self, base_url: &str) -> String {
        match self {
            Scenario::SmokeHome => base_url.to_string(),
            Scenario::LoginStudent | Scenario::LoginOwner => format!("{base_url}/login"),
            Scenario::CheckoutEtablerer => format!("{base_url}/checkout?plan=etablerer"),
        }
    }

    /// Default credential pair for login scenarios
    pub fn default_credentials(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Scenario::LoginStudent => Some(("student.owner@kurs.ing", "student123")),
            Scenario::LoginOwner => Some(("owner@kurs.ing", "owner123")),
            _ => None,
        }
    }

    /// Resolve the credentials to use for this run: input overrides first,
    /// then the scenario's own defaults.
    pub fn credentials(&self, input: &RunInput) -> Option<(String, String)> {
        let (default_email, default_password) = self.default_credentials()?;
        let email = input
            .login_email
            .clone()
            .unwrap_or_else(|| default_email.to_string());
        let password = input
            .login_password
            .clone()
            .unwrap_or_else(|| default_password.to_string());
        Some((email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_known_names() {
        for scenario in ALL {
            assert_eq!(Scenario::from_name(scenario.name()), Some(scenario));
        }
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert_eq!(Scenario::from_name("smoke-everything"), None);
        assert_eq!(Scenario::from_name(""), None);
        // Lookup is exact, not case-folded
        assert_eq!(Scenario::from_name("Smoke-Home"), None);
    }

    #[test]
    fn test_target_urls() {
        let base = "https://example.test";
        assert_eq!(Scenario::SmokeHome.target_url(base), "https://example.test");
        assert_eq!(
            Scenario::LoginStudent.target_url(base),
            "https://example.test/login"
        );
        assert_eq!(
            Scenario::LoginOwner.target_url(base),
            "https://example.test/login"
        );
        assert_eq!(
            Scenario::CheckoutEtablerer.target_url(base),
            "https://example.test/checkout?plan=etablerer"
        );
    }

    #[test]
    fn test_default_credentials() {
        assert_eq!(
            Scenario::LoginStudent.default_credentials(),
            Some(("student.owner@kurs.ing", "student123"))
        );
        assert_eq!(
            Scenario::LoginOwner.default_credentials(),
            Some(("owner@kurs.ing", "owner123"))
        );
        assert!(Scenario::SmokeHome.default_credentials().is_none());
        assert!(Scenario::CheckoutEtablerer.default_credentials().is_none());
    }

    #[test]
    fn test_input_credentials_override_defaults() {
        let input = RunInput {
            scenario: "login-student".to_string(),
            base_url: "https://example.test".to_string(),
            login_email: Some("qa@example.test".to_string()),
            login_password: None,
        };
        let (email, password) = Scenario::LoginStudent.credentials(&input).unwrap();
        assert_eq!(email, "qa@example.test");
        assert_eq!(password, "student123");
    }
}
