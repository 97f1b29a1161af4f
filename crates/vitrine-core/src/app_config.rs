#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub catalog_url: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub order_recipient: Option<String>,
    pub order_subject: String,
    pub order_signature: String,
    /// `None` keeps the built-in payment instructions.
    pub order_payment_terms: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalog_url", &self.catalog_url)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "order_recipient",
                &self.order_recipient.as_ref().map(|_| "[redacted]"),
            )
            .field("order_subject", &self.order_subject)
            .field(
                "order_signature",
                &(!self.order_signature.is_empty()).then_some("[redacted]"),
            )
            .field("order_payment_terms", &self.order_payment_terms)
            .finish()
    }
}
