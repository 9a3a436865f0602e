//! Client Configuration
//!
//! Caller identity and the fixed conversation strings, exposed as named
//! options. The message-exchange contract itself never changes.

/// Default caller identity sent with every request
pub const DEFAULT_USER_ID: &str = "user_123";

/// Greeting seeded into every new session
pub const DEFAULT_GREETING: &str =
    "Bonjour ! Je suis votre assistant pour la rédaction de rapports. Comment puis-je vous aider ?";

/// Shown in place of a real reply when the exchange fails
pub const DEFAULT_FALLBACK: &str =
    "Désolé, je ne peux pas me connecter au serveur. Vérifiez qu'il est bien lancé.";

/// Chat client configuration
#[derive(Clone, Debug)]
pub struct ChatConfig {
    /// Caller identity sent as `user_id`
    pub user_id: String,

    /// Bot greeting seeded into the store
    pub greeting: String,

    /// Fallback bot turn appended when an exchange fails
    pub fallback: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.into(),
            greeting: DEFAULT_GREETING.into(),
            fallback: DEFAULT_FALLBACK.into(),
        }
    }
}

impl ChatConfig {
    pub fn from_env() -> Self {
        let user_id =
            std::env::var("RAPPORT_USER_ID").unwrap_or_else(|_| DEFAULT_USER_ID.into());

        Self {
            user_id,
            ..Default::default()
        }
    }

    /// Override the seeded greeting
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Override the fallback string
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}
