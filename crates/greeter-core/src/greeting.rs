// ABOUTME: Greeting request and response types for the /hello endpoint.
// ABOUTME: Resolves the optional `name` query parameter and formats the plain-text reply.

/// Substituted when `name` is missing or empty. The trailing `!` is part of
/// the value, so the default reply reads `Hello World!!`.
pub const DEFAULT_NAME: &str = "World!";

/// The parts of an inbound /hello request the service cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingRequest {
    pub name: Option<String>,
}

impl GreetingRequest {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// Build a request from decoded query pairs. The first `name` wins.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let name = pairs
            .into_iter()
            .find(|(key, _)| key.as_ref() == "name")
            .map(|(_, value)| value.into());
        Self { name }
    }

    /// The name to greet, with empty or missing values replaced by [`DEFAULT_NAME`].
    pub fn resolved_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_NAME,
        }
    }
}

/// Plain-text greeting body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingResponse {
    value: String,
}

impl GreetingResponse {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The greeted value (either the raw name or its reversal).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render the body exactly as sent on the wire.
    pub fn body(&self) -> String {
        format!("Hello {}!\n", self.value)
    }
}
