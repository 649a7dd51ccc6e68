use std::fmt;

/// Account-wide parameters sent with every request to the DNSPod API.
#[derive(Clone, PartialEq, Eq)]
pub struct CommonParams {
    pub login_token: String,
    pub format: String,
    pub lang: Option<String>,
    pub error_on_empty: Option<String>,
    pub user_id: Option<String>,
    /// Whether the client talks to the international version of the API,
    /// which requires or defaults some fields differently.
    pub is_international: bool,
}

impl CommonParams {
    /// Creates the parameters for the given login token, with the `json` format.
    pub fn new(login_token: &str) -> Self {
        Self {
            login_token: login_token.to_string(),
            format: "json".to_string(),
            lang: None,
            error_on_empty: None,
            user_id: None,
            is_international: false,
        }
    }

    /// Returns a payload that already includes the fields shared by every call.
    pub(crate) fn to_payload(&self) -> Payload {
        Payload::new()
            .add_if_not_empty("login_token", &self.login_token)
            .add_if_not_empty("format", &self.format)
            .add_if_some("lang", self.lang.as_deref())
            .add_if_some("error_on_empty", self.error_on_empty.as_deref())
            .add_if_some("user_id", self.user_id.as_deref())
    }
}

impl fmt::Debug for CommonParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommonParams")
            .field("login_token", &"<redacted>")
            .field("format", &self.format)
            .field("lang", &self.lang)
            .field("error_on_empty", &self.error_on_empty)
            .field("user_id", &self.user_id)
            .field("is_international", &self.is_international)
            .finish()
    }
}

/// Form fields to send to the DNSPod API, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Payload {
    fields: Vec<(String, String)>,
}

impl Payload {
    pub(crate) fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends the given key-value pair.
    pub(crate) fn add<T: ToString>(mut self, key: &str, value: T) -> Self {
        self.fields.push((key.to_string(), value.to_string()));
        self
    }

    /// Replaces every value of `key` with the one given.
    pub(crate) fn set<T: ToString>(mut self, key: &str, value: T) -> Self {
        self.fields.retain(|(k, _)| k != key);
        self.add(key, value)
    }

    /// Appends the key-value pair unless `value` is empty.
    pub(crate) fn add_if_not_empty(self, key: &str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.add(key, value)
    }

    /// In the case that `value` is some and not empty, appends the key-value pair.
    pub(crate) fn add_if_some<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => {
                let value = value.to_string();
                self.add_if_not_empty(key, &value)
            }
            None => self,
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}
