use crate::constants::defaults;
use crate::util::equals_ignore_case;

/// Configured list for the `Access-Control-Allow-Methods` response header.
///
/// Entries keep the casing the caller supplied; admission checks ignore case.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn allows_method(&self, method: &str) -> bool {
        let method = method.trim();
        self.0
            .iter()
            .any(|allowed| equals_ignore_case(allowed.trim(), method))
    }

    /// Comma-joined header value, in configured order.
    pub fn header_value(&self) -> String {
        self.0.join(",")
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list(defaults::ALLOWED_METHODS.iter().copied())
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
