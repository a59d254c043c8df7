use indexmap::IndexMap;

/// Response headers in the order they were produced.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    /// Inserts `name`, replacing any entry whose name differs only in case.
    pub(crate) fn push(&mut self, name: &str, value: String) {
        if let Some(existing) = self
            .headers
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name) && key.as_str() != name)
            .cloned()
        {
            self.headers.shift_remove(&existing);
        }
        self.headers.insert(name.to_string(), value);
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(&name, value);
        }
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.headers.keys().any(|key| key.eq_ignore_ascii_case(name))
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
