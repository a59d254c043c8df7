/// Borrowed view of an inbound request as handed over by the transport adapter.
///
/// Header names keep the casing they were received with; every lookup made by
/// the engine is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub headers: Vec<(&'a str, &'a str)>,
    pub body: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: &'a str, value: &'a str) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn with_headers<I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.headers.extend(headers);
        self
    }

    pub fn with_body(mut self, body: &'a str) -> Self {
        self.body = Some(body);
        self
    }
}
