/// Construction-time settings for [`crate::ContentSecurityPolicy`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CspOptions {
    /// Values seeded into `default-src`.
    pub default_src: Vec<String>,
    /// Emit under `Content-Security-Policy-Report-Only`.
    pub report_only: bool,
}

impl CspOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_src<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_src = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn report_only(mut self, enabled: bool) -> Self {
        self.report_only = enabled;
        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
