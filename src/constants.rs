pub mod header {
    pub const CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
    pub const CONTENT_SECURITY_POLICY_REPORT_ONLY: &str = "Content-Security-Policy-Report-Only";
}

pub mod directive {
    pub const REPORT_URI: &str = "report-uri";
    pub const SRC_SUFFIX: &str = "-src";
}

/// Well-known keywords and scheme sources.
pub mod source {
    pub const WILDCARD: &str = "'*'";
    pub const SELF: &str = "'self'";
    pub const NONE: &str = "'none'";
    pub const UNSAFE_EVAL: &str = "'unsafe-eval'";
    pub const UNSAFE_INLINE: &str = "'unsafe-inline'";
    pub const SCHEME_HTTP: &str = "http:";
    pub const SCHEME_HTTPS: &str = "https:";
    pub const SCHEME_DATA: &str = "data:";
    pub const SCHEME_MEDIASTREAM: &str = "mediastream:";
    pub const SCHEME_BLOB: &str = "blob:";
    pub const SCHEME_FILESYSTEM: &str = "filesystem:";
}
