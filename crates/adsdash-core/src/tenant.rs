/// Per-request tenant scope.
///
/// Carries the project's provider credential explicitly into every fetch.
/// A missing or blank credential is a valid state meaning "no data source
/// configured"; fetches short-circuit to empty results without touching the
/// network.
#[derive(Clone, Default)]
pub struct TenantContext {
    project_id: Option<String>,
    api_key: Option<String>,
}

impl TenantContext {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            project_id: None,
            api_key,
        }
    }

    /// Context for a tenant with no credential configured.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// The usable credential, or `None` when absent or blank.
    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for TenantContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantContext")
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credential_is_absent() {
        assert!(TenantContext::new(Some("  ".to_string()))
            .credential()
            .is_none());
        assert!(TenantContext::unconfigured().credential().is_none());
    }

    #[test]
    fn credential_is_trimmed() {
        let tenant = TenantContext::new(Some(" key-123 ".to_string()));
        assert_eq!(tenant.credential(), Some("key-123"));
    }

    #[test]
    fn debug_redacts_credential() {
        let tenant = TenantContext::new(Some("secret".to_string())).with_project_id("acme");
        let rendered = format!("{tenant:?}");
        assert!(rendered.contains("acme"));
        assert!(!rendered.contains("secret"));
    }
}
