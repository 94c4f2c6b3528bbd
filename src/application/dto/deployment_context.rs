/// Placeholder for identity fields the deployment did not provide
pub const NOT_PROVIDED: &str = "[NONE]";

/// Where the workload runs, as told by the agent arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentContext {
    /// Application name the deployment identifies itself by
    pub identification_name: Option<String>,
    pub is_ocp: bool,
    pub pod_name: String,
    pub pod_namespace: String,
}

impl DeploymentContext {
    pub fn new(is_ocp: bool, pod_name: Option<String>, pod_namespace: Option<String>) -> Self {
        Self {
            identification_name: None,
            is_ocp,
            pod_name: pod_name.unwrap_or_else(|| NOT_PROVIDED.to_string()),
            pod_namespace: pod_namespace.unwrap_or_else(|| NOT_PROVIDED.to_string()),
        }
    }

    pub fn with_identification_name(mut self, name: Option<String>) -> Self {
        self.identification_name = name;
        self
    }
}

impl Default for DeploymentContext {
    fn default() -> Self {
        Self::new(false, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pod_fields_use_placeholder() {
        let context = DeploymentContext::new(true, Some("web-1".to_string()), None);
        assert!(context.is_ocp);
        assert_eq!(context.pod_name, "web-1");
        assert_eq!(context.pod_namespace, NOT_PROVIDED);
    }

    #[test]
    fn test_default() {
        let context = DeploymentContext::default();
        assert!(!context.is_ocp);
        assert_eq!(context.pod_name, "[NONE]");
        assert!(context.identification_name.is_none());
    }

    #[test]
    fn test_with_identification_name() {
        let context =
            DeploymentContext::default().with_identification_name(Some("orders".to_string()));
        assert_eq!(context.identification_name.as_deref(), Some("orders"));
    }
}
