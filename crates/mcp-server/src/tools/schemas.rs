use haswell_dispatch::{BuildRequest, DEFAULT_BRANCH};
use rmcp::schemars;
use serde::Deserialize;

fn default_branch() -> Option<String> {
    Some(DEFAULT_BRANCH.to_string())
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BuildKernelRequest {
    /// Source branch to build (default: "main")
    #[serde(default = "default_branch")]
    #[schemars(description = "Source branch to build (default: \"main\")")]
    pub branch: Option<String>,
}

impl From<BuildKernelRequest> for BuildRequest {
    fn from(request: BuildKernelRequest) -> Self {
        BuildRequest::from_optional(request.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> BuildRequest {
        serde_json::from_value::<BuildKernelRequest>(value)
            .expect("valid request")
            .into()
    }

    #[test]
    fn missing_or_null_branch_defaults_to_main() {
        assert_eq!(parse(json!({})), BuildRequest::new("main"));
        assert_eq!(parse(json!({ "branch": null })), BuildRequest::new("main"));
    }

    #[test]
    fn explicit_branch_is_kept_verbatim() {
        assert_eq!(parse(json!({ "branch": "feature/x" })).branch(), "feature/x");
        assert_eq!(parse(json!({ "branch": "" })).branch(), "");
    }

    #[test]
    fn schema_advertises_main_as_default() {
        let schema = serde_json::to_value(schemars::schema_for!(BuildKernelRequest))
            .expect("serialize schema");
        assert_eq!(schema["properties"]["branch"]["default"], json!("main"));
        let required = schema["required"].as_array().cloned().unwrap_or_default();
        assert!(required.is_empty(), "{schema}");
    }

    #[test]
    fn non_string_branch_is_rejected() {
        assert!(serde_json::from_value::<BuildKernelRequest>(json!({ "branch": 7 })).is_err());
    }
}
