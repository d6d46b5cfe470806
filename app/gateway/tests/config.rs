//! Gateway configuration tests.

use agent::ResumeSource;
use scout_gateway::{
    Config, ConfigError, build_agent, config::DEFAULT_BIND, utils::expand_env_vars,
};

#[test]
fn parse_minimal_config() {
    let toml = r#"
[model]
api_key = "fw-key"

[search]
api_key = "tvly-key"
"#;
    let config = Config::from_toml(toml).unwrap();
    assert_eq!(config.server.bind, DEFAULT_BIND);
    assert_eq!(config.model.api_key, "fw-key");
    assert_eq!(config.model.model.as_str(), llm::DEFAULT_MODEL);
    assert!(config.model.base_url.is_none());
    assert!(!config.model.usage);
    assert_eq!(config.search.api_key, "tvly-key");
    assert!(!config.search.enabled);
    assert_eq!(config.search.max_results, search::DEFAULT_MAX_RESULTS);
    assert!(config.documents.is_none());
    assert_eq!(config.agent.name, "Search Agent");
    assert_eq!(config.agent.resume, ResumeSource::Inline);
    assert!(config.validate().is_ok());
}

#[test]
fn parse_full_config() {
    let toml = r#"
[server]
bind = "127.0.0.1:9000"

[model]
api_key = "fw-key"
model = "gpt-4o-mini"
base_url = "https://api.openai.com/v1/chat/completions"
temperature = 0.2
max_tokens = 512
usage = true

[search]
api_key = "tvly-key"
enabled = true
max_results = 3

[documents]
api_key = "cmp-key"
document_id = "doc-42"

[agent]
name = "Resume Agent"
template = "prompts/resume.txt"
response_log = "out/final.txt"
"#;
    let config = Config::from_toml(toml).unwrap();
    assert_eq!(config.server.bind, "127.0.0.1:9000");
    assert_eq!(config.model.model.as_str(), "gpt-4o-mini");
    assert_eq!(config.model.temperature, Some(0.2));
    assert_eq!(config.model.max_tokens, Some(512));
    assert!(config.model.usage);
    assert!(config.search.enabled);
    assert_eq!(config.search.max_results, 3);

    let documents = config.documents.as_ref().unwrap();
    assert_eq!(documents.api_key, "cmp-key");
    assert_eq!(documents.document_id, "doc-42");
    assert_eq!(documents.entity, docs::DEFAULT_ENTITY);

    assert_eq!(config.agent.name, "Resume Agent");
    assert_eq!(config.agent.template.to_str(), Some("prompts/resume.txt"));
    assert_eq!(config.agent.response_log.to_str(), Some("out/final.txt"));
    assert!(config.validate().is_ok());
}

#[test]
fn empty_documents_section_uses_default_document() {
    let toml = r#"
[model]
api_key = "k"

[search]
api_key = "k"

[documents]
api_key = "k"
"#;
    let config = Config::from_toml(toml).unwrap();
    assert_eq!(
        config.documents.unwrap().document_id,
        agent::DEFAULT_DOCUMENT_ID
    );
}

#[test]
fn validate_reports_every_missing_key() {
    let toml = r#"
[model]
api_key = ""

[search]
api_key = ""

[documents]
api_key = ""
"#;
    let config = Config::from_toml(toml).unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(
        err,
        ConfigError::Missing(vec!["MODEL_API_KEY", "TAVILY_API_KEY", "COMPOSIO_API_KEY"])
    );
    assert_eq!(
        err.to_string(),
        "missing required configuration: MODEL_API_KEY, TAVILY_API_KEY, COMPOSIO_API_KEY"
    );
}

#[test]
fn composio_key_only_required_with_documents() {
    let toml = r#"
[model]
api_key = "k"

[search]
api_key = ""
"#;
    let config = Config::from_toml(toml).unwrap();
    assert_eq!(
        config.validate().unwrap_err(),
        ConfigError::Missing(vec!["TAVILY_API_KEY"])
    );
}

#[test]
fn build_fails_before_serving_on_missing_keys() {
    let toml = r#"
[model]
api_key = ""

[search]
api_key = ""
"#;
    let config = Config::from_toml(toml).unwrap();
    let err = build_agent(&config).err().unwrap();
    assert!(err.to_string().contains("MODEL_API_KEY, TAVILY_API_KEY"), "{err}");
}

#[test]
fn env_var_expansion() {
    unsafe { std::env::set_var("TEST_SCOUT_MODEL_KEY", "expanded-value") };
    let toml = r#"
[model]
api_key = "${TEST_SCOUT_MODEL_KEY}"

[search]
api_key = "${TEST_SCOUT_UNSET_KEY}"
"#;
    let config = Config::from_toml(toml).unwrap();
    assert_eq!(config.model.api_key, "expanded-value");
    assert_eq!(config.search.api_key, "");
    assert_eq!(
        config.validate().unwrap_err(),
        ConfigError::Missing(vec!["TAVILY_API_KEY"])
    );
}

#[test]
fn expanded_values_are_not_expanded_twice() {
    unsafe {
        std::env::set_var("TEST_SCOUT_SECRET", "a${TEST_SCOUT_INNER}b");
        std::env::set_var("TEST_SCOUT_INNER", "x");
    }
    let toml = r#"
[model]
api_key = "${TEST_SCOUT_SECRET}"

[search]
api_key = "literal"
"#;
    let config = Config::from_toml(toml).unwrap();
    assert_eq!(config.model.api_key, "a${TEST_SCOUT_INNER}b");
    assert_eq!(config.search.api_key, "literal");
}

#[test]
fn expand_env_vars_patterns() {
    unsafe { std::env::set_var("TEST_SCOUT_EXPAND", "v") };
    assert_eq!(expand_env_vars("a ${TEST_SCOUT_EXPAND} b"), "a v b");
    assert_eq!(expand_env_vars("${TEST_SCOUT_EXPAND}${TEST_SCOUT_EXPAND}"), "vv");
    assert_eq!(expand_env_vars("${TEST_SCOUT_MISSING:-fallback}"), "fallback");
    assert_eq!(expand_env_vars("${TEST_SCOUT_EXPAND:-fallback}"), "v");
    assert_eq!(expand_env_vars("${TEST_SCOUT_MISSING}"), "");
    assert_eq!(expand_env_vars("cost: $5 ${unterminated"), "cost: $5 ${unterminated");
}
