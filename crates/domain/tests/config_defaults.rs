use sr_domain::config::Config;

#[test]
fn default_host_is_localhost() {
    let config = Config::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8501);
}

#[test]
fn explicit_zero_host_parses() {
    let toml_str = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn default_llm_is_gemini_with_zero_temperature() {
    let config = Config::default();
    assert_eq!(config.llm.provider.model, "gemini-2.5-flash-lite");
    assert_eq!(config.llm.provider.auth.env, "GOOGLE_API_KEY");
    assert_eq!(config.llm.temperature, 0.0);
    assert_eq!(config.llm.timeout_secs, 30);
    assert_eq!(config.llm.max_retries, 1);
}

#[test]
fn llm_overrides_parse() {
    let toml_str = r#"
[llm]
timeout_secs = 10
max_retries = 0

[llm.provider]
model = "gemini-2.0-flash"

[llm.provider.auth]
env = "MY_GEMINI_KEY"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.llm.timeout_secs, 10);
    assert_eq!(config.llm.max_retries, 0);
    assert_eq!(config.llm.provider.model, "gemini-2.0-flash");
    assert_eq!(config.llm.provider.auth.env, "MY_GEMINI_KEY");
}

#[test]
fn default_project_is_demo_record() {
    let config = Config::default();
    assert_eq!(config.project.name, "Brisbane CBD Skyscraper");
    assert_eq!(config.project.id, "BRS-101");
    assert_eq!(config.project.milestones.len(), 5);
    assert_eq!(config.project.activities.len(), 3);
}

#[test]
fn project_table_overrides_demo_record() {
    let toml_str = r#"
[project]
name = "Gold Coast Marina"
id = "GCM-7"
status = "Delayed"
progress = "40%"
budget = "$120,000,000"
spent_to_date = "$90,000,000"
safety_incidents = "None."
data_source = "Weekly site reports."

[[project.milestones]]
name = "Dredging Complete"
date = "2026-02-01"

[[project.activities]]
date = "2025-08-25"
description = "Pile driving on berth 3."
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.project.name, "Gold Coast Marina");
    assert_eq!(config.project.milestones.len(), 1);
    assert_eq!(config.project.activities[0].date, "2025-08-25");
    assert!(config.validate().is_empty());
}

#[test]
fn validate_flags_zero_port_and_bad_amounts() {
    let toml_str = r#"
[server]
port = 0

[project]
name = "X"
id = "X-1"
status = "On Schedule"
progress = "10%"
budget = "unknown"
spent_to_date = "$5"
safety_incidents = "None."
data_source = "Manual."
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let issues = config.validate();
    assert!(Config::has_errors(&issues));
    assert!(issues.iter().any(|i| i.field == "server.port"));
    assert!(issues.iter().any(|i| i.field == "project.budget"));
}
