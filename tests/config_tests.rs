use slack_roster::core::config::AppConfig;
use slack_roster::errors::RosterError;

// Single test so the env mutation cannot race another test in this binary.
#[test]
fn test_from_env_requires_slack_token() {
    unsafe { std::env::remove_var("SLACK_TOKEN") };
    match AppConfig::from_env() {
        Err(RosterError::ConfigError(msg)) => assert!(msg.contains("SLACK_TOKEN")),
        other => panic!("Expected a config error, got {:?}", other.map(|c| c.slack_token)),
    }

    unsafe { std::env::set_var("SLACK_TOKEN", "xoxb-test") };
    let config = AppConfig::from_env().expect("token is set");
    assert_eq!(config.slack_token, "xoxb-test");
}
