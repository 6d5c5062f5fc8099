use assert_cmd::Command;
use httpmock::MockServer;
use predicates::prelude::*;
use serde_json::json;

fn statuspage() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("statuspage"));
    cmd.env_remove("API_KEY")
        .env_remove("RUST_LOG")
        .env_remove("STATUSPAGE_API_URL");
    cmd
}

fn against(server: &MockServer) -> Command {
    let mut cmd = statuspage();
    cmd.env("STATUSPAGE_API_URL", server.base_url());
    cmd
}

#[test]
fn help_lists_verbs() {
    statuspage()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("get")
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn create_component_help_shows_flags() {
    statuspage()
        .args(["create", "component", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--page-id")
                .and(predicate::str::contains("--showcase"))
                .and(predicate::str::contains("--api-key")),
        );
}

#[test]
fn verb_without_resource_fails() {
    for verb in ["get", "create", "update", "delete"] {
        statuspage()
            .arg(verb)
            .env("API_KEY", "key")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(format!(
                "statuspage {verb} error: missing required argument"
            )));
    }
}

#[test]
fn missing_required_flag_exits_with_one() {
    statuspage()
        .args(["delete", "incident", "--page-id", "P"])
        .env("API_KEY", "key")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--id"));
}

#[test]
fn missing_credential_fails_before_any_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    against(&server)
        .args(["get", "component", "-p", "P"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Set API_KEY as environment variable or specify --api-key flag or -k flag.",
        ));

    mock.assert_calls(0);
}

#[test]
fn invalid_component_status_prints_help_and_fails() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    against(&server)
        .args([
            "create", "component", "-k", "key", "-p", "P", "-n", "Web", "-d", "Frontend", "-s",
            "down",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("invalid component status 'down'"));

    mock.assert_calls(0);
}

#[test]
fn invalid_incident_status_prints_help_and_fails() {
    statuspage()
        .args(["update", "incident", "-k", "key", "-p", "P", "-i", "I1", "-s", "open"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("invalid incident status 'open'"));
}

#[test]
fn get_page_uses_env_key() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/pages")
            .header("Authorization", "OAuth env-key");
        then.status(200).body(r#"[{"id":"P1"}]"#);
    });

    against(&server)
        .env("API_KEY", "env-key")
        .args(["get", "page"])
        .assert()
        .success()
        .stdout(r#"[{"id":"P1"}]
"#);

    mock.assert();
}

#[test]
fn flag_key_overrides_env_key() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/pages/P/incidents/I1")
            .header("Authorization", "OAuth flag-key");
        then.status(200).body(r#"{"id":"I1"}"#);
    });

    against(&server)
        .env("API_KEY", "env-key")
        .args(["get", "incident", "--api-key", "flag-key", "-p", "P", "-i", "I1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"id":"I1"}"#));

    mock.assert();
}

#[test]
fn remote_errors_are_printed_and_exit_zero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/pages/P/components");
        then.status(401).body(r#"{"error":"Could not authenticate"}"#);
    });

    against(&server)
        .args(["get", "component", "-k", "bad", "-p", "P"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not authenticate"));
}

#[test]
fn update_component_sends_patch_without_name() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("PATCH")
            .path("/pages/P/components/C1")
            .header("Authorization", "OAuth key")
            .header("Content-Type", "application/json")
            .json_body(json!({
                "component": {
                    "status": "under_maintenance",
                    "showcase": true
                }
            }));
        then.status(200).body(r#"{"id":"C1","status":"under_maintenance"}"#);
    });

    against(&server)
        .args([
            "update", "component", "-k", "key", "-p", "P", "-i", "C1", "-s",
            "under_maintenance", "--showcase",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("under_maintenance"));

    mock.assert();
}

#[test]
fn create_incident_sends_component_ids_and_map() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/pages/P/incidents")
            .json_body(json!({
                "incident": {
                    "name": "Database outage",
                    "status": "investigating",
                    "body": "We are looking into it",
                    "component_ids": ["c1", "c2"],
                    "components": {
                        "c1": "major_outage",
                        "c2": "degraded_performance"
                    }
                }
            }));
        then.status(201).body(r#"{"id":"I1"}"#);
    });

    against(&server)
        .args([
            "create",
            "incident",
            "-k",
            "key",
            "-p",
            "P",
            "-n",
            "Database outage",
            "-s",
            "investigating",
            "-b",
            "We are looking into it",
            "-c",
            "c2=degraded_performance,c1=major_outage",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"id":"I1"}"#));

    mock.assert();
}

#[test]
fn malformed_components_entry_is_rejected() {
    statuspage()
        .args(["create", "incident", "-k", "key", "-p", "P", "-n", "X", "-c", "c1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected <component-id>=<status>"));
}

#[test]
fn delete_echoes_status_code() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE")
            .path("/pages/P/components/C1")
            .header("Authorization", "OAuth key");
        then.status(204);
    });

    against(&server)
        .args(["delete", "component", "-k", "key", "-p", "P", "-i", "C1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("204"));

    mock.assert();
}

#[test]
fn unreachable_api_is_a_failure() {
    statuspage()
        .env("STATUSPAGE_API_URL", "http://127.0.0.1:1")
        .args(["get", "page", "-k", "key"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("request failed"));
}

#[test]
fn version_flag_exits_zero() {
    statuspage()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("statuspage"));
}

#[test]
fn unknown_flag_exits_with_one() {
    statuspage()
        .args(["get", "page", "--bogus"])
        .env("API_KEY", "key")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn api_url_with_trailing_slash_is_normalized() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/pages");
        then.status(200).body("[]");
    });

    statuspage()
        .env("STATUSPAGE_API_URL", format!("{}/", server.base_url()))
        .args(["get", "page", "-k", "key"])
        .assert()
        .success()
        .stdout("[]\n");

    mock.assert();
}

#[test]
fn invalid_components_status_prints_incident_help() {
    statuspage()
        .args([
            "update", "incident", "-k", "key", "-p", "P", "-i", "I1", "-c", "c1=sideways",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--components"))
        .stderr(predicate::str::contains("invalid component status 'sideways'"));
}
