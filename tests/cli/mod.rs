use crate::support::{stderr, stdout, FakeGemini, Workspace, CANNED_SUMMARY};

#[test]
fn show_diff_prints_diff_then_summary() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,12\n");

    let assert = ws.command(&gemini.base_url())
        .env("GEMINI_API_KEY", "test-key")
        .args(["prev.csv", "cur.csv", "--show-diff"])
        .assert()
        .success();

    let out = stdout(assert.get_output());
    let diff_header = out.find("## Raw Diff").unwrap();
    let removed = out.find("\n-A,10\n").unwrap();
    let added = out.find("\n+A,12\n").unwrap();
    let summary_header = out.find("## AI Benchmark Diff Summary").unwrap();
    assert!(diff_header < removed && removed < summary_header);
    assert!(added < summary_header);
    assert!(out.contains("--- prev.csv\n+++ cur.csv\n"));
    assert!(out.ends_with(&format!("{CANNED_SUMMARY}\n")));

    let prompt = gemini.only_prompt();
    assert!(prompt.contains("Previous CSV:\nname,ms\nA,10\n"));
    assert!(prompt.contains("Current CSV:\nname,ms\nA,12\n"));
    assert!(prompt.contains("Deep focus on EasyValidate"));
}

#[test]
fn summary_only_without_flag() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,12\n");

    let assert = ws.command(&gemini.base_url())
        .env("GEMINI_API_KEY", "test-key")
        .args(["prev.csv", "cur.csv"])
        .assert()
        .success();

    assert_eq!(
        stdout(assert.get_output()),
        format!("\n## AI Benchmark Diff Summary\n\n{CANNED_SUMMARY}\n")
    );
    assert_eq!(gemini.requests().len(), 1);
}

#[test]
fn identical_files_report_no_differences_and_still_summarize() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,10\n");

    let assert = ws.command(&gemini.base_url())
        .env("GEMINI_API_KEY", "test-key")
        .args(["prev.csv", "cur.csv", "--show-diff"])
        .assert()
        .success();

    let out = stdout(assert.get_output());
    assert!(out.starts_with("\n(No differences found)\n\n"));
    assert!(!out.contains("## Raw Diff"));
    assert!(out.contains(CANNED_SUMMARY));
    assert_eq!(gemini.requests().len(), 1);
}

#[test]
fn missing_previous_file_fails_without_request() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("cur.csv", "name,ms\nA,12\n");

    let assert = ws.command(&gemini.base_url())
        .env("GEMINI_API_KEY", "test-key")
        .args(["missing.csv", "cur.csv", "--show-diff"])
        .assert()
        .failure();

    let output = assert.get_output();
    assert!(stderr(output).contains("Error reading missing.csv"));
    assert!(stdout(output).is_empty());
    assert!(gemini.requests().is_empty());
}

#[test]
fn missing_credential_fails_without_request() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,12\n");

    let assert = ws.command(&gemini.base_url())
        .env_remove("GEMINI_API_KEY")
        .args(["prev.csv", "cur.csv"])
        .assert()
        .failure();

    assert!(stderr(assert.get_output()).contains("GEMINI_API_KEY environment variable is required"));
    assert!(gemini.requests().is_empty());
}

#[test]
fn model_and_focus_overrides_reach_the_request() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,12\n");
    ws.write("bench.toml", "[ai]\ntemperature = 0.1\nfocus_subject = \"FromFile\"\n");

    ws.command(&gemini.base_url())
        .env("GEMINI_API_KEY", "test-key")
        .args(["prev.csv", "cur.csv", "--config", "bench.toml", "--focus", "Parser"])
        .assert()
        .success();

    let requests = gemini.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["generationConfig"]["temperature"], serde_json::json!(0.1));
    assert!(gemini.only_prompt().contains("Deep focus on Parser"));
}

#[test]
fn api_error_exits_non_zero() {
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,12\n");

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let closed = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let assert = ws.command(&closed)
        .env("GEMINI_API_KEY", "test-key")
        .args(["prev.csv", "cur.csv"])
        .assert()
        .failure();

    assert!(stderr(assert.get_output()).contains("Network Error"));
}

#[test]
fn missing_arguments_is_a_usage_error() {
    let ws = Workspace::new();

    ws.command("http://127.0.0.1:9")
        .arg("only-one.csv")
        .assert()
        .code(2);
}

#[test]
fn verbose_logs_to_stderr_and_keeps_stdout_clean() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,12\n");

    let assert = ws.command(&gemini.base_url())
        .env("GEMINI_API_KEY", "test-key")
        .args(["prev.csv", "cur.csv", "-v"])
        .assert()
        .success();

    let output = assert.get_output();
    assert_eq!(
        stdout(output),
        format!("\n## AI Benchmark Diff Summary\n\n{CANNED_SUMMARY}\n")
    );
    let err = stderr(output);
    assert!(err.contains("📄 Read"));
    assert!(err.contains("Resolved configuration"));
    assert!(err.contains("<redacted>"));
    assert!(!err.contains("test-key"));
}

#[test]
fn rust_log_enables_info_without_flag() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,12\n");

    let assert = ws.command(&gemini.base_url())
        .env("GEMINI_API_KEY", "test-key")
        .env("RUST_LOG", "info")
        .args(["prev.csv", "cur.csv"])
        .assert()
        .success();

    let output = assert.get_output();
    assert!(stderr(output).contains("📄 Read"));
    assert!(!stdout(output).contains("📄 Read"));
}

#[test]
fn default_filter_is_quiet_on_success() {
    let gemini = FakeGemini::start();
    let ws = Workspace::new();
    ws.write("prev.csv", "name,ms\nA,10\n");
    ws.write("cur.csv", "name,ms\nA,12\n");

    let assert = ws.command(&gemini.base_url())
        .env("GEMINI_API_KEY", "test-key")
        .args(["prev.csv", "cur.csv"])
        .assert()
        .success();

    assert!(stderr(assert.get_output()).is_empty());
}

#[test]
fn failure_logs_technical_details_at_error_level() {
    let ws = Workspace::new();
    ws.write("cur.csv", "name,ms\nA,12\n");

    let assert = ws.command("http://127.0.0.1:9")
        .env("GEMINI_API_KEY", "test-key")
        .args(["missing.csv", "cur.csv"])
        .assert()
        .failure();

    let err = stderr(assert.get_output());
    assert!(err.contains("ERROR"));
    assert!(err.contains("[HIGH] FileReadError"));
}
