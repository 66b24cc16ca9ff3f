//! Integration tests for xc-interactive-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use std::collections::HashMap;
use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};
use xc_interactive_core::{
    config::HistoryFailurePolicy,
    error::Error,
    file_handling::get_config,
    history::{HistorySynchronizer, RefreshScript},
    interpolation::render_history_command,
    runner::{Runner, ShellRunner},
    task::Task,
};

/// Test loading a complete configuration and running a task from it
#[test]
fn test_config_to_runner_workflow() {
    let output_dir = TempDir::new().unwrap();
    let yaml_content = format!(
        r#"
shell: /bin/sh
history_command: "xc {{task}}"
history_failure: fail
theme:
  indent: 3
  highlight_color:
    ansi: 170
tasks:
  - name: greet
    description: Write a greeting
    script:
      - echo "hello $GREETING_NAME" > greeting.txt
    directory: "{}"
    environment:
      GREETING_NAME: world
"#,
        output_dir.path().display()
    );

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let config = get_config(temp_file.path().to_str().unwrap()).unwrap();

    assert_eq!(config.history_failure, HistoryFailurePolicy::Fail);
    assert_eq!(config.theme.as_ref().unwrap().indent, Some(3));

    let runner = ShellRunner::new(&config.tasks, ".", &config.shell(None)).unwrap();
    runner.run("greet", None).unwrap();

    let greeting = fs::read_to_string(output_dir.path().join("greeting.txt")).unwrap();
    assert_eq!(greeting, "hello world\n");

    let command = render_history_command(config.history_command(), "greet").unwrap();
    assert_eq!(command, "xc greet");
}

#[test]
fn test_runner_passes_arguments() {
    let output_dir = TempDir::new().unwrap();
    let task = Task::new("args", &["echo \"$0:$1:$2\" > args.txt"]);
    let runner = ShellRunner::new(&[task], output_dir.path(), "/bin/sh").unwrap();

    let args = vec!["one".to_string(), "two".to_string()];
    runner.run("args", Some(&args)).unwrap();

    let written = fs::read_to_string(output_dir.path().join("args.txt")).unwrap();
    assert_eq!(written, "args:one:two\n");
}

#[test]
fn test_runner_runs_script_lines_in_order() {
    let output_dir = TempDir::new().unwrap();
    let task = Task::new("lines", &["echo first > order.txt", "echo second >> order.txt"]);
    let runner = ShellRunner::new(&[task], output_dir.path(), "/bin/sh").unwrap();

    runner.run("lines", None).unwrap();

    let written = fs::read_to_string(output_dir.path().join("order.txt")).unwrap();
    assert_eq!(written, "first\nsecond\n");
}

#[test]
fn test_runner_reports_failing_script() {
    let task = Task::new("broken", &["exit 3"]);
    let runner = ShellRunner::new(&[task], ".", "/bin/sh").unwrap();

    let result = runner.run("broken", None);
    assert!(matches!(result, Err(Error::SubProcessExit)));
}

#[test]
fn test_runner_reports_missing_shell() {
    let task = Task::new("build", &["true"]);
    let runner = ShellRunner::new(&[task], ".", "/this/shell/does/not/exist").unwrap();

    let result = runner.run("build", None);
    assert!(matches!(result, Err(Error::SubProcess(_))));
}

#[test]
fn test_runner_environment_is_added() {
    let output_dir = TempDir::new().unwrap();
    let mut task = Task::new("env", &["echo \"$XC_TARGET\" > env.txt"]);
    task.environment = Some(HashMap::from([(
        "XC_TARGET".to_string(),
        "release".to_string(),
    )]));
    let runner = ShellRunner::new(&[task], output_dir.path(), "/bin/sh").unwrap();

    runner.run("env", None).unwrap();

    let written = fs::read_to_string(output_dir.path().join("env.txt")).unwrap();
    assert_eq!(written, "release\n");
}

/// The zsh refresh step runs a real script exactly once per append
#[cfg(unix)]
#[test]
fn test_zsh_history_with_refresh_script() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let scripts = TempDir::new().unwrap();
    let marker = scripts.path().join("refreshed");
    let script_path = scripts.path().join("refresh_history.zsh");
    fs::write(
        &script_path,
        format!("#!/bin/sh\necho refreshed >> \"{}\"\n", marker.display()),
    )
    .unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();

    let sync = HistorySynchronizer::new(
        home.path(),
        Some("/usr/bin/zsh".to_string()),
        RefreshScript::new(&script_path),
    );
    sync.sync_at("xc build", 1_700_000_000).unwrap();

    assert_eq!(
        fs::read_to_string(home.path().join(".zsh_history")).unwrap(),
        ": 1700000000:0;xc build\n"
    );
    assert_eq!(fs::read_to_string(marker).unwrap(), "refreshed\n");
}

#[cfg(unix)]
#[test]
fn test_zsh_refresh_script_failure_is_reported() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let scripts = TempDir::new().unwrap();
    let script_path = scripts.path().join("refresh_history.zsh");
    fs::write(&script_path, "#!/bin/sh\nexit 1\n").unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();

    let sync = HistorySynchronizer::new(
        home.path(),
        Some("zsh".to_string()),
        RefreshScript::new(&script_path),
    );
    let result = sync.sync("xc build");

    assert!(matches!(result, Err(Error::RefreshStepExit(_))));
    assert!(fs::read_to_string(home.path().join(".zsh_history"))
        .unwrap()
        .ends_with(";xc build\n"));
}
