use super::*;
use crate::test_support::{Answer, ScriptedPrompter};
use hook_config::{Argument, ArgumentSource, TriggerRule};
use std::fs;
use tempfile::TempDir;

fn temp_hooks_file() -> (TempDir, HooksFile) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = HooksFile::new(temp_dir.path().join("webhook.yaml"));
    (temp_dir, file)
}

fn deploy_answers() -> Vec<Answer> {
    vec![
        Answer::Text("deploy"),
        Answer::Text("/opt/deploy.sh"),
        Answer::Confirm(false),
        Answer::Choice(0),
        Answer::Confirm(false),
        Answer::Confirm(false),
    ]
}

// ============================================================================
// Command Execution Tests
// ============================================================================

#[test]
fn test_add_template_writes_skeleton() {
    let (_dir, file) = temp_hooks_file();
    let mut prompter = ScriptedPrompter::new(vec![]);

    execute(&AddArgs { template: true }, &file, &mut prompter).expect("template succeeds");

    let hooks = file.read().expect("read");
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0].id, "demo");
    assert!(prompter.questions.is_empty());
}

#[test]
fn test_add_appends_prompted_hook() {
    let (_dir, file) = temp_hooks_file();
    let mut prompter = ScriptedPrompter::new(deploy_answers());

    execute(&AddArgs { template: false }, &file, &mut prompter).expect("add succeeds");

    let hooks = file.read().expect("read");
    assert_eq!(hooks, vec![Hook::new("deploy", "/opt/deploy.sh")]);
}

#[test]
fn test_add_after_template_keeps_demo_first() {
    let (_dir, file) = temp_hooks_file();
    execute(
        &AddArgs { template: true },
        &file,
        &mut ScriptedPrompter::new(vec![]),
    )
    .expect("template succeeds");

    execute(
        &AddArgs { template: false },
        &file,
        &mut ScriptedPrompter::new(deploy_answers()),
    )
    .expect("add succeeds");

    let ids: Vec<String> = file.read().expect("read").into_iter().map(|h| h.id).collect();
    assert_eq!(ids, vec!["demo", "deploy"]);
}

#[test]
fn test_add_to_corrupt_file_fails_without_writing() {
    let (_dir, file) = temp_hooks_file();
    fs::write(file.path(), "- id: [broken").expect("Failed to write file");
    let mut prompter = ScriptedPrompter::new(deploy_answers());

    let result = execute(&AddArgs { template: false }, &file, &mut prompter);

    assert!(matches!(
        result,
        Err(Error::HookConfig(hook_config::HookConfigError::ParseError { .. }))
    ));
    assert_eq!(
        fs::read_to_string(file.path()).expect("read"),
        "- id: [broken"
    );
}

#[test]
fn test_add_with_failed_prompt_leaves_file_alone() {
    let (_dir, file) = temp_hooks_file();
    let mut prompter = ScriptedPrompter::new(vec![Answer::Text("deploy")]);

    let result = execute(&AddArgs { template: false }, &file, &mut prompter);

    assert!(matches!(result, Err(Error::Prompt(_))));
    assert!(!file.path().exists());
}

#[test]
fn test_add_write_failure_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file = HooksFile::new(temp_dir.path().join("missing").join("webhook.yaml"));
    let mut prompter = ScriptedPrompter::new(deploy_answers());

    let result = execute(&AddArgs { template: false }, &file, &mut prompter);

    assert!(matches!(
        result,
        Err(Error::HookConfig(hook_config::HookConfigError::WriteError { .. }))
    ));
}

// ============================================================================
// Summary Formatting Tests
// ============================================================================

#[test]
fn test_summary_minimal_hook() {
    colored::control::set_override(false);
    let hook = Hook::new("deploy", "/opt/deploy.sh");

    let summary = format_summary(&hook, Path::new("webhook.yaml"), 1);

    assert!(summary.contains("Hook added to webhook.yaml (1 hook in file)"));
    assert!(summary.contains("ID: deploy\n"));
    assert!(summary.contains("Command: /opt/deploy.sh\n"));
    assert!(summary.contains("Return output: true\n"));
    assert!(!summary.contains("Working directory"));
    assert!(!summary.contains("Arguments"));
    assert!(!summary.contains("Trigger rule"));
    assert!(summary.contains("http://<your-server-ip-or-domain>/hooks/deploy"));
    assert!(summary.contains("curl -X POST -H \"Content-Type: application/json\""));
}

#[test]
fn test_summary_full_hook() {
    colored::control::set_override(false);
    let mut hook = Hook::new("build", "/srv/build.sh");
    hook.command_working_directory = Some("/srv".to_string());
    hook.include_output_in_response = false;
    hook.pass_arguments = vec![
        Argument::new("branch", ArgumentSource::Payload).with_env_name("GIT_BRANCH"),
        Argument::new("X-Request-Id", ArgumentSource::Header),
    ];
    hook.trigger_rule = Some(TriggerRule::IpWhitelist {
        ip_range: "10.0.0.0/8".to_string(),
    });

    let summary = format_summary(&hook, Path::new("hooks.yaml"), 3);

    assert!(summary.contains("(3 hooks in file)"));
    assert!(summary.contains("Working directory: /srv\n"));
    assert!(summary.contains("Return output: false\n"));
    assert!(summary.contains("  - branch (payload), env GIT_BRANCH\n"));
    assert!(summary.contains("  - X-Request-Id (header)\n"));
    assert!(summary.contains("Trigger rule: ip-whitelist\n"));
    assert!(summary.contains("/hooks/build"));
}
