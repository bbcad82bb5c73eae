#![cfg(unix)]

use assert_fs::prelude::*;
use datagen_e2e_tests::{create_test_config, init_tracing, setup_test_environment};
use datagen_lib::Environment;
use datagen_lib::cli::{Command, GenerateParams, ResolvedCommand, resolve_command, run_generate};
use datagen_lib::error::DataGenError;
use predicates::prelude::*;

fn build_generate_params(
    config_path: &std::path::Path,
    accept_eula: bool,
    environment: &Environment,
) -> GenerateParams {
    let command = Command::Generate {
        config_path: config_path.to_str().unwrap().to_string(),
        accept_eula,
    };
    match resolve_command(command, environment).expect("Failed to resolve generate command") {
        ResolvedCommand::Generate(params) => params,
        _ => unreachable!("Resolved command type mismatch"),
    }
}

#[tokio::test]
async fn test_generation_halts_without_consent() {
    init_tracing();

    let (temp_dir, config_path) = setup_test_environment(&create_test_config(vec![]))
        .expect("Failed to setup test environment");

    let params = build_generate_params(&config_path, false, &Environment::default());
    let result = run_generate(params).await;

    match result {
        Err(DataGenError::ConsentNotGranted { consent_file }) => {
            assert_eq!(consent_file, temp_dir.path().join("eula.txt"));
        }
        other => panic!("Expected consent failure, got {:?}", other),
    }
    assert!(
        !temp_dir.path().join("src/main/resources").exists(),
        "Generator must not run without consent"
    );
}

#[tokio::test]
async fn test_generation_runs_with_consent_file() {
    init_tracing();

    let (temp_dir, config_path) = setup_test_environment(&create_test_config(vec![]))
        .expect("Failed to setup test environment");
    std::fs::write(temp_dir.path().join("eula.txt"), "eula=true").unwrap();

    let params = build_generate_params(&config_path, false, &Environment::default());
    run_generate(params)
        .await
        .expect("Generation should succeed once the EULA is accepted");

    let project = assert_fs::fixture::ChildPath::new(temp_dir.path());
    project
        .child("src/main/resources/sounds.json")
        .assert(predicate::str::contains("generated"));
}

#[tokio::test]
async fn test_generation_runs_with_cli_flag() {
    init_tracing();

    let (temp_dir, config_path) = setup_test_environment(&create_test_config(vec![]))
        .expect("Failed to setup test environment");

    let params = build_generate_params(&config_path, true, &Environment::default());
    run_generate(params)
        .await
        .expect("Generation should succeed with --accept-eula");

    assert!(temp_dir.path().join("src/main/resources/sounds.json").exists());
}

#[tokio::test]
async fn test_generation_runs_with_environment_flag() {
    init_tracing();

    let (temp_dir, config_path) = setup_test_environment(&create_test_config(vec![]))
        .expect("Failed to setup test environment");
    let environment = Environment {
        eula: Some("TRUE".to_string()),
        ..Default::default()
    };

    let params = build_generate_params(&config_path, false, &environment);
    run_generate(params)
        .await
        .expect("Generation should succeed with EULA=true");

    assert!(temp_dir.path().join("src/main/resources/sounds.json").exists());
}
