use datagen_lib::config::{
    ArtifactsConfig, Config, DownloadDef, EulaConfig, GeneratorConfig, PomConfig, ProjectConfig,
    PublishingConfig, RepositoryConfig,
};
use datagen_lib::fetch::FetchOptions;
use eyre::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CONFIG_FILE_NAME: &str = "datagen.json";

pub fn create_test_config(downloads: Vec<DownloadDef>) -> Config {
    Config {
        project: ProjectConfig {
            group: "net.minestom".to_string(),
            artifact: "data".to_string(),
            base_version: "1.21.4".to_string(),
            description: "Generator for Minecraft game data values".to_string(),
        },
        eula: EulaConfig::default(),
        generator: GeneratorConfig {
            program: PathBuf::from("sh"),
            args: vec![
                "-c".to_string(),
                r#"printf '{"generated":true}' > "$0/sounds.json""#.to_string(),
            ],
            output_dir: PathBuf::from("src/main/resources"),
        },
        downloads,
        fetch: FetchOptions::default(),
        publishing: PublishingConfig {
            repository: RepositoryConfig {
                url: "https://repo.example.test/releases/".to_string(),
                snapshot_url: "https://repo.example.test/snapshots/".to_string(),
            },
            artifacts: ArtifactsConfig {
                library: PathBuf::from("build/libs/data.jar"),
                sources: PathBuf::from("build/libs/data-sources.jar"),
                documentation: PathBuf::from("build/libs/data-javadoc.jar"),
            },
            pom: PomConfig {
                name: "data".to_string(),
                description: "Minecraft game data values".to_string(),
                url: "https://github.com/minestom/MinestomDataGenerator".to_string(),
                licenses: vec![],
                developers: vec![],
                issue_management: None,
                scm: None,
                ci_management: None,
            },
        },
    }
}

/// Writes `config` into a fresh project directory and returns it with the config path.
pub fn setup_test_environment(config: &Config) -> Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;

    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&config_path, serde_json::to_string_pretty(config)?)?;

    Ok((temp_dir, config_path))
}

pub async fn serve_file(server: &MockServer, path_str: &str, status: u16, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

pub fn download(destination: &str, server: &MockServer, path_str: &str) -> DownloadDef {
    DownloadDef {
        destination: destination.to_string(),
        url: format!("{}{}", server.uri(), path_str),
    }
}

pub fn write_artifacts(root: &Path) -> Result<()> {
    let libs = root.join("build/libs");
    std::fs::create_dir_all(&libs)?;
    std::fs::write(libs.join("data.jar"), b"library bytes")?;
    std::fs::write(libs.join("data-sources.jar"), b"source bytes")?;
    std::fs::write(libs.join("data-javadoc.jar"), b"javadoc bytes")?;
    Ok(())
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("datagen_lib=debug,datagen_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
