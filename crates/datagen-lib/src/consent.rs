//! EULA consent gate checked before the data generator is allowed to run.

use crate::config::EulaConfig;
use crate::environment::Environment;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const EULA_URL: &str = "https://account.mojang.com/documents/minecraft_eula";
const ACCEPTED_CONTENT: &str = "eula=true";

/// Everything that can carry the operator's acknowledgment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentSources {
    /// Absolute path of the consent file.
    pub consent_file: PathBuf,
    /// Configuration file or command-line flag.
    pub flag: bool,
    /// `EULA` environment value parsed as a boolean.
    pub environment: bool,
}

impl ConsentSources {
    pub fn resolve(
        project_root: &Path,
        eula: &EulaConfig,
        cli_flag: bool,
        environment: &Environment,
    ) -> Self {
        Self {
            consent_file: project_root.join(&eula.file),
            flag: eula.accepted || cli_flag,
            environment: environment.eula_accepted(),
        }
    }
}

/// Returns true when any consent source grants acceptance.
pub fn check_consent(sources: &ConsentSources) -> bool {
    consent_file_accepts(&sources.consent_file) || sources.flag || sources.environment
}

fn consent_file_accepts(path: &Path) -> bool {
    match std::fs::read_to_string(path) {
        Ok(content) => content.trim().eq_ignore_ascii_case(ACCEPTED_CONTENT),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => {
            warn!("Could not read consent file {}: {}", path.display(), e);
            false
        }
    }
}

pub fn log_consent_notice(consent_file: &Path) {
    warn!("Mojang requires all source-code and mappings used to be governed by the Minecraft EULA.");
    warn!("Please read the Minecraft EULA located at {}.", EULA_URL);
    warn!(
        "In order to agree to the EULA you must create a file called {} with the text '{}'.",
        consent_file
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default(),
        ACCEPTED_CONTENT
    );
    warn!("The file must be located at '{}'.", consent_file.display());
}

pub fn log_accepted_notice() {
    warn!("The EULA has been accepted and signed.");
    warn!("It is unclear if the data from the data generator also adhere to the Minecraft EULA.");
    warn!("Please consult your own legal team!");
    warn!("All data is given independently without warranty, guarantee or liability of any kind.");
    warn!("The data may or may not be the intellectual property of Mojang Studios.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(consent_file: PathBuf) -> ConsentSources {
        ConsentSources {
            consent_file,
            flag: false,
            environment: false,
        }
    }

    #[test]
    fn test_missing_file_and_no_flags_denies() {
        let dir = tempfile::tempdir().unwrap();

        assert!(!check_consent(&sources(dir.path().join("eula.txt"))));
    }

    #[test]
    fn test_accepted_file_grants_consent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("eula.txt");
        std::fs::write(&file, "eula=true").unwrap();

        assert!(check_consent(&sources(file)));
    }

    #[test]
    fn test_file_content_is_case_insensitive_and_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("eula.txt");
        std::fs::write(&file, "EULA=TRUE\n").unwrap();

        assert!(check_consent(&sources(file)));
    }

    #[test]
    fn test_declined_file_denies() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("eula.txt");
        std::fs::write(&file, "eula=false").unwrap();

        assert!(!check_consent(&sources(file)));
    }

    #[test]
    fn test_flag_alone_grants_consent() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = sources(dir.path().join("eula.txt"));
        s.flag = true;

        assert!(check_consent(&s));
    }

    #[test]
    fn test_environment_alone_grants_consent() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = sources(dir.path().join("eula.txt"));
        s.environment = true;

        assert!(check_consent(&s));
    }

    #[test]
    fn test_resolve_merges_config_cli_and_environment() {
        let root = Path::new("/project");
        let eula = EulaConfig::default();
        let env = Environment {
            eula: Some("True".to_string()),
            ..Default::default()
        };

        let resolved = ConsentSources::resolve(root, &eula, false, &env);

        assert_eq!(resolved.consent_file, PathBuf::from("/project/eula.txt"));
        assert!(!resolved.flag);
        assert!(resolved.environment);

        let resolved = ConsentSources::resolve(root, &eula, true, &Environment::default());
        assert!(resolved.flag);
        assert!(!resolved.environment);
    }
}
