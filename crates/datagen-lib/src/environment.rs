//! Snapshot of the process environment values datagen consumes.
//!
//! Everything that used to be read ad hoc from the process environment is
//! captured once at startup and passed explicitly to the consent gate and the
//! publication planner.

pub const TAG_VERSION: &str = "TAG_VERSION";
pub const EULA: &str = "EULA";
pub const CI: &str = "CI";
pub const REPOSITORY_USERNAME: &str = "SONATYPE_USERNAME";
pub const REPOSITORY_PASSWORD: &str = "SONATYPE_PASSWORD";
pub const SIGNING_KEY: &str = "GPG_PRIVATE_KEY";
pub const SIGNING_PASSPHRASE: &str = "GPG_PASSPHRASE";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub tag_version: Option<String>,
    pub eula: Option<String>,
    pub ci: Option<String>,
    pub repository_username: Option<String>,
    pub repository_password: Option<String>,
    pub signing_key: Option<String>,
    pub signing_passphrase: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            tag_version: lookup(TAG_VERSION),
            eula: lookup(EULA),
            ci: lookup(CI),
            repository_username: lookup(REPOSITORY_USERNAME),
            repository_password: lookup(REPOSITORY_PASSWORD),
            signing_key: lookup(SIGNING_KEY),
            signing_passphrase: lookup(SIGNING_PASSPHRASE),
        }
    }

    /// Mirrors the platform convention: any value of `CI`, even empty, means automated.
    pub fn is_ci(&self) -> bool {
        self.ci.is_some()
    }

    pub fn eula_accepted(&self) -> bool {
        self.eula
            .as_deref()
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redacted(value: &Option<String>) -> Option<&'static str> {
            value.as_ref().map(|_| "<redacted>")
        }

        f.debug_struct("Environment")
            .field("tag_version", &self.tag_version)
            .field("eula", &self.eula)
            .field("ci", &self.ci)
            .field("repository_username", &self.repository_username)
            .field("repository_password", &redacted(&self.repository_password))
            .field("signing_key", &redacted(&self.signing_key))
            .field("signing_passphrase", &redacted(&self.signing_passphrase))
            .finish()
    }
}
