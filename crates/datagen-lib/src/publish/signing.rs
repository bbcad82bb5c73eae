use crate::environment::{self, Environment};
use crate::error::DataGenError;
use serde::{Deserialize, Serialize};

/// What the publishing platform must do about signatures.
///
/// Key material itself never leaves the [`Environment`]; the plan only records
/// whether it is present.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigningPlan {
    /// Signing is mandatory in automated environments.
    pub required: bool,
    pub key_present: bool,
    pub passphrase_present: bool,
}

impl SigningPlan {
    pub fn from_environment(env: &Environment) -> Result<Self, DataGenError> {
        let required = env.is_ci();
        let key_present = env.signing_key.as_deref().is_some_and(|k| !k.trim().is_empty());

        if required && !key_present {
            return Err(DataGenError::SigningKeyMissing {
                variable: environment::SIGNING_KEY,
            });
        }

        if !key_present {
            tracing::warn!("No signing key configured; artifacts will be published unsigned");
        }

        Ok(Self {
            required,
            key_present,
            passphrase_present: env.signing_passphrase.is_some(),
        })
    }

    pub fn will_sign(&self) -> bool {
        self.key_present
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct RepositoryCredentials {
    pub username: String,
    pub password: String,
}

impl RepositoryCredentials {
    /// Credentials are only configured when a username is present.
    pub fn from_environment(env: &Environment) -> Result<Option<Self>, DataGenError> {
        let Some(username) = env.repository_username.clone() else {
            return Ok(None);
        };

        let password =
            env.repository_password
                .clone()
                .ok_or_else(|| DataGenError::CredentialsIncomplete {
                    details: format!(
                        "{} is set but {} is missing",
                        environment::REPOSITORY_USERNAME,
                        environment::REPOSITORY_PASSWORD
                    ),
                })?;

        Ok(Some(Self { username, password }))
    }
}

impl std::fmt::Debug for RepositoryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
