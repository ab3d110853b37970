//! Unit tests for token secret resolution.

use std::collections::HashMap;

use mockable::MockEnv;
use rstest::rstest;
use uuid::Uuid;

use super::*;

#[derive(Debug)]
struct TempSecretFile {
    path: PathBuf,
}

impl TempSecretFile {
    fn new(contents: &[u8]) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("jwt-secret-{}", Uuid::new_v4()));
        std::fs::write(&path, contents)?;
        Ok(Self { path })
    }

    fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempSecretFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn expect_error(result: Result<TokenSettings, TokenConfigError>, label: &str) -> TokenConfigError {
    match result {
        Ok(_) => panic!("{label}"),
        Err(error) => error,
    }
}

#[rstest]
#[case(BuildMode::Debug)]
#[case(BuildMode::Release)]
fn secret_file_takes_precedence_and_is_trimmed(#[case] mode: BuildMode) {
    let file = TempSecretFile::new(b"  from-file-secret\n").expect("secret file");
    let path = file.path_str();
    let env = mock_env(&[(SECRET_FILE_ENV, &path), (SECRET_ENV, "from-env")]);

    let settings = token_settings_from_env(&env, mode).expect("file secret");
    assert_eq!(settings.secret.expose(), b"from-file-secret");
    assert_eq!(settings.source, SecretSource::File(file.path.clone()));
}

#[rstest]
fn env_secret_is_used_without_a_file() {
    let env = mock_env(&[(SECRET_ENV, " env-secret ")]);
    let settings = token_settings_from_env(&env, BuildMode::Release).expect("env secret");
    assert_eq!(settings.secret.expose(), b"env-secret");
    assert_eq!(settings.source, SecretSource::Env);
}

#[rstest]
fn release_rejects_unreadable_secret_file() {
    let missing = std::env::temp_dir().join(format!("jwt-missing-{}", Uuid::new_v4()));
    let path = missing.to_string_lossy().into_owned();
    let env = mock_env(&[(SECRET_FILE_ENV, &path), (SECRET_ENV, "env-secret")]);

    let err = expect_error(
        token_settings_from_env(&env, BuildMode::Release),
        "expected unreadable file to fail",
    );
    assert!(matches!(err, TokenConfigError::SecretRead { .. }));
}

#[rstest]
fn debug_skips_unreadable_secret_file() {
    let missing = std::env::temp_dir().join(format!("jwt-missing-{}", Uuid::new_v4()));
    let path = missing.to_string_lossy().into_owned();
    let env = mock_env(&[(SECRET_FILE_ENV, &path), (SECRET_ENV, "env-secret")]);

    let settings = token_settings_from_env(&env, BuildMode::Debug).expect("falls through");
    assert_eq!(settings.source, SecretSource::Env);
}

#[rstest]
fn empty_secret_file_is_rejected() {
    let file = TempSecretFile::new(b" \n").expect("secret file");
    let path = file.path_str();
    let env = mock_env(&[(SECRET_FILE_ENV, &path)]);

    let err = expect_error(
        token_settings_from_env(&env, BuildMode::Release),
        "expected empty file to fail",
    );
    assert!(matches!(
        err,
        TokenConfigError::EmptySecret {
            name: SECRET_FILE_ENV
        }
    ));
}

#[rstest]
fn release_rejects_blank_env_secret() {
    let env = mock_env(&[(SECRET_ENV, "   ")]);
    let err = expect_error(
        token_settings_from_env(&env, BuildMode::Release),
        "expected blank secret to fail",
    );
    assert!(matches!(
        err,
        TokenConfigError::EmptySecret { name: SECRET_ENV }
    ));
}

#[rstest]
fn debug_falls_back_to_insecure_secret() {
    let env = mock_env(&[]);
    let settings = token_settings_from_env(&env, BuildMode::Debug).expect("debug fallback");
    assert_eq!(settings.secret.expose(), INSECURE_FALLBACK_SECRET.as_bytes());
    assert_eq!(settings.source, SecretSource::InsecureFallback);
}

#[rstest]
#[case(None)]
#[case(Some("0"))]
fn release_refuses_fallback_without_opt_in(#[case] allow: Option<&str>) {
    let env = match allow {
        Some(value) => mock_env(&[(ALLOW_INSECURE_ENV, value)]),
        None => mock_env(&[]),
    };
    let err = expect_error(
        token_settings_from_env(&env, BuildMode::Release),
        "expected fallback to be refused",
    );
    assert!(matches!(err, TokenConfigError::InsecureFallbackRefused));
}

#[rstest]
fn release_accepts_fallback_with_opt_in() {
    let env = mock_env(&[(ALLOW_INSECURE_ENV, "1")]);
    let settings = token_settings_from_env(&env, BuildMode::Release).expect("opted in");
    assert_eq!(settings.source, SecretSource::InsecureFallback);
}

#[rstest]
fn release_rejects_unparsable_opt_in() {
    let env = mock_env(&[(ALLOW_INSECURE_ENV, "perhaps")]);
    let err = expect_error(
        token_settings_from_env(&env, BuildMode::Release),
        "expected invalid flag to fail",
    );
    assert!(matches!(
        err,
        TokenConfigError::InvalidEnv {
            name: ALLOW_INSECURE_ENV,
            ..
        }
    ));
}
