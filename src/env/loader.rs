//! Schema-driven environment variable decoding.
//!
//! The caller declares the shape of its environment as a plain struct
//! deriving `Deserialize`; `envy` matches each field against the variable
//! with the same name (variable names are matched case-insensitively, so
//! field `environment` binds `ENVIRONMENT`) and converts the value to the
//! field's type. An explicit binding is declared with a lowercase
//! `#[serde(rename)]`.
//!
//! ```no_run
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Env {
//!     environment: String,          // reads ENVIRONMENT
//!     #[serde(rename = "db_url")]
//!     database: String,             // reads DB_URL
//!     port: u16,                    // reads PORT, parsed as u16
//! }
//!
//! let env: Env = groundwork::env::load()?;
//! # Ok::<(), groundwork::env::EnvError>(())
//! ```

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors produced while decoding the environment snapshot.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A declared binding has no corresponding variable.
    #[error("missing environment variable for binding `{0}`")]
    Missing(&'static str),

    /// A variable exists but cannot be converted to the declared type.
    #[error("malformed environment variable: {0}")]
    Malformed(String),
}

impl From<envy::Error> for EnvError {
    fn from(err: envy::Error) -> Self {
        match err {
            envy::Error::MissingValue(binding) => EnvError::Missing(binding),
            envy::Error::Custom(message) => EnvError::Malformed(message),
        }
    }
}

/// Decode the process environment into the caller's declared shape.
pub fn load<T: DeserializeOwned>() -> Result<T, EnvError> {
    envy::from_env().map_err(EnvError::from)
}

/// Decode the process environment, considering only variables starting with
/// `prefix` and binding them with the prefix stripped.
///
/// With prefix `"APP_"`, field `port` binds `APP_PORT`.
pub fn load_prefixed<T: DeserializeOwned>(prefix: &str) -> Result<T, EnvError> {
    envy::prefixed(prefix).from_env().map_err(EnvError::from)
}

/// Decode the given variables into the caller's declared shape.
///
/// Same contract as [`load`], but over supplied pairs instead of the process
/// environment. Useful in tests and for pre-filtered variable sets.
pub fn load_from<T, I>(vars: I) -> Result<T, EnvError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    envy::from_iter(vars).map_err(EnvError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serial_test::serial;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestEnv {
        environment: String,
        version: String,
        port: u16,
    }

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_from_decodes_declared_bindings() {
        let env: TestEnv = load_from(vars(&[
            ("ENVIRONMENT", "production"),
            ("VERSION", "1.4.2"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(
            env,
            TestEnv {
                environment: "production".to_string(),
                version: "1.4.2".to_string(),
                port: 8080,
            }
        );
    }

    #[test]
    fn test_missing_binding_is_an_error() {
        let result: Result<TestEnv, _> =
            load_from(vars(&[("ENVIRONMENT", "production"), ("VERSION", "1.4.2")]));

        match result {
            Err(EnvError::Missing(binding)) => assert_eq!(binding, "port"),
            other => panic!("expected missing binding error, got {:?}", other),
        }
    }

    #[test]
    fn test_unconvertible_value_is_an_error() {
        let result: Result<TestEnv, _> = load_from(vars(&[
            ("ENVIRONMENT", "production"),
            ("VERSION", "1.4.2"),
            ("PORT", "not-a-port"),
        ]));

        assert!(matches!(result, Err(EnvError::Malformed(_))));
    }

    #[test]
    fn test_renamed_binding_reads_declared_name() {
        #[derive(Deserialize)]
        struct Renamed {
            #[serde(rename = "db_url")]
            database: String,
        }

        let env: Renamed = load_from(vars(&[("DB_URL", "postgres://db")])).unwrap();
        assert_eq!(env.database, "postgres://db");
    }

    #[test]
    fn test_optional_field_defaults_to_none() {
        #[derive(Deserialize)]
        struct Optional {
            environment: String,
            region: Option<String>,
        }

        let env: Optional = load_from(vars(&[("ENVIRONMENT", "staging")])).unwrap();
        assert_eq!(env.environment, "staging");
        assert!(env.region.is_none());
    }

    #[test]
    #[serial]
    fn test_load_reads_process_environment() {
        #[derive(Deserialize)]
        struct ProcessEnv {
            groundwork_test_var: String,
        }

        std::env::set_var("GROUNDWORK_TEST_VAR", "present");
        let env: ProcessEnv = load().unwrap();
        std::env::remove_var("GROUNDWORK_TEST_VAR");

        assert_eq!(env.groundwork_test_var, "present");
    }

    #[test]
    #[serial]
    fn test_load_prefixed_strips_the_prefix() {
        #[derive(Deserialize)]
        struct PrefixedEnv {
            region: String,
        }

        std::env::set_var("GROUNDWORK_REGION", "eu-west-1");
        let env: PrefixedEnv = load_prefixed("GROUNDWORK_").unwrap();
        std::env::remove_var("GROUNDWORK_REGION");

        assert_eq!(env.region, "eu-west-1");
    }
}
