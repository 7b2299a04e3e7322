/// A trait to abstract over environment variable access.
///
/// Configuration read from the environment goes through this trait, so that
/// tests can substitute a fake environment for the process environment.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Try reading the environment variable as a trimmed, non-empty string.
    ///
    /// Undefined, blank, and non-Unicode variables all count as absent.
    fn read_setting(&self, key: &str) -> Option<String> {
        self.read(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::Environment;
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set(&mut self, key: &str, value: &str) -> &mut Self {
            self.bindings.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_read_setting() {
        let mut env = FakeEnv::new();
        env.set("BLANK", "   ").set("SET", " rec709 ");

        assert_eq!(env.read_setting("UNSET"), None);
        assert_eq!(env.read_setting("BLANK"), None);
        assert_eq!(env.read_setting("SET"), Some("rec709".to_string()));
    }
}

#[cfg(test)]
pub(crate) use test::FakeEnv;
