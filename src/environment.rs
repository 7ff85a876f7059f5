use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    /// Base name of the configuration file for this environment, without extension.
    #[must_use]
    pub fn config_file_name(self) -> String {
        format!("config/{self}")
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_parses_snake_case_names() {
        assert_eq!(
            Environment::from_str("production").ok(),
            Some(Environment::Production)
        );
        assert!(Environment::from_str("staging").is_err());
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(Environment::Test.config_file_name(), "config/test");
    }
}
