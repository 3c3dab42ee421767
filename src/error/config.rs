use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// Only one of the trigger and derived role ids was provided.
    ///
    /// Role sync needs both `PATRON_ROLE_ID` and `DONOR_ROLE_ID`, or neither to
    /// disable it.
    #[error("Role grant requires both PATRON_ROLE_ID and DONOR_ROLE_ID to be set")]
    IncompleteRoleGrant,
}
