use thiserror::Error;

/// Reasons a metric fetch did not produce a usable snapshot.
///
/// None of these escape the metric cache: each one degrades to returning the
/// previous snapshot without advancing the bucket.
#[derive(Error, Debug)]
pub enum MetricError {
    /// The provider could not be reached or answered with an error status.
    #[error("Failed to reach metric provider: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response was empty, had no `items`, or was missing `statistics`.
    #[error("Malformed metric response: {0}")]
    MalformedResponse(String),

    /// The provider answered for a different channel than the one configured.
    #[error("Metric response is for channel '{actual}', expected '{expected}'")]
    IdentityMismatch {
        /// The configured channel id
        expected: String,
        /// The id found in the response
        actual: String,
    },

    /// A count was missing, unparsable or zero.
    #[error("Metric response has an unusable {field}: {value}")]
    DegenerateValue {
        /// Name of the statistics field
        field: &'static str,
        /// Raw value as received
        value: String,
    },
}
