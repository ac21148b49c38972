/// The main error type for the postgen [`crate`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// The error type for operations interacting with environment variables.
    /// Possibly returned from [`std::env::var()`].
    #[error("Environment variable error: {0} {1}")]
    EnvVarError(String, std::env::VarError),

    /// An environment variable was present but could not be interpreted.
    #[error("Invalid configuration for {0}: {1}")]
    InvalidConfig(String, String),

    #[error("Invalid header value for {0}: {1}")]
    InvalidHeaderValue(String, reqwest::header::InvalidHeaderValue),

    /// Represents [`crate::completions::CompletionRequestBuilder`] errors.
    #[error(transparent)]
    CompletionRequestBuilderError(#[from] crate::completions::CompletionRequestBuilderError),

    /// The completion API answered with a non-success status code.
    #[error("Completion API returned {status}: {body}")]
    ApiError { status: u16, body: String },

    /// The completion API answered successfully but without any choice.
    #[error("Completion response did not contain any choices")]
    NoCompletionChoices,

    #[error(transparent)]
    S3Error(#[from] s3::error::S3Error),

    #[error(transparent)]
    CredentialsError(#[from] s3::creds::error::CredentialsError),

    /// Catches any other error types that don't fit into the above categories.
    /// Uses a boxed trait object to support a wide range of error types.
    #[error("OtherError: {0}")]
    OtherError(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// A specialized [`Result`] type for this postgen [`crate`].
///
/// This type is broadly used across postgen [`crate`] for any operation which
/// may produce an error.
///
/// # Examples
///
/// A convenience function that bubbles a `postgen::Result` to its caller:
///
/// ```
/// fn generate_post() -> postgen::Result<()> {
///     // run some code that may produce an error from the postgen code
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
