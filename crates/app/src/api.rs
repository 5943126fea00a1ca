use shared_types::{Credentials, LoginResponse, TransportError};

/// The fixed endpoint that issues `{username, role}` sessions.
pub const LOGIN_ENDPOINT: &str = "https://f2ed36a4mh.execute-api.ap-south-1.amazonaws.com/";

/// Requests a session from the login endpoint.
///
/// One shot: no retry, no timeout, no cancellation. The endpoint issues a
/// demo session without reading a credential payload, so the request
/// carries no body and the captured credentials never leave the client.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, TransportError> {
    tracing::debug!(email = %credentials.email, "requesting session from login endpoint");

    let response = reqwest::get(LOGIN_ENDPOINT)
        .await
        .map_err(|err| TransportError::new(err.to_string()))?
        .error_for_status()
        .map_err(|err| TransportError::new(err.to_string()))?;

    response
        .json::<LoginResponse>()
        .await
        .map_err(|err| TransportError::new(err.to_string()))
}
