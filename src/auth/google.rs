use crate::errors::{AppError, AppResult};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Identity fields extracted from a verified Google ID token.
#[derive(Debug, Clone)]
pub struct GoogleProfile {
    pub google_id: String,
    pub email: String,
    pub name: String,
}

/// Verifies Google-issued ID tokens against the tokeninfo endpoint.
/// The handshake that produced the token is the client's concern;
/// the server only checks signature validity (delegated to Google)
/// and that the token was minted for our client id.
pub struct GoogleTokenVerifier {
    client: reqwest::Client,
    client_id: String,
    endpoint: String,
}

impl GoogleTokenVerifier {
    pub fn new(client_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.to_string(),
            endpoint: TOKENINFO_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_endpoint(client_id: &str, endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: client_id.to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    pub async fn verify(&self, id_token: &str) -> AppResult<GoogleProfile> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| {
                log::error!("Failed to reach Google tokeninfo endpoint: {}", e);
                AppError::Internal(format!("Failed to verify Google token: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::Authentication(
                "Google rejected the supplied credential".to_string(),
            ));
        }

        let payload = response.json::<serde_json::Value>().await.map_err(|e| {
            AppError::Internal(format!("Failed to parse tokeninfo response: {}", e))
        })?;

        let info = payload
            .as_object()
            .ok_or_else(|| AppError::Internal("Invalid tokeninfo response format".to_string()))?;

        let audience = info.get("aud").and_then(|v| v.as_str()).unwrap_or_default();
        if audience != self.client_id {
            log::warn!("Google token audience mismatch: {}", audience);
            return Err(AppError::Authentication(
                "Google token was not issued for this application".to_string(),
            ));
        }

        let google_id = info
            .get("sub")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                AppError::Authentication("Google token is missing a subject".to_string())
            })?
            .to_string();

        let email = info
            .get("email")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                AppError::Authentication("Google token is missing an email".to_string())
            })?
            .to_string();

        let name = info
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(&email)
            .to_string();

        Ok(GoogleProfile {
            google_id,
            email,
            name,
        })
    }
}
