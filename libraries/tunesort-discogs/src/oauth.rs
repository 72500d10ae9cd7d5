//! OAuth 1.0a `Authorization` header with the PLAINTEXT signature method.

use crate::error::{DiscogsError, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;
use url::form_urlencoded;

const NONCE_LEN: usize = 32;

/// Builder for a single request's OAuth header.
#[derive(Debug, Clone)]
pub struct OAuthHeader<'a> {
    consumer_key: &'a str,
    consumer_secret: &'a str,
    token: Option<&'a str>,
    token_secret: &'a str,
    callback: Option<&'a str>,
    verifier: Option<&'a str>,
    nonce: String,
    timestamp: i64,
}

impl<'a> OAuthHeader<'a> {
    /// Start a header signed with the consumer credentials only.
    pub fn new(consumer_key: &'a str, consumer_secret: &'a str) -> Self {
        Self {
            consumer_key,
            consumer_secret,
            token: None,
            token_secret: "",
            callback: None,
            verifier: None,
            nonce: generate_nonce(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    /// Sign with a request or access token.
    pub fn token(mut self, token: &'a str, secret: &'a str) -> Self {
        self.token = Some(token);
        self.token_secret = secret;
        self
    }

    /// Add `oauth_callback` (request token step).
    pub fn callback(mut self, callback: &'a str) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Add `oauth_verifier` (access token step).
    pub fn verifier(mut self, verifier: &'a str) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Fix the nonce and timestamp.
    pub fn fixed(mut self, nonce: impl Into<String>, timestamp: i64) -> Self {
        self.nonce = nonce.into();
        self.timestamp = timestamp;
        self
    }

    /// PLAINTEXT signature: `consumer_secret&token_secret`.
    pub fn signature(&self) -> String {
        format!(
            "{}&{}",
            percent_encode(self.consumer_secret),
            percent_encode(self.token_secret)
        )
    }

    /// Render the header value.
    pub fn build(&self) -> String {
        let timestamp = self.timestamp.to_string();
        let signature = self.signature();

        let mut params: Vec<(&str, String)> = vec![
            ("oauth_consumer_key", percent_encode(self.consumer_key)),
            ("oauth_nonce", percent_encode(&self.nonce)),
            ("oauth_signature", signature),
            ("oauth_signature_method", "PLAINTEXT".to_string()),
            ("oauth_timestamp", timestamp),
        ];
        if let Some(token) = self.token {
            params.push(("oauth_token", percent_encode(token)));
        }
        if let Some(callback) = self.callback {
            params.push(("oauth_callback", percent_encode(callback)));
        }
        if let Some(verifier) = self.verifier {
            params.push(("oauth_verifier", percent_encode(verifier)));
        }
        params.push(("oauth_version", "1.0".to_string()));

        let fields: Vec<String> = params
            .into_iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect();
        format!("OAuth {}", fields.join(", "))
    }
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// RFC 3986 style encoding (spaces as `%20`)
fn percent_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Parse an `oauth_token=..&oauth_token_secret=..` response body.
pub fn parse_token_response(body: &str) -> Result<(String, String)> {
    let mut token = None;
    let mut secret = None;
    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "oauth_token" => token = Some(value.into_owned()),
            "oauth_token_secret" => secret = Some(value.into_owned()),
            _ => {}
        }
    }

    match (token, secret) {
        (Some(token), Some(secret)) => Ok((token, secret)),
        _ => Err(DiscogsError::Parse(format!(
            "token response missing oauth_token or oauth_token_secret: {body}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_token_header() {
        let header = OAuthHeader::new("key", "secret")
            .callback("oob")
            .fixed("abc123", 1_700_000_000)
            .build();

        assert_eq!(
            header,
            "OAuth oauth_consumer_key=\"key\", oauth_nonce=\"abc123\", \
             oauth_signature=\"secret&\", oauth_signature_method=\"PLAINTEXT\", \
             oauth_timestamp=\"1700000000\", oauth_callback=\"oob\", oauth_version=\"1.0\""
        );
    }

    #[test]
    fn test_token_signature_includes_token_secret() {
        let header = OAuthHeader::new("key", "secret")
            .token("tok", "tok secret")
            .verifier("v1");

        assert_eq!(header.signature(), "secret&tok%20secret");
        let value = header.build();
        assert!(value.contains("oauth_token=\"tok\""));
        assert!(value.contains("oauth_verifier=\"v1\""));
    }

    #[test]
    fn test_nonce_is_random() {
        let a = OAuthHeader::new("k", "s");
        let b = OAuthHeader::new("k", "s");
        assert_eq!(a.nonce.len(), NONCE_LEN);
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn test_parse_token_response() {
        let (token, secret) =
            parse_token_response("oauth_token=abc&oauth_token_secret=d%26f&oauth_callback_confirmed=true")
                .unwrap();
        assert_eq!(token, "abc");
        assert_eq!(secret, "d&f");

        assert!(matches!(
            parse_token_response("oauth_token=abc"),
            Err(DiscogsError::Parse(_))
        ));
    }
}
