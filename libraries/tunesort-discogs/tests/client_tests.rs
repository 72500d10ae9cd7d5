//! Tests for the Discogs client against a mock server.

use tunesort_core::{ArtistHit, ArtworkProvider};
use tunesort_discogs::{AccessTokens, DiscogsClient, DiscogsConfig, DiscogsError};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_AGENT: &str = "tunesort-test/1.0";

fn config(server: &MockServer) -> DiscogsConfig {
    DiscogsConfig::new(USER_AGENT, "consumer-key", "consumer-secret").with_base_url(server.uri())
}

fn tokens() -> AccessTokens {
    AccessTokens {
        token: "access-token".to_string(),
        secret: "access-secret".to_string(),
    }
}

// =============================================================================
// OAuth Flow Tests
// =============================================================================

mod oauth_flow {
    use super::*;

    #[tokio::test]
    async fn test_request_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oauth/request_token"))
            .and(header("User-Agent", USER_AGENT))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "oauth_token=req-token&oauth_token_secret=req-secret&oauth_callback_confirmed=true",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = DiscogsClient::new(config(&server)).unwrap();
        let pending = client.request_token().await.unwrap();

        assert_eq!(pending.token, "req-token");
        assert_eq!(pending.secret, "req-secret");
        assert_eq!(
            pending.authorize_url,
            "https://www.discogs.com/oauth/authorize?oauth_token=req-token"
        );
    }

    #[tokio::test]
    async fn test_exchange_verifier() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oauth/request_token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("oauth_token=req-token&oauth_token_secret=req-secret"),
            )
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .and(header_exists("Authorization"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("oauth_token=access-token&oauth_token_secret=access-secret"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = DiscogsClient::new(config(&server)).unwrap();
        let pending = client.request_token().await.unwrap();
        let tokens = client.exchange_verifier(&pending, " ABC123 \n").await.unwrap();

        assert_eq!(tokens, super::tokens());
    }

    #[tokio::test]
    async fn test_rejected_verifier_is_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/access_token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid verifier"))
            .mount(&server)
            .await;

        let client = DiscogsClient::new(config(&server)).unwrap();
        let pending = tunesort_discogs::PendingAuthorization {
            token: "req-token".to_string(),
            secret: "req-secret".to_string(),
            authorize_url: String::new(),
        };
        let err = client.exchange_verifier(&pending, "wrong").await.unwrap_err();

        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_verify_identity() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oauth/identity"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 42,
                "username": "collector",
                "resource_url": "https://api.discogs.com/users/collector",
                "consumer_name": "tunesort"
            })))
            .mount(&server)
            .await;

        let session = DiscogsClient::new(config(&server).with_tokens(tokens()))
            .unwrap()
            .session()
            .unwrap();
        let identity = session.verify_identity().await.unwrap();

        assert_eq!(identity.id, 42);
        assert_eq!(identity.username, "collector");
    }

    #[tokio::test]
    async fn test_revoked_tokens() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/oauth/identity"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "You must authenticate to access this resource."
            })))
            .mount(&server)
            .await;

        let session = DiscogsClient::new(config(&server).with_tokens(tokens()))
            .unwrap()
            .session()
            .unwrap();
        let err = session.verify_identity().await.unwrap_err();

        assert!(matches!(err, DiscogsError::Unauthorized(_)));
    }
}

// =============================================================================
// Artwork Provider Tests
// =============================================================================

mod artwork {
    use super::*;

    #[tokio::test]
    async fn test_search_artist() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/database/search"))
            .and(query_param("q", "Artist A"))
            .and(query_param("type", "artist"))
            .and(header("User-Agent", USER_AGENT))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": {"page": 1, "pages": 1, "items": 2},
                "results": [
                    {"id": 1, "title": "Artist A", "type": "artist", "resource_url": format!("{}/artists/1", server.uri())},
                    {"id": 2, "title": "Artist A (2)", "type": "artist", "resource_url": format!("{}/artists/2", server.uri())}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = DiscogsClient::new(config(&server).with_tokens(tokens()))
            .unwrap()
            .session()
            .unwrap();
        let hits = session.search_artist("Artist A").await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].title, "Artist A (2)");
    }

    #[tokio::test]
    async fn test_empty_search() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/database/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pagination": {"page": 1, "pages": 0, "items": 0},
                "results": []
            })))
            .mount(&server)
            .await;

        let session = DiscogsClient::new(config(&server).with_tokens(tokens()))
            .unwrap()
            .session()
            .unwrap();

        assert!(session.search_artist("Nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_artist_images_and_fetch() {
        let server = MockServer::start().await;
        let image_uri = format!("{}/images/artist-1.jpg", server.uri());

        Mock::given(method("GET"))
            .and(path("/artists/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1,
                "name": "Artist A",
                "images": [
                    {"type": "primary", "uri": image_uri.clone(), "width": 600, "height": 600},
                    {"type": "secondary", "uri": format!("{}/images/other.jpg", server.uri())}
                ]
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/images/artist-1.jpg"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]))
            .mount(&server)
            .await;

        let session = DiscogsClient::new(config(&server).with_tokens(tokens()))
            .unwrap()
            .session()
            .unwrap();
        let hit = ArtistHit {
            id: 1,
            title: "Artist A".to_string(),
            resource_url: format!("{}/artists/1", server.uri()),
        };

        let images = session.artist_images(&hit).await.unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], image_uri);

        let bytes = session.fetch_image(&images[0]).await.unwrap();
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[tokio::test]
    async fn test_rate_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/database/search"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "15"))
            .mount(&server)
            .await;

        let session = DiscogsClient::new(config(&server).with_tokens(tokens()))
            .unwrap()
            .session()
            .unwrap();
        let err = session.search("Artist A").await.unwrap_err();

        assert!(matches!(
            err,
            DiscogsError::RateLimited {
                retry_after_secs: 15
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_image_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/images/gone.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let session = DiscogsClient::new(config(&server).with_tokens(tokens()))
            .unwrap()
            .session()
            .unwrap();
        let err = session
            .fetch_image(&format!("{}/images/gone.jpg", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, tunesort_core::TuneError::Provider(_)));
    }
}
