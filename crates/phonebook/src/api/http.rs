//! # HTTP Contacts API
//!
//! [`ContactsApi`] over JSON/REST with `reqwest`.

use crate::api::{ContactsApi, RequestFailed};
use crate::config::PhonebookConfig;
use crate::model::{Contact, ContactId, NewContact};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

/// Body of a delete response; servers echo either the full contact or just its id.
#[derive(Debug, Deserialize)]
struct RemovedContact {
    id: ContactId,
}

/// Client for a contacts REST backend rooted at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpContactsApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpContactsApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &PhonebookConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// `{base}/contacts` or `{base}/contacts/{id}`, keeping any path prefix of the base URL.
    fn endpoint(&self, id: Option<&ContactId>) -> Result<Url, RequestFailed> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| RequestFailed::new(format!("Invalid base URL: {}", self.base_url)))?;
            segments.pop_if_empty().push("contacts");
            if let Some(id) = id {
                segments.push(&id.0);
            }
        }
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RequestFailed> {
        let status = response.status();
        if !status.is_success() {
            debug!(%status, "Request rejected by server");
            return Err(RequestFailed::status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ContactsApi for HttpContactsApi {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<Contact>, RequestFailed> {
        let url = self.endpoint(None)?;
        debug!(%url, "GET request");
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self))]
    async fn create(&self, contact: &NewContact) -> Result<Contact, RequestFailed> {
        let url = self.endpoint(None)?;
        debug!(%url, "POST request");
        let response = self.client.post(url).json(contact).send().await?;
        Self::read_json(response).await
    }

    #[instrument(skip(self))]
    async fn remove_by_id(&self, id: &ContactId) -> Result<ContactId, RequestFailed> {
        let url = self.endpoint(Some(id))?;
        debug!(%url, "DELETE request");
        let response = self.client.delete(url).send().await?;
        let removed: RemovedContact = Self::read_json(response).await?;
        if removed.id != *id {
            debug!(requested = %id, echoed = %removed.id, "Server echoed a different id");
        }
        Ok(id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn api_for(server: &mockito::ServerGuard) -> HttpContactsApi {
        HttpContactsApi::new(Url::parse(&server.url()).unwrap())
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = HttpContactsApi::new(Url::parse("https://example.com/api/v1/").unwrap());
        assert_eq!(
            api.endpoint(None).unwrap().as_str(),
            "https://example.com/api/v1/contacts"
        );
        assert_eq!(
            api.endpoint(Some(&ContactId::from("a b"))).unwrap().as_str(),
            "https://example.com/api/v1/contacts/a%20b"
        );
    }

    #[tokio::test]
    async fn test_fetch_all_in_server_order() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/contacts")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":"2","name":"Hermione Kline","phone":"443-89-12"},
                    {"id":"1","name":"Rosie Simpson","phone":"459-12-56"}]"#,
            )
            .expect(1)
            .create_async()
            .await;

        let contacts = api_for(&server).fetch_all().await.unwrap();

        assert_eq!(
            contacts,
            vec![
                Contact::new("2", "Hermione Kline", "443-89-12"),
                Contact::new("1", "Rosie Simpson", "459-12-56"),
            ]
        );
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_posts_json_payload() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("POST", "/contacts")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "Eden Clements",
                "phone": "645-17-79"
            })))
            .with_status(201)
            .with_body(r#"{"id":"42","name":"Eden Clements","phone":"645-17-79"}"#)
            .expect(1)
            .create_async()
            .await;

        let created = api_for(&server)
            .create(&NewContact::new("Eden Clements", "645-17-79"))
            .await
            .unwrap();

        assert_eq!(created, Contact::new("42", "Eden Clements", "645-17-79"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_remove_accepts_id_only_body() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/contacts/42")
            .with_status(200)
            .with_body(r#"{"id":"42"}"#)
            .expect(1)
            .create_async()
            .await;

        let removed = api_for(&server)
            .remove_by_id(&ContactId::from("42"))
            .await
            .unwrap();

        assert_eq!(removed, ContactId::from("42"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_status_failure_maps_to_request_failed() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("DELETE", "/contacts/404")
            .with_status(404)
            .with_body("Not found")
            .create_async()
            .await;

        let err = api_for(&server)
            .remove_by_id(&ContactId::from("404"))
            .await
            .unwrap_err();

        assert_eq!(err, RequestFailed::new("Request failed with status code 404"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_request_failed() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/contacts")
            .with_status(200)
            .with_body(r#"{"not":"a list"}"#)
            .create_async()
            .await;

        let err = api_for(&server).fetch_all().await.unwrap_err();

        assert!(err.message.starts_with("Malformed response"), "{err}");
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_request_failed() {
        // Port 1 is reserved and nothing listens on it.
        let api = HttpContactsApi::new(Url::parse("http://127.0.0.1:1").unwrap());

        let err = api.fetch_all().await.unwrap_err();

        assert!(err.message.starts_with("Network Error"), "{err}");
    }
}
