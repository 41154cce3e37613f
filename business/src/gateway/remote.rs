//! `UserGateway` over the remote users API.
//!
//! | verb      | request                              | success body        |
//! |-----------|--------------------------------------|---------------------|
//! | list page | `GET /users?page={p}&per_page={n}`   | `PageResponse`      |
//! | get one   | `GET /users/{id}`                    | `{ "data": User }`  |
//! | create    | `POST /users` (partial user JSON)    | `CreateAck`         |
//! | update    | `PUT /users/{id}` (partial user JSON)| `UpdateAck`         |
//! | delete    | `DELETE /users/{id}`                 | no content          |

use log::info;
use serde::de::DeserializeOwned;

use super::{GatewayResult, RequestError, RequestErrorKind, UserGateway, announce};
use crate::BusinessConfig;
use crate::http::{Client, HttpResult, Response};
use crate::model::{CreateAck, PageResponse, SingleResponse, UpdateAck, User, UserDraft};
use crate::notify::Notifier;

#[derive(Debug, Clone)]
pub struct HttpGateway<N> {
    client: Client,
    notifier: N,
}

impl<N: Notifier> HttpGateway<N> {
    pub fn new(config: &BusinessConfig, notifier: N) -> HttpResult<Self> {
        Ok(Self {
            client: Client::new(config)?,
            notifier,
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

fn ensure_success(response: &Response) -> GatewayResult<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(RequestError::from_status(
            response.status,
            response.error_message(),
        ))
    }
}

fn decode<T: DeserializeOwned>(response: &Response, what: &str) -> GatewayResult<T> {
    ensure_success(response)?;
    response.json().map_err(|e| {
        RequestError::new(
            RequestErrorKind::Decode,
            format!("Failed to parse {what}: {e}"),
        )
    })
}

impl<N: Notifier> HttpGateway<N> {
    async fn fetch_page(&self, page: u32, per_page: u32) -> GatewayResult<PageResponse> {
        let response = self
            .client
            .get("/users")
            .query("page", page)
            .query("per_page", per_page)
            .send()
            .await?;
        let body: PageResponse = decode(&response, "PageResponse")?;
        info!(
            "HttpGateway: page {} of {} ({} users, {} total)",
            body.page,
            body.total_pages,
            body.data.len(),
            body.total
        );
        Ok(body)
    }

    async fn fetch_one(&self, id: u64) -> GatewayResult<User> {
        let response = self.client.get(&format!("/users/{id}")).send().await?;
        let body: SingleResponse = decode(&response, "SingleResponse")?;
        Ok(body.data)
    }

    async fn post_user(&self, draft: &UserDraft) -> GatewayResult<CreateAck> {
        let response = self.client.post("/users").json(draft)?.send().await?;
        decode(&response, "CreateAck")
    }

    async fn put_user(&self, id: u64, draft: &UserDraft) -> GatewayResult<UpdateAck> {
        let response = self
            .client
            .put(&format!("/users/{id}"))
            .json(draft)?
            .send()
            .await?;
        decode(&response, "UpdateAck")
    }

    async fn delete_user(&self, id: u64) -> GatewayResult<()> {
        let response = self.client.delete(&format!("/users/{id}")).send().await?;
        ensure_success(&response)
    }
}

impl<N: Notifier> UserGateway for HttpGateway<N> {
    async fn list_page(&self, page: u32, per_page: u32) -> GatewayResult<PageResponse> {
        announce(&self.notifier, self.fetch_page(page, per_page).await)
    }

    async fn get_one(&self, id: u64) -> GatewayResult<User> {
        announce(&self.notifier, self.fetch_one(id).await)
    }

    async fn create(&self, draft: &UserDraft) -> GatewayResult<CreateAck> {
        announce(&self.notifier, self.post_user(draft).await)
    }

    async fn update(&self, id: u64, draft: &UserDraft) -> GatewayResult<UpdateAck> {
        announce(&self.notifier, self.put_user(id, draft).await)
    }

    async fn delete(&self, id: u64) -> GatewayResult<()> {
        announce(&self.notifier, self.delete_user(id).await)
    }
}
