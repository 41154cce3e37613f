//! `UserGateway` over a local vector.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::info;
use tokio::sync::Mutex;

use super::{GatewayResult, RequestError, RequestErrorKind, UserGateway, announce, seed};
use crate::model::{AssignedId, CreateAck, PageResponse, UpdateAck, User, UserDraft};
use crate::notify::Notifier;

/// Clones share the same collection.
#[derive(Debug, Clone)]
pub struct InMemoryGateway<N> {
    users: Arc<Mutex<Vec<User>>>,
    latency: Duration,
    notifier: N,
}

fn user_not_found() -> RequestError {
    RequestError::not_found("User not found")
}

impl<N: Notifier> InMemoryGateway<N> {
    pub fn new(users: Vec<User>, notifier: N) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            latency: Duration::ZERO,
            notifier,
        }
    }

    /// Starts from the twelve demo users.
    pub fn seeded(notifier: N) -> Self {
        Self::new(seed::demo_users(), notifier)
    }

    /// Delays every call, to mimic a remote round trip.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }

    async fn pause(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
        }
    }

    async fn slice(&self, page: u32, per_page: u32) -> GatewayResult<PageResponse> {
        if page == 0 || per_page == 0 {
            return Err(RequestError::new(
                RequestErrorKind::Status(400),
                "page and per_page must be at least 1",
            ));
        }

        let users = self.users.lock().await;
        let total = users.len() as u64;
        let offset = (page as usize - 1).saturating_mul(per_page as usize);
        let data: Vec<User> = users
            .iter()
            .skip(offset)
            .take(per_page as usize)
            .cloned()
            .collect();
        let total_pages = u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX);

        Ok(PageResponse {
            page,
            per_page,
            total,
            total_pages,
            data,
        })
    }

    async fn find(&self, id: u64) -> GatewayResult<User> {
        self.users
            .lock()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(user_not_found)
    }

    async fn insert(&self, draft: &UserDraft) -> GatewayResult<CreateAck> {
        let mut users = self.users.lock().await;
        let id = users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        users.push(draft.clone().with_defaults().into_user(id, now));
        info!("InMemoryGateway: created user {id}");

        Ok(CreateAck {
            id: Some(AssignedId::Number(id)),
            created_at: Some(now),
        })
    }

    async fn merge(&self, id: u64, draft: &UserDraft) -> GatewayResult<UpdateAck> {
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(user_not_found)?;
        user.apply(draft);

        Ok(UpdateAck {
            updated_at: Some(Utc::now()),
        })
    }

    async fn remove(&self, id: u64) -> GatewayResult<()> {
        let mut users = self.users.lock().await;
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(user_not_found)?;
        users.remove(index);
        info!("InMemoryGateway: deleted user {id}");
        Ok(())
    }
}

impl<N: Notifier> UserGateway for InMemoryGateway<N> {
    async fn list_page(&self, page: u32, per_page: u32) -> GatewayResult<PageResponse> {
        self.pause().await;
        announce(&self.notifier, self.slice(page, per_page).await)
    }

    async fn get_one(&self, id: u64) -> GatewayResult<User> {
        self.pause().await;
        announce(&self.notifier, self.find(id).await)
    }

    async fn create(&self, draft: &UserDraft) -> GatewayResult<CreateAck> {
        self.pause().await;
        announce(&self.notifier, self.insert(draft).await)
    }

    async fn update(&self, id: u64, draft: &UserDraft) -> GatewayResult<UpdateAck> {
        self.pause().await;
        announce(&self.notifier, self.merge(id, draft).await)
    }

    async fn delete(&self, id: u64) -> GatewayResult<()> {
        self.pause().await;
        announce(&self.notifier, self.remove(id).await)
    }
}
