use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use models::{Credential, Id, NewService, Order, Role, Service, Session, User};
use tokio::sync::RwLock;

use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;
use crate::errors::ServiceError;
use crate::repository::MarketplaceRepository;

#[derive(Default)]
struct Counters {
    user: Id,
    service: Id,
    order: Id,
    session: Id,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<Id, User>,
    services: BTreeMap<Id, Service>,
    orders: BTreeMap<Id, Order>,
    credentials: HashMap<String, Credential>,
    sessions: HashMap<String, Session>,
    counters: Counters,
}

/// Advance a counter and return the new value. The counter is left untouched
/// when it would overflow.
fn next_id(counter: &mut Id, table: &str) -> Result<Id, ServiceError> {
    let next = counter
        .checked_add(1)
        .ok_or_else(|| ServiceError::Storage(format!("{table} id space exhausted")))?;
    *counter = next;
    Ok(next)
}

/// In-process store owning every marketplace table.
///
/// All tables and counters sit behind a single `RwLock`; each mutation holds
/// the write guard for its whole check-allocate-insert sequence.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl MarketplaceRepository for MemoryStore {
    async fn create_user(&self, username: &str, role: Role) -> Result<User, ServiceError> {
        let mut t = self.inner.write().await;
        let id = next_id(&mut t.counters.user, "user")?;
        let user = User { id, username: username.to_string(), role };
        t.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Id) -> Result<Option<User>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.users.get(&id).cloned())
    }

    async fn list_services(&self) -> Result<Vec<Service>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.services.values().cloned().collect())
    }

    async fn create_service(&self, input: NewService) -> Result<Service, ServiceError> {
        let mut t = self.inner.write().await;
        let id = next_id(&mut t.counters.service, "service")?;
        let service = input.with_id(id);
        t.services.insert(id, service.clone());
        Ok(service)
    }

    async fn create_order(&self, service_id: Id, consumer_id: Id) -> Result<Order, ServiceError> {
        let mut t = self.inner.write().await;
        let id = next_id(&mut t.counters.order, "order")?;
        let order = Order::pending(id, service_id, consumer_id);
        t.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn get_order(&self, id: Id) -> Result<Option<Order>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.orders.get(&id).cloned())
    }

    async fn complete_order(&self, id: Id) -> Result<Option<Order>, ServiceError> {
        let mut t = self.inner.write().await;
        Ok(t.orders.get_mut(&id).map(|order| {
            order.complete();
            order.clone()
        }))
    }
}

#[async_trait]
impl AuthRepository for MemoryStore {
    async fn register(&self, username: &str, password: &str, role: Role) -> Result<User, AuthError> {
        let mut t = self.inner.write().await;
        if t.credentials.contains_key(username) {
            return Err(AuthError::Conflict);
        }
        let id = next_id(&mut t.counters.user, "user")?;
        let user = User { id, username: username.to_string(), role };
        t.credentials.insert(
            username.to_string(),
            Credential { username: username.to_string(), password: password.to_string(), user_id: id },
        );
        t.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_credential(&self, username: &str) -> Result<Option<Credential>, AuthError> {
        let t = self.inner.read().await;
        Ok(t.credentials.get(username).cloned())
    }

    async fn find_user(&self, id: Id) -> Result<Option<User>, AuthError> {
        let t = self.inner.read().await;
        Ok(t.users.get(&id).cloned())
    }

    async fn last_registered_user(&self) -> Result<Option<User>, AuthError> {
        let t = self.inner.read().await;
        Ok(t.users.get(&t.counters.user).cloned())
    }

    async fn create_session(&self, user_id: Id) -> Result<Session, AuthError> {
        let mut t = self.inner.write().await;
        let id = next_id(&mut t.counters.session, "session")?;
        let session = Session { session_id: id.to_string(), user_id };
        t.sessions.insert(session.session_id.clone(), session.clone());
        Ok(session)
    }

    async fn find_session(&self, session_id: &str) -> Result<Option<Session>, AuthError> {
        let t = self.inner.read().await;
        Ok(t.sessions.get(session_id).cloned())
    }
}
