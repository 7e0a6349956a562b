//! In-memory repository doubles for exercising the domain service without a
//! database. Writes are last-write-wins, listings follow the repository
//! ordering contract, and failures can be injected to simulate an
//! unavailable store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use heapless::String as HeaplessString;
use sqlx::Postgres;
use tokio::sync::RwLock;
use uuid::Uuid;

use helpdesk_core_api::domain::common_enums::{
    TicketCategory, TicketPriority, UserRole,
};
use helpdesk_core_api::domain::identity::Identity;
use helpdesk_core_api::domain::ticket_draft::TicketDraft;
use helpdesk_core_db::models::ticket::TicketModel;
use helpdesk_core_db::models::user::UserModel;
use helpdesk_core_db::repository::create::Create;
use helpdesk_core_db::repository::delete::Delete;
use helpdesk_core_db::repository::find_by_created_by::FindByCreatedBy;
use helpdesk_core_db::repository::find_by_email::FindByEmail;
use helpdesk_core_db::repository::find_by_id::FindById;
use helpdesk_core_db::repository::list_recent::ListRecent;
use helpdesk_core_db::repository::pagination::{Page, PageRequest};
use helpdesk_core_db::repository::update::Update;
use helpdesk_core_db::service::ticket_domain_service::TicketDomainService;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<HashMap<Uuid, TicketModel>>,
    fail_writes: AtomicBool,
}

impl InMemoryTicketRepository {
    /// Make every subsequent write fail, simulating a store outage.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.tickets.read().await.contains_key(&id)
    }

    fn check_writable(&self) -> Result<(), BoxError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err("store timed out".into())
        } else {
            Ok(())
        }
    }

    fn sorted(mut items: Vec<TicketModel>) -> Vec<TicketModel> {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        items
    }

    fn paginate(items: Vec<TicketModel>, page: PageRequest) -> Page<TicketModel> {
        let total = items.len();
        let items: Vec<TicketModel> = items
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect();
        Page::new(items, total, page.limit, page.offset)
    }
}

#[async_trait]
impl Create<Postgres, TicketModel> for InMemoryTicketRepository {
    async fn create(&self, item: TicketModel) -> Result<TicketModel, BoxError> {
        self.check_writable()?;
        self.tickets.write().await.insert(item.id, item.clone());
        Ok(item)
    }
}

#[async_trait]
impl FindById<Postgres, TicketModel> for InMemoryTicketRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TicketModel>, BoxError> {
        Ok(self.tickets.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl FindByCreatedBy<Postgres, TicketModel> for InMemoryTicketRepository {
    async fn find_by_created_by(
        &self,
        created_by: Uuid,
        page: PageRequest,
    ) -> Result<Page<TicketModel>, BoxError> {
        let owned: Vec<TicketModel> = self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| t.created_by == created_by)
            .cloned()
            .collect();
        Ok(Self::paginate(Self::sorted(owned), page))
    }
}

#[async_trait]
impl ListRecent<Postgres, TicketModel> for InMemoryTicketRepository {
    async fn list_recent(&self, page: PageRequest) -> Result<Page<TicketModel>, BoxError> {
        let all: Vec<TicketModel> = self.tickets.read().await.values().cloned().collect();
        Ok(Self::paginate(Self::sorted(all), page))
    }
}

#[async_trait]
impl Update<Postgres, TicketModel> for InMemoryTicketRepository {
    async fn update(&self, item: TicketModel) -> Result<TicketModel, BoxError> {
        self.check_writable()?;
        let mut tickets = self.tickets.write().await;
        if !tickets.contains_key(&item.id) {
            return Err(format!("ticket {} does not exist", item.id).into());
        }
        tickets.insert(item.id, item.clone());
        Ok(item)
    }
}

#[async_trait]
impl Delete<Postgres, TicketModel> for InMemoryTicketRepository {
    async fn delete(&self, id: Uuid) -> Result<bool, BoxError> {
        self.check_writable()?;
        Ok(self.tickets.write().await.remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, UserModel>>,
}

impl InMemoryUserRepository {
    pub async fn insert(&self, user: UserModel) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl FindById<Postgres, UserModel> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, BoxError> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}

#[async_trait]
impl FindByEmail<Postgres, UserModel> for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, BoxError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }
}

pub type TestService =
    TicketDomainService<Postgres, InMemoryTicketRepository, InMemoryUserRepository>;

pub struct TestHarness {
    pub service: TestService,
    pub tickets: Arc<InMemoryTicketRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

/// A domain service over empty in-memory stores.
pub fn harness() -> TestHarness {
    let tickets = Arc::new(InMemoryTicketRepository::default());
    let users = Arc::new(InMemoryUserRepository::default());
    let service = TicketDomainService::new(Arc::clone(&tickets), Arc::clone(&users));
    TestHarness {
        service,
        tickets,
        users,
    }
}

/// Register an account and return the identity it asserts.
pub async fn signup(harness: &TestHarness, email: &str, role: UserRole) -> Identity {
    let user = UserModel {
        id: Uuid::new_v4(),
        email: HeaplessString::try_from(email).unwrap(),
        display_name: None,
        role,
        created_at: Utc::now(),
    };
    let identity = user.identity();
    harness.users.insert(user).await;
    identity
}

pub fn draft(title: &str) -> TicketDraft {
    TicketDraft {
        title: title.to_string(),
        description: "Something is broken.".to_string(),
        priority: TicketPriority::High,
        category: TicketCategory::Technical,
        contact_email: "a@b.com".to_string(),
        contact_phone: None,
        due_date: None,
        department: None,
        impact: None,
        urgency: None,
        requires_onsite: false,
        additional_notes: None,
    }
}
