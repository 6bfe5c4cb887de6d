//! In-memory repository implementations.
//!
//! These back the use-case tests and in-process wiring. They follow the same
//! contract a durable adapter has to honor: events are dispatched after the
//! write, and only history entries added since load are appended.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{Entity, UniqueEntityId};
use domain_events::{AggregateRoot, DomainEvents};
use tokio::sync::RwLock;
use tracing::debug;

use crate::package::{Package, PackageEvent, PackageHistory};
use crate::people::{AdminPerson, DeliveryPerson, RecipientPerson};
use crate::repositories::{
    AdminPeopleRepository, DeliveryPeopleRepository, PackagesHistoryRepository,
    PackagesRepository, RecipientPeopleRepository, RepositoryError,
};

/// In-memory package history storage.
#[derive(Clone, Default)]
pub struct InMemoryPackagesHistoryRepository {
    items: Arc<RwLock<Vec<PackageHistory>>>,
}

impl InMemoryPackagesHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl PackagesHistoryRepository for InMemoryPackagesHistoryRepository {
    async fn register(&self, history: PackageHistory) -> Result<PackageHistory, RepositoryError> {
        let mut items = self.items.write().await;

        if items.iter().any(|item| item.same_identity_as(&history)) {
            return Err(RepositoryError::AlreadyExists { id: history.id() });
        }

        items.push(history.clone());
        Ok(history)
    }

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<PackageHistory>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn find_many_by_package_id(
        &self,
        package_id: UniqueEntityId,
    ) -> Result<Vec<PackageHistory>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| item.package_id() == package_id)
            .cloned()
            .collect())
    }
}

/// In-memory package storage wired to an event bus.
#[derive(Clone)]
pub struct InMemoryPackagesRepository {
    packages: Arc<RwLock<HashMap<UniqueEntityId, Package>>>,
    histories: Arc<dyn PackagesHistoryRepository>,
    events: Arc<DomainEvents<PackageEvent>>,
}

impl InMemoryPackagesRepository {
    pub fn new(
        histories: Arc<dyn PackagesHistoryRepository>,
        events: Arc<DomainEvents<PackageEvent>>,
    ) -> Self {
        Self {
            packages: Arc::new(RwLock::new(HashMap::new())),
            histories,
            events,
        }
    }

    /// Returns the number of stored packages.
    pub async fn len(&self) -> usize {
        self.packages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.packages.read().await.is_empty()
    }

    /// Appends new history rows, stores the package, then dispatches its events.
    ///
    /// No lock is held while handlers run, so they may read this repository.
    async fn save(&self, package: &mut Package) -> Result<(), RepositoryError> {
        for history in package.histories().new_items() {
            self.histories.register(history.clone()).await?;
        }
        package.mark_histories_persisted();

        self.events.mark_entity_for_dispatch(package).await;

        let id = package.id();
        self.packages.write().await.insert(id, package.clone());
        debug!(package_id = %id, status = %package.status(), "Package stored");

        self.events.dispatch_events_for_entity(id).await?;
        Ok(())
    }
}

#[async_trait]
impl PackagesRepository for InMemoryPackagesRepository {
    async fn register(&self, mut package: Package) -> Result<Package, RepositoryError> {
        let id = package.id();
        if self.packages.read().await.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists { id });
        }

        self.save(&mut package).await?;
        Ok(package)
    }

    async fn find_by_id(&self, id: UniqueEntityId) -> Result<Option<Package>, RepositoryError> {
        Ok(self.packages.read().await.get(&id).cloned())
    }

    async fn update(&self, mut package: Package) -> Result<Option<Package>, RepositoryError> {
        if !self.packages.read().await.contains_key(&package.id()) {
            return Ok(None);
        }

        self.save(&mut package).await?;
        Ok(Some(package))
    }
}

/// In-memory storage for any kind of person.
#[derive(Clone)]
pub struct InMemoryPeopleRepository<P> {
    people: Arc<RwLock<HashMap<UniqueEntityId, P>>>,
}

impl<P> Default for InMemoryPeopleRepository<P> {
    fn default() -> Self {
        Self {
            people: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<P: Entity + Clone + Send + Sync> InMemoryPeopleRepository<P> {
    pub fn new() -> Self {
        Self::default()
    }

    async fn insert(&self, person: P) -> Result<P, RepositoryError> {
        let mut people = self.people.write().await;
        let id = person.id();

        if people.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists { id });
        }

        people.insert(id, person.clone());
        Ok(person)
    }

    async fn get(&self, id: UniqueEntityId) -> Option<P> {
        self.people.read().await.get(&id).cloned()
    }
}

pub type InMemoryAdminPeopleRepository = InMemoryPeopleRepository<AdminPerson>;
pub type InMemoryDeliveryPeopleRepository = InMemoryPeopleRepository<DeliveryPerson>;
pub type InMemoryRecipientPeopleRepository = InMemoryPeopleRepository<RecipientPerson>;

#[async_trait]
impl AdminPeopleRepository for InMemoryPeopleRepository<AdminPerson> {
    async fn register(&self, person: AdminPerson) -> Result<AdminPerson, RepositoryError> {
        self.insert(person).await
    }

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<AdminPerson>, RepositoryError> {
        Ok(self.get(id).await)
    }
}

#[async_trait]
impl DeliveryPeopleRepository for InMemoryPeopleRepository<DeliveryPerson> {
    async fn register(&self, person: DeliveryPerson) -> Result<DeliveryPerson, RepositoryError> {
        self.insert(person).await
    }

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<DeliveryPerson>, RepositoryError> {
        Ok(self.get(id).await)
    }
}

#[async_trait]
impl RecipientPeopleRepository for InMemoryPeopleRepository<RecipientPerson> {
    async fn register(
        &self,
        person: RecipientPerson,
    ) -> Result<RecipientPerson, RepositoryError> {
        self.insert(person).await
    }

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<RecipientPerson>, RepositoryError> {
        Ok(self.get(id).await)
    }
}
