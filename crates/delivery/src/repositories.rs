//! Repository contracts consumed by the delivery use cases.

use async_trait::async_trait;
use common::UniqueEntityId;
use domain_events::DispatchError;
use thiserror::Error;

use crate::package::{Package, PackageHistory};
use crate::people::{AdminPerson, DeliveryPerson, RecipientPerson};

/// Errors that can occur in a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A record with this id is already stored.
    #[error("Record already exists: {id}")]
    AlreadyExists { id: UniqueEntityId },

    /// The write succeeded but a subscriber failed while reacting to it.
    #[error("Domain event dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Storage for package aggregates.
///
/// `register` and `update` hand the package's pending events to the event
/// bus and dispatch them after the write, so subscribers have run by the
/// time the call returns. New history entries are appended to the
/// history repository as part of the same write.
#[async_trait]
pub trait PackagesRepository: Send + Sync {
    async fn register(&self, package: Package) -> Result<Package, RepositoryError>;

    async fn find_by_id(&self, id: UniqueEntityId) -> Result<Option<Package>, RepositoryError>;

    /// Returns `None` if no package with this id is stored.
    async fn update(&self, package: Package) -> Result<Option<Package>, RepositoryError>;
}

#[async_trait]
pub trait PackagesHistoryRepository: Send + Sync {
    async fn register(&self, history: PackageHistory) -> Result<PackageHistory, RepositoryError>;

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<PackageHistory>, RepositoryError>;

    /// Entries of one package, oldest first.
    async fn find_many_by_package_id(
        &self,
        package_id: UniqueEntityId,
    ) -> Result<Vec<PackageHistory>, RepositoryError>;
}

#[async_trait]
pub trait AdminPeopleRepository: Send + Sync {
    async fn register(&self, person: AdminPerson) -> Result<AdminPerson, RepositoryError>;

    async fn find_by_id(&self, id: UniqueEntityId)
    -> Result<Option<AdminPerson>, RepositoryError>;
}

#[async_trait]
pub trait DeliveryPeopleRepository: Send + Sync {
    async fn register(&self, person: DeliveryPerson) -> Result<DeliveryPerson, RepositoryError>;

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<DeliveryPerson>, RepositoryError>;
}

#[async_trait]
pub trait RecipientPeopleRepository: Send + Sync {
    async fn register(&self, person: RecipientPerson)
    -> Result<RecipientPerson, RepositoryError>;

    async fn find_by_id(
        &self,
        id: UniqueEntityId,
    ) -> Result<Option<RecipientPerson>, RepositoryError>;
}
