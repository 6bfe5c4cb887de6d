//! Parcel delivery domain.
//!
//! This crate provides:
//! - `Package` aggregate with its status state machine and audit history
//! - `PackageEvent` domain events raised on registration and assignment
//! - Repository contracts and in-memory implementations
//! - Use cases for registering, assigning and moving packages

pub mod error;
pub mod memory;
pub mod package;
pub mod people;
pub mod repositories;
pub mod use_cases;

pub use error::DeliveryError;
pub use memory::{
    InMemoryAdminPeopleRepository, InMemoryDeliveryPeopleRepository,
    InMemoryPackagesHistoryRepository, InMemoryPackagesRepository, InMemoryPeopleRepository,
    InMemoryRecipientPeopleRepository,
};
pub use package::{
    NewPackage, NewPackageHistory, Package, PackageAttachment, PackageCode, PackageError,
    PackageEvent, PackageEventData, PackageEventKind, PackageHistory, PackageHistoryList,
    PackageStatus,
};
pub use people::{AdminPerson, DeliveryPerson, NewPerson, RecipientPerson};
pub use repositories::{
    AdminPeopleRepository, DeliveryPeopleRepository, PackagesHistoryRepository,
    PackagesRepository, RecipientPeopleRepository, RepositoryError,
};
pub use use_cases::{
    AssignPackageToADeliveryPerson, AssignPackageToADeliveryPersonRequest, RegisterPackage,
    RegisterPackageHistory, RegisterPackageHistoryRequest, RegisterPackageRequest,
    UpdatePackageStatus, UpdatePackageStatusRequest,
};
