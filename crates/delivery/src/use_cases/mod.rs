//! Application use cases.

mod assign_package;
mod register_package;
mod register_package_history;
mod update_package_status;

pub use assign_package::{AssignPackageToADeliveryPerson, AssignPackageToADeliveryPersonRequest};
pub use register_package::{RegisterPackage, RegisterPackageRequest};
pub use register_package_history::{RegisterPackageHistory, RegisterPackageHistoryRequest};
pub use update_package_status::{UpdatePackageStatus, UpdatePackageStatusRequest};
