//! Property-based tests for the package state machine.

use common::UniqueEntityId;
use delivery::{NewPackage, Package, PackageAttachment, PackageError, PackageStatus};
use domain_events::AggregateRoot;
use proptest::prelude::*;

fn any_status() -> impl Strategy<Value = PackageStatus> {
    proptest::sample::select(PackageStatus::ALL.to_vec())
}

fn package_at(status: PackageStatus, with_attachment: bool) -> Package {
    let mut package = Package::create(NewPackage {
        status: Some(status),
        ..NewPackage::default()
    })
    .unwrap();

    if with_attachment {
        package.add_attachment(PackageAttachment::create(package.id(), UniqueEntityId::new()));
    }

    package
}

proptest! {
    #[test]
    fn transition_legality_matches_table(from in any_status(), to in any_status()) {
        let result = from.transition_to(to);

        if from.allowed_transitions().contains(&to) {
            prop_assert_eq!(result.unwrap(), to);
        } else {
            let is_invalid_transition =
                matches!(result, Err(PackageError::InvalidStatusTransition { .. }));
            prop_assert!(is_invalid_transition);
        }
    }

    #[test]
    fn terminal_states_are_closed(from in any_status(), to in any_status()) {
        if from.is_final_state() {
            prop_assert!(!from.can_transition_to(to));
        }
    }

    #[test]
    fn status_names_round_trip(status in any_status()) {
        prop_assert_eq!(PackageStatus::create(status.as_str()).unwrap(), status);
    }

    #[test]
    fn unknown_names_are_rejected(value in "[a-z_]{0,24}") {
        let known = PackageStatus::ALL.iter().any(|s| s.as_str() == value);
        prop_assert_eq!(PackageStatus::create(&value).is_ok(), known);
    }

    #[test]
    fn history_grows_by_one_per_successful_update(
        steps in proptest::collection::vec(any_status(), 1..20),
    ) {
        let mut package = package_at(PackageStatus::Pending, true);
        let author = UniqueEntityId::new();

        for next in steps {
            let before = package.histories().len();
            let previous = package.status();

            match package.update_status(next, author, None) {
                Ok(()) => {
                    prop_assert_eq!(package.histories().len(), before + 1);
                    prop_assert_eq!(package.status(), next);
                }
                Err(_) => {
                    prop_assert_eq!(package.histories().len(), before);
                    prop_assert_eq!(package.status(), previous);
                }
            }

            prop_assert_eq!(package.delivered_at().is_some(), package.status().is_delivered());
        }
    }

    #[test]
    fn delivery_requires_attachment(from in any_status()) {
        let mut package = package_at(from, false);
        let result = package.update_status(PackageStatus::Delivered, UniqueEntityId::new(), None);

        prop_assert!(matches!(result, Err(PackageError::MissingAttachment)));
        prop_assert!(package.delivered_at().is_none());
    }
}
