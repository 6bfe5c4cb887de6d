//! People involved in a delivery.
//!
//! Only the read side is modeled here: packages reference people by id and
//! use cases check that those ids resolve.

use chrono::{DateTime, Utc};
use common::{Entity, UniqueEntityId};
use serde::{Deserialize, Serialize};

/// Properties shared by every kind of person.
#[derive(Debug, Clone, Default)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

macro_rules! person {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            id: UniqueEntityId,
            name: String,
            email: String,
            created_at: DateTime<Utc>,
        }

        impl $name {
            pub fn create(props: NewPerson) -> Self {
                Self::create_with_id(props, UniqueEntityId::new())
            }

            pub fn create_with_id(props: NewPerson, id: UniqueEntityId) -> Self {
                Self {
                    id,
                    name: props.name,
                    email: props.email,
                    created_at: props.created_at.unwrap_or_else(Utc::now),
                }
            }

            pub fn name(&self) -> &str {
                &self.name
            }

            pub fn email(&self) -> &str {
                &self.email
            }

            pub fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }
        }

        impl Entity for $name {
            fn id(&self) -> UniqueEntityId {
                self.id
            }
        }
    };
}

person!(
    /// An administrator who registers packages and changes their status.
    AdminPerson
);

person!(
    /// A courier who picks up and delivers packages.
    DeliveryPerson
);

person!(
    /// The person a package is addressed to.
    RecipientPerson
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_person() {
        let person = DeliveryPerson::create(NewPerson {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            created_at: None,
        });

        assert_eq!(person.name(), "Ana");
        assert_eq!(person.email(), "ana@example.com");
    }

    #[test]
    fn test_create_with_id() {
        let id = UniqueEntityId::new();
        let admin = AdminPerson::create_with_id(NewPerson::default(), id);
        assert_eq!(admin.id(), id);
    }
}
