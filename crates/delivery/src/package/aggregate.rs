//! Package aggregate implementation.

use chrono::{DateTime, Utc};
use common::UniqueEntityId;
use domain_events::AggregateRoot;
use serde::{Deserialize, Serialize};

use super::{
    NewPackageHistory, PackageAttachment, PackageCode, PackageError, PackageEvent,
    PackageHistory, PackageHistoryList, PackageStatus,
};

const DEFAULT_STATUS_CHANGE_DESCRIPTION: &str = "Package status changed";
const REGISTERED_DESCRIPTION: &str = "Package registered";

/// Properties used to create a [`Package`].
///
/// Optional fields fall back to the values of a freshly registered package.
#[derive(Debug, Clone, Default)]
pub struct NewPackage {
    pub name: String,
    /// Existing code, validated on creation. Generated when absent.
    pub code: Option<String>,
    pub recipient_id: UniqueEntityId,
    pub recipient_address: String,
    pub postal_code: String,
    pub author_id: UniqueEntityId,
    pub delivery_person_id: Option<UniqueEntityId>,
    pub status: Option<PackageStatus>,
    pub attachment: Option<PackageAttachment>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub histories: Option<PackageHistoryList>,
}

/// Package aggregate root.
///
/// Owns its status, assignment, proof of delivery and audit history. All
/// mutation goes through the methods below; each lifecycle change appends a
/// [`PackageHistory`] entry and some raise a [`PackageEvent`] that is handed
/// to the event bus when the package is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    id: UniqueEntityId,
    name: String,
    code: PackageCode,
    recipient_id: UniqueEntityId,
    recipient_address: String,
    postal_code: String,
    /// Admin who registered the package.
    author_id: UniqueEntityId,
    delivery_person_id: Option<UniqueEntityId>,
    status: PackageStatus,
    attachment: Option<PackageAttachment>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
    /// Set only when the package enters `delivered`.
    delivered_at: Option<DateTime<Utc>>,
    histories: PackageHistoryList,

    /// Events raised since the package was last persisted.
    #[serde(skip)]
    domain_events: Vec<PackageEvent>,
}

impl Package {
    /// Creates a package with a fresh identity.
    pub fn create(props: NewPackage) -> Result<Self, PackageError> {
        Self::create_with_id(props, UniqueEntityId::new())
    }

    /// Creates a package with a known identity. Raises no event.
    pub fn create_with_id(props: NewPackage, id: UniqueEntityId) -> Result<Self, PackageError> {
        let code = match props.code {
            Some(code) => PackageCode::create(&code)?,
            None => PackageCode::generate(),
        };

        Ok(Self {
            id,
            name: props.name,
            code,
            recipient_id: props.recipient_id,
            recipient_address: props.recipient_address,
            postal_code: props.postal_code,
            author_id: props.author_id,
            delivery_person_id: props.delivery_person_id,
            status: props.status.unwrap_or_default(),
            attachment: props.attachment,
            created_at: props.created_at.unwrap_or_else(Utc::now),
            updated_at: props.updated_at,
            delivered_at: props.delivered_at,
            histories: props.histories.unwrap_or_default(),
            domain_events: Vec::new(),
        })
    }

    /// Moves the package to `new_status`.
    ///
    /// Delivering requires an attachment; that check runs before the
    /// transition table is consulted.
    pub fn update_status(
        &mut self,
        new_status: PackageStatus,
        author_id: UniqueEntityId,
        description: Option<String>,
    ) -> Result<(), PackageError> {
        if new_status.is_delivered() && self.attachment.is_none() {
            return Err(PackageError::MissingAttachment);
        }

        let previous = self.status;
        self.status = previous.transition_to(new_status)?;

        let now = Utc::now();
        self.updated_at = Some(now);
        if new_status.is_delivered() {
            self.delivered_at = Some(now);
        }

        self.record_history(
            Some(previous),
            author_id,
            Some(description.unwrap_or_else(|| DEFAULT_STATUS_CHANGE_DESCRIPTION.to_string())),
        );

        Ok(())
    }

    /// Assigns a delivery person and raises `PackageAssigned`.
    ///
    /// Does not change the status; `previous_status` is the caller's snapshot
    /// taken before any status update made as part of the same operation.
    pub fn assign_delivery_person(
        &mut self,
        delivery_person_id: UniqueEntityId,
        author_id: UniqueEntityId,
        previous_status: PackageStatus,
        description: Option<String>,
    ) {
        self.delivery_person_id = Some(delivery_person_id);
        self.updated_at = Some(Utc::now());

        let history = self.record_history(Some(previous_status), author_id, description);
        self.domain_events
            .push(PackageEvent::assigned(self.id, history));
    }

    /// Attaches proof of delivery. Records no history.
    pub fn add_attachment(&mut self, attachment: PackageAttachment) {
        self.attachment = Some(attachment);
        self.updated_at = Some(Utc::now());
    }

    /// Records the registration entry and raises `PackageRegistered`.
    pub fn mark_as_registered(&mut self, author_id: UniqueEntityId) {
        let history =
            self.record_history(None, author_id, Some(REGISTERED_DESCRIPTION.to_string()));
        self.domain_events
            .push(PackageEvent::registered(self.id, history));
    }

    /// Called by persistence once the new history entries are stored.
    pub fn mark_histories_persisted(&mut self) {
        self.histories.commit();
    }

    fn record_history(
        &mut self,
        from_status: Option<PackageStatus>,
        author_id: UniqueEntityId,
        description: Option<String>,
    ) -> PackageHistory {
        let history = PackageHistory::create(NewPackageHistory {
            package_id: self.id,
            from_status,
            to_status: self.status,
            author_id,
            delivery_person_id: self.delivery_person_id,
            description,
            created_at: None,
        });
        self.histories.add(history.clone());
        history
    }
}

// Query methods
impl Package {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &PackageCode {
        &self.code
    }

    pub fn recipient_id(&self) -> UniqueEntityId {
        self.recipient_id
    }

    pub fn recipient_address(&self) -> &str {
        &self.recipient_address
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn author_id(&self) -> UniqueEntityId {
        self.author_id
    }

    pub fn delivery_person_id(&self) -> Option<UniqueEntityId> {
        self.delivery_person_id
    }

    pub fn status(&self) -> PackageStatus {
        self.status
    }

    pub fn attachment(&self) -> Option<&PackageAttachment> {
        self.attachment.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_at
    }

    /// The full audit trail, oldest first.
    pub fn histories(&self) -> &PackageHistoryList {
        &self.histories
    }

    /// Returns true if the package is in a terminal state.
    pub fn is_final(&self) -> bool {
        self.status.is_final_state()
    }
}

impl AggregateRoot for Package {
    type Event = PackageEvent;

    fn id(&self) -> UniqueEntityId {
        self.id
    }

    fn domain_events(&self) -> &[PackageEvent] {
        &self.domain_events
    }

    fn take_domain_events(&mut self) -> Vec<PackageEvent> {
        std::mem::take(&mut self.domain_events)
    }
}
