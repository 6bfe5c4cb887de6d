//! Integration tests for notifications triggered by package events.

use std::sync::Arc;

use common::{Entity, UniqueEntityId};
use delivery::{
    AdminPeopleRepository, AdminPerson, AssignPackageToADeliveryPerson,
    AssignPackageToADeliveryPersonRequest, DeliveryPeopleRepository, DeliveryPerson,
    InMemoryAdminPeopleRepository, InMemoryDeliveryPeopleRepository,
    InMemoryPackagesHistoryRepository, InMemoryPackagesRepository,
    InMemoryRecipientPeopleRepository, NewPackage, NewPerson, Package, PackageEvent,
    PackageEventKind, PackagesRepository, RecipientPeopleRepository, RecipientPerson,
    RegisterPackage, RegisterPackageRequest,
};
use domain_events::{AggregateRoot, DomainEvents};
use notification::{
    InMemoryNotificationsRepository, OnPackageAssignedSendNotification,
    OnPackageRegisteredSendNotification, SendNotification,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Fixture {
    events: Arc<DomainEvents<PackageEvent>>,
    packages: Arc<InMemoryPackagesRepository>,
    admins: Arc<InMemoryAdminPeopleRepository>,
    couriers: Arc<InMemoryDeliveryPeopleRepository>,
    recipients: Arc<InMemoryRecipientPeopleRepository>,
    notifications: Arc<InMemoryNotificationsRepository>,
    admin: AdminPerson,
    courier: DeliveryPerson,
    recipient: RecipientPerson,
}

impl Fixture {
    async fn new() -> Self {
        init_tracing();

        let events = Arc::new(DomainEvents::new());
        let packages = Arc::new(InMemoryPackagesRepository::new(
            Arc::new(InMemoryPackagesHistoryRepository::new()),
            events.clone(),
        ));
        let notifications = Arc::new(InMemoryNotificationsRepository::new());
        let send_notification = Arc::new(SendNotification::new(notifications.clone()));

        OnPackageRegisteredSendNotification::subscribe(
            &events,
            packages.clone(),
            send_notification.clone(),
        )
        .await;
        OnPackageAssignedSendNotification::subscribe(&events, packages.clone(), send_notification)
            .await;

        let admins = Arc::new(InMemoryAdminPeopleRepository::new());
        let couriers = Arc::new(InMemoryDeliveryPeopleRepository::new());
        let recipients = Arc::new(InMemoryRecipientPeopleRepository::new());

        let admin = AdminPerson::create(NewPerson::default());
        let courier = DeliveryPerson::create(NewPerson::default());
        let recipient = RecipientPerson::create(NewPerson::default());
        AdminPeopleRepository::register(admins.as_ref(), admin.clone())
            .await
            .unwrap();
        DeliveryPeopleRepository::register(couriers.as_ref(), courier.clone())
            .await
            .unwrap();
        RecipientPeopleRepository::register(recipients.as_ref(), recipient.clone())
            .await
            .unwrap();

        Self {
            events,
            packages,
            admins,
            couriers,
            recipients,
            notifications,
            admin,
            courier,
            recipient,
        }
    }

    async fn register(&self, name: &str) -> Package {
        RegisterPackage::new(
            self.packages.clone(),
            self.couriers.clone(),
            self.admins.clone(),
            self.recipients.clone(),
        )
        .execute(RegisterPackageRequest {
            name: name.to_string(),
            recipient_id: self.recipient.id(),
            recipient_address: "10 Downing Street".to_string(),
            postal_code: "SW1A 2AA".to_string(),
            delivery_person_id: None,
            author_id: self.admin.id(),
        })
        .await
        .unwrap()
    }
}

#[tokio::test]
async fn registration_sends_notification_with_truncated_name() {
    let fixture = Fixture::new().await;

    let package = fixture.register("Ergonomic office chair with headrest").await;

    let notifications = fixture.notifications.items().await;
    assert_eq!(notifications.len(), 1);

    let notification = &notifications[0];
    assert_eq!(notification.recipient_id(), fixture.recipient.id());
    assert_eq!(notification.title(), "Package registered");
    assert_eq!(
        notification.content(),
        format!(
            "Your package \"Ergonomic office cha...\" has been registered successfully. Package code: {}",
            package.code()
        )
    );
}

#[tokio::test]
async fn short_names_are_not_truncated() {
    let fixture = Fixture::new().await;

    fixture.register("Book").await;

    let notifications = fixture.notifications.items().await;
    assert!(notifications[0].content().contains("\"Book\""));
    assert!(!notifications[0].content().contains("..."));
}

#[tokio::test]
async fn assignment_sends_notification() {
    let fixture = Fixture::new().await;
    let package = fixture.register("Standing desk frame").await;

    AssignPackageToADeliveryPerson::new(
        fixture.packages.clone(),
        fixture.couriers.clone(),
        fixture.admins.clone(),
    )
    .execute(AssignPackageToADeliveryPersonRequest {
        package_id: package.id(),
        delivery_person_id: fixture.courier.id(),
        author_id: fixture.admin.id(),
        description: None,
    })
    .await
    .unwrap();

    let notifications = fixture.notifications.items().await;
    assert_eq!(notifications.len(), 2);

    let assigned = &notifications[1];
    assert_eq!(assigned.title(), "Package assigned to a delivery person");
    assert_eq!(
        assigned.content(),
        format!(
            "Delivery person was assigned to get a package: Standing d..., the package code is: {}",
            package.code()
        )
    );
}

#[tokio::test]
async fn assignment_description_becomes_title() {
    let fixture = Fixture::new().await;
    let package = fixture.register("Lamp").await;

    AssignPackageToADeliveryPerson::new(
        fixture.packages.clone(),
        fixture.couriers.clone(),
        fixture.admins.clone(),
    )
    .execute(AssignPackageToADeliveryPersonRequest {
        package_id: package.id(),
        delivery_person_id: fixture.courier.id(),
        author_id: fixture.admin.id(),
        description: Some("Courier on the way".to_string()),
    })
    .await
    .unwrap();

    let notifications = fixture.notifications.items().await;
    assert_eq!(notifications[1].title(), "Courier on the way");
}

#[tokio::test]
async fn missing_package_is_skipped() {
    let fixture = Fixture::new().await;

    // Marked and dispatched without ever being stored.
    let mut package = Package::create(NewPackage {
        name: "Ghost parcel".to_string(),
        recipient_id: fixture.recipient.id(),
        author_id: fixture.admin.id(),
        ..NewPackage::default()
    })
    .unwrap();
    package.mark_as_registered(fixture.admin.id());

    fixture.events.mark_entity_for_dispatch(&mut package).await;
    let dispatched = fixture
        .events
        .dispatch_events_for_entity(package.id())
        .await
        .unwrap();

    assert_eq!(dispatched, 1);
    assert!(fixture.notifications.is_empty().await);
    assert!(fixture.packages.find_by_id(package.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn disabled_dispatch_sends_nothing() {
    let fixture = Fixture::new().await;
    fixture.events.set_should_run(false);

    fixture.register("Quiet parcel").await;

    assert!(fixture.notifications.is_empty().await);
    assert_eq!(
        fixture
            .events
            .handler_count(PackageEventKind::Registered)
            .await,
        1
    );
}
