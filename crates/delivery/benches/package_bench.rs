use std::sync::Arc;

use common::{Entity, UniqueEntityId};
use criterion::{Criterion, criterion_group, criterion_main};
use delivery::{
    AdminPeopleRepository, AdminPerson, InMemoryAdminPeopleRepository,
    InMemoryDeliveryPeopleRepository, InMemoryPackagesHistoryRepository,
    InMemoryPackagesRepository, InMemoryRecipientPeopleRepository, NewPackage, NewPerson, Package,
    PackageAttachment, PackageCode, PackageStatus, RecipientPeopleRepository, RecipientPerson,
    RegisterPackage, RegisterPackageRequest,
};
use domain_events::{AggregateRoot, DomainEvents};

fn bench_code_generation(c: &mut Criterion) {
    c.bench_function("delivery/code_generate", |b| {
        b.iter(PackageCode::generate);
    });

    let code = PackageCode::generate().to_string();
    c.bench_function("delivery/code_validate", |b| {
        b.iter(|| PackageCode::create(&code).unwrap());
    });
}

fn bench_status_lifecycle(c: &mut Criterion) {
    let path = [
        PackageStatus::AwaitingPickup,
        PackageStatus::PickedUp,
        PackageStatus::AtDistributionCenter,
        PackageStatus::InTransit,
        PackageStatus::OutForDelivery,
        PackageStatus::Delivered,
    ];

    c.bench_function("delivery/full_status_lifecycle", |b| {
        b.iter(|| {
            let mut package = Package::create(NewPackage::default()).unwrap();
            package.add_attachment(PackageAttachment::create(package.id(), UniqueEntityId::new()));
            let author = UniqueEntityId::new();

            for status in path {
                package.update_status(status, author, None).unwrap();
            }
            package
        });
    });
}

fn bench_register_package(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let histories = Arc::new(InMemoryPackagesHistoryRepository::new());
    let packages = Arc::new(InMemoryPackagesRepository::new(
        histories,
        Arc::new(DomainEvents::new()),
    ));
    let admins = Arc::new(InMemoryAdminPeopleRepository::new());
    let couriers = Arc::new(InMemoryDeliveryPeopleRepository::new());
    let recipients = Arc::new(InMemoryRecipientPeopleRepository::new());

    let admin = AdminPerson::create(NewPerson::default());
    let recipient = RecipientPerson::create(NewPerson::default());
    rt.block_on(async {
        AdminPeopleRepository::register(admins.as_ref(), admin.clone())
            .await
            .unwrap();
        RecipientPeopleRepository::register(recipients.as_ref(), recipient.clone())
            .await
            .unwrap();
    });

    let use_case = RegisterPackage::new(packages, couriers, admins, recipients);

    c.bench_function("delivery/register_package", |b| {
        b.iter(|| {
            rt.block_on(async {
                use_case
                    .execute(RegisterPackageRequest {
                        name: "Bench parcel".to_string(),
                        recipient_id: recipient.id(),
                        recipient_address: "1 Bench Road".to_string(),
                        postal_code: "00000".to_string(),
                        delivery_person_id: None,
                        author_id: admin.id(),
                    })
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_code_generation,
    bench_status_lifecycle,
    bench_register_package
);
criterion_main!(benches);
