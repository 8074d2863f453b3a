use super::*;

/// Tests inserting a new pet.
///
/// Expected: Ok with every field stored as given
#[tokio::test]
async fn inserts_new_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut pet = record("T-Rex", "5000");
    pet.image_url = Some("https://cdn.example/t-rex.png".to_string());
    pet.message_id = Some("123".to_string());

    let stored = PetRepository::new(db).upsert(&pet).await?;

    assert_eq!(stored, pet);

    Ok(())
}

/// Tests updating an existing pet by normalized key.
///
/// Verifies that the update overwrites the data columns, clears a removed image
/// and keeps the row's position ahead of later pets.
///
/// Expected: Ok with one row per key and original order preserved
#[tokio::test]
async fn updates_existing_pet_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pet::PetFactory::new(db)
        .name("Dragon")
        .value("100")
        .image_url(Some("https://cdn.example/dragon.png"))
        .build()
        .await?;
    factory::create_pet_named(db, "Unicorn", "200").await?;

    let repo = PetRepository::new(db);
    let mut update = record("dragon", "750");
    update.demand = None;
    repo.upsert(&update).await?;

    let pets = repo.get_all().await?;
    assert_eq!(pets.len(), 2);
    assert_eq!(pets[0].value, "750");
    assert_eq!(pets[0].demand, None);
    assert_eq!(pets[0].image_url, None);
    assert_eq!(pets[1].name, "Unicorn");

    Ok(())
}
