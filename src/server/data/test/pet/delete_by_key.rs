use super::*;

/// Tests deleting a pet by a differently formatted name.
///
/// Expected: Ok(true) and the other pets stay in order
#[tokio::test]
async fn deletes_pet_by_normalized_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_pet_named(db, "Zebra", "1").await?;
    factory::create_pet_named(db, "Golden Dragon", "900").await?;
    factory::create_pet_named(db, "Ant", "2").await?;

    let repo = PetRepository::new(db);
    assert!(repo.delete_by_key("  golden   DRAGON").await?);

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Zebra", "Ant"]);

    Ok(())
}

/// Tests deleting a pet that does not exist.
///
/// Expected: Ok(false) and nothing removed
#[tokio::test]
async fn returns_false_for_unknown_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    repo.upsert(&record("Unicorn", "200")).await?;

    assert!(!repo.delete_by_key("Dragon").await?);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
