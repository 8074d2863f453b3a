use super::*;

/// Tests reading pets back in insertion order.
///
/// Verifies that rows come back ordered by id regardless of name ordering.
///
/// Expected: Ok with pets in the order they were created
#[tokio::test]
async fn returns_pets_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_pet_named(db, "Zebra", "10").await?;
    factory::create_pet_named(db, "Ant", "20").await?;
    factory::create_pet_named(db, "Moth", "30").await?;

    let pets = PetRepository::new(db).get_all().await?;

    let names: Vec<_> = pets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Zebra", "Ant", "Moth"]);

    Ok(())
}

/// Tests reading from an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pets = PetRepository::new(db).get_all().await?;

    assert!(pets.is_empty());

    Ok(())
}
