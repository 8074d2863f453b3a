use super::*;

/// Tests counting stored pets.
///
/// Expected: Ok with 0 before and 2 after inserting two pets
#[tokio::test]
async fn counts_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Pet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    repo.upsert(&record("Dragon", "100")).await?;
    repo.upsert(&record("Unicorn", "200")).await?;
    repo.upsert(&record("DRAGON", "300")).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
