//! Behavior every [`PartRepository`] backend must share.
//!
//! Each check expects a freshly initialized, empty repository. Backends
//! pull the whole suite in with [`conformance_tests!`].

use partstore_core::part::{sample_parts, PartInput};
use partstore_core::storage::{PartRepository, RepositoryError};

fn strut(part_number: &str) -> PartInput {
    PartInput::new(part_number, 650, 224, "350N")
}

pub async fn initialize_is_idempotent(repo: &dyn PartRepository) {
    repo.initialize().await.unwrap();
    repo.initialize().await.unwrap();
    assert!(repo.list_parts().await.unwrap().is_empty());
}

pub async fn round_trip(repo: &dyn PartRepository) {
    let input = PartInput::new("50001", 720, 260, "420N");

    let id = repo.create_part(&input).await.unwrap();
    assert!(id > 0);

    let parts = repo.list_parts().await.unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].id, id);
    assert_eq!(parts[0].to_input(), input);

    let fetched = repo.get_part(id).await.unwrap().unwrap();
    assert_eq!(fetched, parts[0]);
}

pub async fn duplicate_part_number_is_rejected(repo: &dyn PartRepository) {
    repo.create_part(&strut("50002")).await.unwrap();

    let result = repo.create_part(&strut("50002")).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let matching = repo
        .list_parts()
        .await
        .unwrap()
        .into_iter()
        .filter(|p| p.part_number == "50002")
        .count();
    assert_eq!(matching, 1);
}

pub async fn update_with_same_values_is_a_no_op(repo: &dyn PartRepository) {
    let input = strut("50003");
    let id = repo.create_part(&input).await.unwrap();

    let changes = repo.update_part(id, &input).await.unwrap();
    assert_eq!(changes, 1);

    let part = repo.get_part(id).await.unwrap().unwrap();
    assert_eq!(part.to_input(), input);
}

pub async fn update_overwrites_every_field(repo: &dyn PartRepository) {
    let id = repo.create_part(&strut("50004")).await.unwrap();
    let replacement = PartInput::new("50004-B", 910, 400, "600N");

    assert_eq!(repo.update_part(id, &replacement).await.unwrap(), 1);

    let part = repo.get_part(id).await.unwrap().unwrap();
    assert_eq!(part.id, id);
    assert_eq!(part.to_input(), replacement);
}

pub async fn update_into_taken_part_number_is_rejected(repo: &dyn PartRepository) {
    repo.create_part(&strut("50005")).await.unwrap();
    let id = repo.create_part(&strut("50006")).await.unwrap();

    let result = repo.update_part(id, &strut("50005")).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ConstraintViolation(_))
    ));

    let part = repo.get_part(id).await.unwrap().unwrap();
    assert_eq!(part.part_number, "50006");
}

pub async fn mutations_on_missing_id_report_zero(repo: &dyn PartRepository) {
    assert_eq!(repo.update_part(4242, &strut("50007")).await.unwrap(), 0);
    assert_eq!(repo.delete_part(4242).await.unwrap(), 0);
    assert!(repo.get_part(4242).await.unwrap().is_none());
    assert!(repo.list_parts().await.unwrap().is_empty());
}

pub async fn seed_on_fresh_store(repo: &dyn PartRepository) {
    let inserted = repo.seed(&sample_parts()).await.unwrap();
    assert_eq!(inserted, 5);

    let mut parts = repo.list_parts().await.unwrap();
    parts.sort_by(|a, b| a.part_number.cmp(&b.part_number));

    let numbers: Vec<&str> = parts.iter().map(|p| p.part_number.as_str()).collect();
    let lengths: Vec<i64> = parts.iter().map(|p| p.extended_length).collect();
    let strokes: Vec<i64> = parts.iter().map(|p| p.stroke).collect();
    let forces: Vec<&str> = parts.iter().map(|p| p.force.as_str()).collect();

    assert_eq!(numbers, vec!["30101", "30102", "30103", "30104", "30105"]);
    assert_eq!(lengths, vec![650, 700, 600, 750, 800]);
    assert_eq!(strokes, vec![224, 250, 200, 300, 350]);
    assert_eq!(forces, vec!["350N", "400N", "300N", "450N", "500N"]);
}

pub async fn reseeding_skips_existing_part_numbers(repo: &dyn PartRepository) {
    repo.create_part(&PartInput::new("30101", 1, 1, "1N"))
        .await
        .unwrap();

    let inserted = repo.seed(&sample_parts()).await.unwrap();
    assert_eq!(inserted, 4);
    assert_eq!(repo.seed(&sample_parts()).await.unwrap(), 0);

    let parts = repo.list_parts().await.unwrap();
    assert_eq!(parts.len(), 5);

    let kept = parts.iter().find(|p| p.part_number == "30101").unwrap();
    assert_eq!(kept.extended_length, 1);
}

pub async fn sql_metacharacters_are_stored_verbatim(repo: &dyn PartRepository) {
    let hostile = "30101'; DROP TABLE parts;--";
    let input = PartInput::new(hostile, 650, 224, "350N\"); --");

    let id = repo.create_part(&input).await.unwrap();

    let parts = repo.list_parts().await.unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].id, id);
    assert_eq!(parts[0].part_number, hostile);
    assert_eq!(parts[0].force, "350N\"); --");

    // The table is still usable afterwards.
    repo.create_part(&strut("50008")).await.unwrap();
    assert_eq!(repo.list_parts().await.unwrap().len(), 2);
}

pub async fn delete_then_recreate_gets_new_id(repo: &dyn PartRepository) {
    let first = repo.create_part(&strut("50009")).await.unwrap();
    assert_eq!(repo.delete_part(first).await.unwrap(), 1);
    assert!(repo.get_part(first).await.unwrap().is_none());

    let second = repo.create_part(&strut("50009")).await.unwrap();
    assert_ne!(first, second);
}

pub async fn ids_are_not_reused_after_deleting_the_newest(repo: &dyn PartRepository) {
    let a = repo.create_part(&strut("50010")).await.unwrap();
    let b = repo.create_part(&strut("50011")).await.unwrap();
    repo.delete_part(b).await.unwrap();

    let c = repo.create_part(&strut("50012")).await.unwrap();
    assert!(c > b);
    assert!(b > a);
}

pub async fn list_is_ordered_by_id(repo: &dyn PartRepository) {
    for number in ["50015", "50013", "50014"] {
        repo.create_part(&strut(number)).await.unwrap();
    }

    let ids: Vec<i64> = repo
        .list_parts()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

/// Generates one `#[tokio::test]` per conformance check.
///
/// `$make` is evaluated inside each async test and must produce a fresh,
/// initialized repository.
macro_rules! conformance_tests {
    ($make:expr) => {
        $crate::storage::conformance::conformance_tests!(@checks $make;
            initialize_is_idempotent,
            round_trip,
            duplicate_part_number_is_rejected,
            update_with_same_values_is_a_no_op,
            update_overwrites_every_field,
            update_into_taken_part_number_is_rejected,
            mutations_on_missing_id_report_zero,
            seed_on_fresh_store,
            reseeding_skips_existing_part_numbers,
            sql_metacharacters_are_stored_verbatim,
            delete_then_recreate_gets_new_id,
            ids_are_not_reused_after_deleting_the_newest,
            list_is_ordered_by_id,
        );
    };
    (@checks $make:expr; $($name:ident),* $(,)?) => {
        mod conformance_suite {
            #[allow(unused_imports)]
            use super::*;

            $(
                #[tokio::test]
                async fn $name() {
                    let repo = $make;
                    $crate::storage::conformance::$name(&repo).await;
                }
            )*
        }
    };
}

pub(crate) use conformance_tests;
