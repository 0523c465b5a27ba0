use super::Selection;
use crate::domain::models::Platforms;
use crate::domain::models::RecommendRequest;
use crate::domain::models::DEFAULT_RATING;

fn xbox_only() -> Platforms {
    return Platforms {
        xbox: true,
        ..Platforms::default()
    };
}

#[test]
fn it_adds_with_default_rating() {
    let mut selection = Selection::new(5);
    assert!(selection.add("Halo 3"));

    assert_eq!(selection.len(), 1);
    assert_eq!(selection.games()[0].name, "Halo 3");
    assert_eq!(selection.games()[0].rating(), DEFAULT_RATING);
}

#[test]
fn it_ignores_duplicates() {
    let mut selection = Selection::new(5);
    assert!(selection.add("Halo 3"));
    assert!(!selection.add("Halo 3"));

    assert_eq!(selection.len(), 1);
}

#[test]
fn it_ignores_adds_at_capacity() {
    let mut selection = Selection::new(5);
    for name in ["A", "B", "C", "D", "E"] {
        assert!(selection.add(name));
    }

    assert!(selection.is_full());
    assert!(!selection.add("F"));
    assert_eq!(selection.len(), 5);
    assert!(!selection.contains("F"));
}

#[test]
fn it_supports_larger_capacities() {
    let mut selection = Selection::new(10);
    for idx in 0..10 {
        assert!(selection.add(&format!("Game {idx}")));
    }

    assert!(!selection.add("Game 10"));
    assert_eq!(selection.len(), 10);
}

#[test]
fn it_removes_by_name() {
    let mut selection = Selection::new(5);
    selection.add("Halo 3");
    selection.add("Portal 2");

    assert!(selection.remove("Halo 3"));
    assert!(!selection.remove("Halo 3"));
    assert_eq!(selection.len(), 1);
    assert_eq!(selection.games()[0].name, "Portal 2");
}

#[test]
fn it_changes_only_the_targeted_rating() {
    let mut selection = Selection::new(5);
    selection.add("Halo 3");
    selection.add("Portal 2");
    selection.add("Celeste");
    selection.merge_platforms("Celeste", xbox_only());
    let before = selection.games().to_vec();

    assert!(selection.increase_rating("Portal 2"));
    assert!(selection.increase_rating("Portal 2"));
    assert!(!selection.increase_rating("Doom"));
    assert!(!selection.decrease_rating("Doom"));

    let after = selection.games();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].rating(), 7);
    assert_eq!(after[1].name, before[1].name);
    assert_eq!(after[2], before[2]);
}

#[test]
fn it_merges_platforms_into_existing_games() {
    let mut selection = Selection::new(5);
    selection.add("Halo 3");

    assert!(selection.merge_platforms("Halo 3", xbox_only()));
    assert_eq!(selection.games()[0].platforms, Some(xbox_only()));
}

#[test]
fn it_does_not_resurrect_removed_games() {
    let mut selection = Selection::new(5);
    selection.add("Halo 3");
    selection.remove("Halo 3");

    assert!(!selection.merge_platforms("Halo 3", xbox_only()));
    assert!(selection.is_empty());
}

#[test]
fn it_builds_parallel_request_sequences() {
    let mut selection = Selection::new(5);
    selection.add("Red Dead Redemption 2");
    selection.add("The Witcher 3: Wild Hunt");
    selection.add("Stardew Valley");
    for _ in 0..5 {
        selection.increase_rating("Red Dead Redemption 2");
    }
    selection.decrease_rating("Stardew Valley");
    selection.decrease_rating("Stardew Valley");

    let req = selection.to_request();
    assert_eq!(req.game_titles.len(), req.ratings.len());
    assert_eq!(
        req,
        RecommendRequest {
            game_titles: vec![
                "Red Dead Redemption 2".to_string(),
                "The Witcher 3: Wild Hunt".to_string(),
                "Stardew Valley".to_string(),
            ],
            ratings: vec![10, 5, 3],
        }
    );
}
