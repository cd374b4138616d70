mod common;

use common::{add_match, add_player, add_stadium, add_teams, fresh_database};
use league_repository::ReturnValue;

#[tokio::test]
#[ignore = "requires database"]
async fn attendance_and_goals_per_stadium() {
    let db = fresh_database().await;
    add_teams(&db, &[1, 2]).await;
    let venue = add_stadium(&db, 1, Some(1), 60000).await;
    let empty_venue = add_stadium(&db, 2, None, 10000).await;
    let first = add_match(&db, 1, 1, 2).await;
    let second = add_match(&db, 2, 2, 1).await;
    let scorer = add_player(&db, 1, 1, 180).await;

    assert_eq!(db.average_attendance(empty_venue.stadium_id).await, 0.0);
    assert_eq!(db.total_goals(empty_venue.stadium_id).await, 0);

    assert_eq!(db.assign_stadium(&first, &venue, 30000).await, ReturnValue::Ok);
    assert_eq!(db.assign_stadium(&second, &venue, 50000).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&first, &scorer, 2).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&second, &scorer, 3).await, ReturnValue::Ok);

    assert_eq!(db.average_attendance(venue.stadium_id).await, 40000.0);
    assert_eq!(db.total_goals(venue.stadium_id).await, 5);
}

#[tokio::test]
#[ignore = "requires database"]
async fn match_winner_needs_half_the_goals() {
    let db = fresh_database().await;
    add_teams(&db, &[1, 2]).await;
    let played = add_match(&db, 1, 1, 2).await;
    let first = add_player(&db, 1, 1, 180).await;
    let second = add_player(&db, 2, 2, 180).await;
    let third = add_player(&db, 3, 2, 180).await;
    let benched = add_player(&db, 4, 1, 180).await;

    assert_eq!(db.record_goal(&played, &first, 3).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&played, &second, 2).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&played, &third, 1).await, ReturnValue::Ok);

    assert!(db.is_match_winner(first.player_id, played.match_id).await);
    assert!(!db.is_match_winner(second.player_id, played.match_id).await);
    assert!(!db.is_match_winner(third.player_id, played.match_id).await);
    assert!(!db.is_match_winner(benched.player_id, played.match_id).await);
    assert!(!db.is_match_winner(first.player_id, 99).await);
}

#[tokio::test]
#[ignore = "requires database"]
async fn sole_scorer_with_huge_tally_wins() {
    let db = fresh_database().await;
    add_teams(&db, &[1, 2]).await;
    let played = add_match(&db, 1, 1, 2).await;
    let scorer = add_player(&db, 1, 1, 180).await;

    assert_eq!(
        db.record_goal(&played, &scorer, 2_000_000_000).await,
        ReturnValue::Ok
    );
    assert!(db.is_match_winner(scorer.player_id, played.match_id).await);
}

#[tokio::test]
#[ignore = "requires database"]
async fn tall_teams_need_two_tall_players_and_a_match() {
    let db = fresh_database().await;
    add_teams(&db, &[1, 2, 3, 4]).await;
    add_match(&db, 1, 1, 2).await;
    add_match(&db, 2, 4, 2).await;

    // Team 1: two tall players, plays at home.
    add_player(&db, 1, 1, 195).await;
    add_player(&db, 2, 1, 200).await;
    // Team 2: one tall player only.
    add_player(&db, 3, 2, 199).await;
    add_player(&db, 4, 2, 170).await;
    // Team 3: tall but never played.
    add_player(&db, 5, 3, 195).await;
    add_player(&db, 6, 3, 196).await;
    // Team 4: tall, plays at home, owns a small stadium.
    add_player(&db, 7, 4, 191).await;
    add_player(&db, 8, 4, 192).await;

    assert_eq!(db.active_tall_teams().await, vec![4, 1]);
    assert!(db.active_tall_rich_teams().await.is_empty());

    add_stadium(&db, 1, Some(4), 40000).await;
    add_stadium(&db, 2, Some(1), 60000).await;
    assert_eq!(db.active_tall_rich_teams().await, vec![1]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn popular_teams_fill_every_home_match() {
    let db = fresh_database().await;
    add_teams(&db, &[1, 2, 3, 4]).await;
    let venue = add_stadium(&db, 1, None, 90000).await;

    let big = add_match(&db, 1, 1, 2).await;
    let bigger = add_match(&db, 2, 1, 3).await;
    add_match(&db, 3, 2, 1).await; // no attendance recorded
    let small = add_match(&db, 4, 3, 1).await;

    assert_eq!(db.assign_stadium(&big, &venue, 45000).await, ReturnValue::Ok);
    assert_eq!(db.assign_stadium(&bigger, &venue, 80000).await, ReturnValue::Ok);
    assert_eq!(db.assign_stadium(&small, &venue, 30000).await, ReturnValue::Ok);

    // Team 4 never hosted a match.
    assert_eq!(db.popular_teams().await, vec![1]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn attractive_stadiums_order_by_goals_then_id() {
    let db = fresh_database().await;
    add_teams(&db, &[1, 2]).await;
    add_stadium(&db, 3, None, 1000).await;
    let busy = add_stadium(&db, 2, None, 1000).await;
    add_stadium(&db, 1, None, 1000).await;
    let played = add_match(&db, 1, 1, 2).await;
    let unplaced = add_match(&db, 2, 2, 1).await;
    let scorer = add_player(&db, 1, 1, 180).await;

    assert_eq!(db.assign_stadium(&played, &busy, 100).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&played, &scorer, 5).await, ReturnValue::Ok);
    // Goals of a match without a venue belong to no stadium.
    assert_eq!(db.record_goal(&unplaced, &scorer, 9).await, ReturnValue::Ok);

    assert_eq!(db.most_attractive_stadiums().await, vec![2, 1, 3]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn top_scorers_break_ties_by_descending_id() {
    let db = fresh_database().await;
    add_teams(&db, &[1, 2]).await;
    let first = add_match(&db, 1, 1, 2).await;
    let second = add_match(&db, 2, 2, 1).await;
    let low_id = add_player(&db, 1, 1, 180).await;
    let high_id = add_player(&db, 2, 1, 180).await;
    let fewer = add_player(&db, 3, 1, 180).await;
    add_player(&db, 4, 1, 180).await; // never scored
    let rival = add_player(&db, 5, 2, 180).await;

    assert_eq!(db.record_goal(&first, &low_id, 6).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&second, &low_id, 4).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&first, &high_id, 10).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&second, &fewer, 5).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&first, &rival, 20).await, ReturnValue::Ok);

    assert_eq!(db.top_scorers(1).await, vec![2, 1, 3, 4]);
    assert!(db.top_scorers(9).await.is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn similar_players_share_half_the_matches() {
    let db = fresh_database().await;
    add_teams(&db, &[1, 2]).await;
    let first = add_match(&db, 1, 1, 2).await;
    let second = add_match(&db, 2, 2, 1).await;
    let third = add_match(&db, 3, 1, 2).await;
    let subject = add_player(&db, 1, 1, 180).await;
    let half = add_player(&db, 2, 2, 180).await;
    add_player(&db, 3, 2, 180).await; // never scored
    let both = add_player(&db, 4, 1, 180).await;
    let elsewhere = add_player(&db, 5, 2, 180).await;

    for played in [&first, &second] {
        assert_eq!(db.record_goal(played, &subject, 1).await, ReturnValue::Ok);
        assert_eq!(db.record_goal(played, &both, 1).await, ReturnValue::Ok);
    }
    assert_eq!(db.record_goal(&first, &half, 1).await, ReturnValue::Ok);
    assert_eq!(db.record_goal(&third, &elsewhere, 1).await, ReturnValue::Ok);

    assert_eq!(db.similar_players(subject.player_id).await, vec![2, 4]);
    assert!(db.similar_players(3).await.is_empty());
}
