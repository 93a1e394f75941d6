//! Observer attachment and the reference observers.

use knockout_dice::{EventLog, GameEvent, KnockoutGame, PlayerId, TurnTracker};

#[test]
fn test_detached_observer_sees_nothing() {
    let mut log = EventLog::new();
    let mut game = KnockoutGame::new(3, 8).unwrap();

    game.attach_observer(&mut log);
    assert!(game.detach_observer().is_some());
    assert!(game.detach_observer().is_none());
    game.play().unwrap();
    drop(game);

    assert!(log.events().is_empty());
}

#[test]
fn test_attaching_replaces_previous_observer() {
    let mut first = EventLog::new();
    let mut second = EventLog::new();
    let mut game = KnockoutGame::new(2, 8).unwrap();

    game.attach_observer(&mut first);
    game.attach_observer(&mut second);
    game.play().unwrap();
    drop(game);

    assert!(first.events().is_empty());
    assert!(!second.events().is_empty());
}

#[test]
fn test_event_log_brackets_turns() {
    let mut log = EventLog::new();
    let mut game = KnockoutGame::new(4, 31).unwrap();
    game.attach_observer(&mut log);
    game.play().unwrap();
    let turns = game.turns();
    drop(game);

    let events = log.events();
    assert!(matches!(events.first(), Some(GameEvent::Started { players: 4, die_sides: 6 })));
    assert!(matches!(events.last(), Some(GameEvent::Ended { turns: t, .. }) if *t == turns));

    let ends = events.iter().filter(|e| matches!(e, GameEvent::Ended { .. })).count();
    assert_eq!(ends, 1);
    assert_eq!(log.turns().count(), turns);
}

#[test]
fn test_event_log_rounds_never_decrease() {
    let mut log = EventLog::new();
    let mut game = KnockoutGame::new(3, 64).unwrap();
    game.attach_observer(&mut log);
    game.play().unwrap();
    drop(game);

    let rounds: Vec<u32> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::Turn { round, .. } => Some(*round),
            _ => None,
        })
        .collect();

    assert_eq!(rounds.first(), Some(&1));
    assert!(rounds.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_event_log_serialization() {
    let mut log = EventLog::new();
    let mut game = KnockoutGame::new(2, 5).unwrap();
    game.attach_observer(&mut log);
    game.play().unwrap();
    drop(game);

    let json = serde_json::to_string(&log).unwrap();
    let deserialized: EventLog = serde_json::from_str(&json).unwrap();
    assert_eq!(log, deserialized);
}

#[test]
fn test_tracker_counts_per_player() {
    let mut tracker = TurnTracker::new();
    let mut game = KnockoutGame::new(5, 99).unwrap();
    game.attach_observer(&mut tracker);
    game.play().unwrap();
    let turns = game.turns();
    drop(game);

    let per_player: usize = PlayerId::all(5).map(|p| tracker.turns_for(p)).sum();
    assert_eq!(per_player, turns);
    assert_eq!(tracker.turns(), turns);
    assert_eq!(tracker.final_turns(), Some(turns));
    assert_eq!(tracker.turns_for(PlayerId::new(6)), 0);
}

#[test]
fn test_tracker_before_play() {
    let tracker = TurnTracker::new();
    assert_eq!(tracker.die_sides(), None);
    assert_eq!(tracker.turns(), 0);
    assert_eq!(tracker.final_turns(), None);
}
