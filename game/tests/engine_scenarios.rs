//! Engine scenarios driven only through the public API.

use game::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

type TestResult = game::Result<()>;

/// Start a game with the first seed whose first fruit isn't in `keep_clear`.
fn start_avoiding(settings: &Settings, keep_clear: &[Coordinates]) -> game::Result<GameEngine> {
    for seed in 0..1000 {
        let mut engine = GameEngine::seeded(settings.clone(), seed)?;
        engine.request_start();
        match engine.fruit() {
            Some(fruit) if keep_clear.contains(&fruit) => continue,
            _ => return Ok(engine),
        }
    }
    Err("no suitable seed".into())
}

fn segments(engine: &GameEngine) -> Vec<Coordinates> {
    engine.snake().segments().collect()
}

#[test]
fn three_ticks_east_from_the_center() -> TestResult {
    let path: Vec<Coordinates> = (17..=19).map(|x| Coordinates::new(x, 16)).collect();
    let mut engine = start_avoiding(&Settings::default(), &path)?;

    assert_eq!(engine.snake().head(), (16, 16).into());
    assert_eq!(engine.direction(), Direction::East);
    assert_eq!(engine.length(), 3);

    for expected in &path {
        assert_eq!(engine.tick(), TickOutcome::Moved);
        assert_eq!(engine.snake().head(), *expected);
    }
    assert_eq!(engine.length(), 3);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.phase(), Phase::Playing);
    Ok(())
}

#[test]
fn last_column_then_the_wall() -> TestResult {
    let settings = Settings {
        snake_coords: Some((30, 9).into()),
        ..Default::default()
    };
    let mut engine = start_avoiding(&settings, &[])?;

    let outcome = engine.tick();
    assert!(matches!(outcome, TickOutcome::Moved | TickOutcome::Grew));
    assert_eq!(engine.snake().head(), (31, 9).into());
    assert_eq!(engine.phase(), Phase::Playing);

    let before = segments(&engine);
    assert_eq!(engine.tick(), TickOutcome::Collided(Collision::Wall));
    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(segments(&engine), before);
    Ok(())
}

#[test]
fn every_edge_ends_the_game_on_the_next_tick() -> TestResult {
    let edges = [
        (Direction::North, (16, 0)),
        (Direction::South, (16, 31)),
        (Direction::East, (31, 16)),
        (Direction::West, (0, 16)),
    ];

    for (direction, head) in edges {
        for length in 1..=6 {
            let settings = Settings {
                snake_coords: Some(head.into()),
                snake_direction: Some(direction),
                snake_length: SnakeLength::Fixed(length),
                ..Default::default()
            };
            let mut engine = GameEngine::seeded(settings, length as u64)?;
            engine.request_start();

            assert_eq!(
                engine.tick(),
                TickOutcome::Collided(Collision::Wall),
                "facing {} with length {}",
                direction,
                length
            );
            assert_eq!(engine.length(), length);
        }
    }
    Ok(())
}

#[test]
fn fruit_ahead_is_eaten() -> TestResult {
    // One row: the snake takes two cells on the left, so the fruit is always
    // somewhere ahead.
    let settings = Settings {
        grid_size: (6, 1),
        snake_coords: Some((1, 0).into()),
        snake_length: SnakeLength::Fixed(2),
        ..Default::default()
    };
    let mut engine = GameEngine::seeded(settings, 77)?;
    engine.request_start();
    let fruit = engine.fruit().ok_or("no fruit")?;
    assert!(fruit.x > 1 && fruit.y == 0);

    loop {
        let tail = engine.snake().tail();
        match engine.tick() {
            TickOutcome::Moved => assert!(!engine.snake().occupies(tail)),
            TickOutcome::Grew => {
                assert_eq!(engine.snake().head(), fruit);
                assert!(engine.snake().occupies(tail));
                break;
            }
            other => return Err(format!("unexpected {:?}", other).into()),
        }
    }

    assert_eq!(engine.score(), 1);
    assert_eq!(engine.length(), 3);
    if let Some(next) = engine.fruit() {
        assert!(!engine.snake().occupies(next));
    }
    Ok(())
}

#[test]
fn folding_into_the_body_is_game_over() -> TestResult {
    let settings = Settings {
        snake_length: SnakeLength::Fixed(5),
        ..Default::default()
    };
    let mut engine = start_avoiding(&settings, &[(16, 17).into(), (15, 17).into()])?;

    for turn in [Direction::South, Direction::West] {
        engine.request_direction(turn);
        assert_eq!(engine.tick(), TickOutcome::Moved);
    }
    assert_eq!(
        segments(&engine),
        [(15, 17), (16, 17), (16, 16), (15, 16), (14, 16)].map(Coordinates::from)
    );

    // North hits (15, 16), the fourth part, which isn't the tail.
    let before = segments(&engine);
    engine.request_direction(Direction::North);
    assert_eq!(engine.tick(), TickOutcome::Collided(Collision::SelfBody));
    assert_eq!(engine.phase(), Phase::GameOver);
    assert_eq!(segments(&engine), before);
    assert_eq!(engine.snapshot().phase, Phase::GameOver);
    Ok(())
}

#[test]
fn reversal_never_changes_direction() -> TestResult {
    let mut engine = GameEngine::seeded(Settings::default(), 1)?;
    engine.request_start();

    for turn in [Direction::South, Direction::West, Direction::North] {
        engine.request_direction(turn);
        engine.tick();
        let facing = engine.direction();

        engine.request_direction(facing.opposite());
        engine.tick();
        assert_eq!(engine.direction(), facing);
    }
    Ok(())
}

#[test]
fn repeated_requests_act_like_one() -> TestResult {
    let mut once = GameEngine::seeded(Settings::default(), 3)?;
    let mut many = GameEngine::seeded(Settings::default(), 3)?;
    once.request_start();
    many.request_start();

    once.request_direction(Direction::North);
    for _ in 0..5 {
        many.request_direction(Direction::North);
    }
    for _ in 0..4 {
        assert_eq!(once.tick(), many.tick());
    }
    assert_eq!(once.snapshot(), many.snapshot());
    Ok(())
}

#[test]
fn random_play_keeps_the_body_consistent() -> TestResult {
    let mut engine = GameEngine::seeded(Settings::default(), 2024)?;
    let mut player = StdRng::seed_from_u64(99);
    engine.request_start();

    let mut games = 0;
    for _ in 0..5000 {
        if engine.phase() == Phase::GameOver {
            games += 1;
            assert!(engine.request_restart());
        }

        if player.gen_bool(0.3) {
            engine.request_direction(Direction::ALL[player.gen_range(0..4)]);
        }

        let head = engine.snake().head();
        let length = engine.length();
        match engine.tick() {
            TickOutcome::Moved | TickOutcome::Grew => {
                let new_head = engine.snake().head();
                let step = new_head - head;
                assert_eq!(step.x.abs() + step.y.abs(), 1);
                assert!(!engine.snake().has_overlap());
                assert!(engine.length() == length || engine.length() == length + 1);
                if let Some(fruit) = engine.fruit() {
                    assert!(!engine.snake().occupies(fruit));
                }
            }
            TickOutcome::Collided(_) => assert_eq!(engine.length(), length),
            TickOutcome::Idle => return Err("engine idle while playing".into()),
        }

        let chain: Vec<Coordinates> = engine.snake().segments().collect();
        for pair in chain.windows(2) {
            let gap = pair[0] - pair[1];
            assert_eq!(gap.x.abs() + gap.y.abs(), 1, "broken chain {:?}", chain);
        }
    }
    assert!(games > 0);
    Ok(())
}

#[test]
fn same_seed_same_game() -> TestResult {
    let settings = Settings {
        snake_direction: None,
        ..Default::default()
    };
    let mut a = GameEngine::seeded(settings.clone(), 42)?;
    let mut b = GameEngine::seeded(settings, 42)?;
    a.request_start();
    b.request_start();

    for i in 0..40 {
        if i % 7 == 0 {
            a.request_direction(Direction::ALL[i % 4]);
            b.request_direction(Direction::ALL[i % 4]);
        }
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.snapshot(), b.snapshot());
    Ok(())
}

#[test]
fn snapshot_survives_json() -> TestResult {
    let mut engine = GameEngine::seeded(Settings::default(), 8)?;
    engine.request_start();
    engine.tick();

    let snapshot = engine.snapshot();
    let json = String::from_utf8(snapshot.as_bytes()?)?;
    assert_eq!(BoardSnapshot::from_string(&json)?, snapshot);
    assert_eq!(snapshot.tile(engine.snake().head()), Some(Tile::SnakeHead));
    Ok(())
}
