//! Board session walk-through: tokens share tiles, walk paths and leave.

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use std::rc::Rc;
use table_core::board::{
    BoardLocation, BoardManager, BoardPath, InstantMotion, MarkerMap, OffsetProjector, Token,
    TokenId,
};
use table_core::{EngineConfig, Point};
use uuid::Uuid;

fn board() -> BoardManager<MarkerMap, OffsetProjector, InstantMotion> {
    let markers = MarkerMap::new()
        .with_root(Point::new(50.0, 50.0))
        .with_marker("Tiles/Go", Point::new(100.0, 100.0))
        .with_marker("Tiles/1", Point::new(200.0, 100.0))
        .with_marker("Tiles/2", Point::new(300.0, 100.0));
    BoardManager::new(markers, OffsetProjector::new(Point::new(50.0, 50.0)), InstantMotion::new())
}

fn go() -> BoardLocation {
    BoardLocation::marker("Tiles/Go")
}

#[test]
fn two_tokens_on_one_tile_sit_side_by_side() {
    let manager = board();
    manager.place_token(Uuid::from_u128(1), Token::new(1), go());
    manager.place_token(Uuid::from_u128(2), Token::new(2), go());

    // Tile at (100, 100) world, (50, 50) local.
    assert_eq!(manager.motion().position_of(TokenId(1)), Some(Point::new(34.0, 50.0)));
    assert_eq!(manager.motion().position_of(TokenId(2)), Some(Point::new(66.0, 50.0)));
}

#[test]
fn walking_away_recentres_the_token_left_behind() {
    let manager = board();
    let mover = Uuid::from_u128(2);
    manager.place_token(Uuid::from_u128(1), Token::new(1), go());
    manager.place_token(mover, Token::new(2), go());

    let path = BoardPath::new([BoardLocation::marker("Tiles/1"), BoardLocation::marker("tiles/2")]);
    let change = futures::executor::block_on(manager.move_path(mover, Token::new(2), &path)).unwrap();

    assert_eq!(change.vacated, Some(go()));
    assert_eq!(manager.motion().position_of(TokenId(1)), Some(Point::new(50.0, 50.0)));
    assert_eq!(manager.motion().position_of(TokenId(2)), Some(Point::new(250.0, 50.0)));
    assert_eq!(manager.current_location(TokenId(2)), Some(BoardLocation::marker("Tiles/2")));
    assert_eq!(manager.motion().animation_count(), 2);
}

#[test]
fn empty_path_only_bounces() {
    let manager = board();
    let owner = Uuid::new_v4();
    manager.place_token(owner, Token::new(1), go());

    let change = futures::executor::block_on(manager.move_path(owner, Token::new(1), &BoardPath::empty()));

    assert!(change.is_none());
    assert_eq!(manager.motion().bounce_count(), 1);
    assert_eq!(manager.current_location(TokenId(1)), Some(go()));
}

#[test]
fn unknown_marker_falls_back_to_root() {
    let manager = board();
    let lost = BoardLocation::new("Tiles/Missing", Point::new(10.0, 0.0));
    manager.place_token(Uuid::new_v4(), Token::new(5), lost.clone());

    assert_eq!(manager.world_position_of(&lost), Point::new(60.0, 50.0));
    assert_eq!(manager.motion().position_of(TokenId(5)), Some(Point::new(10.0, 0.0)));
}

#[test]
fn concurrent_moves_on_a_local_pool() {
    let manager = Rc::new(board());
    let players: Vec<Uuid> = (1..=3).map(Uuid::from_u128).collect();
    for (i, player) in players.iter().enumerate() {
        manager.place_token(*player, Token::new(i as u32), go());
    }

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    for (i, player) in players.iter().enumerate() {
        let manager = Rc::clone(&manager);
        let player = *player;
        spawner
            .spawn_local(async move {
                let path = BoardPath::new([BoardLocation::marker("Tiles/1"), BoardLocation::marker("Tiles/2")]);
                manager.move_path(player, Token::new(i as u32), &path).await;
            })
            .unwrap();
    }
    pool.run();

    let registry = manager.registry();
    assert_eq!(registry.occupants(&BoardLocation::marker("Tiles/2")).len(), 3);
    assert!(registry.occupants(&go()).is_empty());
    drop(registry);

    let positions: Vec<Point> =
        (0..3).map(|i| manager.motion().position_of(TokenId(i)).unwrap()).collect();
    let sum = positions.iter().fold(Point::ZERO, |acc, p| acc + *p);
    let centre = sum / 3.0;
    assert!(centre.distance_to(Point::new(250.0, 50.0)) < 1e-3);
}

#[test]
fn compact_preset_tightens_the_grid() {
    let markers = MarkerMap::new().with_marker("Tiles/Go", Point::new(0.0, 0.0));
    let config = EngineConfig::compact();
    let manager = BoardManager::with_config(
        markers,
        OffsetProjector::default(),
        InstantMotion::new(),
        &config,
    );
    manager.place_token(Uuid::from_u128(1), Token::new(1), go());
    manager.place_token(Uuid::from_u128(2), Token::new(2), go());

    let a = manager.motion().position_of(TokenId(1)).unwrap();
    let b = manager.motion().position_of(TokenId(2)).unwrap();
    assert!((a.distance_to(b) - config.grid.base_spacing).abs() < 1e-3);
}
