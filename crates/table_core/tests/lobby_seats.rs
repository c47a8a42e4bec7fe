//! Lobby session walk-through: players touch near the screen edges and the
//! seats already on that edge make room.

use table_core::config::SeatConfig;
use table_core::seat::{arrange, nearest_edge, SeatLayout, SeatRequest};
use table_core::{Edge, Point, Rect, SeatClaimError};
use uuid::Uuid;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1920.0, 1080.0);

#[test]
fn two_claimants_at_the_same_spot() {
    let centers = arrange(
        Edge::Bottom,
        &VIEWPORT,
        &[SeatRequest::new(960.0, 520.0), SeatRequest::new(960.0, 520.0)],
    )
    .unwrap();

    assert!((centers[0] - 960.0).abs() < 0.01);
    assert!((centers[1] - 1480.0).abs() < 0.01);
}

#[test]
fn corner_touch_is_tie_broken_towards_bottom() {
    let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    assert_eq!(nearest_edge(Point::new(990.0, 990.0), &bounds), Edge::Bottom);
}

#[test]
fn lobby_fills_every_edge_without_overlap() {
    let mut layout = SeatLayout::new(SeatConfig::default());
    let touches = [
        Point::new(500.0, 1075.0),
        Point::new(520.0, 1075.0),
        Point::new(1900.0, 540.0),
        Point::new(960.0, 4.0),
        Point::new(3.0, 300.0),
        Point::new(3.0, 320.0),
    ];
    let players: Vec<Uuid> = touches.iter().map(|_| Uuid::new_v4()).collect();

    for (player, touch) in players.iter().zip(touches) {
        layout.claim(*player, touch, &VIEWPORT).unwrap();
    }
    assert_eq!(layout.len(), touches.len());

    for edge in Edge::ALL {
        let mut spans: Vec<(f32, f32)> = layout
            .seats_on(edge)
            .map(|(_, zone)| (zone.axis_center(), zone.length()))
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));
        for pair in spans.windows(2) {
            let gap = pair[1].0 - pair[0].0;
            assert!(gap >= (pair[0].1 + pair[1].1) / 2.0 - 0.01, "{} edge overlaps", edge);
        }
    }

    for (_, zone) in layout.iter() {
        assert!(VIEWPORT.encloses(&zone.region, 0.01));
    }
}

#[test]
fn crowded_edge_rejects_newcomer_and_keeps_seats() {
    let mut layout = SeatLayout::new(SeatConfig::default());
    for x in [300.0, 960.0, 1620.0] {
        layout.claim(Uuid::new_v4(), Point::new(x, 1070.0), &VIEWPORT).unwrap();
    }

    let err = layout.claim(Uuid::new_v4(), Point::new(700.0, 1070.0), &VIEWPORT).unwrap_err();
    match err {
        SeatClaimError::NoRoom { edge, source } => {
            assert_eq!(edge, Edge::Bottom);
            assert!(source.is_infeasible());
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(layout.seats_on(Edge::Bottom).count(), 3);

    // The top edge is still free.
    assert!(layout.claim(Uuid::new_v4(), Point::new(700.0, 10.0), &VIEWPORT).is_ok());
}
