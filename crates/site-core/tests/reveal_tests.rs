// Host-side tests for reveal profile classification and keyframe endpoints.

use site_core::{
    entry_from, exit_to, parse_delay_ms, DirectionTracker, RevealKind, RevealState,
    RevealTransform, ScrollDirection, HORIZONTAL_OFFSET_PX, VERTICAL_OFFSET_PX, ZOOM_START_SCALE,
};

#[test]
fn classify_defaults_to_vertical_slide() {
    assert_eq!(RevealKind::classify(None), RevealKind::SlideUp);
    assert_eq!(RevealKind::classify(Some("")), RevealKind::SlideUp);
    assert_eq!(RevealKind::classify(Some("fade-up")), RevealKind::SlideUp);
    assert_eq!(RevealKind::classify(Some("bounce")), RevealKind::SlideUp);
}

#[test]
fn classify_matches_keywords_case_insensitively() {
    assert_eq!(
        RevealKind::classify(Some("slide-left")),
        RevealKind::SlideLeft
    );
    assert_eq!(RevealKind::classify(Some("RIGHT")), RevealKind::SlideRight);
    assert_eq!(RevealKind::classify(Some("Zoom-In")), RevealKind::Zoom);
}

#[test]
fn classify_resolves_ambiguous_declarations_deterministically() {
    // "left" outranks "zoom" regardless of where it appears in the string.
    assert_eq!(
        RevealKind::classify(Some("zoom-left")),
        RevealKind::SlideLeft
    );
    assert_eq!(
        RevealKind::classify(Some("left-right")),
        RevealKind::SlideLeft
    );
}

#[test]
fn vertical_entry_mirrors_with_scroll_direction() {
    let down = entry_from(RevealKind::SlideUp, ScrollDirection::Down);
    let up = entry_from(RevealKind::SlideUp, ScrollDirection::Up);

    assert_eq!(down.dy, VERTICAL_OFFSET_PX);
    assert_eq!(up.dy, -VERTICAL_OFFSET_PX);
    assert_eq!(down.dx, 0.0);
    assert_eq!(down.scale, 1.0);
}

#[test]
fn vertical_exit_leaves_toward_the_crossed_edge() {
    // Scrolling down the element exits through the top of the band.
    let down = exit_to(RevealKind::SlideUp, ScrollDirection::Down);
    let up = exit_to(RevealKind::SlideUp, ScrollDirection::Up);

    assert_eq!(down.dy, -VERTICAL_OFFSET_PX);
    assert_eq!(up.dy, VERTICAL_OFFSET_PX);
}

#[test]
fn horizontal_profiles_ignore_scroll_direction() {
    for kind in [RevealKind::SlideLeft, RevealKind::SlideRight] {
        assert_eq!(
            entry_from(kind, ScrollDirection::Down),
            entry_from(kind, ScrollDirection::Up)
        );
        assert_eq!(
            exit_to(kind, ScrollDirection::Down),
            entry_from(kind, ScrollDirection::Down)
        );
    }
    assert_eq!(
        entry_from(RevealKind::SlideLeft, ScrollDirection::Down).dx,
        HORIZONTAL_OFFSET_PX
    );
    assert_eq!(
        entry_from(RevealKind::SlideRight, ScrollDirection::Down).dx,
        -HORIZONTAL_OFFSET_PX
    );
}

#[test]
fn zoom_profile_scales_from_below_full_size() {
    let from = entry_from(RevealKind::Zoom, ScrollDirection::Down);
    assert_eq!(from.scale, ZOOM_START_SCALE);
    assert_eq!(from.dx, 0.0);
    assert_eq!(from.dy, 0.0);
    assert_eq!(exit_to(RevealKind::Zoom, ScrollDirection::Up), from);
}

#[test]
fn identity_transform_is_at_rest() {
    let id = RevealTransform::IDENTITY;
    assert_eq!((id.dx, id.dy, id.scale), (0.0, 0.0, 1.0));
}

#[test]
fn delay_parsing_falls_back_to_zero() {
    assert_eq!(parse_delay_ms(Some("250")), 250);
    assert_eq!(parse_delay_ms(Some(" 100 ")), 100);
    assert_eq!(parse_delay_ms(Some("-50")), 0);
    assert_eq!(parse_delay_ms(Some("soon")), 0);
    assert_eq!(parse_delay_ms(None), 0);
}

#[test]
fn direction_tracker_follows_travel() {
    let mut tracker = DirectionTracker::new(0.0);
    assert_eq!(tracker.sample(100.0), ScrollDirection::Down);
    assert_eq!(tracker.sample(50.0), ScrollDirection::Up);
    assert_eq!(tracker.sample(200.0), ScrollDirection::Down);
}

#[test]
fn direction_tracker_reuses_direction_for_batched_samples() {
    let mut tracker = DirectionTracker::new(500.0);

    // Several elements trigger off the same upward scroll step; each reads
    // the same position, and every one of them must see Up, not a default.
    assert_eq!(tracker.sample(400.0), ScrollDirection::Up);
    assert_eq!(tracker.sample(400.0), ScrollDirection::Up);
    assert_eq!(tracker.sample(400.0), ScrollDirection::Up);

    assert_eq!(tracker.sample(450.0), ScrollDirection::Down);
    assert_eq!(tracker.sample(450.0), ScrollDirection::Down);
}

#[test]
fn elements_start_hidden() {
    let state = RevealState::new(RevealKind::Zoom, 120);
    assert!(!state.visible);
    assert_eq!(state.delay_ms, 120);
}
