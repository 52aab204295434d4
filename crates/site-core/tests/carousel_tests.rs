// Host-side tests for the carousel offset/wraparound state.

use site_core::CarouselState;

#[test]
fn offset_stays_in_window_over_many_frames() {
    let half = 300.0;
    let mut state = CarouselState::new();

    // Several full loops worth of frames; the wraparound must keep the
    // offset inside [0, half) after every advance.
    for _ in 0..10_000 {
        state.advance(half);
        assert!(
            state.offset >= 0.0 && state.offset < half,
            "offset escaped the window: {}",
            state.offset
        );
    }
}

#[test]
fn advance_wraps_at_the_half_boundary() {
    let half = 200.0;
    let mut state = CarouselState::new();
    state.offset = half - 0.5;

    // One step of 1.0 overshoots the boundary by 0.5 and wraps, it does
    // not land at half + 0.5.
    state.advance(half);
    assert!((state.offset - 0.5).abs() < 1e-9, "got {}", state.offset);
}

#[test]
fn wheel_scrolling_backwards_wraps_to_the_far_end() {
    let half = 200.0;
    let mut state = CarouselState::new();
    state.offset = 0.3;

    state.apply_wheel(-1.0, half);
    assert!(
        (state.offset - (half - 0.7)).abs() < 1e-9,
        "got {}",
        state.offset
    );
}

#[test]
fn hovered_tick_at_zero_holds_the_offset() {
    let half = 200.0;
    let mut state = CarouselState::new();
    state.offset = half - 1.0;

    // Lands exactly on the boundary and wraps to 0.
    state.advance(half);
    assert_eq!(state.offset, 0.0);

    // A paused tick's delta is 0; the correction must not fold 0 up to
    // half, which would put the offset outside [0, half).
    state.set_hovered(true);
    state.advance(half);
    assert_eq!(state.offset, 0.0);
}

#[test]
fn hover_pauses_auto_advance() {
    let half = 200.0;
    let mut state = CarouselState::new();
    state.offset = 50.0;
    state.set_hovered(true);

    for _ in 0..100 {
        state.advance(half);
    }
    assert_eq!(state.offset, 50.0);

    state.set_hovered(false);
    state.advance(half);
    assert_eq!(state.offset, 51.0);
}

#[test]
fn wheel_movement_during_hover_is_still_corrected() {
    let half = 200.0;
    let mut state = CarouselState::new();
    state.offset = half - 1.0;
    state.set_hovered(true);

    // Wheel input lands past the boundary; the next advance must correct
    // it even though the auto-step is paused.
    state.offset += 5.0;
    state.advance(half);
    assert!((state.offset - 4.0).abs() < 1e-9, "got {}", state.offset);
}

#[test]
fn wheel_input_is_corrected_immediately() {
    let half = 200.0;
    let mut state = CarouselState::new();
    state.offset = half - 1.0;

    state.apply_wheel(10.0, half);
    assert!((state.offset - 9.0).abs() < 1e-9, "got {}", state.offset);
}
