#![allow(missing_docs)]
//! Host-level tests for the LED brightness fade.

use servo_fade::{
    led::{Fade, LED_WRAP},
    sweep::Direction,
};

#[test]
fn first_step_from_dark_is_one() {
    let mut fade = Fade::new();
    assert_eq!((fade.brightness(), fade.direction()), (0, Direction::Up));
    assert_eq!(fade.advance(), 1);
    assert_eq!(fade.direction(), Direction::Up);
}

#[test]
fn direction_flips_exactly_at_the_ends() {
    let mut fade = Fade::new();
    for expected in 1..LED_WRAP {
        assert_eq!(fade.advance(), expected);
        assert_eq!(fade.direction(), Direction::Up);
    }
    assert_eq!(fade.advance(), LED_WRAP);
    assert_eq!(fade.direction(), Direction::Down);

    for expected in (1..LED_WRAP).rev() {
        assert_eq!(fade.advance(), expected);
        assert_eq!(fade.direction(), Direction::Down);
    }
    assert_eq!(fade.advance(), 0);
    assert_eq!(fade.direction(), Direction::Up);
    assert_eq!(fade.advance(), 1);
}

#[test]
fn brightness_stays_in_range_over_many_cycles() {
    let mut fade = Fade::new();
    let mut previous = fade.brightness();
    for _ in 0..5_000 {
        let brightness = fade.advance();
        assert!(brightness <= LED_WRAP);
        assert_eq!(brightness.abs_diff(previous), 1);
        previous = brightness;
    }
}

#[test]
fn small_top_clamps_and_reverses() {
    let mut fade = Fade::with_top(2);
    let levels: Vec<u8> = (0..8).map(|_| fade.advance()).collect();
    assert_eq!(levels, [1, 2, 1, 0, 1, 2, 1, 0]);
}

#[test]
fn reversed_direction_round_trips() {
    assert_eq!(Direction::Up.reversed(), Direction::Down);
    assert_eq!(Direction::Down.reversed().reversed(), Direction::Down);
}
