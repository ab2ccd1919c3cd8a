//! Integration tests for BounceSequencer

mod common;
use common::*;

use palette::Srgb;
use tick_sequencer::colors;
use tick_sequencer::{BounceSequencer, Direction, Sequencer, SequencerError};

const PALETTE: [Srgb; 3] = [RED, GREEN, BLUE];

#[test]
fn three_pixel_track_bounces_with_period_four() {
    let mut seq = BounceSequencer::new(MockStrip::new(3), 3, &PALETTE).unwrap();

    for _ in 0..12 {
        seq.advance();
    }

    assert_eq!(
        seq.strip().positions().as_slice(),
        &[0, 1, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1]
    );
}

#[test]
fn color_advances_twice_per_period() {
    let mut seq = BounceSequencer::new(MockStrip::new(3), 3, &PALETTE).unwrap();

    let mut color_indices: heapless::Vec<usize, 16> = heapless::Vec::new();
    for _ in 0..8 {
        color_indices.push(seq.color_index()).unwrap();
        seq.advance();
    }

    // Turns happen on the ticks that draw pixel 2 and pixel 0 again
    assert_eq!(color_indices.as_slice(), &[0, 0, 0, 1, 1, 2, 2, 0]);
    assert_eq!(seq.color_index(), 0);
}

#[test]
fn frames_use_color_selected_before_the_turn() {
    let mut seq = BounceSequencer::new(MockStrip::new(3), 3, &PALETTE).unwrap();

    for _ in 0..5 {
        seq.advance();
    }

    let expected = [(0, RED), (1, RED), (2, RED), (1, GREEN), (0, GREEN)];
    let frames = seq.strip().frames();
    assert_eq!(frames.len(), expected.len());
    for (frame, (pos, color)) in frames.iter().zip(expected) {
        let (drawn_pos, drawn_color) = frame.unwrap();
        assert_eq!(drawn_pos, pos);
        assert!(colors_equal(drawn_color, color));
    }
}

#[test]
fn single_pixel_track_changes_color_every_tick() {
    let mut seq = BounceSequencer::new(MockStrip::new(1), 1, &PALETTE).unwrap();

    for tick in 0..7 {
        assert_eq!(seq.position(), 0);
        assert_eq!(seq.color_index(), tick % PALETTE.len());
        seq.advance();
    }

    assert_eq!(seq.strip().positions().as_slice(), &[0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn single_pixel_track_flips_direction_every_tick() {
    let mut seq = BounceSequencer::new(MockStrip::new(1), 1, &PALETTE).unwrap();

    seq.advance();
    assert_eq!(seq.direction(), Direction::Backward);
    seq.advance();
    assert_eq!(seq.direction(), Direction::Forward);
}

#[test]
fn each_tick_clears_sets_and_commits_once() {
    let mut seq = BounceSequencer::new(MockStrip::new(4), 4, &PALETTE).unwrap();

    seq.advance();
    seq.advance();

    assert_eq!(
        seq.strip().events(),
        &[
            StripEvent::Clear,
            StripEvent::Set(0, RED),
            StripEvent::Commit,
            StripEvent::Clear,
            StripEvent::Set(1, RED),
            StripEvent::Commit,
        ]
    );
}

#[test]
fn short_track_stays_within_its_prefix_of_the_strip() {
    let mut seq = BounceSequencer::new(MockStrip::new(10), 4, &PALETTE).unwrap();

    for _ in 0..30 {
        seq.advance();
        assert!(seq.position() < 4);
    }
    assert!(seq.strip().positions().iter().all(|&p| p < 4));
}

#[test]
fn for_strip_uses_the_whole_strip() {
    let mut seq = BounceSequencer::for_strip(MockStrip::new(5), &PALETTE).unwrap();
    assert_eq!(seq.track_length(), 5);

    for _ in 0..9 {
        seq.advance();
    }
    assert_eq!(
        seq.strip().positions().as_slice(),
        &[0, 1, 2, 3, 4, 3, 2, 1, 0]
    );
}

#[test]
fn always_running_and_reset_is_a_no_op() {
    let mut seq = BounceSequencer::new(MockStrip::new(3), 3, &PALETTE).unwrap();

    for _ in 0..3 {
        seq.advance();
    }
    let position = seq.position();
    let direction = seq.direction();
    let color_index = seq.color_index();

    Sequencer::reset(&mut seq);
    assert!(Sequencer::is_running(&seq));
    assert_eq!(seq.position(), position);
    assert_eq!(seq.direction(), direction);
    assert_eq!(seq.color_index(), color_index);
    assert_eq!(seq.strip().frames().len(), 3);
}

#[test]
fn construction_is_validated() {
    assert!(matches!(
        BounceSequencer::new(MockStrip::new(3), 0, &PALETTE),
        Err(SequencerError::ZeroTrackLength)
    ));
    assert!(matches!(
        BounceSequencer::new(MockStrip::new(3), 4, &PALETTE),
        Err(SequencerError::TrackExceedsStrip {
            track_length: 4,
            pixel_count: 3
        })
    ));

    let no_colors: [Srgb; 0] = [];
    assert!(matches!(
        BounceSequencer::new(MockStrip::new(3), 3, &no_colors),
        Err(SequencerError::EmptyColorSequence)
    ));
}

#[test]
fn rainbow_palette_cycles_through_all_hues() {
    let rainbow = colors::rainbow::<6>();
    let mut seq = BounceSequencer::new(MockStrip::new(2), 2, &rainbow).unwrap();

    // After the first tick, every tick on a two-pixel track is a turn
    for tick in 0..12usize {
        let expected = rainbow[tick.saturating_sub(1) % 6];
        assert!(colors_equal(seq.current_color(), expected));
        seq.advance();
    }
}

#[test]
fn works_with_borrowed_strip() {
    let mut strip = MockStrip::new(2);
    {
        let mut seq = BounceSequencer::new(&mut strip, 2, &PALETTE).unwrap();
        seq.advance();
        seq.advance();
    }
    assert_eq!(strip.positions().as_slice(), &[0, 1]);
}

#[test]
fn end_pixels_are_never_drawn_twice_in_a_row() {
    let mut seq = BounceSequencer::new(MockStrip::new(4), 4, &PALETTE).unwrap();

    for _ in 0..20 {
        seq.advance();
    }

    let positions = seq.strip().positions();
    for pair in positions.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}
