//! Enemies domain: unit tests for frame discovery and animation.

use bevy::prelude::*;

use super::data::order_frame_files;
use super::FrameAnimation;

#[test]
fn test_frames_sort_numerically() {
    let names = ["10.png", "2.png", "0.png", "1.png"].map(String::from);
    assert_eq!(
        order_frame_files(names),
        vec!["0.png", "1.png", "2.png", "10.png"]
    );
}

#[test]
fn test_non_numeric_frames_are_skipped() {
    let names = ["1.png", "readme.txt", "0.png", ".DS_Store"].map(String::from);
    assert_eq!(order_frame_files(names), vec!["0.png", "1.png"]);
}

#[test]
fn test_frame_animation_wraps() {
    let frames = vec![Handle::<Image>::default(); 3];
    let mut animation = FrameAnimation::new(frames, 0.1);
    animation.advance();
    animation.advance();
    assert_eq!(animation.index, 2);
    animation.advance();
    assert_eq!(animation.index, 0);

    let mut empty = FrameAnimation::new(Vec::new(), 0.1);
    assert!(empty.advance().is_none());
    assert_eq!(empty.index, 0);
}
