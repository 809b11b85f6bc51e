//! End-to-end carousel scenarios
//!
//! Drives the state machine and the stage together, the way the window loop
//! does, without opening a window.

use std::path::PathBuf;
use std::time::Duration;

use hero_carousel::{
    Carousel, CarouselConfig, Direction, Input, Key, Media, MediaError, Preset, Stage,
};
use rand::Rng;

#[derive(Debug, Default)]
struct CountingVideo {
    playing: bool,
    plays: usize,
    rewinds: usize,
}

impl Media for CountingVideo {
    fn play(&mut self) -> Result<(), MediaError> {
        self.playing = true;
        self.plays += 1;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn rewind(&mut self) {
        self.rewinds += 1;
    }
}

/// Video that autoplay policy always blocks
#[derive(Debug, Default)]
struct BlockedVideo;

impl Media for BlockedVideo {
    fn play(&mut self) -> Result<(), MediaError> {
        Err(MediaError::MissingOutput(PathBuf::from("blocked.webm")))
    }

    fn pause(&mut self) {}

    fn rewind(&mut self) {}
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Carousel plus stage, wired like the window loop
struct Harness<M> {
    carousel: Carousel,
    stage: Stage<M>,
}

impl<M: Media> Harness<M> {
    fn new(media: Vec<Option<M>>, config: &CarouselConfig) -> Self {
        let (carousel, initial) = Carousel::new(media.len(), config, ms(0)).unwrap();
        let mut stage = Stage::new(media, config);
        stage.apply(&initial);
        Self { carousel, stage }
    }

    fn send(&mut self, input: Input, now: Duration) {
        if let Some(transition) = self.carousel.handle(input, now) {
            self.stage.apply(&transition);
        }
    }

    fn active_slides(&self) -> Vec<usize> {
        self.stage
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, _)| i)
            .collect()
    }

    fn active_indicators(&self) -> Vec<usize> {
        self.stage
            .indicators()
            .iter()
            .enumerate()
            .filter(|(_, i)| i.active)
            .map(|(i, _)| i)
            .collect()
    }
}

fn videos(count: usize) -> Vec<Option<CountingVideo>> {
    (0..count).map(|_| Some(CountingVideo::default())).collect()
}

#[test]
fn test_indicator_click_defers_next_auto_advance() {
    let config = CarouselConfig::from_preset(Preset::Showcase);
    let mut harness = Harness::new(videos(3), &config);

    harness.send(Input::Select(2), ms(1000));
    assert_eq!(harness.carousel.current_index(), 2);
    assert_eq!(harness.active_slides(), [2]);

    harness.send(Input::Tick, ms(6000));
    assert_eq!(harness.carousel.current_index(), 2);

    harness.send(Input::Tick, ms(7000));
    assert_eq!(harness.carousel.current_index(), 0);
    assert_eq!(harness.active_slides(), [0]);
}

#[test]
fn test_hero_preset_uses_longer_interval() {
    let config = CarouselConfig::from_preset(Preset::Hero);
    let mut harness = Harness::new(videos(2), &config);

    harness.send(Input::Tick, ms(6000));
    assert_eq!(harness.carousel.current_index(), 0);
    harness.send(Input::Tick, ms(8000));
    assert_eq!(harness.carousel.current_index(), 1);
}

#[test]
fn test_random_inputs_keep_one_active_pair() {
    let config = CarouselConfig::default();
    let mut rng = rand::rng();

    for len in 1..6 {
        let mut harness = Harness::new(videos(len), &config);
        let mut now = ms(0);

        for _ in 0..300 {
            now += ms(rng.random_range(0..4000));
            let input = match rng.random_range(0..9) {
                0 => Input::Select(rng.random_range(0..len)),
                1 => Input::Previous,
                2 => Input::Next,
                3 => Input::Key(Key::ArrowLeft),
                4 => Input::Key(Key::ArrowRight),
                5 => Input::TouchStart(rng.random_range(0.0..1280.0)),
                6 => Input::TouchEnd(rng.random_range(0.0..1280.0)),
                7 => {
                    if rng.random_bool(0.5) {
                        Input::HoverEnter
                    } else {
                        Input::HoverLeave
                    }
                }
                _ => Input::Tick,
            };
            harness.send(input, now);
            harness.stage.update(ms(rng.random_range(0..600)));

            let current = harness.carousel.current_index();
            assert!(current < len);
            assert_eq!(harness.active_slides(), [current]);
            assert_eq!(harness.active_indicators(), [current]);

            let playing: Vec<_> = harness
                .stage
                .slides()
                .iter()
                .enumerate()
                .filter(|(_, s)| s.media().is_some_and(|m| m.playing))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(playing, [current]);
        }
    }
}

#[test]
fn test_repeated_select_restarts_media_once_per_call() {
    let config = CarouselConfig::default();
    let mut harness = Harness::new(videos(3), &config);

    harness.send(Input::Select(1), ms(100));
    harness.send(Input::Select(1), ms(200));

    assert_eq!(harness.carousel.current_index(), 1);
    let clip = harness.stage.slides()[1].media().unwrap();
    // Initial activation plus two selects
    assert_eq!(clip.rewinds, 3);
    assert_eq!(clip.plays, 2);
    assert!(clip.playing);
    assert!(harness.stage.slides()[1].motion().is_some());
}

#[test]
fn test_swipe_direction_and_threshold() {
    let config = CarouselConfig::default();
    let mut harness = Harness::new(videos(3), &config);

    harness.send(Input::TouchStart(500.0), ms(10));
    harness.send(Input::TouchEnd(451.0), ms(20));
    assert_eq!(harness.carousel.current_index(), 0);

    harness.send(Input::TouchStart(500.0), ms(30));
    harness.send(Input::TouchEnd(449.0), ms(40));
    assert_eq!(harness.carousel.current_index(), 1);

    harness.send(Input::TouchStart(449.0), ms(50));
    harness.send(Input::TouchEnd(500.0), ms(60));
    assert_eq!(harness.carousel.current_index(), 0);
    let motion = harness.stage.slides()[0].motion().unwrap();
    assert_eq!(motion.kind, hero_carousel::stage::MotionKind::EnterFromLeft);
}

#[test]
fn test_blocked_playback_does_not_stall_carousel() {
    let config = CarouselConfig::default();
    let media = vec![Some(BlockedVideo), None, Some(BlockedVideo)];
    let mut harness = Harness::new(media, &config);

    harness.send(Input::Tick, ms(6000));
    harness.send(Input::Tick, ms(12_000));
    assert_eq!(harness.carousel.current_index(), 2);
    assert_eq!(harness.active_slides(), [2]);
    assert_eq!(harness.active_indicators(), [2]);
}

#[test]
fn test_previous_button_moves_backward() {
    let config = CarouselConfig::default();
    let mut harness = Harness::new(videos(4), &config);

    let transition = harness.carousel.handle(Input::Previous, ms(500)).unwrap();
    assert_eq!(transition.to, 3);
    assert_eq!(transition.direction, Direction::Backward);
}

#[test]
fn test_empty_carousel_has_no_instance() {
    assert!(Carousel::new(0, &CarouselConfig::default(), ms(0)).is_none());
}
