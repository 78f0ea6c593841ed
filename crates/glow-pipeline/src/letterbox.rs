use crate::LetterboxConfig;
use glow_base::{Rect, Vec2};
use glow_image::{Frame, ImageError};
use std::fmt;

/// Which part of the rectified frame carries picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CropDecision {
    #[default]
    Full,
    /// 4:3 content with black bars `bar_width` wide on the left and right.
    FourByThree { bar_width: usize },
    /// 21:9 content with black bars `bar_height` tall at the top and bottom.
    TwentyOneByNine { bar_height: usize },
}

impl CropDecision {
    /// The retained region of a frame of `size`.
    pub fn region(&self, size: Vec2<usize>) -> Rect<usize> {
        match *self {
            CropDecision::Full => Rect::full(size),
            CropDecision::FourByThree { bar_width } => Rect::new(
                Vec2::new(bar_width, 0),
                Vec2::new(size.x.saturating_sub(2 * bar_width), size.y),
            ),
            CropDecision::TwentyOneByNine { bar_height } => Rect::new(
                Vec2::new(0, bar_height),
                Vec2::new(size.x, size.y.saturating_sub(2 * bar_height)),
            ),
        }
    }

    /// Cut the bars off `frame`. `Full` hands the frame back untouched.
    pub fn apply(&self, frame: Frame) -> Result<Frame, ImageError> {
        match self {
            CropDecision::Full => Ok(frame),
            _ => frame.crop(self.region(frame.size())),
        }
    }
}

impl fmt::Display for CropDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropDecision::Full => write!(f, "full frame"),
            CropDecision::FourByThree { bar_width } => {
                write!(f, "4:3 (side bars {bar_width}px)")
            }
            CropDecision::TwentyOneByNine { bar_height } => {
                write!(f, "21:9 (top/bottom bars {bar_height}px)")
            }
        }
    }
}

/// Consecutive-dark-frame counters of both probes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterboxState {
    pub four_by_three_frames: u32,
    pub twenty_one_by_nine_frames: u32,
}

/// Detects persistent black bars in rectified frames.
///
/// Two small probes sit where the bars of 4:3 and 21:9 content would be:
/// one in the middle of the right-hand side bar, one in the middle of the
/// top bar. Each frame where a probe is dark bumps its counter, any other
/// frame resets it. Once a counter exceeds `persistence_frames` the
/// matching crop applies. 4:3 wins when both qualify.
pub struct LetterboxDetector {
    config: LetterboxConfig,
    state: LetterboxState,
    current: CropDecision,
}

impl LetterboxDetector {
    pub fn new(config: LetterboxConfig) -> Self {
        Self {
            config,
            state: LetterboxState::default(),
            current: CropDecision::Full,
        }
    }

    pub fn config(&self) -> &LetterboxConfig {
        &self.config
    }

    pub fn state(&self) -> LetterboxState {
        self.state
    }

    /// The decision returned by the last `detect` call.
    pub fn current(&self) -> CropDecision {
        self.current
    }

    pub fn bar_width(&self, size: Vec2<usize>) -> usize {
        size.x / self.config.bar_width_divisor
    }

    pub fn bar_height(&self, size: Vec2<usize>) -> usize {
        size.y / self.config.bar_height_divisor
    }

    /// Probe inside the right side bar, halfway down.
    pub fn four_by_three_probe(&self, size: Vec2<usize>) -> Rect<usize> {
        let n = self.config.probe_size;
        let x = size.x.saturating_sub(self.bar_width(size) / 2);
        Rect::new(Vec2::new(x, size.y / 2), Vec2::new(n, n))
    }

    /// Probe inside the top bar, halfway across.
    pub fn twenty_one_by_nine_probe(&self, size: Vec2<usize>) -> Rect<usize> {
        let n = self.config.probe_size;
        Rect::new(
            Vec2::new(size.x / 2, self.bar_height(size) / 2),
            Vec2::new(n, n),
        )
    }

    /// Update the counters with `frame` and decide the crop for it.
    pub fn detect(&mut self, frame: &Frame) -> CropDecision {
        let size = frame.size();
        let four_by_three_dark = self.is_dark(frame, self.four_by_three_probe(size));
        let twenty_one_by_nine_dark = self.is_dark(frame, self.twenty_one_by_nine_probe(size));

        self.state.four_by_three_frames =
            bump(self.state.four_by_three_frames, four_by_three_dark);
        self.state.twenty_one_by_nine_frames =
            bump(self.state.twenty_one_by_nine_frames, twenty_one_by_nine_dark);

        let persistence = self.config.persistence_frames;
        let decision = if self.state.four_by_three_frames > persistence {
            CropDecision::FourByThree {
                bar_width: self.bar_width(size),
            }
        } else if self.state.twenty_one_by_nine_frames > persistence {
            CropDecision::TwentyOneByNine {
                bar_height: self.bar_height(size),
            }
        } else {
            CropDecision::Full
        };

        if decision != self.current {
            log::info!("crop changed: {} -> {}", self.current, decision);
            self.current = decision;
        }
        decision
    }

    /// A probe that misses the frame entirely is never dark.
    fn is_dark(&self, frame: &Frame, probe: Rect<usize>) -> bool {
        frame
            .mean(probe)
            .is_some_and(|mean| mean.iter().all(|&c| c < self.config.darkness_threshold))
    }
}

fn bump(count: u32, dark: bool) -> u32 {
    if dark { count.saturating_add(1) } else { 0 }
}
