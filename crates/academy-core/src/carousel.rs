//! Testimonial Carousel
//!
//! Slide position for the "Student wins" section. Navigation wraps in both
//! directions.

/// Cards shown per slide
pub const CARDS_PER_SLIDE: usize = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    slides: usize,
    index: usize,
}

impl Carousel {
    /// Carousel over `cards` testimonials
    pub const fn new(cards: usize) -> Self {
        Self {
            slides: cards.div_ceil(CARDS_PER_SLIDE),
            index: 0,
        }
    }

    pub const fn slides(&self) -> usize {
        self.slides
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Jump to slide `target`, wrapping out-of-range targets around
    #[must_use]
    pub fn slide_to(self, target: isize) -> Self {
        let Ok(slides) = isize::try_from(self.slides) else {
            return self;
        };
        if slides == 0 {
            return self;
        }
        let index = usize::try_from(target.rem_euclid(slides)).unwrap_or(0);
        Self { index, ..self }
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.slide_to(self.signed_index() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        self.slide_to(self.signed_index() - 1)
    }

    /// Cards on the slide at `slide`, as a range into the testimonial list
    pub fn cards_on(slide: usize, cards: usize) -> std::ops::Range<usize> {
        let start = (slide * CARDS_PER_SLIDE).min(cards);
        start..(start + CARDS_PER_SLIDE).min(cards)
    }

    /// Horizontal shift of the slide track, in percent of its full width
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_percent(&self) -> f64 {
        if self.slides == 0 {
            0.0
        } else {
            (self.index as f64 * 100.0) / self.slides as f64
        }
    }

    fn signed_index(self) -> isize {
        isize::try_from(self.index).unwrap_or(0)
    }
}
