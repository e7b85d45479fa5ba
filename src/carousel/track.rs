use std::collections::VecDeque;

/// One slide as the carousel sees it: an identifier, the width of its rendered
/// frame and the horizontal offset used to slide it in and out of view.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSlide<T> {
    pub id: T,
    pub width: f32,
    pub offset: f32,
}

impl<T> TrackSlide<T> {
    pub fn new(id: T, width: f32) -> Self {
        Self { id, width, offset: 0.0 }
    }
}

/// Ordered slide sequence. Position 0 is the head (the visible slide).
#[derive(Debug, Clone, Default)]
pub struct SlideTrack<T> {
    slides: VecDeque<TrackSlide<T>>,
}

impl<T> SlideTrack<T> {
    pub fn new(slides: impl IntoIterator<Item = TrackSlide<T>>) -> Self {
        Self { slides: slides.into_iter().collect() }
    }

    pub fn head(&self) -> Option<&TrackSlide<T>> {
        self.slides.front()
    }

    pub fn head_mut(&mut self) -> Option<&mut TrackSlide<T>> {
        self.slides.front_mut()
    }

    #[cfg(test)]
    pub fn tail(&self) -> Option<&TrackSlide<T>> {
        self.slides.back()
    }

    /// Move the head to the tail. Returns the moved slide.
    pub fn rotate_forward(&mut self) -> Option<&mut TrackSlide<T>> {
        let head = self.slides.pop_front()?;
        self.slides.push_back(head);
        self.slides.back_mut()
    }

    /// Move the tail in front of the head. Returns the moved slide.
    pub fn rotate_backward(&mut self) -> Option<&mut TrackSlide<T>> {
        let tail = self.slides.pop_back()?;
        self.slides.push_front(tail);
        self.slides.front_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackSlide<T>> {
        self.slides.iter()
    }

    /// Slide identifiers in display order.
    pub fn order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.slides.iter().map(|s| s.id.clone()).collect()
    }
}
