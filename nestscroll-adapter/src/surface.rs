use nestscroll::ScrollState;

/// Read/write access to one scroll region of the host UI.
///
/// Adapters implement this for their scroll views. [`ScrollState`] implements it too, which is
/// handy for headless hosts and tests.
pub trait ScrollSurface {
    fn offset(&self) -> f64;

    fn set_offset(&mut self, offset: f64);

    fn content_extent(&self) -> f64;

    fn viewport_extent(&self) -> f64;

    /// Where this region's leading edge sits inside the enclosing region's content.
    ///
    /// Only meaningful for the inner region.
    fn origin(&self) -> f64 {
        0.0
    }

    fn scroll_state(&self) -> ScrollState {
        ScrollState::new(self.offset(), self.content_extent(), self.viewport_extent())
            .with_origin(self.origin())
    }
}

impl ScrollSurface for ScrollState {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn content_extent(&self) -> f64 {
        self.content_extent
    }

    fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    fn origin(&self) -> f64 {
        self.origin
    }

    fn scroll_state(&self) -> ScrollState {
        *self
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn offset(&self) -> f64 {
        (**self).offset()
    }

    fn set_offset(&mut self, offset: f64) {
        (**self).set_offset(offset);
    }

    fn content_extent(&self) -> f64 {
        (**self).content_extent()
    }

    fn viewport_extent(&self) -> f64 {
        (**self).viewport_extent()
    }

    fn origin(&self) -> f64 {
        (**self).origin()
    }
}
