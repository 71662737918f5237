use crate::debounce::{DebouncedIndicator, IndicatorOptions};
use crate::reveal::{DelayedReveal, RevealOptions};
use crate::transition::Transition;

/// Content wrapped in a [`DelayedReveal`]. The host draws
/// [`visible`](Self::visible) when it returns the content, animated with
/// [`transition`](Self::transition).
pub struct DelayedContent<C> {
    reveal: DelayedReveal,
    content: C,
}

impl<C> DelayedContent<C> {
    pub fn new(content: C, is_presented: bool) -> Self {
        Self {
            reveal: DelayedReveal::new(is_presented),
            content,
        }
    }

    pub fn with_options(content: C, is_presented: bool, options: RevealOptions) -> Self {
        Self {
            reveal: DelayedReveal::with_options(is_presented, options),
            content,
        }
    }

    /// The wrapped content while mounted, `None` while hidden.
    pub fn visible(&self) -> Option<&C> {
        self.reveal.is_rendered().then_some(&self.content)
    }

    pub fn transition(&self) -> Transition {
        self.reveal.transition()
    }

    /// Forward the next presentation value to the underlying machine.
    pub fn set_presented(&self, is_presented: bool) {
        self.reveal.set_presented(is_presented);
    }

    /// The underlying machine, for subscribing or binding.
    pub fn reveal(&self) -> &DelayedReveal {
        &self.reveal
    }

    pub fn into_inner(self) -> C {
        self.content
    }
}

/// An indicator wrapped in a [`DebouncedIndicator`]. Mirrors
/// [`DelayedContent`] for the debounce machine.
pub struct IndicatorContent<C> {
    indicator: DebouncedIndicator,
    content: C,
}

impl<C> IndicatorContent<C> {
    pub fn new(content: C, is_indicating: bool) -> Self {
        Self {
            indicator: DebouncedIndicator::new(is_indicating),
            content,
        }
    }

    pub fn with_options(content: C, is_indicating: bool, options: IndicatorOptions) -> Self {
        Self {
            indicator: DebouncedIndicator::with_options(is_indicating, options),
            content,
        }
    }

    /// The wrapped indicator while mounted, `None` while hidden.
    pub fn visible(&self) -> Option<&C> {
        self.indicator.is_rendered().then_some(&self.content)
    }

    pub fn transition(&self) -> Transition {
        self.indicator.transition()
    }

    /// Forward the next activity value to the underlying machine.
    pub fn set_indicating(&self, is_indicating: bool) {
        self.indicator.set_indicating(is_indicating);
    }

    /// The underlying machine, for subscribing or binding.
    pub fn indicator(&self) -> &DebouncedIndicator {
        &self.indicator
    }

    pub fn into_inner(self) -> C {
        self.content
    }
}
