//! Scroll-triggered reveal animation
//!
//! Elements start transparent and shifted down, each with a transition delay
//! that grows with its position. When a visibility event reports an element
//! in view it gets its final style. The switch is one-way: scrolling away
//! again does nothing.

use std::time::Duration;

use futures::{Stream, StreamExt};
use tracing::debug;

use crate::config::RevealConfig;

/// An element whose inline style can be set
pub trait Revealable {
    fn set_style(&self, property: &str, value: &str);
}

/// Visibility change reported by an intersection watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEvent {
    /// Position of the element in the prepared set
    pub index: usize,
    /// Whether the element crossed into view
    pub intersecting: bool,
}

impl VisibilityEvent {
    #[must_use]
    pub const fn entered(index: usize) -> Self {
        Self {
            index,
            intersecting: true,
        }
    }

    #[must_use]
    pub const fn left(index: usize) -> Self {
        Self {
            index,
            intersecting: false,
        }
    }
}

/// Result of handling one [`VisibilityEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Final style applied just now
    Revealed(usize),
    /// Already revealed earlier; nothing changed
    AlreadyRevealed(usize),
    /// Element is not in view
    Hidden(usize),
    /// No element at that index
    Unknown(usize),
}

/// Transition delay of the element at `index`
#[must_use]
pub fn stagger_delay(config: &RevealConfig, index: usize) -> Duration {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    Duration::from_millis(config.stagger_ms.saturating_mul(index))
}

/// Inline styles applied before the element is in view
#[must_use]
pub fn initial_styles(config: &RevealConfig, index: usize) -> [(&'static str, String); 4] {
    let duration = config.duration_ms;
    [
        ("opacity", "0".to_string()),
        ("transform", format!("translateY({}px)", config.offset_px)),
        (
            "transition",
            format!("opacity {duration}ms ease, transform {duration}ms ease"),
        ),
        (
            "transition-delay",
            format!("{}ms", stagger_delay(config, index).as_millis()),
        ),
    ]
}

/// Inline styles of a revealed element
pub const REVEALED_STYLES: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

struct Tracked<E> {
    element: E,
    revealed: bool,
}

/// Tracks a set of elements and reveals each one once
pub struct RevealAnimator<E> {
    elements: Vec<Tracked<E>>,
    remaining: usize,
}

impl<E: Revealable> RevealAnimator<E> {
    /// Applies the initial hidden style to every element, in order
    pub fn prepare(elements: Vec<E>, config: &RevealConfig) -> Self {
        let elements: Vec<Tracked<E>> = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                for (property, value) in initial_styles(config, index) {
                    element.set_style(property, &value);
                }
                Tracked {
                    element,
                    revealed: false,
                }
            })
            .collect();

        debug!(count = elements.len(), "reveal elements prepared");
        let remaining = elements.len();
        Self {
            elements,
            remaining,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements still waiting to be revealed
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// True once every element has been revealed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.elements.get(index).is_some_and(|t| t.revealed)
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&E> {
        self.elements.get(index).map(|t| &t.element)
    }

    /// Reveals the element `event` points at if it just came into view
    pub fn handle(&mut self, event: VisibilityEvent) -> RevealOutcome {
        let Some(tracked) = self.elements.get_mut(event.index) else {
            return RevealOutcome::Unknown(event.index);
        };
        if tracked.revealed {
            return RevealOutcome::AlreadyRevealed(event.index);
        }
        if !event.intersecting {
            return RevealOutcome::Hidden(event.index);
        }

        for (property, value) in REVEALED_STYLES {
            tracked.element.set_style(property, value);
        }
        tracked.revealed = true;
        self.remaining = self.remaining.saturating_sub(1);
        RevealOutcome::Revealed(event.index)
    }

    /// Consumes visibility events until every element is revealed or the
    /// stream ends
    ///
    /// `on_reveal` runs once per element, right after its final style is set.
    pub async fn run<St, F>(mut self, mut events: St, mut on_reveal: F) -> Self
    where
        St: Stream<Item = VisibilityEvent> + Unpin,
        F: FnMut(usize, &E),
    {
        while !self.is_complete() {
            let Some(event) = events.next().await else {
                break;
            };
            if let RevealOutcome::Revealed(index) = self.handle(event) {
                if let Some(element) = self.element(index) {
                    on_reveal(index, element);
                }
            }
        }
        debug!(remaining = self.remaining, "reveal watcher finished");
        self
    }
}
