use crate::constants::{REVEAL_DURATION_SEC, REVEAL_EASING, REVEAL_OFFSET_PX, REVEAL_THRESHOLD};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// One "visibility changed" notification for a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio,
        }
    }

    #[inline]
    pub fn crosses_threshold(&self) -> bool {
        self.is_intersecting && self.ratio >= REVEAL_THRESHOLD
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Revealed,
}

/// Inline presentation of a reveal wrapper for its current state.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub transition: Option<String>,
}

impl RevealStyle {
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "opacity:{};transform:translateY({}px)",
            self.opacity, self.translate_y_px
        );
        match &self.transition {
            Some(t) => {
                css.push_str(";transition:");
                css.push_str(t);
            }
            None => css.push_str(";transition:none"),
        }
        css
    }
}

/// A content block that becomes visible once, the first time enough of it
/// scrolls into view. `Pending -> Revealed` is the only transition.
#[derive(Clone, Debug)]
pub struct RevealTarget {
    state: RevealState,
    delay_sec: f32,
    animated: bool,
}

impl RevealTarget {
    pub fn new(delay_sec: f32) -> Self {
        Self {
            state: RevealState::Pending,
            delay_sec: delay_sec.max(0.0),
            animated: true,
        }
    }

    #[inline]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    #[inline]
    pub fn delay_sec(&self) -> f32 {
        self.delay_sec
    }

    /// Feed a visibility event. Reports `Revealed` exactly once; everything
    /// after that is ignored.
    pub fn observe(&mut self, visibility: Visibility) -> Transition {
        if self.is_revealed() || !visibility.crosses_threshold() {
            return Transition::Unchanged;
        }
        self.state = RevealState::Revealed;
        Transition::Revealed
    }

    /// Reveal without animating, for hosts that cannot observe visibility.
    pub fn force_reveal(&mut self) -> Transition {
        if self.is_revealed() {
            return Transition::Unchanged;
        }
        self.state = RevealState::Revealed;
        self.animated = false;
        Transition::Revealed
    }

    pub fn style(&self) -> RevealStyle {
        let transition = self.animated.then(|| {
            format!(
                "all {}s {} {}s",
                REVEAL_DURATION_SEC, REVEAL_EASING, self.delay_sec
            )
        });
        match self.state {
            RevealState::Pending => RevealStyle {
                opacity: 0.0,
                translate_y_px: REVEAL_OFFSET_PX,
                transition,
            },
            RevealState::Revealed => RevealStyle {
                opacity: 1.0,
                translate_y_px: 0.0,
                transition,
            },
        }
    }
}

/// Targets of one page, addressed by the index returned from [`RevealSet::add`].
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    targets: Vec<RevealTarget>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, delay_sec: f32) -> usize {
        self.targets.push(RevealTarget::new(delay_sec));
        self.targets.len() - 1
    }

    #[inline]
    pub fn get(&self, id: usize) -> Option<&RevealTarget> {
        self.targets.get(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Unknown ids are ignored.
    pub fn observe(&mut self, id: usize, visibility: Visibility) -> Transition {
        self.targets
            .get_mut(id)
            .map_or(Transition::Unchanged, |t| t.observe(visibility))
    }

    /// Apply one observer callback's worth of events; returns the ids that
    /// were revealed by this batch.
    pub fn observe_batch<I>(&mut self, events: I) -> SmallVec<[usize; 4]>
    where
        I: IntoIterator<Item = (usize, Visibility)>,
    {
        events
            .into_iter()
            .filter(|&(id, v)| self.observe(id, v) == Transition::Revealed)
            .map(|(id, _)| id)
            .collect()
    }

    /// Reveal everything still pending, unanimated. Returns the ids changed.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (id, target) in self.targets.iter_mut().enumerate() {
            if target.force_reveal() == Transition::Revealed {
                changed.push(id);
            }
        }
        changed
    }

    pub fn pending(&self) -> usize {
        self.targets.iter().filter(|t| !t.is_revealed()).count()
    }
}
