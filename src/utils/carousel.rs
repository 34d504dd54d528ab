use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AutoAdvance {
    Advancing,
    /// A manual selection happened; the next finish of the selected preview
    /// does not advance.
    SuppressedOnce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselState {
    pub selected_item: usize,
    pub auto_advance: AutoAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    PreviewFinished(usize),
    Select(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEffect {
    None,
    Show(usize),
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            selected_item: 0,
            auto_advance: AutoAdvance::Advancing,
        }
    }
}

impl CarouselState {
    pub fn transition(self, event: CarouselEvent, preview_count: usize) -> (Self, CarouselEffect) {
        if preview_count < 2 {
            return (self, CarouselEffect::None);
        }

        match (self.auto_advance, event) {
            (_, CarouselEvent::Select(i)) if i < preview_count => (
                Self {
                    selected_item: i,
                    auto_advance: AutoAdvance::SuppressedOnce,
                },
                CarouselEffect::Show(i),
            ),
            (_, CarouselEvent::Select(_)) => (self, CarouselEffect::None),
            (AutoAdvance::Advancing, CarouselEvent::PreviewFinished(i)) if i == self.selected_item => {
                let next = (i + 1) % preview_count;
                (
                    Self {
                        selected_item: next,
                        ..self
                    },
                    CarouselEffect::Show(next),
                )
            }
            (AutoAdvance::SuppressedOnce, CarouselEvent::PreviewFinished(i)) if i == self.selected_item => (
                Self {
                    auto_advance: AutoAdvance::Advancing,
                    ..self
                },
                CarouselEffect::None,
            ),
            (_, CarouselEvent::PreviewFinished(_)) => (self, CarouselEffect::None),
        }
    }
}
