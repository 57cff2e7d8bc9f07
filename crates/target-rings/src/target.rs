use crate::config::TargetConfig;
use crate::geometry::{ClosedPath, Point, Rect};
use crate::hit::{self, SegmentHit};
use crate::layout::{self, LayoutError};
use crate::ring::RingKind;
use crate::segment::{Color, ReferenceId, Segment};
use crate::store::{SegmentConfigError, SegmentStore};
use crate::style::{LabelStyle, StrokeStyle};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TargetError {
    #[error(transparent)]
    Config(#[from] SegmentConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Everything the host needs to draw one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentVisual {
    pub ring: RingKind,
    pub reference_id: ReferenceId,
    pub fill: Color,
    pub path: ClosedPath,
    pub anchor: Point,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Press {
    #[default]
    Idle,
    Tracking(Option<SegmentHit>),
    Cancelled,
}

type TapListener = Box<dyn FnMut(ReferenceId)>;

pub struct TargetView {
    store: SegmentStore,
    bounds: Option<Rect>,
    stroke: StrokeStyle,
    label: LabelStyle,
    press: Press,
    listener: Option<TapListener>,
}

impl Default for TargetView {
    fn default() -> Self {
        Self::new(SegmentStore::new())
    }
}

impl TargetView {
    pub fn new(store: SegmentStore) -> Self {
        Self {
            store,
            bounds: None,
            stroke: StrokeStyle::default(),
            label: LabelStyle::default(),
            press: Press::Idle,
            listener: None,
        }
    }

    pub fn from_config(config: &TargetConfig) -> Result<Self, SegmentConfigError> {
        let mut view = Self::new(config.build_store()?);
        view.stroke = config.stroke.clone();
        view.label = config.label.clone();
        Ok(view)
    }

    /// Replaces the single tap listener.
    pub fn set_tap_listener(&mut self, listener: impl FnMut(ReferenceId) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn store(&self) -> &SegmentStore {
        &self.store
    }

    pub fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    pub fn label_style(&self) -> &LabelStyle {
        &self.label
    }

    pub fn font_size(&self) -> Option<f64> {
        self.bounds.map(|b| self.label.font_size(&b))
    }

    pub fn on_bounds_changed(&mut self, bounds: Rect) -> Result<(), LayoutError> {
        self.bounds = Some(bounds);
        self.press = Press::Idle;
        self.relayout()
    }

    /// Replaces one ring and lays it out again if bounds are known.
    pub fn configure(&mut self, kind: RingKind, segments: Vec<Segment>) -> Result<(), TargetError> {
        self.store.configure(kind, segments)?;
        self.press = Press::Idle;
        self.relayout()?;
        Ok(())
    }

    /// Swaps in a whole new configuration. On error the current one stays active.
    pub fn reconfigure(&mut self, config: &TargetConfig) -> Result<(), TargetError> {
        let store = config.build_store()?;
        if let Some(bounds) = self.bounds {
            layout::layout(bounds, store.rings())?;
        }
        self.store = store;
        self.stroke = config.stroke.clone();
        self.label = config.label.clone();
        self.press = Press::Idle;
        self.relayout()?;
        Ok(())
    }

    fn relayout(&mut self) -> Result<(), LayoutError> {
        let Some(bounds) = self.bounds else {
            return Ok(());
        };
        match layout::layout(bounds, self.store.rings()) {
            Ok(result) => {
                self.store.apply_layout(&result);
                Ok(())
            }
            Err(e) => {
                self.store.invalidate();
                Err(e)
            }
        }
    }

    pub fn hit_test(&self, point: Point) -> Option<ReferenceId> {
        hit::hit_test(point, self.store.rings())
    }

    pub fn on_pointer_down(&mut self, point: Point) {
        self.press = Press::Tracking(hit::locate(point, self.store.rings()));
    }

    /// Leaving the pressed segment cancels the tap.
    pub fn on_pointer_moved(&mut self, point: Point) {
        if let Press::Tracking(Some(pressed)) = self.press
            && !self.pressed_segment_contains(pressed, point)
        {
            log::debug!("Press on {} cancelled", pressed.reference_id);
            self.press = Press::Cancelled;
        }
    }

    /// Hit tests the release point and notifies the listener on a qualifying tap.
    ///
    /// Without a press on a segment the release alone decides. After a press on a segment, the
    /// tap only fires when released on that same segment.
    pub fn on_pointer_up(&mut self, point: Point) -> Option<ReferenceId> {
        let press = std::mem::take(&mut self.press);
        let hit = hit::locate(point, self.store.rings());

        let tapped = match press {
            Press::Idle | Press::Tracking(None) => hit,
            Press::Tracking(Some(pressed)) => hit.filter(|h| *h == pressed),
            Press::Cancelled => None,
        }
        .map(|h| h.reference_id)?;

        log::info!("Segment {} tapped", tapped);
        if let Some(listener) = self.listener.as_mut() {
            listener(tapped);
        }
        Some(tapped)
    }

    fn pressed_segment_contains(&self, pressed: SegmentHit, point: Point) -> bool {
        self.store
            .ring(pressed.ring)
            .segments
            .get(pressed.index)
            .is_some_and(|s| s.contains(point))
    }

    /// Drawable segments, outer ring first. Empty until a layout pass has succeeded.
    pub fn visuals(&self) -> Vec<SegmentVisual> {
        self.store
            .segments()
            .filter_map(|(ring, segment)| {
                let wedge = segment.wedge?;
                Some(SegmentVisual {
                    ring,
                    reference_id: segment.reference_id,
                    fill: segment.color,
                    path: wedge.path(),
                    anchor: wedge.anchor(),
                    label: segment.reference_id.label(),
                })
            })
            .collect()
    }
}
