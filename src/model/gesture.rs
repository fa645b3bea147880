//! Slide-to-confirm gesture
//!
//! A thumb travels along a horizontal track. Releasing it past the commit
//! threshold confirms; anything short of that snaps back to the start.
//!
//! The gesture is an explicit two-state machine:
//!
//! ```text
//!   Idle --press--> Dragging { anchor }
//!   Dragging --move--> Dragging        (offset clamped to [0, max_travel])
//!   Dragging --release--> Idle         (Completed or SnappedBack)
//! ```
//!
//! Coordinates are plain `f32` so the same machine serves terminal cells
//! and the pixel reference geometry alike.

/// Fraction of the travel the thumb must pass before a release confirms
pub const COMMIT_FRACTION: f32 = 0.9;

/// Track geometry of the control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideGeometry {
    pub track_width: f32,
    pub thumb_width: f32,
    pub padding: f32,
    pub commit_fraction: f32,
}

impl Default for SlideGeometry {
    /// Reference mobile geometry: 340 wide track, 56 wide thumb, 4 padding
    fn default() -> Self {
        Self {
            track_width: 340.0,
            thumb_width: 56.0,
            padding: 4.0,
            commit_fraction: COMMIT_FRACTION,
        }
    }
}

impl SlideGeometry {
    /// Geometry measured in terminal cells
    pub fn cells(track_width: u16, thumb_width: u16, padding: u16) -> Self {
        Self {
            track_width: f32::from(track_width),
            thumb_width: f32::from(thumb_width),
            padding: f32::from(padding),
            commit_fraction: COMMIT_FRACTION,
        }
    }

    /// Furthest the thumb can travel from its resting position
    pub fn max_travel(&self) -> f32 {
        (self.track_width - self.thumb_width - 2.0 * self.padding).max(0.0)
    }

    /// Offset the thumb has to exceed for a release to confirm
    pub fn threshold(&self) -> f32 {
        self.max_travel() * self.commit_fraction
    }

    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_travel())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    /// `anchor` is the pointer position minus the offset at press time
    Dragging { anchor: f32 },
}

/// Result of releasing the thumb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// Threshold crossed; the thumb rests at the end of the track
    Completed,
    /// Threshold not reached; the thumb went back to the start
    SnappedBack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideGesture {
    geometry: SlideGeometry,
    offset: f32,
    phase: DragPhase,
}

impl Default for SlideGesture {
    fn default() -> Self {
        Self::new(SlideGeometry::default())
    }
}

impl SlideGesture {
    pub fn new(geometry: SlideGeometry) -> Self {
        Self {
            geometry,
            offset: 0.0,
            phase: DragPhase::Idle,
        }
    }

    pub fn geometry(&self) -> SlideGeometry {
        self.geometry
    }

    /// Replace the geometry, e.g. after the track was re-measured.
    /// The current offset is clamped into the new travel range.
    pub fn set_geometry(&mut self, geometry: SlideGeometry) {
        self.geometry = geometry;
        self.offset = geometry.clamp(self.offset);
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[cfg(test)]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Pointer went down on the thumb
    pub fn press(&mut self, pointer_x: f32) {
        self.phase = DragPhase::Dragging {
            anchor: pointer_x - self.offset,
        };
    }

    /// Pointer moved; ignored unless dragging. Returns the new offset.
    pub fn drag_to(&mut self, pointer_x: f32) -> f32 {
        if let DragPhase::Dragging { anchor } = self.phase {
            self.offset = self.geometry.clamp(pointer_x - anchor);
        }
        self.offset
    }

    /// Move the thumb by `delta` without a pointer, starting a drag if idle
    pub fn nudge(&mut self, delta: f32) -> f32 {
        if !self.is_dragging() {
            self.press(self.offset);
        }
        let target = self.offset + delta;
        if let DragPhase::Dragging { anchor } = self.phase {
            self.drag_to(target + anchor)
        } else {
            self.offset
        }
    }

    /// Pointer released or left the track.
    ///
    /// Returns `None` when no drag was in progress, so a stray release can
    /// never confirm twice.
    pub fn release(&mut self) -> Option<SlideOutcome> {
        if !self.is_dragging() {
            return None;
        }
        self.phase = DragPhase::Idle;

        if self.offset > self.geometry.threshold() {
            self.offset = self.geometry.max_travel();
            Some(SlideOutcome::Completed)
        } else {
            self.offset = 0.0;
            Some(SlideOutcome::SnappedBack)
        }
    }

    /// Abandon the drag without evaluating the threshold; the thumb returns
    /// to the start. Used when something else takes over the input.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
        self.offset = 0.0;
    }

    /// Share of the travel covered, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        let max = self.geometry.max_travel();
        if max <= 0.0 {
            0.0
        } else {
            self.offset / max
        }
    }
}
