//! Placement of the popover relative to the trigger.

use ratatui::layout::{Rect, Size};
use select_dropdown_core::Positioner;
use tracing::trace;

/// Side of the anchor the popover ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	Below,
	Above,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
	pub area: Rect,
	pub side: Side,
}

/// Compute where a popover of `content` size goes next to `anchor`.
///
/// Prefers the space below the anchor, flips above when the content only fits
/// there (or there is strictly more room above), shifts horizontally to stay
/// inside `viewport`, never gets narrower than the anchor and is clipped to
/// the room available on the chosen side.
#[must_use]
pub fn place(anchor: Rect, viewport: Rect, content: Size, offset: u16) -> Placement {
	let below_top = anchor.bottom().saturating_add(offset);
	let space_below = viewport.bottom().saturating_sub(below_top);
	let space_above = anchor
		.y
		.saturating_sub(offset)
		.saturating_sub(viewport.y);

	let side = if content.height <= space_below || space_below >= space_above {
		Side::Below
	} else {
		Side::Above
	};

	let width = content.width.max(anchor.width).min(viewport.width);
	let x = anchor
		.x
		.min(viewport.right().saturating_sub(width))
		.max(viewport.x);

	let area = match side {
		Side::Below => Rect::new(x, below_top, width, content.height.min(space_below)),
		Side::Above => {
			let height = content.height.min(space_above);
			let y = anchor.y.saturating_sub(offset).saturating_sub(height);
			Rect::new(x, y, width, height)
		}
	};

	Placement { area, side }
}

/// Terminal [`Positioner`]: caches the last placement while the popover is
/// open and recomputes it when invalidated or when its inputs change.
#[derive(Debug, Default)]
pub struct PopoverPositioner {
	open: bool,
	dirty: bool,
	offset: u16,
	inputs: Option<(Rect, Rect, Size)>,
	placement: Option<Placement>,
}

impl PopoverPositioner {
	/// Positioner keeping `offset` rows between the anchor and the popover.
	#[must_use]
	pub fn with_offset(offset: u16) -> Self {
		Self {
			offset,
			..Self::default()
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	#[must_use]
	pub fn placement(&self) -> Option<Placement> {
		self.placement
	}

	/// Place the popover for this frame. `None` while closed.
	pub fn update(&mut self, anchor: Rect, viewport: Rect, content: Size) -> Option<Placement> {
		if !self.open {
			return None;
		}
		let inputs = (anchor, viewport, content);
		if self.dirty || self.inputs != Some(inputs) {
			let placement = place(anchor, viewport, content, self.offset);
			trace!(?placement, "popover placed");
			self.placement = Some(placement);
			self.inputs = Some(inputs);
			self.dirty = false;
		}
		self.placement
	}
}

impl Positioner for PopoverPositioner {
	fn set_open(&mut self, open: bool) {
		self.open = open;
		self.dirty = open;
		if !open {
			self.inputs = None;
			self.placement = None;
		}
	}

	fn invalidate(&mut self) {
		self.dirty = true;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const VIEWPORT: Rect = Rect::new(0, 0, 40, 20);

	#[test]
	fn opens_below_when_content_fits() {
		let anchor = Rect::new(2, 1, 20, 3);
		let placement = place(anchor, VIEWPORT, Size::new(10, 6), 0);
		assert_eq!(placement.side, Side::Below);
		assert_eq!(placement.area, Rect::new(2, 4, 20, 6));
	}

	#[test]
	fn flips_above_when_below_is_too_small() {
		let anchor = Rect::new(0, 15, 20, 3);
		let placement = place(anchor, VIEWPORT, Size::new(20, 8), 0);
		assert_eq!(placement.side, Side::Above);
		assert_eq!(placement.area, Rect::new(0, 7, 20, 8));
	}

	#[test]
	fn clips_to_the_larger_side_when_nothing_fits() {
		let anchor = Rect::new(0, 6, 20, 3);
		let placement = place(anchor, VIEWPORT, Size::new(20, 30), 0);
		assert_eq!(placement.side, Side::Below);
		assert_eq!(placement.area.height, 11);
	}

	#[test]
	fn shifts_into_the_viewport_horizontally() {
		let anchor = Rect::new(30, 0, 8, 1);
		let placement = place(anchor, VIEWPORT, Size::new(16, 4), 1);
		assert_eq!(placement.area, Rect::new(24, 2, 16, 4));
	}

	#[test]
	fn positioner_only_places_while_open() {
		let mut positioner = PopoverPositioner::default();
		let anchor = Rect::new(0, 0, 10, 3);
		assert_eq!(positioner.update(anchor, VIEWPORT, Size::new(10, 5)), None);

		positioner.set_open(true);
		let placed = positioner.update(anchor, VIEWPORT, Size::new(10, 5));
		assert_eq!(placed.map(|placement| placement.area.y), Some(3));

		positioner.set_open(false);
		assert_eq!(positioner.placement(), None);
	}

	#[test]
	fn positioner_offset_separates_popover_from_anchor() {
		let mut positioner = PopoverPositioner::with_offset(1);
		positioner.set_open(true);

		let below = positioner.update(Rect::new(0, 0, 10, 3), VIEWPORT, Size::new(10, 5));
		assert_eq!(below.map(|placement| placement.area.y), Some(4));

		let above = positioner.update(Rect::new(0, 16, 10, 3), VIEWPORT, Size::new(10, 5));
		assert_eq!(
			above.map(|placement| (placement.side, placement.area.bottom())),
			Some((Side::Above, 15))
		);
	}
}
