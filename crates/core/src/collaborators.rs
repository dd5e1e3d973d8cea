//! Hooks for the pieces that live outside the state machine.
//!
//! The controller only tells collaborators when the popover opens or closes.
//! Placement math and focus handling belong to the host. `()` implements both
//! traits as a no-op for hosts that do not need them.

/// Places the popover relative to its anchor.
pub trait Positioner {
	/// Called on every open/closed transition. Implementations start tracking
	/// the anchor and viewport while open and drop any placement when closed.
	fn set_open(&mut self, open: bool);

	/// The anchor or viewport changed; the next placement must be recomputed.
	fn invalidate(&mut self) {}
}

/// Traps focus while the popover is open.
///
/// The scope is also the component that turns escape, blur and outside clicks
/// into dismiss requests; that direction is expressed through
/// [`DropdownEvent`](crate::DropdownEvent)s sent back to the controller.
pub trait FocusScope {
	fn acquire(&mut self);
	fn release(&mut self);
}

impl Positioner for () {
	fn set_open(&mut self, _open: bool) {}
}

impl FocusScope for () {
	fn acquire(&mut self) {}

	fn release(&mut self) {}
}
