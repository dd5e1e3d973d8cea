use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use select_dropdown_core::Positioner;
use tracing::{debug, info};

use super::App;
use super::outcome::DropdownOutcome;

impl App {
	/// Pump the terminal event loop until the user accepts or cancels.
	pub fn run(&mut self) -> Result<DropdownOutcome> {
		info!(
			options = self.controller.options().len(),
			mode = self.controller.mode().as_str(),
			"dropdown session started"
		);
		let result = with_terminal(
			|| {
				let mut terminal = ratatui::init();
				execute!(io::stdout(), EnableMouseCapture)?;
				terminal.clear()?;
				Ok(terminal)
			},
			|mut terminal| self.pump_events(&mut terminal),
			|| {
				ratatui::restore();
				execute!(io::stdout(), DisableMouseCapture)?;
				Ok(())
			},
		);

		if let Ok(outcome) = &result {
			info!(accepted = outcome.accepted, selected = outcome.value.len(), "dropdown session finished");
		}
		result
	}

	fn pump_events(&mut self, terminal: &mut DefaultTerminal) -> Result<DropdownOutcome> {
		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<DropdownOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(width, height)) => {
						debug!(width, height, "terminal resized");
						self.controller.positioner_mut().invalidate();
					}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				let handled = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => Ok(None),
				};
				match handled {
					Ok(Some(outcome)) => {
						maybe_outcome = Some(Ok(outcome));
						break;
					}
					Ok(None) => {}
					Err(err) => {
						maybe_outcome = Some(Err(err));
						break;
					}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break outcome;
			}

			thread::sleep(Duration::from_millis(16));
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}
		result
	}
}

/// Run `body` on the terminal produced by `setup`, then always run
/// `teardown`, even when `setup` failed halfway through.
///
/// The first error wins: a failing session is reported over a failing
/// teardown.
fn with_terminal<T, R>(
	setup: impl FnOnce() -> Result<T>,
	body: impl FnOnce(T) -> Result<R>,
	teardown: impl FnOnce() -> Result<()>,
) -> Result<R> {
	let result = setup().and_then(body);
	let restored = teardown();
	let value = result?;
	restored?;
	Ok(value)
}
