use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::view::{ListStatus, TriggerSummary};

type Changes = Rc<RefCell<Vec<Value>>>;

#[derive(Debug, Default)]
struct Recorder {
	calls: Vec<&'static str>,
}

impl Positioner for Recorder {
	fn set_open(&mut self, open: bool) {
		self.calls.push(if open { "show" } else { "hide" });
	}

	fn invalidate(&mut self) {
		self.calls.push("invalidate");
	}
}

impl FocusScope for Recorder {
	fn acquire(&mut self) {
		self.calls.push("trap");
	}

	fn release(&mut self) {
		self.calls.push("release");
	}
}

fn fruit() -> Vec<SelectOption> {
	vec![
		SelectOption::new(1, "Apple"),
		SelectOption::new(2, "Banana"),
		SelectOption::new(3, "Cherry"),
		SelectOption::new(4, "Durian").disabled(),
		SelectOption::new(5, "Elderberry"),
	]
}

fn tracked(
	options: Vec<SelectOption>,
	config: DropdownConfig,
) -> (DropdownController, Changes) {
	let changes: Changes = Rc::default();
	let sink = Rc::clone(&changes);
	let controller = DropdownController::new(options, config)
		.on_change(move |value| sink.borrow_mut().push(value.clone()));
	(controller, changes)
}

fn ids(value: &Value) -> Vec<OptionId> {
	value.ids().cloned().collect()
}

fn visible_labels(controller: &DropdownController) -> Vec<String> {
	controller
		.filtered()
		.iter()
		.map(|option| option.label.clone())
		.collect()
}

#[test]
fn single_mode_filter_and_pick_closes() {
	let options = vec![SelectOption::new(1, "Apple"), SelectOption::new(2, "Banana")];
	let (mut controller, changes) = tracked(options, DropdownConfig::single());

	assert!(controller.open());
	assert!(controller.set_query("ban"));
	assert_eq!(visible_labels(&controller), vec!["Banana"]);

	assert!(controller.select(&2.into()));
	assert_eq!(
		changes.borrow().as_slice(),
		&[Value::Single(SelectOption::new(2, "Banana"))]
	);
	assert_eq!(controller.state(), OpenState::Closed);
	assert_eq!(controller.query(), "");
	assert_eq!(controller.active_index(), None);
}

#[test]
fn multiple_mode_remove_keeps_remaining_order() {
	let (mut controller, changes) = tracked(fruit(), DropdownConfig::multiple());
	controller.open();
	controller.select(&1.into());
	controller.select(&2.into());
	controller.remove(&1.into());

	assert_eq!(controller.value(), &Value::Multiple(vec![SelectOption::new(2, "Banana")]));
	assert_eq!(changes.borrow().len(), 3);
	assert!(controller.is_open());
}

#[test]
fn empty_option_set_has_no_results_and_no_navigation() {
	let (mut controller, _) = tracked(Vec::new(), DropdownConfig::single());
	controller.open();
	assert!(controller.filtered().is_empty());
	controller.set_query("anything");
	assert!(controller.filtered().is_empty());

	controller.navigate(Direction::Next);
	assert_eq!(controller.active_index(), None);
	assert_eq!(controller.view().status(), ListStatus::NoOptions);
}

#[test]
fn all_disabled_options_never_enter_the_value() {
	let options = vec![
		SelectOption::new(1, "Apple").disabled(),
		SelectOption::new(2, "Banana").disabled(),
	];
	for config in [DropdownConfig::single(), DropdownConfig::multiple()] {
		let (mut controller, changes) = tracked(options.clone(), config.skip_disabled(false));
		controller.open();
		controller.navigate(Direction::Next);
		assert!(!controller.commit_active());
		assert!(!controller.select(&1.into()));
		assert!(!controller.select(&2.into()));
		assert_eq!(controller.value(), &Value::None);
		assert!(changes.borrow().is_empty());
		assert!(controller.is_open());
	}
}

#[test]
fn multiple_mode_pick_keeps_popover_state() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::multiple());
	controller.open();
	controller.set_query("e");
	controller.navigate(Direction::Next);
	let active = controller.active_index();
	let query = controller.query().to_string();

	assert!(controller.commit_active());
	assert!(controller.is_open());
	assert_eq!(controller.query(), query);
	assert_eq!(controller.active_index(), active);
}

#[test]
fn single_mode_commit_always_resets_popover() {
	for query in ["", "a", "rr"] {
		for steps in 0..4 {
			let (mut controller, _) = tracked(fruit(), DropdownConfig::single());
			controller.open();
			controller.set_query(query);
			for _ in 0..steps {
				controller.navigate(Direction::Next);
			}
			if controller.commit_active() {
				assert_eq!(controller.state(), OpenState::Closed);
				assert_eq!(controller.query(), "");
				assert_eq!(controller.active_index(), None);
			}
		}
	}
}

#[test]
fn dismiss_keeps_value_and_clears_transient_state() {
	let (mut controller, changes) = tracked(fruit(), DropdownConfig::single());
	controller.set_value(Value::Single(SelectOption::new(3, "Cherry")));
	controller.open();
	controller.set_query("an");
	controller.navigate(Direction::Next);

	assert!(controller.dismiss(DismissReason::Escape));
	assert_eq!(controller.state(), OpenState::Closed);
	assert_eq!(controller.query(), "");
	assert_eq!(controller.active_index(), None);
	assert_eq!(controller.value(), &Value::Single(SelectOption::new(3, "Cherry")));
	assert!(changes.borrow().is_empty());
	assert!(!controller.dismiss(DismissReason::Blur));
}

#[test]
fn opening_highlights_first_selected_option() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::multiple());
	controller.set_value(Value::Multiple(vec![
		SelectOption::new(5, "Elderberry"),
		SelectOption::new(2, "Banana"),
	]));
	controller.open();
	assert_eq!(controller.active_index(), Some(4));

	let (mut controller, _) = tracked(fruit(), DropdownConfig::single());
	controller.open();
	assert_eq!(controller.active_index(), None);
}

#[test]
fn query_change_resets_active_to_first_match() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::single());
	controller.open();
	controller.navigate(Direction::Prev);
	assert_eq!(controller.active_index(), Some(4));

	controller.set_query("err");
	assert_eq!(visible_labels(&controller), vec!["Cherry", "Elderberry"]);
	assert_eq!(controller.active_index(), Some(0));

	controller.set_query("zzz");
	assert_eq!(controller.active_index(), None);
	assert_eq!(controller.view().status(), ListStatus::NoMatches);

	controller.clear_query();
	assert_eq!(controller.active_index(), None);
	assert_eq!(controller.view().status(), ListStatus::Results);
}

#[test]
fn first_match_skips_disabled_entries() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::single());
	controller.open();
	controller.set_query("d");
	assert_eq!(visible_labels(&controller), vec!["Durian", "Elderberry"]);
	assert_eq!(controller.active_index(), Some(1));
}

#[test]
fn typing_edits_query_one_char_at_a_time() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::single());
	controller.open();
	for ch in "CH".chars() {
		controller.dispatch(DropdownEvent::PushQuery(ch));
	}
	assert_eq!(controller.query(), "CH");
	assert_eq!(visible_labels(&controller), vec!["Cherry"]);

	controller.dispatch(DropdownEvent::PopQuery);
	assert_eq!(controller.query(), "C");
	controller.dispatch(DropdownEvent::PopQuery);
	assert!(!controller.dispatch(DropdownEvent::PopQuery));
}

#[test]
fn search_disabled_ignores_query_edits() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::single().with_search(false));
	controller.open();
	assert!(!controller.set_query("ban"));
	assert_eq!(controller.query(), "");
	assert_eq!(controller.filtered().len(), 5);
}

#[test]
fn query_edits_ignored_while_closed() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::single());
	assert!(!controller.set_query("ban"));
	assert!(!controller.navigate(Direction::Next));
	assert!(!controller.commit_active());
	assert_eq!(controller.filtered().len(), 5);
}

#[test]
fn disabled_control_suppresses_every_transition() {
	let (mut controller, changes) = tracked(fruit(), DropdownConfig::multiple().disabled(true));
	controller.set_value(Value::Multiple(vec![SelectOption::new(1, "Apple")]));

	for event in [
		DropdownEvent::Toggle,
		DropdownEvent::Open,
		DropdownEvent::SetQuery("a".into()),
		DropdownEvent::Navigate(Direction::Next),
		DropdownEvent::CommitActive,
		DropdownEvent::Select(2.into()),
		DropdownEvent::Remove(1.into()),
		DropdownEvent::RemoveLast,
	] {
		assert!(!controller.dispatch(event));
		assert_eq!(controller.state(), OpenState::Closed);
	}
	assert!(changes.borrow().is_empty());
	assert_eq!(ids(controller.value()), vec![1.into()]);
}

#[test]
fn disabling_an_open_control_closes_it() {
	let mut controller = DropdownController::with_collaborators(
		fruit(),
		DropdownConfig::single(),
		Recorder::default(),
		(),
	);
	controller.open();
	controller.set_disabled(true);
	assert_eq!(controller.state(), OpenState::Closed);
	assert_eq!(controller.positioner().calls, vec!["show", "hide"]);
	assert!(!controller.open());
}

#[test]
fn read_only_control_still_transitions() {
	let mut controller = DropdownController::new(fruit(), DropdownConfig::single());
	assert!(controller.is_read_only());
	controller.open();
	controller.navigate(Direction::Next);
	assert_eq!(controller.active_index(), Some(0));

	assert!(controller.commit_active());
	assert_eq!(controller.value(), &Value::None);
	assert_eq!(controller.state(), OpenState::Closed);
}

#[test]
fn remove_does_not_change_open_state() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::multiple());
	controller.set_value(Value::Single(SelectOption::new(1, "Apple")));
	assert!(controller.remove(&1.into()));
	assert_eq!(controller.value(), &Value::None);
	assert_eq!(controller.state(), OpenState::Closed);

	controller.set_value(Value::Single(SelectOption::new(1, "Apple")));
	controller.open();
	assert!(controller.remove(&1.into()));
	assert!(controller.is_open());
}

#[test]
fn remove_unknown_or_unselected_ids_is_a_noop() {
	let (mut controller, changes) = tracked(fruit(), DropdownConfig::multiple());
	controller.set_value(Value::Multiple(vec![SelectOption::new(1, "Apple")]));
	assert!(!controller.remove(&2.into()));
	assert!(!controller.remove(&"missing".into()));
	assert!(changes.borrow().is_empty());

	let (mut controller, changes) = tracked(fruit(), DropdownConfig::single());
	assert!(!controller.remove(&"missing".into()));
	assert!(controller.remove(&3.into()));
	assert_eq!(changes.borrow().as_slice(), &[Value::None]);
}

#[test]
fn remove_last_pops_most_recent_selection() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::multiple());
	controller.open();
	for id in [3, 1, 2] {
		controller.select(&id.into());
	}
	controller.dispatch(DropdownEvent::RemoveLast);
	assert_eq!(ids(controller.value()), vec![3.into(), 1.into()]);
}

#[test]
fn collaborators_follow_open_state() {
	let mut controller = DropdownController::with_collaborators(
		fruit(),
		DropdownConfig::single(),
		Recorder::default(),
		Recorder::default(),
	)
	.on_change(|_| {});

	controller.dispatch(DropdownEvent::Toggle);
	controller.dispatch(DropdownEvent::Toggle);
	controller.dispatch(DropdownEvent::Open);
	controller.set_options(fruit());
	controller.dispatch(DropdownEvent::NavigateFirst);
	controller.dispatch(DropdownEvent::CommitActive);

	assert_eq!(
		controller.positioner().calls,
		vec!["show", "hide", "show", "invalidate", "hide"]
	);
	assert_eq!(
		controller.focus_scope().calls,
		vec!["trap", "release", "trap", "release"]
	);
}

#[test]
fn emitted_values_round_trip_through_set_value() {
	let changes: Changes = Rc::default();
	let sink = Rc::clone(&changes);
	let mut source = DropdownController::new(fruit(), DropdownConfig::multiple())
		.on_change(move |value| sink.borrow_mut().push(value.clone()));
	source.open();
	source.select(&5.into());
	source.select(&1.into());

	let emitted = changes.borrow().last().cloned().unwrap();
	let mirror =
		DropdownController::new(fruit(), DropdownConfig::multiple()).with_value(emitted.clone());
	assert_eq!(mirror.value(), &emitted);
	assert_eq!(mirror.view().summary(), source.view().summary());
	assert_eq!(mirror.view().summary(), TriggerSummary::Count(2));
}

#[test]
fn stale_values_are_kept_when_options_change() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::single());
	controller.set_value(Value::Single(SelectOption::new(42, "Gone")));
	controller.set_options(vec![SelectOption::new(1, "Apple")]);
	assert_eq!(ids(controller.value()), vec![42.into()]);

	controller.open();
	assert_eq!(controller.active_index(), None);
	assert_eq!(
		controller.view().summary(),
		TriggerSummary::Single(&SelectOption::new(42, "Gone"))
	);
}

#[test]
fn trigger_summary_follows_mode_and_count() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::multiple());
	assert_eq!(controller.view().summary(), TriggerSummary::Placeholder);

	controller.open();
	controller.select(&2.into());
	assert_eq!(
		controller.view().summary(),
		TriggerSummary::Chip(&SelectOption::new(2, "Banana"))
	);
	controller.select(&3.into());
	assert_eq!(controller.view().summary(), TriggerSummary::Count(2));
}

#[test]
fn pointer_pick_in_multiple_mode_keeps_active_row() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::multiple());
	controller.open();
	controller.navigate(Direction::Next);
	assert_eq!(controller.active_index(), Some(0));

	assert!(controller.select(&3.into()));
	assert_eq!(controller.active_index(), Some(0));
	assert!(controller.is_open());

	controller.navigate(Direction::Next);
	assert_eq!(controller.active_option().map(|o| o.label.as_str()), Some("Banana"));
}

#[test]
fn view_rows_mark_active_and_selected() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::multiple());
	controller.open();
	controller.select(&2.into());
	for _ in 0..3 {
		controller.navigate(Direction::Next);
	}

	let rows: Vec<_> = controller
		.view()
		.rows()
		.map(|row| (row.option.label.as_str(), row.active, row.selected))
		.collect();
	assert_eq!(
		rows,
		vec![
			("Apple", false, false),
			("Banana", false, true),
			("Cherry", true, false),
			("Durian", false, false),
			("Elderberry", false, false),
		]
	);
}

#[test]
fn toggles_in_multiple_mode_never_duplicate_ids() {
	let (mut controller, _) = tracked(fruit(), DropdownConfig::multiple());
	controller.open();
	for step in 0..40 {
		match step % 3 {
			0 => controller.navigate(Direction::Next),
			1 => controller.navigate(Direction::Prev),
			_ => controller.navigate(Direction::Next),
		};
		controller.commit_active();
		let mut seen = ids(controller.value());
		let total = seen.len();
		seen.sort();
		seen.dedup();
		assert_eq!(seen.len(), total);
		assert!(!controller.value().contains(&4.into()));
	}
}
