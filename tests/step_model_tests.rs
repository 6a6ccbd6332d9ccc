mod support;

use epicycles::{
    EpicycleError, OscillatorStep, Rgba,
    step::{DEFAULT_LENGTH, DEFAULT_OFFSET, DEFAULT_SPEED},
    step_list::StepList,
};
use support::step;

#[test]
fn new_list_is_seeded_with_one_default_step() {
    let list = StepList::new();
    assert_eq!(list.len(), 1);
    assert!(!list.is_empty());
    assert_eq!(list.as_slice()[0], OscillatorStep::default());
}

#[test]
fn add_step_appends_exactly_one_default_step() {
    let mut list = StepList::new();
    for expected_len in 2..=6 {
        let handle = list.add_step();
        assert_eq!(list.len(), expected_len);
        assert_eq!(list.last_handle(), Some(handle));

        let added = list.get(handle).unwrap();
        assert_eq!(added.length, DEFAULT_LENGTH);
        assert_eq!(added.offset, DEFAULT_OFFSET);
        assert_eq!(added.speed, DEFAULT_SPEED);
        assert_eq!(added.length, 100.0);
        assert_eq!(added.offset, 0.0);
        assert_eq!(added.speed, 1.0);
    }
}

#[test]
fn remove_last_step_never_empties_the_list() {
    let mut list = StepList::new();
    let only = list.handle_at(0).unwrap();

    assert_eq!(list.remove_last_step(), None);
    assert_eq!(list.remove_last_step(), None);
    assert_eq!(list.len(), 1);
    assert_eq!(list.handle_at(0), Some(only));
}

#[test]
fn remove_last_step_follows_stack_discipline() {
    let mut list = StepList::new();
    let first = list.handle_at(0).unwrap();
    let second = list.add_step();
    let third = list.add_step();

    assert_eq!(list.remove_last_step(), Some(third));
    assert_eq!(list.remove_last_step(), Some(second));
    assert_eq!(list.remove_last_step(), None);
    assert_eq!(list.handles(), &[first]);
}

#[test]
fn update_step_overwrites_only_the_referenced_step() {
    let mut list = StepList::new();
    let first = list.handle_at(0).unwrap();
    let second = list.add_step();

    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let updated = OscillatorStep::new(42.0, 0.25, -3.0, red);
    list.update_step(second, updated).unwrap();

    assert_eq!(list.get(second), Some(&updated));
    assert_eq!(list.get(first), Some(&OscillatorStep::default()));
}

#[test]
fn update_step_with_stale_handle_is_an_error() {
    let mut list = StepList::new();
    let second = list.add_step();
    list.remove_last_step();

    let result = list.update_step(second, step(1.0, 0.0, 0.0));
    assert_eq!(result, Err(EpicycleError::UnknownStep(second)));
    assert_eq!(list.len(), 1);
    assert_eq!(list.as_slice()[0], OscillatorStep::default());
}

#[test]
fn negative_length_is_accepted() {
    let mut list = StepList::new();
    let handle = list.handle_at(0).unwrap();
    list.update_step(handle, step(-10.0, 0.0, 1.0)).unwrap();
    assert_eq!(list.get(handle).unwrap().length, -10.0);
}

#[test]
fn labels_follow_chain_position() {
    let mut list = StepList::new();
    let first = list.handle_at(0).unwrap();
    let second = list.add_step();
    assert_eq!(list.label(first).as_deref(), Some("Step 1"));
    assert_eq!(list.label(second).as_deref(), Some("Step 2"));

    list.remove_last_step();
    assert_eq!(list.label(second), None);
}

#[test]
fn iteration_pairs_handles_with_steps_in_order() {
    let list = StepList::from_steps(support::sample_chain());
    let lengths: Vec<_> = list.iter().map(|(_, s)| s.length).collect();
    assert_eq!(lengths, vec![100.0, 50.0, 25.0, 12.5]);

    for (i, (handle, _)) in list.iter().enumerate() {
        assert_eq!(list.index_of(handle), Some(i));
    }
}
