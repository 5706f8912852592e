use std::collections::HashSet;

use crate::combinations::{Assignments, assignment_count, generate_assignments};
use crate::operator::{Operator, OperatorSet};

#[test]
fn test_zero_gaps_yields_single_empty_assignment() {
    for set in [OperatorSet::Basic, OperatorSet::Extended] {
        let assignments = generate_assignments(0, set);
        assert_eq!(assignments, vec![Vec::<Operator>::new()]);
    }
}

#[test]
fn test_basic_cardinality_and_distinctness() {
    for gap_count in 0..=8 {
        let assignments = generate_assignments(gap_count, OperatorSet::Basic);
        assert_eq!(assignments.len(), 1 << gap_count);

        let distinct: HashSet<_> = assignments.iter().cloned().collect();
        assert_eq!(distinct.len(), assignments.len());

        for assignment in &assignments {
            assert_eq!(assignment.len(), gap_count);
            assert!(!assignment.contains(&Operator::Concatenate));
        }
    }
}

#[test]
fn test_extended_cardinality_and_distinctness() {
    for gap_count in 0..=6 {
        let assignments = generate_assignments(gap_count, OperatorSet::Extended);
        assert_eq!(assignments.len(), 3usize.pow(gap_count as u32));

        let distinct: HashSet<_> = assignments.iter().cloned().collect();
        assert_eq!(distinct.len(), assignments.len());
        assert!(assignments.iter().all(|a| a.len() == gap_count));
    }

    let assignments = generate_assignments(2, OperatorSet::Extended);
    assert!(assignments.contains(&vec![Operator::Concatenate, Operator::Add]));
    assert!(assignments.contains(&vec![Operator::Multiply, Operator::Concatenate]));
}

#[test]
fn test_enumeration_is_deterministic() {
    let first = generate_assignments(5, OperatorSet::Extended);
    let second = generate_assignments(5, OperatorSet::Extended);
    assert_eq!(first, second);
}

#[test]
fn test_first_gap_changes_slowest() {
    let assignments = generate_assignments(2, OperatorSet::Basic);
    let expected = vec![
        vec![Operator::Add, Operator::Add],
        vec![Operator::Add, Operator::Multiply],
        vec![Operator::Multiply, Operator::Add],
        vec![Operator::Multiply, Operator::Multiply],
    ];
    assert_eq!(assignments, expected);
}

#[test]
fn test_assignments_are_independent() {
    let mut assignments = generate_assignments(3, OperatorSet::Basic);
    let snapshot = assignments.clone();

    if let Some(first) = assignments.first_mut() {
        first[0] = Operator::Concatenate;
    }

    assert_eq!(assignments[1..], snapshot[1..]);
    assert_eq!(snapshot[0], vec![Operator::Add; 3]);
}

#[test]
fn test_iterator_is_fused() {
    let mut iter = Assignments::new(1, OperatorSet::Basic);
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn test_assignment_count() {
    assert_eq!(assignment_count(0, OperatorSet::Basic), Some(1));
    assert_eq!(assignment_count(10, OperatorSet::Basic), Some(1024));
    assert_eq!(assignment_count(14, OperatorSet::Extended), Some(4_782_969));
    assert_eq!(assignment_count(200, OperatorSet::Extended), None);
}
