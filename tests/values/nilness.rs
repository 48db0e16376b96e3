use assertive_core::nilness::NilnessError;
use assertive_core::{Nil, admits_nil, is_nil};
use core::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc;

fn double(value: i32) -> i32 {
    value * 2
}

#[test]
fn reference_kinds_admit_nil() {
    let (sender, receiver) = mpsc::channel::<u8>();
    let function: fn(i32) -> i32 = double;
    let holder: Box<dyn Any> = Box::new(1u8);

    assert!(admits_nil(&sender));
    assert!(admits_nil(&receiver));
    assert!(admits_nil(&function));
    assert!(admits_nil(&*holder));
    assert!(admits_nil(&HashMap::<u8, u8>::new()));
    assert!(admits_nil(&BTreeMap::<u8, u8>::new()));
    assert!(admits_nil(&Rc::new(1)));
    assert!(admits_nil(&Arc::new(1)));
    assert!(admits_nil(&None::<Vec<u8>>));
    assert!(admits_nil(&Vec::<u8>::new()));
    assert!(admits_nil(&vec!["name"]));
}

#[test]
fn value_kinds_do_not_admit_nil() {
    assert!(!admits_nil(&0u64));
    assert!(!admits_nil(&-1i8));
    assert!(!admits_nil(&0.0f32));
    assert!(!admits_nil(&false));
    assert!(!admits_nil("text"));
    assert!(!admits_nil(&[0u8; 4]));
    assert!(!admits_nil(&Nil));
}

#[test]
fn nil_states() {
    let live: fn(i32) -> i32 = double;
    let (sender, _receiver) = mpsc::channel::<u8>();

    assert_eq!(is_nil(&None::<fn(i32) -> i32>), Ok(true));
    assert_eq!(is_nil(&Some(live)), Ok(false));
    assert_eq!(is_nil(&None::<mpsc::Sender<u8>>), Ok(true));
    assert_eq!(is_nil(&sender), Ok(false));
    assert_eq!(is_nil(&core::ptr::null::<i32>()), Ok(true));
    assert_eq!(is_nil(&Box::new(0)), Ok(false));
    assert_eq!(is_nil(&Vec::<u8>::new()), Ok(false));
}

#[test]
fn nilness_of_value_kinds_is_a_contract_violation() {
    assert!(matches!(
        is_nil(&3i32),
        Err(NilnessError::CannotBeNil { .. })
    ));
}
