use assertive_core::traits::identity::Identity;
use assertive_core::values::core_value::Category;
use assertive_core::{AsValue, Nil, admits_nil, assert_identical, assert_loose_eq, equivalent};

#[derive(AsValue)]
pub struct Flag(bool);

#[derive(AsValue)]
pub struct Name(String);

#[derive(AsValue)]
pub struct Celsius(f32);

#[derive(AsValue)]
pub struct Count(u16);

#[derive(AsValue)]
pub struct Payload(Vec<u8>);

#[derive(AsValue)]
pub struct Handle(Box<i32>);

#[derive(AsValue, Debug, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(AsValue, Debug, PartialEq)]
pub enum Direction {
    Up,
    Down,
}

#[test]
fn named_scalars_compare_by_underlying_value() {
    assert!(equivalent(&Flag(true), &true));
    assert!(!equivalent(&Flag(false), &true));
    assert!(equivalent(&Name("hi".to_string()), "hi"));
    assert!(equivalent(&Celsius(1.0), &1.0f64));
    assert!(equivalent(&Count(5), &5i64));
    assert!(equivalent(&Payload(b"hi".to_vec()), b"hi"));
    assert_loose_eq!(Count(0), Nil);
}

#[test]
fn named_scalars_keep_their_type_name() {
    let flag = Flag(true);
    let value = flag.as_value();
    assert!(value.actual_type.ends_with("Flag"));
    assert_eq!(value.category(), Category::Boolean);
    assert!(!value.identical(&true.as_value()));
    assert_identical!(Flag(true), Flag(true));
}

#[test]
fn named_references_admit_nil() {
    assert!(admits_nil(&Handle(Box::new(1))));
    assert!(assertive_core::is_nil(&None::<Handle>).unwrap());
}

#[test]
fn aggregates_are_opaque() {
    let point = Point { x: 1, y: 2 };
    assert_eq!(point.as_value().category(), Category::Other);
    assert!(equivalent(&point, &Point { x: 1, y: 2 }));
    assert!(!equivalent(&point, &Point { x: 2, y: 1 }));
    assert!(equivalent(&Direction::Up, &Direction::Up));
    assert!(!equivalent(&Direction::Up, &Direction::Down));
    assert!(!admits_nil(&point));
}
