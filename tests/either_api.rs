use std::{collections::HashSet, error::Error};
use tagged_either::{Either, Variant, WrongVariantAccess};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Packet {
    id: u32,
    body: Vec<u8>,
}

fn parse(input: &str) -> Either<u32, String> {
    match input.parse() {
        Ok(n) => Either::of_left(n),
        Err(_) => Either::of_right(input.to_string()),
    }
}

#[test]
fn caller_guards_before_extraction() {
    let mut numbers = Vec::new();
    let mut words = Vec::new();
    for input in ["1", "two", "3"] {
        let parsed = parse(input);
        if parsed.is_left() {
            numbers.push(*parsed.get_left());
        } else {
            words.push(parsed.get_right().clone());
        }
    }
    assert_eq!(numbers, [1, 3]);
    assert_eq!(words, ["two"]);
}

#[test]
fn payload_survives_round_trip() {
    let packet = Packet {
        id: 9,
        body: vec![1, 2, 3],
    };

    let left = Either::<Packet, ()>::of_left(packet.clone());
    assert_eq!(left.get_left(), &packet);
    assert_eq!(left.clone().left(), Some(packet.clone()));
    assert_eq!(left.into_left(), packet);

    let right = Either::<(), Packet>::of_right(packet.clone());
    assert_eq!(right.get_right(), &packet);
    assert_eq!(right.clone().right(), Some(packet.clone()));
    assert_eq!(right.into_right(), packet);
}

#[test]
fn map_changes_left_type_only() {
    let lengths: Vec<Either<usize, u32>> = ["abc", "", "hello"]
        .into_iter()
        .map(|s| Either::<&str, u32>::of_left(s).map(str::len))
        .chain(std::iter::once(Either::<&str, u32>::of_right(42).map(str::len)))
        .collect();
    assert_eq!(
        lengths,
        [
            Either::Left(3),
            Either::Left(0),
            Either::Left(5),
            Either::Right(42)
        ]
    );
}

#[test]
fn map_identity_keeps_both_sides() {
    let left = Either::<Packet, String>::of_left(Packet {
        id: 1,
        body: Vec::new(),
    });
    let right = Either::<Packet, String>::of_right("r".to_string());
    assert_eq!(left.clone().map(|p| p), left);
    assert_eq!(right.clone().map(|p| p), right);
}

#[test]
fn values_work_as_set_keys() {
    let set: HashSet<Either<u8, u8>> = [
        Either::Left(1),
        Either::Right(1),
        Either::Left(1),
        Either::Right(2),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&Either::Left(1)));
    assert!(set.contains(&Either::Right(1)));
}

#[test]
fn wrong_side_is_an_error_value() {
    let parsed = parse("seven");
    let result: Result<&u32, WrongVariantAccess> = parsed.try_left();
    let err = result.unwrap_err();
    assert_eq!(err.requested, Variant::Left);
    assert_eq!(err.found(), Variant::Right);
    assert_eq!(
        err.to_string(),
        r#"called `get_left` on a right value: Right("seven")"#
    );

    let boxed: Box<dyn Error> = Box::new(err);
    assert!(boxed.source().is_none());
}

#[test]
fn wrong_side_panics_at_caller() {
    let outcome = std::panic::catch_unwind(|| {
        parse("8").get_right().clone();
    });
    let payload = outcome.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .expect("panic payload is a formatted message");
    assert_eq!(message, "called `get_right` on a left value: Left(8)");
}

#[test]
fn display_distinguishes_sides() {
    assert_eq!(Either::<i32, i32>::Left(5).to_string(), "Left(5)");
    assert_eq!(Either::<i32, i32>::Right(5).to_string(), "Right(5)");
    assert_eq!(
        format!("{:?}", Either::<i32, &str>::Right("x")),
        r#"Right("x")"#
    );
}
