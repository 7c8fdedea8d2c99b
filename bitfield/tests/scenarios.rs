use bitfield::{BitField, Edit, Error, Mode};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_basics() {
    init_tracing();

    assert_eq!(BitField::new(0).len(), 0);
    assert_eq!(BitField::new(65).set_all().count_ones(), 65);
    assert!(!BitField::new(3).equal(&BitField::new(4)));
    assert!(BitField::new(3)
        .set([0, -1])
        .not()
        .equal(&BitField::new(3).set([1])));
    assert_eq!(BitField::new(3).set([0, -1]).not().to_string(), "010");
}

#[test]
fn test_wraparound_positions() {
    let a = BitField::new(129)
        .set([0, -1])
        .clear([123, -3])
        .not()
        .not()
        .into_owned();
    assert_eq!(a.count_ones(), 2);

    let len = a.len() as isize;
    assert!(a.get(0));
    assert!(a.get(-len));
    assert!(a.get(len));
    assert!(a.get(-1));
    assert!(a.get(len * 3 - 1));
}

#[test]
fn test_and() {
    let mut b = BitField::new(129).set([4, -1, 23, 11]).into_owned();
    assert_eq!(b.and(&BitField::new(129).set([0, -1])).count_ones(), 1);
}

#[test]
fn test_mismatched_lengths() {
    init_tracing();

    let other = BitField::new(121);
    let mismatch = Err(Error::MismatchedLen {
        left: 5,
        right: 121,
    });
    assert_eq!(BitField::new(5).try_and(&other).map(Edit::into_owned), mismatch);
    assert_eq!(BitField::new(5).try_or(&other).map(Edit::into_owned), mismatch);
    assert_eq!(BitField::new(5).try_xor(&other).map(Edit::into_owned), mismatch);
}

#[test]
#[should_panic(expected = "bitfield lengths differ: 5 != 121")]
fn test_and_mismatch_panics() {
    init_tracing();
    BitField::new(5).and(&BitField::new(121));
}

#[test]
#[should_panic(expected = "bitfield lengths differ")]
fn test_or_mismatch_panics() {
    BitField::new(5).or(&BitField::new(121));
}

#[test]
#[should_panic(expected = "bitfield lengths differ")]
fn test_xor_mismatch_panics() {
    BitField::new(5).xor(&BitField::new(121));
}

#[test]
fn test_negative_length() {
    assert_eq!(
        BitField::try_new(-3).map(|bf| bf.len()),
        Err(Error::NegativeLength(-3))
    );
}

#[test]
fn test_clear_all_then_set() {
    let c = BitField::new(129)
        .set([73, -2])
        .clear_all()
        .set([-1])
        .into_owned();
    assert!(c.equal(&BitField::new(129).set([128])));
    assert!(!c.equal(&BitField::new(129).not()));
    assert!(!c.get(127));
    assert!(c.get(-1));
}

#[test]
fn test_flip() {
    assert!(BitField::new(4).flip([-1]).equal(&BitField::new(4).set([-1])));
    assert!(BitField::new(4).flip([-1]).flip([-1]).equal(&BitField::new(4)));
    assert_eq!(
        BitField::new(4).set_all().flip([0, -1]).mid(1, 2).to_string(),
        "11"
    );
}

#[test]
fn test_clone_and_xor() {
    let mut d = BitField::new(65).set([-1]).into_owned();
    let e = d.clone();
    assert!(d.equal(&e));
    assert_eq!(d.xor(&e).count_ones(), 0);
    assert!(d.set([11]).or(&e).get(11));
    assert_eq!(d.count_ones(), 1);
}

#[test]
fn test_rotate_scenario() {
    assert!(BitField::new(65)
        .set([63])
        .rotate(1)
        .equal(&BitField::new(65).set([64])));
}

#[test]
fn test_value_mode_discards() {
    let mut bf = BitField::new(4).set([0]).into_owned();
    bf.set([1]);
    assert_eq!(bf.count_ones(), 1);
}

#[test]
fn test_mutable_mode_keeps() {
    let mut bf = BitField::new(4).set([0]).into_owned().into_mutable();
    bf.set([1]);
    assert_eq!(bf.count_ones(), 2);
}

#[test]
fn test_mutable_chain() {
    let mut a = BitField::new(65);
    a.mutable().set_all().clear([0, -1]).flip([3, 4]);
    assert_eq!(a.count_ones(), 61);
    assert_eq!(a.mode(), Mode::Mutable);

    let mut a = BitField::new(65).into_mutable();
    a.set_all();
    let same = a.clone();
    a.xor(&same);
    assert_eq!(a.count_ones(), 0);
}

#[test]
fn test_copy_into() {
    let mut a = BitField::new(65);
    assert_eq!(
        BitField::new(5).try_copy_into(&mut a),
        Err(Error::MismatchedLen { left: 5, right: 65 })
    );

    BitField::new(65).set([0, -1]).copy_into(&mut a);
    assert_eq!(a.count_ones(), 2);
    assert!(a.get(-1));
}

#[test]
fn test_empty_field() {
    let mut bf = BitField::new(0);
    assert!(!bf.get(0));
    assert!(!bf.get(-7));
    assert_eq!(bf.set([0, 5]).count_ones(), 0);
    assert_eq!(bf.set_all().count_ones(), 0);
    assert_eq!(bf.not().count_ones(), 0);
    assert!(bf.shift(3).is_empty());
    assert!(bf.rotate(-2).is_empty());
    assert_eq!(bf.to_string(), "");
}

#[test]
fn test_operators() {
    let a: BitField = "1100".parse().unwrap();
    let b: BitField = "1010".parse().unwrap();

    assert_eq!((&a & &b).to_string(), "1000");
    assert_eq!((&a | &b).to_string(), "1110");
    assert_eq!((&a ^ &b).to_string(), "0110");
    assert_eq!((!a.clone()).to_string(), "0011");

    let mut c = a.clone();
    c ^= &b;
    assert_eq!(c.to_string(), "0110");
    assert_eq!(c.mode(), Mode::Value);

    let mut c = a.clone().into_mutable();
    c |= &b;
    assert_eq!(c.to_string(), "1110");
    assert_eq!(c.mode(), Mode::Mutable);
}

#[test]
fn test_hash_ignores_mode() {
    use std::collections::HashSet;

    let a = BitField::new(70).set([1, 69]).into_owned();
    let b = a.clone().into_mutable();

    let set: HashSet<BitField> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_counts() {
    let bf = BitField::new(130).set([0, 64, 129]).into_owned();
    assert_eq!(bf.count_ones(), 3);
    assert_eq!(bf.count_zeros(), 127);
    assert!(!bf.is_all_set());
    assert!(!bf.is_all_unset());
    assert!(BitField::new(130).set_all().is_all_set());
    assert!(BitField::new(130).is_all_unset());
    assert_eq!(bf.iter_ones().collect::<Vec<_>>(), [0, 64, 129]);
}
