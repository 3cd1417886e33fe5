// tests/mapper_tests.rs
mod common;

use common::counting_block;
use deterministic_password_gen::{map_password, CharClass, CharsetPolicy, CoreError, DerivedBlock32};

fn map(block: &DerivedBlock32, policy: CharsetPolicy) -> String {
    map_password(block, &policy).unwrap().expose_secret().clone()
}

#[test]
fn guarantee_slots_follow_rank_order() {
    // Four classes, four slots: upper, lower, digit, narrow special
    let password = map(&counting_block(), CharsetPolicy::new(4));
    assert_eq!(password, "Ab2$");

    let chars: Vec<char> = password.chars().collect();
    assert!(CharClass::Uppercase.contains(chars[0]));
    assert!(CharClass::Lowercase.contains(chars[1]));
    assert!(CharClass::Digit.contains(chars[2]));
    assert!(CharClass::Special.contains(chars[3]));
}

#[test]
fn short_length_drops_lower_ranked_guarantees() {
    assert_eq!(map(&counting_block(), CharsetPolicy::new(2)), "Ab");
    assert_eq!(map(&counting_block(), CharsetPolicy::new(0)), "");
}

#[test]
fn block_is_reused_cyclically() {
    let password = map(&counting_block(), CharsetPolicy::new(40));
    assert_eq!(password, "Ab2$EFGHIJKLMNOPQRSTUVWXYZabcdefABCDEFGH");
    // Position 36 reads byte 4 again, same as position 4
    assert_eq!(password.as_bytes()[36], password.as_bytes()[4]);
}

#[test]
fn single_class_policies() {
    let digits = CharsetPolicy::new(12)
        .with_class(CharClass::Uppercase, false)
        .with_class(CharClass::Lowercase, false)
        .with_class(CharClass::Special, false);
    assert_eq!(map(&counting_block(), digits), "012345678901");

    let lower_and_special = CharsetPolicy::new(10)
        .with_class(CharClass::Uppercase, false)
        .with_class(CharClass::Digit, false);
    assert_eq!(map(&counting_block(), lower_and_special), "a@cdefghij");
}

#[test]
fn high_bytes_wrap_into_the_special_range() {
    let block = DerivedBlock32::new([0xff; 32]);
    assert_eq!(map(&block, CharsetPolicy::new(8)), "Vv5*}}}}");
}

#[test]
fn output_stays_inside_the_enabled_alphabet() {
    let blocks = [
        counting_block(),
        DerivedBlock32::new([0xff; 32]),
        DerivedBlock32::new(std::array::from_fn(|i| (i as u8).wrapping_mul(37).wrapping_add(11))),
    ];
    for mask in 1u8..16 {
        let policy = CharClass::ORDER
            .into_iter()
            .enumerate()
            .fold(CharsetPolicy::new(24), |policy, (bit, class)| {
                policy.with_class(class, mask & (1 << bit) != 0)
            });
        let alphabet = deterministic_password_gen::charset::build(&policy).unwrap();

        for block in &blocks {
            let password = map(block, policy);
            assert_eq!(password.chars().count(), 24);
            assert!(alphabet.contains_all(&password), "{password} escapes mask {mask:04b}");
            for class in policy.enabled_classes() {
                assert!(
                    password.chars().any(|c| class.contains(c)),
                    "{class:?} missing from {password}"
                );
            }
        }
    }
}

#[test]
fn mapping_is_deterministic() {
    let policy = CharsetPolicy::new(32);
    assert_eq!(
        map(&counting_block(), policy),
        map(&counting_block(), policy)
    );
}

#[test]
fn empty_policy_cannot_be_mapped() {
    let policy = CharClass::ORDER
        .into_iter()
        .fold(CharsetPolicy::new(16), |policy, class| {
            policy.with_class(class, false)
        });
    assert_eq!(
        map_password(&counting_block(), &policy).err(),
        Some(CoreError::EmptyCharsetPolicy)
    );
}
