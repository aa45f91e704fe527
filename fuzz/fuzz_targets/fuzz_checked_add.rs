#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use ruint::aliases::U256;

use fibfizz_core::classifier::classify;

fn to_biguint(value: &U256) -> BigUint {
    BigUint::from_bytes_le(&value.to_le_bytes_vec())
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }
    let (Some(a), Some(b)) = (
        U256::try_from_le_slice(&data[..32]),
        U256::try_from_le_slice(&data[32..64]),
    ) else {
        return;
    };

    let (sum, overflow) = a.overflowing_add(b);
    let exact = to_biguint(&a) + to_biguint(&b);
    assert_eq!(overflow, exact.bits() > 256);
    assert_eq!(to_biguint(&sum), exact % (BigUint::from(1u32) << 256u32));
    assert_eq!(a.checked_add(b).is_none(), overflow);

    // Divisibility drives the classifier.
    let big = to_biguint(&a);
    let label = classify(1, &a);
    assert_eq!(label.is_buzz(), (&big % 3u32) == BigUint::from(0u32));
    assert_eq!(label.is_fizz(), (&big % 5u32) == BigUint::from(0u32));
});
