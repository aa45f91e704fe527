#![no_main]

use libfuzzer_sys::fuzz_target;

use fibfizz_core::generator::SequenceGenerator;
use fibfizz_core::sink::CollectingSink;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // 128 bits overflow after index 186; cap the length just past that.
    let n = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 400;
    if n == 0 {
        assert!(SequenceGenerator::<128, 2>::run(0, &mut CollectingSink::new()).is_err());
        return;
    }

    let mut sink = CollectingSink::<128, 2>::new();
    let outcome = SequenceGenerator::<128, 2>::run(n, &mut sink).unwrap();
    let terms = sink.terms();

    assert_eq!(outcome.index, n.min(186));
    assert_eq!(outcome.overflowed, n > 186);
    assert_eq!(terms.len(), outcome.index as usize);
    for window in terms.windows(3) {
        let (a, b, c) = (window[0].1, window[1].1, window[2].1);
        assert_eq!(a.checked_add(b), Some(c));
    }
});
