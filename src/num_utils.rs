/// Returns a mask with the `count` least significant bits set. Counts above 32 saturate.
pub fn low_bits_mask (count: u32) -> u32 {
    if count >= 32 {
        !0
    } else {
        (1 << count) - 1
    }
}

// ceil(dividend / divisor), without overflowing near u32::MAX
#[inline]
pub fn div_round_up (dividend: u32, divisor: u32) -> u32 {
    dividend / divisor + if dividend % divisor != 0 { 1 } else { 0 }
}

#[test]
fn test_low_bits_mask() {
    assert_eq!(low_bits_mask (0),  0x0000_0000);
    assert_eq!(low_bits_mask (1),  0x0000_0001);
    assert_eq!(low_bits_mask (5),  0x0000_001F);
    assert_eq!(low_bits_mask (31), 0x7FFF_FFFF);
    assert_eq!(low_bits_mask (32), 0xFFFF_FFFF);
    assert_eq!(low_bits_mask (40), 0xFFFF_FFFF);
}

#[test]
fn test_div_round_up() {
    assert_eq!(div_round_up (0, 10), 0);
    assert_eq!(div_round_up (1, 10), 1);
    assert_eq!(div_round_up (10, 10), 1);
    assert_eq!(div_round_up (11, 10), 2);
    assert_eq!(div_round_up (::std::u32::MAX, 10), 429_496_730);
}
