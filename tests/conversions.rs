use opt3001_rs::registers::raw_to_lux;

#[test]
fn lux_decode_examples() {
    // exponent 1, mantissa 100 -> (100 * 2) / 100
    assert_eq!(raw_to_lux(0x1064), 2);
    assert_eq!(raw_to_lux(0x0000), 0);
    // exponent 15, mantissa 100 -> (100 * 32768) / 100
    assert_eq!(raw_to_lux(0xF064), 32768);
}

#[test]
fn lux_decode_truncates() {
    // 0.01 lux per mantissa count at exponent 0
    assert_eq!(raw_to_lux(0x0001), 0);
    assert_eq!(raw_to_lux(0x0063), 0);
    assert_eq!(raw_to_lux(0x0064), 1);
    assert_eq!(raw_to_lux(0x00C9), 2);
}

#[test]
fn lux_decode_full_scale_mantissa() {
    // exponent 0, mantissa 4095 -> 40.95 lux truncated
    assert_eq!(raw_to_lux(0x0FFF), 40);
    // exponent 11 is the largest range the device reports
    assert_eq!(raw_to_lux(0xBFFF), (4095 * 2048) / 100);
}

#[test]
fn lux_decode_ignores_exponent_bits_in_mantissa() {
    // mantissa mask must strip the exponent nibble before scaling
    assert_eq!(raw_to_lux(0x1000), 0);
    assert_eq!(raw_to_lux(0x2064), raw_to_lux(0x1064) * 2);
}

#[test]
fn wire_word_roundtrip() {
    // registers travel MSB first; encode/decode must be inverses
    for word in [0x0000u16, 0x1064, 0x3001, 0x5449, 0xC810, 0xFFFF] {
        assert_eq!(u16::from_be_bytes(word.to_be_bytes()), word);
    }
    assert_eq!(u16::from_be_bytes([0x30, 0x01]), 0x3001);
    assert_eq!(0xC200u16.to_be_bytes(), [0xC2, 0x00]);
}
