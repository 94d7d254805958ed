// Frame layout, flag packing and structural parsing.

#[cfg(test)]
mod tests {
    use sss_core::constants::{HASH_LEN, MIN_FRAME_LEN, PAYLOAD_OFFSET};
    use sss_core::crypto::{compute_tag, MacError};
    use sss_core::frame::{decode_frame, encode_frame, Flag, FrameError};

    const KEY: &[u8] = b"frame-test-key";

// # ✅ 1. Flag packing

    #[test]
    fn flag_packs_compressed_bit_and_version() {
        assert_eq!(Flag::new(false, 0).to_byte().unwrap(), 0b0000_0000);
        assert_eq!(Flag::new(true, 0).to_byte().unwrap(), 0b0000_0001);
        assert_eq!(Flag::new(false, 1).to_byte().unwrap(), 0b0000_0010);
        assert_eq!(Flag::new(true, 15).to_byte().unwrap(), 0b0001_1111);
    }

    #[test]
    fn flag_unpacks_every_valid_byte() {
        for b in 0u8..=0b0001_1111 {
            let flag = Flag::from_byte(b).unwrap();
            assert_eq!(flag.compressed, b & 1 == 1);
            assert_eq!(flag.version, b >> 1);
            assert_eq!(flag.to_byte().unwrap(), b);
        }
    }

    #[test]
    fn flag_rejects_reserved_bits() {
        for bit in 5..8 {
            let b = 1u8 << bit;
            assert!(matches!(Flag::from_byte(b), Err(FrameError::ReservedBitsSet(x)) if x == b));
        }
    }

    #[test]
    fn flag_rejects_version_wider_than_four_bits() {
        assert!(matches!(
            Flag::new(false, 16).to_byte(),
            Err(FrameError::VersionOutOfRange { have: 16, max: 15 })
        ));
    }

// # ✅ 2. Encoding layout

    #[test]
    fn encode_writes_flag_length_payload_tag() {
        let wire = encode_frame(Flag::new(true, 0), b"abc", KEY).unwrap();

        assert_eq!(wire.len(), MIN_FRAME_LEN + 3);
        assert_eq!(wire[0], 0x01);
        assert_eq!(&wire[1..3], &[0x00, 0x03]);
        assert_eq!(&wire[3..6], b"abc");

        let tag = compute_tag(KEY, &wire[..6]);
        assert_eq!(&wire[6..], &tag[..]);
    }

    #[test]
    fn length_field_is_big_endian() {
        let payload = vec![7u8; 0x0102];
        let wire = encode_frame(Flag::default(), &payload, KEY).unwrap();
        assert_eq!(&wire[1..3], &[0x01, 0x02]);
    }

    #[test]
    fn empty_payload_is_minimum_frame() {
        let wire = encode_frame(Flag::default(), &[], KEY).unwrap();
        assert_eq!(wire.len(), MIN_FRAME_LEN);

        let view = decode_frame(&wire).unwrap();
        assert!(view.payload.is_empty());
        view.verify(KEY).unwrap();
    }

    #[test]
    fn encode_accepts_max_payload_and_rejects_one_more() {
        let max = vec![0u8; u16::MAX as usize];
        let wire = encode_frame(Flag::default(), &max, KEY).unwrap();
        assert_eq!(&wire[1..3], &[0xFF, 0xFF]);

        let over = vec![0u8; u16::MAX as usize + 1];
        assert!(matches!(
            encode_frame(Flag::default(), &over, KEY),
            Err(FrameError::PayloadTooLarge { have, max }) if have == 65536 && max == 65535
        ));
    }

// # ✅ 3. Decoding

    #[test]
    fn decode_returns_borrowed_views() {
        let wire = encode_frame(Flag::new(false, 0), b"payload", KEY).unwrap();
        let view = decode_frame(&wire).unwrap();

        assert_eq!(view.flag, Flag::new(false, 0));
        assert_eq!(view.payload, b"payload");
        assert_eq!(view.payload_len(), 7);
        assert_eq!(view.signed, &wire[..PAYLOAD_OFFSET + 7]);
        assert_eq!(view.tag.len(), HASH_LEN);
        view.verify(KEY).unwrap();
    }

    #[test]
    fn decode_rejects_short_frames() {
        for len in 0..MIN_FRAME_LEN {
            let buf = vec![0u8; len];
            assert!(matches!(
                decode_frame(&buf),
                Err(FrameError::Truncated { have, need }) if have == len && need == MIN_FRAME_LEN
            ));
        }
    }

    #[test]
    fn decode_rejects_length_past_end() {
        let mut wire = encode_frame(Flag::default(), b"four", KEY).unwrap();
        wire[2] = 5;

        assert!(matches!(
            decode_frame(&wire),
            Err(FrameError::LengthOverrun { declared: 5, available: 4 })
        ));
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let mut wire = encode_frame(Flag::default(), b"xy", KEY).unwrap();
        wire.extend_from_slice(b"trailing");

        let view = decode_frame(&wire).unwrap();
        assert_eq!(view.payload, b"xy");
        view.verify(KEY).unwrap();
    }

    #[test]
    fn verify_fails_with_other_key() {
        let wire = encode_frame(Flag::default(), b"secret", KEY).unwrap();
        let view = decode_frame(&wire).unwrap();
        assert!(matches!(view.verify(b"other"), Err(MacError::TagMismatch)));
    }
}
