pub(crate) enum BitState {
    Clear,
    Set,
}

pub(crate) trait BitOps {
    fn set_bit(&mut self, pos: u8);
    fn clear_bit(&mut self, pos: u8);
    fn check_bit(&self, pos: u8) -> BitState;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) {
        assert!(pos <= 7, "bit offset larger than 7");

        *self |= 1u8 << pos;
    }

    fn clear_bit(&mut self, pos: u8) {
        assert!(pos <= 7, "bit offset larger than 7");

        *self &= !(1u8 << pos);
    }

    fn check_bit(&self, pos: u8) -> BitState {
        assert!(pos <= 7, "bit offset larger than 7");

        match (*self >> pos) & 1 == 1 {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BitOps, BitState};

    #[test]
    fn set_and_clear_single_bit() {
        let mut raw_bits = 0b0000_1000u8;
        raw_bits.set_bit(1);
        assert_eq!(raw_bits, 0b0000_1010);
        raw_bits.clear_bit(3);
        assert_eq!(raw_bits, 0b0000_0010);
    }

    #[test]
    fn check_bit_reports_state() {
        let raw_bits = 0b1000_0001u8;
        assert!(matches!(raw_bits.check_bit(0), BitState::Set));
        assert!(matches!(raw_bits.check_bit(7), BitState::Set));
        assert!(matches!(raw_bits.check_bit(4), BitState::Clear));
    }

    #[test]
    #[should_panic(expected = "bit offset larger than 7")]
    fn bit_offset_out_of_range() {
        let mut raw_bits = 0u8;
        raw_bits.set_bit(8);
    }
}
