//! RS / EN / D4~D7 在 8 bit 端口上的位置
//!
//! 默认的接线方式：
//!
//! ```text
//! bit 0 <-> RS
//! bit 1 <-> EN
//! bit 4 <-> D4
//! bit 5 <-> D5
//! bit 6 <-> D6
//! bit 7 <-> D7
//! ```
//!
//! 数据线放在端口的高 4 位，这样一个半字节直接左移 4 位就是端口上的值

use crate::utils::{BitOps, BitState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMapping {
    rs: u8,
    en: u8,
    db: [u8; 4],
}

impl PinMapping {
    pub const DEFAULT: Self = Self::new(0, 1, [4, 5, 6, 7]);

    /// `db` 的顺序为 D4、D5、D6、D7
    ///
    /// 若在 `const` 中使用，位置重叠或越界会直接在编译期报错
    pub const fn new(rs: u8, en: u8, db: [u8; 4]) -> Self {
        let positions = [rs, en, db[0], db[1], db[2], db[3]];

        let mut seen: u8 = 0;
        let mut index = 0;
        while index < positions.len() {
            assert!(positions[index] < 8, "pin position out of the 8 bit port");
            let mask = 1u8 << positions[index];
            assert!(seen & mask == 0, "RS, EN and D4~D7 must not share a bit");
            seen |= mask;
            index += 1;
        }

        Self { rs, en, db }
    }

    pub const fn rs_mask(&self) -> u8 {
        1 << self.rs
    }

    pub const fn en_mask(&self) -> u8 {
        1 << self.en
    }

    pub const fn data_bus_mask(&self) -> u8 {
        (1 << self.db[0]) | (1 << self.db[1]) | (1 << self.db[2]) | (1 << self.db[3])
    }

    /// 驱动会写入的全部位
    pub const fn managed_mask(&self) -> u8 {
        self.rs_mask() | self.en_mask() | self.data_bus_mask()
    }

    /// 把半字节的第 i 位，放到 D(4+i) 所在的位置上，超出 4 bit 的部分直接丢弃
    pub fn data_mask(&self, nibble: u8) -> u8 {
        self.db
            .iter()
            .enumerate()
            .fold(0u8, |mut acc, (index, &pos)| {
                if let BitState::Set = nibble.check_bit(index as u8) {
                    acc.set_bit(pos);
                }
                acc
            })
    }
}

impl Default for PinMapping {
    fn default() -> Self {
        Self::DEFAULT
    }
}
