//! ST7066U / HD44780 的“写”指令集
//!
//! 由于驱动从不读取 LCD1602，这里也没有读忙标志、读 RAM 这两条指令

use crate::{
    full_command::{Bits, FullCommand},
    utils::BitOps,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    ClearDisplay,
    ReturnHome,
    EntryModeSet(MoveDirection, ShiftType),
    DisplayOnOff {
        display: State,
        cursor: State,
        cursor_blink: State,
    },
    CursorOrDisplayShift(ShiftType, MoveDirection),
    // 这个 HalfFunctionSet 比较特殊，是在初始化 LCD1602 到 4 bit 模式所特有的“半条指令”
    // ST7066U 中并没有给这半条指令取名字，这里是为了规整自行确定的名称
    HalfFunctionSet,
    // 数据宽度固定为 4 bit
    FunctionSet(LineMode, Font),
    SetCGRAM(u8),
    SetDDRAM(u8),
    WriteDataToRAM(u8),
}

/// RS 引脚的电平，决定了 LCD1602 把这次传输当作指令，还是当作字符
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferMode {
    /// RS 低电平
    Command,
    /// RS 高电平
    Character,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    RightToLeft,
    #[default]
    LeftToRight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftType {
    #[default]
    CursorOnly,
    CursorAndDisplay,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Off,
    #[default]
    On,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    OneLine,
    #[default]
    TwoLine,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    #[default]
    Font5x8,
    Font5x11,
}

impl CommandSet {
    /// 该指令在总线上实际的数据，HalfFunctionSet 只有低 4 位有效
    pub fn raw_bits(self) -> u8 {
        match FullCommand::from(self).bits {
            Bits::Bit4(raw_bits) | Bits::Bit8(raw_bits) => raw_bits,
        }
    }

    pub fn transfer_mode(self) -> TransferMode {
        FullCommand::from(self).mode
    }
}

impl From<CommandSet> for FullCommand {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => {
                let raw_bits: u8 = 0b0000_0001;
                Self {
                    mode: TransferMode::Command,
                    bits: Bits::Bit8(raw_bits),
                }
            }

            CommandSet::ReturnHome => {
                let raw_bits: u8 = 0b0000_0010;
                Self {
                    mode: TransferMode::Command,
                    bits: Bits::Bit8(raw_bits),
                }
            }

            CommandSet::EntryModeSet(dir, st) => {
                let mut raw_bits: u8 = 0b0000_0100;

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(1),
                    MoveDirection::LeftToRight => raw_bits.set_bit(1),
                }

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(0),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(0),
                }

                Self {
                    mode: TransferMode::Command,
                    bits: Bits::Bit8(raw_bits),
                }
            }

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let mut raw_bits: u8 = 0b0000_1000;

                match display {
                    State::Off => raw_bits.clear_bit(2),
                    State::On => raw_bits.set_bit(2),
                }
                match cursor {
                    State::Off => raw_bits.clear_bit(1),
                    State::On => raw_bits.set_bit(1),
                }
                match cursor_blink {
                    State::Off => raw_bits.clear_bit(0),
                    State::On => raw_bits.set_bit(0),
                }

                Self {
                    mode: TransferMode::Command,
                    bits: Bits::Bit8(raw_bits),
                }
            }

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits: u8 = 0b0001_0000;

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(3),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(3),
                }

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(2),
                    MoveDirection::LeftToRight => raw_bits.set_bit(2),
                }

                Self {
                    mode: TransferMode::Command,
                    bits: Bits::Bit8(raw_bits),
                }
            }

            // 上电后 LCD1602 默认处于 8 bit 模式，此时只有 D4~D7 接线，
            // 这半条指令在 LCD1602 看来是一条完整的 8 bit FunctionSet，低 4 位悬空
            CommandSet::HalfFunctionSet => Self {
                mode: TransferMode::Command,
                bits: Bits::Bit4(0b0010),
            },

            CommandSet::FunctionSet(line, font) => {
                // DL 位（bit 4）保持为 0，即 4 bit 模式
                let mut raw_bits: u8 = 0b0010_0000;

                match line {
                    LineMode::OneLine => raw_bits.clear_bit(3),
                    LineMode::TwoLine => raw_bits.set_bit(3),
                }

                match font {
                    Font::Font5x8 => raw_bits.clear_bit(2),
                    Font::Font5x11 => raw_bits.set_bit(2),
                }

                Self {
                    mode: TransferMode::Command,
                    bits: Bits::Bit8(raw_bits),
                }
            }

            CommandSet::SetCGRAM(addr) => {
                assert!(addr <= 0b0011_1111, "CGRAM address out of range");

                Self {
                    mode: TransferMode::Command,
                    bits: Bits::Bit8(0b0100_0000 | addr),
                }
            }

            // 这里不检查地址，超出范围的地址与 0x80 按位或之后，会“绕”到别的地址（甚至别的指令）上
            CommandSet::SetDDRAM(addr) => Self {
                mode: TransferMode::Command,
                bits: Bits::Bit8(0b1000_0000 | addr),
            },

            CommandSet::WriteDataToRAM(data) => Self {
                mode: TransferMode::Character,
                bits: Bits::Bit8(data),
            },
        }
    }
}
