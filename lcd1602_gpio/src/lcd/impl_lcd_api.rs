use crate::{
    command_set::{CommandSet, Font, LineMode, MoveDirection, ShiftType, TransferMode},
    geometry::CursorOutOfRange,
    port::{DelayCycles, OutputPort},
};

use super::{char_to_code, Lcd};

/// 第二行在 DDRAM 中的起始地址
const SECOND_ROW_BASE: u8 = 0x40;

impl<Port, Delayer> Lcd<Port, Delayer>
where
    Port: OutputPort,
    Delayer: DelayCycles,
{
    /// LCD1602 上电后的握手流程，由 [`super::Builder::build_and_init`] 调用
    ///
    /// 在 LCD1602 的一次上电周期中，只能执行一次，
    /// 对一个已经处于 4 bit 模式的 LCD1602 再次执行这个流程，会让它进入无法预测的状态，
    /// 只有给 LCD1602 断电再上电才能恢复
    pub(crate) fn init_lcd(&mut self) {
        let mapping = Port::PIN_MAPPING;

        debug!(
            "lcd1602: power-on handshake, boot wait {=u32} cycles",
            self.timing.get_boot_cycles()
        );

        // 在初始化流程中，我们每次都发送“裸指令”，不要使用 Lcd 提供的其它方法

        self.port.set_output_direction(mapping.managed_mask());
        self.port.clear_bits(mapping.managed_mask());

        // LCD1602 自己的上电复位，比 MCU 慢得多
        self.delayer.delay_cycles(self.timing.get_boot_cycles());

        self.port.clear_bits(mapping.rs_mask() | mapping.en_mask());

        // 此时 LCD1602 还认为自己处于 8 bit 模式，先用半条指令把它切换到 4 bit 模式
        self.send(CommandSet::HalfFunctionSet);

        // 之后的指令就都是按两个半字节发送的了
        self.send(CommandSet::FunctionSet(LineMode::TwoLine, Font::Font5x8));

        self.send(CommandSet::DisplayOnOff {
            display: self.display_on,
            cursor: self.cursor_on,
            cursor_blink: self.cursor_blink,
        });

        self.send(CommandSet::EntryModeSet(
            MoveDirection::LeftToRight,
            ShiftType::CursorOnly,
        ));
    }

    /// 清屏，并让光标回到左上角
    ///
    /// 只执行 ClearDisplay 并不能保证光标已经归位，因此这里总是紧跟一条 ReturnHome
    pub fn clear(&mut self) {
        self.send(CommandSet::ClearDisplay);
        self.send(CommandSet::ReturnHome);
    }

    /// 不检查行列范围
    ///
    /// 非 0 的行都视为第二行，过大的列会直接与基地址按位或，落到别的地址上
    pub fn set_cursor(&mut self, row: u8, column: u8) {
        let row_base = match row {
            0 => 0x00,
            _ => SECOND_ROW_BASE,
        };

        self.send(CommandSet::SetDDRAM(row_base | column));
    }

    /// 先按屏幕尺寸检查行列，越界时不会对端口做任何写入
    pub fn set_cursor_checked(&mut self, row: u8, column: u8) -> Result<(), CursorOutOfRange> {
        if !self.geometry.contains(row, column) {
            return Err(CursorOutOfRange {
                row,
                column,
                geometry: self.geometry,
            });
        }

        self.set_cursor(row, column);
        Ok(())
    }

    /// 逐个字符写入，写入位置依靠 LCD1602 自己的地址自增
    pub fn write_text(&mut self, text: &str) {
        for char in text.chars() {
            self.write_char(char);
        }
    }

    /// 参见 [`char_to_code`]
    pub fn write_char(&mut self, char: char) {
        self.write_byte(char_to_code(char), TransferMode::Character);
    }

    /// 不经过字符映射，直接写入字库编码
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte, TransferMode::Character);
        }
    }
}
