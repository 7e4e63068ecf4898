use core::fmt;

use crate::{
    command_set::{CommandSet, MoveDirection, ShiftType, State, TransferMode},
    port::{DelayCycles, OutputPort},
};

use super::Lcd;

/// CGRAM 中可以自定义的字符数量
pub const CUSTOM_CHAR_SLOTS: u8 = 8;

impl<Port, Delayer> Lcd<Port, Delayer>
where
    Port: OutputPort,
    Delayer: DelayCycles,
{
    /// 只让光标回到左上角，不清除 DDRAM 的内容
    pub fn return_home(&mut self) {
        self.send(CommandSet::ReturnHome);
    }

    pub fn set_display_state(&mut self, display: State) {
        self.display_on = display;
        self.send_display_on_off();
    }

    pub fn set_cursor_state(&mut self, cursor: State) {
        self.cursor_on = cursor;
        self.send_display_on_off();
    }

    pub fn set_blink_state(&mut self, blink: State) {
        self.cursor_blink = blink;
        self.send_display_on_off();
    }

    pub fn toggle_display(&mut self) {
        match self.get_display_state() {
            State::Off => self.set_display_state(State::On),
            State::On => self.set_display_state(State::Off),
        }
    }

    /// 整个画面（连同光标）移动一格，DDRAM 的内容不变
    pub fn shift_display(&mut self, dir: MoveDirection) {
        self.send(CommandSet::CursorOrDisplayShift(
            ShiftType::CursorAndDisplay,
            dir,
        ));
    }

    pub fn shift_cursor(&mut self, dir: MoveDirection) {
        self.send(CommandSet::CursorOrDisplayShift(ShiftType::CursorOnly, dir));
    }

    /// 向 CGRAM 写入一个 5x8 的自定义字符
    ///
    /// rows 从上到下排列，每行只有低 5 位有效；
    /// 写完之后地址计数器还指向 CGRAM，这里把它拨回 DDRAM 的 0 地址，
    /// 否则后续写入的字符都会落到字模里
    pub fn draw_custom_char(&mut self, slot: u8, rows: [u8; 8]) {
        assert!(slot < CUSTOM_CHAR_SLOTS, "only 8 custom characters supported");

        debug!("lcd1602: draw custom char into slot {=u8}", slot);

        self.send(CommandSet::SetCGRAM(slot * 8));
        for row in rows {
            self.send(CommandSet::WriteDataToRAM(row & 0b1_1111));
        }
        self.send(CommandSet::SetDDRAM(0));
    }

    /// 在当前光标处显示 CGRAM 中的自定义字符
    pub fn write_custom_char(&mut self, slot: u8) {
        assert!(slot < CUSTOM_CHAR_SLOTS, "only 8 custom characters supported");

        self.write_byte(slot, TransferMode::Character);
    }

    fn send_display_on_off(&mut self) {
        self.send(CommandSet::DisplayOnOff {
            display: self.display_on,
            cursor: self.cursor_on,
            cursor_blink: self.cursor_blink,
        });
    }
}

// 这样就可以直接用 core::write! 往屏幕上输出格式化后的内容了
impl<Port, Delayer> fmt::Write for Lcd<Port, Delayer>
where
    Port: OutputPort,
    Delayer: DelayCycles,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_text(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use crate::{
        command_set::{MoveDirection, State},
        testing::{character, command, decode_bytes, initialized_lcd},
    };

    #[test]
    fn return_home_only() {
        let (recorder, mut lcd) = initialized_lcd();
        lcd.return_home();
        assert_eq!(decode_bytes(&recorder.take()), vec![command(0x02)]);
    }

    #[test]
    fn display_state_is_tracked() {
        let (recorder, mut lcd) = initialized_lcd();

        lcd.set_blink_state(State::On);
        lcd.set_cursor_state(State::Off);
        lcd.set_display_state(State::Off);

        assert_eq!(
            decode_bytes(&recorder.take()),
            vec![command(0x0F), command(0x0D), command(0x09)]
        );
        assert_eq!(lcd.get_display_state(), State::Off);
        assert_eq!(lcd.get_cursor_state(), State::Off);
        assert_eq!(lcd.get_blink_state(), State::On);
    }

    #[test]
    fn toggle_display_twice() {
        let (recorder, mut lcd) = initialized_lcd();

        lcd.toggle_display();
        lcd.toggle_display();

        assert_eq!(
            decode_bytes(&recorder.take()),
            vec![command(0x0A), command(0x0E)]
        );
        assert_eq!(lcd.get_display_state(), State::On);
    }

    #[test]
    fn shifts() {
        let (recorder, mut lcd) = initialized_lcd();

        lcd.shift_display(MoveDirection::RightToLeft);
        lcd.shift_display(MoveDirection::LeftToRight);
        lcd.shift_cursor(MoveDirection::RightToLeft);
        lcd.shift_cursor(MoveDirection::LeftToRight);

        assert_eq!(
            decode_bytes(&recorder.take()),
            vec![command(0x18), command(0x1C), command(0x10), command(0x14)]
        );
    }

    #[test]
    fn custom_char_sequence() {
        let (recorder, mut lcd) = initialized_lcd();

        let heart = [
            0b00000, 0b01010, 0b11111, 0b11111, 0b11111, 0b01110, 0b00100, 0b11100000,
        ];
        lcd.draw_custom_char(3, heart);

        let bytes = decode_bytes(&recorder.take());
        assert_eq!(bytes.len(), 1 + 8 + 1);
        assert_eq!(bytes[0], command(0x40 | 3 * 8));
        assert_eq!(bytes[1..3], [character(0b00000), character(0b01010)]);
        // 高 3 位被丢弃
        assert_eq!(bytes[8], character(0));
        assert_eq!(bytes[9], command(0x80));

        lcd.write_custom_char(3);
        assert_eq!(decode_bytes(&recorder.take()), vec![character(0x03)]);
    }

    #[test]
    #[should_panic(expected = "only 8 custom characters supported")]
    fn custom_char_slot_out_of_range() {
        let (_recorder, mut lcd) = initialized_lcd();
        lcd.draw_custom_char(8, [0; 8]);
    }

    #[test]
    fn formatted_output() {
        let (recorder, mut lcd) = initialized_lcd();

        write!(lcd, "T={}", 42).unwrap();

        assert_eq!(
            decode_bytes(&recorder.take()),
            vec![
                character(b'T'),
                character(b'='),
                character(b'4'),
                character(b'2')
            ]
        );
    }

    #[test]
    fn delay_passthrough_does_not_touch_port() {
        let (recorder, mut lcd) = initialized_lcd();
        lcd.delay_cycles(1234);
        assert_eq!(recorder.take(), vec![crate::testing::Event::Delay(1234)]);
    }
}
