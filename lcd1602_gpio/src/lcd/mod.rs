use crate::{
    command_set::State,
    geometry::Geometry,
    port::{DelayCycles, OutputPort},
    timing::Timing,
};

mod builder;
mod impl_ext;
mod impl_lcd_api;
mod impl_port_interaction;

pub use builder::Builder;
pub use impl_ext::CUSTOM_CHAR_SLOTS;

/// 已完成初始化的 LCD1602
///
/// 端口与延时器在整个会话中被 Lcd 独占，只有 [`Lcd::release`] 之后才能交还给调用者
pub struct Lcd<Port, Delayer> {
    port: Port,
    delayer: Delayer,
    timing: Timing,
    geometry: Geometry,
    display_on: State,
    cursor_on: State,
    cursor_blink: State,
}

impl<Port, Delayer> Lcd<Port, Delayer>
where
    Port: OutputPort,
    Delayer: DelayCycles,
{
    pub fn release(self) -> (Port, Delayer) {
        (self.port, self.delayer)
    }

    pub fn get_timing(&self) -> Timing {
        self.timing
    }

    pub fn get_geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn get_display_state(&self) -> State {
        self.display_on
    }

    pub fn get_cursor_state(&self) -> State {
        self.cursor_on
    }

    pub fn get_blink_state(&self) -> State {
        self.cursor_blink
    }
}

/// 字符到 LCD1602 字库编码的映射
///
/// 只有 ASCII 0x20 到 0x7D 与 LCD1602 的字库重合，
/// 0x7E 与 0x7F 在字库中是左右箭头，其余字符一律映射为 0xFF 全亮方块
pub fn char_to_code(char: char) -> u8 {
    match char {
        ' '..='}' => char as u8,
        _ => 0xFF,
    }
}
