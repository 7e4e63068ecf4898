use crate::{
    command_set::State,
    geometry::Geometry,
    port::{DelayCycles, OutputPort},
    timing::Timing,
};

use super::Lcd;

pub struct Builder<Port, Delayer> {
    port: Port,
    delayer: Delayer,
    timing: Timing,
    geometry: Geometry,
    display_on: State,
    cursor_on: State,
    cursor_blink: State,
}

impl<Port, Delayer> Builder<Port, Delayer>
where
    Port: OutputPort,
    Delayer: DelayCycles,
{
    /// 默认配置：1 MHz 参考时序、16x2 屏幕、显示开、光标开、光标不闪烁
    pub fn new(port: Port, delayer: Delayer) -> Self {
        Self {
            port,
            delayer,
            timing: Timing::default(),
            geometry: Geometry::default(),
            display_on: State::On,
            cursor_on: State::On,
            cursor_blink: State::Off,
        }
    }

    /// 消耗 Builder，执行上电握手
    ///
    /// LCD1602 上电之后只能初始化一次，因此这里拿走 Builder 的所有权，
    /// 同一组端口与延时器没有办法再走一遍这个流程
    pub fn build_and_init(self) -> Lcd<Port, Delayer> {
        let mut lcd = Lcd {
            port: self.port,
            delayer: self.delayer,
            timing: self.timing,
            geometry: self.geometry,
            display_on: self.display_on,
            cursor_on: self.cursor_on,
            cursor_blink: self.cursor_blink,
        };
        lcd.init_lcd();

        lcd
    }

    pub fn set_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn get_timing(&self) -> Timing {
        self.timing
    }

    pub fn set_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn get_geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn set_display_state(mut self, display: State) -> Self {
        self.display_on = display;
        self
    }

    pub fn get_display_state(&self) -> State {
        self.display_on
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.cursor_on = cursor;
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.cursor_on
    }

    pub fn set_blink_state(mut self, blink: State) -> Self {
        self.cursor_blink = blink;
        self
    }

    pub fn get_blink_state(&self) -> State {
        self.cursor_blink
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        command_set::State,
        geometry::Geometry,
        testing::{command, decode_transmissions, pair_nibbles, recording_builder},
        timing::Timing,
    };

    #[test]
    fn defaults() {
        let (_recorder, builder) = recording_builder();
        assert_eq!(builder.get_timing(), Timing::DEFAULT);
        assert_eq!(builder.get_geometry(), Geometry::LCD1602);
        assert_eq!(builder.get_display_state(), State::On);
        assert_eq!(builder.get_cursor_state(), State::On);
        assert_eq!(builder.get_blink_state(), State::Off);
    }

    #[test]
    fn settings_reach_the_lcd() {
        let (_recorder, builder) = recording_builder();
        let timing = Timing::DEFAULT.scaled_to(8_000_000);
        let lcd = builder
            .set_timing(timing)
            .set_geometry(Geometry::new(20, 2))
            .set_blink_state(State::On)
            .build_and_init();

        assert_eq!(lcd.get_timing(), timing);
        assert_eq!(lcd.get_geometry().get_columns(), 20);
        assert_eq!(lcd.get_blink_state(), State::On);
    }

    #[test]
    fn display_settings_change_display_on_off_byte() {
        let (recorder, builder) = recording_builder();
        builder
            .set_cursor_state(State::Off)
            .set_blink_state(State::On)
            .build_and_init();

        let transmissions = decode_transmissions(&recorder.events());
        assert_eq!(transmissions.len(), 7);

        // 跳过开头的半条指令
        assert_eq!(
            pair_nibbles(&transmissions[1..]),
            vec![command(0x28), command(0x0D), command(0x06)]
        );
    }
}
