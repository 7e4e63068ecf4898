use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use super::OutputPort;

/// 把 6 个独立的输出引脚，拼成一个“8 bit 端口”
///
/// 引脚按 [`crate::pin_mapping::PinMapping::DEFAULT`] 的位置对应，
/// 由于引脚的类型本身就是输出，[`OutputPort::set_output_direction`] 在这里什么也不做
///
/// 要求引脚的操作不会失败（比如 stm32f4xx-hal 的 `ErasedPin<Output>`），这样整个驱动才能保持“不会出错”
pub struct PinsPort<Pin> {
    rs_pin: Pin,
    en_pin: Pin,
    db_pins: [Pin; 4],
}

impl<Pin> PinsPort<Pin>
where
    Pin: OutputPin<Error = Infallible>,
{
    pub fn new(rs: Pin, en: Pin, db4: Pin, db5: Pin, db6: Pin, db7: Pin) -> Self {
        Self {
            rs_pin: rs,
            en_pin: en,
            db_pins: [db4, db5, db6, db7],
        }
    }

    /// 取回全部引脚，顺序为 RS、EN、D4~D7
    pub fn release(self) -> (Pin, Pin, [Pin; 4]) {
        (self.rs_pin, self.en_pin, self.db_pins)
    }

    fn drive(&mut self, mask: u8, state: PinState) {
        let mapping = <Self as OutputPort>::PIN_MAPPING;

        if mask & mapping.rs_mask() != 0 {
            infallible(self.rs_pin.set_state(state));
        }

        if mask & mapping.en_mask() != 0 {
            infallible(self.en_pin.set_state(state));
        }

        for (index, pin) in self.db_pins.iter_mut().enumerate() {
            // 借用 data_mask 找到 D(4+index) 在端口上的位置
            if mask & mapping.data_mask(1 << index) != 0 {
                infallible(pin.set_state(state));
            }
        }
    }
}

impl<Pin> OutputPort for PinsPort<Pin>
where
    Pin: OutputPin<Error = Infallible>,
{
    fn set_output_direction(&mut self, _mask: u8) {}

    fn set_bits(&mut self, mask: u8) {
        self.drive(mask, PinState::High);
    }

    fn clear_bits(&mut self, mask: u8) {
        self.drive(mask, PinState::Low);
    }
}

fn infallible(result: Result<(), Infallible>) {
    if let Err(never) = result {
        match never {}
    }
}
