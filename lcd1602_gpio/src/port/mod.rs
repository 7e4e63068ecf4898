//! 驱动所需的两个外部能力：只写的 8 bit 端口，以及以时钟周期计的忙等待

use crate::pin_mapping::PinMapping;

mod cycle_delayer;
mod pins_port;

pub use cycle_delayer::CycleDelayer;
pub use pins_port::PinsPort;

/// 一个只写的 8 bit 端口
///
/// 驱动只会改动 [`OutputPort::PIN_MAPPING`] 中涉及的位，且从不读取端口
pub trait OutputPort {
    /// RS / EN / D4~D7 在这个端口上的位置
    const PIN_MAPPING: PinMapping = PinMapping::DEFAULT;

    /// 把 `mask` 中为 1 的位设置为输出
    fn set_output_direction(&mut self, mask: u8);

    /// 把 `mask` 中为 1 的位置为高电平，其它位保持不变
    fn set_bits(&mut self, mask: u8);

    /// 把 `mask` 中为 1 的位置为低电平，其它位保持不变
    fn clear_bits(&mut self, mask: u8);
}

/// 阻塞式的忙等待，等待期间不让出控制流
pub trait DelayCycles {
    fn delay_cycles(&mut self, cycles: u32);
}
