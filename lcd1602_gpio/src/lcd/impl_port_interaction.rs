use crate::{
    command_set::{CommandSet, TransferMode},
    full_command::{Bits, FullCommand},
    port::{DelayCycles, OutputPort},
};

use super::Lcd;

impl<Port, Delayer> Lcd<Port, Delayer>
where
    Port: OutputPort,
    Delayer: DelayCycles,
{
    /// 在 EN 上产生一次 低 -> 高 -> 低 的脉冲，每个电平都驻留相同的时间
    ///
    /// LCD1602 在 EN 高电平驻留足够久之后的下降沿，锁存 D4~D7 上的数据，
    /// 任何一段驻留时间不够，都可能导致 LCD1602 漏读或错读这半个字节
    pub fn pulse_enable(&mut self) {
        let en_mask = Port::PIN_MAPPING.en_mask();
        let settle_cycles = self.timing.get_strobe_settle_cycles();

        // EN 此时通常已经是低电平，再拉低一次不会产生边沿
        self.port.clear_bits(en_mask);
        self.delayer.delay_cycles(settle_cycles);

        self.port.set_bits(en_mask);
        self.delayer.delay_cycles(settle_cycles);

        self.port.clear_bits(en_mask);
        self.delayer.delay_cycles(settle_cycles);
    }

    /// 发送半个字节，超出 4 bit 的部分会被直接丢弃
    pub fn write_nibble(&mut self, value: u8, mode: TransferMode) {
        let mapping = Port::PIN_MAPPING;

        self.port.clear_bits(mapping.managed_mask());
        self.port.set_bits(mapping.data_mask(value & 0b1111));

        match mode {
            TransferMode::Command => self.port.clear_bits(mapping.rs_mask()),
            TransferMode::Character => self.port.set_bits(mapping.rs_mask()),
        }

        self.pulse_enable();
    }

    /// 4 bit 模式下，一个字节要分两次发送，且必须先发高 4 位
    pub fn write_byte(&mut self, value: u8, mode: TransferMode) {
        trace!("lcd1602: {} {=u8:#x}", mode, value);

        self.write_nibble(value >> 4, mode);
        self.write_nibble(value & 0b1111, mode);
    }

    pub fn send(&mut self, command: CommandSet) {
        let full_command = FullCommand::from(command);

        match full_command.bits {
            Bits::Bit4(raw_bits) => self.write_nibble(raw_bits, full_command.mode),
            Bits::Bit8(raw_bits) => self.write_byte(raw_bits, full_command.mode),
        }
    }

    /// 直接使用 Lcd 所持有的延时器等待
    pub fn delay_cycles(&mut self, cycles: u32) {
        self.delayer.delay_cycles(cycles);
    }
}
