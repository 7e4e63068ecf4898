//! 测试用的“逻辑分析仪”
//!
//! RecordingPort 与 RecordingDelay 共用一条事件记录，
//! decode_transmissions 模拟 LCD1602 在 EN 下降沿锁存 D4~D7 与 RS 的行为

use std::{cell::RefCell, rc::Rc};

use crate::{
    command_set::TransferMode,
    lcd::{Builder, Lcd},
    pin_mapping::PinMapping,
    port::{DelayCycles, OutputPort},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Direction(u8),
    Set(u8),
    Clear(u8),
    Delay(u32),
}

#[derive(Clone, Default)]
pub(crate) struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// 取出目前为止的全部事件，并清空记录
    pub(crate) fn take(&self) -> Vec<Event> {
        self.0.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

pub(crate) struct RecordingPort(Recorder);

impl OutputPort for RecordingPort {
    fn set_output_direction(&mut self, mask: u8) {
        self.0.push(Event::Direction(mask));
    }

    fn set_bits(&mut self, mask: u8) {
        self.0.push(Event::Set(mask));
    }

    fn clear_bits(&mut self, mask: u8) {
        self.0.push(Event::Clear(mask));
    }
}

pub(crate) struct RecordingDelay(Recorder);

impl DelayCycles for RecordingDelay {
    fn delay_cycles(&mut self, cycles: u32) {
        self.0.push(Event::Delay(cycles));
    }
}

pub(crate) type RecordingLcd = Lcd<RecordingPort, RecordingDelay>;

pub(crate) fn recording_builder() -> (Recorder, Builder<RecordingPort, RecordingDelay>) {
    let recorder = Recorder::default();
    let builder = Builder::new(
        RecordingPort(recorder.clone()),
        RecordingDelay(recorder.clone()),
    );
    (recorder, builder)
}

/// 完成初始化，并清空初始化过程产生的记录
pub(crate) fn initialized_lcd() -> (Recorder, RecordingLcd) {
    let (recorder, builder) = recording_builder();
    let lcd = builder.build_and_init();
    recorder.take();
    (recorder, lcd)
}

/// LCD1602 锁存到的一次 4 bit 传输
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Transmission {
    pub(crate) nibble: u8,
    pub(crate) mode: TransferMode,
}

pub(crate) fn decode_transmissions(events: &[Event]) -> Vec<Transmission> {
    let mapping = PinMapping::DEFAULT;
    let mut port_value = 0u8;
    let mut transmissions = Vec::new();

    for event in events {
        match *event {
            Event::Set(mask) => port_value |= mask,
            Event::Clear(mask) => {
                let falling_edge =
                    port_value & mapping.en_mask() != 0 && mask & mapping.en_mask() != 0;
                if falling_edge {
                    let nibble = (0..4).fold(0u8, |acc, index| {
                        match port_value & mapping.data_mask(1 << index) != 0 {
                            true => acc | (1 << index),
                            false => acc,
                        }
                    });
                    let mode = match port_value & mapping.rs_mask() != 0 {
                        true => TransferMode::Character,
                        false => TransferMode::Command,
                    };
                    transmissions.push(Transmission { nibble, mode });
                }
                port_value &= !mask;
            }
            Event::Direction(_) | Event::Delay(_) => {}
        }
    }

    transmissions
}

/// 把相邻的两次传输拼成一个字节，高 4 位在前
pub(crate) fn pair_nibbles(transmissions: &[Transmission]) -> Vec<(u8, TransferMode)> {
    assert!(transmissions.len() % 2 == 0, "odd number of nibbles");

    transmissions
        .chunks(2)
        .map(|pair| {
            assert_eq!(pair[0].mode, pair[1].mode, "mode changed inside a byte");
            ((pair[0].nibble << 4) | pair[1].nibble, pair[0].mode)
        })
        .collect()
}

pub(crate) fn decode_bytes(events: &[Event]) -> Vec<(u8, TransferMode)> {
    pair_nibbles(&decode_transmissions(events))
}

pub(crate) fn command(byte: u8) -> (u8, TransferMode) {
    (byte, TransferMode::Command)
}

pub(crate) fn character(byte: u8) -> (u8, TransferMode) {
    (byte, TransferMode::Character)
}
