use embedded_hal::delay::DelayNs;

use super::DelayCycles;

/// 用 embedded-hal 的 [`DelayNs`]（比如 stm32f4xx-hal 的 `SysDelay`）实现 [`DelayCycles`]
///
/// 周期数按核心频率换算为纳秒，向上取整
pub struct CycleDelayer<D> {
    delayer: D,
    core_clock_hz: u32,
}

impl<D: DelayNs> CycleDelayer<D> {
    pub fn new(delayer: D, core_clock_hz: u32) -> Self {
        assert!(core_clock_hz > 0, "core clock cannot be 0 Hz");

        Self {
            delayer,
            core_clock_hz,
        }
    }

    pub fn release(self) -> D {
        self.delayer
    }

    pub fn get_core_clock_hz(&self) -> u32 {
        self.core_clock_hz
    }

    pub fn cycles_to_ns(&self, cycles: u32) -> u64 {
        (cycles as u64 * 1_000_000_000).div_ceil(self.core_clock_hz as u64)
    }
}

impl<D: DelayNs> DelayCycles for CycleDelayer<D> {
    fn delay_cycles(&mut self, cycles: u32) {
        let mut remain_ns = self.cycles_to_ns(cycles);

        // 低频时钟下，换算出来的纳秒数可能超过 u32，分成几次等待
        while remain_ns > 0 {
            let step = remain_ns.min(u32::MAX as u64) as u32;
            self.delayer.delay_ns(step);
            remain_ns -= step as u64;
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::delay::DelayNs;

    use super::CycleDelayer;
    use crate::port::DelayCycles;

    #[derive(Default)]
    struct RecordingDelay(Vec<u32>);

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.push(ns);
        }
    }

    #[test]
    fn cycles_at_1mhz_are_microseconds() {
        let mut delayer = CycleDelayer::new(RecordingDelay::default(), 1_000_000);
        delayer.delay_cycles(200);
        assert_eq!(delayer.release().0, vec![200_000]);
    }

    #[test]
    fn cycles_round_up() {
        let delayer = CycleDelayer::new(RecordingDelay::default(), 3);
        assert_eq!(delayer.cycles_to_ns(1), 333_333_334);
    }

    #[test]
    fn zero_cycles_do_not_wait() {
        let mut delayer = CycleDelayer::new(RecordingDelay::default(), 8_000_000);
        delayer.delay_cycles(0);
        assert!(delayer.release().0.is_empty());
    }

    #[test]
    fn long_wait_is_split() {
        // 1 Hz 下 5 个周期就是 5 秒，超过了 u32 能表示的纳秒数
        let mut delayer = CycleDelayer::new(RecordingDelay::default(), 1);
        delayer.delay_cycles(5);
        let steps = delayer.release().0;
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0], u32::MAX);
        assert_eq!(
            steps.iter().map(|&ns| ns as u64).sum::<u64>(),
            5_000_000_000
        );
    }
}
