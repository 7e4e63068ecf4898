//! 延时参数
//!
//! 所有的数值都以 1 MHz 参考时钟下的周期数记录，
//! 也就是说，在 1 MHz 下，1 个周期就是 1 us

/// 参考时钟的频率
pub const REFERENCE_CLOCK_HZ: u32 = 1_000_000;

/// 上电等待至少要比 EN 脉冲的单次延时大出这么多倍
pub const MIN_BOOT_TO_STROBE_RATIO: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    strobe_settle_cycles: u32,
    boot_cycles: u32,
}

impl Timing {
    /// 200 us 的 EN 驻留，100 ms 的上电等待
    pub const DEFAULT: Self = Self::new(200, 100_000);

    pub const fn new(strobe_settle_cycles: u32, boot_cycles: u32) -> Self {
        assert!(strobe_settle_cycles > 0, "strobe settle delay cannot be zero");
        assert!(
            boot_cycles >= strobe_settle_cycles.saturating_mul(MIN_BOOT_TO_STROBE_RATIO),
            "boot delay too short compared with strobe settle delay"
        );

        Self {
            strobe_settle_cycles,
            boot_cycles,
        }
    }

    /// 换算到另一个核心频率下，保持相同的实际时长
    ///
    /// 换算结果向上取整，保证延时只会变长，不会变短
    pub fn scaled_to(self, core_clock_hz: u32) -> Self {
        assert!(core_clock_hz > 0, "core clock cannot be 0 Hz");

        let strobe = scale_cycles(self.strobe_settle_cycles, core_clock_hz).max(1);
        let boot = scale_cycles(self.boot_cycles, core_clock_hz)
            .max(strobe.saturating_mul(MIN_BOOT_TO_STROBE_RATIO));

        Self::new(strobe, boot)
    }

    pub fn get_strobe_settle_cycles(&self) -> u32 {
        self.strobe_settle_cycles
    }

    pub fn get_boot_cycles(&self) -> u32 {
        self.boot_cycles
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn scale_cycles(reference_cycles: u32, core_clock_hz: u32) -> u32 {
    let scaled =
        (reference_cycles as u64 * core_clock_hz as u64).div_ceil(REFERENCE_CLOCK_HZ as u64);
    scaled.min(u32::MAX as u64) as u32
}
