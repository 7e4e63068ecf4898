//! 两个 blinky 共用的启动流程
//!
//! 1. 让看门狗在调试暂停时停止计数
//! 2. 把系统时钟从 HSI 切换到 HSE
//! 3. 把 PC13 上的板载 LED 配置为输出

use stm32f4xx_hal::pac;

/// 板载晶振的频率
pub const HSE_FREQ_HZ: u32 = 8_000_000;

/// 复位之后 IWDG 是关闭的，WWDG 也需要软件启用，
/// 我们这里不会启动它们，只保证在 OpenOCD 暂停核心的时候，它们不会继续计数
pub fn freeze_watchdogs_on_halt(dp: &pac::Peripherals) {
    dp.DBGMCU
        .apb1_fz
        .modify(|_, w| w.dbg_iwdg_stop().set_bit().dbg_wwdg_stop().set_bit());
}

pub fn switch_to_hse(dp: &pac::Peripherals) {
    let rcc = &dp.RCC;

    rcc.cr.modify(|_, w| w.hseon().on());
    while rcc.cr.read().hserdy().is_not_ready() {}
    rcc.cfgr.modify(|_, w| w.sw().hse());
    while !rcc.cfgr.read().sws().is_hse() {}
}

/// 板载 LED 是低电平点亮的，这里先把 ODR 拉高，再切换为输出，避免 LED 闪一下
pub fn setup_led(dp: &pac::Peripherals) {
    dp.RCC.ahb1enr.modify(|_, w| w.gpiocen().enabled());

    let gpioc = &dp.GPIOC;
    gpioc.odr.modify(|_, w| w.odr13().high());
    gpioc.moder.modify(|_, w| w.moder13().output());
}

pub fn toggle_led(dp: &pac::Peripherals) {
    let gpioc = &dp.GPIOC;
    if gpioc.odr.read().odr13().is_low() {
        gpioc.odr.modify(|_, w| w.odr13().high())
    } else {
        gpioc.odr.modify(|_, w| w.odr13().low())
    }
}
