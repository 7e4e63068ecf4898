//! 以时钟周期计时的 blinky
//!
//! cortex_m::asm::delay 由一段固定的汇编实现，它至少会等待给定的时钟周期数，
//! 不受 opt-level 的影响，LCD1602 的驱动也会用它来实现忙等待

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::pac;

mod utils;

use utils::startup::{
    freeze_watchdogs_on_halt, setup_led, switch_to_hse, toggle_led, HSE_FREQ_HZ,
};

/// 以 1 MHz 时钟计的翻转间隔
const TOGGLE_INTERVAL_REF_CYCLES: u32 = 20_000;

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().unwrap();

    freeze_watchdogs_on_halt(&dp);
    switch_to_hse(&dp);
    setup_led(&dp);

    // 切换到 HSE 之后，核心的时钟频率就是 HSE 的频率，把间隔换算到实际的时钟周期
    let interval_cycles = TOGGLE_INTERVAL_REF_CYCLES * (HSE_FREQ_HZ / 1_000_000);

    rprintln!("\nStart blinky, toggle every {} cycles", interval_cycles);

    loop {
        cortex_m::asm::delay(interval_cycles);
        toggle_led(&dp);
    }
}
