//! 最朴素的 blinky
//!
//! 翻转 LED，然后空转一个固定次数的循环，再翻转 LED，如此往复
//!
//! 循环的耗时取决于编译器生成的指令，和 opt-level 密切相关，
//! 因此这里的闪烁频率是“不可靠”的，下一个例子会用 cortex_m::asm::delay 替代它

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::pac;

mod utils;

use utils::startup::{freeze_watchdogs_on_halt, setup_led, switch_to_hse, toggle_led};

/// 每次翻转之间空转的次数
const SPIN_COUNT: u32 = 20_000;

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    rprintln!("\nStart blinky (busy loop)");

    let dp = pac::Peripherals::take().unwrap();

    freeze_watchdogs_on_halt(&dp);
    switch_to_hse(&dp);
    setup_led(&dp);

    loop {
        toggle_led(&dp);

        // 没有这个 nop，整个空循环会被编译器直接优化掉
        for _ in 0..SPIN_COUNT {
            cortex_m::asm::nop();
        }
    }
}
