//! 用 HAL 提供的引脚与 SysTick 延时驱动 LCD1602
//!
//! 接线与 s02c01 相同，不过这里的六个引脚各自是一个独立的 HAL 对象，
//! 由 PinsPort 把它们拼成驱动所需的 8 bit 端口，
//! SysTick 的延时器则由 CycleDelayer 转换为以时钟周期计的忙等待
//!
//! 除此之外，这里还演示了自定义字符、光标开关，以及用 core::write! 格式化输出

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt_rtt as _;
use panic_probe as _;

use stm32f4xx_hal::{pac, prelude::*};

use lcd1602_gpio::{
    command_set::{MoveDirection, State},
    lcd::Builder,
    port::{CycleDelayer, PinsPort},
    timing::Timing,
};

mod utils;

use utils::startup::{freeze_watchdogs_on_halt, HSE_FREQ_HZ};

const HEART: [u8; 8] = [
    0b00000, 0b00000, 0b01010, 0b11111, 0b01110, 0b00100, 0b00000, 0b00000,
];

#[cortex_m_rt::entry]
fn main() -> ! {
    defmt::info!("Start LCD1602 demo (HAL pins)");

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    freeze_watchdogs_on_halt(&dp.DBGMCU);

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(HSE_FREQ_HZ.Hz()).freeze();
    let core_clock_hz = clocks.sysclk().raw();

    let delayer = CycleDelayer::new(cp.SYST.delay(&clocks), core_clock_hz);

    let gpioa = dp.GPIOA.split();

    // 为了能放进同一个数组，这里把引脚的类型擦除掉
    let rs_pin = gpioa.pa0.into_push_pull_output().erase();
    let en_pin = gpioa.pa1.into_push_pull_output().erase();
    let db4_pin = gpioa.pa4.into_push_pull_output().erase();
    let db5_pin = gpioa.pa5.into_push_pull_output().erase();
    let db6_pin = gpioa.pa6.into_push_pull_output().erase();
    let db7_pin = gpioa.pa7.into_push_pull_output().erase();

    let port = PinsPort::new(rs_pin, en_pin, db4_pin, db5_pin, db6_pin, db7_pin);

    let mut lcd = Builder::new(port, delayer)
        .set_timing(Timing::DEFAULT.scaled_to(core_clock_hz))
        .set_blink_state(State::On)
        .build_and_init();

    lcd.draw_custom_char(1, HEART);

    lcd.clear();
    lcd.write_text("hello, LCD1602 ~"); // 最后的波浪线应该显示为全亮方块

    // 用自定义的心形覆盖全亮的方块
    lcd.set_cursor(0, 15);
    lcd.write_custom_char(1);

    lcd.set_blink_state(State::Off);
    lcd.set_cursor_state(State::Off);

    if let Err(err) = lcd.set_cursor_checked(2, 0) {
        defmt::warn!("{}", err);
    }

    let mut seconds: u32 = 0;

    loop {
        lcd.set_cursor(1, 0);
        // 对 Lcd 的格式化写入不会失败
        let _ = write!(lcd, "uptime {:>5} s", seconds);

        seconds = seconds.wrapping_add(1);
        lcd.delay_cycles(core_clock_hz);

        if seconds % 10 == 0 {
            lcd.shift_display(MoveDirection::RightToLeft);
            lcd.delay_cycles(core_clock_hz / 4);
            lcd.shift_display(MoveDirection::LeftToRight);
        }
    }
}
