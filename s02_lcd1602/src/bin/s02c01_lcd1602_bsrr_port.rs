//! 直接用 GPIOA 的寄存器驱动 LCD1602
//!
//! LCD1602 的 RS / EN / D4~D7 接在同一个 GPIO 端口的低 8 位上，
//! 这样整个端口就可以当作驱动所需的 8 bit 只写端口来用
//!
//! 接线图
//!
//! LCD <-> STM32
//! Vss <-> GND
//! Vdd <-> 5V
//! V0 <-> 可变电阻 <-> 5V（调节显示对比度）
//! RS <-> PA0
//! RW <-> GND（驱动从不读取 LCD1602，直接接地即可）
//! EN [<-> PA1, <-> 4.7 kOhm 下拉电阻 <-> GND]
//! D4 <-> PA4
//! D5 <-> PA5
//! D6 <-> PA6
//! D7 <-> PA7
//! A <-> 5V
//! K <-> GND
//!
//! 置位与复位都走 BSRR 寄存器，BSRR 的写入是原子的，不需要先读 ODR，
//! 也不会碰到端口上其它引脚（比如 PA13 / PA14 上的 SWD）

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use stm32f4xx_hal::pac;

use lcd1602_gpio::{
    lcd::Builder,
    port::{DelayCycles, OutputPort},
    timing::Timing,
};

mod utils;

use utils::startup::{freeze_watchdogs_on_halt, HSE_FREQ_HZ};

/// GPIOA 的低 8 位
struct GpioaPort {
    gpioa: pac::GPIOA,
}

impl OutputPort for GpioaPort {
    fn set_output_direction(&mut self, mask: u8) {
        // MODER 每个引脚占 2 bit，0b01 为通用输出模式
        self.gpioa.moder.modify(|r, w| {
            let moder = (0..8)
                .filter(|offset| mask & (1 << offset) != 0)
                .fold(r.bits(), |acc, offset| {
                    (acc & !(0b11 << (offset * 2))) | (0b01 << (offset * 2))
                });
            unsafe { w.bits(moder) }
        });
    }

    fn set_bits(&mut self, mask: u8) {
        // BSRR 的低 16 位为置位
        self.gpioa.bsrr.write(|w| unsafe { w.bits(mask as u32) });
    }

    fn clear_bits(&mut self, mask: u8) {
        // BSRR 的高 16 位为复位
        self.gpioa.bsrr.write(|w| unsafe { w.bits((mask as u32) << 16) });
    }
}

/// 用固定的汇编循环实现的忙等待，至少会等待给定的时钟周期
struct AsmDelay;

impl DelayCycles for AsmDelay {
    fn delay_cycles(&mut self, cycles: u32) {
        cortex_m::asm::delay(cycles);
    }
}

#[cortex_m_rt::entry]
fn main() -> ! {
    defmt::info!("Start LCD1602 demo (GPIOA BSRR)");

    let dp = pac::Peripherals::take().unwrap();

    freeze_watchdogs_on_halt(&dp.DBGMCU);

    // 开启 HSE 作为主时钟源
    let rcc = &dp.RCC;
    rcc.cr.modify(|_, w| w.hseon().on());
    while rcc.cr.read().hserdy().is_not_ready() {}
    rcc.cfgr.modify(|_, w| w.sw().hse());
    while !rcc.cfgr.read().sws().is_hse() {}

    rcc.ahb1enr.modify(|_, w| w.gpioaen().enabled());

    // 驱动中的延时是以 1 MHz 时钟为基准给出的，这里换算到 HSE 的频率上
    let timing = Timing::DEFAULT.scaled_to(HSE_FREQ_HZ);
    defmt::debug!(
        "strobe settle {=u32} cycles, boot {=u32} cycles",
        timing.get_strobe_settle_cycles(),
        timing.get_boot_cycles()
    );

    let mut lcd = Builder::new(GpioaPort { gpioa: dp.GPIOA }, AsmDelay)
        .set_timing(timing)
        .build_and_init();

    lcd.clear();
    lcd.write_text("01234567");

    // 第二行显示一个一直增长的计数器
    let mut buffer = itoa::Buffer::new();
    let mut count: u32 = 0;

    loop {
        lcd.set_cursor(1, 0);
        lcd.write_text(buffer.format(count));

        count = count.wrapping_add(1);
        lcd.delay_cycles(HSE_FREQ_HZ / 2);
    }
}
