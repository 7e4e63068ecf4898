//! # LCD1602 GPIO 4 bit 驱动
//!
//! 只使用普通的 GPIO 输出，以 4 bit 并行模式驱动 ST7066U / HD44780 兼容的 LCD1602
//!
//! 驱动本身只依赖两个“外部能力”：
//!
//! 1. 一个只写的 8 bit 端口 [`port::OutputPort`]，RS / EN / D4~D7 分别对应端口上的某一位
//! 2. 一个忙等待延时 [`port::DelayCycles`]，单位是 MCU 的时钟周期
//!
//! 这两个能力分别可以由寄存器直接实现（见 s02_lcd1602 中 GPIOA BSRR 的实现），
//! 也可以由 embedded-hal 的 [`port::PinsPort`] 与 [`port::CycleDelayer`] 适配得到
//!
//! 整个驱动是“发出即忘”的：我们从不读取 LCD1602 的忙标志，所以所有的时序都依赖固定的延时
//!
//! 基本用法：
//!
//! 1. 用 [`lcd::Builder`] 持有端口与延时器，按需修改 [`timing::Timing`] 等配置
//! 2. 调用 [`lcd::Builder::build_and_init`] 完成上电握手，得到 [`lcd::Lcd`]
//! 3. 使用 [`lcd::Lcd::clear`]、[`lcd::Lcd::set_cursor`]、[`lcd::Lcd::write_text`] 等方法

#![cfg_attr(not(test), no_std)]

// 日志宏需要最先引入，后面的模块才能使用
#[macro_use]
mod fmt;

pub mod command_set;
mod full_command;
pub mod geometry;
pub mod lcd;
pub mod pin_mapping;
pub mod port;
pub mod timing;
mod utils;

#[cfg(test)]
mod testing;
