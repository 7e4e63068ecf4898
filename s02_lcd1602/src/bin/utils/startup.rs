use stm32f4xx_hal::pac;

/// 板载晶振的频率
pub const HSE_FREQ_HZ: u32 = 8_000_000;

/// OpenOCD 暂停核心的时候，让两只看门狗也停止计数
///
/// 复位之后看门狗都不会自己启动，这里只处理调试时的情况
pub fn freeze_watchdogs_on_halt(dbgmcu: &pac::DBGMCU) {
    dbgmcu
        .apb1_fz
        .modify(|_, w| w.dbg_iwdg_stop().set_bit().dbg_wwdg_stop().set_bit());
}
