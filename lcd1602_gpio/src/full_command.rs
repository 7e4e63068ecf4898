use crate::command_set::TransferMode;

pub(crate) struct FullCommand {
    pub(crate) mode: TransferMode,
    pub(crate) bits: Bits,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bits {
    // 只在初始化时使用，单独发送的半条指令
    Bit4(u8),
    Bit8(u8),
}
