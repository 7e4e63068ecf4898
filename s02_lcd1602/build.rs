// 说明见 s01_blinky 的 build.rs
//
// 最下方有 defmt 所需的额外的连接器脚本，请注意

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    println!("cargo:rustc-link-search={}", out.display());

    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();

    println!("cargo:rerun-if-changed=memory.x");

    println!("cargo:rustc-link-arg=-Tlink.x");

    // 使用 defmt 所必要的额外的链接器脚本
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 可选，调整当前 crate 的 defmt 日志等级
    // 注意它不会影响 lcd1602_gpio 的日志，想看驱动逐字节的 trace 日志，需要在编译时设置环境变量 DEFMT_LOG=trace
    println!("cargo:rustc-env=DEFMT_LOG=debug");
}
