// 编译当前 crate 前，需要预先执行的操作
//
// 本文件修改自 https://github.com/rust-embedded/cortex-m-quickstart 仓库，可搭配 cortex-m-rt crate 一同使用
//
// build.rs 运行在编译机器上，因此这里可以使用 std

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    // OUT_DIR 为当前这个 build script 存放其生成的文件的目录
    let out = &PathBuf::from(env::var_os("OUT_DIR").unwrap());
    // 让连接器的搜索目录包含 OUT_DIR
    println!("cargo:rustc-link-search={}", out.display());

    // 将 memory.x 注入到 build script 自身，运行时再写入 OUT_DIR 下
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();

    // 仅在 memory.x 修改后，才重新编译和运行 build script
    println!("cargo:rerun-if-changed=memory.x");

    // 使用 cortex-m-rt crate 提供的 link.x
    println!("cargo:rustc-link-arg=-Tlink.x");
}
