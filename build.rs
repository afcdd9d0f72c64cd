use std::env;

fn main() {
    // An explicit `u32` or `u64` feature wins; otherwise follow the target's pointer width.
    if env::var_os("CARGO_FEATURE_U32").is_some() || env::var_os("CARGO_FEATURE_U64").is_some() {
        return;
    }
    match env::var("CARGO_CFG_TARGET_POINTER_WIDTH").as_deref() {
        Ok("64") => println!("cargo:rustc-cfg=feature=\"u64\""),
        _ => println!("cargo:rustc-cfg=feature=\"u32\""),
    }
}
