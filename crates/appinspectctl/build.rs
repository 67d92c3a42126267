// Sets APPINSPECT_VERSION, the string clap prints for `appinspectctl --version`

fn main() {
    // Packagers can export APPINSPECT_VERSION to stamp a distro revision
    let version = std::env::var("APPINSPECT_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=APPINSPECT_VERSION={}", version);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=APPINSPECT_VERSION");
}
