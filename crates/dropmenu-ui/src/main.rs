#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Dropmenu browser entry point; native builds only print how to serve or test the menus.

#[cfg(target_arch = "wasm32")]
fn main() {
    dropmenu_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "dropmenu-ui renders its dropdown menus in the browser only.\n\
serve it with `trunk serve crates/dropmenu-ui/index.html`;\n\
the menu controller runs natively under `cargo test -p dropmenu-ui`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn write_hint(out: &mut impl std::io::Write) -> std::io::Result<()> {
    out.write_all(NATIVE_HINT.as_bytes())?;
    out.flush()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    write_hint(&mut std::io::stderr().lock())
}
