//! WASM entry point
//!
//! This is the binary Trunk compiles; it attaches the page behaviors to the
//! document it is loaded into.

fn main() {
    if let Err(e) = folio_web::boot() {
        web_sys::console::error_1(&e);
    }
}
