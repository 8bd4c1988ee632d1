// File: crates/graph-render-skia/build.rs
// Summary: Links the Windows system libraries the Skia raster backend and ICU expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
