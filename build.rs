use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    // Rebuild when any stylesheet under assets/css changes
    println!("cargo:rerun-if-changed=assets/css/");

    // Output directory is ignored by git, so it may be missing on a fresh clone
    fs::create_dir_all(OUTPUT_DIR).expect("Failed to create assets/dist directory");

    // Inline every @import reachable from the entry stylesheet
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .expect("Failed to bundle CSS");

    // Minify rules in place before printing
    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    // Print as a single minified string
    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    // Layout links this file through asset!()
    fs::write(OUTPUT, css.code).expect("Failed to write bundle.css");

    println!("CSS bundled: {} -> {}", ENTRY, OUTPUT);
}
