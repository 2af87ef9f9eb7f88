// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "## Section\n\nParagraph with **bold**, _italic_ and `code` content.\n\n- Bullet point\n- Another [link](https://example.com)\n\n1. First\n2. Second\n\n> A quote\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    format!("# Title\n\n{}", base.repeat(size))
}

#[allow(dead_code)]
pub fn generate_inline_heavy_paragraph(runs: usize) -> String {
    let mut content = String::new();
    for i in 0..runs {
        content.push_str(&format!(
            "Run {i} has **bold {i}** and _italic {i}_ with ![img {i}](/img/{i}.png) and [link {i}](/p/{i}). "
        ));
    }
    content
}
