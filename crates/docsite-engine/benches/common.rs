// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *emphasis* and a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n> Quoted `code`\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_hostile_content(size: usize) -> String {
    // long runs of openers that never close, one run per line
    let runs = ["[", "![x](", "[a](", " _a", "<&"];
    runs.iter()
        .map(|unit| format!("{}\n", unit.repeat(size * 64)))
        .collect()
}
