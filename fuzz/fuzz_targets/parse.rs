#![no_main]

use libfuzzer_sys::fuzz_target;
use pasc::parser;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let parse = parser::parse(s);

        // Totality: a tree is always produced and its leaves reproduce the
        // input exactly.
        let rebuilt: String = parse
            .tree
            .leaf_tokens()
            .into_iter()
            .map(|t| parse.tree.token_text(t).to_string())
            .collect();
        assert_eq!(rebuilt, s);
    }
});
