#![allow(missing_docs)]

use divan::{Bencher, black_box, counter::BytesCount};
use regexp_compat::{ConstRegexPattern, Regexp};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static CORPUS: &str = "\
const width = 640; var height = 480; const depth = 24;
The quick brown fox (version 1.5) jumps over the lazy dog, twice.
key=value; other_key = 42 ; empty= ; last_key=1024
Ünïcödé text, with accents: café, naïve, façade, and 東京 too.
";

fn corpus() -> String {
    CORPUS.repeat(200)
}

const DECL: &str = r"(?P<IDENT>var|const)\s+(?P<NAME>\w+)\s*=\s*(?P<VALUE>\d+)";

mod find_all {
    use super::*;

    #[divan::bench(args = [ConstRegexPattern::Basic(DECL), ConstRegexPattern::Fancy(DECL)])]
    fn submatch_index(
        bencher: Bencher,
        pattern: ConstRegexPattern,
    ) {
        let text = corpus();
        let re = Regexp::compile(pattern).unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| re.find_all_string_submatch_index(black_box(&text), -1));
    }

    #[divan::bench]
    fn words(bencher: Bencher) {
        let text = corpus();
        let re = Regexp::compile(r"\w+").unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| re.find_all_string(black_box(&text), -1));
    }

    #[divan::bench]
    fn empty_matches(bencher: Bencher) {
        let text = corpus();
        let re = Regexp::compile(r"x*").unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| re.find_all_string_index(black_box(&text), -1));
    }
}

mod replace {
    use super::*;

    #[divan::bench]
    fn template(bencher: Bencher) {
        let text = corpus();
        let re = Regexp::compile(DECL).unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| re.replace_all_string(black_box(&text), "$NAME := $VALUE"));
    }

    #[divan::bench]
    fn literal_bytes(bencher: Bencher) {
        let text = corpus();
        let re = Regexp::compile(r"\d+").unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| re.replace_all_literal(black_box(text.as_bytes()), b"#"));
    }

    #[divan::bench]
    fn func(bencher: Bencher) {
        let text = corpus();
        let re = Regexp::compile(r"[aeiou]").unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| re.replace_all_string_func(black_box(&text), |s| s.to_uppercase()));
    }
}

mod split {
    use super::*;

    #[divan::bench]
    fn separators(bencher: Bencher) {
        let text = corpus();
        let re = Regexp::compile(r"\s*[;,]\s*").unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| re.split(black_box(&text), -1));
    }

    #[divan::bench]
    fn lookahead(bencher: Bencher) {
        let text = corpus();
        let re = Regexp::compile(r"\s+(?=\w+\s*=)").unwrap();
        bencher
            .counter(BytesCount::new(text.len()))
            .bench(|| re.split(black_box(&text), -1));
    }
}

#[divan::bench]
fn quote_meta(bencher: Bencher) {
    let text = corpus();
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| regexp_compat::quote_meta(black_box(&text)));
}
