// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::ND;

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    bench_with::<Ours>(c, "wildcard");
    bench_with::<OursCi>(c, "wildcard-ci");
    bench_with::<wildmatch::WildMatch>(c, "wildmatch");
}

fn bench_with<Pattern: Wildcard>(c: &mut Criterion, title: &str) {
    let mut c = c.benchmark_group(format!("{}{}wildcard", super::GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    const HOST: (&str, &str) = ("host", "*!*@*.example.com");
    const NICK: (&str, &str) = ("nick", "nick?!*@*");
    const STARS: (&str, &str) = ("stars", "*a*a*a*a*b");

    let variants = [
        ("short", "n!u@irc.example.com", HOST, true),
        ("short", "n!u@example.com", HOST, false),
        ("long", "somebody!~identity@a.very.long.chain.of.subdomains.example.com", HOST, true),
        ("short", "nick1!user@host", NICK, true),
        ("short", "nick12!user@host", NICK, false),
        ("long", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", STARS, false),
    ];

    for (name, input, (pname, pattern), expected) in &variants {
        let function = format!("{}:{}", title, "matches");
        let param = format!(
            "{}:{}:{}:{}",
            name,
            pname,
            if *expected { "pos" } else { "neg" },
            input.len(),
        );
        let pattern = Pattern::new(pattern);
        let setup = || String::from(*input);
        let routine = |input: String| black_box(&pattern).matches(&input);

        assert_eq!(routine(setup()), *expected);

        c.throughput(Throughput::Bytes(input.len() as u64));
        c.bench_function(BenchmarkId::new(function, param), |b| {
            b.iter_batched(setup, routine, BatchSize::SmallInput);
        });
    }
}

// ---

trait Wildcard {
    fn new(pattern: &'static str) -> Self;
    fn matches(&self, what: &str) -> bool;
}

struct Ours(wildcard::Mask);

impl Wildcard for Ours {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(wildcard::Mask::new(pattern))
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.0.matches(what)
    }
}

struct OursCi(wildcard::Mask);

impl Wildcard for OursCi {
    #[inline(always)]
    fn new(pattern: &'static str) -> Self {
        Self(wildcard::Mask::new(pattern))
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.0.matches_ci(what)
    }
}

impl Wildcard for wildmatch::WildMatch {
    #[inline(always)]
    fn new(pattern: &str) -> Self {
        Self::new(pattern)
    }

    #[inline(always)]
    fn matches(&self, what: &str) -> bool {
        self.matches(what)
    }
}
