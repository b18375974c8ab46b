// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, criterion_group};
use hostmask::{AccessList, Action, CaseMapping, Rule};

// local imports
use super::ND;

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{}{}acl", super::GROUP, ND));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let rules = (0..32)
        .map(|i| Rule::new(format!("*!*@*.net{}.example", i), Action::Deny))
        .chain([Rule::new("*!*@*", Action::Allow)])
        .collect();
    let acl = AccessList::new(rules, Action::Deny).with_case_mapping(Some(CaseMapping::Rfc1459));

    for (name, subject, expected) in [
        ("first", "nick!user@host.net0.example", Action::Deny),
        ("last", "nick!user@host.net31.example", Action::Deny),
        ("fallthrough", "nick!user@host.elsewhere.example", Action::Allow),
    ] {
        assert_eq!(acl.check(subject), expected);
        c.bench_function(BenchmarkId::new("check", name), |b| {
            b.iter(|| black_box(&acl).check(black_box(subject)));
        });
    }
}
