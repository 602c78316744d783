//! Benchmark the four rule programs over representative word lists

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graupel_core::{language, StemContext};
use std::hint::black_box;

const ROMANIAN: &[&str] = &[
    "absolutul",
    "alegerile",
    "cuvintele",
    "marturisitoare",
    "importanta",
    "jucarii",
];

const RUSSIAN: &[&str] = &[
    "дома",
    "красивая",
    "студентами",
    "прекраснейшего",
    "сделавшись",
    "важность",
];

const SPANISH: &[&str] = &[
    "absoluto",
    "generosidad",
    "tranquilamente",
    "comiéndoselo",
    "construyeron",
    "canciones",
];

const TURKISH: &[&str] = &[
    "kitaplar",
    "arabalarında",
    "çocuklarımın",
    "türkiyedeki",
    "yazmışsınız",
    "kitaplığı",
];

fn bench_languages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem");
    let programs: &[(&str, fn(&mut StemContext) -> bool, &[&str])] = &[
        ("romanian", language::romanian::stem, ROMANIAN),
        ("russian", language::russian::stem, RUSSIAN),
        ("spanish", language::spanish::stem, SPANISH),
        ("turkish", language::turkish::stem, TURKISH),
    ];

    for (name, program, words) in programs {
        group.bench_with_input(BenchmarkId::from_parameter(name), words, |b, words| {
            let mut env = StemContext::new();
            b.iter(|| {
                for word in *words {
                    env.set_current(black_box(word));
                    program(&mut env);
                    black_box(env.get_current());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_languages);
criterion_main!(benches);
