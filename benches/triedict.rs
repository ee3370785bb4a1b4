use triedict::trie::{PrefixTrie, StringTrie, TrieAtom};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{distributions::Alphanumeric, distributions::Uniform, thread_rng, Rng};

fn get_words() -> Vec<String> {
    const TEXT: &str = "busy old fool unruly sun why dost thou thus through \
        windows and through curtains call on us must to thy motions lovers \
        seasons run saucy pedantic wretch go chide late school boys and sour \
        prentices go tell court huntsmen that the king will ride call country \
        ants to harvest offices love all alike no season knows nor clime nor \
        hours days months which are the rags of time";
    TEXT.split_whitespace().map(|s| s.to_string()).collect()
}

fn make_trie(words: &[String]) -> StringTrie<usize> {
    let mut trie = PrefixTrie::new();
    for w in words {
        let len = w.len();
        trie.insert(w.chars(), len);
    }
    trie
}

fn trie_insert(b: &mut Criterion) {
    let words = get_words();
    b.bench_function("trie insert", |b| b.iter(|| make_trie(&words)));
}

fn trie_get(b: &mut Criterion) {
    let words = get_words();
    let trie = make_trie(&words);
    b.bench_function("trie get", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| trie.get(w.chars()).is_ok())
                .count()
        })
    });
}

fn trie_insert_remove(b: &mut Criterion) {
    let words = get_words();

    b.bench_function("trie remove", |b| {
        b.iter(|| {
            let mut trie = make_trie(&words);
            for w in &words {
                let _ = trie.remove(w.chars());
            }
        });
    });
}

fn trie_keys(b: &mut Criterion) {
    let words = get_words();
    let trie = make_trie(&words);
    b.bench_function("trie keys", |b| b.iter(|| trie.keys::<String>()));
}

fn trie_increment(b: &mut Criterion) {
    let words = get_words();
    b.bench_function("trie increment", |b| {
        b.iter_batched(
            || make_trie(&words),
            |mut trie| {
                for w in &words {
                    let _ = trie.increment(w.chars());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut trie = StringTrie::<usize>::new();
    c.bench_function("inserting: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || {
                thread_rng()
                    .sample_iter(&Alphanumeric)
                    .take(thread_rng().gen_range(1..=512))
                    .map(char::from)
                    .collect::<Vec<char>>()
            },
            |input| {
                let len = input.len();
                insert_trie(&mut trie, input, len)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("contains: char items (len: 1..=512)", |b| {
        b.iter_batched(
            || {
                thread_rng()
                    .sample_iter(&Alphanumeric)
                    .take(thread_rng().gen_range(1..=512))
                    .map(char::from)
            },
            |input| contains_trie(&trie, input),
            BatchSize::SmallInput,
        )
    });
    trie.clear();
}

fn iterate(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 1000;

    let mut group = c.benchmark_group("iterate");
    for size in [
        BASE_SIZE,
        2 * BASE_SIZE,
        4 * BASE_SIZE,
        8 * BASE_SIZE,
        16 * BASE_SIZE,
    ]
    .iter()
    {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("consuming iteration (char)", size),
            size,
            |b, &size| {
                let mut trie = StringTrie::<usize>::new();
                for _i in 0..POPULATION_SIZE {
                    let entry: Vec<char> = thread_rng()
                        .sample_iter(&Alphanumeric)
                        .take(thread_rng().gen_range(1..=size))
                        .map(char::from)
                        .collect();
                    let len = entry.len();
                    trie.insert(entry, len);
                }
                b.iter_batched(|| trie.clone(), iterate_trie, BatchSize::SmallInput)
            },
        );
        group.bench_with_input(
            BenchmarkId::new("reference iteration (char)", size),
            size,
            |b, &size| {
                let mut trie = StringTrie::<usize>::new();
                for _i in 0..POPULATION_SIZE {
                    let entry: Vec<char> = thread_rng()
                        .sample_iter(&Alphanumeric)
                        .take(thread_rng().gen_range(1..=size))
                        .map(char::from)
                        .collect();
                    let len = entry.len();
                    trie.insert(entry, len);
                }
                b.iter_batched(|| {}, |_| iterate_trie_ref(&trie), BatchSize::SmallInput)
            },
        );
    }
    group.finish();
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;
    static POPULATION_SIZE: usize = 10000;

    let mut group = c.benchmark_group("search");
    for size in [
        BASE_SIZE,
        2 * BASE_SIZE,
        4 * BASE_SIZE,
        8 * BASE_SIZE,
        16 * BASE_SIZE,
    ]
    .iter()
    {
        let range = Uniform::new_inclusive(1, *size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("random find (usize)", size),
            size,
            |b, &size| {
                let mut trie = PrefixTrie::<usize, usize>::new();
                for _i in 0..POPULATION_SIZE {
                    let entry: Vec<usize> = thread_rng()
                        .sample_iter(range)
                        .take(thread_rng().gen_range(1..=size))
                        .collect();
                    let len = entry.len();
                    trie.insert(entry, len);
                }
                b.iter_batched(
                    || {
                        thread_rng()
                            .sample_iter(range)
                            .take(thread_rng().gen_range(1..=size))
                    },
                    |input| contains_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("always find (char)", size),
            size,
            |b, &size| {
                let mut trie = StringTrie::<usize>::new();
                let mut searches: Vec<Vec<char>> = vec![];
                for _i in 0..POPULATION_SIZE {
                    let entry: Vec<char> = thread_rng()
                        .sample_iter(&Alphanumeric)
                        .take(thread_rng().gen_range(1..=size))
                        .map(char::from)
                        .collect();
                    searches.push(entry.clone());
                    let len = entry.len();
                    trie.insert(entry, len);
                }
                b.iter_batched(
                    || searches[thread_rng().gen_range(1..POPULATION_SIZE)].clone(),
                    |input| contains_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    trie_insert,
    trie_get,
    trie_insert_remove,
    trie_keys,
    trie_increment,
    criterion_benchmark,
    search,
    iterate
);
criterion_main!(benches);

fn insert_trie<S: IntoIterator<Item = A>, A: TrieAtom, V>(
    trie: &mut PrefixTrie<A, V>,
    input: S,
    value: V,
) {
    trie.insert(input, value);
}

fn contains_trie<S: IntoIterator<Item = A>, A: TrieAtom, V>(trie: &PrefixTrie<A, V>, input: S) {
    trie.contains(input);
}

fn iterate_trie<A: TrieAtom, V>(trie: PrefixTrie<A, V>) {
    trie.into_iter().for_each(|_x| ());
}

fn iterate_trie_ref<A: TrieAtom, V>(trie: &PrefixTrie<A, V>) {
    trie.iter().for_each(|_x| ());
}
