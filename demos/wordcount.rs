use triedict::trie::StringTrie;

fn main() {
    const TEXT: &str = "the quick brown fox jumps over the lazy dog \
        the dog barks and the fox runs";

    // Count word occurrences: insert on first sight, increment after
    let mut counts: StringTrie<usize> = StringTrie::new();
    for word in TEXT.split_whitespace() {
        if counts.increment(word.chars()).is_err() {
            counts.insert(word.chars(), 1);
        }
    }

    // Print the counts in lexicographic word order
    for pair in counts.iter() {
        println!("{}: {}", pair.key.iter().collect::<String>(), pair.value);
    }

    assert_eq!(counts.get("the".chars()), Ok(&4));
    assert_eq!(counts.get("fox".chars()), Ok(&2));
}
