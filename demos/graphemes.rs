use triedict::trie::PrefixTrie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = PrefixTrie::new();

    // Insert some graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    let count = input.clone().count();
    trie.insert(input.clone(), count);
    assert!(trie.contains(input.clone()));
    assert_eq!(trie.get(input), Ok(&count));
}
